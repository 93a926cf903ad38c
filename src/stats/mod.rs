//! Throughput statistics and target projection

pub mod eta;
mod rate;

pub use eta::{estimate, Eta, TargetProgress};
pub use rate::{instantaneous, RateSample, RateTracker};
