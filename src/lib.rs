//! BrutalForce - exhaustive candidate enumeration with live statistics
//!
//! Enumerates every string over a fixed alphabet, shortest first, and keeps
//! throughput figures (live, peak and windowed averages) plus an optional
//! progress and ETA projection toward a target string.

pub mod cli;
pub mod dashboard;
pub mod engine;
pub mod enumerate;
pub mod error;
pub mod format;
pub mod stats;
pub mod types;

// Re-export commonly used types
pub use error::{BrutalForceError, Result};
pub use types::{EngineConfig, Snapshot, TargetSnapshot, WindowRate};

// Re-export main functionality
pub use dashboard::{Presenter, SilentPresenter, TerminalDashboard};
pub use engine::{Engine, RunOutcome, StopReason};
pub use enumerate::{Alphabet, AlphabetPreset, Candidates};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
