//! Progress and ETA toward a target ordinal index

use std::fmt;

use serde::Serialize;

use crate::format::format_duration;

/// Projected time to reach the target
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "seconds", rename_all = "lowercase")]
pub enum Eta {
    /// No positive rate to project from
    Unknown,
    Seconds(f64),
}

impl fmt::Display for Eta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Eta::Unknown => write!(f, "N/A"),
            Eta::Seconds(seconds) => write!(f, "{}", format_duration(*seconds)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum TargetProgress {
    Pending {
        remaining: u128,
        /// Share of the target index already counted, 0-100
        percent: f64,
        eta: Eta,
    },
    Reached,
}

impl TargetProgress {
    pub fn is_reached(&self) -> bool {
        matches!(self, TargetProgress::Reached)
    }
}

/// Project progress toward `target_index` from `count` attempts at `rate` per second.
///
/// An absent target, or a count at or past it, is reported as reached.
pub fn estimate(target_index: Option<u128>, count: u64, rate: f64) -> TargetProgress {
    let Some(target) = target_index else {
        return TargetProgress::Reached;
    };
    let count = count as u128;
    if count >= target {
        return TargetProgress::Reached;
    }

    let remaining = target - count;
    let eta = if rate > 0.0 {
        Eta::Seconds(remaining as f64 / rate)
    } else {
        Eta::Unknown
    };

    TargetProgress::Pending {
        remaining,
        percent: count as f64 / target as f64 * 100.0,
        eta,
    }
}
