//! Core types and structures for brutalforce

use chrono::{DateTime, Local};
use serde::Serialize;
use std::time::Duration;

use crate::enumerate::Alphabet;
use crate::config_error;
use crate::error::{BrutalForceError, Result};
use crate::stats::TargetProgress;

/// Default averaging windows: 5, 10 and 15 minutes
pub const DEFAULT_WINDOWS: [u64; 3] = [300, 600, 900];

/// Configuration for an enumeration run
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub alphabet: Alphabet,
    /// Averaging windows in seconds; the shortest one drives the ETA
    pub windows: Vec<u64>,
    /// Minimum time between two snapshots
    pub refresh_interval: Duration,
    /// Upper bound on dashboard redraws per second
    pub max_refresh_hz: u8,
    /// Stop after this many attempts
    pub max_attempts: Option<u64>,
    /// Keep enumerating after the target has been found
    pub keep_running: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::default(),
            windows: DEFAULT_WINDOWS.to_vec(),
            refresh_interval: Duration::from_millis(200),
            max_refresh_hz: 5,
            max_attempts: None,
            keep_running: false,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        if self.windows.is_empty() {
            return Err(BrutalForceError::config("at least one averaging window is required"));
        }
        if let Some(position) = self.windows.iter().position(|&w| w == 0) {
            return Err(config_error!("averaging windows must be longer than 0s (window #{})", position + 1));
        }
        if self.max_refresh_hz == 0 {
            return Err(BrutalForceError::config("refresh rate must be at least 1 Hz"));
        }
        Ok(())
    }

    /// Window used for ETA projection: the shortest, fastest to react
    pub fn eta_window(&self) -> u64 {
        self.windows.iter().copied().min().unwrap_or(DEFAULT_WINDOWS[0])
    }
}

/// Average rate over one trailing window
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindowRate {
    pub window_secs: u64,
    pub rate: f64,
}

/// Target tracking figures
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetSnapshot {
    pub text: String,
    pub index: u128,
    pub progress: TargetProgress,
    /// Seconds from start until the target was enumerated
    pub time_to_find: Option<f64>,
}

/// Figures handed to a presenter on every refresh
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub started_at: DateTime<Local>,
    pub elapsed_secs: f64,
    pub current_attempt: String,
    pub attempts: u64,
    pub rate_live: f64,
    pub rate_peak: f64,
    pub windows: Vec<WindowRate>,
    pub target: Option<TargetSnapshot>,
}

impl Snapshot {
    /// Whether the target string itself has been enumerated
    pub fn target_found(&self) -> bool {
        self.target
            .as_ref()
            .is_some_and(|t| t.time_to_find.is_some())
    }
}
