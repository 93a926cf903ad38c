use clap::Parser;
use std::time::Duration;

use crate::enumerate::Alphabet;
use crate::types::EngineConfig;

#[derive(Parser, Debug)]
#[command(name = "brutalforce")]
#[command(version)]
#[command(about = "Enumerate every string over an alphabet with a live throughput dashboard", long_about = None)]
pub struct Args {
    /// Target string to track progress and ETA toward.
    /// Prompted for on a terminal when omitted; empty disables tracking.
    #[arg(short, long, env = "BRUTALFORCE_TARGET")]
    pub target: Option<String>,

    /// Alphabet: a preset (digits, lower, alnum, full) or a literal symbol string
    #[arg(short, long, env = "BRUTALFORCE_ALPHABET", default_value = "full")]
    pub alphabet: Alphabet,

    /// Averaging windows in seconds, comma separated; the shortest drives the ETA
    #[arg(
        short,
        long,
        env = "BRUTALFORCE_WINDOWS",
        value_delimiter = ',',
        default_value = "300,600,900"
    )]
    pub windows: Vec<u64>,

    /// Minimum milliseconds between two dashboard snapshots
    #[arg(long, env = "BRUTALFORCE_REFRESH_MS", default_value_t = 200)]
    pub refresh_ms: u64,

    /// Maximum dashboard redraws per second
    #[arg(long, env = "BRUTALFORCE_MAX_FPS", default_value_t = 5)]
    pub max_fps: u8,

    /// Stop after this many attempts
    #[arg(long, env = "BRUTALFORCE_MAX_ATTEMPTS")]
    pub max_attempts: Option<u64>,

    /// Keep enumerating after the target has been found
    #[arg(long)]
    pub keep_running: bool,

    /// Never prompt for a target
    #[arg(long)]
    pub no_prompt: bool,

    /// Do not draw the live dashboard
    #[arg(long)]
    pub no_dashboard: bool,

    /// Print the final snapshot as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

impl Args {
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            alphabet: self.alphabet.clone(),
            windows: self.windows.clone(),
            refresh_interval: Duration::from_millis(self.refresh_ms),
            max_refresh_hz: self.max_fps,
            max_attempts: self.max_attempts,
            keep_running: self.keep_running,
        }
    }
}
