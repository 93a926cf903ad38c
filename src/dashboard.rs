//! Presenters that turn snapshots into a live view

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::format::{format_clock, format_duration, format_magnitude};
use crate::stats::TargetProgress;
use crate::types::Snapshot;

pub const TITLE: &str = "BrutalForce 3000";

/// Consumer of engine snapshots
pub trait Presenter {
    /// Show a refreshed snapshot
    fn render(&mut self, snapshot: &Snapshot);

    /// Show the final snapshot once the run has stopped
    fn finish(&mut self, snapshot: &Snapshot) {
        self.render(snapshot);
    }
}

/// Presenter that discards every snapshot
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentPresenter;

impl Presenter for SilentPresenter {
    fn render(&mut self, _snapshot: &Snapshot) {}

    fn finish(&mut self, _snapshot: &Snapshot) {}
}

/// Live dashboard drawn on stderr.
///
/// Redraws are capped at `max_refresh_hz` by the draw target, so a snapshot
/// produced between two frames simply replaces the pending one.
pub struct TerminalDashboard {
    bar: ProgressBar,
}

impl TerminalDashboard {
    pub fn new(max_refresh_hz: u8) -> Self {
        let bar = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr_with_hz(max_refresh_hz));
        let style = ProgressStyle::with_template("{msg}").unwrap_or_else(|e| {
            tracing::warn!("Failed to build dashboard template: {}. Using default.", e);
            ProgressStyle::default_spinner()
        });
        bar.set_style(style);
        Self { bar }
    }
}

impl Presenter for TerminalDashboard {
    fn render(&mut self, snapshot: &Snapshot) {
        self.bar.set_message(render_panel(snapshot));
    }

    fn finish(&mut self, snapshot: &Snapshot) {
        self.bar.finish_with_message(render_panel(snapshot));
    }
}

/// Label for a window length: whole minutes as `5m`, anything else in seconds
pub fn window_label(window_secs: u64) -> String {
    if window_secs % 60 == 0 {
        format!("{}m", window_secs / 60)
    } else {
        format!("{}s", window_secs)
    }
}

fn rate_cell(rate: f64) -> String {
    format!("{:.2} ({})", rate, format_magnitude(rate))
}

/// Two-column text table of every figure in `snapshot`
pub fn render_panel(snapshot: &Snapshot) -> String {
    let mut rows: Vec<(String, String)> = vec![
        (
            "Start Time:".into(),
            snapshot.started_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        ),
        ("Elapsed:".into(), format_clock(snapshot.elapsed_secs)),
        ("Current Attempt:".into(), snapshot.current_attempt.clone()),
        (
            "Total Attempts:".into(),
            format!("{} ({})", snapshot.attempts, format_magnitude(snapshot.attempts as f64)),
        ),
        ("Attempts/sec (live):".into(), rate_cell(snapshot.rate_live)),
        ("Peak Attempts/sec:".into(), rate_cell(snapshot.rate_peak)),
    ];

    for window in &snapshot.windows {
        rows.push((
            format!("Avg Attempts/sec ({}):", window_label(window.window_secs)),
            rate_cell(window.rate),
        ));
    }

    if let Some(target) = &snapshot.target {
        rows.push(("Target:".into(), target.text.clone()));
        match target.progress {
            TargetProgress::Pending { percent, eta, .. } => {
                rows.push((
                    "Progress to Target:".into(),
                    format!("{}/{} ({:.2}%)", snapshot.attempts, target.index, percent),
                ));
                rows.push(("ETA to Target:".into(), eta.to_string()));
            }
            TargetProgress::Reached => {
                rows.push(("Status:".into(), "FOUND!".into()));
                if let Some(seconds) = target.time_to_find {
                    rows.push(("Time to Find:".into(), format_duration(seconds)));
                }
            }
        }
    }

    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let mut panel = format!("{}\n{}\n", TITLE, "═".repeat(TITLE.len()));
    for (label, value) in rows {
        panel.push_str(&format!("{:>width$} {}\n", label, value, width = width));
    }
    panel
}
