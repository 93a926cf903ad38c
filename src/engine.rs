//! Enumeration engine
//!
//! One `Engine` owns every piece of mutable run state: the attempt counter,
//! the rate tracker, the found state and the refresh timer. The enumeration
//! loop is its only mutator; presenters receive snapshots by reference.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::dashboard::Presenter;
use crate::enumerate::encode;
use crate::error::Result;
use crate::stats::{estimate, RateTracker};
use crate::types::{EngineConfig, Snapshot, TargetSnapshot, WindowRate};

/// Target string and its ordinal index, fixed at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub text: String,
    pub index: u128,
}

/// When the target string was enumerated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoundState {
    pub at: Instant,
    pub after: Duration,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    Interrupted,
    TargetFound,
    AttemptLimit,
    Exhausted,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::Interrupted => write!(f, "interrupted"),
            StopReason::TargetFound => write!(f, "target found"),
            StopReason::AttemptLimit => write!(f, "attempt limit reached"),
            StopReason::Exhausted => write!(f, "candidates exhausted"),
        }
    }
}

/// Final state of a run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunOutcome {
    pub reason: StopReason,
    pub snapshot: Snapshot,
}

pub struct Engine {
    config: EngineConfig,
    target: Option<Target>,
    count: u64,
    started: Instant,
    started_at: DateTime<Local>,
    tracker: RateTracker,
    found: Option<FoundState>,
    last_refresh: Option<Instant>,
}

impl Engine {
    /// Create an engine starting now.
    ///
    /// A blank target disables tracking. So does a target that cannot be
    /// encoded over the configured alphabet; that case is logged, not returned.
    pub fn new(config: EngineConfig, target: Option<&str>) -> Result<Self> {
        Self::starting_at(config, target, Instant::now())
    }

    /// Create an engine whose clock starts at `started`
    pub fn starting_at(config: EngineConfig, target: Option<&str>, started: Instant) -> Result<Self> {
        config.validate()?;

        let target = match target.map(str::trim).filter(|t| !t.is_empty()) {
            None => None,
            Some(text) => match encode(text, &config.alphabet) {
                Ok(index) => {
                    tracing::info!(target_text = %text, index = %index, "Tracking target");
                    Some(Target {
                        text: text.to_string(),
                        index,
                    })
                }
                Err(e) if e.is_unencodable() => {
                    tracing::warn!(target_text = %text, error = %e, "Target cannot be encoded, progress tracking disabled");
                    None
                }
                Err(e) => return Err(e),
            },
        };

        let tracker = RateTracker::new(&config.windows);
        Ok(Self {
            config,
            target,
            count: 0,
            started,
            started_at: Local::now(),
            tracker,
            found: None,
            last_refresh: None,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn target(&self) -> Option<&Target> {
        self.target.as_ref()
    }

    pub fn attempts(&self) -> u64 {
        self.count
    }

    pub fn started(&self) -> Instant {
        self.started
    }

    pub fn found(&self) -> Option<FoundState> {
        self.found
    }

    pub fn peak_rate(&self) -> f64 {
        self.tracker.peak()
    }

    /// Count one candidate produced at `now`.
    ///
    /// Returns a fresh snapshot when more than `refresh_interval` has passed
    /// since the previous one (always on the first call).
    pub fn observe(&mut self, candidate: &str, now: Instant) -> Option<Snapshot> {
        self.count += 1;

        let snapshot = if self.refresh_due(now) {
            self.last_refresh = Some(now);
            Some(self.snapshot(candidate, now))
        } else {
            None
        };

        if self.found.is_none() && self.target.as_ref().is_some_and(|t| t.text == candidate) {
            let after = now.saturating_duration_since(self.started);
            self.found = Some(FoundState { at: now, after });
            tracing::info!(
                attempts = self.count,
                seconds = after.as_secs_f64(),
                "Target found"
            );
        }

        snapshot
    }

    fn refresh_due(&self, now: Instant) -> bool {
        match self.last_refresh {
            None => true,
            Some(last) => now.saturating_duration_since(last) > self.config.refresh_interval,
        }
    }

    /// Recompute every figure as of `now`.
    ///
    /// Raises the peak rate and records a rate sample, so calls should follow
    /// the refresh cadence.
    pub(crate) fn snapshot(&mut self, current_attempt: &str, now: Instant) -> Snapshot {
        let since_start = now.saturating_duration_since(self.started).as_secs_f64();

        let rate_live = self.tracker.observe(since_start, self.count);
        self.tracker.record(since_start, self.count);

        let windows: Vec<WindowRate> = self
            .tracker
            .averages(since_start)
            .into_iter()
            .map(|(window_secs, rate)| WindowRate { window_secs, rate })
            .collect();
        let eta_rate = self.tracker.average(since_start, self.config.eta_window());

        let time_to_find = self.found.map(|f| f.after.as_secs_f64());
        let target = self.target.as_ref().map(|t| TargetSnapshot {
            text: t.text.clone(),
            index: t.index,
            progress: estimate(Some(t.index), self.count, eta_rate),
            time_to_find,
        });

        Snapshot {
            started_at: self.started_at,
            elapsed_secs: time_to_find.unwrap_or(since_start),
            current_attempt: current_attempt.to_string(),
            attempts: self.count,
            rate_live,
            rate_peak: self.tracker.peak(),
            windows,
            target,
        }
    }

    /// Drive `candidates` until stopped, rendering each refresh.
    ///
    /// The loop ends when `stop` is raised, when the attempt limit is hit, when
    /// the target is found (unless `keep_running`), or when the candidates run
    /// out. The final snapshot is handed to `Presenter::finish`.
    pub fn run<I, P>(&mut self, candidates: I, presenter: &mut P, stop: &AtomicBool) -> RunOutcome
    where
        I: IntoIterator<Item = String>,
        P: Presenter + ?Sized,
    {
        tracing::info!(
            base = self.config.alphabet.base(),
            windows = ?self.config.windows,
            tracking = self.target.is_some(),
            "Enumeration started"
        );

        let mut candidates = candidates.into_iter();
        let mut last = String::new();

        let reason = loop {
            if stop.load(Ordering::Relaxed) {
                break StopReason::Interrupted;
            }
            let Some(candidate) = candidates.next() else {
                break StopReason::Exhausted;
            };

            if let Some(snapshot) = self.observe(&candidate, Instant::now()) {
                presenter.render(&snapshot);
            }
            last = candidate;

            if self.found.is_some() && !self.config.keep_running {
                break StopReason::TargetFound;
            }
            if self.config.max_attempts.is_some_and(|limit| self.count >= limit) {
                break StopReason::AttemptLimit;
            }
        };

        let snapshot = self.snapshot(&last, Instant::now());
        presenter.finish(&snapshot);
        tracing::info!(reason = %reason, attempts = self.count, "Enumeration stopped");

        RunOutcome { reason, snapshot }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::SilentPresenter;
    use crate::enumerate::{Alphabet, AlphabetPreset, Candidates};
    use crate::stats::{Eta, TargetProgress};

    fn digits_config() -> EngineConfig {
        EngineConfig {
            alphabet: Alphabet::preset(AlphabetPreset::Digits),
            ..Default::default()
        }
    }

    #[derive(Default)]
    struct Recorder {
        rendered: Vec<Snapshot>,
        finished: Option<Snapshot>,
    }

    impl Presenter for Recorder {
        fn render(&mut self, snapshot: &Snapshot) {
            self.rendered.push(snapshot.clone());
        }

        fn finish(&mut self, snapshot: &Snapshot) {
            self.finished = Some(snapshot.clone());
        }
    }

    #[test]
    fn test_target_encoding() {
        let engine = Engine::new(digits_config(), Some(" 42 ")).unwrap();
        assert_eq!(
            engine.target(),
            Some(&Target {
                text: "42".to_string(),
                index: 42
            })
        );
    }

    #[test]
    fn test_blank_or_unencodable_target_disables_tracking() {
        assert!(Engine::new(digits_config(), Some("   ")).unwrap().target().is_none());
        assert!(Engine::new(digits_config(), None).unwrap().target().is_none());
        assert!(Engine::new(digits_config(), Some("4a")).unwrap().target().is_none());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = EngineConfig {
            windows: Vec::new(),
            ..digits_config()
        };
        assert!(Engine::new(config, None).is_err());
    }

    #[test]
    fn test_refresh_gate() {
        let start = Instant::now();
        let mut engine = Engine::starting_at(digits_config(), None, start).unwrap();

        assert!(engine.observe("0", start).is_some());
        assert!(engine.observe("1", start + Duration::from_millis(100)).is_none());
        assert!(engine.observe("2", start + Duration::from_millis(200)).is_none());
        let snapshot = engine.observe("3", start + Duration::from_millis(201));
        assert_eq!(snapshot.map(|s| s.attempts), Some(4));
        assert_eq!(engine.attempts(), 4);
    }

    #[test]
    fn test_snapshot_rates() {
        let start = Instant::now();
        let mut engine = Engine::starting_at(digits_config(), None, start).unwrap();

        engine.observe("0", start);
        for _ in 0..99 {
            engine.observe("x", start + Duration::from_millis(100));
        }
        let snapshot = engine
            .observe("y", start + Duration::from_secs(10))
            .expect("gate should open after 10s");

        assert_eq!(snapshot.attempts, 101);
        assert!((snapshot.rate_live - 10.1).abs() < 1e-9);
        assert_eq!(snapshot.rate_peak, snapshot.rate_live);
        assert_eq!(snapshot.windows.len(), 3);
        // first sample recorded at t=0 with count 1
        assert!((snapshot.windows[0].rate - 10.0).abs() < 1e-9);
        assert!(snapshot.target.is_none());
    }

    #[test]
    fn test_found_state_is_set_once() {
        let start = Instant::now();
        let mut engine = Engine::starting_at(digits_config(), Some("7"), start).unwrap();

        for (i, candidate) in Candidates::new(digits_config().alphabet).take(30).enumerate() {
            engine.observe(&candidate, start + Duration::from_secs(i as u64));
        }

        let found = engine.found().expect("target should be found");
        assert_eq!(found.after, Duration::from_secs(7));

        let snapshot = engine.snapshot("zz", start + Duration::from_secs(100));
        assert!(snapshot.target_found());
        assert_eq!(snapshot.elapsed_secs, 7.0);
    }

    #[test]
    fn test_progress_flips_to_reached_and_stays() {
        let start = Instant::now();
        let mut engine = Engine::starting_at(digits_config(), Some("42"), start).unwrap();

        let mut statuses = Vec::new();
        for (i, candidate) in Candidates::new(digits_config().alphabet).take(60).enumerate() {
            let now = start + Duration::from_secs(i as u64 + 1);
            engine.observe(&candidate, now);
            let snapshot = engine.snapshot(&candidate, now);
            let progress = snapshot.target.map(|t| t.progress);
            statuses.push(progress.map(|p| p.is_reached()));
        }

        // count is 1-based: the 42nd attempt reaches index 42
        assert_eq!(statuses[40], Some(false));
        assert!(statuses[41..].iter().all(|s| *s == Some(true)));

        // "42" is the 53rd candidate: 10 single digits, then "00".."42"
        let found = engine.found().expect("target enumerated");
        assert_eq!(found.after, Duration::from_secs(53));
    }

    #[test]
    fn test_pending_progress_figures() {
        let start = Instant::now();
        let mut engine = Engine::starting_at(digits_config(), Some("99"), start).unwrap();
        engine.observe("0", start);
        engine.observe("1", start + Duration::from_secs(1));
        let snapshot = engine.snapshot("1", start + Duration::from_secs(2));

        match snapshot.target.map(|t| t.progress) {
            Some(TargetProgress::Pending { remaining, percent, .. }) => {
                assert_eq!(remaining, 97);
                assert!((percent - 2.0 / 99.0 * 100.0).abs() < 1e-9);
            }
            other => panic!("unexpected progress: {:?}", other),
        }
    }

    #[test]
    fn test_eta_follows_shortest_window() {
        let config = EngineConfig {
            windows: vec![900, 300],
            ..digits_config()
        };
        let start = Instant::now();
        let mut engine = Engine::starting_at(config, Some("99999999"), start).unwrap();

        // 100 attempts over the first 500s, then 10_000 more by t=600s
        engine.observe("0", start);
        for _ in 0..99 {
            engine.observe("0", start + Duration::from_millis(1));
        }
        engine.observe("0", start + Duration::from_secs(500));
        for _ in 0..9_999 {
            engine.observe("0", start + Duration::from_millis(500_001));
        }
        let snapshot = engine
            .observe("0", start + Duration::from_secs(600))
            .expect("gate should open at 600s");

        assert_eq!(snapshot.attempts, 10_101);
        assert_eq!(snapshot.windows[0].window_secs, 900);
        assert!((snapshot.windows[0].rate - 10_100.0 / 600.0).abs() < 1e-9);
        assert_eq!(snapshot.windows[1].rate, 100.0);

        match snapshot.target.map(|t| t.progress) {
            Some(TargetProgress::Pending { remaining, eta, .. }) => {
                assert_eq!(remaining, 99_999_999 - 10_101);
                assert_eq!(eta, Eta::Seconds(remaining as f64 / 100.0));
            }
            other => panic!("unexpected progress: {:?}", other),
        }
    }

    #[test]
    fn test_run_stops_on_target() {
        let mut engine = Engine::new(digits_config(), Some("42")).unwrap();
        let stop = AtomicBool::new(false);
        let mut recorder = Recorder::default();

        let outcome = engine.run(Candidates::new(digits_config().alphabet), &mut recorder, &stop);

        assert_eq!(outcome.reason, StopReason::TargetFound);
        assert_eq!(outcome.snapshot.attempts, 53);
        assert_eq!(outcome.snapshot.current_attempt, "42");
        assert!(outcome.snapshot.target_found());
        assert!(!recorder.rendered.is_empty());
        assert_eq!(recorder.finished, Some(outcome.snapshot));
    }

    #[test]
    fn test_run_keep_running_until_limit() {
        let config = EngineConfig {
            keep_running: true,
            max_attempts: Some(500),
            ..digits_config()
        };
        let mut engine = Engine::new(config, Some("42")).unwrap();
        let stop = AtomicBool::new(false);

        let outcome = engine.run(Candidates::new(digits_config().alphabet), &mut SilentPresenter, &stop);

        assert_eq!(outcome.reason, StopReason::AttemptLimit);
        assert_eq!(outcome.snapshot.attempts, 500);
        assert!(outcome.snapshot.target_found());
    }

    #[test]
    fn test_run_interrupted() {
        let mut engine = Engine::new(digits_config(), None).unwrap();
        let stop = AtomicBool::new(true);

        let outcome = engine.run(Candidates::new(digits_config().alphabet), &mut SilentPresenter, &stop);

        assert_eq!(outcome.reason, StopReason::Interrupted);
        assert_eq!(outcome.snapshot.attempts, 0);
    }

    #[test]
    fn test_run_exhausted_finite_input() {
        let mut engine = Engine::new(digits_config(), None).unwrap();
        let stop = AtomicBool::new(false);
        let input = vec!["a".to_string(), "b".to_string()];

        let outcome = engine.run(input, &mut SilentPresenter, &stop);

        assert_eq!(outcome.reason, StopReason::Exhausted);
        assert_eq!(outcome.snapshot.attempts, 2);
        assert_eq!(outcome.snapshot.current_attempt, "b");
    }
}
