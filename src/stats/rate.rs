//! Sliding-window throughput tracking

use std::collections::VecDeque;

use serde::Serialize;

/// A cumulative attempt count observed at `at` seconds after engine start
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateSample {
    pub at: f64,
    pub count: u64,
}

/// `count / elapsed`, or 0 when no time has passed
pub fn instantaneous(elapsed: f64, count: u64) -> f64 {
    if elapsed > 0.0 {
        count as f64 / elapsed
    } else {
        0.0
    }
}

/// Keeps samples for the longest configured window and the peak rate seen so far.
#[derive(Debug, Clone)]
pub struct RateTracker {
    windows: Vec<u64>,
    retention: f64,
    samples: VecDeque<RateSample>,
    peak: f64,
}

impl RateTracker {
    /// `windows` are trailing spans in seconds; the largest bounds retention
    pub fn new(windows: &[u64]) -> Self {
        let retention = windows.iter().copied().max().unwrap_or(0) as f64;
        Self {
            windows: windows.to_vec(),
            retention,
            samples: VecDeque::new(),
            peak: 0.0,
        }
    }

    pub fn windows(&self) -> &[u64] {
        &self.windows
    }

    pub fn samples(&self) -> impl Iterator<Item = &RateSample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Highest instantaneous rate observed
    pub fn peak(&self) -> f64 {
        self.peak
    }

    /// Compute the instantaneous rate and raise the peak if it is exceeded
    pub fn observe(&mut self, elapsed: f64, count: u64) -> f64 {
        let rate = instantaneous(elapsed, count);
        if rate > self.peak {
            self.peak = rate;
        }
        rate
    }

    /// Append a sample, then drop samples older than the longest window.
    ///
    /// A sample that does not move past the newest timestamp is merged into it.
    pub fn record(&mut self, now: f64, count: u64) {
        match self.samples.back().copied() {
            Some(last) if now <= last.at => {
                if let Some(newest) = self.samples.back_mut() {
                    newest.count = last.count.max(count);
                }
            }
            Some(last) => self.samples.push_back(RateSample {
                at: now,
                count: count.max(last.count),
            }),
            None => self.samples.push_back(RateSample { at: now, count }),
        }

        let cutoff = now - self.retention;
        while self.samples.front().is_some_and(|s| s.at < cutoff) {
            self.samples.pop_front();
        }
    }

    /// Average rate over the trailing `window` seconds as of `now`.
    ///
    /// The span runs from the oldest sample inside the window to the newest
    /// sample overall.
    pub fn average(&self, now: f64, window: u64) -> f64 {
        let cutoff = now - window as f64;
        let Some(first) = self.samples.iter().find(|s| s.at >= cutoff) else {
            return 0.0;
        };
        let Some(last) = self.samples.back() else {
            return 0.0;
        };

        let span = last.at - first.at;
        if span == 0.0 {
            return 0.0;
        }
        last.count.saturating_sub(first.count) as f64 / span
    }

    /// Averages for every configured window, in configuration order
    pub fn averages(&self, now: f64) -> Vec<(u64, f64)> {
        self.windows
            .iter()
            .map(|&window| (window, self.average(now, window)))
            .collect()
    }
}
