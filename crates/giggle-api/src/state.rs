use std::sync::Arc;
use std::time::Duration;

use giggle_store::SubmissionRepository;
use rand::Rng;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub repo: SubmissionRepository,
    /// Artificial processing delay applied to submission intake.
    pub intake_delay: DelayRange,
}

impl AppStateInner {
    pub fn new(repo: SubmissionRepository, intake_delay: DelayRange) -> AppState {
        Arc::new(Self { repo, intake_delay })
    }
}

/// Half-open range `[min, max)` a delay is drawn from uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayRange {
    min: Duration,
    max: Duration,
}

impl DelayRange {
    /// `max` below `min` collapses to a fixed delay of `min`.
    pub fn new(min: Duration, max: Duration) -> Self {
        Self {
            min,
            max: max.max(min),
        }
    }

    pub fn from_millis(min_ms: u64, max_ms: u64) -> Self {
        Self::new(Duration::from_millis(min_ms), Duration::from_millis(max_ms))
    }

    pub fn none() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    pub fn sample(&self) -> Duration {
        if self.max <= self.min {
            return self.min;
        }
        rand::rng().random_range(self.min..self.max)
    }
}

impl Default for DelayRange {
    fn default() -> Self {
        Self::from_millis(1000, 2000)
    }
}
