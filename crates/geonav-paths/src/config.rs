use std::time::Duration;

/// Settings for an [`AStarSolver`](crate::AStarSolver) run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Wall-clock budget. Polled after every dequeue.
    pub timeout: Duration,
}

impl SolverConfig {
    /// Budget used by [`SolverConfig::default`].
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Create a config with the default timeout.
    pub const fn new() -> Self {
        Self {
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Replace the timeout.
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replace the timeout with a duration in seconds.
    ///
    /// Negative values and NaN yield a zero budget. Infinity, or anything
    /// too large for a `Duration`, yields [`Duration::MAX`].
    pub fn with_timeout_secs(self, secs: f64) -> Self {
        let timeout = if secs.is_nan() || secs <= 0.0 {
            Duration::ZERO
        } else {
            Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
        };
        self.with_timeout(timeout)
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new()
    }
}
