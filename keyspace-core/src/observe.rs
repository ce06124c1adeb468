//! Slow-call reporting.

use std::time::Duration;

use tracing::warn;

/// Default threshold in milliseconds above which a call counts as slow.
pub const DEFAULT_SLOW_THRESHOLD_MS: i64 = 10;

/// Latency threshold above which a store call is reported to operators.
///
/// A zero or negative threshold disables reporting entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlowThreshold(Option<Duration>);

impl SlowThreshold {
    /// Threshold in milliseconds; zero or negative disables reporting.
    pub fn from_millis(millis: i64) -> Self {
        if millis > 0 {
            Self(Some(Duration::from_millis(millis as u64)))
        } else {
            Self(None)
        }
    }

    /// Threshold that never reports.
    pub fn disabled() -> Self {
        Self(None)
    }

    /// Whether `elapsed` crosses the threshold.
    pub fn exceeded(&self, elapsed: Duration) -> bool {
        matches!(self.0, Some(threshold) if elapsed > threshold)
    }

    /// Emit a warning for `key` when `elapsed` crosses the threshold.
    pub fn observe(&self, key: &str, elapsed: Duration) {
        if self.exceeded(elapsed) {
            warn!(
                key,
                elapsed_ms = elapsed.as_millis() as u64,
                "slow store command"
            );
        }
    }
}

impl Default for SlowThreshold {
    fn default() -> Self {
        Self::from_millis(DEFAULT_SLOW_THRESHOLD_MS)
    }
}
