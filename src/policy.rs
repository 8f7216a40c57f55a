//! Duration policy bounds
//!
//! Pure classification of a parsed delay against the bot's minimum and
//! maximum reminder windows.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use chrono::Duration;

/// Shortest delay the bot will schedule
pub const MIN_DURATION_SECONDS: i64 = 2;

/// Longest delay the bot will schedule (one week)
pub const MAX_DURATION_HOURS: i64 = 7 * 24;

/// Why a duration was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    NegativeDuration,
    TooShort,
    TooLong,
}

/// Result of checking a duration against the policy bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyOutcome {
    Accepted(Duration),
    Rejected(RejectReason),
}

/// Inclusive-bounds window for acceptable reminder delays
///
/// Exactly `min` and exactly `max` are accepted; only values strictly
/// outside the window are rejected. Classification is pure and
/// side-effect free.
#[derive(Debug, Clone, Copy)]
pub struct DurationPolicy {
    min: Duration,
    max: Duration,
}

impl DurationPolicy {
    pub fn new(min: Duration, max: Duration) -> Self {
        Self { min, max }
    }

    /// Classify a parsed duration
    ///
    /// Negative delays are called out separately from merely-too-short
    /// ones so the bot can mock time travellers with a dedicated reply.
    pub fn classify(&self, duration: Duration) -> PolicyOutcome {
        if duration < Duration::zero() {
            PolicyOutcome::Rejected(RejectReason::NegativeDuration)
        } else if duration < self.min {
            PolicyOutcome::Rejected(RejectReason::TooShort)
        } else if duration > self.max {
            PolicyOutcome::Rejected(RejectReason::TooLong)
        } else {
            PolicyOutcome::Accepted(duration)
        }
    }
}

impl Default for DurationPolicy {
    fn default() -> Self {
        Self::new(
            Duration::seconds(MIN_DURATION_SECONDS),
            Duration::hours(MAX_DURATION_HOURS),
        )
    }
}
