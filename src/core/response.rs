//! User-visible reply lines
//!
//! Every string the bot ever says lives here. The wording is load-bearing:
//! long-time users (and at least one IRC log parser) match on these lines,
//! so treat any edit as a breaking change.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.1.0
//!
//! ## Changelog
//! - 1.0.0: Extracted from inline format! calls in the dispatch path

use std::fmt::Display;

/// Immediate acknowledgement for an accepted reminder
pub const ACK: &str = "I'll remind ya, m8!";

/// Reply to an empty command
///
/// Reserved for a reminder status summary that was never finished; kept
/// as an explicit placeholder rather than guessing at the feature.
pub const STATUS_PLACEHOLDER: &str = "<placeholder for reminder summary>";

/// Reply when the command text could not be parsed at all
pub fn parse_failure(error: &dyn Display) -> String {
    format!("Bloop. Your request could not be parsed: {error}")
}

/// Reply to a negative (past-dated) duration
pub fn past_dated(requester: &str) -> String {
    format!("{requester}, only your mom would ask you to do something in the past. You're lame.")
}

/// Reply to a duration under the minimum window
pub fn too_short(requester: &str) -> String {
    format!("{requester}, I dont work that fast!")
}

/// Reply to a duration over the maximum window
pub fn too_long(requester: &str) -> String {
    format!(
        "{requester}, really? Maybe you should use a calendar instead. Durations less than a week please."
    )
}

/// The delayed callback line, echoing the original message verbatim
pub fn reminder_fired(requester: &str, message: &str) -> String {
    format!("{requester}, you asked me to remind you: {message}")
}
