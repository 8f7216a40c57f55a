//! Command parsing for the remindme bot
//!
//! Turns the raw text after the bot trigger into a structured reminder
//! request, the reserved empty-command sentinel, or a typed parse failure.
//!
//! - **Version**: 1.2.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.2.0: Split on any whitespace run instead of a single space
//! - 1.1.0: Typed ParseError taxonomy replacing stringly errors
//! - 1.0.0: Initial implementation

use chrono::Duration;
use std::error::Error;
use std::fmt;

use crate::duration::{parse_duration, DurationParseError};

/// A parsed reminder: how long to wait and what to echo back
///
/// Built once per command and immutable afterwards. The message is the
/// trimmed remainder of the command after the duration token; its content
/// is not validated further.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderRequest {
    pub duration: Duration,
    pub message: String,
}

/// Parse result for a raw command line
///
/// `Empty` is a sentinel, not an error: a blank command historically
/// reserves the (unfinished) reminder status query, and downstream treats
/// it as "nothing to schedule".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Empty,
    Remind(ReminderRequest),
}

/// Why a command could not be parsed
///
/// The `Display` wording of each variant is part of the bot's user-facing
/// surface and must stay byte-for-byte stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Only one whitespace-delimited token was present
    InsufficientArguments,
    /// The duration token does not start with an ASCII digit or `.`
    InvalidDurationToken { token: String },
    /// The token was well-positioned but the duration grammar rejected it
    Malformed(DurationParseError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientArguments => write!(
                f,
                "Insufficient number of arguments provided. Need to provide a duration and message."
            ),
            Self::InvalidDurationToken { token } => write!(
                f,
                "Invalid duration value:[{token}] supplied for argument. Ignoring."
            ),
            Self::Malformed(inner) => write!(f, "{inner}"),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Malformed(inner) => Some(inner),
            _ => None,
        }
    }
}

/// Parser for the `<duration> <message...>` command syntax
pub struct CommandParser;

impl CommandParser {
    /// Parse a raw command line
    ///
    /// The input is trimmed first. An empty line yields [`Command::Empty`];
    /// otherwise the line is split once on the first whitespace run into a
    /// duration token and a free-text remainder, each trimmed
    /// independently.
    pub fn parse(raw: &str) -> Result<Command, ParseError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Command::Empty);
        }

        let (token, remainder) = match trimmed.split_once(char::is_whitespace) {
            Some(parts) => parts,
            None => return Err(ParseError::InsufficientArguments),
        };
        let token = token.trim();
        let message = remainder.trim();

        match token.chars().next() {
            Some(c) if c == '.' || c.is_ascii_digit() => {}
            _ => {
                return Err(ParseError::InvalidDurationToken {
                    token: token.to_string(),
                })
            }
        }

        let duration = parse_duration(token).map_err(ParseError::Malformed)?;
        Ok(Command::Remind(ReminderRequest {
            duration,
            message: message.to_string(),
        }))
    }
}
