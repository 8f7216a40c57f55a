//! Environment-backed configuration
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Policy bounds overridable via environment
//! - 1.0.0: Initial log level and nick settings

use anyhow::{Context, Result};
use chrono::Duration;
use std::env;

use crate::policy::{DurationPolicy, MAX_DURATION_HOURS, MIN_DURATION_SECONDS};

/// Process configuration, read once at startup
///
/// All settings have defaults; a bare environment gives the stock bot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Requester identity attributed to console input
    pub nick: String,
    /// Default log filter when RUST_LOG is not set
    pub log_level: String,
    /// Shortest schedulable delay, in whole seconds
    pub min_duration_secs: i64,
    /// Longest schedulable delay, in whole hours
    pub max_duration_hours: i64,
}

impl Config {
    /// Build configuration from the process environment
    pub fn from_env() -> Result<Self> {
        let nick = env::var("REMINDME_NICK").unwrap_or_else(|_| "console".to_string());
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let min_duration_secs = match env::var("REMINDME_MIN_SECONDS") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("REMINDME_MIN_SECONDS is not a number: {raw}"))?,
            Err(_) => MIN_DURATION_SECONDS,
        };
        let max_duration_hours = match env::var("REMINDME_MAX_HOURS") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("REMINDME_MAX_HOURS is not a number: {raw}"))?,
            Err(_) => MAX_DURATION_HOURS,
        };

        Ok(Self {
            nick,
            log_level,
            min_duration_secs,
            max_duration_hours,
        })
    }

    /// Policy window derived from the configured bounds
    pub fn policy(&self) -> DurationPolicy {
        DurationPolicy::new(
            Duration::seconds(self.min_duration_secs),
            Duration::hours(self.max_duration_hours),
        )
    }
}
