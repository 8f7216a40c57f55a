// Core layer - configuration and reply text
pub mod core;

// Domain layer - parsing and policy
pub mod duration;
pub mod parser;
pub mod policy;

// Delivery layer - outbound publishing and delayed tasks
pub mod publisher;
pub mod scheduler;
pub mod service;

// Re-export core config for convenience
pub use crate::core::Config;

// Re-export the types most callers need
pub use duration::{parse_duration, DurationParseError};
pub use parser::{Command, CommandParser, ParseError, ReminderRequest};
pub use policy::{DurationPolicy, PolicyOutcome, RejectReason};
pub use publisher::{ChannelPublisher, OutboundMessage, OutboundPublisher};
pub use scheduler::{ReminderScheduler, ScheduledDelivery};
pub use service::ReminderService;
