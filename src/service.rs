//! Reminder dispatch
//!
//! The one entry point the surrounding transport calls: hand in a raw
//! command line plus the requester's identity, and every outcome comes
//! back out through the injected publisher as a single reply line.
//!
//! - **Version**: 1.2.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.2.0: Reply wording moved to core::response
//! - 1.1.0: Policy bounds injected instead of hardcoded
//! - 1.0.0: Initial dispatch path

use log::{debug, info};
use std::sync::Arc;

use crate::core::response;
use crate::parser::{Command, CommandParser};
use crate::policy::{DurationPolicy, PolicyOutcome, RejectReason};
use crate::publisher::OutboundPublisher;
use crate::scheduler::ReminderScheduler;

/// Parse, classify and schedule reminders for one bot instance
pub struct ReminderService {
    policy: DurationPolicy,
    scheduler: ReminderScheduler,
    publisher: Arc<dyn OutboundPublisher>,
}

impl ReminderService {
    pub fn new(policy: DurationPolicy, publisher: Arc<dyn OutboundPublisher>) -> Self {
        Self {
            policy,
            scheduler: ReminderScheduler::new(Arc::clone(&publisher)),
            publisher,
        }
    }

    /// Handle one raw command line from `requester`
    ///
    /// Exactly one immediate reply is published per call. Parse failures
    /// and policy rejections are terminal for the command; only full
    /// acceptance commits to the delayed delivery, which is scheduled
    /// before the acknowledgement goes out so the two cannot race a
    /// process shutdown in the wrong order.
    pub async fn dispatch(&self, requester: &str, raw: &str) {
        let reply = match CommandParser::parse(raw) {
            Err(err) => {
                debug!("Rejected command from {requester}: {err}");
                response::parse_failure(&err)
            }
            Ok(Command::Empty) => {
                // Reserved status query; nothing to schedule
                response::STATUS_PLACEHOLDER.to_string()
            }
            Ok(Command::Remind(request)) => match self.policy.classify(request.duration) {
                PolicyOutcome::Rejected(RejectReason::NegativeDuration) => {
                    response::past_dated(requester)
                }
                PolicyOutcome::Rejected(RejectReason::TooShort) => response::too_short(requester),
                PolicyOutcome::Rejected(RejectReason::TooLong) => response::too_long(requester),
                PolicyOutcome::Accepted(duration) => {
                    let id = self
                        .scheduler
                        .schedule(duration, &request.message, requester);
                    info!("[{id}] Accepted reminder from {requester}");
                    response::ACK.to_string()
                }
            },
        };

        self.publisher.publish(requester, &reply).await;
    }

    /// Number of reminders still waiting to fire
    pub fn pending_reminders(&self) -> usize {
        self.scheduler.pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::publisher::ChannelPublisher;

    fn service_with_channel() -> (
        ReminderService,
        tokio::sync::mpsc::Receiver<crate::publisher::OutboundMessage>,
    ) {
        let (publisher, rx) = ChannelPublisher::new(16);
        let service = ReminderService::new(DurationPolicy::default(), Arc::new(publisher));
        (service, rx)
    }

    #[tokio::test(start_paused = true)]
    async fn test_accepted_reminder_acks_then_fires() {
        let (service, mut rx) = service_with_channel();
        let start = tokio::time::Instant::now();

        service.dispatch("norrin", "5s hello").await;

        let ack = rx.recv().await.expect("ack");
        assert_eq!(ack.response, "I'll remind ya, m8!");
        assert_eq!(service.pending_reminders(), 1);

        let fired = rx.recv().await.expect("delayed callback");
        assert_eq!(fired.requester, "norrin");
        assert_eq!(fired.response, "norrin, you asked me to remind you: hello");
        assert!(start.elapsed() >= std::time::Duration::from_secs(5));
        assert_eq!(service.pending_reminders(), 0);
    }

    #[tokio::test]
    async fn test_too_short_rejected_without_scheduling() {
        let (service, mut rx) = service_with_channel();

        service.dispatch("norrin", "1s test").await;

        let reply = rx.recv().await.expect("rejection");
        assert_eq!(reply.response, "norrin, I dont work that fast!");
        assert_eq!(service.pending_reminders(), 0);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_too_long_rejected_without_scheduling() {
        let (service, mut rx) = service_with_channel();

        service.dispatch("norrin", "9999h test").await;

        let reply = rx.recv().await.expect("rejection");
        assert_eq!(
            reply.response,
            "norrin, really? Maybe you should use a calendar instead. Durations less than a week please."
        );
        assert_eq!(service.pending_reminders(), 0);
    }

    #[tokio::test]
    async fn test_missing_message_is_a_parse_failure() {
        let (service, mut rx) = service_with_channel();

        service.dispatch("norrin", "hello").await;

        let reply = rx.recv().await.expect("parse failure");
        assert_eq!(
            reply.response,
            "Bloop. Your request could not be parsed: Insufficient number of arguments provided. \
             Need to provide a duration and message."
        );
        assert_eq!(service.pending_reminders(), 0);
    }

    #[tokio::test]
    async fn test_empty_command_takes_status_path() {
        let (service, mut rx) = service_with_channel();

        service.dispatch("norrin", "").await;

        let reply = rx.recv().await.expect("status placeholder");
        assert_eq!(reply.response, "<placeholder for reminder summary>");
        assert_eq!(service.pending_reminders(), 0);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_invalid_duration_token_reply() {
        let (service, mut rx) = service_with_channel();

        service.dispatch("norrin", "tomorrow do the dishes").await;

        let reply = rx.recv().await.expect("parse failure");
        assert_eq!(
            reply.response,
            "Bloop. Your request could not be parsed: \
             Invalid duration value:[tomorrow] supplied for argument. Ignoring."
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_boundary_durations_accepted() {
        let (service, mut rx) = service_with_channel();

        service.dispatch("norrin", "2s quick one").await;
        assert_eq!(rx.recv().await.expect("ack").response, "I'll remind ya, m8!");

        service.dispatch("norrin", "168h long one").await;
        assert_eq!(rx.recv().await.expect("ack").response, "I'll remind ya, m8!");
        assert_eq!(service.pending_reminders(), 2);
    }
}
