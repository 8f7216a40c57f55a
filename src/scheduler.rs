//! # Feature: Reminder Scheduling
//!
//! Runs one independent delayed task per accepted reminder. Each task
//! sleeps until its deadline, publishes the callback line, and disappears.
//!
//! Pending deliveries live only in process memory: a restart silently
//! drops them. That is a deliberate tradeoff for a best-effort notify
//! feature, not an accident.
//!
//! - **Version**: 1.2.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.2.0: Track in-flight deliveries in a concurrent pool so a future
//!   cancel/list feature has somewhere to hang off
//! - 1.1.0: Publisher injected as a capability instead of a global channel
//! - 1.0.0: Initial fire-and-forget spawned tasks

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use crate::core::response;
use crate::publisher::OutboundPublisher;

/// An in-flight delayed delivery
///
/// Exists from acceptance until the task fires (or the process exits).
#[derive(Debug, Clone)]
pub struct ScheduledDelivery {
    pub id: Uuid,
    pub deadline: DateTime<Utc>,
    pub message: String,
    pub requester: String,
}

/// Spawns and tracks the per-reminder delayed tasks
///
/// Tasks are fully independent: no ordering between them, no cap on how
/// many run at once, and no way to cancel one once scheduled. The pool
/// only tracks what is in flight; nothing reads a delivery back out of it
/// today.
pub struct ReminderScheduler {
    publisher: Arc<dyn OutboundPublisher>,
    pending: Arc<DashMap<Uuid, ScheduledDelivery>>,
}

impl ReminderScheduler {
    pub fn new(publisher: Arc<dyn OutboundPublisher>) -> Self {
        Self {
            publisher,
            pending: Arc::new(DashMap::new()),
        }
    }

    /// Schedule one delayed delivery
    ///
    /// Registers the delivery in the pool and spawns the task that will
    /// fire it. The caller has already published the acknowledgement;
    /// nothing here runs before the delay elapses. Returns the delivery id.
    pub fn schedule(&self, duration: Duration, message: &str, requester: &str) -> Uuid {
        let id = Uuid::new_v4();
        let delivery = ScheduledDelivery {
            id,
            deadline: Utc::now() + duration,
            message: message.to_string(),
            requester: requester.to_string(),
        };
        self.pending.insert(id, delivery);
        debug!("[{id}] Scheduled reminder for {requester} in {duration}");

        // Policy guarantees a non-negative delay by the time we get here
        let delay = duration.to_std().unwrap_or_default();
        let publisher = Arc::clone(&self.publisher);
        let pending = Arc::clone(&self.pending);
        let message = message.to_string();
        let requester = requester.to_string();

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Drop the pool entry before publishing so an observer who saw
            // the callback never also sees a stale pending delivery
            pending.remove(&id);
            let reply = response::reminder_fired(&requester, &message);
            publisher.publish(&requester, &reply).await;
            debug!("[{id}] Fired reminder for {requester}");
        });

        id
    }

    /// Number of deliveries still waiting on their deadline
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}
