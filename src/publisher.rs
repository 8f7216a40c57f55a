//! Outbound publishing seam
//!
//! The reminder core never talks to a transport directly; it hands
//! finished reply lines, tagged with the original requester, to whatever
//! [`OutboundPublisher`] was injected at construction time. Delivery is
//! fire-and-forget: at most once, best effort, no error reported back.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Replace the process-global reply channel with an injected trait
//! - 1.0.0: Initial mpsc handoff

use async_trait::async_trait;
use log::warn;
use tokio::sync::mpsc;

/// A finished reply line, tagged with who asked for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub requester: String,
    pub response: String,
}

/// Capability for delivering a finished response to its recipient
///
/// Implementations must not block indefinitely and do not report delivery
/// failures back to the caller.
#[async_trait]
pub trait OutboundPublisher: Send + Sync {
    async fn publish(&self, requester: &str, response: &str);
}

/// Stock publisher backed by a bounded tokio mpsc channel
///
/// The surrounding transport (or a test) owns the receiving half and
/// drains it however it likes. If the receiver is gone the reply is
/// logged and dropped.
pub struct ChannelPublisher {
    tx: mpsc::Sender<OutboundMessage>,
}

impl ChannelPublisher {
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<OutboundMessage>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, rx)
    }
}

#[async_trait]
impl OutboundPublisher for ChannelPublisher {
    async fn publish(&self, requester: &str, response: &str) {
        let msg = OutboundMessage {
            requester: requester.to_string(),
            response: response.to_string(),
        };
        if self.tx.send(msg).await.is_err() {
            warn!("Outbound channel closed; dropping reply for {requester}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_publish_delivers_to_receiver() {
        let (publisher, mut rx) = ChannelPublisher::new(8);
        publisher.publish("norrin", "hello there").await;

        let msg = rx.recv().await.expect("message delivered");
        assert_eq!(msg.requester, "norrin");
        assert_eq!(msg.response, "hello there");
    }

    #[tokio::test]
    async fn test_publish_to_closed_channel_is_silent() {
        let (publisher, rx) = ChannelPublisher::new(8);
        drop(rx);
        // Must not panic or error; the reply is simply lost
        publisher.publish("norrin", "into the void").await;
    }
}
