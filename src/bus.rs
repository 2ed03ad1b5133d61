//! # Outbound port and broadcast adapter for envelope frames.
//!
//! The gateway publishes envelopes through the [`Outbound`] port; the bus
//! the frames actually ride on belongs to the host. For hosts and tests
//! that do not bring their own, [`Bus`] is a ready-made adapter over
//! [`tokio::sync::broadcast`].
//!
//! ## Architecture
//! ```text
//! DebugGateway ── emit(channel, Envelope) ──► Outbound (port)
//!                                               │
//!                                  Bus (broadcast adapter, optional)
//!                                               │
//!                  host listener ── Frame ──► DebugGateway::print
//! ```
//!
//! ## Rules
//! - **Non-blocking publish**: `publish()` never blocks or fails; frames
//!   with no active receiver are dropped.
//! - **Bounded capacity**: one ring buffer shared by all receivers; slow
//!   receivers observe `RecvError::Lagged(n)` and skip `n` oldest frames.
//! - **No persistence**: the gateway is in-memory and process-scoped.

use std::sync::Arc;

use tokio::sync::broadcast;

use crate::envelope::Envelope;

/// Outbound port: where bound-channel envelopes leave the gateway.
///
/// Implement this over whatever transport the host runs (an event bus, an
/// in-process queue, a test recorder). Emission must not block.
pub trait Outbound: Send + Sync {
    /// Publishes one envelope on the named channel.
    fn emit(&self, channel: &str, envelope: Envelope);
}

/// One envelope on one channel, as carried by the [`Bus`] adapter.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Channel the envelope was emitted on.
    pub channel: Arc<str>,
    /// The envelope itself.
    pub envelope: Envelope,
}

/// Broadcast channel for envelope frames.
///
/// Thin wrapper over [`tokio::sync::broadcast`] providing `publish`/`subscribe`.
/// Cheap to clone (the sender is `Arc`-backed internally).
#[derive(Clone, Debug)]
pub struct Bus {
    tx: broadcast::Sender<Frame>,
}

impl Bus {
    /// Creates a new bus with the given ring-buffer capacity (min 1, clamped).
    pub fn new(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel::<Frame>(capacity.max(1));
        Self { tx }
    }

    /// Publishes a frame to all active receivers.
    ///
    /// If there are no receivers the frame is dropped; publish still
    /// returns immediately.
    pub fn publish(&self, frame: Frame) {
        let _ = self.tx.send(frame);
    }

    /// Creates an independent receiver observing subsequent frames.
    pub fn subscribe(&self) -> broadcast::Receiver<Frame> {
        self.tx.subscribe()
    }
}

impl Outbound for Bus {
    fn emit(&self, channel: &str, envelope: Envelope) {
        self.publish(Frame {
            channel: Arc::from(channel),
            envelope,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::Severity;

    #[tokio::test]
    async fn emitted_frames_reach_subscribers() {
        let bus = Bus::new(8);
        let mut rx = bus.subscribe();

        bus.emit("c1", Envelope::new(Severity::Log, None, "[]".into()));

        let frame = rx.recv().await.unwrap();
        assert_eq!(&*frame.channel, "c1");
        assert_eq!(frame.envelope.severity, Severity::Log);
    }

    #[test]
    fn publish_without_receivers_is_a_noop() {
        let bus = Bus::new(1);
        bus.emit("c1", Envelope::new(Severity::Info, None, "[]".into()));
    }
}
