//! # Named loggers.
//!
//! [`Logger`] is the object the public factory hands out: five severity
//! methods, each forwarding to an explicit gateway instance with a fixed
//! source tag. Many named loggers can share one gateway and one channel;
//! the tag is what tells their events apart downstream.

use std::sync::Arc;

use crate::envelope::Severity;
use crate::gateway::core::DebugGateway;
use crate::gateway::payload::Payload;

/// A logger bound to a gateway, tagging every event with its name.
///
/// Created via [`DebugGateway::logger`]. Cheap to clone.
#[derive(Clone)]
pub struct Logger {
    gateway: Arc<DebugGateway>,
    name: Arc<str>,
}

impl Logger {
    pub(crate) fn new(gateway: Arc<DebugGateway>, name: impl Into<Arc<str>>) -> Self {
        Self {
            gateway,
            name: name.into(),
        }
    }

    /// The source tag attached to this logger's events.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Emits a plain log event tagged with this logger's name.
    pub fn log(&self, payload: impl Into<Payload>) {
        self.forward(Severity::Log, payload.into());
    }

    /// Emits an info event tagged with this logger's name.
    pub fn info(&self, payload: impl Into<Payload>) {
        self.forward(Severity::Info, payload.into());
    }

    /// Emits a debug event tagged with this logger's name.
    pub fn debug(&self, payload: impl Into<Payload>) {
        self.forward(Severity::Debug, payload.into());
    }

    /// Emits a warning tagged with this logger's name.
    pub fn warn(&self, payload: impl Into<Payload>) {
        self.forward(Severity::Warn, payload.into());
    }

    /// Emits an error tagged with this logger's name.
    ///
    /// Named errors take the envelope path only; the direct console side
    /// channel belongs to the gateway's own [`error`](DebugGateway::error)
    /// entry point.
    pub fn error(&self, payload: impl Into<Payload>) {
        self.forward(Severity::Error, payload.into());
    }

    fn forward(&self, severity: Severity, payload: Payload) {
        self.gateway
            .format(severity, Some(Arc::clone(&self.name)), payload);
    }
}
