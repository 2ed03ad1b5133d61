//! # Control inbound protocol and the console port.
//!
//! Binding is driven by a single trusted message from the control origin:
//!
//! ```text
//! on_message("control", ControlMessage {
//!     channel: Some("c1"),
//!     config:  Some(GatewayConfig { global: GlobalConfig { console } }),
//! })
//! ```
//!
//! Any other source, or a message without a channel or config, is ignored
//! silently: malformed input at a trust boundary must not halt the gateway.

use std::sync::Arc;

use serde_json::Value;

use crate::envelope::Severity;

/// The designated trusted origin for binding messages.
pub const CONTROL_SOURCE: &str = "control";

/// Shared handle to a console target.
pub type ConsoleRef = Arc<dyn Console>;

/// # Console output target nested in the bound configuration.
///
/// The direct side channel used by `error` entry points, and the object the
/// self-echo suppression check inspects. A gateway is itself a console
/// ([`DebugGateway`](crate::DebugGateway) implements this trait), which is
/// how nested environments chain gateways together.
pub trait Console: Send + Sync {
    /// Writes the caller's arguments directly, bypassing the envelope path.
    fn write(&self, severity: Severity, args: &[Value]);

    /// Capability marker: true when this console is itself a gateway.
    ///
    /// Suppression keys off this marker, not pointer identity: a gateway
    /// configured to print into a gateway (itself or a nested one) must not
    /// echo locally.
    fn is_gateway(&self) -> bool {
        false
    }
}

/// Configuration accepted once at bind time; immutable thereafter.
#[derive(Clone)]
pub struct GatewayConfig {
    /// Host-global section.
    pub global: GlobalConfig,
}

/// The `global` section of the bound configuration.
#[derive(Clone)]
pub struct GlobalConfig {
    /// Console-like output target.
    pub console: ConsoleRef,
}

impl GatewayConfig {
    /// Builds a configuration around a console target.
    pub fn new(console: ConsoleRef) -> Self {
        Self {
            global: GlobalConfig { console },
        }
    }
}

/// One message of the control inbound protocol.
///
/// Both fields are optional on the wire; the binder treats a message with
/// either missing as malformed and ignores it.
#[derive(Clone, Default)]
pub struct ControlMessage {
    /// Channel identity to bind.
    pub channel: Option<Arc<str>>,
    /// Configuration to adopt.
    pub config: Option<GatewayConfig>,
}

impl ControlMessage {
    /// Builds a well-formed binding message.
    ///
    /// # Example
    /// ```
    /// use std::sync::Arc;
    /// use serde_json::Value;
    /// use loggate::{Console, ControlMessage, GatewayConfig, Severity};
    ///
    /// struct Sink;
    /// impl Console for Sink {
    ///     fn write(&self, _: Severity, _: &[Value]) {}
    /// }
    ///
    /// let msg = ControlMessage::bind("c1", GatewayConfig::new(Arc::new(Sink)));
    /// assert_eq!(msg.channel.as_deref(), Some("c1"));
    /// ```
    pub fn bind(channel: impl Into<Arc<str>>, config: GatewayConfig) -> Self {
        Self {
            channel: Some(channel.into()),
            config: Some(config),
        }
    }
}
