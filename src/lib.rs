//! # loggate
//!
//! **Loggate** is a deferred-dispatch logging gateway: it accepts log calls
//! before its output channel exists, buffers them safely, and replays them
//! once the channel and a downstream logging provider become available.
//!
//! The crate is a building block for plugin hosts and sandboxed module
//! runtimes where logging is wired up *after* code already wants to log:
//! the gateway is inert until a trusted control message binds a channel,
//! and the provider that renders output is acquired lazily from the host.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!  caller ──► log/info/debug/warn/error          (severity entry points)
//!                    │
//!                    ▼
//!              Message formatter                  (canonical value sequence)
//!                    │
//!          ┌── channel latch ──┐
//!          │ pending: park call │                 (replayed FIFO on bind)
//!          │ resolved: emit     │
//!          └─────────┬─────────┘
//!                    ▼
//!        Envelope on bound channel ──► Outbound port ──► (host bus)
//!                                                            │
//!                    ┌───────────────────────────────────────┘
//!                    ▼
//!                 print()
//!                    │
//!          ┌── provider latch ──┐
//!          │ pending: park call  │                (one acquisition, fan-out)
//!          │ resolved: dispatch  │
//!          └─────────┬──────────┘
//!                    ▼
//!           print worker (FIFO) ──► Severity dispatch ──► LogProvider
//! ```
//!
//! ### Lifecycle
//! ```text
//! DebugGateway::new(settings, outbound, host)
//!   │
//!   ├─ log("...")            ──► parked on channel latch
//!   ├─ on_message("control", {channel, config})
//!   │        └─► latch resolves ──► parked calls emit FIFO
//!   ├─ print(envelope)       ──► first call starts provider acquisition
//!   │        └─► retries with backoff; success resolves the provider latch
//!   └─ further calls emit / dispatch immediately
//! ```
//!
//! ## Features
//! | Area              | Description                                                     | Key types / traits                  |
//! |-------------------|-----------------------------------------------------------------|-------------------------------------|
//! | **Entry points**  | Five severities plus a named-logger factory.                    | [`DebugGateway`], [`Logger`]        |
//! | **Gating**        | One-shot readiness latches with FIFO replay.                    | [`Latch`]                           |
//! | **Envelope**      | Wire record and canonical-sequence codec.                       | [`Envelope`], [`Severity`], [`codec`] |
//! | **Ports**         | Outbound emission, console target, capability host.             | [`Outbound`], [`Console`], [`CapabilityHost`] |
//! | **Acquisition**   | Lazy, exactly-once provider acquisition with retry policy.      | [`LogProvider`], [`BackoffPolicy`]  |
//! | **Adapter**       | Broadcast bus for hosts/tests without their own transport.      | [`Bus`], [`Frame`]                  |
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use async_trait::async_trait;
//! use serde_json::Value;
//! use loggate::{
//!     args, AcquireError, Bus, CapabilityHost, ControlMessage, DebugGateway,
//!     GatewayConfig, GatewaySettings, LogProvider, ProviderRef, Severity,
//! };
//!
//! struct StdoutProvider;
//!
//! #[async_trait]
//! impl LogProvider for StdoutProvider {
//!     async fn log(&self, source: Option<&str>, args: &[Value]) {
//!         println!("[{}] {:?}", source.unwrap_or("-"), args);
//!     }
//!     async fn info(&self, s: Option<&str>, a: &[Value]) { self.log(s, a).await }
//!     async fn debug(&self, s: Option<&str>, a: &[Value]) { self.log(s, a).await }
//!     async fn warn(&self, s: Option<&str>, a: &[Value]) { self.log(s, a).await }
//!     async fn error(&self, s: Option<&str>, a: &[Value]) { self.log(s, a).await }
//! }
//!
//! struct Host;
//!
//! #[async_trait]
//! impl CapabilityHost for Host {
//!     async fn acquire(&self, _capability: &str) -> Result<ProviderRef, AcquireError> {
//!         Ok(Arc::new(StdoutProvider))
//!     }
//! }
//!
//! struct NullConsole;
//! impl loggate::Console for NullConsole {
//!     fn write(&self, _: Severity, _: &[Value]) {}
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let settings = GatewaySettings::default();
//!     let bus = Arc::new(Bus::new(settings.bus_capacity));
//!     let gateway = DebugGateway::new(settings, bus.clone(), Arc::new(Host));
//!
//!     // Calls made before the bind are parked, not lost.
//!     gateway.log(args!["early", 1]);
//!
//!     gateway.on_message(
//!         "control",
//!         ControlMessage::bind("chan", GatewayConfig::new(Arc::new(NullConsole))),
//!     );
//!
//!     let named = gateway.logger("worker");
//!     named.info(args!["ready"]);
//! }
//! ```

mod bus;
mod config;
mod envelope;
mod error;
mod gate;
mod gateway;
mod policies;
mod provider;

// ---- Public re-exports ----

pub use bus::{Bus, Frame, Outbound};
pub use config::{GatewaySettings, LOGGER_CAPABILITY};
pub use envelope::{codec, Envelope, Severity, REQUEST};
pub use error::AcquireError;
pub use gate::Latch;
pub use gateway::{
    Console, ConsoleRef, ControlMessage, DebugGateway, GatewayConfig, GlobalConfig, Logger,
    Payload, CONTROL_SOURCE,
};
pub use policies::{BackoffPolicy, JitterPolicy};
pub use provider::{dispatch, CapabilityHost, LogProvider, ProviderRef};

#[doc(hidden)]
pub mod __private {
    pub use serde_json::json;
}
