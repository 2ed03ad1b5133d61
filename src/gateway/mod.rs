//! The gateway itself: control surface, call payloads, pipeline, loggers.
//!
//! ## Contents
//! - [`DebugGateway`] binder + formatter + entry points + print path
//! - [`Logger`] named logger handed out by the factory
//! - [`Payload`] raw call input; built variadically via [`args!`](crate::args)
//! - [`ControlMessage`], [`GatewayConfig`], [`Console`] the control protocol
//!
//! See the [`DebugGateway`] docs for the pipeline diagram and gating rules.

mod control;
mod core;
mod logger;
mod payload;

pub use control::{
    Console, ConsoleRef, ControlMessage, GatewayConfig, GlobalConfig, CONTROL_SOURCE,
};
pub use self::core::DebugGateway;
pub use logger::Logger;
pub use payload::Payload;
