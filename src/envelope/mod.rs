//! Envelope protocol: severity, wire record, and codec.
//!
//! This module groups the **data model** of the message-envelope protocol
//! used to carry log data across the asynchronous boundary.
//!
//! ## Contents
//! - [`Severity`] closed set of event levels
//! - [`Envelope`] the wire record, one per log call
//! - [`codec`] canonical sequence ⇄ `msg` string
//!
//! ## Quick reference
//! - **Producers**: `DebugGateway::format` builds and emits envelopes once
//!   the channel is bound.
//! - **Consumers**: `DebugGateway::print` decodes envelopes handed back by
//!   the host and routes them to the provider.

pub mod codec;
mod envelope;
mod severity;

pub use envelope::{Envelope, REQUEST};
pub use severity::Severity;
