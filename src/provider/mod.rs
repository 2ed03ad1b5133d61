//! Provider port, severity dispatch, and lazy acquisition.
//!
//! ## Contents
//! - [`LogProvider`] / [`ProviderRef`] the external rendering capability
//! - [`dispatch`] explicit Severity → provider-method mapping
//! - [`CapabilityHost`] the port acquisition goes through
//! - `Acquirer` (crate-internal) exactly-once acquisition + provider latch

mod acquire;
mod port;

pub(crate) use acquire::Acquirer;
pub use acquire::CapabilityHost;
pub use port::{dispatch, LogProvider, ProviderRef};
