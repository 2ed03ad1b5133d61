//! Acquisition retry policies.
//!
//! This module groups the knobs that control **how long** the provider
//! acquirer waits between failed acquisition attempts.
//!
//! ## Contents
//! - [`BackoffPolicy`] how retry delays evolve (first / factor / max + jitter)
//! - [`JitterPolicy`]  randomization strategy to avoid synchronized retries
//!
//! ## Quick wiring
//! ```text
//! GatewaySettings { acquire_attempts, backoff: BackoffPolicy, .. }
//!      └─► provider::Acquirer uses backoff.delay_for(attempt) between retries
//! ```
//!
//! ## Defaults
//! - `BackoffPolicy::default()` → first=100ms, factor=2.0, max=5s, jitter=None.

mod backoff;
mod jitter;

pub use backoff::BackoffPolicy;
pub use jitter::JitterPolicy;
