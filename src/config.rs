//! # Gateway construction settings.
//!
//! Provides [`GatewaySettings`], the knobs fixed at gateway construction
//! time. These are distinct from the *bound* configuration: the channel
//! identity and console target arrive later, over the control protocol
//! (see [`ControlMessage`](crate::ControlMessage)).
//!
//! ## Sentinel values
//! - `acquire_attempts = 1` → a single acquisition attempt, no retry
//! - `bus_capacity` applies only to the shipped [`Bus`](crate::Bus) adapter

use std::borrow::Cow;

use crate::policies::BackoffPolicy;

/// Well-known name of the host logging capability.
pub const LOGGER_CAPABILITY: &str = "core.logger";

/// Construction-time configuration for a gateway instance.
///
/// ## Field semantics
/// - `capability`: name requested from the [`CapabilityHost`](crate::CapabilityHost)
/// - `acquire_attempts`: total acquisition attempts before terminal failure
///   (min 1; clamped by the acquirer)
/// - `backoff`: delay policy between failed acquisition attempts
/// - `bus_capacity`: ring-buffer size for the shipped broadcast adapter
#[derive(Clone, Debug)]
pub struct GatewaySettings {
    /// Capability name resolved through the host port.
    ///
    /// Defaults to [`LOGGER_CAPABILITY`]; override to route to an
    /// alternative provider capability.
    pub capability: Cow<'static, str>,

    /// Total number of acquisition attempts before the acquirer gives up.
    ///
    /// - `1` = try once, never retry
    /// - `n > 1` = up to `n - 1` retries, spaced by `backoff`
    pub acquire_attempts: u32,

    /// Backoff policy between failed acquisition attempts.
    pub backoff: BackoffPolicy,

    /// Capacity of the [`Bus`](crate::Bus) broadcast ring buffer.
    ///
    /// Slow bus subscribers that lag further than this skip older frames.
    /// Minimum value is 1 (enforced by the bus).
    pub bus_capacity: usize,
}

impl Default for GatewaySettings {
    /// Provides a default configuration:
    /// - `capability = "core.logger"`
    /// - `acquire_attempts = 3`
    /// - `backoff = BackoffPolicy::default()`
    /// - `bus_capacity = 256`
    fn default() -> Self {
        Self {
            capability: Cow::Borrowed(LOGGER_CAPABILITY),
            acquire_attempts: 3,
            backoff: BackoffPolicy::default(),
            bus_capacity: 256,
        }
    }
}
