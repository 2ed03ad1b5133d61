//! Error types used at the gateway's host boundary.
//!
//! The gateway itself never surfaces errors to log call sites: anticipated
//! failures are absorbed and degrade into buffering or fallback formatting.
//! The one place a typed error crosses an API boundary is capability
//! acquisition, where the host reports why a provider could not be produced.
//!
//! [`AcquireError`] provides helper methods (`as_label`, `as_message`,
//! `is_retryable`) for diagnostics and for the acquirer's retry decision.

use thiserror::Error;

/// # Errors produced by capability acquisition.
///
/// Returned by [`CapabilityHost::acquire`](crate::CapabilityHost::acquire)
/// when the host cannot (or will not) produce a logging provider.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum AcquireError {
    /// The host does not know the requested capability at all.
    #[error("capability {capability:?} is not available")]
    Unavailable {
        /// The capability name that was requested.
        capability: String,
    },

    /// The host knows the capability but failed to produce an instance.
    /// May succeed if retried.
    #[error("acquisition failed: {error}")]
    Failed {
        /// The underlying error message.
        error: String,
    },
}

impl AcquireError {
    /// Returns a short stable label (snake_case) for use in diagnostics.
    ///
    /// # Example
    /// ```
    /// use loggate::AcquireError;
    ///
    /// let err = AcquireError::Unavailable { capability: "core.logger".into() };
    /// assert_eq!(err.as_label(), "acquire_unavailable");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            AcquireError::Unavailable { .. } => "acquire_unavailable",
            AcquireError::Failed { .. } => "acquire_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            AcquireError::Unavailable { capability } => {
                format!("capability not available: {capability}")
            }
            AcquireError::Failed { error } => format!("acquisition error: {error}"),
        }
    }

    /// Indicates whether another acquisition attempt could succeed.
    ///
    /// Returns `true` for [`AcquireError::Failed`]; an unknown capability
    /// will not appear by retrying.
    ///
    /// # Example
    /// ```
    /// use loggate::AcquireError;
    ///
    /// let transient = AcquireError::Failed { error: "boot race".into() };
    /// assert!(transient.is_retryable());
    ///
    /// let missing = AcquireError::Unavailable { capability: "core.logger".into() };
    /// assert!(!missing.is_retryable());
    /// ```
    pub fn is_retryable(&self) -> bool {
        matches!(self, AcquireError::Failed { .. })
    }
}
