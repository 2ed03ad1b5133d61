//! # The envelope wire record.
//!
//! One [`Envelope`] is constructed per log call and published on the bound
//! channel. The record is immutable once built; `msg` carries the canonical
//! argument sequence encoded by the [codec](crate::envelope::codec).
//!
//! ## Wire shape
//! ```text
//! {
//!   "severity": "log" | "info" | "debug" | "warn" | "error",
//!   "source":   "<logger name>"        // omitted for local/default origin
//!   "quiet":    true,
//!   "request":  "debug",
//!   "msg":      "[\"hello\",42]"       // JSON-encoded canonical sequence
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::severity::Severity;

/// Value of the `request` field on every envelope.
pub const REQUEST: &str = "debug";

/// Wire-shaped record carrying one log event across the bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// Event severity; selects the provider method on the print path.
    pub severity: Severity,
    /// Originating logger name; `None` means local/default origin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Always `true`: the event must not be echoed back by intermediaries.
    pub quiet: bool,
    /// Always [`REQUEST`]; routes the frame to the print path on the far side.
    pub request: String,
    /// Codec-encoded canonical argument sequence.
    pub msg: String,
}

impl Envelope {
    /// Builds an envelope for an already-encoded argument sequence.
    ///
    /// # Example
    /// ```
    /// use loggate::{Envelope, Severity};
    ///
    /// let env = Envelope::new(Severity::Log, None, "[\"hello\",42]".to_string());
    /// assert_eq!(env.request, "debug");
    /// assert!(env.quiet);
    /// ```
    pub fn new(severity: Severity, source: Option<&str>, msg: String) -> Self {
        Self {
            severity,
            source: source.map(str::to_owned),
            quiet: true,
            request: REQUEST.to_string(),
            msg,
        }
    }
}
