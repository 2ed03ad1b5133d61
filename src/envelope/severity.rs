//! # Severity levels carried by envelopes.
//!
//! [`Severity`] classifies a log event and selects the provider method that
//! ultimately renders it. The wire form is lowercase (`"log"`, `"info"`,
//! `"debug"`, `"warn"`, `"error"`), matching the envelope protocol.
//!
//! The surface is a closed set: dispatch over it is an exhaustive `match`
//! (see [`dispatch`](crate::provider::dispatch)), so a severity without a
//! provider method cannot exist past compile time.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a single log event.
///
/// Determines both the `severity` field of the emitted [`Envelope`](crate::Envelope)
/// and which provider method is invoked on the print path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Plain log line.
    Log,
    /// Informational message.
    Info,
    /// Developer-facing diagnostic.
    Debug,
    /// Something unexpected but recoverable.
    Warn,
    /// An error; also mirrored directly to the configured console.
    Error,
}

impl Severity {
    /// All severities, in the order of the entry-point surface.
    pub const ALL: [Severity; 5] = [
        Severity::Log,
        Severity::Info,
        Severity::Debug,
        Severity::Warn,
        Severity::Error,
    ];

    /// Returns the stable lowercase wire name.
    ///
    /// # Example
    /// ```
    /// use loggate::Severity;
    ///
    /// assert_eq!(Severity::Warn.as_str(), "warn");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Log => "log",
            Severity::Info => "info",
            Severity::Debug => "debug",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
