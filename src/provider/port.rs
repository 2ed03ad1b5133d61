//! # Provider port and severity dispatch.
//!
//! A [`LogProvider`] is the external capability that ultimately renders log
//! output. It exposes one async method per severity, each receiving the
//! decoded source tag and canonical argument sequence; completion of the
//! returned future signals that the event has been rendered.
//!
//! [`dispatch`] is the single, explicit mapping from [`Severity`] to a
//! provider method. Being an exhaustive `match` over a closed enum, the
//! mapping is validated at compile time rather than resolved per call.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::envelope::Severity;

/// Shared handle to an acquired provider.
pub type ProviderRef = Arc<dyn LogProvider>;

/// # External logging capability.
///
/// Resolved through [`CapabilityHost`](crate::CapabilityHost) and then held
/// by the gateway for its entire lifetime. Implementations should not block
/// the async runtime.
///
/// # Example
/// ```
/// use async_trait::async_trait;
/// use serde_json::Value;
/// use loggate::LogProvider;
///
/// struct Stdout;
///
/// #[async_trait]
/// impl LogProvider for Stdout {
///     async fn log(&self, source: Option<&str>, args: &[Value]) {
///         println!("[{}] {:?}", source.unwrap_or("-"), args);
///     }
///     async fn info(&self, source: Option<&str>, args: &[Value]) {
///         self.log(source, args).await;
///     }
///     async fn debug(&self, source: Option<&str>, args: &[Value]) {
///         self.log(source, args).await;
///     }
///     async fn warn(&self, source: Option<&str>, args: &[Value]) {
///         self.log(source, args).await;
///     }
///     async fn error(&self, source: Option<&str>, args: &[Value]) {
///         self.log(source, args).await;
///     }
/// }
/// ```
#[async_trait]
pub trait LogProvider: Send + Sync + 'static {
    /// Renders a plain log line.
    async fn log(&self, source: Option<&str>, args: &[Value]);

    /// Renders an informational message.
    async fn info(&self, source: Option<&str>, args: &[Value]);

    /// Renders a developer-facing diagnostic.
    async fn debug(&self, source: Option<&str>, args: &[Value]);

    /// Renders a warning.
    async fn warn(&self, source: Option<&str>, args: &[Value]);

    /// Renders an error.
    async fn error(&self, source: Option<&str>, args: &[Value]);
}

/// Routes one decoded log event to the provider method named by `severity`.
pub async fn dispatch(
    provider: &dyn LogProvider,
    severity: Severity,
    source: Option<&str>,
    args: &[Value],
) {
    match severity {
        Severity::Log => provider.log(source, args).await,
        Severity::Info => provider.info(source, args).await,
        Severity::Debug => provider.debug(source, args).await,
        Severity::Warn => provider.warn(source, args).await,
        Severity::Error => provider.error(source, args).await,
    }
}
