//! # Lazy, exactly-once provider acquisition.
//!
//! [`Acquirer`] owns the "provider ready" latch. The first print request
//! that finds no provider handle starts one asynchronous acquisition
//! through the [`CapabilityHost`] port; every print that arrives while the
//! acquisition is in flight suspends behind the same latch (fan-out: many
//! callers await one acquisition). On success the handle is stored for the
//! life of the gateway and the latch resolves once, replaying suspended
//! prints in the order they suspended.
//!
//! ## Failure policy
//! Attempts are bounded by `GatewaySettings::acquire_attempts`, spaced by
//! the configured backoff; a non-retryable error (see
//! [`AcquireError::is_retryable`]) short-circuits the budget. After the
//! budget is spent the acquirer is terminally failed: continuations already
//! parked on the latch never fire, later prints are dropped eagerly, and a
//! diagnostic goes to stderr — the gateway cannot log its own outage
//! through itself. Call sites never observe any of this.

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;

use crate::config::GatewaySettings;
use crate::error::AcquireError;
use crate::gate::Latch;
use crate::provider::port::ProviderRef;

/// # Host-side capability resolver.
///
/// The port through which the gateway requests its logging provider.
/// `acquire` is called with the configured capability name (by default
/// [`LOGGER_CAPABILITY`](crate::LOGGER_CAPABILITY)) and resolves to a
/// constructible provider instance.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use async_trait::async_trait;
/// use loggate::{AcquireError, CapabilityHost, ProviderRef};
///
/// struct Host { provider: ProviderRef }
///
/// #[async_trait]
/// impl CapabilityHost for Host {
///     async fn acquire(&self, capability: &str) -> Result<ProviderRef, AcquireError> {
///         if capability == "core.logger" {
///             Ok(Arc::clone(&self.provider))
///         } else {
///             Err(AcquireError::Unavailable { capability: capability.into() })
///         }
///     }
/// }
/// ```
#[async_trait]
pub trait CapabilityHost: Send + Sync + 'static {
    /// Resolves a named capability to a provider instance.
    async fn acquire(&self, capability: &str) -> Result<ProviderRef, AcquireError>;
}

enum AcquireState {
    Idle,
    InFlight,
    Failed,
}

struct Shared {
    host: Arc<dyn CapabilityHost>,
    settings: GatewaySettings,
    ready: Latch<ProviderRef>,
    state: Mutex<AcquireState>,
}

/// Exactly-once acquisition driver plus the "provider ready" latch.
pub(crate) struct Acquirer {
    shared: Arc<Shared>,
}

impl Acquirer {
    pub(crate) fn new(host: Arc<dyn CapabilityHost>, settings: GatewaySettings) -> Self {
        Self {
            shared: Arc::new(Shared {
                host,
                settings,
                ready: Latch::new(),
                state: Mutex::new(AcquireState::Idle),
            }),
        }
    }

    /// The acquired handle, once the latch has resolved.
    pub(crate) fn provider(&self) -> Option<ProviderRef> {
        self.shared.ready.get()
    }

    /// True once the retry budget is spent without a provider.
    pub(crate) fn has_failed(&self) -> bool {
        matches!(*self.shared.lock_state(), AcquireState::Failed)
    }

    /// Suspends `f` behind the provider latch (fires immediately if ready).
    pub(crate) fn when_ready(&self, f: impl FnOnce(&ProviderRef) + Send + 'static) {
        self.shared.ready.when_resolved(f);
    }

    /// Starts the acquisition task if none has started yet.
    ///
    /// Idempotent against re-entry: only the first call per gateway
    /// lifetime spawns; in-flight and failed states are left untouched.
    pub(crate) fn request(&self) {
        {
            let mut state = self.shared.lock_state();
            match *state {
                AcquireState::Idle => *state = AcquireState::InFlight,
                AcquireState::InFlight | AcquireState::Failed => return,
            }
        }

        let shared = Arc::clone(&self.shared);
        tokio::spawn(async move {
            shared.run_acquisition().await;
        });
    }
}

impl Shared {
    fn lock_state(&self) -> std::sync::MutexGuard<'_, AcquireState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn run_acquisition(self: Arc<Self>) {
        let capability = self.settings.capability.as_ref();
        let attempts = self.settings.acquire_attempts.max(1);

        for attempt in 0..attempts {
            match self.host.acquire(capability).await {
                Ok(provider) => {
                    self.ready.resolve(provider);
                    return;
                }
                Err(err) => {
                    let last = attempt + 1 == attempts || !err.is_retryable();
                    if last {
                        *self.lock_state() = AcquireState::Failed;
                        eprintln!(
                            "[loggate] giving up on capability {capability:?} after {} attempt(s): {}",
                            attempt + 1,
                            err.as_message()
                        );
                        return;
                    }
                    let delay = self.settings.backoff.delay_for(attempt);
                    eprintln!(
                        "[loggate] acquiring {capability:?} failed ({}), retrying in {delay:?}",
                        err.as_label()
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::port::LogProvider;
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct NullProvider;

    #[async_trait]
    impl LogProvider for NullProvider {
        async fn log(&self, _: Option<&str>, _: &[Value]) {}
        async fn info(&self, _: Option<&str>, _: &[Value]) {}
        async fn debug(&self, _: Option<&str>, _: &[Value]) {}
        async fn warn(&self, _: Option<&str>, _: &[Value]) {}
        async fn error(&self, _: Option<&str>, _: &[Value]) {}
    }

    /// Fails `failures` times, then succeeds.
    struct FlakyHost {
        failures: usize,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl CapabilityHost for FlakyHost {
        async fn acquire(&self, _capability: &str) -> Result<ProviderRef, AcquireError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.failures {
                Err(AcquireError::Failed {
                    error: "not yet".into(),
                })
            } else {
                Ok(Arc::new(NullProvider))
            }
        }
    }

    struct MissingHost;

    #[async_trait]
    impl CapabilityHost for MissingHost {
        async fn acquire(&self, capability: &str) -> Result<ProviderRef, AcquireError> {
            Err(AcquireError::Unavailable {
                capability: capability.into(),
            })
        }
    }

    fn fast_settings(attempts: u32) -> GatewaySettings {
        GatewaySettings {
            acquire_attempts: attempts,
            backoff: crate::policies::BackoffPolicy {
                first: Duration::from_millis(1),
                max: Duration::from_millis(2),
                factor: 1.0,
                jitter: crate::policies::JitterPolicy::None,
            },
            ..GatewaySettings::default()
        }
    }

    async fn wait_until(mut done: impl FnMut() -> bool) {
        for _ in 0..500 {
            if done() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(2)).await;
        }
        panic!("condition not reached in time");
    }

    #[tokio::test]
    async fn retries_until_the_host_recovers() {
        let host = Arc::new(FlakyHost {
            failures: 2,
            calls: AtomicUsize::new(0),
        });
        let acquirer = Acquirer::new(host.clone(), fast_settings(3));

        acquirer.request();
        wait_until(|| acquirer.provider().is_some()).await;

        assert_eq!(host.calls.load(Ordering::SeqCst), 3);
        assert!(!acquirer.has_failed());
    }

    #[tokio::test]
    async fn exhausted_budget_is_terminal() {
        let host = Arc::new(FlakyHost {
            failures: usize::MAX,
            calls: AtomicUsize::new(0),
        });
        let acquirer = Acquirer::new(host.clone(), fast_settings(2));

        acquirer.request();
        wait_until(|| acquirer.has_failed()).await;

        assert_eq!(host.calls.load(Ordering::SeqCst), 2);
        assert!(acquirer.provider().is_none());

        // A later request must not restart the acquisition.
        acquirer.request();
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(host.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn non_retryable_error_short_circuits() {
        let acquirer = Acquirer::new(Arc::new(MissingHost), fast_settings(5));

        acquirer.request();
        wait_until(|| acquirer.has_failed()).await;
        assert!(acquirer.provider().is_none());
    }

    #[tokio::test]
    async fn request_is_idempotent_while_in_flight() {
        let host = Arc::new(FlakyHost {
            failures: 1,
            calls: AtomicUsize::new(0),
        });
        let acquirer = Acquirer::new(host.clone(), fast_settings(3));

        acquirer.request();
        acquirer.request();
        acquirer.request();
        wait_until(|| acquirer.provider().is_some()).await;

        // One failure plus one success; duplicate requests spawned nothing.
        assert_eq!(host.calls.load(Ordering::SeqCst), 2);
    }
}
