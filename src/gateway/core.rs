//! # The gateway: binder, formatter, entry points, and print path.
//!
//! [`DebugGateway`] composes the crate's pieces into the deferred-dispatch
//! pipeline:
//!
//! ```text
//! log/info/debug/warn/error ──► format ──► [channel latch] ──► Outbound::emit(Envelope)
//!                                                                   │ (host bus)
//!                                                                   ▼
//!                                print ◄───────────────────── host listener
//!                                  │
//!                           [provider latch] ──► print worker ──► dispatch ──► provider
//! ```
//!
//! ## Rules
//! - **Inert until bound**: nothing is emitted before a valid control
//!   message sets the channel identity; formatting calls made earlier are
//!   parked on the channel latch and replayed FIFO on bind.
//! - **Re-checked gating**: every format call re-examines the bound state;
//!   readiness is never cached at a call site.
//! - **Never fails observably**: entry points return `()`; malformed input
//!   degrades per the codec and binder rules.
//!
//! The gateway must be created inside a tokio runtime: construction spawns
//! the print worker, and the first print may spawn the acquisition task.

use std::fmt;
use std::panic::AssertUnwindSafe;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use futures::FutureExt;
use serde_json::Value;
use tokio::sync::mpsc;

use crate::bus::Outbound;
use crate::config::GatewaySettings;
use crate::envelope::{codec, Envelope, Severity};
use crate::gate::Latch;
use crate::gateway::control::{Console, ConsoleRef, ControlMessage, GatewayConfig, CONTROL_SOURCE};
use crate::gateway::logger::Logger;
use crate::gateway::payload::Payload;
use crate::provider::{dispatch, Acquirer, CapabilityHost, ProviderRef};

/// One decoded log event waiting on the provider dispatch queue.
struct PrintJob {
    provider: ProviderRef,
    severity: Severity,
    source: Option<String>,
    args: Vec<Value>,
}

#[derive(Default)]
struct Bound {
    channel: Option<Arc<str>>,
    config: Option<GatewayConfig>,
}

/// Deferred-dispatch logging gateway.
///
/// Accepts log calls before its output channel exists, buffers them safely,
/// and replays them once the channel and the downstream provider become
/// available. See the [module docs](self) for the pipeline.
pub struct DebugGateway {
    weak: Weak<DebugGateway>,
    outbound: Arc<dyn Outbound>,
    acquirer: Acquirer,
    channel_ready: Latch<()>,
    bound: Mutex<Bound>,
    print_tx: mpsc::UnboundedSender<PrintJob>,
}

impl DebugGateway {
    /// Creates a gateway wired to an outbound port and a capability host.
    ///
    /// Must be called inside a tokio runtime.
    ///
    /// # Example
    /// ```no_run
    /// use std::sync::Arc;
    /// use loggate::{args, Bus, DebugGateway, GatewaySettings};
    /// # use loggate::{AcquireError, CapabilityHost, ProviderRef};
    /// # struct Host;
    /// # #[async_trait::async_trait]
    /// # impl CapabilityHost for Host {
    /// #     async fn acquire(&self, c: &str) -> Result<ProviderRef, AcquireError> {
    /// #         Err(AcquireError::Unavailable { capability: c.into() })
    /// #     }
    /// # }
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let settings = GatewaySettings::default();
    /// let bus = Arc::new(Bus::new(settings.bus_capacity));
    /// let gateway = DebugGateway::new(settings, bus.clone(), Arc::new(Host));
    ///
    /// gateway.log(args!["hello", 42]); // parked until a control bind
    /// # }
    /// ```
    pub fn new(
        settings: GatewaySettings,
        outbound: Arc<dyn Outbound>,
        host: Arc<dyn CapabilityHost>,
    ) -> Arc<Self> {
        let (print_tx, print_rx) = mpsc::unbounded_channel();
        let gateway = Arc::new_cyclic(|weak| Self {
            weak: weak.clone(),
            outbound,
            acquirer: Acquirer::new(host, settings),
            channel_ready: Latch::new(),
            bound: Mutex::new(Bound::default()),
            print_tx,
        });
        tokio::spawn(print_worker(print_rx));
        gateway
    }

    // ---- Configuration binder ----

    /// Handles one message of the control inbound protocol.
    ///
    /// Binds exactly once: `source` must be the trusted control origin, the
    /// message must carry both a channel and a configuration, and no channel
    /// may be bound yet. Everything else is a silent no-op — including
    /// re-binds after a successful one (idempotence).
    pub fn on_message(&self, source: &str, message: ControlMessage) {
        if source != CONTROL_SOURCE {
            return;
        }
        {
            let mut bound = self.lock_bound();
            if bound.channel.is_some() {
                return;
            }
            let (Some(channel), Some(config)) = (message.channel, message.config) else {
                return;
            };
            bound.channel = Some(channel);
            bound.config = Some(config);
        }
        // Fires parked formatting calls FIFO; late callers find the latch
        // resolved and emit immediately.
        self.channel_ready.resolve(());
    }

    /// True once a valid control bind has occurred.
    pub fn is_bound(&self) -> bool {
        self.lock_bound().channel.is_some()
    }

    /// The bound channel identity, if any.
    pub fn channel(&self) -> Option<Arc<str>> {
        self.lock_bound().channel.clone()
    }

    // ---- Severity entry points ----

    /// Emits a plain log event with local origin.
    pub fn log(&self, payload: impl Into<Payload>) {
        self.format(Severity::Log, None, payload.into());
    }

    /// Emits an info event with local origin.
    pub fn info(&self, payload: impl Into<Payload>) {
        self.format(Severity::Info, None, payload.into());
    }

    /// Emits a debug event with local origin.
    pub fn debug(&self, payload: impl Into<Payload>) {
        self.format(Severity::Debug, None, payload.into());
    }

    /// Emits a warning event with local origin.
    pub fn warn(&self, payload: impl Into<Payload>) {
        self.format(Severity::Warn, None, payload.into());
    }

    /// Emits an error event with local origin.
    ///
    /// In addition to the buffered envelope path, writes the arguments
    /// directly to the configured console when that console is not itself a
    /// gateway — an immediate side channel for error visibility.
    pub fn error(&self, payload: impl Into<Payload>) {
        let payload = payload.into();
        self.format(Severity::Error, None, payload.clone());
        if let Some(console) = self.console() {
            if !console.is_gateway() {
                console.write(Severity::Error, &payload.to_values());
            }
        }
    }

    /// Returns a logger whose events carry `name` as their source tag.
    ///
    /// Multiple named loggers multiplex through one gateway and one channel.
    ///
    /// # Example
    /// ```no_run
    /// # use std::sync::Arc;
    /// # use loggate::{args, Bus, DebugGateway, GatewaySettings};
    /// # use loggate::{AcquireError, CapabilityHost, ProviderRef};
    /// # struct Host;
    /// # #[async_trait::async_trait]
    /// # impl CapabilityHost for Host {
    /// #     async fn acquire(&self, c: &str) -> Result<ProviderRef, AcquireError> {
    /// #         Err(AcquireError::Unavailable { capability: c.into() })
    /// #     }
    /// # }
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// # let gateway = DebugGateway::new(
    /// #     GatewaySettings::default(),
    /// #     Arc::new(Bus::new(8)),
    /// #     Arc::new(Host),
    /// # );
    /// let worker = gateway.logger("worker");
    /// worker.info(args!["spawned"]);
    /// # }
    /// ```
    pub fn logger(self: &Arc<Self>, name: impl Into<Arc<str>>) -> Logger {
        Logger::new(Arc::clone(self), name)
    }

    // ---- Message formatter ----

    /// Canonicalizes a raw payload and forwards it through the channel gate.
    pub(crate) fn format(&self, severity: Severity, source: Option<Arc<str>>, payload: Payload) {
        let values = canonicalize(payload, source.as_deref());
        self.forward(severity, source, values);
    }

    fn forward(&self, severity: Severity, source: Option<Arc<str>>, values: Vec<Value>) {
        // Gating is re-checked on every call: readiness may have changed
        // since the last one.
        let Some(channel) = self.channel() else {
            let weak = self.weak.clone();
            self.channel_ready.when_resolved(move |_| {
                if let Some(gateway) = weak.upgrade() {
                    gateway.forward(severity, source, values);
                }
            });
            return;
        };
        let envelope = Envelope::new(severity, source.as_deref(), codec::encode(&values));
        self.outbound.emit(&channel, envelope);
    }

    // ---- Print path ----

    /// Renders an envelope handed back by the host, via the provider.
    ///
    /// The first call triggers provider acquisition; calls arriving before
    /// the provider resolves are parked on the provider latch and replayed
    /// FIFO. If acquisition has terminally failed, the envelope is dropped
    /// with a stderr diagnostic.
    pub fn print(&self, envelope: &Envelope) {
        if let Some(provider) = self.acquirer.provider() {
            self.enqueue(provider, envelope.clone());
            return;
        }
        if self.acquirer.has_failed() {
            eprintln!(
                "[loggate] no logging provider; dropping {} event",
                envelope.severity
            );
            return;
        }
        self.acquirer.request();
        let weak = self.weak.clone();
        let envelope = envelope.clone();
        self.acquirer.when_ready(move |provider| {
            if let Some(gateway) = weak.upgrade() {
                gateway.enqueue(provider.clone(), envelope);
            }
        });
    }

    fn enqueue(&self, provider: ProviderRef, envelope: Envelope) {
        // Self-origin suppression: printing into a console that is itself a
        // gateway would echo forever.
        if self.console().is_some_and(|c| c.is_gateway()) {
            return;
        }
        let args = codec::decode(&envelope.msg);
        let _ = self.print_tx.send(PrintJob {
            provider,
            severity: envelope.severity,
            source: envelope.source,
            args,
        });
    }

    fn console(&self) -> Option<ConsoleRef> {
        self.lock_bound()
            .config
            .as_ref()
            .map(|config| Arc::clone(&config.global.console))
    }

    // Short critical sections only; a poisoned lock still holds coherent
    // bind state, so keep serving it.
    fn lock_bound(&self) -> MutexGuard<'_, Bound> {
        self.bound.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Console for DebugGateway {
    fn write(&self, severity: Severity, args: &[Value]) {
        self.format(severity, None, Payload::Values(args.to_vec()));
    }

    fn is_gateway(&self) -> bool {
        true
    }
}

impl fmt::Display for DebugGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[Console]")
    }
}

/// Normalizes a raw payload into the canonical ordered value sequence.
///
/// A string payload with a source tag present may itself be a serialized
/// sequence (a relayed call): only a JSON array replaces it. Everything
/// else falls through to a single-element sequence; collections are copied
/// in order.
fn canonicalize(payload: Payload, source: Option<&str>) -> Vec<Value> {
    match payload {
        Payload::Text(text) => {
            if source.is_some() {
                if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(&text) {
                    return items;
                }
            }
            vec![Value::String(text)]
        }
        Payload::Values(values) => values,
    }
}

/// Drains print jobs in FIFO order, isolating provider panics.
async fn print_worker(mut rx: mpsc::UnboundedReceiver<PrintJob>) {
    while let Some(job) = rx.recv().await {
        let fut = dispatch(
            job.provider.as_ref(),
            job.severity,
            job.source.as_deref(),
            &job.args,
        );
        if let Err(panic) = AssertUnwindSafe(fut).catch_unwind().await {
            eprintln!(
                "[loggate] provider panicked while printing {}: {:?}",
                job.severity, panic
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;
    use crate::bus::Frame;
    use crate::error::AcquireError;
    use crate::provider::LogProvider;
    use async_trait::async_trait;
    use serde_json::json;
    use std::time::Duration;

    // ---- doubles ----

    #[derive(Default)]
    struct RecordingOutbound {
        frames: Mutex<Vec<Frame>>,
    }

    impl RecordingOutbound {
        fn frames(&self) -> Vec<Frame> {
            self.frames.lock().unwrap().clone()
        }
    }

    impl Outbound for RecordingOutbound {
        fn emit(&self, channel: &str, envelope: Envelope) {
            self.frames.lock().unwrap().push(Frame {
                channel: Arc::from(channel),
                envelope,
            });
        }
    }

    #[derive(Default)]
    struct RecordingConsole {
        writes: Mutex<Vec<(Severity, Vec<Value>)>>,
    }

    impl Console for RecordingConsole {
        fn write(&self, severity: Severity, args: &[Value]) {
            self.writes.lock().unwrap().push((severity, args.to_vec()));
        }
    }

    #[derive(Default)]
    struct RecordingProvider {
        calls: Mutex<Vec<(Severity, Option<String>, Vec<Value>)>>,
    }

    impl RecordingProvider {
        fn record(&self, severity: Severity, source: Option<&str>, args: &[Value]) {
            self.calls
                .lock()
                .unwrap()
                .push((severity, source.map(str::to_owned), args.to_vec()));
        }

        fn calls(&self) -> Vec<(Severity, Option<String>, Vec<Value>)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LogProvider for RecordingProvider {
        async fn log(&self, source: Option<&str>, args: &[Value]) {
            self.record(Severity::Log, source, args);
        }
        async fn info(&self, source: Option<&str>, args: &[Value]) {
            self.record(Severity::Info, source, args);
        }
        async fn debug(&self, source: Option<&str>, args: &[Value]) {
            self.record(Severity::Debug, source, args);
        }
        async fn warn(&self, source: Option<&str>, args: &[Value]) {
            self.record(Severity::Warn, source, args);
        }
        async fn error(&self, source: Option<&str>, args: &[Value]) {
            self.record(Severity::Error, source, args);
        }
    }

    /// Resolves immediately.
    struct ReadyHost {
        provider: Arc<RecordingProvider>,
    }

    #[async_trait]
    impl CapabilityHost for ReadyHost {
        async fn acquire(&self, _capability: &str) -> Result<ProviderRef, AcquireError> {
            Ok(self.provider.clone())
        }
    }

    /// Blocks until released by the test.
    struct GatedHost {
        provider: Arc<RecordingProvider>,
        release: Arc<tokio::sync::Notify>,
    }

    #[async_trait]
    impl CapabilityHost for GatedHost {
        async fn acquire(&self, _capability: &str) -> Result<ProviderRef, AcquireError> {
            self.release.notified().await;
            Ok(self.provider.clone())
        }
    }

    /// Never produces a provider.
    struct BrokenHost;

    #[async_trait]
    impl CapabilityHost for BrokenHost {
        async fn acquire(&self, capability: &str) -> Result<ProviderRef, AcquireError> {
            Err(AcquireError::Unavailable {
                capability: capability.into(),
            })
        }
    }

    fn bind(gateway: &DebugGateway, channel: &str, console: ConsoleRef) {
        gateway.on_message(
            CONTROL_SOURCE,
            ControlMessage::bind(channel, GatewayConfig::new(console)),
        );
    }

    fn gateway_with(
        host: Arc<dyn CapabilityHost>,
    ) -> (Arc<DebugGateway>, Arc<RecordingOutbound>) {
        let outbound = Arc::new(RecordingOutbound::default());
        let gateway = DebugGateway::new(GatewaySettings::default(), outbound.clone(), host);
        (gateway, outbound)
    }

    fn recording_gateway() -> (
        Arc<DebugGateway>,
        Arc<RecordingOutbound>,
        Arc<RecordingProvider>,
    ) {
        let provider = Arc::new(RecordingProvider::default());
        let (gateway, outbound) = gateway_with(Arc::new(ReadyHost {
            provider: provider.clone(),
        }));
        (gateway, outbound, provider)
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

    // ---- binder ----

    #[tokio::test]
    async fn log_before_bind_buffers_then_replays() {
        let (gateway, outbound, _) = recording_gateway();

        gateway.log(args!["hello", 42]);
        assert!(outbound.frames().is_empty());

        bind(&gateway, "c1", Arc::new(RecordingConsole::default()));

        let frames = outbound.frames();
        assert_eq!(frames.len(), 1);
        assert_eq!(&*frames[0].channel, "c1");
        assert_eq!(frames[0].envelope.severity, Severity::Log);
        assert_eq!(frames[0].envelope.source, None);
        assert_eq!(frames[0].envelope.msg, r#"["hello",42]"#);
        assert!(frames[0].envelope.quiet);
        assert_eq!(frames[0].envelope.request, "debug");
    }

    #[tokio::test]
    async fn binding_is_idempotent() {
        let (gateway, outbound, _) = recording_gateway();

        bind(&gateway, "c1", Arc::new(RecordingConsole::default()));
        bind(&gateway, "c2", Arc::new(RecordingConsole::default()));

        assert_eq!(gateway.channel().as_deref(), Some("c1"));

        gateway.info(args!["x"]);
        let frames = outbound.frames();
        assert_eq!(frames.len(), 1);
        assert_eq!(&*frames[0].channel, "c1");
    }

    #[tokio::test]
    async fn unauthorized_and_malformed_messages_are_ignored() {
        let (gateway, outbound, _) = recording_gateway();
        let console: ConsoleRef = Arc::new(RecordingConsole::default());

        gateway.on_message(
            "renderer",
            ControlMessage::bind("c1", GatewayConfig::new(console.clone())),
        );
        assert!(!gateway.is_bound());

        gateway.on_message(
            CONTROL_SOURCE,
            ControlMessage {
                channel: None,
                config: Some(GatewayConfig::new(console.clone())),
            },
        );
        gateway.on_message(
            CONTROL_SOURCE,
            ControlMessage {
                channel: Some(Arc::from("c1")),
                config: None,
            },
        );
        assert!(!gateway.is_bound());

        gateway.log(args!["never emitted"]);
        assert!(outbound.frames().is_empty());
    }

    // ---- formatter ----

    #[tokio::test]
    async fn suspended_calls_replay_in_order() {
        let (gateway, outbound, _) = recording_gateway();

        for i in 0..5 {
            gateway.log(args![i]);
        }
        assert!(outbound.frames().is_empty());

        bind(&gateway, "c1", Arc::new(RecordingConsole::default()));

        let msgs: Vec<String> = outbound
            .frames()
            .into_iter()
            .map(|f| f.envelope.msg)
            .collect();
        assert_eq!(msgs, vec!["[0]", "[1]", "[2]", "[3]", "[4]"]);
    }

    #[tokio::test]
    async fn calls_after_bind_emit_immediately() {
        let (gateway, outbound, _) = recording_gateway();
        bind(&gateway, "c1", Arc::new(RecordingConsole::default()));

        gateway.warn(args!["late"]);
        let frames = outbound.frames();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].envelope.severity, Severity::Warn);
    }

    #[tokio::test]
    async fn string_payload_with_source_is_parsed_as_sequence() {
        let (gateway, outbound, _) = recording_gateway();
        bind(&gateway, "c1", Arc::new(RecordingConsole::default()));

        gateway.logger("relay").log("[1,2,3]");

        let frames = outbound.frames();
        assert_eq!(frames[0].envelope.msg, "[1,2,3]");
        assert_eq!(frames[0].envelope.source.as_deref(), Some("relay"));
    }

    #[tokio::test]
    async fn string_payload_without_source_stays_opaque() {
        let (gateway, outbound, _) = recording_gateway();
        bind(&gateway, "c1", Arc::new(RecordingConsole::default()));

        gateway.log("[1,2,3]");

        assert_eq!(outbound.frames()[0].envelope.msg, r#"["[1,2,3]"]"#);
    }

    #[tokio::test]
    async fn unparseable_string_with_source_stays_opaque() {
        let (gateway, outbound, _) = recording_gateway();
        bind(&gateway, "c1", Arc::new(RecordingConsole::default()));

        gateway.logger("relay").log("not a sequence");

        assert_eq!(
            outbound.frames()[0].envelope.msg,
            r#"["not a sequence"]"#
        );
    }

    // ---- error side channel ----

    #[tokio::test]
    async fn error_writes_through_to_a_plain_console() {
        let (gateway, outbound, _) = recording_gateway();
        let console = Arc::new(RecordingConsole::default());
        bind(&gateway, "c1", console.clone());

        gateway.error(args!["boom"]);

        // Direct write happened synchronously...
        let writes = console.writes.lock().unwrap();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].0, Severity::Error);
        assert_eq!(writes[0].1, vec![json!("boom")]);
        drop(writes);

        // ...and the envelope path still ran.
        let frames = outbound.frames();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].envelope.severity, Severity::Error);
    }

    #[tokio::test]
    async fn error_passthrough_skips_gateway_consoles() {
        let (gateway, _outbound, _) = recording_gateway();
        let (nested, nested_outbound, _) = recording_gateway();

        let console: ConsoleRef = nested.clone();
        bind(&gateway, "c1", console);

        gateway.error(args!["boom"]);

        // The nested gateway was not written to directly; its own pipeline
        // stays inert (unbound).
        assert!(nested_outbound.frames().is_empty());
    }

    // ---- print path ----

    #[tokio::test]
    async fn print_routes_by_severity_with_source_and_args() {
        let (gateway, _, provider) = recording_gateway();
        bind(&gateway, "c1", Arc::new(RecordingConsole::default()));

        for severity in Severity::ALL {
            gateway.print(&Envelope::new(
                severity,
                Some("worker"),
                codec::encode(&[json!(severity.as_str())]),
            ));
        }

        wait_until(|| provider.calls().len() == Severity::ALL.len()).await;
        for (i, severity) in Severity::ALL.into_iter().enumerate() {
            let (sev, source, args) = provider.calls()[i].clone();
            assert_eq!(sev, severity);
            assert_eq!(source.as_deref(), Some("worker"));
            assert_eq!(args, vec![json!(severity.as_str())]);
        }
    }

    #[tokio::test]
    async fn prints_before_acquisition_replay_fifo() {
        let provider = Arc::new(RecordingProvider::default());
        let release = Arc::new(tokio::sync::Notify::new());
        let (gateway, _) = gateway_with(Arc::new(GatedHost {
            provider: provider.clone(),
            release: release.clone(),
        }));
        bind(&gateway, "c1", Arc::new(RecordingConsole::default()));

        for i in 0..3 {
            gateway.print(&Envelope::new(
                Severity::Log,
                None,
                codec::encode(&[json!(i)]),
            ));
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(provider.calls().is_empty());

        release.notify_one();
        wait_until(|| provider.calls().len() == 3).await;

        let args: Vec<Vec<Value>> = provider.calls().into_iter().map(|c| c.2).collect();
        assert_eq!(args, vec![vec![json!(0)], vec![json!(1)], vec![json!(2)]]);

        // Post-latch prints run in call order, after the replayed queue.
        gateway.print(&Envelope::new(
            Severity::Log,
            None,
            codec::encode(&[json!(3)]),
        ));
        wait_until(|| provider.calls().len() == 4).await;
        assert_eq!(provider.calls()[3].2, vec![json!(3)]);
    }

    #[tokio::test]
    async fn self_console_suppresses_provider_invocations() {
        let (gateway, _, provider) = recording_gateway();
        let console: ConsoleRef = gateway.clone();
        bind(&gateway, "c1", console);

        gateway.print(&Envelope::new(Severity::Log, None, "[\"x\"]".into()));
        gateway.print(&Envelope::new(Severity::Error, None, "[\"y\"]".into()));

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn terminal_acquisition_failure_drops_prints() {
        let (gateway, _) = gateway_with(Arc::new(BrokenHost));
        bind(&gateway, "c1", Arc::new(RecordingConsole::default()));

        // Unknown capability: non-retryable, terminal after one attempt.
        gateway.print(&Envelope::new(Severity::Log, None, "[1]".into()));
        tokio::time::sleep(Duration::from_millis(20)).await;

        // Fast-path drop; call sites never observe the outage.
        gateway.print(&Envelope::new(Severity::Log, None, "[2]".into()));
        assert!(gateway.is_bound());
    }

    // ---- named loggers ----

    #[tokio::test]
    async fn named_logger_tags_every_severity() {
        let (gateway, outbound, _) = recording_gateway();
        bind(&gateway, "c1", Arc::new(RecordingConsole::default()));

        let worker = gateway.logger("worker");
        worker.log(args!["a"]);
        worker.info(args!["b"]);
        worker.debug(args!["c"]);
        worker.warn(args!["d"]);
        worker.error(args!["e"]);

        let frames = outbound.frames();
        assert_eq!(frames.len(), 5);
        let severities: Vec<Severity> =
            frames.iter().map(|f| f.envelope.severity).collect();
        assert_eq!(severities, Severity::ALL.to_vec());
        assert!(frames
            .iter()
            .all(|f| f.envelope.source.as_deref() == Some("worker")));
    }

    #[tokio::test]
    async fn gateway_displays_as_console() {
        let (gateway, _, _) = recording_gateway();
        assert_eq!(gateway.to_string(), "[Console]");
    }
}
