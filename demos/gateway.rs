//! End-to-end gateway wiring: bind, emit, bus round-trip, provider print.
//!
//! Run with: `cargo run --example gateway`

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::time::{sleep, Duration};

use loggate::{
    args, AcquireError, Bus, CapabilityHost, Console, ControlMessage, DebugGateway,
    GatewayConfig, GatewaySettings, LogProvider, ProviderRef, Severity,
};

/// Renders decoded events to stdout.
struct StdoutProvider;

impl StdoutProvider {
    fn line(&self, severity: &str, source: Option<&str>, args: &[Value]) {
        let rendered: Vec<String> = args.iter().map(ToString::to_string).collect();
        println!("{severity:>5} [{}] {}", source.unwrap_or("-"), rendered.join(" "));
    }
}

#[async_trait]
impl LogProvider for StdoutProvider {
    async fn log(&self, source: Option<&str>, args: &[Value]) {
        self.line("log", source, args);
    }
    async fn info(&self, source: Option<&str>, args: &[Value]) {
        self.line("info", source, args);
    }
    async fn debug(&self, source: Option<&str>, args: &[Value]) {
        self.line("debug", source, args);
    }
    async fn warn(&self, source: Option<&str>, args: &[Value]) {
        self.line("warn", source, args);
    }
    async fn error(&self, source: Option<&str>, args: &[Value]) {
        self.line("error", source, args);
    }
}

struct Host;

#[async_trait]
impl CapabilityHost for Host {
    async fn acquire(&self, capability: &str) -> Result<ProviderRef, AcquireError> {
        println!("(host) acquiring {capability:?}");
        Ok(Arc::new(StdoutProvider))
    }
}

/// Immediate stderr target for the error side channel.
struct StderrConsole;

impl Console for StderrConsole {
    fn write(&self, severity: Severity, args: &[Value]) {
        eprintln!("(console) {severity}: {args:?}");
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let settings = GatewaySettings::default();
    let bus = Arc::new(Bus::new(settings.bus_capacity));
    let gateway = DebugGateway::new(settings, bus.clone(), Arc::new(Host));

    // Host side: route frames on the bound channel back into the print path.
    let mut frames = bus.subscribe();
    let printer = gateway.clone();
    tokio::spawn(async move {
        while let Ok(frame) = frames.recv().await {
            printer.print(&frame.envelope);
        }
    });

    // Calls made before the bind are parked, not lost.
    gateway.log(args!["booting", 1]);
    let worker = gateway.logger("worker");
    worker.info(args!["spawned before bind"]);

    // The control message arrives; everything parked replays in order.
    gateway.on_message(
        "control",
        ControlMessage::bind("debug.chan", GatewayConfig::new(Arc::new(StderrConsole))),
    );

    worker.warn(args!["late event", {"attempt": 2}]);
    gateway.error(args!["boom"]); // also written directly to the console

    sleep(Duration::from_millis(100)).await;
}
