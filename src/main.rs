//! Failover demo backend.
//!
//! A backend whose availability can be flipped at runtime, used to exercise
//! upstream failover in a reverse proxy.
//!
//! # Architecture Overview
//!
//! ```text
//!   GET /control/toggle?target=<id>&active=<bool>
//!         │
//!         ▼
//!   ┌─────────┐    ┌──────────┐    ┌──────────────┐
//!   │  http   │───▶│ routing  │───▶│ availability │  (AtomicBool, Arc-shared)
//!   │ server  │    │ classify │    │    state     │
//!   └─────────┘    └──────────┘    └──────┬───────┘
//!         ▲                               │
//!         │        GET /api*  ────────────┘  200 when active, 503 when inactive
//!         │        anything else             404
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use failover_backend::availability::{Availability, InstanceState};
use failover_backend::config::{load_config, resolve_identity, ServiceConfig};
use failover_backend::http::HttpServer;
use failover_backend::lifecycle::{spawn_signal_listener, Shutdown};
use failover_backend::observability::logging;

#[derive(Parser)]
#[command(name = "failover-backend")]
#[command(about = "Backend with a runtime availability toggle, for failover testing", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    logging::init(&config.observability.log_level);

    tracing::info!("failover-backend v{} starting", env!("CARGO_PKG_VERSION"));

    let identity = resolve_identity(config.instance.name.as_deref())?;
    let instance = Arc::new(InstanceState::new(
        identity,
        Availability::from_flag(config.instance.initially_active),
    ));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        identity = %instance.identity(),
        state = %instance.availability(),
        max_connections = config.listener.max_connections,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    spawn_signal_listener(shutdown.clone());

    let server = HttpServer::new(config, instance);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
