//! Locale Routing Gateway
//!
//! A small gateway that decides, per request, whether to pass the request
//! through unchanged, rewrite its path under the default locale, or hand it
//! to a full locale negotiator.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌────────────────────────────────────────────────┐
//!                    │                LOCALE GATEWAY                   │
//!                    │                                                 │
//!   Client Request   │  ┌─────────┐   ┌────────────┐   ┌───────────┐  │
//!   ─────────────────┼─▶│  http   │──▶│  routing   │──▶│ decision  │  │
//!                    │  │ server  │   │  matcher   │   │  policy   │  │
//!                    │  └─────────┘   └────────────┘   └─────┬─────┘  │
//!                    │                                       │        │
//!                    │            Pass ──────────────────────┤        │
//!                    │            Rewrite(/en + path) ───────┤        │
//!                    │            Delegate ──▶ negotiator ───┤        │
//!                    │                                       ▼        │
//!   Client Response  │                                 ┌──────────┐   │
//!   ◀────────────────┼─────────────────────────────────│ response │   │
//!                    │                                 └──────────┘   │
//!                    │  ┌──────────────────────────────────────────┐  │
//!                    │  │          Cross-Cutting Concerns          │  │
//!                    │  │  ┌────────┐ ┌─────────────┐ ┌─────────┐  │  │
//!                    │  │  │ config │ │observability│ │request  │  │  │
//!                    │  │  │        │ │ logs/metrics│ │   ids   │  │  │
//!                    │  │  └────────┘ └─────────────┘ └─────────┘  │  │
//!                    │  └──────────────────────────────────────────┘  │
//!                    └────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use locale_gateway::config::{load_config, mode_from_env, GatewayConfig};
use locale_gateway::http::GatewayServer;
use locale_gateway::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "locale-gateway")]
#[command(about = "Locale routing gateway for a web application", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file; defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_tracing();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GatewayConfig::default(),
    };

    // The one environment read: GATEWAY_ENV, at startup only. Everything
    // downstream takes the mode as an explicit value.
    if let Some(mode) = mode_from_env() {
        config.mode = mode;
    }

    tracing::info!(
        mode = ?config.mode,
        bind_address = %config.listener.bind_address,
        default_locale = %config.locales.default_locale,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    // The binary runs the development fast path standalone. Production mode
    // needs a negotiator, which only an embedding application can supply, so
    // GatewayServer::new reports MissingNegotiator here.
    let server = GatewayServer::new(config, None)?;
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
