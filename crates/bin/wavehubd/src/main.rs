//! # wavehubd — wavehub daemon
//!
//! Composition root that wires all adapters together and starts the bridge.
//!
//! ## Responsibilities
//! - Load configuration (`wavehub.toml` plus environment overrides)
//! - Install the `tracing` subscriber
//! - Construct the UDP transport and the settings source (adapters)
//! - Construct the command and bridge services, injecting adapters via port traits
//! - Run the initial registry refresh; a failure leaves the bridge with no
//!   devices but still serving
//! - Build the axum router, bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;

use std::net::IpAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use wavehub_adapter_http_axum::state::AppState;
use wavehub_adapter_settings::{FileSettingsSource, StaticSettingsSource};
use wavehub_adapter_udp::UdpTransport;
use wavehub_app::ports::SettingsSource;
use wavehub_app::services::bridge_service::BridgeService;
use wavehub_app::services::command_service::CommandService;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    let hub = config.hub_address()?;
    let transport = UdpTransport::new(config.hub.udp_config());
    tracing::info!(
        %hub,
        port = transport.config().command_port,
        "sending hub commands over udp"
    );
    let commands = Arc::new(CommandService::new(transport));

    match config.settings.path.clone() {
        Some(path) => {
            let source = FileSettingsSource::new(path);
            tracing::info!(path = %source.path().display(), "reading hub settings from file");
            serve(&config, source, commands, hub).await
        }
        None => {
            tracing::info!(
                slots = config.settings.device_status.len(),
                "using hub settings from configuration"
            );
            let source = StaticSettingsSource::new(config.settings.inline());
            serve(&config, source, commands, hub).await
        }
    }
}

async fn serve<S>(
    config: &Config,
    source: S,
    commands: Arc<CommandService<UdpTransport>>,
    hub: IpAddr,
) -> Result<(), Box<dyn std::error::Error>>
where
    S: SettingsSource + Send + Sync + 'static,
{
    let bridge = Arc::new(BridgeService::new(
        source,
        commands,
        hub,
        config.hub.policy(),
    ));
    if let Err(err) = bridge.refresh().await {
        tracing::warn!(error = %err, "starting without devices, retry with POST /api/refresh");
    }

    let app = wavehub_adapter_http_axum::router::build(AppState::from_arc(Arc::clone(&bridge)));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(hub = %bridge.hub(), "wavehubd listening on http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("wavehubd stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "could not listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "could not listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
