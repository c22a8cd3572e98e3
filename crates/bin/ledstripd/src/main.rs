//! # ledstripd — LED strip daemon
//!
//! Composition root that wires the strip driver, the light service and the
//! HTTP API together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`ledstrip.toml` plus env overrides)
//! - Install the tracing subscriber
//! - Pick the strip driver (virtual or SPI)
//! - Build the axum router around the light service
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT), darkening the strip on exit
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;
mod driver;

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use ledstrip_adapter_http_axum::router;
use ledstrip_adapter_http_axum::state::AppState;
use ledstrip_app::ports::StripDriver;
use ledstrip_app::services::light_service::LightService;
use ledstrip_domain::strip::LedStrip;

use crate::config::Config;
use crate::driver::AnyDriver;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    let filter = EnvFilter::try_new(&config.logging.filter)
        .with_context(|| format!("invalid log filter {:?}", config.logging.filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Strip
    let strip = LedStrip::new(config.strip.num_leds)?;
    let driver = AnyDriver::from_config(&config.strip)?;
    let driver_name = driver.name();
    let service = Arc::new(LightService::new(strip, driver));

    // HTTP
    let app = router::build(AppState::from_arc(Arc::clone(&service)));
    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(
        %bind_addr,
        driver = driver_name,
        num_leds = config.strip.num_leds,
        "ledstripd listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Err(err) = service.turn_off().await {
        tracing::warn!(error = %err, "failed to darken strip on shutdown");
    }
    tracing::info!("ledstripd stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl+C");
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
                tracing::error!(error = %err, "failed to listen for SIGTERM");
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
