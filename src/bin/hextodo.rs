//! Runs the hextodo server.
//!
//! Usage:
//!
//! ```text
//! hextodo [--host <HOST>] [--port <PORT>] [--log-filter <FILTER>]
//! ```
//!
//! REST endpoints are served under `/tasks` and GraphQL under `/graphql`.
//! Tasks live in memory and are lost when the process exits.

use clap::Parser;
use hextodo::{config::ServerConfig, server::in_memory_router};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(filter: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Resolves once `signal` fires. A signal that cannot be listened for never
/// resolves, so the server keeps running.
async fn shutdown_on(signal: impl Future<Output = std::io::Result<()>>) {
    if let Err(err) = signal.await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_tracing(&config.log_filter);

    let app = in_memory_router();
    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;

    tracing::info!("server running on http://{address}");
    tracing::info!("REST API: http://{address}/tasks");
    tracing::info!("GraphQL:  http://{address}/graphql");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_on(tokio::signal::ctrl_c()))
        .await?;
    Ok(())
}
