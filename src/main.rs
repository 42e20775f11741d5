// Main entry point for the cutout-server application.
// Parses configuration, wires the background-removal provider client into the
// Axum router, and starts the HTTP server.

mod listeners;
mod provider;
mod web;

use clap::Parser;
use provider::{DEFAULT_PROVIDER_URL, RemoveBgClient, RemoveBgConfig};
use std::sync::Arc;
use tokio::signal;
use tracing::Level;
use url::Url;
use web::SharedRemover;

/// Command line arguments for cutout-server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct AppConfig {
    /// Hostname/IP to bind the server to.
    /// If this option is specified without value, it will default to "*", meaning the server will listen on all interfaces.
    #[arg(long, env = "CUTOUT_SERVER_HOST", default_value = "localhost", num_args = 0..=1, default_missing_value = "*")]
    host: String,

    /// Port number to listen on.
    #[arg(short, long, env = "CUTOUT_SERVER_PORT", default_value_t = 6464)]
    port: u16,

    /// API key for the background-removal provider.
    /// May be omitted: the server starts anyway and refuses removal requests until a key is configured.
    #[arg(long, env = "REMOVE_BG_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Endpoint of the remove.bg-compatible background-removal API.
    #[arg(long, env = "CUTOUT_SERVER_PROVIDER_URL", default_value = DEFAULT_PROVIDER_URL)]
    provider_url: Url,
}

#[tokio::main]
async fn main() {
    // Parse command line args and environment variables
    let config = AppConfig::parse();

    // Initialize tracing subscriber for structured logging.
    // Logs will go to stdout. Adjust level and format as needed.
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO) // Set to DEBUG for per-field multipart logs
        .with_target(true) // Include module path in logs
        .with_file(true) // Include source file name
        .with_line_number(true) // Include line numbers
        .init();

    tracing::info!("Starting cutout-server...");

    if config.api_key.is_none() {
        tracing::warn!(
            "No provider API key configured (REMOVE_BG_API_KEY). The server will run, but removal requests will fail until a key is set."
        );
    }

    // --- Initialize the provider client ---
    let remover: SharedRemover = Arc::new(RemoveBgClient::new(RemoveBgConfig {
        endpoint: config.provider_url.clone(),
        api_key: config.api_key.clone(),
    }));
    tracing::info!("Provider client initialized for {}", config.provider_url);

    // --- Build Axum Application Router ---
    let app = web::create_app(remover);
    tracing::info!("Axum router configured.");

    // --- Start HTTP Server ---
    let listener = match listeners::create_listener(&config.host, config.port).await {
        Ok((addr, l)) => {
            tracing::info!("Server successfully bound. Listening on {}", addr);
            l
        }
        Err(e) => {
            tracing::error!("FATAL: Failed to bind server: {}", e);
            eprintln!("FATAL: Could not bind server. Error: {}. Exiting.", e);
            std::process::exit(1);
        }
    };

    // Run the server.
    if let Err(e) = axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("Server run error: {}", e);
        eprintln!("ERROR: Server shut down unexpectedly. Error: {}", e);
    }

    tracing::info!("cutout-server has shut down.");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
