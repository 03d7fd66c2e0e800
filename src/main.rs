//! Vitrine HTTP server entry point
//!
//! Serves the built frontend and the gallery API.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vitrine::core::catalog::Catalog;
use vitrine::core::config::Config;
use vitrine::core::state::AppState;
use vitrine::http;

/// Vitrine - static gallery server
///
/// Serves a built frontend from disk together with a small JSON API:
/// a connectivity check and the catalog of visualizations discovered
/// under the asset tree at startup.
#[derive(Parser, Debug)]
#[command(name = "vitrine")]
#[command(version)]
#[command(about = "Static gallery server for browser visualizations", long_about = None)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, env = "VITRINE_CONFIG")]
    config: Option<PathBuf>,

    /// Address to bind, overriding config file and environment
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on, overriding config file and environment
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory containing the built frontend
    #[arg(short, long)]
    dist_dir: Option<PathBuf>,

    /// Log output format
    #[arg(long, default_value = "pretty")]
    log_format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum LogFormat {
    /// Human-readable output (default)
    Pretty,
    /// JSON output for log collectors
    Json,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(cli.log_format);

    tracing::info!("Starting vitrine gallery server");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let mut config = Config::load(cli.config.as_deref())?;

    // CLI flags win over file and environment
    config.merge_cli(cli.host, cli.port, cli.dist_dir);
    config.validate()?;

    // Log configuration details
    config.log_config();

    // Scan the asset tree for visualization cards. A failed scan
    // leaves the gallery empty but keeps the server up.
    let catalog = match Catalog::load(&config.assets.dist_dir) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::warn!("Catalog scan failed: {e}");
            tracing::info!("Continuing with an empty catalog...");
            Catalog::default()
        }
    };

    // Create shared state and build the router
    let state = AppState::new(config.clone(), catalog);
    let app = http::app(state);

    // Bind to address and start server
    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("Service ready - API at http://{}/api/hello", addr);

    // Serve the application
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "vitrine=info,tower_http=debug".into());

    match format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

/// Resolve when SIGINT or SIGTERM arrives.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
