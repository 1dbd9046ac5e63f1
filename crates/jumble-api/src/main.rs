use clap::Parser;
use jumble_api::config::ServiceConfig;
use jumble_api::tracing_setup::{LogFormat, init_tracing};
use jumble_api::{AppState, COMPLEX_ARRAY_PATH, create_app};
use tracing::{debug, info, warn};

/// Serve random, arbitrarily nested JSON for parser practice.
#[derive(Parser, Debug)]
#[command(name = "jumble", version, about)]
struct Cli {
    /// Interface to bind, overriding JUMBLE_HOST
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on, overriding JUMBLE_PORT
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    // Variables already present in the process environment take precedence.
    let dotenv = dotenvy::dotenv();
    init_tracing(LogFormat::from_env())?;

    match dotenv {
        Ok(path) => info!(path = %path.display(), "Loaded .env file"),
        Err(e) if e.not_found() => debug!("No .env file found; using process environment"),
        Err(e) => warn!(error = %e, "Ignoring unreadable .env file"),
    }

    info!(version = env!("CARGO_PKG_VERSION"), "Starting Jumble random data API");

    let mut config = ServiceConfig::from_env();
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let app = create_app(AppState::new(config.generation));
    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(%addr, "Server running on http://{addr}");
    info!("Data endpoint: http://{addr}{COMPLEX_ARRAY_PATH}?size=15&maxDepth=4");

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Could not listen for Ctrl-C; running until killed");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
