use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::Context;
use tracing::{info, Level};

use issuetrack::MemoryIssueStorage;
use issuetrack_server::api::{create_router, AppState};
use issuetrack_server::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();

    // Configure logging based on verbosity flags
    let log_level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .init();

    info!("Starting issuetrack-server v{}", env!("CARGO_PKG_VERSION"));

    let storage = MemoryIssueStorage::with_sample_issues();
    info!("Seeded store with {} sample issues", storage.len().await);

    let state: AppState = Arc::new(storage);
    let app = create_router(state);

    let ip: IpAddr = cli
        .host
        .parse()
        .with_context(|| format!("invalid bind address: {}", cli.host))?;
    let addr = SocketAddr::from((ip, cli.port));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Listening on http://{addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
