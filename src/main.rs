//! HTTP server for the Bracket Tax Engine.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bracket_tax_engine::api::{AppState, create_router};
use bracket_tax_engine::config::ConfigLoader;

/// Serve progressive tax calculations over HTTP.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Directory holding registry.yaml and tables/. Built-in tables are used when omitted.
    #[arg(long, env = "TAX_ENGINE_CONFIG")]
    config: Option<PathBuf>,

    /// Address to listen on.
    #[arg(long, env = "TAX_ENGINE_BIND", default_value = "127.0.0.1:3000")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ConfigLoader::load(path)?,
        None => ConfigLoader::builtin()?,
    };
    info!(
        schedule = %config.metadata().name,
        years = ?config.registry().years(),
        default_year = %config.registry().default_year(),
        "Bracket tables loaded"
    );

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    info!(address = %args.bind, "Listening");
    axum::serve(listener, router).await?;

    Ok(())
}
