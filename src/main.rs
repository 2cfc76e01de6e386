use anyhow::Result;
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use sitemap::cli::{Cli, Commands};
use sitemap::config::ServeConfig;
use sitemap::http;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Crawl { site } => crawl(&site).await,
        Commands::Serve => {
            let config_str = std::fs::read_to_string(&cli.config).unwrap_or_else(|_| {
                warn!(path = %cli.config, "config file not found, using defaults");
                include_str!("../config/default.toml").to_string()
            });
            let config: ServeConfig = toml::from_str(&config_str)?;
            serve(config).await
        }
    }
}

async fn crawl(site: &str) -> Result<()> {
    let sitemap = sitemap_crawler::site(site, CancellationToken::new()).await?;
    println!("{}", serde_json::to_string_pretty(&sitemap)?);
    Ok(())
}

async fn serve(config: ServeConfig) -> Result<()> {
    // TODO apply config.read_timeout_seconds / write_timeout_seconds once a
    // request-level timeout layer is wired in.
    let addr = config.addr.clone();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "server now listening");
    axum::serve(listener, http::router(config)).await?;
    Ok(())
}
