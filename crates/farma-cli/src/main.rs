//! farma-access — MCP access server for the farma product catalog.
//!
//! Reads configuration from flags or environment variables:
//! - `REDIS_URL` — inventory store connection URL
//! - `PINECONE_API_KEY` — vector index API key
//! - `PINECONE_INDEX_HOST_URL` — vector index data-plane host
//! - `FARMA_BIND_ADDR` — SSE listen address (default `127.0.0.1:6937`)
//!
//! Serves the MCP tools over SSE by default, or over stdio with `--stdio`
//! for process-spawning clients.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use farma_catalog::CatalogIndex;
use farma_core::config::{Config, DEFAULT_BIND_ADDR};
use farma_inventory::{RedisInventory, DEFAULT_POOL_MAX};
use farma_mcp::{serve_sse, serve_stdio, FarmaMcpService, ServeConfig};

#[derive(Parser)]
#[command(name = "farma-access")]
#[command(version)]
#[command(about = "MCP access server for the farma product catalog")]
struct Cli {
    /// Redis connection URL for the inventory store
    #[arg(long, env = "REDIS_URL")]
    redis_url: String,

    /// API key for the vector index
    #[arg(long, env = "PINECONE_API_KEY", hide_env_values = true)]
    index_api_key: String,

    /// Data-plane host URL of the vector index
    #[arg(long, env = "PINECONE_INDEX_HOST_URL")]
    index_host: String,

    /// Address to bind the SSE endpoint
    #[arg(long, env = "FARMA_BIND_ADDR", default_value = DEFAULT_BIND_ADDR)]
    bind_addr: SocketAddr,

    /// Serve over stdio instead of SSE
    #[arg(long)]
    stdio: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.stdio);

    let config = Config {
        redis_url: cli.redis_url,
        index_api_key: cli.index_api_key,
        index_host: cli.index_host,
        bind_addr: cli.bind_addr,
    };
    config.validate().context("invalid configuration")?;

    let catalog = Arc::new(
        CatalogIndex::new(&config.index_host, &config.index_api_key)
            .context("failed to build catalog client")?,
    );
    let inventory = Arc::new(
        RedisInventory::new(&config.redis_url, DEFAULT_POOL_MAX)
            .context("failed to build inventory client")?,
    );
    let service = FarmaMcpService::new(catalog, inventory);

    if cli.stdio {
        serve_stdio(service).await?;
        return Ok(());
    }

    let handle = serve_sse(service, ServeConfig::new(config.bind_addr)).await?;
    tracing::info!("Server is running on http://{}/sse", handle.bind_addr());

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for shutdown signal")?;
    tracing::info!("shutting down");
    handle.shutdown();

    Ok(())
}

fn init_tracing(stdio: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if stdio {
        // Logging to stderr only — stdout is reserved for the stdio transport.
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
