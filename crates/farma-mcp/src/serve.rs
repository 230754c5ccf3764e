//! Transport bootstrap: SSE endpoint pair and stdio.

use std::net::SocketAddr;
use std::time::Duration;

use rmcp::{
    transport::sse_server::{SseServer, SseServerConfig},
    ServiceExt,
};
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::tools::FarmaMcpService;

/// Errors raised while serving the MCP endpoints.
#[derive(Debug, Error)]
pub enum ServeError {
    #[error("failed to bind sse listener: {0}")]
    Bind(#[from] std::io::Error),

    #[error("stdio transport error: {0}")]
    Stdio(String),
}

/// Runtime configuration for the SSE endpoint pair.
#[derive(Debug, Clone)]
pub struct ServeConfig {
    pub bind_addr: SocketAddr,
    pub sse_path: String,
    pub post_path: String,
    pub keep_alive: Duration,
}

impl ServeConfig {
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            sse_path: "/sse".into(),
            post_path: "/messages".into(),
            keep_alive: Duration::from_secs(30),
        }
    }
}

/// Handle to the running SSE server. Dropping the handle shuts it down.
pub struct SseServerHandle {
    root_token: CancellationToken,
    worker_token: CancellationToken,
    bind_addr: SocketAddr,
}

impl SseServerHandle {
    pub fn shutdown(&self) {
        self.worker_token.cancel();
        self.root_token.cancel();
    }

    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Resolves once the server has been cancelled.
    pub async fn stopped(&self) {
        self.root_token.cancelled().await;
    }
}

impl Drop for SseServerHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Serve the tool router over SSE.
///
/// `GET {sse_path}` opens a per-session event stream; `POST {post_path}`
/// delivers client messages routed by session identifier. Session keying is
/// handled by the transport: each connected client gets its own transport
/// instance, and concurrent clients do not disturb each other's streams.
pub async fn serve_sse(
    service: FarmaMcpService,
    config: ServeConfig,
) -> Result<SseServerHandle, ServeError> {
    let root_token = CancellationToken::new();
    let bind_addr = config.bind_addr;

    let sse_server = SseServer::serve_with_config(SseServerConfig {
        bind: config.bind_addr,
        sse_path: config.sse_path.clone(),
        post_path: config.post_path.clone(),
        ct: root_token.clone(),
        sse_keep_alive: Some(config.keep_alive),
    })
    .await?;

    let worker_token = sse_server.with_service(move || service.clone());
    tracing::info!(
        %bind_addr,
        sse_path = %config.sse_path,
        post_path = %config.post_path,
        "mcp sse server listening"
    );

    Ok(SseServerHandle {
        root_token,
        worker_token,
        bind_addr,
    })
}

/// Serve the tool router over stdio for process-spawning MCP clients.
///
/// Runs until the client closes the transport.
pub async fn serve_stdio(service: FarmaMcpService) -> Result<(), ServeError> {
    let running = service
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| ServeError::Stdio(e.to_string()))?;
    tracing::info!("mcp stdio server running");
    running
        .waiting()
        .await
        .map_err(|e| ServeError::Stdio(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_config_defaults_to_the_published_paths() {
        let cfg = ServeConfig::new("127.0.0.1:6937".parse().unwrap());
        assert_eq!(cfg.sse_path, "/sse");
        assert_eq!(cfg.post_path, "/messages");
        assert_eq!(cfg.keep_alive, Duration::from_secs(30));
    }
}
