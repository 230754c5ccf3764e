//! Product search trait and error type.

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by a catalog backend.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog client error: {0}")]
    Client(String),

    #[error("catalog request failed: {0}")]
    Transport(String),

    #[error("catalog returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("catalog response could not be decoded: {0}")]
    Decode(String),
}

/// Nearest-neighbor search over the product catalog.
///
/// Implementations return the backing service's response body as untyped
/// JSON; no output schema is enforced on the way through.
#[async_trait]
pub trait ProductSearch: Send + Sync {
    /// Search the catalog with a free-text query.
    async fn search(&self, query: &str) -> Result<serde_json::Value, CatalogError>;
}
