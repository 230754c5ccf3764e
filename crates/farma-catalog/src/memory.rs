//! In-memory catalog backend for tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::search::{CatalogError, ProductSearch};

/// Canned-response [`ProductSearch`] used by tests in this workspace.
///
/// Records every query it receives so tests can assert what was forwarded.
#[derive(Debug)]
pub struct MemoryCatalog {
    response: serde_json::Value,
    queries: Mutex<Vec<String>>,
}

impl MemoryCatalog {
    /// A catalog that answers every search with `response`.
    pub fn with_response(response: serde_json::Value) -> Self {
        Self {
            response,
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Queries received so far, oldest first.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::with_response(serde_json::json!({ "result": { "hits": [] } }))
    }
}

#[async_trait]
impl ProductSearch for MemoryCatalog {
    async fn search(&self, query: &str) -> Result<serde_json::Value, CatalogError> {
        self.queries.lock().unwrap().push(query.to_string());
        Ok(self.response.clone())
    }
}
