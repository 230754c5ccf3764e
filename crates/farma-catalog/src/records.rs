//! Wire types for the records search API.

use serde::Serialize;

/// Namespace of the product catalog inside the index.
pub const NAMESPACE: &str = "produtos";

/// Number of nearest neighbors requested per search.
pub const TOP_K: usize = 10;

/// Field projection returned for every hit.
pub const RESULT_FIELDS: [&str; 5] = ["Produto_id", "ativo", "fabricante", "receita", "tarja"];

/// Body of a `POST .../records/namespaces/{ns}/search` request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRecordsRequest {
    pub query: SearchQuery,
    pub fields: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchQuery {
    pub top_k: usize,
    pub inputs: SearchInputs,
}

/// The index embeds the text server-side; no vector is sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchInputs {
    pub text: String,
}

impl SearchRecordsRequest {
    /// Build the fixed-shape search request for a free-text query.
    pub fn for_text(query: impl Into<String>) -> Self {
        Self {
            query: SearchQuery {
                top_k: TOP_K,
                inputs: SearchInputs {
                    text: query.into(),
                },
            },
            fields: RESULT_FIELDS.iter().map(|f| f.to_string()).collect(),
        }
    }
}
