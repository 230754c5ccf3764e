//! # farma-catalog
//!
//! Similarity search over the farma product catalog.
//!
//! The catalog lives in a hosted vector index (`produtos` namespace) that
//! embeds free-text queries server-side. This crate exposes the index behind
//! the [`ProductSearch`] trait:
//! - [`CatalogIndex`] — HTTP client for the records search API
//! - [`MemoryCatalog`] — canned-response implementation for tests
//!
//! Search shape is fixed: every request asks for the top 10 hits with the
//! `{Produto_id, ativo, fabricante, receita, tarja}` field projection, and
//! the response body is handed back to the caller unmodified.

mod index;
mod memory;
mod records;
mod search;

pub use index::CatalogIndex;
pub use memory::MemoryCatalog;
pub use records::{SearchInputs, SearchQuery, SearchRecordsRequest, NAMESPACE, RESULT_FIELDS, TOP_K};
pub use search::{CatalogError, ProductSearch};
