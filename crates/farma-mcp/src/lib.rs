//! # farma-mcp
//!
//! MCP (Model Context Protocol) server for the farma product catalog.
//!
//! Exposes the two backing services as MCP tools:
//! - `query_products`: similarity search over the product vector index
//! - `product_inventory`: real-time inventory for one product
//! - `many_products_inventory`: real-time inventory for a batch of products
//!
//! Tools are served over SSE (`GET /sse` + `POST /messages`, one transport
//! per client session) or over stdio for process-spawning clients.

pub mod serve;
pub mod tools;

pub use serve::{serve_sse, serve_stdio, ServeConfig, ServeError, SseServerHandle};
pub use tools::FarmaMcpService;
