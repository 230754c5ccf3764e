//! MCP tool definitions for catalog search and inventory lookups.

use std::sync::Arc;

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use serde::Deserialize;
use serde_json::json;

use farma_catalog::{CatalogError, ProductSearch};
use farma_inventory::{InventoryError, InventoryStore};

/// MCP server exposing the product catalog and real-time inventory.
///
/// Each tool issues exactly one call to a backing service and returns the
/// serialized response as a text payload; no caching, no retries.
#[derive(Clone)]
pub struct FarmaMcpService {
    catalog: Arc<dyn ProductSearch>,
    inventory: Arc<dyn InventoryStore>,
    tool_router: ToolRouter<Self>,
}

impl FarmaMcpService {
    /// Create a new MCP service over the given backing clients.
    pub fn new(catalog: Arc<dyn ProductSearch>, inventory: Arc<dyn InventoryStore>) -> Self {
        Self {
            catalog,
            inventory,
            tool_router: Self::tool_router(),
        }
    }
}

// === Tool request types ===

/// Request for a catalog similarity search.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct QueryProductsRequest {
    /// The query to search for products.
    pub query: String,
}

/// Request for a single inventory lookup.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ProductInventoryRequest {
    /// The product id to search for.
    pub product_id: String,
}

/// Request for a batch inventory lookup.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ManyProductsInventoryRequest {
    /// The product ids to search for.
    pub product_ids: Vec<String>,
}

#[tool_router]
impl FarmaMcpService {
    /// Similarity search over the product vector index.
    #[tool(
        description = "This tool accesses a vector database to provide knowledge about products. \
                       The tool returns a list of 10 products that match the query, it includes \
                       Produto_id, prices and other information."
    )]
    async fn query_products(
        &self,
        Parameters(req): Parameters<QueryProductsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .catalog
            .search(&req.query)
            .await
            .map_err(map_catalog_error)?;
        serialized(&response)
    }

    /// Real-time inventory for one product.
    #[tool(
        description = "This tool accesses a redis database to provide the real time inventory \
                       of a product. The id must be the Produto_id from the database."
    )]
    async fn product_inventory(
        &self,
        Parameters(req): Parameters<ProductInventoryRequest>,
    ) -> Result<CallToolResult, McpError> {
        let value = self
            .inventory
            .get(&req.product_id)
            .await
            .map_err(map_inventory_error)?;
        serialized(&value)
    }

    /// Real-time inventory for a batch of products.
    #[tool(
        description = "This tool accesses a redis database to provide the real time inventory \
                       of many products. The id must be the Produto_id from the database."
    )]
    async fn many_products_inventory(
        &self,
        Parameters(req): Parameters<ManyProductsInventoryRequest>,
    ) -> Result<CallToolResult, McpError> {
        let values = self
            .inventory
            .get_many(&req.product_ids)
            .await
            .map_err(map_inventory_error)?;
        serialized(&values)
    }
}

#[tool_handler]
impl ServerHandler for FarmaMcpService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: rmcp::model::Implementation {
                name: "mcp-farma-access".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            instructions: Some(
                "Product catalog access server. Search products by free text with \
                 query_products, then look up real-time inventory by Produto_id with \
                 product_inventory or many_products_inventory."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Wrap a backing-service response as a text payload, exactly as the
/// backing client returned it.
fn serialized<T: serde::Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string(value)
        .map_err(|e| internal_error("response serialization failed", e.to_string()))?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

fn map_catalog_error(err: CatalogError) -> McpError {
    internal_error("catalog search failed", err.to_string())
}

fn map_inventory_error(err: InventoryError) -> McpError {
    internal_error("inventory lookup failed", err.to_string())
}

fn internal_error(message: &str, detail: String) -> McpError {
    McpError::internal_error(message.to_string(), Some(json!({ "detail": detail })))
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use farma_catalog::MemoryCatalog;
    use farma_inventory::MemoryInventory;

    struct FailingCatalog;

    #[async_trait]
    impl ProductSearch for FailingCatalog {
        async fn search(&self, _query: &str) -> Result<serde_json::Value, CatalogError> {
            Err(CatalogError::Status {
                status: 503,
                body: "upstream unavailable".to_string(),
            })
        }
    }

    fn service_with(
        catalog: Arc<dyn ProductSearch>,
        inventory: Arc<dyn InventoryStore>,
    ) -> FarmaMcpService {
        FarmaMcpService::new(catalog, inventory)
    }

    fn text_of(result: &CallToolResult) -> &str {
        result.content[0].as_text().expect("text content").text.as_str()
    }

    #[tokio::test]
    async fn query_products_passes_the_backing_response_through() {
        let canned = json!({
            "result": { "hits": [{ "_id": "rec1", "_score": 0.87, "fields": { "Produto_id": "PRD-1" } }] },
            "usage": { "read_units": 5 }
        });
        let catalog = Arc::new(MemoryCatalog::with_response(canned.clone()));
        let service = service_with(catalog.clone(), Arc::new(MemoryInventory::new()));

        let result = service
            .query_products(Parameters(QueryProductsRequest {
                query: "dipirona".to_string(),
            }))
            .await
            .unwrap();

        let echoed: serde_json::Value = serde_json::from_str(text_of(&result)).unwrap();
        assert_eq!(echoed, canned);
        assert_eq!(catalog.queries(), vec!["dipirona".to_string()]);
    }

    #[tokio::test]
    async fn product_inventory_serializes_missing_keys_as_null() {
        let service = service_with(
            Arc::new(MemoryCatalog::default()),
            Arc::new(MemoryInventory::new()),
        );

        let result = service
            .product_inventory(Parameters(ProductInventoryRequest {
                product_id: "PRD-404".to_string(),
            }))
            .await
            .unwrap();

        assert_eq!(text_of(&result), "null");
    }

    #[tokio::test]
    async fn product_inventory_returns_the_stored_value() {
        let inventory = Arc::new(MemoryInventory::new());
        inventory.insert("PRD-1", "37");
        let service = service_with(Arc::new(MemoryCatalog::default()), inventory);

        let result = service
            .product_inventory(Parameters(ProductInventoryRequest {
                product_id: "PRD-1".to_string(),
            }))
            .await
            .unwrap();

        assert_eq!(text_of(&result), "\"37\"");
    }

    #[tokio::test]
    async fn many_products_inventory_aligns_with_input_order() {
        let inventory = Arc::new(MemoryInventory::new());
        inventory.insert("PRD-1", "12");
        inventory.insert("PRD-3", "0");
        let service = service_with(Arc::new(MemoryCatalog::default()), inventory);

        let result = service
            .many_products_inventory(Parameters(ManyProductsInventoryRequest {
                product_ids: vec![
                    "PRD-3".to_string(),
                    "PRD-2".to_string(),
                    "PRD-1".to_string(),
                ],
            }))
            .await
            .unwrap();

        assert_eq!(text_of(&result), "[\"0\",null,\"12\"]");
    }

    #[tokio::test]
    async fn backing_failures_become_structured_errors() {
        let service = service_with(
            Arc::new(FailingCatalog),
            Arc::new(MemoryInventory::new()),
        );

        let err = service
            .query_products(Parameters(QueryProductsRequest {
                query: "dipirona".to_string(),
            }))
            .await
            .unwrap_err();

        assert_eq!(err.code, rmcp::model::ErrorCode::INTERNAL_ERROR);
        let detail = err.data.unwrap();
        assert!(detail["detail"].as_str().unwrap().contains("503"));
    }

    #[test]
    fn tools_are_registered_under_their_public_names() {
        let router = FarmaMcpService::tool_router();
        let mut names: Vec<String> = router
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect();
        names.sort();
        assert_eq!(
            names,
            vec![
                "many_products_inventory",
                "product_inventory",
                "query_products"
            ]
        );
    }
}
