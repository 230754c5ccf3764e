//! Inventory store trait and error type.

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by an inventory backend.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("inventory pool error: {0}")]
    Pool(String),

    #[error("inventory command error: {0}")]
    Command(String),
}

/// Read access to the real-time inventory keyed by product identifier.
///
/// A missing key is not an error: lookups return `None` (or `None` entries
/// in the multi-key case), mirroring what the backing store reports.
#[async_trait]
pub trait InventoryStore: Send + Sync {
    /// Fetch the inventory value for one product identifier.
    async fn get(&self, product_id: &str) -> Result<Option<String>, InventoryError>;

    /// Fetch inventory values for many product identifiers in one call.
    ///
    /// The returned list is positionally aligned with `product_ids` and
    /// always has the same length, with `None` for keys the store does not
    /// hold.
    async fn get_many(&self, product_ids: &[String]) -> Result<Vec<Option<String>>, InventoryError>;
}
