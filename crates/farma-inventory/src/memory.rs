//! In-memory inventory backend for tests.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::store::{InventoryError, InventoryStore};

/// In-memory [`InventoryStore`] used by tests in this workspace.
#[derive(Debug, Default)]
pub struct MemoryInventory {
    entries: DashMap<String, String>,
}

impl MemoryInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an inventory value for a product identifier.
    pub fn insert(&self, product_id: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(product_id.into(), value.into());
    }
}

#[async_trait]
impl InventoryStore for MemoryInventory {
    async fn get(&self, product_id: &str) -> Result<Option<String>, InventoryError> {
        Ok(self.entries.get(product_id).map(|v| v.value().clone()))
    }

    async fn get_many(&self, product_ids: &[String]) -> Result<Vec<Option<String>>, InventoryError> {
        Ok(product_ids
            .iter()
            .map(|id| self.entries.get(id).map(|v| v.value().clone()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_key_reads_as_none() {
        let store = MemoryInventory::new();
        assert_eq!(store.get("PRD-404").await.unwrap(), None);
    }

    #[tokio::test]
    async fn get_many_aligns_positionally_with_input() {
        let store = MemoryInventory::new();
        store.insert("PRD-1", "12");
        store.insert("PRD-3", "0");

        let ids = vec![
            "PRD-1".to_string(),
            "PRD-2".to_string(),
            "PRD-3".to_string(),
        ];
        let values = store.get_many(&ids).await.unwrap();

        assert_eq!(values.len(), ids.len());
        assert_eq!(values[0].as_deref(), Some("12"));
        assert_eq!(values[1], None);
        assert_eq!(values[2].as_deref(), Some("0"));
    }

    #[tokio::test]
    async fn empty_input_yields_empty_output() {
        let store = MemoryInventory::new();
        let values = store.get_many(&[]).await.unwrap();
        assert!(values.is_empty());
    }
}
