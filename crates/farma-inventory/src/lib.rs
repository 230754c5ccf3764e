//! # farma-inventory
//!
//! Real-time inventory lookups for the farma product catalog.
//!
//! Inventory lives in Redis, keyed by `Produto_id`. This crate exposes the
//! store behind the [`InventoryStore`] trait so the MCP layer can be tested
//! against an in-memory backend:
//! - [`RedisInventory`] — deadpool-backed Redis implementation
//! - [`MemoryInventory`] — in-memory implementation for tests

mod memory;
mod redis;
mod store;

pub use memory::MemoryInventory;
pub use store::{InventoryError, InventoryStore};

pub use crate::redis::{RedisInventory, DEFAULT_POOL_MAX};
