use async_trait::async_trait;
use thiserror::Error;

use crate::modules::items::core::item::{Item, ItemPatch};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{0}")]
    Validation(String),

    #[error("item not found: {0}")]
    NotFound(String),
}

/// Authoritative collection of items.
///
/// Every mutation is applied atomically: a failed call leaves the store
/// untouched and a read never observes a half-applied write.
#[async_trait]
pub trait ItemStore: Send + Sync {
    async fn list(&self) -> Vec<Item>;
    async fn create(&self, name: String, description: String) -> Result<Item, StoreError>;
    async fn get(&self, id: &str) -> Result<Item, StoreError>;
    async fn update(&self, id: &str, patch: ItemPatch) -> Result<Item, StoreError>;
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}

pub mod in_memory;
