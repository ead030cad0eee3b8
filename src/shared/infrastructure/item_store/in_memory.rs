use std::collections::HashMap;
use std::collections::hash_map::Entry;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::modules::items::core::item::{Item, ItemPatch};
use crate::shared::infrastructure::item_store::{ItemStore, StoreError};

#[derive(Default)]
pub struct InMemoryItemStore {
    inner: RwLock<HashMap<String, Item>>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl ItemStore for InMemoryItemStore {
    async fn list(&self) -> Vec<Item> {
        let guard = self.inner.read().await;
        debug!(count = guard.len(), "listing items");
        guard.values().cloned().collect()
    }

    async fn create(&self, name: String, description: String) -> Result<Item, StoreError> {
        if name.is_empty() {
            return Err(StoreError::Validation("name is required".into()));
        }
        let mut guard = self.inner.write().await;
        loop {
            let id = Uuid::now_v7().to_string();
            if let Entry::Vacant(slot) = guard.entry(id.clone()) {
                let item = Item::new(id, name, description, Utc::now());
                slot.insert(item.clone());
                info!(id = %item.id, "item created");
                return Ok(item);
            }
        }
    }

    async fn get(&self, id: &str) -> Result<Item, StoreError> {
        let guard = self.inner.read().await;
        guard
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn update(&self, id: &str, patch: ItemPatch) -> Result<Item, StoreError> {
        let mut guard = self.inner.write().await;
        let item = guard
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        item.apply(patch, Utc::now());
        info!(%id, "item updated");
        Ok(item.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut guard = self.inner.write().await;
        match guard.remove(id) {
            Some(_) => {
                info!(%id, "item deleted");
                Ok(())
            }
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }
}
