// src/catalog.rs
use std::collections::HashMap;

use crate::clients::CatalogService;
use crate::models::item::{Item, ItemId};

/// Item catalog fetched once at startup. Fetch order is preserved for
/// display; lookups go through an id index.
pub struct CatalogCache {
    items: Vec<Item>,
    index: HashMap<ItemId, usize>,
}

impl CatalogCache {
    /// Fetch the catalog once. A failed fetch is not surfaced: the cache
    /// stays empty and rows degrade to custom-only entry.
    pub async fn load(service: &dyn CatalogService) -> Self {
        match service.fetch_items().await {
            Ok(items) => {
                tracing::info!(count = items.len(), "catalog loaded");
                Self::from_items(items)
            }
            Err(err) => {
                tracing::warn!(error = %err, "catalog fetch failed, continuing with empty catalog");
                Self::from_items(Vec::new())
            }
        }
    }

    pub fn from_items(items: Vec<Item>) -> Self {
        let index = items
            .iter()
            .enumerate()
            .map(|(pos, item)| (item.id, pos))
            .collect();
        Self { items, index }
    }

    pub fn lookup(&self, id: ItemId) -> Option<&Item> {
        self.index.get(&id).map(|&pos| &self.items[pos])
    }

    /// All items in the order the service returned them.
    pub fn all(&self) -> &[Item] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: ItemId, name: &str, price: f64) -> Item {
        Item {
            id,
            name: name.to_string(),
            unit: "kg".to_string(),
            price,
        }
    }

    #[test]
    fn preserves_fetch_order() {
        let cache = CatalogCache::from_items(vec![
            item(3, "Sugar", 42.0),
            item(1, "Rice", 50.0),
            item(2, "Dal", 95.0),
        ]);
        let names: Vec<&str> = cache.all().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Sugar", "Rice", "Dal"]);
    }

    #[test]
    fn lookup_by_id() {
        let cache = CatalogCache::from_items(vec![item(1, "Rice", 50.0)]);
        assert_eq!(cache.lookup(1).map(|i| i.name.as_str()), Some("Rice"));
        assert!(cache.lookup(7).is_none());
    }
}
