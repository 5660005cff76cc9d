//! Durable cart persistence.
//!
//! Every mutation reloads the whole list, changes it, writes the whole list
//! back and returns it. Carts are small; nothing here is incremental.

use cart_cache::{Cache, CacheError, KeyValueStore};

use crate::cart::{default_items, Item};
use crate::error::CartError;
use crate::ids::ItemId;

/// Storage key the cart lives under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "cartItems";

/// Read/modify/write access to the persisted item list.
#[derive(Debug, Clone)]
pub struct CartStore<K> {
    cache: Cache<K>,
    key: String,
}

impl<K: KeyValueStore> CartStore<K> {
    /// Store under [`DEFAULT_STORAGE_KEY`].
    pub fn new(store: K) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    /// Store under a custom key.
    pub fn with_key(store: K, key: impl Into<String>) -> Self {
        Self {
            cache: Cache::new(store),
            key: key.into(),
        }
    }

    /// The storage key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the persisted list.
    ///
    /// Missing, unreadable or unparsable content yields an empty list.
    pub fn load(&self) -> Vec<Item> {
        match self.cache.get::<Vec<Item>>(&self.key) {
            Ok(Some(items)) => items,
            Ok(None) => Vec::new(),
            Err(CacheError::SerializeError(e)) => {
                tracing::warn!(key = %self.key, error = %e, "discarding unparsable cart");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "cart unreadable, treating as empty");
                Vec::new()
            }
        }
    }

    /// Persist the full list, replacing whatever was stored.
    pub fn save(&self, items: &[Item]) -> Result<(), CartError> {
        self.cache.set(&self.key, items)?;
        Ok(())
    }

    /// Return the persisted list, seeding it with the default items if empty.
    pub fn initialize(&self) -> Result<Vec<Item>, CartError> {
        let items = self.load();
        if !items.is_empty() {
            return Ok(items);
        }

        let seed = default_items();
        self.save(&seed)?;
        tracing::info!(key = %self.key, items = seed.len(), "seeded empty cart");
        Ok(seed)
    }

    /// Set an item's quantity to `max(1, quantity)`.
    pub fn set_quantity(&self, id: &ItemId, quantity: i64) -> Result<Vec<Item>, CartError> {
        tracing::debug!(%id, quantity, "set quantity");
        self.update(|items| {
            if let Some(item) = items.iter_mut().find(|item| &item.id == id) {
                item.set_quantity(quantity);
            }
        })
    }

    /// Set one item's selection flag.
    pub fn set_selection(&self, id: &ItemId, selected: bool) -> Result<Vec<Item>, CartError> {
        tracing::debug!(%id, selected, "set selection");
        self.update(|items| {
            if let Some(item) = items.iter_mut().find(|item| &item.id == id) {
                item.is_selected = selected;
            }
        })
    }

    /// Set every item's selection flag.
    pub fn set_all_selection(&self, selected: bool) -> Result<Vec<Item>, CartError> {
        tracing::debug!(selected, "set all selection");
        self.update(|items| {
            for item in items.iter_mut() {
                item.is_selected = selected;
            }
        })
    }

    /// Remove every selected item.
    pub fn delete_selected(&self) -> Result<Vec<Item>, CartError> {
        self.update(|items| {
            let before = items.len();
            items.retain(|item| !item.is_selected);
            tracing::debug!(removed = before - items.len(), "deleted selected items");
        })
    }

    /// Add an item, or merge its quantity into an existing item with the same id.
    pub fn add_item(&self, new_item: Item) -> Result<Vec<Item>, CartError> {
        tracing::debug!(id = %new_item.id, quantity = new_item.quantity, "add item");
        self.update(|items| {
            if let Some(existing) = items.iter_mut().find(|item| item.id == new_item.id) {
                existing.quantity = existing.quantity.saturating_add(new_item.quantity);
            } else {
                let mut item = new_item;
                item.set_quantity(i64::from(item.quantity));
                items.push(item);
            }
        })
    }

    /// Drop the persisted cart. The next [`initialize`](Self::initialize) reseeds.
    pub fn clear(&self) -> Result<(), CartError> {
        self.cache.delete(&self.key)?;
        Ok(())
    }

    fn update(&self, mutate: impl FnOnce(&mut Vec<Item>)) -> Result<Vec<Item>, CartError> {
        let mut items = self.load();
        mutate(&mut items);
        self.save(&items)?;
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use cart_cache::MemoryStore;

    fn seeded() -> (MemoryStore, CartStore<MemoryStore>) {
        let backend = MemoryStore::new();
        let store = CartStore::new(backend.clone());
        store.initialize().unwrap();
        (backend, store)
    }

    #[test]
    fn test_load_absent_is_empty() {
        let store = CartStore::new(MemoryStore::new());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_garbage_is_empty() {
        let backend = MemoryStore::new();
        backend.set(DEFAULT_STORAGE_KEY, b"{not json").unwrap();
        let store = CartStore::new(backend);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_clamps_stored_zero_quantity() {
        let backend = MemoryStore::new();
        backend
            .set(
                DEFAULT_STORAGE_KEY,
                br#"[{"id":"a","name":"A","price":1000,"quantity":0,"imageUrl":"","isSelected":true}]"#,
            )
            .unwrap();
        let store = CartStore::new(backend);

        let items = store.load();
        assert_eq!(items[0].quantity, 1);
        assert_eq!(items[0].line_total(), Money::new(1000));
    }

    #[test]
    fn test_save_then_load_roundtrips() {
        let store = CartStore::new(MemoryStore::new());
        let items = vec![
            Item::new("x", "Cable \"USB-C\"", Money::new(0), 7)
                .with_image("https://example.com/x.png")
                .with_selected(false),
            Item::new("y", "키보드", Money::new(89_000), 1),
        ];
        store.save(&items).unwrap();
        assert_eq!(store.load(), items);
    }

    #[test]
    fn test_initialize_seeds_once() {
        let (_, store) = seeded();
        let items = store.set_quantity(&ItemId::new("item1"), 4).unwrap();

        let again = store.initialize().unwrap();
        assert_eq!(again, items);
        assert_eq!(again.len(), 3);
    }

    #[test]
    fn test_initialize_reseeds_after_everything_deleted() {
        let (_, store) = seeded();
        store.set_all_selection(true).unwrap();
        assert!(store.delete_selected().unwrap().is_empty());
        assert_eq!(store.initialize().unwrap(), default_items());
    }

    #[test]
    fn test_quantity_is_clamped() {
        let (_, store) = seeded();
        let id = ItemId::new("item2");

        for requested in [0, -3] {
            let items = store.set_quantity(&id, requested).unwrap();
            let item = items.iter().find(|i| i.id == id).unwrap();
            assert_eq!(item.quantity, 1);
        }
        assert_eq!(store.load()[1].quantity, 1);
    }

    #[test]
    fn test_unknown_id_leaves_list_unchanged() {
        let (_, store) = seeded();
        let before = store.load();

        let after = store.set_selection(&ItemId::new("missing"), false).unwrap();
        assert_eq!(after, before);
        assert_eq!(store.load(), before);
    }

    #[test]
    fn test_select_all_then_delete_empties_cart() {
        let (_, store) = seeded();
        store.set_all_selection(true).unwrap();
        assert!(store.load().iter().all(|i| i.is_selected));

        assert!(store.delete_selected().unwrap().is_empty());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_delete_selected_keeps_unselected() {
        let (_, store) = seeded();
        let remaining = store.delete_selected().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, ItemId::new("item2"));
    }

    #[test]
    fn test_add_item_merges_by_id() {
        let (_, store) = seeded();
        let items = store
            .add_item(Item::new("item3", "마우스", Money::new(25_000), 2))
            .unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[2].quantity, 3);

        let items = store
            .add_item(Item::new("item4", "Stand", Money::new(15_000), 1))
            .unwrap();
        assert_eq!(items.len(), 4);
        assert_eq!(store.load(), items);
    }

    #[test]
    fn test_custom_key_and_clear() {
        let backend = MemoryStore::new();
        let store = CartStore::with_key(backend.clone(), "other");
        store.initialize().unwrap();
        assert!(backend.exists("other").unwrap());
        assert!(!backend.exists(DEFAULT_STORAGE_KEY).unwrap());

        store.clear().unwrap();
        assert!(store.load().is_empty());
    }
}
