//! CatalogStore — HashMap-backed menu store and inventory ledger.
//!
//! Every mutation takes the write lock, so a reservation's check and
//! decrement happen as one indivisible step relative to any concurrent
//! reservation on the same item. Reads take the read lock and give
//! advisory snapshots only.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::StoreError;

use super::item::{MenuItem, NewMenuItem};

/// Outcome of a reservation attempt.
///
/// Insufficient stock and unknown items are normal outcomes callers
/// branch on, not faults. The success arm carries the name and price
/// snapshot taken inside the critical section, which is what order lines
/// record.
#[derive(Clone, Debug, PartialEq)]
pub enum Reservation {
    Reserved { name: String, unit_price: Decimal },
    InsufficientStock { name: String },
    ItemNotFound,
}

/// In-memory menu store. Clone-friendly via `Arc`; clones share storage.
#[derive(Clone, Default)]
pub struct CatalogStore {
    items: Arc<RwLock<HashMap<String, MenuItem>>>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new item, assigning it a fresh id.
    pub fn insert(&self, new: NewMenuItem) -> Result<MenuItem, StoreError> {
        let item = MenuItem {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            description: new.description,
            price: new.price,
            category: new.category,
            available_quantity: new.available_quantity,
            image_url: new.image_url,
            created_at: Utc::now(),
        };
        let mut items = self
            .items
            .write()
            .map_err(|_| StoreError::LockPoisoned("catalog insert"))?;
        items.insert(item.id.clone(), item.clone());
        Ok(item)
    }

    pub fn get(&self, id: &str) -> Result<Option<MenuItem>, StoreError> {
        let items = self
            .items
            .read()
            .map_err(|_| StoreError::LockPoisoned("catalog get"))?;
        Ok(items.get(id).cloned())
    }

    /// Replace every admin-editable field of an existing item, keeping its
    /// id and creation time. Returns `None` if the item is unknown.
    pub fn update(&self, id: &str, new: NewMenuItem) -> Result<Option<MenuItem>, StoreError> {
        let mut items = self
            .items
            .write()
            .map_err(|_| StoreError::LockPoisoned("catalog update"))?;
        match items.get_mut(id) {
            Some(item) => {
                item.name = new.name;
                item.description = new.description;
                item.price = new.price;
                item.category = new.category;
                item.available_quantity = new.available_quantity;
                item.image_url = new.image_url;
                Ok(Some(item.clone()))
            }
            None => Ok(None),
        }
    }

    /// Remove an item. Returns whether anything was deleted.
    pub fn remove(&self, id: &str) -> Result<bool, StoreError> {
        let mut items = self
            .items
            .write()
            .map_err(|_| StoreError::LockPoisoned("catalog remove"))?;
        Ok(items.remove(id).is_some())
    }

    /// All items, name ascending.
    pub fn list(&self) -> Result<Vec<MenuItem>, StoreError> {
        let items = self
            .items
            .read()
            .map_err(|_| StoreError::LockPoisoned("catalog list"))?;
        let mut all: Vec<MenuItem> = items.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    pub fn count(&self) -> Result<usize, StoreError> {
        let items = self
            .items
            .read()
            .map_err(|_| StoreError::LockPoisoned("catalog count"))?;
        Ok(items.len())
    }

    /// Atomically check `available_quantity >= quantity` and decrement.
    ///
    /// Exactly one of two concurrent calls competing for the last unit
    /// succeeds; availability never goes negative.
    pub fn try_reserve(&self, id: &str, quantity: u32) -> Result<Reservation, StoreError> {
        let mut items = self
            .items
            .write()
            .map_err(|_| StoreError::LockPoisoned("catalog try_reserve"))?;
        let Some(item) = items.get_mut(id) else {
            return Ok(Reservation::ItemNotFound);
        };
        if item.available_quantity < quantity {
            return Ok(Reservation::InsufficientStock {
                name: item.name.clone(),
            });
        }
        item.available_quantity -= quantity;
        Ok(Reservation::Reserved {
            name: item.name.clone(),
            unit_price: item.price,
        })
    }

    /// Give reserved units back, compensating a rolled-back reservation.
    ///
    /// Not idempotent — callers release exactly once per reserved unit.
    /// Unknown ids are ignored: an admin may have deleted the item between
    /// reserve and release.
    pub fn release(&self, id: &str, quantity: u32) -> Result<(), StoreError> {
        let mut items = self
            .items
            .write()
            .map_err(|_| StoreError::LockPoisoned("catalog release"))?;
        if let Some(item) = items.get_mut(id) {
            item.available_quantity += quantity;
        }
        Ok(())
    }

    /// Advisory stock snapshot. Carries no ordering guarantee relative to
    /// in-flight reservations — display only, never a correctness gate.
    pub fn current_quantity(&self, id: &str) -> Result<Option<u32>, StoreError> {
        let items = self
            .items
            .read()
            .map_err(|_| StoreError::LockPoisoned("catalog current_quantity"))?;
        Ok(items.get(id).map(|item| item.available_quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn store_with(name: &str, quantity: u32) -> (CatalogStore, String) {
        let store = CatalogStore::new();
        let item = store
            .insert(NewMenuItem {
                name: name.into(),
                description: "test".into(),
                price: Decimal::new(500, 2),
                category: Category::Main,
                available_quantity: quantity,
                image_url: None,
            })
            .unwrap();
        (store, item.id)
    }

    #[test]
    fn reserve_decrements_stock() {
        let (store, id) = store_with("Soup", 5);
        let outcome = store.try_reserve(&id, 2).unwrap();
        assert!(matches!(outcome, Reservation::Reserved { .. }));
        assert_eq!(store.current_quantity(&id).unwrap(), Some(3));
    }

    #[test]
    fn reserve_snapshot_carries_price_and_name() {
        let (store, id) = store_with("Soup", 5);
        match store.try_reserve(&id, 1).unwrap() {
            Reservation::Reserved { name, unit_price } => {
                assert_eq!(name, "Soup");
                assert_eq!(unit_price, Decimal::new(500, 2));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn reserve_more_than_available_fails_without_change() {
        let (store, id) = store_with("Soup", 1);
        let outcome = store.try_reserve(&id, 2).unwrap();
        assert_eq!(
            outcome,
            Reservation::InsufficientStock {
                name: "Soup".into()
            }
        );
        assert_eq!(store.current_quantity(&id).unwrap(), Some(1));
    }

    #[test]
    fn reserve_unknown_item() {
        let store = CatalogStore::new();
        assert_eq!(
            store.try_reserve("missing", 1).unwrap(),
            Reservation::ItemNotFound
        );
    }

    #[test]
    fn reserve_exact_remaining_stock() {
        let (store, id) = store_with("Soup", 3);
        assert!(matches!(
            store.try_reserve(&id, 3).unwrap(),
            Reservation::Reserved { .. }
        ));
        assert_eq!(store.current_quantity(&id).unwrap(), Some(0));
        assert!(matches!(
            store.try_reserve(&id, 1).unwrap(),
            Reservation::InsufficientStock { .. }
        ));
    }

    #[test]
    fn release_restores_stock() {
        let (store, id) = store_with("Soup", 2);
        store.try_reserve(&id, 2).unwrap();
        store.release(&id, 2).unwrap();
        assert_eq!(store.current_quantity(&id).unwrap(), Some(2));
    }

    #[test]
    fn release_unknown_item_is_ignored() {
        let store = CatalogStore::new();
        assert!(store.release("missing", 3).is_ok());
    }

    #[test]
    fn update_replaces_fields_but_keeps_id() {
        let (store, id) = store_with("Soup", 2);
        let updated = store
            .update(
                &id,
                NewMenuItem {
                    name: "Stew".into(),
                    description: "thick".into(),
                    price: Decimal::new(700, 2),
                    category: Category::Main,
                    available_quantity: 9,
                    image_url: Some("http://img".into()),
                },
            )
            .unwrap()
            .unwrap();
        assert_eq!(updated.id, id);
        assert_eq!(updated.name, "Stew");
        assert_eq!(store.current_quantity(&id).unwrap(), Some(9));
    }

    #[test]
    fn update_unknown_item_returns_none() {
        let store = CatalogStore::new();
        let result = store
            .update(
                "missing",
                NewMenuItem {
                    name: "x".into(),
                    description: "y".into(),
                    price: Decimal::ZERO,
                    category: Category::Side,
                    available_quantity: 0,
                    image_url: None,
                },
            )
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn remove_item() {
        let (store, id) = store_with("Soup", 2);
        assert!(store.remove(&id).unwrap());
        assert!(!store.remove(&id).unwrap());
        assert!(store.get(&id).unwrap().is_none());
    }

    #[test]
    fn list_sorts_by_name() {
        let store = CatalogStore::new();
        for name in ["Waffle", "Americano", "Muffin"] {
            store
                .insert(NewMenuItem {
                    name: name.into(),
                    description: "test".into(),
                    price: Decimal::ONE,
                    category: Category::Dessert,
                    available_quantity: 1,
                    image_url: None,
                })
                .unwrap();
        }
        let names: Vec<String> = store.list().unwrap().into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Americano", "Muffin", "Waffle"]);
    }

    #[test]
    fn clone_shares_storage() {
        let (store, id) = store_with("Soup", 4);
        let clone = store.clone();
        clone.try_reserve(&id, 1).unwrap();
        assert_eq!(store.current_quantity(&id).unwrap(), Some(3));
    }
}
