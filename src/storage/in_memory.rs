//! In-memory store implementations for testing, demos and development
//!
//! Uses `RwLock` for thread-safe access; lock poisoning surfaces as a
//! storage error rather than a panic.

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::core::order::Order;
use crate::core::page::{ItemSummary, PageNode};
use crate::storage::{ContentStore, ItemLookup, OrderStore};

/// In-memory order store
#[derive(Clone, Default)]
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<HashMap<Uuid, Order>>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.orders.read().map(|o| o.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn insert(&self, order: Order) -> Result<Order> {
        let mut orders = self
            .orders
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        orders.insert(order.id, order.clone());

        Ok(order)
    }

    async fn get(&self, id: &Uuid) -> Result<Option<Order>> {
        let orders = self
            .orders
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(orders.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<Order>> {
        let orders = self
            .orders
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(orders.values().cloned().collect())
    }

    async fn update(&self, id: &Uuid, order: Order) -> Result<Order> {
        let mut orders = self
            .orders
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        orders.get_mut(id).ok_or_else(|| anyhow!("Order not found"))?;

        orders.insert(*id, order.clone());

        Ok(order)
    }
}

/// In-memory page store for one content type.
///
/// Descendant queries walk parent links, so pages of the same type nested
/// below intermediate pages are still found.
#[derive(Clone)]
pub struct InMemoryPageStore<T: PageNode> {
    pages: Arc<RwLock<HashMap<Uuid, T>>>,
}

impl<T: PageNode> Default for InMemoryPageStore<T> {
    fn default() -> Self {
        Self {
            pages: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl<T: PageNode> InMemoryPageStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page to the tree
    pub fn add(&self, page: T) {
        if let Ok(mut pages) = self.pages.write() {
            pages.insert(page.id(), page);
        }
    }

    /// Seed the store from an iterator of pages
    pub fn seed(pages: impl IntoIterator<Item = T>) -> Self {
        let store = Self::new();
        for page in pages {
            store.add(page);
        }
        store
    }
}

#[async_trait]
impl<T: PageNode> ContentStore<T> for InMemoryPageStore<T> {
    async fn get(&self, id: &Uuid) -> Result<Option<T>> {
        let pages = self
            .pages
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(pages.get(id).cloned())
    }

    async fn children_of(&self, parent: &Uuid) -> Result<Vec<T>> {
        let pages = self
            .pages
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(pages
            .values()
            .filter(|page| page.parent_id() == Some(*parent))
            .cloned()
            .collect())
    }

    async fn descendants_of(&self, parent: &Uuid) -> Result<Vec<T>> {
        let pages = self
            .pages
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        // Expand the descendant set until no new page joins it.
        let mut under: HashSet<Uuid> = HashSet::new();
        under.insert(*parent);
        loop {
            let before = under.len();
            for page in pages.values() {
                if let Some(pid) = page.parent_id() {
                    if under.contains(&pid) {
                        under.insert(page.id());
                    }
                }
            }
            if under.len() == before {
                break;
            }
        }

        Ok(pages
            .values()
            .filter(|page| page.id() != *parent && under.contains(&page.id()))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl<T: PageNode> ItemLookup for InMemoryPageStore<T> {
    async fn resolve(&self, id: &Uuid) -> Result<Option<ItemSummary>> {
        let pages = self
            .pages
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(pages.get(id).map(ItemSummary::from_node))
    }
}
