//! Store traits for orders and the content tree
//!
//! The services are agnostic to the underlying storage mechanism; these
//! traits are the seam. The in-memory backend in
//! [`in_memory`](crate::storage::in_memory) is the reference implementation,
//! used in tests and demos.

pub mod in_memory;

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::core::order::Order;
use crate::core::page::{ItemSummary, PageNode};

pub use in_memory::{InMemoryOrderStore, InMemoryPageStore};

/// Durable storage for orders.
///
/// All mutation is expressed as atomic single-record operations; an insert
/// either fully succeeds or leaves nothing behind.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persist a new order
    async fn insert(&self, order: Order) -> Result<Order>;

    /// Get an order by id
    async fn get(&self, id: &Uuid) -> Result<Option<Order>>;

    /// List all orders (callers apply ordering/filtering)
    async fn list(&self) -> Result<Vec<Order>>;

    /// Replace an existing order; errors when the id is unknown
    async fn update(&self, id: &Uuid, order: Order) -> Result<Order>;
}

/// Read access to one content type within the page tree
#[async_trait]
pub trait ContentStore<T: PageNode>: Send + Sync {
    /// Get a page by id
    async fn get(&self, id: &Uuid) -> Result<Option<T>>;

    /// Direct children of a parent page
    async fn children_of(&self, parent: &Uuid) -> Result<Vec<T>>;

    /// All descendants of a parent page, any depth
    async fn descendants_of(&self, parent: &Uuid) -> Result<Vec<T>>;
}

/// Resolve an externally supplied content-item id to a display summary.
///
/// Used to pre-fill the order form when a customer arrives from a catalog
/// item ("order this print"). A miss is not an error.
#[async_trait]
pub trait ItemLookup: Send + Sync {
    async fn resolve(&self, id: &Uuid) -> Result<Option<ItemSummary>>;
}
