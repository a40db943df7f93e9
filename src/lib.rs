//! # silverpress
//!
//! Order intake and page-tree content listing for an art printshop site.
//!
//! Two cooperating services form the core:
//!
//! - **Order intake** ([`orders`]): accepts a structured order submission,
//!   validates every field before anything is persisted, stores the order as
//!   `pending`, and sends a best-effort confirmation email whose failure can
//!   never fail the submission.
//! - **Content listing** ([`content`]): given a section's index page and a
//!   requested page number, returns a bounded, ordered slice of its live,
//!   public children, with forgiving handling of nonsense page numbers.
//!
//! Both are stateless request handlers over the store traits in [`storage`];
//! the in-memory backend serves tests, demos and development.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use silverpress::prelude::*;
//! use std::sync::Arc;
//!
//! let config = Arc::new(SiteConfig::default());
//! let store = Arc::new(InMemoryOrderStore::new());
//! let catalog = Arc::new(InMemoryPageStore::<PrintshopItem>::new());
//! let service = OrderService::new(store, Arc::new(LogMailer), catalog, config);
//!
//! let order_ref = service.submit_order(submission, None).await?;
//! println!("confirmation: /orders/{}", order_ref.id);
//! ```
//!
//! ## Security note
//!
//! Payment card fields are persisted in cleartext with only shape
//! validation, exactly as the site this core was extracted from stored
//! them. That is a documented defect, not a pattern to copy: put a real
//! payment processor in front of this before accepting live card data.

pub mod config;
pub mod content;
pub mod core;
pub mod notify;
pub mod orders;
pub mod server;
pub mod storage;

/// Convenience re-exports for applications embedding the services
pub mod prelude {
    pub use crate::config::SiteConfig;
    pub use crate::content::{
        BlogCategory, BlogIndex, BlogPost, GalleriesIndex, GalleryImage, GalleryPage,
        PrintshopIndex, PrintshopItem, ProcessPage, ProcessesIndex, Scope, list_section,
    };
    pub use crate::core::{
        ImageRef, ItemSummary, ListingQuery, Order, OrderRef, OrderStatus, OrderSubmission,
        OrderUpdate, PageMeta, PageNode, Paginated, SilverpressError, ValidationErrors, paginate,
    };
    pub use crate::notify::{DeliveryError, EmailMessage, LogMailer, Mailer, MemoryMailer};
    pub use crate::orders::{OrderService, confirmation_email, prefill_order_details};
    pub use crate::server::{AppState, build_router, serve};
    pub use crate::storage::{
        ContentStore, InMemoryOrderStore, InMemoryPageStore, ItemLookup, OrderStore,
    };
}
