//! Shared application state for the HTTP surface

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::content::{
    BlogCategory, BlogIndex, BlogPost, GalleriesIndex, GalleryPage, PrintshopIndex, PrintshopItem,
    ProcessPage, ProcessesIndex,
};
use crate::orders::OrderService;
use crate::storage::ContentStore;

/// Everything the handlers need: the order service, one store per content
/// section, and the section index pages that carry listing settings.
#[derive(Clone)]
pub struct AppState {
    pub orders: OrderService,
    pub config: Arc<SiteConfig>,

    pub blog_index: Arc<BlogIndex>,
    pub blog_store: Arc<dyn ContentStore<BlogPost>>,
    pub blog_categories: Arc<Vec<BlogCategory>>,

    pub processes_index: Arc<ProcessesIndex>,
    pub process_store: Arc<dyn ContentStore<ProcessPage>>,

    pub printshop_index: Arc<PrintshopIndex>,
    pub printshop_store: Arc<dyn ContentStore<PrintshopItem>>,

    pub galleries_index: Arc<GalleriesIndex>,
    pub gallery_store: Arc<dyn ContentStore<GalleryPage>>,
}
