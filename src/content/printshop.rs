//! Printshop section: the orderable print catalog
//!
//! Catalog items carry a display-only `price_label`; the order total is
//! never computed from it. The "Order" call-to-action links a catalog item
//! into the order form via `item_id`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::page::{ImageRef, PageNode, slugify};

/// Landing page that lists catalog items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrintshopIndex {
    pub id: Uuid,
    pub title: String,
    pub banner_image: Option<ImageRef>,
    pub intro: String,
}

impl PrintshopIndex {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            banner_image: None,
            intro: String::new(),
        }
    }
}

/// One print offered for sale
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrintshopItem {
    pub id: Uuid,
    pub parent_id: Option<Uuid>,
    pub title: String,
    pub slug: String,

    pub main_image: Option<ImageRef>,
    pub format: String,
    pub technique: String,
    pub date_created: Option<NaiveDate>,
    pub short_description: String,
    pub description: String,

    /// Display price shown on cards and used for order-form prefill
    pub price_label: Option<String>,
    pub order_cta_text: String,
    pub order_target_url: String,

    pub live: bool,
    pub public: bool,
    pub first_published_at: Option<DateTime<Utc>>,
}

impl PrintshopItem {
    pub fn new(parent_id: Uuid, title: impl Into<String>) -> Self {
        let title = title.into();
        let slug = slugify(&title);
        Self {
            id: Uuid::new_v4(),
            parent_id: Some(parent_id),
            title,
            slug,
            main_image: None,
            format: String::new(),
            technique: String::new(),
            date_created: None,
            short_description: String::new(),
            description: String::new(),
            price_label: None,
            order_cta_text: "Order".to_string(),
            order_target_url: String::new(),
            live: true,
            public: true,
            first_published_at: Some(Utc::now()),
        }
    }
}

impl PageNode for PrintshopItem {
    fn id(&self) -> Uuid {
        self.id
    }

    fn parent_id(&self) -> Option<Uuid> {
        self.parent_id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn live(&self) -> bool {
        self.live
    }

    fn public(&self) -> bool {
        self.public
    }

    fn first_published_at(&self) -> Option<DateTime<Utc>> {
        self.first_published_at
    }

    fn price_label(&self) -> Option<&str> {
        // A blank label means "no price shown"
        self.price_label.as_deref().filter(|p| !p.is_empty())
    }

    fn main_image(&self) -> Option<&ImageRef> {
        self.main_image.as_ref()
    }
}
