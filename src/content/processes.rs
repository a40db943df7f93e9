//! Processes section: articles about printing techniques

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::page::{ImageRef, PageNode, slugify};

/// Landing page that lists process articles (no categories)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessesIndex {
    pub id: Uuid,
    pub title: String,
    pub banner_image: Option<ImageRef>,
    /// Short blurb shown above the list
    pub intro: String,
    /// Items per page
    pub paginate_by: usize,
}

impl ProcessesIndex {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            banner_image: None,
            intro: String::new(),
            paginate_by: 10,
        }
    }
}

/// One article describing a printing process
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessPage {
    pub id: Uuid,
    pub parent_id: Option<Uuid>,
    pub title: String,
    pub slug: String,

    pub date: NaiveDate,
    pub author_name: String,

    pub thumbnail: Option<ImageRef>,
    pub banner_image: Option<ImageRef>,

    pub excerpt: String,
    pub body: String,

    pub live: bool,
    pub public: bool,
    pub first_published_at: Option<DateTime<Utc>>,
}

impl ProcessPage {
    pub fn new(parent_id: Uuid, title: impl Into<String>, date: NaiveDate) -> Self {
        let title = title.into();
        let slug = slugify(&title);
        Self {
            id: Uuid::new_v4(),
            parent_id: Some(parent_id),
            title,
            slug,
            date,
            author_name: String::new(),
            thumbnail: None,
            banner_image: None,
            excerpt: String::new(),
            body: String::new(),
            live: true,
            public: true,
            first_published_at: Some(Utc::now()),
        }
    }

    pub fn listing_image(&self) -> Option<&ImageRef> {
        self.thumbnail.as_ref().or(self.banner_image.as_ref())
    }
}

impl PageNode for ProcessPage {
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

    fn sort_date(&self) -> Option<NaiveDate> {
        Some(self.date)
    }

    fn main_image(&self) -> Option<&ImageRef> {
        self.listing_image()
    }
}
