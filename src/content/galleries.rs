//! Galleries section: image galleries with ordered inline images

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::page::{ImageRef, PageNode, slugify};

/// Landing page that lists galleries. The site carries at most one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleriesIndex {
    pub id: Uuid,
    pub title: String,
    pub intro: String,
}

impl GalleriesIndex {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            intro: String::new(),
        }
    }
}

/// Inline image within a gallery; order in the vec is display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub image: ImageRef,
    pub caption: String,
    pub alt_text: String,
}

/// One gallery with many images
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryPage {
    pub id: Uuid,
    pub parent_id: Option<Uuid>,
    pub title: String,
    pub slug: String,

    pub intro: String,
    pub cover_image: Option<ImageRef>,
    pub images: Vec<GalleryImage>,

    pub live: bool,
    pub public: bool,
    pub first_published_at: Option<DateTime<Utc>>,
}

impl GalleryPage {
    pub fn new(parent_id: Uuid, title: impl Into<String>) -> Self {
        let title = title.into();
        let slug = slugify(&title);
        Self {
            id: Uuid::new_v4(),
            parent_id: Some(parent_id),
            title,
            slug,
            intro: String::new(),
            cover_image: None,
            images: Vec::new(),
            live: true,
            public: true,
            first_published_at: Some(Utc::now()),
        }
    }
}

impl PageNode for GalleryPage {
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

    fn main_image(&self) -> Option<&ImageRef> {
        self.cover_image.as_ref()
    }
}
