//! Blog section: index, posts and categories

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::page::{ImageRef, PageNode, slugify};

/// How many characters of the body stand in for a missing excerpt
const EXCERPT_FALLBACK_LEN: usize = 240;

/// Editorial category attached to blog posts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogCategory {
    pub name: String,
    pub slug: String,
}

impl BlogCategory {
    /// Create a category; the slug is derived from the name when blank
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let slug = slugify(&name);
        Self { name, slug }
    }

    pub fn with_slug(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
        }
    }
}

/// Landing page that lists blog posts, newest first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogIndex {
    pub id: Uuid,
    pub title: String,
    pub banner_image: Option<ImageRef>,
    /// Posts per page
    pub paginate_by: usize,
}

impl BlogIndex {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            banner_image: None,
            paginate_by: 10,
        }
    }
}

/// Individual blog article
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub parent_id: Option<Uuid>,
    pub title: String,
    pub slug: String,

    /// Publication date; the listing sort key
    pub date: NaiveDate,
    pub author_name: String,
    /// Category slugs
    pub categories: Vec<String>,

    /// Square/landscape thumbnail for listings
    pub thumbnail: Option<ImageRef>,
    /// Optional hero image on the article page
    pub banner_image: Option<ImageRef>,

    /// Short summary shown on the index; derived from the body when blank
    pub excerpt: String,
    pub body: String,

    pub live: bool,
    pub public: bool,
    pub first_published_at: Option<DateTime<Utc>>,
}

impl BlogPost {
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
            categories: Vec::new(),
            thumbnail: None,
            banner_image: None,
            excerpt: String::new(),
            body: String::new(),
            live: true,
            public: true,
            first_published_at: Some(Utc::now()),
        }
    }

    /// Image used on listings: prefer the thumbnail, fall back to the hero
    pub fn listing_image(&self) -> Option<&ImageRef> {
        self.thumbnail.as_ref().or(self.banner_image.as_ref())
    }

    /// Excerpt with a crude body-prefix fallback when the author wrote none
    pub fn display_excerpt(&self) -> String {
        if !self.excerpt.is_empty() {
            return self.excerpt.clone();
        }
        self.body.chars().take(EXCERPT_FALLBACK_LEN).collect()
    }
}

impl PageNode for BlogPost {
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

    fn category_slugs(&self) -> &[String] {
        &self.categories
    }

    fn supports_category_filter() -> bool {
        true
    }

    fn main_image(&self) -> Option<&ImageRef> {
        self.listing_image()
    }
}
