//! Page-node abstraction over the content tree
//!
//! Every listable content type (blog posts, process articles, printshop
//! items, galleries) implements [`PageNode`]. The trait exposes just enough
//! metadata for the listing service: tree position, live/public flags and the
//! deterministic ordering keys. Rendering concerns stay in the concrete
//! types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque reference to an image in the external media library.
///
/// Rendition/resizing is infrastructure this core never touches; handlers
/// pass the reference through to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub id: Uuid,
    pub alt: String,
}

impl ImageRef {
    pub fn new(alt: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            alt: alt.into(),
        }
    }
}

/// Base trait for all page types in the content tree
pub trait PageNode: Clone + Send + Sync + 'static {
    /// Unique identifier of this page
    fn id(&self) -> Uuid;

    /// Parent page in the tree, `None` for roots
    fn parent_id(&self) -> Option<Uuid>;

    fn title(&self) -> &str;

    fn slug(&self) -> &str;

    /// Published (as opposed to draft)
    fn live(&self) -> bool;

    /// Not gated behind a view restriction
    fn public(&self) -> bool;

    /// When the page first went live
    fn first_published_at(&self) -> Option<DateTime<Utc>>;

    /// Explicit editorial date, where the content type defines one.
    ///
    /// Types with a date (blog posts, process articles) are listed newest
    /// first by this key; everything else falls back to
    /// [`first_published_at`](PageNode::first_published_at).
    fn sort_date(&self) -> Option<NaiveDate> {
        None
    }

    /// Category slugs attached to this page (empty where unsupported)
    fn category_slugs(&self) -> &[String] {
        &[]
    }

    /// Whether listings of this type accept a `category` filter
    fn supports_category_filter() -> bool {
        false
    }

    /// Optional display price, for orderable catalog items
    fn price_label(&self) -> Option<&str> {
        None
    }

    /// Primary image shown alongside the page
    fn main_image(&self) -> Option<&ImageRef> {
        None
    }

    /// Visible in public listings: live and not restricted
    fn is_listed(&self) -> bool {
        self.live() && self.public()
    }
}

/// Summary of a content item linked from an order form
/// ("order this specific print").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemSummary {
    pub id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
}

impl ItemSummary {
    /// Build a summary from any page node, falling back gracefully for
    /// types without a price or image.
    pub fn from_node<T: PageNode>(node: &T) -> Self {
        Self {
            id: node.id(),
            title: node.title().to_string(),
            price_label: node.price_label().map(str::to_string),
            image: node.main_image().cloned(),
        }
    }
}

/// Derive a URL slug from a title: lowercase, alphanumerics kept,
/// runs of anything else collapsed to single hyphens.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_hyphen = true;
    for c in title.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
            last_hyphen = false;
        } else if !last_hyphen {
            slug.push('-');
            last_hyphen = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Silver Gelatin Prints"), "silver-gelatin-prints");
        assert_eq!(slugify("Wet  Plate / Collodion"), "wet-plate-collodion");
    }

    #[test]
    fn test_slugify_trims_edges() {
        assert_eq!(slugify("  Platinum!  "), "platinum");
        assert_eq!(slugify("---"), "");
    }
}
