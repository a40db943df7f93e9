//! Content listing service
//!
//! Given a parent container and a requested page, return a bounded, ordered
//! slice of its live, public children. Purely a read path.
//!
//! Ordering contract: types with an explicit editorial date list newest
//! first by that date; everything else lists by first-published timestamp,
//! newest first. Ids break the remaining ties so the order is deterministic.

use tracing::debug;
use uuid::Uuid;

use crate::core::error::SilverpressError;
use crate::core::page::PageNode;
use crate::core::query::{ListingQuery, Paginated, paginate};
use crate::storage::ContentStore;

/// Which part of the tree a section lists.
///
/// Blog and processes list all descendants of their index; printshop and
/// galleries list direct children only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Children,
    Descendants,
}

/// List one page of a section's live, public content.
///
/// The category filter is applied only for types that support it; other
/// sections ignore the parameter. Out-of-range and non-numeric page numbers
/// follow the policy of [`paginate`].
pub async fn list_section<T, S>(
    store: &S,
    parent: &Uuid,
    scope: Scope,
    query: &ListingQuery,
    page_size: usize,
) -> Result<Paginated<T>, SilverpressError>
where
    T: PageNode,
    S: ContentStore<T> + ?Sized,
{
    let fetched = match scope {
        Scope::Children => store.children_of(parent).await,
        Scope::Descendants => store.descendants_of(parent).await,
    }
    .map_err(SilverpressError::Storage)?;

    let mut items: Vec<T> = fetched.into_iter().filter(|p| p.is_listed()).collect();

    if T::supports_category_filter() {
        if let Some(slug) = query.category.as_deref().filter(|s| !s.is_empty()) {
            items.retain(|p| p.category_slugs().iter().any(|c| c == slug));
        }
    }

    items.sort_by(|a, b| {
        b.sort_date()
            .cmp(&a.sort_date())
            .then_with(|| b.first_published_at().cmp(&a.first_published_at()))
            .then_with(|| a.id().cmp(&b.id()))
    });

    debug!(
        parent = %parent,
        total = items.len(),
        page = query.page.as_deref().unwrap_or("1"),
        "listing section content"
    );

    Ok(paginate(items, query.page.as_deref(), page_size))
}
