//! Section listing handlers
//!
//! Each section returns its page of live, public content under the key its
//! templates have always used (`posts`, `items`, `galleries`), plus the
//! pagination metadata needed for navigation controls.

use axum::extract::{Query, State};
use axum::response::Json;
use serde_json::{Value, json};

use crate::content::service::{Scope, list_section};
use crate::core::error::SilverpressError;
use crate::core::query::ListingQuery;
use crate::server::state::AppState;

/// GET /blog?page=&category=
///
/// Lists all live blog posts under the index, newest first, optionally
/// filtered by category slug. Also exposes the category list and the
/// active slug so the caller can render the filter UI.
pub async fn list_blog(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<Json<Value>, SilverpressError> {
    let page = list_section(
        state.blog_store.as_ref(),
        &state.blog_index.id,
        Scope::Descendants,
        &query,
        state.blog_index.paginate_by,
    )
    .await?;

    Ok(Json(json!({
        "posts": page.items,
        "pagination": page.meta,
        "categories": &*state.blog_categories,
        "current_category": query.category,
    })))
}

/// GET /processes?page=
pub async fn list_processes(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<Json<Value>, SilverpressError> {
    let page = list_section(
        state.process_store.as_ref(),
        &state.processes_index.id,
        Scope::Descendants,
        &query,
        state.processes_index.paginate_by,
    )
    .await?;

    Ok(Json(json!({
        "items": page.items,
        "pagination": page.meta,
        "intro": &state.processes_index.intro,
    })))
}

/// GET /printshop?page=
///
/// Direct children of the catalog index only.
pub async fn list_printshop(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<Json<Value>, SilverpressError> {
    let page = list_section(
        state.printshop_store.as_ref(),
        &state.printshop_index.id,
        Scope::Children,
        &query,
        state.config.default_page_size,
    )
    .await?;

    Ok(Json(json!({
        "items": page.items,
        "pagination": page.meta,
        "intro": &state.printshop_index.intro,
    })))
}

/// GET /galleries?page=
pub async fn list_galleries(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<Json<Value>, SilverpressError> {
    let page = list_section(
        state.gallery_store.as_ref(),
        &state.galleries_index.id,
        Scope::Children,
        &query,
        state.config.default_page_size,
    )
    .await?;

    Ok(Json(json!({
        "galleries": page.items,
        "pagination": page.meta,
        "intro": &state.galleries_index.intro,
    })))
}
