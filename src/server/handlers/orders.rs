//! Order HTTP handlers

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::core::error::SilverpressError;
use crate::core::order::{Order, OrderStatus, OrderSubmission, OrderUpdate};
use crate::core::validation::{FieldError, FieldErrorKind, ValidationErrors};
use crate::orders::prefill_order_details;
use crate::server::state::AppState;

/// Order submission payload. The submitter identity, when present, arrives
/// already resolved by the (external) authentication layer.
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(flatten)]
    pub submission: OrderSubmission,
    #[serde(default)]
    pub user_id: Option<Uuid>,
}

/// POST /orders
///
/// 201 with the durable order reference, or 400 with the per-field error
/// map for the caller to re-render the form.
pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<Value>), SilverpressError> {
    let order_ref = state
        .orders
        .submit_order(payload.submission, payload.user_id)
        .await?;

    Ok((StatusCode::CREATED, Json(json!({ "id": order_ref.id }))))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NewOrderParams {
    pub item_id: Option<String>,
}

/// GET /orders/new?item_id=...
///
/// Context for a blank order form. When `item_id` resolves to a catalog
/// item, the response carries its summary and a pre-filled order-details
/// line; otherwise both come back empty. Never an error.
pub async fn new_order_context(
    State(state): State<AppState>,
    Query(params): Query<NewOrderParams>,
) -> Json<Value> {
    let item = state
        .orders
        .resolve_linked_item(params.item_id.as_deref())
        .await;

    let order_details = item
        .as_ref()
        .map(prefill_order_details)
        .unwrap_or_default();

    Json(json!({
        "item": item,
        "order_details": order_details,
    }))
}

/// GET /orders/{id}
///
/// Confirmation view data. An unknown id is "no order to display", so the
/// body carries a null order rather than a 404.
pub async fn order_success(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, SilverpressError> {
    let order: Option<Order> = state.orders.get_order(&id).await?;
    Ok(Json(json!({ "order": order })))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AdminOrderQuery {
    pub status: Option<String>,
    pub page: Option<String>,
}

/// GET /orders?status=&page=
///
/// Admin listing, newest first.
pub async fn list_orders(
    State(state): State<AppState>,
    Query(params): Query<AdminOrderQuery>,
) -> Result<Json<Value>, SilverpressError> {
    let status = match params.status.as_deref().filter(|s| !s.is_empty()) {
        None => None,
        Some(raw) => Some(raw.parse::<OrderStatus>().map_err(|_| {
            let mut errors = ValidationErrors::new();
            errors.insert(
                "status",
                FieldError::new(
                    FieldErrorKind::InvalidChoice,
                    "Status must be one of: pending, processing, completed, cancelled",
                ),
            );
            SilverpressError::Validation(errors)
        })?),
    };

    let page = state.orders.list_orders(status, params.page.as_deref()).await?;
    Ok(Json(json!({
        "orders": page.items,
        "pagination": page.meta,
    })))
}

/// PATCH /orders/{id}
///
/// Administrative status/total update; 404 when the order does not exist.
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update): Json<OrderUpdate>,
) -> Result<Json<Order>, SilverpressError> {
    let order = state.orders.update_order(&id, update).await?;
    Ok(Json(order))
}
