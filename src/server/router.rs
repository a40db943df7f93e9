//! Router builder for the HTTP surface

use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::server::handlers::listing::{
    list_blog, list_galleries, list_printshop, list_processes,
};
use crate::server::handlers::orders::{
    create_order, list_orders, new_order_context, order_success, update_order,
};
use crate::server::state::AppState;

/// Build the application router:
///
/// - `POST /orders` - submit an order
/// - `GET /orders` - admin listing (status filter + pagination)
/// - `GET /orders/new` - order-form context (item prefill)
/// - `GET /orders/{id}` - confirmation view data
/// - `PATCH /orders/{id}` - admin status/total update
/// - `GET /blog`, `/processes`, `/printshop`, `/galleries` - section listings
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/orders", post(create_order).get(list_orders))
        .route("/orders/new", get(new_order_context))
        .route("/orders/{id}", get(order_success).patch(update_order))
        .route("/blog", get(list_blog))
        .route("/processes", get(list_processes))
        .route("/printshop", get(list_printshop))
        .route("/galleries", get(list_galleries))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
