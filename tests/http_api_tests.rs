//! End-to-end tests over the JSON API: submission round trip, error
//! shapes, confirmation view, admin routes and section listings.

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::NaiveDate;
use serde_json::{Value, json};
use std::sync::Arc;
use uuid::Uuid;

use silverpress::prelude::*;

struct App {
    server: TestServer,
    printshop_item_id: Uuid,
}

fn build_app() -> App {
    let config = Arc::new(SiteConfig::default());

    let blog_index = Arc::new(BlogIndex::new("Blog"));
    let blog_store = Arc::new(InMemoryPageStore::new());
    for i in 0..25u32 {
        let mut post = BlogPost::new(
            blog_index.id,
            format!("Post {}", i),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + chrono::Days::new(i as u64),
        );
        if i % 2 == 0 {
            post.categories = vec!["darkroom".into()];
        }
        blog_store.add(post);
    }
    let blog_categories = Arc::new(vec![BlogCategory::new("Darkroom")]);

    let processes_index = Arc::new(ProcessesIndex::new("Processes"));
    let process_store = Arc::new(InMemoryPageStore::seed([ProcessPage::new(
        processes_index.id,
        "Wet plate collodion",
        NaiveDate::from_ymd_opt(2025, 2, 20).unwrap(),
    )]));

    let printshop_index = Arc::new(PrintshopIndex::new("Printshop"));
    let mut item = PrintshopItem::new(printshop_index.id, "Dublin at Dawn");
    item.price_label = Some("120".into());
    let printshop_item_id = item.id;
    let printshop_store = Arc::new(InMemoryPageStore::seed([item]));

    let galleries_index = Arc::new(GalleriesIndex::new("Galleries"));
    let gallery_store = Arc::new(InMemoryPageStore::seed([GalleryPage::new(
        galleries_index.id,
        "Riverscapes",
    )]));

    let orders = OrderService::new(
        Arc::new(InMemoryOrderStore::new()),
        Arc::new(MemoryMailer::new()),
        printshop_store.clone(),
        config.clone(),
    );

    let state = AppState {
        orders,
        config,
        blog_index,
        blog_store,
        blog_categories,
        processes_index,
        process_store,
        printshop_index,
        printshop_store,
        galleries_index,
        gallery_store,
    };

    App {
        server: TestServer::new(build_router(state)),
        printshop_item_id,
    }
}

fn valid_order_body() -> Value {
    json!({
        "first_name": "Ada",
        "last_name": "Lovelace",
        "email": "ada@example.com",
        "phone": "+353 1 234 5678",
        "street_address": "1 Analytical Row",
        "city": "Dublin",
        "state": "Leinster",
        "zip_code": "D01",
        "card_holder_name": "Ada Lovelace",
        "card_number": "4111 1111 1111 1111",
        "expiry_date": "09/2030",
        "cvv": "123",
        "order_details": "A3 silver gelatin print"
    })
}

#[tokio::test]
async fn submit_then_confirm_round_trip() {
    let app = build_app();

    let res = app.server.post("/orders").json(&valid_order_body()).await;
    res.assert_status(StatusCode::CREATED);
    let id = res.json::<Value>()["id"].as_str().unwrap().to_string();

    let res = app.server.get(&format!("/orders/{}", id)).await;
    res.assert_status_ok();
    let body = res.json::<Value>();
    assert_eq!(body["order"]["status"], "pending");
    assert_eq!(body["order"]["total_amount"], "0");
    assert_eq!(body["order"]["first_name"], "Ada");
}

#[tokio::test]
async fn invalid_card_yields_field_level_errors() {
    let app = build_app();
    let mut body = valid_order_body();
    body["card_number"] = json!("4111 1111");

    let res = app.server.post("/orders").json(&body).await;
    res.assert_status(StatusCode::BAD_REQUEST);
    let body = res.json::<Value>();
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(
        body["details"]["card_number"],
        "Please enter a valid card number"
    );
}

#[tokio::test]
async fn unknown_order_renders_null_not_error() {
    let app = build_app();

    let res = app.server.get(&format!("/orders/{}", Uuid::new_v4())).await;
    res.assert_status_ok();
    assert!(res.json::<Value>()["order"].is_null());
}

#[tokio::test]
async fn new_order_context_prefills_from_catalog_item() {
    let app = build_app();

    let res = app
        .server
        .get("/orders/new")
        .add_query_param("item_id", app.printshop_item_id.to_string())
        .await;
    res.assert_status_ok();
    let body = res.json::<Value>();
    assert_eq!(body["order_details"], "Dublin at Dawn - €120");
    assert_eq!(body["item"]["title"], "Dublin at Dawn");

    // Unknown item: blank prefill, no context, still 200
    let res = app
        .server
        .get("/orders/new")
        .add_query_param("item_id", Uuid::new_v4().to_string())
        .await;
    res.assert_status_ok();
    let body = res.json::<Value>();
    assert_eq!(body["order_details"], "");
    assert!(body["item"].is_null());
}

#[tokio::test]
async fn admin_update_and_listing() {
    let app = build_app();

    let res = app.server.post("/orders").json(&valid_order_body()).await;
    let id = res.json::<Value>()["id"].as_str().unwrap().to_string();

    let res = app
        .server
        .patch(&format!("/orders/{}", id))
        .json(&json!({ "status": "processing", "total_amount": "120.00" }))
        .await;
    res.assert_status_ok();
    assert_eq!(res.json::<Value>()["status"], "processing");

    let res = app
        .server
        .get("/orders")
        .add_query_param("status", "processing")
        .await;
    res.assert_status_ok();
    let body = res.json::<Value>();
    assert_eq!(body["orders"].as_array().unwrap().len(), 1);

    // Unknown order -> 404; bogus status filter -> 400
    let res = app
        .server
        .patch(&format!("/orders/{}", Uuid::new_v4()))
        .json(&json!({ "status": "completed" }))
        .await;
    res.assert_status(StatusCode::NOT_FOUND);

    let res = app
        .server
        .get("/orders")
        .add_query_param("status", "bogus")
        .await;
    res.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn blog_listing_handles_page_noise_and_categories() {
    let app = build_app();

    let res = app.server.get("/blog").add_query_param("page", "abc").await;
    res.assert_status_ok();
    let body = res.json::<Value>();
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["pagination"]["total_pages"], 3);
    assert_eq!(body["posts"].as_array().unwrap().len(), 10);
    assert_eq!(body["categories"][0]["slug"], "darkroom");

    let res = app.server.get("/blog").add_query_param("page", "9999").await;
    let body = res.json::<Value>();
    assert_eq!(body["pagination"]["page"], 3);

    let res = app
        .server
        .get("/blog")
        .add_query_param("category", "darkroom")
        .await;
    let body = res.json::<Value>();
    assert_eq!(body["pagination"]["total_items"], 13);
    assert_eq!(body["current_category"], "darkroom");
}

#[tokio::test]
async fn section_listings_respond_with_their_keys() {
    let app = build_app();

    let res = app.server.get("/processes").await;
    res.assert_status_ok();
    assert_eq!(res.json::<Value>()["items"].as_array().unwrap().len(), 1);

    let res = app.server.get("/printshop").await;
    res.assert_status_ok();
    let body = res.json::<Value>();
    assert_eq!(body["items"][0]["title"], "Dublin at Dawn");

    let res = app.server.get("/galleries").await;
    res.assert_status_ok();
    assert_eq!(
        res.json::<Value>()["galleries"][0]["title"],
        "Riverscapes"
    );
}
