//! Demo server: seeds an in-memory content tree and serves the JSON API
//!
//! Run with: cargo run --example serve
//!
//! Then try:
//!   curl localhost:3000/blog
//!   curl localhost:3000/printshop
//!   curl "localhost:3000/orders/new?item_id=<id from /printshop>"

use chrono::NaiveDate;
use silverpress::prelude::*;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Arc::new(SiteConfig::default());

    // Blog
    let blog_index = Arc::new(BlogIndex::new("Blog"));
    let mut first = BlogPost::new(
        blog_index.id,
        "Darkroom notes, spring edition",
        NaiveDate::from_ymd_opt(2025, 4, 12).unwrap(),
    );
    first.author_name = "N. Ó Braonáin".into();
    first.categories = vec!["darkroom".into()];
    first.excerpt = "What changed in the darkroom this spring.".into();
    let mut second = BlogPost::new(
        blog_index.id,
        "On toning silver prints",
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
    );
    second.author_name = "N. Ó Braonáin".into();
    second.categories = vec!["technique".into()];
    let blog_store = Arc::new(InMemoryPageStore::seed([first, second]));
    let blog_categories = Arc::new(vec![
        BlogCategory::new("Darkroom"),
        BlogCategory::new("Technique"),
    ]);

    // Processes
    let processes_index = Arc::new(ProcessesIndex::new("Processes"));
    let process_store = Arc::new(InMemoryPageStore::seed([ProcessPage::new(
        processes_index.id,
        "Wet plate collodion",
        NaiveDate::from_ymd_opt(2025, 2, 20).unwrap(),
    )]));

    // Printshop catalog
    let printshop_index = Arc::new(PrintshopIndex::new("Printshop"));
    let mut print = PrintshopItem::new(printshop_index.id, "Dublin at Dawn");
    print.technique = "Silver gelatin".into();
    print.format = "30x40 cm".into();
    print.price_label = Some("120".into());
    print.main_image = Some(ImageRef::new("Dublin quays at dawn"));
    let printshop_store = Arc::new(InMemoryPageStore::seed([print]));

    // Galleries
    let galleries_index = Arc::new(GalleriesIndex::new("Galleries"));
    let mut gallery = GalleryPage::new(galleries_index.id, "Riverscapes");
    gallery.images.push(GalleryImage {
        image: ImageRef::new("Liffey at low tide"),
        caption: "Low tide".into(),
        alt_text: "The Liffey at low tide".into(),
    });
    let gallery_store = Arc::new(InMemoryPageStore::seed([gallery]));

    let orders = OrderService::new(
        Arc::new(InMemoryOrderStore::new()),
        Arc::new(LogMailer),
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

    let addr: SocketAddr = "127.0.0.1:3000".parse()?;
    serve(state, addr).await
}
