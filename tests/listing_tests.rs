//! Tests for the content listing service: visibility, ordering, scope,
//! category filtering and the forgiving pagination policy.

use chrono::NaiveDate;
use uuid::Uuid;

use silverpress::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn seeded_blog(parent: Uuid, count: usize) -> InMemoryPageStore<BlogPost> {
    let store = InMemoryPageStore::new();
    for i in 0..count {
        let post = BlogPost::new(
            parent,
            format!("Post {}", i),
            date(2025, 1, 1) + chrono::Days::new(i as u64),
        );
        store.add(post);
    }
    store
}

#[tokio::test]
async fn listing_is_newest_first_by_date() {
    let parent = Uuid::new_v4();
    let store = seeded_blog(parent, 3);

    let page = list_section(
        &store,
        &parent,
        Scope::Descendants,
        &ListingQuery::default(),
        10,
    )
    .await
    .unwrap();

    assert_eq!(page.items.len(), 3);
    assert_eq!(page.items[0].title, "Post 2");
    assert_eq!(page.items[2].title, "Post 0");
}

#[tokio::test]
async fn drafts_and_private_pages_are_excluded() {
    let parent = Uuid::new_v4();
    let store = InMemoryPageStore::new();

    let live = BlogPost::new(parent, "Live", date(2025, 3, 1));
    let mut draft = BlogPost::new(parent, "Draft", date(2025, 3, 2));
    draft.live = false;
    let mut private = BlogPost::new(parent, "Private", date(2025, 3, 3));
    private.public = false;
    store.add(live);
    store.add(draft);
    store.add(private);

    let page = list_section(
        &store,
        &parent,
        Scope::Descendants,
        &ListingQuery::default(),
        10,
    )
    .await
    .unwrap();

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].title, "Live");
}

#[tokio::test]
async fn category_filter_applies_before_pagination() {
    let parent = Uuid::new_v4();
    let store = InMemoryPageStore::new();
    for i in 0..5u32 {
        let mut post = BlogPost::new(parent, format!("Post {}", i), date(2025, 2, 1 + i));
        post.categories = if i % 2 == 0 {
            vec!["darkroom".into()]
        } else {
            vec!["technique".into()]
        };
        store.add(post);
    }

    let query = ListingQuery {
        page: None,
        category: Some("darkroom".into()),
    };
    let page = list_section(&store, &parent, Scope::Descendants, &query, 2)
        .await
        .unwrap();

    // 3 darkroom posts -> 2 pages after the filter
    assert_eq!(page.meta.total_items, 3);
    assert_eq!(page.meta.total_pages, 2);
    assert!(page.items.iter().all(|p| p.categories.contains(&"darkroom".to_string())));
}

#[tokio::test]
async fn category_param_is_ignored_where_unsupported() {
    let parent = Uuid::new_v4();
    let store = InMemoryPageStore::new();
    store.add(ProcessPage::new(parent, "Wet plate", date(2025, 1, 10)));

    let query = ListingQuery {
        page: None,
        category: Some("anything".into()),
    };
    let page = list_section(&store, &parent, Scope::Children, &query, 10)
        .await
        .unwrap();

    // ProcessPage has no categories; the filter must not empty the listing
    assert_eq!(page.items.len(), 1);
}

#[tokio::test]
async fn descendants_scope_reaches_nested_pages() {
    let parent = Uuid::new_v4();
    let store = InMemoryPageStore::new();
    let child = BlogPost::new(parent, "Child", date(2025, 5, 1));
    let nested = BlogPost::new(child.id, "Nested", date(2025, 5, 2));
    store.add(child);
    store.add(nested);

    let children = list_section(
        &store,
        &parent,
        Scope::Children,
        &ListingQuery::default(),
        10,
    )
    .await
    .unwrap();
    assert_eq!(children.items.len(), 1);
    assert_eq!(children.items[0].title, "Child");

    let descendants = list_section(
        &store,
        &parent,
        Scope::Descendants,
        &ListingQuery::default(),
        10,
    )
    .await
    .unwrap();
    assert_eq!(descendants.items.len(), 2);
}

#[tokio::test]
async fn non_numeric_page_returns_first_page() {
    let parent = Uuid::new_v4();
    let store = seeded_blog(parent, 25);

    let query = ListingQuery {
        page: Some("abc".into()),
        category: None,
    };
    let page = list_section(&store, &parent, Scope::Descendants, &query, 10)
        .await
        .unwrap();

    assert_eq!(page.meta.page, 1);
    assert_eq!(page.items.len(), 10);
    assert!(page.meta.has_next);
}

#[tokio::test]
async fn page_beyond_range_returns_last_page() {
    let parent = Uuid::new_v4();
    let store = seeded_blog(parent, 25);

    let query = ListingQuery {
        page: Some("9999".into()),
        category: None,
    };
    let page = list_section(&store, &parent, Scope::Descendants, &query, 10)
        .await
        .unwrap();

    assert_eq!(page.meta.page, 3);
    assert_eq!(page.meta.total_pages, 3);
    assert_eq!(page.items.len(), 5);
    assert!(!page.meta.has_next);
}

#[tokio::test]
async fn empty_parent_returns_empty_page_without_error() {
    let parent = Uuid::new_v4();
    let store: InMemoryPageStore<BlogPost> = InMemoryPageStore::new();

    let page = list_section(
        &store,
        &parent,
        Scope::Descendants,
        &ListingQuery::default(),
        10,
    )
    .await
    .unwrap();

    assert!(page.items.is_empty());
    assert_eq!(page.meta.page, 1);
    assert_eq!(page.meta.total_pages, 1);
}

#[tokio::test]
async fn printshop_items_fall_back_to_first_published_ordering() {
    let parent = Uuid::new_v4();
    let store = InMemoryPageStore::new();

    let mut older = PrintshopItem::new(parent, "Older");
    older.first_published_at = Some(chrono::Utc::now() - chrono::Duration::days(2));
    let newer = PrintshopItem::new(parent, "Newer");
    store.add(older);
    store.add(newer);

    let page = list_section(
        &store,
        &parent,
        Scope::Children,
        &ListingQuery::default(),
        10,
    )
    .await
    .unwrap();

    assert_eq!(page.items[0].title, "Newer");
    assert_eq!(page.items[1].title, "Older");
}
