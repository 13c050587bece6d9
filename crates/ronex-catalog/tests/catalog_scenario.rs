//! End-to-end catalog: fetch through the cache, filter, window.

mod common;

use std::time::{Duration, Instant};

use common::{FakeApi, ten_projects};
use pretty_assertions::assert_eq;
use ronex_catalog::{CatalogView, CategoryFilter, ProjectCache, Viewport};
use ronex_client::Session;
use ronex_core::Category;

async fn load_view() -> CatalogView {
    let api = FakeApi::with_projects(ten_projects());
    let cached = ProjectCache::default()
        .fetch(&api, &Session::anonymous())
        .await
        .expect("fetch");
    CatalogView::with_defaults(cached.projects)
}

#[tokio::test]
async fn filter_business_yields_three() {
    let mut view = load_view().await;
    view.set_filter(CategoryFilter::Only(Category::Business));

    let business = view.filtered();
    assert_eq!(business.len(), 3);
    assert!(business.iter().all(|p| p.category == Category::Business));
    assert_eq!(
        business.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
        vec!["p2", "p5", "p8"]
    );
}

#[tokio::test]
async fn filter_all_yields_ten_in_order() {
    let mut view = load_view().await;
    view.set_filter("business".parse().unwrap());
    view.set_filter("all".parse().unwrap());

    let all = view.filtered();
    assert_eq!(all.len(), 10);
    assert_eq!(all[0].id, "p1");
    assert_eq!(all[9].id, "p10");
}

#[tokio::test]
async fn small_filtered_list_is_not_windowed() {
    let mut view = load_view().await;
    view.set_filter(CategoryFilter::Only(Category::Residential));
    view.set_viewport(Viewport {
        scroll_offset: 10_000.0,
        viewport_height: 100.0,
        container_width: 100.0,
    });
    assert_eq!(view.visible().len(), 4);
}

#[tokio::test]
async fn long_list_scrolls_through_window() {
    let mut view = load_view().await;
    let first = view.set_viewport(Viewport {
        scroll_offset: 0.0,
        viewport_height: 450.0,
        container_width: 700.0,
    });
    // Two per row, one visible row plus one overscan row.
    assert_eq!(first, 0..4);
    assert_eq!(view.visible().len(), 4);

    let now = Instant::now() + Duration::from_secs(1);
    let scrolled = view.on_scroll(
        now,
        Viewport {
            scroll_offset: 900.0,
            viewport_height: 450.0,
            container_width: 700.0,
        },
    );
    assert_eq!(scrolled, Some(4..8));
    assert_eq!(view.visible()[0].id, "p5");
}

#[tokio::test]
async fn stats_ignore_filter() {
    let mut view = load_view().await;
    view.set_filter(CategoryFilter::Only(Category::Business));
    let stats = view.stats();
    assert_eq!(stats.total, 10);
    assert_eq!(stats.categories, 3);
    assert_eq!(stats.unique_locations, 3);
    assert!((stats.total_duration_months - 55.0).abs() < f64::EPSILON);
}
