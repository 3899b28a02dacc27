//! Integration tests for the public page render path.
//!
//! The shared database is not truncated between tests; every test seeds
//! rows with unique titles and asserts only on those.

mod common;

use axum::http::{header, StatusCode};
use common::*;
use test_context::test_context;
use uuid::Uuid;

fn unique(tag: &str) -> String {
    format!("{} {}", tag, Uuid::new_v4())
}

#[test_context(TestHarness)]
#[tokio::test]
async fn home_always_renders_with_no_cache_headers(ctx: &TestHarness) {
    let response = ctx.client().get("/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.header(header::CACHE_CONTROL).unwrap(),
        "no-cache, no-store, must-revalidate, max-age=0"
    );
    assert_eq!(response.header(header::PRAGMA).unwrap(), "no-cache");
    assert_eq!(response.header(header::EXPIRES).unwrap(), "0");
    assert!(response
        .header(header::CONTENT_TYPE)
        .unwrap()
        .starts_with("text/html"));
    assert!(response.body.contains("page-context"));
}

/// Active records appear in ascending display order; inactive records do
/// not appear at all.
#[test_context(TestHarness)]
#[tokio::test]
async fn home_embeds_only_active_records_in_order(ctx: &TestHarness) {
    let first = unique("Hero First");
    let second = unique("Hero Second");
    let hidden = unique("Hero Hidden");
    create_hero_image(&ctx.db_pool, &first, 10, true).await.unwrap();
    create_hero_image(&ctx.db_pool, &second, 20, true).await.unwrap();
    create_hero_image(&ctx.db_pool, &hidden, 0, false).await.unwrap();

    let result_title = unique("Impact");
    create_impact_result(&ctx.db_pool, &result_title, "25%", 10, true)
        .await
        .unwrap();
    let hidden_result = unique("Hidden Impact");
    create_impact_result(&ctx.db_pool, &hidden_result, "99%", 0, false)
        .await
        .unwrap();

    let testimonial = unique("Client");
    create_testimonial(&ctx.db_pool, &testimonial, 10, true).await.unwrap();
    let hidden_testimonial = unique("Hidden Client");
    create_testimonial(&ctx.db_pool, &hidden_testimonial, 0, false)
        .await
        .unwrap();

    let body = ctx.client().get("/").await.body;

    let first_at = body.find(&first).expect("first hero missing");
    let second_at = body.find(&second).expect("second hero missing");
    assert!(first_at < second_at, "heroes out of display order");
    assert!(!body.contains(&hidden), "inactive hero rendered");

    assert!(body.contains(&result_title));
    assert!(!body.contains(&hidden_result));
    assert!(body.contains(&testimonial));
    assert!(!body.contains(&hidden_testimonial));
}

/// Within one display_order slot, newer records render first.
#[test_context(TestHarness)]
#[tokio::test]
async fn home_breaks_order_ties_by_newest_first(ctx: &TestHarness) {
    let older = unique("Service Older");
    let newer = unique("Service Newer");
    create_service_at(&ctx.db_pool, &older, 500, true, 60).await.unwrap();
    create_service_at(&ctx.db_pool, &newer, 500, true, 0).await.unwrap();

    let body = ctx.client().get("/").await.body;

    let newer_at = body.find(&newer).expect("newer service missing");
    let older_at = body.find(&older).expect("older service missing");
    assert!(newer_at < older_at, "tie not broken by newest first");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn home_renders_singleton_sections(ctx: &TestHarness) {
    let site_name = unique("Site");
    create_site_settings(&ctx.db_pool, &site_name).await.unwrap();

    let about = unique("About");
    create_about_section(&ctx.db_pool, &about, true).await.unwrap();
    let hidden_about = unique("Hidden About");
    create_about_section(&ctx.db_pool, &hidden_about, false).await.unwrap();

    let newsletter = unique("Newsletter");
    create_newsletter_content(&ctx.db_pool, &newsletter, true).await.unwrap();

    let body = ctx.client().get("/").await.body;

    assert!(body.contains(&site_name));
    assert!(body.contains(&about));
    assert!(!body.contains(&hidden_about));
    assert!(body.contains(&newsletter));
}

/// The gallery preview cap keeps the page to the configured number of
/// images; unsetting the cap renders everything.
#[test_context(TestHarness)]
#[tokio::test]
async fn gallery_preview_cap_limits_rendered_images(ctx: &TestHarness) {
    // Strongly negative display orders so these sort ahead of any rows
    // created by other tests.
    let titles: Vec<String> = (0..8).map(|i| unique(&format!("Gallery {}", i))).collect();
    for (i, title) in titles.iter().enumerate() {
        create_gallery_image(&ctx.db_pool, title, -100 + i as i32, true)
            .await
            .unwrap();
    }

    let capped = ctx.client().get("/").await.body;
    for title in &titles[..6] {
        assert!(capped.contains(title), "capped page missing {}", title);
    }
    for title in &titles[6..] {
        assert!(!capped.contains(title), "capped page rendered {}", title);
    }

    let mut config = test_config();
    config.gallery_preview_limit = None;
    let uncapped = ctx.client_with_config(config).get("/").await.body;
    for title in &titles {
        assert!(uncapped.contains(title), "uncapped page missing {}", title);
    }
}

#[test_context(TestHarness)]
#[tokio::test]
async fn health_reports_ok(ctx: &TestHarness) {
    let response = ctx.client().get("/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["status"], "healthy");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn shell_assets_are_served(ctx: &TestHarness) {
    let response = ctx.client().get("/assets/site.css").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response
        .header(header::CONTENT_TYPE)
        .unwrap()
        .starts_with("text/css"));

    let missing = ctx.client().get("/assets/nope.css").await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}
