//! Catalog failures are logged and swallowed; the cart keeps working.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use boutique_core::ProductId;
use boutique_integration_tests::{CatalogServer, app_state};
use boutique_storefront::catalog::CatalogError;
use boutique_storefront::screens::{CartScreen, HomeScreen};

#[tokio::test]
async fn test_server_error_leaves_catalog_empty() {
    let server = CatalogServer::start(StatusCode::BAD_GATEWAY, "upstream down").await;
    let dir = tempfile::tempdir().unwrap();

    let mut home = HomeScreen::new(app_state(&server.url, dir.path()));
    home.mount().await;

    assert!(home.products().is_empty());
    assert_eq!(server.hits(), 1);
}

#[tokio::test]
async fn test_no_retry_on_failure() {
    let server = CatalogServer::start(StatusCode::SERVICE_UNAVAILABLE, "").await;
    let dir = tempfile::tempdir().unwrap();

    let mut home = HomeScreen::new(app_state(&server.url, dir.path()));
    let err = home.refresh_catalog().await.unwrap_err();

    assert!(matches!(err, CatalogError::Status { .. }));
    assert_eq!(server.hits(), 1);
}

#[tokio::test]
async fn test_malformed_catalog_is_a_parse_error() {
    let server = CatalogServer::start(StatusCode::OK, "<html>oops</html>").await;
    let dir = tempfile::tempdir().unwrap();

    let mut home = HomeScreen::new(app_state(&server.url, dir.path()));
    assert!(matches!(
        home.refresh_catalog().await,
        Err(CatalogError::Parse(_))
    ));
}

#[tokio::test]
async fn test_cart_usable_while_catalog_down() {
    let server = CatalogServer::start(StatusCode::INTERNAL_SERVER_ERROR, "").await;
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("cart.json"),
        r#"[{"id": 9, "title": "Saved", "price": "12.5", "description": "", "category": "", "image": ""}]"#,
    )
    .unwrap();
    let state = app_state(&server.url, dir.path());

    let mut home = HomeScreen::new(state.clone());
    home.mount().await;
    assert_eq!(home.cart().len(), 1);

    let mut cart = CartScreen::new(state);
    cart.focus().await;
    assert_eq!(cart.total_display(), "$12.50");
    cart.remove(&ProductId::Int(9)).await;
    assert!(cart.is_empty());
}

#[tokio::test]
async fn test_corrupt_cart_file_degrades_to_empty() {
    let server = CatalogServer::start(StatusCode::OK, "[]").await;
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("cart.json"), "not-json").unwrap();

    let mut cart = CartScreen::new(app_state(&server.url, dir.path()));
    cart.focus().await;

    assert!(cart.is_empty());
    assert_eq!(cart.total_display(), "$0.00");
}
