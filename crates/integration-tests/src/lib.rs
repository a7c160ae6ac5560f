//! Integration tests for Boutique.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p boutique-integration-tests
//! ```
//!
//! Tests run entirely in-process: the catalog is served by a throwaway `axum`
//! server on an ephemeral port and the cart lives in a temporary directory.
//!
//! # Test Categories
//!
//! - `cart_flow` - Screen-to-screen flows over a file-backed cart
//! - `catalog_failures` - Behavior when the catalog endpoint misbehaves

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use boutique_storefront::config::{StorefrontConfig, parse_catalog_url};
use boutique_storefront::state::AppState;
use boutique_storefront::storage::FileStore;

/// Catalog served by [`CatalogServer::start`] when no body is given.
pub const CATALOG: &str = r#"[
    {"id": 1, "title": "Backpack", "price": 109.95, "description": "Everyday pack.", "category": "men's clothing", "image": "https://example.com/1.jpg"},
    {"id": 2, "title": "T-Shirt", "price": 22.3, "description": "Slim fit.", "category": "men's clothing", "image": "https://example.com/2.jpg"},
    {"id": 5, "title": "Bracelet", "price": 695, "description": "Legends Collection.", "category": "jewelery", "image": "https://example.com/5.jpg"}
]"#;

/// An in-process catalog endpoint that counts the requests it serves.
pub struct CatalogServer {
    pub url: String,
    hits: Arc<AtomicUsize>,
}

impl CatalogServer {
    /// Serve `body` with `status` at `/products`.
    ///
    /// # Panics
    ///
    /// Panics if no local port can be bound.
    pub async fn start(status: StatusCode, body: &'static str) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let router = Router::new().route(
            "/products",
            get(move || {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    (status, body)
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test server");
        let addr = listener.local_addr().expect("Failed to read local address");
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Self {
            url: format!("http://{addr}/products"),
            hits,
        }
    }

    /// Number of requests served so far.
    #[must_use]
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Application state talking to `catalog_url` with the cart stored in `data_dir`.
///
/// # Panics
///
/// Panics if the URL is invalid or the HTTP client cannot be built.
#[must_use]
pub fn app_state(catalog_url: &str, data_dir: &Path) -> AppState {
    let config = StorefrontConfig {
        catalog_url: parse_catalog_url(catalog_url).expect("Invalid catalog URL"),
        data_dir: data_dir.to_path_buf(),
        http_timeout: Duration::from_secs(5),
        sentry_dsn: None,
        sentry_environment: None,
    };
    let storage = Arc::new(FileStore::new(&config.data_dir));
    AppState::new(config, storage).expect("Failed to build application state")
}
