//! Shared fixtures for unit tests.

#![allow(clippy::unwrap_used)]

use std::path::Path;
use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use boutique_core::{Product, ProductId};

use crate::config::{StorefrontConfig, parse_catalog_url};

/// Three products: two numeric ids, one textual id with a string price.
pub const SAMPLE_CATALOG: &str = r#"[
    {
        "id": 1,
        "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
        "price": 109.95,
        "description": "Your perfect pack for everyday use and walks in the forest.",
        "category": "men's clothing",
        "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
        "rating": { "rate": 3.9, "count": 120 }
    },
    {
        "id": 2,
        "title": "Mens Casual Premium Slim Fit T-Shirts",
        "price": 22.3,
        "description": "Slim-fitting style, contrast raglan long sleeve, three-button henley placket, light weight & soft fabric for breathable and comfortable wearing.",
        "category": "men's clothing",
        "image": "https://fakestoreapi.com/img/71-3HjGNDUL._AC_SY879._SX._UX._SY._UY_.jpg"
    },
    {
        "id": "sku-3",
        "title": "Silver Dragon Station Chain Bracelet",
        "price": "7.5",
        "description": "From our Legends Collection.",
        "category": "jewelery",
        "image": "https://fakestoreapi.com/img/71pWzhdJNwL._AC_UL640_QL65_ML3_.jpg"
    }
]"#;

/// Serve a fixed `/products` response on an ephemeral port.
///
/// Returns the full catalog URL.
pub async fn serve_catalog(status: StatusCode, body: &'static str) -> String {
    let router = Router::new().route("/products", get(move || async move { (status, body) }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/products")
}

/// Configuration pointing at `catalog_url` and storing under `data_dir`.
pub fn test_config(catalog_url: &str, data_dir: &Path) -> StorefrontConfig {
    StorefrontConfig {
        catalog_url: parse_catalog_url(catalog_url).unwrap(),
        data_dir: data_dir.to_path_buf(),
        http_timeout: Duration::from_secs(5),
        sentry_dsn: None,
        sentry_environment: None,
    }
}

/// A minimal product with a numeric id.
pub fn product(id: i64, price: &str) -> Product {
    Product {
        id: ProductId::Int(id),
        title: format!("Product {id}"),
        category: "test".to_string(),
        description: format!("Description of product {id}"),
        price: price.parse().unwrap(),
        image: format!("https://example.com/{id}.png"),
        rating: None,
    }
}
