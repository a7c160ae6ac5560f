//! Catalog listing screen.

use boutique_core::{Product, ProductId, cart};
use serde::Serialize;

use super::Route;
use crate::catalog::CatalogError;
use crate::state::AppState;

/// One product tile in the catalog grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCard {
    pub id: ProductId,
    pub category: String,
    pub title: String,
    /// Formatted price (e.g. `$109.95`).
    pub price: String,
    /// Description, shortened for the grid.
    pub summary: String,
    pub image: String,
    /// How many times this product is in the cart; `None` when absent.
    pub in_cart: Option<usize>,
}

/// The catalog listing with per-product cart badges.
pub struct HomeScreen {
    state: AppState,
    products: Vec<Product>,
    cart: Vec<Product>,
}

impl HomeScreen {
    /// Create an unmounted screen with no products and an empty cart.
    #[must_use]
    pub const fn new(state: AppState) -> Self {
        Self {
            state,
            products: Vec::new(),
            cart: Vec::new(),
        }
    }

    /// Fetch the catalog and load the cart as stored.
    ///
    /// Repeated entries are kept so the card badges can count them. A failed
    /// fetch is logged and leaves the current product list as is.
    pub async fn mount(&mut self) {
        if let Err(e) = self.refresh_catalog().await {
            tracing::error!(error = %e, "Error fetching products");
        }
        self.cart = self.state.cart().load_stored().await;
    }

    /// Replace the product list with a fresh fetch.
    ///
    /// Returns the number of products fetched.
    ///
    /// # Errors
    ///
    /// Returns the fetch error; the product list is left unchanged.
    pub async fn refresh_catalog(&mut self) -> Result<usize, CatalogError> {
        let products = self.state.catalog().fetch_catalog().await?;
        self.products = products;
        Ok(self.products.len())
    }

    /// Add `product` to the stored cart and persist it.
    ///
    /// The snapshot is re-read first, so adds made on other screens since
    /// mount are kept. Repeated adds stack up, which is what the card badge
    /// counts.
    pub async fn add_to_cart(&mut self, product: Product) {
        self.cart = self.state.cart().add(product).await;
    }

    /// Products as fetched.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The cart as this screen last saw it.
    #[must_use]
    pub fn cart(&self) -> &[Product] {
        &self.cart
    }

    /// Look up a catalog product by id.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == id)
    }

    /// Navigate to a product's detail page.
    #[must_use]
    pub fn open(&self, id: &ProductId) -> Option<Route> {
        self.product(id)
            .map(|product| Route::ProductDetails(Box::new(product.clone())))
    }

    /// Display rows for the catalog grid, in catalog order.
    #[must_use]
    pub fn cards(&self) -> Vec<ProductCard> {
        self.products
            .iter()
            .map(|product| ProductCard {
                id: product.id.clone(),
                category: product.category.clone(),
                title: product.title.clone(),
                price: product.price.display(),
                summary: product.summary(),
                image: product.image.clone(),
                in_cart: Some(cart::count(&self.cart, &product.id)).filter(|n| *n > 0),
            })
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::storage::MemoryStore;
    use crate::test_support::{SAMPLE_CATALOG, product, serve_catalog, test_config};

    async fn state_for(status: StatusCode, body: &'static str, storage: MemoryStore) -> AppState {
        let url = serve_catalog(status, body).await;
        AppState::new(
            test_config(&url, std::path::Path::new("unused")),
            Arc::new(storage),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_mount_fetches_catalog_and_loads_cart() {
        let snapshot = serde_json::to_string(&[product(1, "109.95")]).unwrap();
        let state = state_for(
            StatusCode::OK,
            SAMPLE_CATALOG,
            MemoryStore::with_value("cart", &snapshot),
        )
        .await;

        let mut home = HomeScreen::new(state);
        home.mount().await;

        assert_eq!(home.products().len(), 3);
        assert_eq!(home.cart().len(), 1);
    }

    #[tokio::test]
    async fn test_mount_with_failed_fetch_keeps_empty_list() {
        let state = state_for(StatusCode::INTERNAL_SERVER_ERROR, "boom", MemoryStore::new()).await;

        let mut home = HomeScreen::new(state);
        home.mount().await;

        assert!(home.products().is_empty());
        assert!(home.cards().is_empty());
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_list() {
        let good = state_for(StatusCode::OK, SAMPLE_CATALOG, MemoryStore::new()).await;
        let mut home = HomeScreen::new(good);
        assert_eq!(home.refresh_catalog().await.unwrap(), 3);

        let bad = state_for(StatusCode::OK, "not json", MemoryStore::new()).await;
        home.state = bad;
        assert!(home.refresh_catalog().await.is_err());
        assert_eq!(home.products().len(), 3);
    }

    #[tokio::test]
    async fn test_cards_show_badges_and_summaries() {
        let state = state_for(StatusCode::OK, SAMPLE_CATALOG, MemoryStore::new()).await;
        let mut home = HomeScreen::new(state);
        home.mount().await;

        let first = home.products()[0].clone();
        home.add_to_cart(first.clone()).await;
        home.add_to_cart(first).await;

        let cards = home.cards();
        assert_eq!(cards[0].in_cart, Some(2));
        assert_eq!(cards[0].price, "$109.95");
        assert_eq!(cards[1].in_cart, None);
        assert_eq!(cards[1].price, "$22.30");
        assert!(cards[1].summary.ends_with("..."));
        assert_eq!(cards[1].summary.chars().count(), 103);
        assert_eq!(cards[2].summary, "From our Legends Collection.");
    }

    #[tokio::test]
    async fn test_mount_counts_stored_repeats() {
        let first = product(1, "109.95");
        let snapshot = serde_json::to_string(&[first.clone(), first.clone(), first.clone()]).unwrap();
        let state = state_for(
            StatusCode::OK,
            SAMPLE_CATALOG,
            MemoryStore::with_value("cart", &snapshot),
        )
        .await;

        let mut home = HomeScreen::new(state.clone());
        home.mount().await;
        assert_eq!(home.cards()[0].in_cart, Some(3));

        home.add_to_cart(first).await;
        assert_eq!(home.cards()[0].in_cart, Some(4));
        assert_eq!(state.cart().load_stored().await.len(), 4);
    }

    #[tokio::test]
    async fn test_add_keeps_entries_saved_elsewhere_since_mount() {
        let state = state_for(StatusCode::OK, SAMPLE_CATALOG, MemoryStore::new()).await;
        let mut home = HomeScreen::new(state.clone());
        home.mount().await;

        state.cart().add(product(2, "22.3")).await;
        let first = home.products()[0].clone();
        home.add_to_cart(first).await;

        let ids: Vec<_> = state.cart().load().await.into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![ProductId::Int(2), ProductId::Int(1)]);
        assert_eq!(home.cards()[1].in_cart, Some(1));
    }

    #[tokio::test]
    async fn test_add_to_cart_persists() {
        let state = state_for(StatusCode::OK, SAMPLE_CATALOG, MemoryStore::new()).await;
        let mut home = HomeScreen::new(state.clone());
        home.mount().await;

        let product = home.product(&ProductId::from("sku-3")).unwrap().clone();
        home.add_to_cart(product.clone()).await;

        assert_eq!(state.cart().load().await, vec![product]);
    }

    #[tokio::test]
    async fn test_open_routes_to_details() {
        let state = state_for(StatusCode::OK, SAMPLE_CATALOG, MemoryStore::new()).await;
        let mut home = HomeScreen::new(state);
        home.mount().await;

        match home.open(&ProductId::Int(2)) {
            Some(Route::ProductDetails(product)) => assert_eq!(product.id, ProductId::Int(2)),
            other => panic!("unexpected route: {other:?}"),
        }
        assert_eq!(home.open(&ProductId::Int(99)), None);
    }
}
