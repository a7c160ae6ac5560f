//! Product detail screen.

use boutique_core::{Product, ProductId};
use serde::Serialize;

use super::Route;
use crate::state::AppState;

/// Everything shown on the detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductDetailView {
    pub id: ProductId,
    pub title: String,
    pub category: String,
    /// Full, untruncated description.
    pub description: String,
    /// Formatted price (e.g. `$109.95`).
    pub price: String,
    pub image: String,
}

/// Detail page for a single product handed over by navigation.
pub struct ProductDetailsScreen {
    state: AppState,
    product: Product,
}

impl ProductDetailsScreen {
    /// Open the screen for `product`.
    #[must_use]
    pub const fn new(state: AppState, product: Product) -> Self {
        Self { state, product }
    }

    /// Open the screen from a navigation route.
    ///
    /// Returns `None` unless the route is [`Route::ProductDetails`].
    #[must_use]
    pub fn from_route(state: AppState, route: Route) -> Option<Self> {
        match route {
            Route::ProductDetails(product) => Some(Self::new(state, *product)),
            _ => None,
        }
    }

    /// The product on display.
    #[must_use]
    pub const fn product(&self) -> &Product {
        &self.product
    }

    /// Display data for the page.
    #[must_use]
    pub fn view(&self) -> ProductDetailView {
        ProductDetailView {
            id: self.product.id.clone(),
            title: self.product.title.clone(),
            category: self.product.category.clone(),
            description: self.product.description.clone(),
            price: self.product.price.display(),
            image: self.product.image.clone(),
        }
    }

    /// Append this product to the stored cart.
    ///
    /// Returns the cart as saved.
    pub async fn add_to_cart(&self) -> Vec<Product> {
        self.state.cart().add(self.product.clone()).await
    }

    /// Leave for checkout.
    #[must_use]
    pub const fn checkout(&self) -> Route {
        Route::Checkout
    }
}
