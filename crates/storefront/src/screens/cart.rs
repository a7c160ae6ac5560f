//! Cart screen.

use std::mem;

use boutique_core::{Price, Product, ProductId, cart};
use serde::Serialize;

use super::Route;
use crate::state::AppState;

/// One row in the cart list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub id: ProductId,
    pub category: String,
    pub title: String,
    /// Formatted price (e.g. `$109.95`).
    pub price: String,
    /// Description, shortened for the list.
    pub summary: String,
    pub image: String,
}

impl From<&Product> for CartLine {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            category: product.category.clone(),
            title: product.title.clone(),
            price: product.price.display(),
            summary: product.summary(),
            image: product.image.clone(),
        }
    }
}

/// The cart list with its running total.
///
/// The cart is (re)loaded only when the screen gains focus; in between, the
/// screen's copy is the source of truth and every change is saved.
pub struct CartScreen {
    state: AppState,
    cart: Vec<Product>,
}

impl CartScreen {
    /// Create an unfocused screen with an empty cart.
    #[must_use]
    pub const fn new(state: AppState) -> Self {
        Self {
            state,
            cart: Vec::new(),
        }
    }

    /// Reload the cart from storage (duplicates collapsed).
    pub async fn focus(&mut self) {
        self.cart = self.state.cart().load().await;
    }

    /// Remove every entry for `id` and save.
    pub async fn remove(&mut self, id: &ProductId) {
        self.cart = cart::remove(mem::take(&mut self.cart), id);
        self.state.cart().save(&self.cart).await;
    }

    /// Append `product` and save.
    pub async fn add(&mut self, product: Product) {
        self.cart = cart::add(mem::take(&mut self.cart), product);
        self.state.cart().save(&self.cart).await;
    }

    /// The cart as shown.
    #[must_use]
    pub fn items(&self) -> &[Product] {
        &self.cart
    }

    /// Whether the cart has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Display rows, in cart order.
    #[must_use]
    pub fn lines(&self) -> Vec<CartLine> {
        self.cart.iter().map(CartLine::from).collect()
    }

    /// Exact total of the cart.
    #[must_use]
    pub fn total(&self) -> Price {
        cart::total(&self.cart)
    }

    /// Total formatted for display (e.g. `$132.25`).
    #[must_use]
    pub fn total_display(&self) -> String {
        self.total().display()
    }

    /// Leave for checkout.
    #[must_use]
    pub const fn checkout(&self) -> Route {
        Route::Checkout
    }
}
