//! Headless screen view models.
//!
//! Each screen owns the state a renderer needs, exposes the user actions as
//! async methods, and hands out display-ready rows (prices formatted, long
//! descriptions shortened). Rendering itself is left to the front end.
//!
//! Screens never surface errors to the user: failures are logged and the
//! screen keeps showing what it had.

mod cart;
mod details;
mod drawer;
mod home;

use boutique_core::Product;
use serde::Serialize;

pub use cart::{CartLine, CartScreen};
pub use details::{ProductDetailView, ProductDetailsScreen};
pub use drawer::{Drawer, DrawerItem};
pub use home::{HomeScreen, ProductCard};

/// A navigation target.
///
/// Routes are addressed by name; only `ProductDetails` carries a payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "screen", content = "product")]
pub enum Route {
    /// Catalog listing.
    Home,
    /// Cart contents.
    Cart,
    /// A single product, handed over from the catalog.
    ProductDetails(Box<Product>),
    /// Checkout hand-off (outside Boutique).
    Checkout,
}

impl Route {
    /// Route name as used by navigation.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Cart => "Cart",
            Self::ProductDetails(_) => "ProductDetails",
            Self::Checkout => "Checkout",
        }
    }

    /// Resolve a route that needs no payload by name.
    ///
    /// Returns `None` for unknown names and for `ProductDetails`, which cannot
    /// be reached without a product.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Home" => Some(Self::Home),
            "Cart" => Some(Self::Cart),
            "Checkout" => Some(Self::Checkout),
            _ => None,
        }
    }
}
