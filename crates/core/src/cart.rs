//! Cart operations.
//!
//! A cart is an ordered list of [`Product`] entries. These functions take a
//! cart by value and return the new cart, so callers decide when (and whether)
//! to persist the result.
//!
//! Note that [`add`] appends even if the product is already present: repeated
//! entries are how the catalog counts quantity (see [`count`]). Collapsing
//! repeats is the job of [`deduplicate`], which runs whenever a cart is loaded.

use std::collections::HashSet;

use crate::types::{Price, Product, ProductId};

/// Keep only the first entry for each product id, preserving order.
///
/// Every repeated occurrence is reported with a warning.
#[must_use]
pub fn deduplicate(cart: Vec<Product>) -> Vec<Product> {
    let mut seen = HashSet::with_capacity(cart.len());
    cart.into_iter()
        .filter(|product| {
            if seen.insert(product.id.clone()) {
                true
            } else {
                tracing::warn!(id = %product.id, "Duplicate product in cart");
                false
            }
        })
        .collect()
}

/// Append `product` to the end of the cart.
#[must_use]
pub fn add(mut cart: Vec<Product>, product: Product) -> Vec<Product> {
    cart.push(product);
    cart
}

/// Drop every entry with the given id.
#[must_use]
pub fn remove(mut cart: Vec<Product>, id: &ProductId) -> Vec<Product> {
    cart.retain(|product| &product.id != id);
    cart
}

/// Exact sum of all entry prices.
///
/// The result is not rounded; format it (`Display`) to get two decimals.
#[must_use]
pub fn total(cart: &[Product]) -> Price {
    cart.iter().map(|product| product.price).sum()
}

/// Number of entries with the given id.
#[must_use]
pub fn count(cart: &[Product], id: &ProductId) -> usize {
    cart.iter().filter(|product| &product.id == id).count()
}
