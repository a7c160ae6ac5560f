//! Cart commands.

use boutique_core::ProductId;
use boutique_storefront::error::{AppError, Result};
use boutique_storefront::screens::{CartScreen, HomeScreen, ProductDetailsScreen};
use boutique_storefront::state::AppState;
use serde::Serialize;

use crate::output::Output;

#[derive(Serialize)]
struct CartSummary<T: Serialize> {
    lines: T,
    total: String,
}

fn print_cart(screen: &CartScreen, output: Output) {
    let lines = screen.lines();

    if output.is_json() {
        output.json(&CartSummary {
            lines: &lines,
            total: screen.total().to_string(),
        });
        return;
    }

    if lines.is_empty() {
        output.line("Your cart is empty.");
    }
    for line in lines {
        output.line(format!(
            "[{}] {} - {} ({})",
            line.id, line.title, line.price, line.category
        ));
        output.line(format!("    {}", line.summary));
    }
    output.line(format!("Total Price: {}", screen.total_display()));
}

/// Show cart contents and total.
pub async fn show(state: &AppState, output: Output) -> Result<()> {
    let mut screen = CartScreen::new(state.clone());
    screen.focus().await;
    print_cart(&screen, output);
    Ok(())
}

/// Add a catalog product to the cart, the way the detail page does.
///
/// # Errors
///
/// Fails if the catalog cannot be fetched or has no product with `id`.
pub async fn add(state: &AppState, id: &ProductId, output: Output) -> Result<()> {
    let mut home = HomeScreen::new(state.clone());
    home.refresh_catalog().await?;

    let route = home.open(id).ok_or_else(|| AppError::NotFound(id.clone()))?;
    let details = ProductDetailsScreen::from_route(state.clone(), route)
        .ok_or_else(|| AppError::NotFound(id.clone()))?;
    let cart = details.add_to_cart().await;

    tracing::info!(id = %id, items = cart.len(), "Added to cart");
    if !output.is_json() {
        output.line(format!("Added {} to cart.", details.product().title));
    }

    show(state, output).await
}

/// Remove every entry of a product from the cart.
///
/// # Errors
///
/// Fails with [`AppError::NotFound`] if the product is not in the cart.
pub async fn remove(state: &AppState, id: &ProductId, output: Output) -> Result<()> {
    let mut screen = CartScreen::new(state.clone());
    screen.focus().await;

    if !screen.items().iter().any(|product| &product.id == id) {
        return Err(AppError::NotFound(id.clone()));
    }

    screen.remove(id).await;
    tracing::info!(id = %id, "Removed from cart");
    print_cart(&screen, output);
    Ok(())
}
