//! Catalog commands.

use boutique_core::ProductId;
use boutique_storefront::error::{AppError, Result};
use boutique_storefront::screens::{HomeScreen, ProductDetailsScreen};
use boutique_storefront::state::AppState;

use crate::output::Output;

/// List the catalog with cart badges.
///
/// A failed fetch is logged and shows an empty catalog.
pub async fn list(state: &AppState, output: Output) -> Result<()> {
    let mut home = HomeScreen::new(state.clone());
    home.mount().await;
    let cards = home.cards();

    if output.is_json() {
        output.json(&cards);
        return Ok(());
    }

    if cards.is_empty() {
        output.line("No products.");
        return Ok(());
    }

    for card in cards {
        let badge = card
            .in_cart
            .map(|n| format!("  [{n} in cart]"))
            .unwrap_or_default();
        output.line(format!(
            "[{}] {} - {} ({}){badge}",
            card.id, card.title, card.price, card.category
        ));
        output.line(format!("    {}", card.summary));
    }
    Ok(())
}

/// Show one catalog product.
///
/// # Errors
///
/// Fails if the catalog cannot be fetched or has no product with `id`.
pub async fn show(state: &AppState, id: &ProductId, output: Output) -> Result<()> {
    let mut home = HomeScreen::new(state.clone());
    home.refresh_catalog().await?;

    let route = home.open(id).ok_or_else(|| AppError::NotFound(id.clone()))?;
    let screen = ProductDetailsScreen::from_route(state.clone(), route)
        .ok_or_else(|| AppError::NotFound(id.clone()))?;
    let view = screen.view();

    if output.is_json() {
        output.json(&view);
        return Ok(());
    }

    output.line(format!("{} ({})", view.title, view.category));
    output.line(view.price);
    output.line("");
    output.line(view.description);
    output.line("");
    output.line(view.image);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::StatusCode;
    use boutique_integration_tests::{CATALOG, CatalogServer, app_state};

    use super::*;

    #[tokio::test]
    async fn test_list_and_show() {
        let server = CatalogServer::start(StatusCode::OK, CATALOG).await;
        let dir = tempfile::tempdir().unwrap();
        let state = app_state(&server.url, dir.path());

        list(&state, Output::new(false)).await.unwrap();
        list(&state, Output::new(true)).await.unwrap();
        show(&state, &ProductId::Int(2), Output::new(false)).await.unwrap();
        assert_eq!(server.hits(), 3);
    }

    #[tokio::test]
    async fn test_show_unknown_product_is_not_found() {
        let server = CatalogServer::start(StatusCode::OK, CATALOG).await;
        let dir = tempfile::tempdir().unwrap();
        let state = app_state(&server.url, dir.path());

        let err = show(&state, &ProductId::from("2"), Output::new(false))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_with_catalog_down_still_succeeds() {
        let server = CatalogServer::start(StatusCode::BAD_GATEWAY, "").await;
        let dir = tempfile::tempdir().unwrap();
        let state = app_state(&server.url, dir.path());

        list(&state, Output::new(false)).await.unwrap();
        assert!(matches!(
            show(&state, &ProductId::Int(1), Output::new(false)).await,
            Err(AppError::Catalog(_))
        ));
    }
}
