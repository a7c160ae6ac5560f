//! Unified error type for storefront front ends.
//!
//! Screens swallow and log their own failures; `AppError` is for callers (such
//! as the CLI) that need to turn a failure into an exit status.

use boutique_core::ProductId;
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog fetch failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// No product with this id in the catalog or cart.
    #[error("Not found: product {0}")]
    NotFound(ProductId),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
