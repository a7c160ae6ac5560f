//! Persisted cart.
//!
//! The cart is stored as a single JSON array snapshot under one storage key.
//! Every save rewrites the whole snapshot. Loading never fails from the
//! caller's point of view: a missing, unreadable or corrupt snapshot yields an
//! empty cart and an error in the log.

use std::sync::Arc;

use boutique_core::{Price, Product, ProductId, cart};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::storage::{KeyValueStore, StorageError};

/// Storage key holding the cart snapshot.
const CART_KEY: &str = "cart";

/// Errors that can occur when reading or writing the cart snapshot.
#[derive(Debug, Error)]
pub enum CartError {
    /// Storage backend failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Stored snapshot is not a JSON array of products.
    #[error("Snapshot parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Cart could not be serialized.
    #[error("Snapshot serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// The cart, mirrored to durable storage.
///
/// Cheap to clone; clones share the storage backend.
#[derive(Clone)]
pub struct CartStore {
    storage: Arc<dyn KeyValueStore>,
}

impl CartStore {
    /// Create a cart store on top of `storage`.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    /// Load the cart, collapsing duplicate ids.
    ///
    /// Returns an empty cart if nothing is stored or the snapshot cannot be
    /// read or parsed; the failure is logged.
    pub async fn load(&self) -> Vec<Product> {
        match self.try_load().await {
            Ok(cart) => cart,
            Err(e) => {
                tracing::error!(error = %e, "Error loading cart");
                Vec::new()
            }
        }
    }

    /// Load the cart, collapsing duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails or the snapshot does not parse.
    pub async fn try_load(&self) -> Result<Vec<Product>, CartError> {
        self.read_snapshot().await.map(cart::deduplicate)
    }

    /// Overwrite the stored snapshot with `cart`.
    ///
    /// Failures are logged; the caller's in-memory cart is then ahead of
    /// storage until the next successful save.
    pub async fn save(&self, cart: &[Product]) {
        if let Err(e) = self.try_save(cart).await {
            tracing::error!(error = %e, items = cart.len(), "Error saving cart");
        }
    }

    /// Overwrite the stored snapshot with `cart`.
    ///
    /// The same cart always produces the same bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or storage fails.
    #[instrument(skip(self, cart), fields(items = cart.len()))]
    pub async fn try_save(&self, cart: &[Product]) -> Result<(), CartError> {
        let snapshot = serde_json::to_string(cart).map_err(CartError::Serialize)?;
        self.storage.set(CART_KEY, &snapshot).await?;
        debug!("Saved cart");
        Ok(())
    }

    /// Load the cart exactly as stored, repeats included.
    ///
    /// Degrades to an empty cart like [`CartStore::load`].
    pub async fn load_stored(&self) -> Vec<Product> {
        self.read_snapshot().await.unwrap_or_else(|e| {
            tracing::error!(error = %e, "Error loading cart");
            Vec::new()
        })
    }

    /// Append `product` to the stored cart and save it.
    ///
    /// Reads the snapshot as stored (repeats included), so adding a product
    /// twice leaves two entries. Returns the new cart.
    pub async fn add(&self, product: Product) -> Vec<Product> {
        let updated = cart::add(self.load_stored().await, product);
        self.save(&updated).await;
        updated
    }

    /// Remove every entry with `id` from the stored cart and save it.
    ///
    /// Returns the new cart.
    pub async fn remove(&self, id: &ProductId) -> Vec<Product> {
        let updated = cart::remove(self.load().await, id);
        self.save(&updated).await;
        updated
    }

    /// Sum of prices in `cart`. See [`cart::total`].
    #[must_use]
    pub fn total(cart: &[Product]) -> Price {
        cart::total(cart)
    }

    #[instrument(skip(self))]
    async fn read_snapshot(&self) -> Result<Vec<Product>, CartError> {
        let Some(snapshot) = self.storage.get(CART_KEY).await? else {
            debug!("No stored cart");
            return Ok(Vec::new());
        };
        serde_json::from_str(&snapshot).map_err(CartError::Parse)
    }
}
