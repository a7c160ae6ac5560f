//! Product records as supplied by the catalog.

use serde::{Deserialize, Serialize};

use super::{Price, ProductId};

/// Customer rating attached to a catalog product.
///
/// Carried through verbatim; nothing in Boutique interprets it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average rating (e.g. 3.9).
    pub rate: f64,
    /// Number of ratings.
    pub count: u64,
}

/// A product in the catalog, and the unit stored in a cart.
///
/// Read-only to this system: products are decoded from the catalog and
/// copied into the cart as-is. Unknown fields are ignored and missing text
/// fields decode as empty strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier.
    pub id: ProductId,
    /// Display name.
    #[serde(default)]
    pub title: String,
    /// Category label (e.g. "jewelery").
    #[serde(default)]
    pub category: String,
    /// Long-form description.
    #[serde(default)]
    pub description: String,
    /// Unit price.
    pub price: Price,
    /// Image URI.
    #[serde(default)]
    pub image: String,
    /// Optional rating block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

impl Product {
    /// Maximum number of characters of the description shown in list rows.
    pub const SUMMARY_LENGTH: usize = 100;

    /// Description shortened for list rows.
    ///
    /// Descriptions longer than [`Self::SUMMARY_LENGTH`] characters are cut
    /// at that many characters and suffixed with `...`.
    #[must_use]
    pub fn summary(&self) -> String {
        if self.description.chars().count() > Self::SUMMARY_LENGTH {
            let cut: String = self.description.chars().take(Self::SUMMARY_LENGTH).collect();
            format!("{cut}...")
        } else {
            self.description.clone()
        }
    }
}
