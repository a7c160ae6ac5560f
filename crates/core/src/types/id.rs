//! Product identifiers.
//!
//! Catalog endpoints hand out either numeric or textual ids, so [`ProductId`]
//! accepts both and keeps them apart: `1` and `"1"` are different products.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a product, stable for the lifetime of a catalog snapshot.
///
/// Serializes untagged, so it round-trips as whatever JSON type the catalog
/// used (number or string).
///
/// # Example
///
/// ```rust
/// # use boutique_core::ProductId;
/// let numeric: ProductId = serde_json::from_str("7").unwrap();
/// let textual: ProductId = serde_json::from_str("\"7\"").unwrap();
///
/// assert_eq!(numeric, ProductId::from(7));
/// assert_ne!(numeric, textual);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    /// Numeric id (e.g. `1`).
    Int(i64),
    /// Textual id (e.g. `"sku-123"`).
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

/// Parses user input: anything that reads as an `i64` becomes [`ProductId::Int`],
/// everything else is kept as text.
impl FromStr for ProductId {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.trim()
            .parse::<i64>()
            .map_or_else(|_| Self::Text(s.trim().to_owned()), Self::Int))
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self::Int(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_owned())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}
