//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `BOUTIQUE_CATALOG_URL` - Catalog endpoint (default: <https://fakestoreapi.com/products>)
//! - `BOUTIQUE_DATA_DIR` - Directory holding the cart snapshot
//!   (default: platform data directory + `boutique`)
//! - `BOUTIQUE_HTTP_TIMEOUT_SECS` - Catalog request timeout (default: 30)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Catalog endpoint used when `BOUTIQUE_CATALOG_URL` is not set.
pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products";

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Endpoint returning the product catalog as a JSON array
    pub catalog_url: Url,
    /// Directory for durable key-value storage
    pub data_dir: PathBuf,
    /// Timeout for catalog requests
    pub http_timeout: Duration,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "production", "staging")
    pub sentry_environment: Option<String>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let catalog_url = lookup("BOUTIQUE_CATALOG_URL")
            .unwrap_or_else(|| DEFAULT_CATALOG_URL.to_string());
        let catalog_url = parse_catalog_url(&catalog_url).map_err(|e| {
            ConfigError::InvalidEnvVar("BOUTIQUE_CATALOG_URL".to_string(), e)
        })?;

        let data_dir = lookup("BOUTIQUE_DATA_DIR").map_or_else(default_data_dir, PathBuf::from);

        let http_timeout = match lookup("BOUTIQUE_HTTP_TIMEOUT_SECS") {
            Some(value) => value.parse::<u64>().map_err(|e| {
                ConfigError::InvalidEnvVar("BOUTIQUE_HTTP_TIMEOUT_SECS".to_string(), e.to_string())
            })?,
            None => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        Ok(Self {
            catalog_url,
            data_dir,
            http_timeout: Duration::from_secs(http_timeout),
            sentry_dsn: lookup("SENTRY_DSN").filter(|dsn| !dsn.is_empty()),
            sentry_environment: lookup("SENTRY_ENVIRONMENT"),
        })
    }
}

/// Parse a catalog URL, accepting only `http` and `https`.
///
/// # Errors
///
/// Returns a description of the problem if the URL is malformed or uses
/// another scheme.
pub fn parse_catalog_url(raw: &str) -> Result<Url, String> {
    let url = Url::parse(raw).map_err(|e| e.to_string())?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(format!("unsupported scheme: {other}")),
    }
}

/// Platform data directory for Boutique, or `.boutique` in the working
/// directory when the platform has none.
fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from(".boutique"), |dir| dir.join("boutique"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.catalog_url.as_str(), DEFAULT_CATALOG_URL);
        assert_eq!(config.http_timeout, Duration::from_secs(30));
        assert!(config.data_dir.to_string_lossy().ends_with("boutique"));
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[
            ("BOUTIQUE_CATALOG_URL", "http://localhost:8080/products"),
            ("BOUTIQUE_DATA_DIR", "/tmp/boutique-test"),
            ("BOUTIQUE_HTTP_TIMEOUT_SECS", "5"),
            ("SENTRY_DSN", "https://key@sentry.example.com/1"),
        ]))
        .unwrap();

        assert_eq!(config.catalog_url.as_str(), "http://localhost:8080/products");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/boutique-test"));
        assert_eq!(config.http_timeout, Duration::from_secs(5));
        assert_eq!(
            config.sentry_dsn.as_deref(),
            Some("https://key@sentry.example.com/1")
        );
    }

    #[test]
    fn test_empty_sentry_dsn_is_none() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[("SENTRY_DSN", "")])).unwrap();
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_invalid_timeout() {
        let err = StorefrontConfig::from_lookup(lookup_from(&[(
            "BOUTIQUE_HTTP_TIMEOUT_SECS",
            "soon",
        )]))
        .unwrap_err();
        assert!(err.to_string().contains("BOUTIQUE_HTTP_TIMEOUT_SECS"));
    }

    #[test]
    fn test_invalid_catalog_url() {
        assert!(
            StorefrontConfig::from_lookup(lookup_from(&[("BOUTIQUE_CATALOG_URL", "not a url")]))
                .is_err()
        );
        assert!(
            StorefrontConfig::from_lookup(lookup_from(&[(
                "BOUTIQUE_CATALOG_URL",
                "ftp://example.com/products"
            )]))
            .is_err()
        );
    }
}
