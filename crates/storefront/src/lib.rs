//! Boutique Storefront library.
//!
//! Everything the storefront screens need, minus the pixels:
//!
//! - [`catalog`] - HTTP client for the product catalog
//! - [`storage`] - Durable key-value storage with file and in-memory backends
//! - [`cart`] - The persisted cart built on top of storage
//! - [`screens`] - Headless view models for the home, details, cart and drawer screens
//! - [`state`] - Shared handles passed to every screen
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use boutique_storefront::config::StorefrontConfig;
//! use boutique_storefront::screens::HomeScreen;
//! use boutique_storefront::state::AppState;
//! use boutique_storefront::storage::FileStore;
//!
//! let config = StorefrontConfig::from_env()?;
//! let storage = Arc::new(FileStore::new(&config.data_dir));
//! let state = AppState::new(config, storage)?;
//!
//! let mut home = HomeScreen::new(state);
//! home.mount().await;
//! for card in home.cards() {
//!     println!("{} {}", card.title, card.price);
//! }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod screens;
pub mod state;
pub mod storage;

#[cfg(test)]
pub(crate) mod test_support;
