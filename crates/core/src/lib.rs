//! Boutique Core - Shared types library.
//!
//! This crate provides the types and cart operations used across all Boutique
//! components:
//! - `storefront` - Catalog client, cart persistence and screen view models
//! - `cli` - Command-line front end
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no storage,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product identifiers, prices and product records
//! - [`cart`] - Operations over an ordered list of cart entries

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod types;

pub use types::*;
