//! Encantado Core - Shared types library.
//!
//! This crate provides common types used across the Ateliê Biscuit Encantado
//! components:
//! - `storefront` - Session store, catalog, cart and checkout
//! - `cli` - Command-line demo driving the storefront
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O and no mutable state. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
