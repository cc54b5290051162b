//! Encantado Storefront library.
//!
//! Everything a shopper does in the Ateliê Biscuit Encantado demo shop, held
//! in memory for the lifetime of one session:
//!
//! - [`catalog`] - Product browsing, filtering, search and promotions
//! - [`cart`] - Line items, totals and the shipping rule
//! - [`checkout`] - The three-step checkout form
//! - [`session`] - The session store tying user, cart and order history together
//! - [`services::auth`] - Mock login and registration
//!
//! Nothing here performs I/O except [`config::StorefrontConfig::from_env`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod models;
pub mod seed;
pub mod services;
pub mod session;
pub mod state;

pub use error::{Result, StorefrontError};
pub use session::SessionStore;
pub use state::AppState;
