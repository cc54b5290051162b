//! Business logic services for the storefront.
//!
//! # Services
//!
//! - `auth` - Mock login and registration for the demo shop

pub mod auth;
