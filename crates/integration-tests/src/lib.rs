//! Integration tests for the Encantado storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p encantado-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `session_store` - Login, logout, cart arithmetic across a session
//! - `checkout_flow` - The three checkout steps end to end
//! - `catalog_browse` - Category pages, filters, search and add-to-cart
//!
//! Everything runs in memory; no server or database is needed.

use rust_decimal::Decimal;
use secrecy::SecretString;

use encantado_core::ProductId;
use encantado_storefront::config::StorefrontConfig;
use encantado_storefront::models::CartItem;
use encantado_storefront::{AppState, SessionStore};

/// Email accepted by the default configuration.
pub const DEMO_EMAIL: &str = "ana.silva@email.com";

/// Configuration with built-in defaults, ignoring the environment.
///
/// # Panics
///
/// Panics if the defaults fail to load.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn config() -> StorefrontConfig {
    StorefrontConfig::defaults().unwrap()
}

/// A fresh logged-out session.
#[must_use]
pub fn session() -> SessionStore {
    SessionStore::from_config(&config())
}

/// Fresh state with the seeded catalog.
#[must_use]
pub fn app_state() -> AppState {
    AppState::new(config())
}

/// A password value; the mock login never reads it.
#[must_use]
pub fn password(value: &str) -> SecretString {
    SecretString::from(value.to_string())
}

/// A cart line with a whole-real price.
#[must_use]
pub fn line(id: &str, price: i64, quantity: u32) -> CartItem {
    CartItem {
        product_id: ProductId::new(id),
        name: format!("Produto {id}"),
        unit_price: Decimal::new(price, 0),
        quantity,
        image: String::new(),
        category: "decoracao".to_string(),
        customization: None,
    }
}
