//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional.
//! - `ENCANTADO_DEMO_EMAIL` - Email accepted by the mock login (default: ana.silva@email.com)
//! - `ENCANTADO_FREE_SHIPPING_THRESHOLD` - Subtotal that ships free (default: 100.00)
//! - `ENCANTADO_SHIPPING_RATE` - Flat rate charged below the threshold (default: 15.90)
//! - `ENCANTADO_CURRENCY` - Display currency, `BRL`, `USD` or `EUR` (default: BRL)

use rust_decimal::Decimal;
use thiserror::Error;

use encantado_core::{CurrencyCode, Email};

use crate::cart::ShippingPolicy;
use crate::seed;

const DEMO_EMAIL_VAR: &str = "ENCANTADO_DEMO_EMAIL";
const FREE_SHIPPING_VAR: &str = "ENCANTADO_FREE_SHIPPING_THRESHOLD";
const SHIPPING_RATE_VAR: &str = "ENCANTADO_SHIPPING_RATE";
const CURRENCY_VAR: &str = "ENCANTADO_CURRENCY";

/// Configuration errors that can occur during loading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// The only email the mock login accepts
    pub demo_email: Email,
    /// Currency used when formatting totals
    pub currency: CurrencyCode,
    /// Free-shipping threshold and flat rate
    pub shipping: ShippingPolicy,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Built-in defaults, ignoring the environment.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the defaults are valid values.
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::from_lookup(|_| None)
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` for an unparseable email, amount
    /// or currency, or a negative amount.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let demo_email = get_or_default(&lookup, DEMO_EMAIL_VAR, seed::DEMO_EMAIL);
        let demo_email = Email::parse(&demo_email)
            .map_err(|e| ConfigError::InvalidEnvVar(DEMO_EMAIL_VAR.to_string(), e.to_string()))?;

        let defaults = ShippingPolicy::default();
        let shipping = ShippingPolicy {
            free_shipping_threshold: get_amount(
                &lookup,
                FREE_SHIPPING_VAR,
                defaults.free_shipping_threshold,
            )?,
            flat_rate: get_amount(&lookup, SHIPPING_RATE_VAR, defaults.flat_rate)?,
        };

        let currency = get_or_default(&lookup, CURRENCY_VAR, "BRL")
            .parse::<CurrencyCode>()
            .map_err(|e| ConfigError::InvalidEnvVar(CURRENCY_VAR.to_string(), e))?;

        Ok(Self {
            demo_email,
            currency,
            shipping,
        })
    }
}

/// Get a value or fall back to a default.
fn get_or_default(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key).unwrap_or_else(|| default.to_string())
}

/// Parse a non-negative money amount, or fall back to a default.
fn get_amount(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: Decimal,
) -> Result<Decimal, ConfigError> {
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };

    let amount = raw
        .trim()
        .parse::<Decimal>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if amount.is_sign_negative() {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must not be negative".to_string(),
        ));
    }
    Ok(amount)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<StorefrontConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        StorefrontConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::defaults().unwrap();
        assert_eq!(config.demo_email.as_str(), "ana.silva@email.com");
        assert_eq!(config.currency, CurrencyCode::BRL);
        assert_eq!(config.shipping, ShippingPolicy::default());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("ENCANTADO_DEMO_EMAIL", "teste@loja.com"),
            ("ENCANTADO_FREE_SHIPPING_THRESHOLD", "150.00"),
            ("ENCANTADO_SHIPPING_RATE", " 9.99 "),
            ("ENCANTADO_CURRENCY", "usd"),
        ])
        .unwrap();

        assert_eq!(config.demo_email.as_str(), "teste@loja.com");
        assert_eq!(config.currency, CurrencyCode::USD);
        assert_eq!(config.shipping.free_shipping_threshold, Decimal::new(150, 0));
        assert_eq!(config.shipping.flat_rate, Decimal::new(999, 2));
    }

    #[test]
    fn test_invalid_email() {
        let err = load(&[("ENCANTADO_DEMO_EMAIL", "sem-arroba")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "ENCANTADO_DEMO_EMAIL"));
    }

    #[test]
    fn test_invalid_amount() {
        let err = load(&[("ENCANTADO_SHIPPING_RATE", "quinze")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "ENCANTADO_SHIPPING_RATE"));
    }

    #[test]
    fn test_negative_amount_rejected() {
        let err = load(&[("ENCANTADO_FREE_SHIPPING_THRESHOLD", "-1")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidEnvVar(
                "ENCANTADO_FREE_SHIPPING_THRESHOLD".to_string(),
                "must not be negative".to_string()
            )
        );
    }

    #[test]
    fn test_invalid_currency() {
        assert!(load(&[("ENCANTADO_CURRENCY", "JPY")]).is_err());
    }
}
