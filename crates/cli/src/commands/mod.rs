//! CLI subcommands.

pub mod catalog;
pub mod demo;
pub mod orders;
pub mod purchase;
pub mod shell;

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use encantado_core::{CurrencyCode, Price};
use encantado_storefront::StorefrontError;

/// Errors that stop a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// A storefront operation was rejected.
    #[error("{}: {}", .0.title(), .0.user_message())]
    Storefront(#[from] StorefrontError),

    /// Login failed; carries the email that would have worked.
    #[error("Email ou senha incorretos. Tente: {0}")]
    LoginFailed(String),

    /// JSON output failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading commands or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Text or JSON output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Output {
    json: bool,
}

impl Output {
    pub const fn new(json: bool) -> Self {
        Self { json }
    }

    /// Print `value` as pretty JSON in JSON mode, otherwise run `text`.
    #[allow(clippy::print_stdout)]
    pub fn emit<T: Serialize + ?Sized>(
        self,
        value: &T,
        text: impl FnOnce(),
    ) -> Result<(), CommandError> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            text();
        }
        Ok(())
    }
}

/// Format an amount in the configured currency.
pub fn money(amount: Decimal, currency: CurrencyCode) -> String {
    Price::new(amount, currency).to_string()
}
