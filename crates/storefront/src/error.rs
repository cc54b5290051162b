//! Unified error handling.
//!
//! Provides a unified `StorefrontError` type over the per-module errors, and
//! maps each one to the short title and message shown to the shopper.

use thiserror::Error;

use crate::cart::CartError;
use crate::checkout::CheckoutError;
use crate::config::ConfigError;
use crate::services::auth::AuthError;

/// Application-level error type for the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorefrontError {
    /// Login, registration or a login-only operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// A product selection could not become a cart line.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// A checkout step is incomplete.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl StorefrontError {
    /// Notification title for this error.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Auth(AuthError::InvalidCredentials | AuthError::LoginRequired) => {
                "Erro no login"
            }
            Self::Auth(_) => "Erro no cadastro",
            Self::Cart(_) => "Selecione as opções",
            Self::Checkout(CheckoutError::MissingPaymentMethod) => {
                "Selecione um método de pagamento"
            }
            Self::Checkout(CheckoutError::MissingCardFields(_)) => "Dados do cartão",
            Self::Checkout(CheckoutError::EmptyCart) => "Carrinho vazio",
            Self::Checkout(_) => "Campos obrigatórios",
            Self::Config(_) => "Erro de configuração",
            Self::NotFound(_) => "Não encontrado",
        }
    }

    /// Message safe to show the shopper. Internal details stay in `Display`.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials => "Email ou senha incorretos".to_string(),
                AuthError::InvalidEmail(_) => "Informe um email válido".to_string(),
                AuthError::MissingName => "Por favor, informe seu nome".to_string(),
                AuthError::PasswordMismatch => "As senhas não coincidem".to_string(),
                AuthError::LoginRequired => "Faça login para continuar".to_string(),
            },
            Self::Cart(err) => match err {
                CartError::MissingOption(_) | CartError::InvalidOption { .. } => {
                    "Por favor, escolha cor e tamanho antes de adicionar ao carrinho".to_string()
                }
                CartError::ZeroQuantity => "A quantidade deve ser pelo menos 1".to_string(),
                CartError::UnknownProduct(id) => format!("Produto {id} não encontrado"),
            },
            Self::Checkout(err) => match err {
                CheckoutError::EmptyCart => {
                    "Adicione produtos ao carrinho antes de finalizar".to_string()
                }
                CheckoutError::MissingShippingFields(_) => {
                    "Por favor, preencha todos os campos de entrega".to_string()
                }
                CheckoutError::MissingPaymentMethod => {
                    "Escolha como deseja pagar".to_string()
                }
                CheckoutError::MissingCardFields(_) => {
                    "Por favor, preencha todos os dados do cartão".to_string()
                }
                CheckoutError::WrongStep(_) => "Esta etapa não está disponível".to_string(),
            },
            Self::Config(err) => err.to_string(),
            Self::NotFound(what) => format!("{what} não encontrado"),
        }
    }
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;
