//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during authentication operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] encantado_core::EmailError),

    /// Login rejected. The only failure `login` can produce.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Registration name left blank.
    #[error("name cannot be empty")]
    MissingName,

    /// Registration password and confirmation differ.
    #[error("passwords do not match")]
    PasswordMismatch,

    /// The operation needs a logged-in user.
    #[error("login required")]
    LoginRequired,
}
