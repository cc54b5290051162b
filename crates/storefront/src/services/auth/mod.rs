//! Authentication service.
//!
//! Mock authentication for the demo shop: a single test account that accepts
//! any password, and a registration that always succeeds.

mod error;

pub use error::AuthError;

use chrono::Utc;
use secrecy::{ExposeSecret, SecretString};
use tracing::{info, instrument, warn};

use encantado_core::{Email, UserId};

use crate::models::{NewUser, User};

/// Authentication service.
///
/// Holds the test account profile handed out on a successful login.
#[derive(Debug, Clone)]
pub struct AuthService {
    demo_account: User,
}

impl AuthService {
    /// Create a service whose only valid login is `demo_account.email`.
    #[must_use]
    pub const fn new(demo_account: User) -> Self {
        Self { demo_account }
    }

    /// Email that logs in successfully.
    #[must_use]
    pub const fn demo_email(&self) -> &Email {
        &self.demo_account.email
    }

    // =========================================================================
    // Login
    // =========================================================================

    /// Log in with email and password.
    ///
    /// The email must match the demo account exactly. The password is never
    /// inspected.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` for any other email.
    #[instrument(skip(self, _password))]
    pub fn authenticate(&self, email: &str, _password: &SecretString) -> Result<User, AuthError> {
        if email == self.demo_account.email.as_str() {
            info!(user_id = %self.demo_account.id, "Login succeeded");
            Ok(self.demo_account.clone())
        } else {
            warn!("Login rejected");
            Err(AuthError::InvalidCredentials)
        }
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Create a user from a registration payload.
    ///
    /// Always succeeds. The id is the current Unix time in milliseconds and
    /// the address list starts empty.
    #[instrument(skip(self, new_user), fields(email = %new_user.email))]
    pub fn register(&self, new_user: NewUser) -> User {
        let id = UserId::new(Utc::now().timestamp_millis().to_string());
        info!(user_id = %id, "Registered user");
        User {
            id,
            name: new_user.name,
            email: new_user.email,
            phone: new_user.phone,
            addresses: Vec::new(),
        }
    }
}

/// The sign-up form: profile fields plus password and confirmation.
#[derive(Debug)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: SecretString,
    pub confirm_password: SecretString,
}

impl RegistrationForm {
    /// Check the form and produce the registration payload.
    ///
    /// # Errors
    ///
    /// - `AuthError::MissingName` if the name is blank
    /// - `AuthError::InvalidEmail` if the email does not parse
    /// - `AuthError::PasswordMismatch` if password and confirmation differ
    pub fn validate(self) -> Result<NewUser, AuthError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AuthError::MissingName);
        }
        let email = Email::parse(&self.email)?;
        if self.password.expose_secret() != self.confirm_password.expose_secret() {
            return Err(AuthError::PasswordMismatch);
        }

        Ok(NewUser {
            name: name.to_string(),
            email,
            phone: self
                .phone
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty()),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::seed;

    fn service() -> AuthService {
        AuthService::new(seed::demo_user(Email::parse(seed::DEMO_EMAIL).unwrap()))
    }

    fn secret(s: &str) -> SecretString {
        SecretString::from(s.to_string())
    }

    #[test]
    fn test_demo_login_ignores_password() {
        let auth = service();
        for password in ["", "errada", "123456"] {
            let user = auth
                .authenticate("ana.silva@email.com", &secret(password))
                .unwrap();
            assert_eq!(user.name, "Ana Silva");
            assert_eq!(user.phone.as_deref(), Some("(11) 99999-9999"));
        }
    }

    #[test]
    fn test_other_email_rejected() {
        let auth = service();
        assert_eq!(
            auth.authenticate("maria@email.com", &secret("x")),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            auth.authenticate("ANA.SILVA@email.com", &secret("x")),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn test_register_assigns_timestamp_id() {
        let auth = service();
        let before = Utc::now().timestamp_millis();
        let user = auth.register(NewUser {
            name: "Maria Souza".to_string(),
            email: Email::parse("maria@email.com").unwrap(),
            phone: None,
        });
        let after = Utc::now().timestamp_millis();

        let id: i64 = user.id.as_str().parse().unwrap();
        assert!((before..=after).contains(&id));
        assert!(user.addresses.is_empty());
    }

    fn form(password: &str, confirm: &str) -> RegistrationForm {
        RegistrationForm {
            name: " Maria Souza ".to_string(),
            email: "maria@email.com".to_string(),
            phone: Some("  ".to_string()),
            password: secret(password),
            confirm_password: secret(confirm),
        }
    }

    #[test]
    fn test_registration_form_valid() {
        let new_user = form("segredo", "segredo").validate().unwrap();
        assert_eq!(new_user.name, "Maria Souza");
        assert_eq!(new_user.email.as_str(), "maria@email.com");
        assert_eq!(new_user.phone, None);
    }

    #[test]
    fn test_registration_form_password_mismatch() {
        assert_eq!(
            form("segredo", "outro").validate(),
            Err(AuthError::PasswordMismatch)
        );
    }

    #[test]
    fn test_registration_form_missing_name() {
        let mut f = form("a", "a");
        f.name = "   ".to_string();
        assert_eq!(f.validate(), Err(AuthError::MissingName));
    }

    #[test]
    fn test_registration_form_bad_email() {
        let mut f = form("a", "a");
        f.email = "maria".to_string();
        assert!(matches!(f.validate(), Err(AuthError::InvalidEmail(_))));
    }
}
