//! User domain types.

use serde::{Deserialize, Serialize};

use encantado_core::{AddressId, Email, UserId};

/// A logged-in shopper.
///
/// Exists only while someone is logged in; dropped on logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// User's email address.
    pub email: Email,
    /// Contact phone, free-form (e.g. "(11) 99999-9999").
    pub phone: Option<String>,
    /// Saved delivery addresses.
    pub addresses: Vec<Address>,
}

impl User {
    /// First word of the display name, used in greetings.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    /// The first saved address, if any.
    #[must_use]
    pub fn primary_address(&self) -> Option<&Address> {
        self.addresses.first()
    }
}

/// A postal delivery address owned by a [`User`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: AddressId,
    /// Label chosen by the user (e.g. "Casa", "Trabalho").
    pub name: String,
    pub street: String,
    pub number: String,
    pub complement: Option<String>,
    pub neighborhood: String,
    pub city: String,
    /// Two-letter state code (e.g. "SP").
    pub state: String,
    pub zip_code: String,
}

impl Address {
    /// Single-line rendering: `street, number[ - complement] - neighborhood, city/state zip`.
    #[must_use]
    pub fn one_line(&self) -> String {
        let complement = self
            .complement
            .as_deref()
            .map(|c| format!(" - {c}"))
            .unwrap_or_default();
        format!(
            "{}, {}{complement} - {}, {}/{} {}",
            self.street, self.number, self.neighborhood, self.city, self.state, self.zip_code
        )
    }
}

/// Registration payload: a [`User`] without an id or addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: Email,
    pub phone: Option<String>,
}
