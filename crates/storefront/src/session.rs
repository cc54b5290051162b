//! The session store: current user, cart and order history.
//!
//! One `SessionStore` corresponds to one shopper's tab. All state is owned
//! and mutated through `&mut self`; nothing survives the value being dropped.

use rust_decimal::Decimal;
use secrecy::SecretString;
use tracing::{debug, info, instrument};

use encantado_core::{CurrencyCode, Email, ProductId};

use crate::cart::{Cart, CartSummary, ShippingPolicy};
use crate::config::StorefrontConfig;
use crate::models::{CartItem, NewUser, NotificationPreferences, Order, User};
use crate::seed;
use crate::services::auth::{AuthError, AuthService};

/// In-memory state for one shopping session.
#[derive(Debug, Clone)]
pub struct SessionStore {
    auth: AuthService,
    user: Option<User>,
    cart: Cart,
    orders: Vec<Order>,
    preferences: NotificationPreferences,
    shipping: ShippingPolicy,
    currency: CurrencyCode,
}

impl SessionStore {
    /// Create a logged-out session with an empty cart.
    #[must_use]
    pub fn new(
        auth: AuthService,
        orders: Vec<Order>,
        shipping: ShippingPolicy,
        currency: CurrencyCode,
    ) -> Self {
        Self {
            auth,
            user: None,
            cart: Cart::new(),
            orders,
            preferences: NotificationPreferences::default(),
            shipping,
            currency,
        }
    }

    /// A session using the demo account and order history from `config`.
    #[must_use]
    pub fn from_config(config: &StorefrontConfig) -> Self {
        let demo_account = seed::demo_user(config.demo_email.clone());
        Self::new(
            AuthService::new(demo_account),
            seed::demo_orders(),
            config.shipping,
            config.currency,
        )
    }

    // =========================================================================
    // User
    // =========================================================================

    /// Log in. Only the demo account's email succeeds; the password is ignored.
    ///
    /// A failed attempt leaves the current user (if any) logged in.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` for any other email.
    #[instrument(skip(self, password))]
    pub fn login(&mut self, email: &str, password: &SecretString) -> Result<&User, AuthError> {
        let user = self.auth.authenticate(email, password)?;
        Ok(self.user.insert(user))
    }

    /// Log out, clearing the user, the cart and any saved preferences.
    #[instrument(skip(self))]
    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            info!(user_id = %user.id, "Logged out");
        }
        self.cart.clear();
        self.preferences = NotificationPreferences::default();
    }

    /// Register and log in as the new user. Always succeeds.
    #[instrument(skip(self, new_user))]
    pub fn register(&mut self, new_user: NewUser) -> &User {
        let user = self.auth.register(new_user);
        self.user.insert(user)
    }

    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Email accepted by [`SessionStore::login`].
    #[must_use]
    pub const fn demo_email(&self) -> &Email {
        self.auth.demo_email()
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// The static order history, regardless of login state.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Order history for the logged-in user.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::LoginRequired` when logged out.
    pub fn order_history(&self) -> Result<&[Order], AuthError> {
        if self.is_logged_in() {
            Ok(&self.orders)
        } else {
            Err(AuthError::LoginRequired)
        }
    }

    // =========================================================================
    // Preferences
    // =========================================================================

    #[must_use]
    pub const fn preferences(&self) -> &NotificationPreferences {
        &self.preferences
    }

    /// Save notification settings.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::LoginRequired` when logged out.
    pub fn update_preferences(
        &mut self,
        preferences: NotificationPreferences,
    ) -> Result<(), AuthError> {
        if !self.is_logged_in() {
            return Err(AuthError::LoginRequired);
        }
        self.preferences = preferences;
        debug!(?preferences, "Saved notification preferences");
        Ok(())
    }

    // =========================================================================
    // Cart
    // =========================================================================

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add an item, merging quantities with an existing line for the same product.
    pub fn add_to_cart(&mut self, item: CartItem) {
        self.cart.add(item);
    }

    /// Remove a product's line. Unknown ids are ignored.
    pub fn remove_from_cart(&mut self, product_id: &ProductId) {
        self.cart.remove(product_id);
    }

    /// Set a line's quantity; 0 removes the line. Unknown ids are ignored.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: u32) {
        self.cart.update_quantity(product_id, quantity);
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Sum of price × quantity over the cart.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.cart.total()
    }

    /// Sum of quantities over the cart.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.cart.item_count()
    }

    /// Subtotal, shipping and final total for the cart.
    #[must_use]
    pub fn summary(&self) -> CartSummary {
        CartSummary::new(&self.cart, &self.shipping, self.currency)
    }

    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.currency
    }
}
