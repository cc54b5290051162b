//! Three-step checkout: shipping details, payment, review.
//!
//! Each step must be complete before [`Checkout::advance`] moves on, and
//! [`Checkout::place_order`] checks both forms again since they stay editable.
//! Placing the order empties the cart; it does not create an [`Order`] record.
//! Pix payments get a 5% discount on the final total.
//!
//! [`Order`]: crate::models::Order

use rust_decimal::{Decimal, RoundingStrategy};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, instrument};

use encantado_core::{PaymentMethod, Price};

use crate::cart::CartSummary;
use crate::models::Address;
use crate::session::SessionStore;

/// Checkout progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStep {
    Shipping,
    Payment,
    Review,
    Confirmed,
}

impl CheckoutStep {
    /// 1-based position shown in the step indicator.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Shipping => 1,
            Self::Payment => 2,
            Self::Review => 3,
            Self::Confirmed => 4,
        }
    }
}

impl std::fmt::Display for CheckoutStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shipping => write!(f, "shipping"),
            Self::Payment => write!(f, "payment"),
            Self::Review => write!(f, "review"),
            Self::Confirmed => write!(f, "confirmed"),
        }
    }
}

/// Errors raised while moving through checkout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// Checkout needs at least one cart line.
    #[error("cart is empty")]
    EmptyCart,

    /// Required shipping fields left blank.
    #[error("missing shipping fields: {}", .0.join(", "))]
    MissingShippingFields(Vec<&'static str>),

    /// No payment method chosen.
    #[error("no payment method selected")]
    MissingPaymentMethod,

    /// Credit card chosen but card fields left blank.
    #[error("missing card fields: {}", .0.join(", "))]
    MissingCardFields(Vec<&'static str>),

    /// The action is not available at the current step.
    #[error("not allowed at checkout step {0}")]
    WrongStep(CheckoutStep),
}

/// Delivery contact and address, step 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ShippingDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub zip_code: String,
    pub street: String,
    pub number: String,
    /// Optional.
    pub complement: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
}

impl ShippingDetails {
    /// Copy a saved address into the address fields. Contact fields are kept.
    pub fn fill_address(&mut self, address: &Address) {
        self.zip_code.clone_from(&address.zip_code);
        self.street.clone_from(&address.street);
        self.number.clone_from(&address.number);
        self.complement = address.complement.clone().unwrap_or_default();
        self.neighborhood.clone_from(&address.neighborhood);
        self.city.clone_from(&address.city);
        self.state.clone_from(&address.state);
    }

    /// Names of required fields that are blank, in form order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("zip_code", &self.zip_code),
            ("street", &self.street),
            ("number", &self.number),
            ("neighborhood", &self.neighborhood),
            ("city", &self.city),
            ("state", &self.state),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}

/// Card data entered when paying by credit card.
#[derive(Debug, Default)]
pub struct CardDetails {
    pub number: Option<SecretString>,
    pub holder_name: String,
    /// `MM/YY`.
    pub expiry: String,
    pub cvv: Option<SecretString>,
}

impl CardDetails {
    /// Names of blank card fields, in form order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let blank_secret =
            |s: &Option<SecretString>| s.as_ref().is_none_or(|v| v.expose_secret().trim().is_empty());

        let mut missing = Vec::new();
        if blank_secret(&self.number) {
            missing.push("card_number");
        }
        if self.holder_name.trim().is_empty() {
            missing.push("card_name");
        }
        if self.expiry.trim().is_empty() {
            missing.push("card_expiry");
        }
        if blank_secret(&self.cvv) {
            missing.push("card_cvv");
        }
        missing
    }

    /// Last four digits of the card number, for receipts.
    #[must_use]
    pub fn last_four(&self) -> Option<String> {
        let digits: Vec<char> = self
            .number
            .as_ref()?
            .expose_secret()
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        let start = digits.len().checked_sub(4)?;
        digits.get(start..).map(|tail| tail.iter().collect())
    }
}

/// Payment choice, step 2.
#[derive(Debug, Default)]
pub struct PaymentDetails {
    pub method: Option<PaymentMethod>,
    pub card: CardDetails,
}

/// Percentage taken off the total for Pix payments.
pub const PIX_DISCOUNT_PERCENT: u8 = 5;

/// Discount granted for paying `total` with `method`, rounded to cents.
#[must_use]
pub fn payment_discount(method: PaymentMethod, total: Decimal) -> Decimal {
    match method {
        PaymentMethod::Pix => (total * Decimal::from(PIX_DISCOUNT_PERCENT) / Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        PaymentMethod::CreditCard | PaymentMethod::Boleto => Decimal::ZERO,
    }
}

/// Result of a placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderConfirmation {
    pub summary: CartSummary,
    pub payment_method: PaymentMethod,
    /// Payment method discount, zero unless paid by Pix.
    pub discount: Price,
    /// `summary.total` minus `discount`.
    pub amount_due: Price,
    /// Present for credit card payments.
    pub card_last_four: Option<String>,
    pub ship_to: ShippingDetails,
    pub notes: Option<String>,
}

/// An in-progress checkout for the current cart.
#[derive(Debug)]
pub struct Checkout {
    step: CheckoutStep,
    shipping: ShippingDetails,
    payment: PaymentDetails,
    notes: String,
}

impl Checkout {
    /// Open checkout for the session's cart, prefilling name and email from
    /// the logged-in user. Guests start with a blank form.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::EmptyCart` if there is nothing to buy.
    pub fn start(session: &SessionStore) -> Result<Self, CheckoutError> {
        if session.cart().is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let shipping = session
            .user()
            .map(|user| ShippingDetails {
                name: user.name.clone(),
                email: user.email.to_string(),
                ..ShippingDetails::default()
            })
            .unwrap_or_default();

        Ok(Self {
            step: CheckoutStep::Shipping,
            shipping,
            payment: PaymentDetails::default(),
            notes: String::new(),
        })
    }

    #[must_use]
    pub const fn step(&self) -> CheckoutStep {
        self.step
    }

    #[must_use]
    pub const fn shipping(&self) -> &ShippingDetails {
        &self.shipping
    }

    pub const fn shipping_mut(&mut self) -> &mut ShippingDetails {
        &mut self.shipping
    }

    #[must_use]
    pub const fn payment(&self) -> &PaymentDetails {
        &self.payment
    }

    pub const fn payment_mut(&mut self) -> &mut PaymentDetails {
        &mut self.payment
    }

    /// Free-text order notes.
    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    /// Validate the current step and move to the next one.
    ///
    /// # Errors
    ///
    /// - `MissingShippingFields` at the shipping step
    /// - `MissingPaymentMethod` / `MissingCardFields` at the payment step
    /// - `WrongStep` at review (use [`Checkout::place_order`]) or after confirmation
    pub fn advance(&mut self) -> Result<CheckoutStep, CheckoutError> {
        self.step = match self.step {
            CheckoutStep::Shipping => {
                self.check_shipping()?;
                CheckoutStep::Payment
            }
            CheckoutStep::Payment => {
                self.check_payment()?;
                CheckoutStep::Review
            }
            step @ (CheckoutStep::Review | CheckoutStep::Confirmed) => {
                return Err(CheckoutError::WrongStep(step));
            }
        };
        Ok(self.step)
    }

    fn check_shipping(&self) -> Result<(), CheckoutError> {
        let missing = self.shipping.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CheckoutError::MissingShippingFields(missing))
        }
    }

    fn check_payment(&self) -> Result<PaymentMethod, CheckoutError> {
        let method = self
            .payment
            .method
            .ok_or(CheckoutError::MissingPaymentMethod)?;
        if method.requires_card() {
            let missing = self.payment.card.missing_fields();
            if !missing.is_empty() {
                return Err(CheckoutError::MissingCardFields(missing));
            }
        }
        Ok(method)
    }

    /// Go back one step. No effect at the first step or after confirmation.
    pub const fn back(&mut self) {
        self.step = match self.step {
            CheckoutStep::Shipping | CheckoutStep::Payment => CheckoutStep::Shipping,
            CheckoutStep::Review => CheckoutStep::Payment,
            CheckoutStep::Confirmed => CheckoutStep::Confirmed,
        };
    }

    /// Place the order from the review step.
    ///
    /// Totals are taken from the session's cart at this moment, then the cart
    /// is cleared. Order history is left untouched.
    ///
    /// # Errors
    ///
    /// - `WrongStep` unless at the review step
    /// - `EmptyCart` if the cart was emptied after checkout started
    /// - any shipping or payment error, if a form was edited after it was
    ///   accepted; the step stays at review and the cart is kept
    #[instrument(skip_all, fields(step = %self.step))]
    pub fn place_order(
        &mut self,
        session: &mut SessionStore,
    ) -> Result<OrderConfirmation, CheckoutError> {
        if self.step != CheckoutStep::Review {
            return Err(CheckoutError::WrongStep(self.step));
        }
        if session.cart().is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        self.check_shipping()?;
        let payment_method = self.check_payment()?;

        let summary = session.summary();
        let currency = summary.total.currency_code;
        let discount = payment_discount(payment_method, summary.total.amount);
        let amount_due = Price::new(summary.total.amount - discount, currency);
        session.clear_cart();
        self.step = CheckoutStep::Confirmed;

        info!(
            total = %summary.total,
            amount_due = %amount_due,
            items = summary.item_count,
            payment_method = %payment_method,
            "Order placed"
        );

        let notes = self.notes.trim();
        Ok(OrderConfirmation {
            summary,
            payment_method,
            discount: Price::new(discount, currency),
            amount_due,
            card_last_four: if payment_method.requires_card() {
                self.payment.card.last_four()
            } else {
                None
            },
            ship_to: self.shipping.clone(),
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        })
    }
}
