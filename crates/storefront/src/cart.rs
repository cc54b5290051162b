//! Shopping cart: line items, totals and the shipping rule.
//!
//! Lines are keyed by product id. Adding a product that is already in the
//! cart adds to that line's quantity instead of creating a second line, even
//! when the new item carries a different customization note; the existing
//! line keeps its original note.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use encantado_core::{CurrencyCode, Price, ProductId};

use crate::models::CartItem;

/// Errors building a cart line from a product page selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// A required product option was not chosen.
    #[error("missing product option: {0}")]
    MissingOption(&'static str),

    /// The chosen option is not offered for this product.
    #[error("invalid {option} for this product: {value}")]
    InvalidOption {
        option: &'static str,
        value: String,
    },

    /// Quantity must be at least 1.
    #[error("quantity must be at least 1")]
    ZeroQuantity,

    /// No product with this id in the catalog.
    #[error("unknown product: {0}")]
    UnknownProduct(ProductId),
}

/// Ordered list of line items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Line items in the order they were first added.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up the line for a product.
    #[must_use]
    pub fn get(&self, product_id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| &item.product_id == product_id)
    }

    /// Add an item, merging into an existing line with the same product id.
    ///
    /// An item with quantity 0 is ignored.
    pub fn add(&mut self, item: CartItem) {
        if item.quantity == 0 {
            debug!(product_id = %item.product_id, "Ignoring zero-quantity add");
            return;
        }

        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|line| line.product_id == item.product_id)
        {
            existing.quantity = existing.quantity.saturating_add(item.quantity);
            debug!(
                product_id = %existing.product_id,
                quantity = existing.quantity,
                "Merged into existing cart line"
            );
        } else {
            debug!(product_id = %item.product_id, quantity = item.quantity, "Added cart line");
            self.items.push(item);
        }
    }

    /// Remove a product's line, returning it if present.
    pub fn remove(&mut self, product_id: &ProductId) -> Option<CartItem> {
        let index = self
            .items
            .iter()
            .position(|item| &item.product_id == product_id)?;
        debug!(%product_id, "Removed cart line");
        Some(self.items.remove(index))
    }

    /// Set a line's quantity; 0 removes the line.
    ///
    /// Returns `false` if the product is not in the cart.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove(product_id).is_some();
        }

        match self
            .items
            .iter_mut()
            .find(|item| &item.product_id == product_id)
        {
            Some(item) => {
                item.quantity = quantity;
                debug!(%product_id, quantity, "Updated cart line quantity");
                true
            }
            None => false,
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of `unit_price × quantity` over all lines.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |count, item| count.saturating_add(item.quantity))
    }
}

/// Flat-rate shipping with a free-shipping threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingPolicy {
    /// Subtotals at or above this ship free.
    pub free_shipping_threshold: Decimal,
    /// Charged below the threshold.
    pub flat_rate: Decimal,
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self {
            free_shipping_threshold: Decimal::new(100, 0),
            flat_rate: Decimal::new(1590, 2),
        }
    }
}

impl ShippingPolicy {
    /// Shipping charged for a subtotal.
    #[must_use]
    pub fn cost(&self, subtotal: Decimal) -> Decimal {
        if subtotal >= self.free_shipping_threshold {
            Decimal::ZERO
        } else {
            self.flat_rate
        }
    }

    /// How much more must be added to reach free shipping, if anything.
    #[must_use]
    pub fn remaining_for_free(&self, subtotal: Decimal) -> Option<Decimal> {
        let remaining = self.free_shipping_threshold - subtotal;
        (remaining > Decimal::ZERO).then_some(remaining)
    }
}

/// Totals shown beside the cart and on the checkout review step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSummary {
    pub item_count: u32,
    pub subtotal: Price,
    pub shipping: Price,
    pub total: Price,
    /// `None` once shipping is free.
    pub remaining_for_free_shipping: Option<Price>,
}

impl CartSummary {
    /// Summarize a cart. An empty cart has no shipping charge.
    #[must_use]
    pub fn new(cart: &Cart, policy: &ShippingPolicy, currency: CurrencyCode) -> Self {
        let subtotal = cart.total();
        let shipping = if cart.is_empty() {
            Decimal::ZERO
        } else {
            policy.cost(subtotal)
        };

        Self {
            item_count: cart.item_count(),
            subtotal: Price::new(subtotal, currency),
            shipping: Price::new(shipping, currency),
            total: Price::new(subtotal + shipping, currency),
            remaining_for_free_shipping: policy
                .remaining_for_free(subtotal)
                .map(|amount| Price::new(amount, currency)),
        }
    }

    #[must_use]
    pub fn is_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}
