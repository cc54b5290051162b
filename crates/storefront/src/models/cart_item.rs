//! Cart line item.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use encantado_core::ProductId;

/// One line in the cart, also used as the item snapshot inside an [`Order`].
///
/// [`Order`]: super::Order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Merge key within a cart.
    pub product_id: ProductId,
    pub name: String,
    /// Price of one unit, in the store currency.
    pub unit_price: Decimal,
    /// Always at least 1 while the line is in a cart.
    pub quantity: u32,
    /// Image path or URL.
    pub image: String,
    /// Category slug.
    pub category: String,
    /// Free-text personalization (colors, names, themes).
    pub customization: Option<String>,
}

impl CartItem {
    /// `unit_price × quantity`.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}
