//! Historical order record.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use encantado_core::{OrderId, OrderStatus};

use super::{Address, CartItem};

/// A past order. Immutable once constructed.
///
/// `total` is the amount charged and is stored as-is rather than derived from
/// `items`, since it may include shipping or discounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub date: NaiveDate,
    pub status: OrderStatus,
    pub total: Decimal,
    pub items: Vec<CartItem>,
    pub address: Address,
}

impl Order {
    /// Total number of units across all items.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |count, item| count.saturating_add(item.quantity))
    }
}
