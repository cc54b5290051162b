//! Catalog types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use encantado_core::ProductId;

use super::CartItem;

/// A handmade product listed in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    /// Compare-at price when the product is marked down.
    pub original_price: Option<Decimal>,
    pub image: String,
    /// Category slug.
    pub category: String,
    /// Star rating, 1-5.
    pub rating: u8,
    /// Available colors, lowercase.
    pub colors: Vec<String>,
    /// Decoration themes, lowercase.
    pub themes: Vec<String>,
    /// Size options offered on the product page. Empty when sizes don't apply.
    pub sizes: Vec<String>,
    pub is_new: bool,
    pub is_best_seller: bool,
}

impl Product {
    /// Whether `original_price` is above the current price.
    #[must_use]
    pub fn is_on_sale(&self) -> bool {
        self.original_price.is_some_and(|original| original > self.price)
    }

    /// A plain cart line for this product, as added from a listing page.
    #[must_use]
    pub fn to_cart_item(&self, quantity: u32) -> CartItem {
        CartItem {
            product_id: self.id.clone(),
            name: self.name.clone(),
            unit_price: self.price,
            quantity,
            image: self.image.clone(),
            category: self.category.clone(),
            customization: None,
        }
    }
}

/// A browsable category page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub slug: String,
    pub title: String,
    pub description: String,
}

/// A product featured on the promotions page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Promotion {
    pub product: Product,
    /// Advertised discount, in whole percent.
    pub discount_percent: u8,
    pub review_count: u32,
    /// Shown in the "limited time" section.
    pub limited_time: bool,
    /// Shown in the "best sellers on sale" section.
    pub best_seller: bool,
}

impl Promotion {
    /// Amount saved per unit against the original price.
    #[must_use]
    pub fn savings(&self) -> Decimal {
        self.product
            .original_price
            .map_or(Decimal::ZERO, |original| {
                (original - self.product.price).max(Decimal::ZERO)
            })
    }
}
