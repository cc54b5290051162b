//! Product catalog: category pages, filters, sorting, search and promotions.
//!
//! The catalog is a fixed in-memory list. Every query returns borrowed
//! products in a deterministic order.

mod selection;

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use encantado_core::ProductId;

use crate::models::{Category, Product, Promotion};
use crate::seed;

pub use selection::ProductSelection;

/// Slug of the category shown when a requested slug is unknown.
pub const DEFAULT_CATEGORY: &str = "decoracao";

/// Product listing filters from the category page sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFilter {
    /// Restrict to one category slug.
    pub category: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Decimal,
    /// Inclusive upper price bound.
    pub max_price: Decimal,
    /// Keep products offering any of these colors. Empty keeps all.
    pub colors: Vec<String>,
    /// Keep products matching any of these themes. Empty keeps all.
    pub themes: Vec<String>,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            category: None,
            min_price: Decimal::ZERO,
            max_price: Decimal::new(200, 0),
            colors: Vec::new(),
            themes: Vec::new(),
        }
    }
}

impl ProductFilter {
    /// Whether a product passes every active filter.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let matches_category = self
            .category
            .as_deref()
            .is_none_or(|slug| product.category.eq_ignore_ascii_case(slug));
        let matches_price = product.price >= self.min_price && product.price <= self.max_price;

        matches_category
            && matches_price
            && any_of(&self.colors, &product.colors)
            && any_of(&self.themes, &product.themes)
    }

    /// Add a color if absent, remove it if present.
    pub fn toggle_color(&mut self, color: &str) {
        toggle(&mut self.colors, color);
    }

    /// Add a theme if absent, remove it if present.
    pub fn toggle_theme(&mut self, theme: &str) {
        toggle(&mut self.themes, theme);
    }
}

fn any_of(wanted: &[String], offered: &[String]) -> bool {
    wanted.is_empty()
        || wanted
            .iter()
            .any(|w| offered.iter().any(|o| o.to_lowercase() == w.to_lowercase()))
}

fn toggle(values: &mut Vec<String>, value: &str) {
    if let Some(index) = values.iter().position(|v| v == value) {
        values.remove(index);
    } else {
        values.push(value.to_string());
    }
}

/// Listing order for category pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Catalog order.
    #[default]
    Relevance,
    PriceLow,
    PriceHigh,
    /// New products first.
    Newest,
    /// Highest rating first.
    Rating,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Relevance => write!(f, "relevance"),
            Self::PriceLow => write!(f, "price-low"),
            Self::PriceHigh => write!(f, "price-high"),
            Self::Newest => write!(f, "newest"),
            Self::Rating => write!(f, "rating"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relevance" => Ok(Self::Relevance),
            "price-low" => Ok(Self::PriceLow),
            "price-high" => Ok(Self::PriceHigh),
            "newest" => Ok(Self::Newest),
            "rating" => Ok(Self::Rating),
            _ => Err(format!("invalid sort order: {s}")),
        }
    }
}

impl SortOrder {
    /// Sort in place. All orders are stable, so ties keep catalog order.
    pub fn apply(self, products: &mut [&Product]) {
        match self {
            Self::Relevance => {}
            Self::PriceLow => products.sort_by(|a, b| a.price.cmp(&b.price)),
            Self::PriceHigh => products.sort_by(|a, b| b.price.cmp(&a.price)),
            Self::Newest => products.sort_by_key(|p| !p.is_new),
            Self::Rating => products.sort_by(|a, b| b.rating.cmp(&a.rating)),
        }
    }
}

/// The in-memory catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
    promotions: Vec<Promotion>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Catalog {
    #[must_use]
    pub const fn new(
        products: Vec<Product>,
        categories: Vec<Category>,
        promotions: Vec<Promotion>,
    ) -> Self {
        Self {
            products,
            categories,
            promotions,
        }
    }

    /// The catalog shipped with the demo shop.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed::products(), seed::categories(), seed::promotions())
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Find a listed product, falling back to promotion-only products.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products
            .iter()
            .chain(self.promotions.iter().map(|promo| &promo.product))
            .find(|product| &product.id == id)
    }

    /// Category page info, falling back to [`DEFAULT_CATEGORY`] for unknown slugs.
    #[must_use]
    pub fn category(&self, slug: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|c| c.slug == slug)
            .or_else(|| self.categories.iter().find(|c| c.slug == DEFAULT_CATEGORY))
    }

    /// Products in one category, in catalog order.
    #[must_use]
    pub fn by_category(&self, slug: &str) -> Vec<&Product> {
        self.products.iter().filter(|p| p.category == slug).collect()
    }

    /// Filter then sort.
    #[instrument(skip(self))]
    #[must_use]
    pub fn browse(&self, filter: &ProductFilter, sort: SortOrder) -> Vec<&Product> {
        let mut products: Vec<&Product> =
            self.products.iter().filter(|p| filter.matches(p)).collect();
        sort.apply(&mut products);
        products
    }

    /// Case-insensitive substring search over name and category.
    ///
    /// The query is matched as given, surrounding spaces included. An empty
    /// query matches everything.
    #[instrument(skip(self))]
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.category.to_lowercase().contains(&needle)
            })
            .collect()
    }

    #[must_use]
    pub fn promotions(&self) -> &[Promotion] {
        &self.promotions
    }

    /// Promotions flagged as limited-time offers.
    #[must_use]
    pub fn limited_time(&self) -> Vec<&Promotion> {
        self.promotions.iter().filter(|p| p.limited_time).collect()
    }

    /// Promotions flagged as best sellers.
    #[must_use]
    pub fn best_sellers_on_sale(&self) -> Vec<&Promotion> {
        self.promotions.iter().filter(|p| p.best_seller).collect()
    }

    /// Every distinct color across listed products, in first-seen order.
    #[must_use]
    pub fn colors(&self) -> Vec<&str> {
        distinct(self.products.iter().flat_map(|p| p.colors.iter()))
    }

    /// Every distinct theme across listed products, in first-seen order.
    #[must_use]
    pub fn themes(&self) -> Vec<&str> {
        distinct(self.products.iter().flat_map(|p| p.themes.iter()))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a String>) -> Vec<&'a str> {
    let mut seen: Vec<&str> = Vec::new();
    for value in values {
        if !seen.contains(&value.as_str()) {
            seen.push(value);
        }
    }
    seen
}
