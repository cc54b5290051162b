//! Catalog listing, search and promotions.

use clap::Args;
use rust_decimal::Decimal;

use encantado_core::CurrencyCode;
use encantado_storefront::AppState;
use encantado_storefront::catalog::{ProductFilter, SortOrder};
use encantado_storefront::models::{Product, Promotion};

use super::{CommandError, Output, money};

/// Category page sidebar options.
#[derive(Debug, Clone, Args)]
pub struct CatalogArgs {
    /// Category slug; unknown slugs show the default category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Sort order (`relevance`, `price-low`, `price-high`, `newest`, `rating`)
    #[arg(short, long, default_value_t = SortOrder::Relevance)]
    pub sort: SortOrder,

    /// Inclusive lower price bound
    #[arg(long)]
    pub min_price: Option<Decimal>,

    /// Inclusive upper price bound
    #[arg(long)]
    pub max_price: Option<Decimal>,

    /// Keep products offering this color (repeatable, any-of)
    #[arg(long = "color")]
    pub colors: Vec<String>,

    /// Keep products with this theme (repeatable, any-of)
    #[arg(long = "theme")]
    pub themes: Vec<String>,
}

impl CatalogArgs {
    fn filter(&self, category: Option<String>) -> ProductFilter {
        let defaults = ProductFilter::default();
        ProductFilter {
            category,
            min_price: self.min_price.unwrap_or(defaults.min_price),
            max_price: self.max_price.unwrap_or(defaults.max_price),
            colors: self.colors.clone(),
            themes: self.themes.clone(),
        }
    }
}

/// List products matching the filters.
///
/// # Errors
///
/// Returns an error if JSON output fails.
#[allow(clippy::print_stdout)]
pub fn list(state: &AppState, args: &CatalogArgs, output: Output) -> Result<(), CommandError> {
    let catalog = state.catalog();
    let category = args
        .category
        .as_deref()
        .and_then(|slug| catalog.category(slug));
    let products = catalog.browse(&args.filter(category.map(|c| c.slug.clone())), args.sort);
    let currency = state.config().currency;

    output.emit(&products, || {
        if let Some(category) = category {
            println!("{}", category.title);
            println!("{}", category.description);
            println!();
        }
        print_products(&products, currency);
        println!();
        println!("{} produto(s) encontrado(s)", products.len());
    })
}

/// Search product names and categories.
///
/// # Errors
///
/// Returns an error if JSON output fails.
#[allow(clippy::print_stdout)]
pub fn search(state: &AppState, query: &str, output: Output) -> Result<(), CommandError> {
    let products = state.catalog().search(query);
    let currency = state.config().currency;

    output.emit(&products, || {
        if products.is_empty() {
            println!("Nenhum produto encontrado para \"{query}\"");
        } else {
            print_products(&products, currency);
        }
    })
}

/// List promotions, optionally only limited-time offers.
///
/// # Errors
///
/// Returns an error if JSON output fails.
#[allow(clippy::print_stdout)]
pub fn promotions(state: &AppState, limited_only: bool, output: Output) -> Result<(), CommandError> {
    let catalog = state.catalog();
    let promotions: Vec<&Promotion> = if limited_only {
        catalog.limited_time()
    } else {
        catalog.promotions().iter().collect()
    };
    let currency = state.config().currency;

    output.emit(&promotions, || {
        for promotion in &promotions {
            print_promotion(promotion, currency);
        }
    })
}

#[allow(clippy::print_stdout)]
pub fn print_products(products: &[&Product], currency: CurrencyCode) {
    for product in products {
        let mut badges = Vec::new();
        if product.is_new {
            badges.push("novo".to_string());
        }
        if product.is_best_seller {
            badges.push("mais vendido".to_string());
        }
        if let Some(original) = product.original_price {
            badges.push(format!("de {}", money(original, currency)));
        }

        println!(
            "{:>3}  {:<36}  {:>10}  {}  {}",
            product.id.as_str(),
            product.name,
            money(product.price, currency),
            stars(product.rating),
            badges.join(", ")
        );
    }
}

/// Product detail with the options a selection must choose from.
#[allow(clippy::print_stdout)]
pub fn print_product_detail(product: &Product, currency: CurrencyCode) {
    println!("{} ({})", product.name, product.id);
    println!("  Preço: {}", money(product.price, currency));
    if product.is_on_sale() {
        if let Some(original) = product.original_price {
            println!("  De: {}", money(original, currency));
        }
    }
    println!("  Categoria: {}", product.category);
    println!("  Avaliação: {}", stars(product.rating));
    if !product.colors.is_empty() {
        println!("  Cores: {}", product.colors.join(", "));
    }
    if !product.sizes.is_empty() {
        println!("  Tamanhos: {}", product.sizes.join(", "));
    }
}

#[allow(clippy::print_stdout)]
fn print_promotion(promotion: &Promotion, currency: CurrencyCode) {
    let product = &promotion.product;
    let mut tags = Vec::new();
    if promotion.limited_time {
        tags.push("tempo limitado");
    }
    if promotion.best_seller {
        tags.push("mais vendido");
    }

    println!(
        "{:>3}  {:<36}  -{:>2}%  {:>10}  economize {}  ({} avaliações)  {}",
        product.id.as_str(),
        product.name,
        promotion.discount_percent,
        money(product.price, currency),
        money(promotion.savings(), currency),
        promotion.review_count,
        tags.join(", ")
    );
}

fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}
