//! Integration tests for catalog browsing and add-to-cart.
//!
//! Run with: cargo test -p encantado-integration-tests

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use rust_decimal::Decimal;

use encantado_integration_tests::app_state;
use encantado_storefront::StorefrontError;
use encantado_storefront::cart::CartError;
use encantado_storefront::catalog::{ProductFilter, SortOrder};
use encantado_storefront::state::AddToCart;

fn pick(id: &str, color: &str, size: &str) -> AddToCart {
    AddToCart {
        color: Some(color.to_string()),
        size: Some(size.to_string()),
        ..AddToCart::new(id)
    }
}

#[test]
fn test_category_page_then_add_cheapest() {
    let mut state = app_state();
    let category = state.catalog().category("decoracao").unwrap();
    let filter = ProductFilter {
        category: Some(category.slug.clone()),
        ..ProductFilter::default()
    };
    let cheapest = state.catalog().browse(&filter, SortOrder::PriceLow)[0].id.clone();
    assert_eq!(cheapest.as_str(), "6");

    state
        .add_product(pick(cheapest.as_str(), "bege", "Grande (15cm)"))
        .unwrap();

    let item = &state.session().cart().items()[0];
    assert_eq!(item.name, "Porta-Retrato Família");
    assert_eq!(item.unit_price, Decimal::new(2890, 2));
    assert_eq!(
        item.customization.as_deref(),
        Some("Cor: bege, Tamanho: Grande (15cm)")
    );
}

#[test]
fn test_unknown_category_falls_back() {
    let state = app_state();
    let category = state.catalog().category("brinquedos").unwrap();
    assert_eq!(category.slug, "decoracao");
}

#[test]
fn test_free_shipping_progress() {
    let mut state = app_state();
    state
        .add_product(pick("4", "vermelho", "Médio (12cm)"))
        .unwrap();
    state
        .add_product(pick("3", "verde", "Pequeno (8cm)"))
        .unwrap();

    let summary = state.session().summary();
    assert_eq!(summary.subtotal.amount, Decimal::new(9950, 2));
    assert_eq!(summary.shipping.to_string(), "R$ 15,90");
    assert_eq!(
        summary.remaining_for_free_shipping.unwrap().to_string(),
        "R$ 0,50"
    );

    state
        .add_product(pick("5", "azul", "Pequeno (8cm)"))
        .unwrap();
    let summary = state.session().summary();
    assert!(summary.is_free_shipping());
    assert_eq!(summary.total.to_string(), "R$ 108,00");
}

#[test]
fn test_selection_errors_leave_cart_untouched() {
    let mut state = app_state();

    let no_size = AddToCart {
        color: Some("rosa".to_string()),
        ..AddToCart::new("1")
    };
    let err = state.add_product(no_size).unwrap_err();
    assert_eq!(err, CartError::MissingOption("size"));
    assert_eq!(StorefrontError::from(err).title(), "Selecione as opções");

    let wrong_color = pick("1", "preto", "Pequeno (8cm)");
    assert!(matches!(
        state.add_product(wrong_color),
        Err(CartError::InvalidOption { option: "color", .. })
    ));

    let zero = AddToCart {
        quantity: 0,
        ..pick("1", "rosa", "Pequeno (8cm)")
    };
    assert_eq!(state.add_product(zero), Err(CartError::ZeroQuantity));

    assert!(state.session().cart().is_empty());
}

#[test]
fn test_promotion_product_can_be_bought() {
    let mut state = app_state();
    let promo = &state.catalog().promotions()[5];
    let id = promo.product.id.clone();
    assert!(promo.product.is_on_sale());

    state.quick_add(&id).unwrap();
    let line = state.session().cart().get(&id).unwrap();
    assert_eq!(line.quantity, 1);
    assert_eq!(line.customization, None);

    assert_eq!(
        state.add_product(AddToCart::new(id.as_str())),
        Err(CartError::MissingOption("color"))
    );
}

#[test]
fn test_selection_stores_listed_option_text() {
    let mut state = app_state();
    state
        .add_product(pick("2", "ROXO", "médio (12cm)"))
        .unwrap();
    assert_eq!(
        state.session().cart().items()[0].customization.as_deref(),
        Some("Cor: roxo, Tamanho: Médio (12cm)")
    );
}

#[test]
fn test_search_results_serialize() {
    let state = app_state();
    let results = state.catalog().search("topo");
    let json = serde_json::to_value(&results).unwrap();

    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["id"], "1");
    assert_eq!(json[0]["price"], "45.00");
    assert_eq!(json[0]["is_best_seller"], true);
}
