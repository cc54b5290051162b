//! Integration tests for the checkout flow.
//!
//! Run with: cargo test -p encantado-integration-tests

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use rust_decimal::Decimal;

use encantado_core::PaymentMethod;
use encantado_integration_tests::{DEMO_EMAIL, line, password, session};
use encantado_storefront::checkout::{Checkout, CheckoutError, CheckoutStep};
use encantado_storefront::{SessionStore, StorefrontError};

fn logged_in_with_cart(price: i64, quantity: u32) -> SessionStore {
    let mut session = session();
    session.login(DEMO_EMAIL, &password("")).unwrap();
    session.add_to_cart(line("1", price, quantity));
    session
}

/// Fill shipping from the account and advance to payment.
fn to_payment(session: &SessionStore) -> Checkout {
    let mut checkout = Checkout::start(session).unwrap();
    let user = session.user().unwrap();
    let shipping = checkout.shipping_mut();
    shipping.fill_address(user.primary_address().unwrap());
    shipping.phone = user.phone.clone().unwrap();
    assert_eq!(checkout.advance().unwrap(), CheckoutStep::Payment);
    checkout
}

#[test]
fn test_pix_checkout_end_to_end() {
    let mut session = logged_in_with_cart(30, 2);
    let mut checkout = to_payment(&session);

    checkout.payment_mut().method = Some(PaymentMethod::Pix);
    assert_eq!(checkout.advance().unwrap(), CheckoutStep::Review);
    checkout.set_notes("  Entregar após 18h ");

    let confirmation = checkout.place_order(&mut session).unwrap();

    assert_eq!(checkout.step(), CheckoutStep::Confirmed);
    assert_eq!(confirmation.summary.subtotal.amount, Decimal::new(60, 0));
    assert_eq!(confirmation.summary.shipping.amount, Decimal::new(1590, 2));
    assert_eq!(confirmation.summary.total.to_string(), "R$ 75,90");
    assert_eq!(confirmation.discount.to_string(), "R$ 3,80");
    assert_eq!(confirmation.amount_due.to_string(), "R$ 72,10");
    assert_eq!(confirmation.card_last_four, None);
    assert_eq!(confirmation.ship_to.city, "São Paulo");
    assert_eq!(confirmation.notes.as_deref(), Some("Entregar após 18h"));

    // Cart cleared, history untouched
    assert!(session.cart().is_empty());
    assert_eq!(session.order_history().unwrap().len(), 2);
}

#[test]
fn test_pix_discount_on_free_shipping_order() {
    let mut session = logged_in_with_cart(100, 2);
    let mut checkout = to_payment(&session);
    checkout.payment_mut().method = Some(PaymentMethod::Pix);
    checkout.advance().unwrap();

    let confirmation = checkout.place_order(&mut session).unwrap();
    assert_eq!(confirmation.summary.total.to_string(), "R$ 200,00");
    assert_eq!(confirmation.discount.to_string(), "R$ 10,00");
    assert_eq!(confirmation.amount_due.to_string(), "R$ 190,00");
}

#[test]
fn test_forms_edited_at_review_are_checked_again() {
    let mut session = logged_in_with_cart(40, 1);
    let mut checkout = to_payment(&session);
    checkout.payment_mut().method = Some(PaymentMethod::Pix);
    assert_eq!(checkout.advance().unwrap(), CheckoutStep::Review);

    checkout.payment_mut().method = Some(PaymentMethod::CreditCard);
    checkout.shipping_mut().street.clear();

    let err = checkout.place_order(&mut session).unwrap_err();
    assert_eq!(err, CheckoutError::MissingShippingFields(vec!["street"]));
    assert_eq!(session.item_count(), 1);

    checkout.shipping_mut().street = "Rua das Flores".to_string();
    assert!(matches!(
        checkout.place_order(&mut session),
        Err(CheckoutError::MissingCardFields(_))
    ));
    assert_eq!(checkout.step(), CheckoutStep::Review);
    assert_eq!(session.item_count(), 1);
}

#[test]
fn test_free_shipping_at_threshold() {
    let mut session = logged_in_with_cart(50, 2);
    let mut checkout = to_payment(&session);
    checkout.payment_mut().method = Some(PaymentMethod::Boleto);
    checkout.advance().unwrap();

    let confirmation = checkout.place_order(&mut session).unwrap();
    assert!(confirmation.summary.is_free_shipping());
    assert_eq!(confirmation.summary.total.amount, Decimal::new(100, 0));
    assert_eq!(confirmation.amount_due, confirmation.summary.total);
}

#[test]
fn test_credit_card_requires_all_fields() {
    let mut session = logged_in_with_cart(120, 1);
    let mut checkout = to_payment(&session);
    checkout.payment_mut().method = Some(PaymentMethod::CreditCard);

    let err = checkout.advance().unwrap_err();
    assert_eq!(
        err,
        CheckoutError::MissingCardFields(vec![
            "card_number",
            "card_name",
            "card_expiry",
            "card_cvv"
        ])
    );
    assert_eq!(
        StorefrontError::from(err).user_message(),
        "Por favor, preencha todos os dados do cartão"
    );
    assert_eq!(checkout.step(), CheckoutStep::Payment);

    let card = &mut checkout.payment_mut().card;
    card.number = Some("4111 1111 1111 1234".to_string().into());
    card.holder_name = "ANA SILVA".to_string();
    card.expiry = "12/27".to_string();
    card.cvv = Some("123".to_string().into());
    assert_eq!(checkout.advance().unwrap(), CheckoutStep::Review);

    let confirmation = checkout.place_order(&mut session).unwrap();
    assert_eq!(confirmation.card_last_four.as_deref(), Some("1234"));
}

#[test]
fn test_guest_blank_shipping_refuses_to_advance() {
    let mut session = session();
    session.add_to_cart(line("3", 32, 1));
    let mut checkout = Checkout::start(&session).unwrap();

    let err = checkout.advance().unwrap_err();
    let CheckoutError::MissingShippingFields(missing) = &err else {
        panic!("unexpected error: {err}");
    };
    assert_eq!(missing.len(), 9);
    assert_eq!(checkout.step(), CheckoutStep::Shipping);
    assert_eq!(
        StorefrontError::from(err).user_message(),
        "Por favor, preencha todos os campos de entrega"
    );
}

#[test]
fn test_missing_payment_method() {
    let session = logged_in_with_cart(10, 1);
    let mut checkout = to_payment(&session);
    assert_eq!(
        checkout.advance().unwrap_err(),
        CheckoutError::MissingPaymentMethod
    );
}

#[test]
fn test_place_order_only_from_review() {
    let mut session = logged_in_with_cart(10, 1);
    let mut checkout = to_payment(&session);
    assert_eq!(
        checkout.place_order(&mut session).unwrap_err(),
        CheckoutError::WrongStep(CheckoutStep::Payment)
    );
    assert_eq!(session.item_count(), 1);
}

#[test]
fn test_back_keeps_entered_data() {
    let session = logged_in_with_cart(10, 1);
    let mut checkout = to_payment(&session);
    checkout.payment_mut().method = Some(PaymentMethod::Pix);
    checkout.advance().unwrap();

    checkout.back();
    checkout.back();
    assert_eq!(checkout.step(), CheckoutStep::Shipping);
    assert_eq!(checkout.shipping().street, "Rua das Flores");
    assert_eq!(checkout.payment().method, Some(PaymentMethod::Pix));
}

#[test]
fn test_emptied_cart_cannot_be_placed() {
    let mut session = logged_in_with_cart(10, 1);
    let mut checkout = to_payment(&session);
    checkout.payment_mut().method = Some(PaymentMethod::Pix);
    checkout.advance().unwrap();

    session.clear_cart();
    assert_eq!(
        checkout.place_order(&mut session).unwrap_err(),
        CheckoutError::EmptyCart
    );
}
