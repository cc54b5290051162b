//! Checkout driven from saved account data.

use encantado_storefront::checkout::{
    Checkout, OrderConfirmation, PIX_DISCOUNT_PERCENT, PaymentDetails,
};
use encantado_storefront::{AppState, StorefrontError};

/// Contact and notes not held on the account.
#[derive(Debug, Default)]
pub struct PurchaseOptions {
    pub phone: Option<String>,
    pub notes: Option<String>,
}

/// Run all checkout steps for the current cart.
///
/// Shipping takes name and email from the logged-in user, the phone from
/// `options` or the account, and the address from the account's first saved
/// address. Guests get whatever the options supply, which fails the shipping
/// step.
///
/// # Errors
///
/// Returns the first step that fails validation.
pub fn checkout(
    state: &mut AppState,
    payment: PaymentDetails,
    options: PurchaseOptions,
) -> Result<OrderConfirmation, StorefrontError> {
    let session = state.session();
    let mut checkout = Checkout::start(session)?;

    let shipping = checkout.shipping_mut();
    if let Some(user) = session.user() {
        if let Some(address) = user.primary_address() {
            shipping.fill_address(address);
        }
        if let Some(phone) = &user.phone {
            shipping.phone.clone_from(phone);
        }
    }
    if let Some(phone) = options.phone {
        shipping.phone = phone;
    }
    checkout.advance()?;

    *checkout.payment_mut() = payment;
    checkout.advance()?;

    if let Some(notes) = options.notes {
        checkout.set_notes(notes);
    }
    Ok(checkout.place_order(state.session_mut())?)
}

#[allow(clippy::print_stdout)]
pub fn print_confirmation(confirmation: &OrderConfirmation) {
    let summary = &confirmation.summary;
    println!("Pedido confirmado! 🎉");
    println!("Você receberá um email com os detalhes do pedido em breve");
    println!();
    println!("  Itens:     {}", summary.item_count);
    println!("  Subtotal:  {}", summary.subtotal);
    if summary.is_free_shipping() {
        println!("  Frete:     Grátis");
    } else {
        println!("  Frete:     {}", summary.shipping);
    }
    if !confirmation.discount.is_zero() {
        println!("  Desconto PIX ({PIX_DISCOUNT_PERCENT}%): - {}", confirmation.discount);
    }
    println!("  Total:     {}", confirmation.amount_due);
    match &confirmation.card_last_four {
        Some(last_four) => println!(
            "  Pagamento: {} final {last_four}",
            confirmation.payment_method
        ),
        None => println!("  Pagamento: {}", confirmation.payment_method),
    }
    let ship_to = &confirmation.ship_to;
    println!(
        "  Entrega:   {}, {} {} - {}/{}",
        ship_to.name, ship_to.street, ship_to.number, ship_to.city, ship_to.state
    );
    if let Some(notes) = &confirmation.notes {
        println!("  Observações: {notes}");
    }
}
