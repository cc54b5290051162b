//! Order history.

use secrecy::SecretString;

use encantado_core::CurrencyCode;
use encantado_storefront::AppState;
use encantado_storefront::models::Order;

use super::{CommandError, Output, money};

/// Log in as `email` and print the account's orders.
///
/// # Errors
///
/// Returns `CommandError::LoginFailed` for any email but the test account's.
pub fn show(state: &mut AppState, email: &str, output: Output) -> Result<(), CommandError> {
    let session = state.session_mut();
    if session.login(email, &SecretString::from(String::new())).is_err() {
        return Err(CommandError::LoginFailed(session.demo_email().to_string()));
    }

    let currency = session.currency();
    let orders = session
        .order_history()
        .map_err(encantado_storefront::StorefrontError::from)?;
    output.emit(orders, || print_orders(orders, currency))
}

#[allow(clippy::print_stdout)]
pub fn print_orders(orders: &[Order], currency: CurrencyCode) {
    if orders.is_empty() {
        println!("Nenhum pedido ainda");
        return;
    }

    for order in orders {
        println!(
            "{}  {}  {:<10}  {:>10}  ({} itens)",
            order.id,
            order.date.format("%d/%m/%Y"),
            order.status.label(),
            money(order.total, currency),
            order.item_count()
        );
        for item in &order.items {
            println!(
                "    {}× {}  {}",
                item.quantity,
                item.name,
                money(item.line_total(), currency)
            );
        }
    }
}
