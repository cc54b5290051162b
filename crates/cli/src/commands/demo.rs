//! Scripted purchase with the test account.

use secrecy::SecretString;
use tracing::info;

use encantado_core::PaymentMethod;
use encantado_storefront::AppState;
use encantado_storefront::checkout::PaymentDetails;
use encantado_storefront::state::AddToCart;

use super::purchase::{self, PurchaseOptions};
use super::{CommandError, Output};

/// Log in, fill the cart, pay by Pix and print the confirmation.
///
/// # Errors
///
/// Returns an error if any step is rejected or JSON output fails.
#[allow(clippy::print_stdout)]
pub fn run(state: &mut AppState, output: Output) -> Result<(), CommandError> {
    let email = state.session().demo_email().to_string();
    let session = state.session_mut();
    let name = match session.login(&email, &SecretString::from("demo".to_string())) {
        Ok(user) => user.first_name().to_string(),
        Err(_) => return Err(CommandError::LoginFailed(email)),
    };
    info!(%email, "Demo session started");

    let picks = [
        AddToCart {
            color: Some("Branco".to_string()),
            size: Some("Médio (12cm)".to_string()),
            note: Some("Ana & Pedro".to_string()),
            ..AddToCart::new("1")
        },
        AddToCart {
            quantity: 3,
            color: Some("Azul".to_string()),
            size: Some("Pequeno (8cm)".to_string()),
            ..AddToCart::new("5")
        },
    ];
    for pick in picks {
        state
            .add_product(pick)
            .map_err(encantado_storefront::StorefrontError::from)?;
    }

    let payment = PaymentDetails {
        method: Some(PaymentMethod::Pix),
        ..PaymentDetails::default()
    };
    let confirmation = purchase::checkout(
        state,
        payment,
        PurchaseOptions {
            phone: None,
            notes: Some("Embalar para presente".to_string()),
        },
    )?;

    output.emit(&confirmation, || {
        println!("Bem-vinda de volta, {name}! 🎨");
        println!();
        purchase::print_confirmation(&confirmation);
    })
}
