//! Line-oriented session shell.
//!
//! Each stdin line is one command parsed with the same clap machinery as the
//! top-level CLI. Storefront errors are printed and the session continues;
//! I/O errors end it.

use std::io::{BufRead, Write};

use clap::{Parser, Subcommand};
use secrecy::SecretString;
use thiserror::Error;

use encantado_core::{PaymentMethod, ProductId};
use encantado_storefront::checkout::{CardDetails, PaymentDetails};
use encantado_storefront::models::NotificationPreferences;
use encantado_storefront::services::auth::RegistrationForm;
use encantado_storefront::state::AddToCart;
use encantado_storefront::{AppState, StorefrontError};

use super::catalog::{self, CatalogArgs};
use super::purchase::{self, PurchaseOptions};
use super::{CommandError, Output, money, orders};

/// Errors splitting a command line into words.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    #[error("unterminated quote")]
    UnterminatedQuote,
}

#[derive(Parser)]
#[command(name = "encantado", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand)]
enum ShellCommand {
    /// Log in (only the test account succeeds)
    Login {
        email: String,
        #[arg(long, default_value = "")]
        password: String,
    },
    /// Log out and empty the cart
    Logout,
    /// Create an account and log in
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm: String,
    },
    /// Show the logged-in user
    Whoami,
    /// List products with filters and sorting
    Catalog(CatalogArgs),
    /// Search products by name or category
    Search {
        #[arg(required = true)]
        query: Vec<String>,
    },
    /// List products on sale
    Promotions {
        #[arg(long)]
        limited: bool,
    },
    /// Show a product's options
    Show { id: String },
    /// Add a product to the cart (one unit, no options, when none are given)
    Add {
        id: String,
        #[arg(long)]
        color: Option<String>,
        #[arg(long)]
        size: Option<String>,
        #[arg(short, long)]
        qty: Option<u32>,
        /// Personalization text
        #[arg(long)]
        note: Option<String>,
    },
    /// Remove a product from the cart
    Remove { id: String },
    /// Set a cart line's quantity (0 removes it)
    Qty { id: String, quantity: u32 },
    /// Show the cart and totals
    Cart,
    /// Empty the cart
    Clear,
    /// Show order history
    Orders,
    /// Show or change notification settings
    Prefs {
        /// Turn a setting on (`email`, `sms`, `promotional`, `order-updates`, `newsletter`)
        #[arg(long)]
        on: Vec<String>,
        /// Turn a setting off
        #[arg(long)]
        off: Vec<String>,
    },
    /// Check out using the account's saved address
    Checkout {
        #[arg(long)]
        method: PaymentMethod,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        card_number: Option<String>,
        #[arg(long, default_value = "")]
        card_name: String,
        #[arg(long, default_value = "")]
        card_expiry: String,
        #[arg(long)]
        card_cvv: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

/// Read commands from stdin until EOF or `quit`.
///
/// # Errors
///
/// Returns an error if reading stdin or writing stdout fails.
#[allow(clippy::print_stdout)]
pub fn run(state: &mut AppState) -> Result<(), CommandError> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    println!("Ateliê Biscuit Encantado - digite `help` para ver os comandos");

    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        stdout.flush()?;
        let Some(line) = lines.next().transpose()? else {
            break;
        };

        let words = match split_words(&line) {
            Ok(words) if words.is_empty() => continue,
            Ok(words) => words,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        let command = match ShellLine::try_parse_from(words) {
            Ok(parsed) => parsed.command,
            Err(e) => {
                e.print()?;
                continue;
            }
        };

        match execute(state, command) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(CommandError::Storefront(e)) => {
                println!("✗ {}: {}", e.title(), e.user_message());
            }
            Err(e @ CommandError::LoginFailed(_)) => println!("✗ Erro no login: {e}"),
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

enum Flow {
    Continue,
    Quit,
}

#[allow(clippy::print_stdout, clippy::too_many_lines)]
fn execute(state: &mut AppState, command: ShellCommand) -> Result<Flow, CommandError> {
    let text = Output::new(false);
    let currency = state.config().currency;

    match command {
        ShellCommand::Login { email, password } => {
            let session = state.session_mut();
            match session.login(&email, &SecretString::from(password)) {
                Ok(user) => println!("Bem-vinda de volta, {}! 🎨", user.first_name()),
                Err(_) => return Err(CommandError::LoginFailed(session.demo_email().to_string())),
            }
        }
        ShellCommand::Logout => {
            state.session_mut().logout();
            println!("Até logo!");
        }
        ShellCommand::Register {
            name,
            email,
            phone,
            password,
            confirm,
        } => {
            let form = RegistrationForm {
                name,
                email,
                phone,
                password: SecretString::from(password),
                confirm_password: SecretString::from(confirm),
            };
            let new_user = form.validate().map_err(StorefrontError::from)?;
            let user = state.session_mut().register(new_user);
            println!("Cadastro realizado com sucesso! Bem-vinda, {}", user.first_name());
        }
        ShellCommand::Whoami => match state.session().user() {
            Some(user) => {
                println!("{} <{}>", user.name, user.email);
                if let Some(address) = user.primary_address() {
                    println!("  {}", address.one_line());
                }
            }
            None => println!("Visitante (não logado)"),
        },
        ShellCommand::Catalog(args) => catalog::list(state, &args, text)?,
        ShellCommand::Search { query } => catalog::search(state, &query.join(" "), text)?,
        ShellCommand::Promotions { limited } => catalog::promotions(state, limited, text)?,
        ShellCommand::Show { id } => {
            let product = state
                .catalog()
                .product(&ProductId::new(id.clone()))
                .ok_or_else(|| StorefrontError::NotFound(format!("Produto {id}")))?;
            catalog::print_product_detail(product, currency);
        }
        ShellCommand::Add {
            id,
            color,
            size,
            qty,
            note,
        } => {
            let product_id = ProductId::new(id);
            let added = if color.is_none() && size.is_none() && qty.is_none() && note.is_none() {
                state.quick_add(&product_id)
            } else {
                state.add_product(AddToCart {
                    product_id,
                    quantity: qty.unwrap_or(1),
                    color,
                    size,
                    note,
                })
            };
            added.map_err(StorefrontError::from)?;
            println!("Produto adicionado! ({} no carrinho)", state.session().item_count());
        }
        ShellCommand::Remove { id } => state.session_mut().remove_from_cart(&ProductId::new(id)),
        ShellCommand::Qty { id, quantity } => {
            state
                .session_mut()
                .update_quantity(&ProductId::new(id), quantity);
        }
        ShellCommand::Cart => print_cart(state),
        ShellCommand::Clear => state.session_mut().clear_cart(),
        ShellCommand::Orders => {
            let orders = state
                .session()
                .order_history()
                .map_err(StorefrontError::from)?;
            orders::print_orders(orders, currency);
        }
        ShellCommand::Prefs { on, off } => {
            let mut preferences = *state.session().preferences();
            if !on.is_empty() || !off.is_empty() {
                for (names, value) in [(on, true), (off, false)] {
                    for name in names {
                        set_preference(&mut preferences, &name, value)?;
                    }
                }
                state
                    .session_mut()
                    .update_preferences(preferences)
                    .map_err(StorefrontError::from)?;
                println!("Configurações salvas!");
            }
            print_preferences(&preferences);
        }
        ShellCommand::Checkout {
            method,
            phone,
            card_number,
            card_name,
            card_expiry,
            card_cvv,
            notes,
        } => {
            let payment = PaymentDetails {
                method: Some(method),
                card: CardDetails {
                    number: card_number.map(SecretString::from),
                    holder_name: card_name,
                    expiry: card_expiry,
                    cvv: card_cvv.map(SecretString::from),
                },
            };
            let confirmation =
                purchase::checkout(state, payment, PurchaseOptions { phone, notes })?;
            purchase::print_confirmation(&confirmation);
        }
        ShellCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

#[allow(clippy::print_stdout)]
fn print_cart(state: &AppState) {
    let session = state.session();
    if session.cart().is_empty() {
        println!("Seu carrinho está vazio");
        return;
    }

    let currency = session.currency();
    for item in session.cart().items() {
        println!(
            "{:>3}  {}× {}  {}",
            item.product_id.as_str(),
            item.quantity,
            item.name,
            money(item.line_total(), currency)
        );
        if let Some(customization) = &item.customization {
            println!("       {customization}");
        }
    }

    let summary = session.summary();
    println!();
    println!("  Subtotal: {}", summary.subtotal);
    if summary.is_free_shipping() {
        println!("  Frete:    Grátis");
    } else {
        println!("  Frete:    {}", summary.shipping);
    }
    if let Some(remaining) = summary.remaining_for_free_shipping {
        println!("  Faltam {remaining} para frete grátis");
    }
    println!("  Total:    {}", summary.total);
}

fn set_preference(
    preferences: &mut NotificationPreferences,
    name: &str,
    value: bool,
) -> Result<(), StorefrontError> {
    let field = match name {
        "email" => &mut preferences.email_notifications,
        "sms" => &mut preferences.sms_notifications,
        "promotional" => &mut preferences.promotional_emails,
        "order-updates" => &mut preferences.order_updates,
        "newsletter" => &mut preferences.newsletter_subscription,
        _ => return Err(StorefrontError::NotFound(format!("Configuração {name}"))),
    };
    *field = value;
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_preferences(preferences: &NotificationPreferences) {
    let mark = |on: bool| if on { "✓" } else { "✗" };
    println!("  {} email", mark(preferences.email_notifications));
    println!("  {} sms", mark(preferences.sms_notifications));
    println!("  {} promotional", mark(preferences.promotional_emails));
    println!("  {} order-updates", mark(preferences.order_updates));
    println!("  {} newsletter", mark(preferences.newsletter_subscription));
}

/// Split a line into words on whitespace, keeping double-quoted runs together.
fn split_words(line: &str) -> Result<Vec<String>, SplitError> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quoted = false;

    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                in_word = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quoted {
        return Err(SplitError::UnterminatedQuote);
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
