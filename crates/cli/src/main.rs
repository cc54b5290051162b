//! Encantado CLI - browse and shop the Ateliê Biscuit Encantado catalog.
//!
//! # Usage
//!
//! ```bash
//! # List a category, cheapest first
//! encantado catalog --category decoracao --sort price-low
//!
//! # Filter by color and price range, as JSON
//! encantado --json catalog --color rosa --max-price 50
//!
//! # Search names and categories
//! encantado search natal
//!
//! # Show order history for the test account
//! encantado orders --email ana.silva@email.com
//!
//! # Run a scripted login, add-to-cart and checkout
//! encantado demo
//!
//! # Drive one session interactively
//! encantado shell
//! ```
//!
//! # Commands
//!
//! - `catalog` - Filtered, sorted product listing
//! - `search` - Name and category search
//! - `promotions` - Products on sale
//! - `orders` - Order history after logging in
//! - `demo` - Scripted end-to-end purchase
//! - `shell` - Line-oriented session commands on stdin

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use encantado_storefront::AppState;
use encantado_storefront::config::StorefrontConfig;

mod commands;

use commands::catalog::CatalogArgs;
use commands::Output;

#[derive(Parser)]
#[command(name = "encantado")]
#[command(author, version, about = "Ateliê Biscuit Encantado storefront CLI")]
struct Cli {
    /// Print listings as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products with filters and sorting
    Catalog(CatalogArgs),
    /// Search products by name or category
    Search {
        /// Search text (case-insensitive substring)
        #[arg(required = true)]
        query: Vec<String>,
    },
    /// List products on sale
    Promotions {
        /// Only limited-time offers
        #[arg(long)]
        limited: bool,
    },
    /// Log in and show order history
    Orders {
        /// Account email
        #[arg(short, long)]
        email: String,
    },
    /// Run a scripted purchase with the test account
    Demo,
    /// Read session commands from stdin
    Shell,
}

fn main() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "encantado_storefront=info,encantado_cli=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let mut state = AppState::new(config);
    let output = Output::new(cli.json);

    match cli.command {
        Commands::Catalog(args) => commands::catalog::list(&state, &args, output)?,
        Commands::Search { query } => commands::catalog::search(&state, &query.join(" "), output)?,
        Commands::Promotions { limited } => {
            commands::catalog::promotions(&state, limited, output)?;
        }
        Commands::Orders { email } => commands::orders::show(&mut state, &email, output)?,
        Commands::Demo => commands::demo::run(&mut state, output)?,
        Commands::Shell => commands::shell::run(&mut state)?,
    }
    Ok(())
}
