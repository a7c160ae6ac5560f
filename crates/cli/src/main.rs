//! Boutique CLI - Browse the catalog and manage the cart from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # List the catalog with cart badges
//! boutique products
//!
//! # Show one product
//! boutique product 3
//!
//! # Manage the cart
//! boutique cart add 3
//! boutique cart remove 3
//! boutique cart show
//!
//! # Show the drawer menu, or where an entry leads
//! boutique menu
//! boutique menu --select 3
//! ```
//!
//! # Commands
//!
//! - `products` / `product` - Catalog listing and detail
//! - `cart` - Show, add to, and remove from the persisted cart
//! - `menu` - Drawer menu

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::convert::Infallible;
use std::path::PathBuf;
use std::sync::Arc;

use boutique_core::ProductId;
use boutique_storefront::config::{ConfigError, StorefrontConfig, parse_catalog_url};
use boutique_storefront::error::{AppError, Result};
use boutique_storefront::state::AppState;
use boutique_storefront::storage::{FileStore, KeyValueStore, MemoryStore};
use clap::{Args, Parser, Subcommand};
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod output;

use output::Output;

#[derive(Parser)]
#[command(name = "boutique")]
#[command(author, version, about = "Boutique storefront from the command line")]
struct Cli {
    #[command(flatten)]
    globals: Globals,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Globals {
    /// Directory holding the cart snapshot (overrides `BOUTIQUE_DATA_DIR`)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Catalog endpoint (overrides `BOUTIQUE_CATALOG_URL`)
    #[arg(long, global = true)]
    catalog_url: Option<String>,

    /// Keep the cart in memory only; nothing is written to disk
    #[arg(long, global = true)]
    ephemeral: bool,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the catalog
    Products,
    /// Show a single catalog product
    Product {
        /// Product id (numeric ids are matched as numbers)
        #[arg(value_parser = parse_product_id)]
        id: ProductId,
    },
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Show the drawer menu
    Menu {
        /// Resolve the route of a menu entry by id
        #[arg(short, long)]
        select: Option<String>,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart contents and total
    Show,
    /// Add a catalog product to the cart
    Add {
        /// Product id
        #[arg(value_parser = parse_product_id)]
        id: ProductId,
    },
    /// Remove every entry of a product from the cart
    Remove {
        /// Product id
        #[arg(value_parser = parse_product_id)]
        id: ProductId,
    },
}

/// Parse an id argument: numeric input is an integer id, anything else is text.
///
/// Without this, clap would build the id through `From<String>` and every id
/// would be textual.
fn parse_product_id(s: &str) -> std::result::Result<ProductId, Infallible> {
    s.parse()
}

impl Globals {
    /// Apply command-line overrides on top of the environment configuration.
    fn apply(&self, mut config: StorefrontConfig) -> Result<StorefrontConfig> {
        if let Some(dir) = &self.data_dir {
            config.data_dir.clone_from(dir);
        }
        if let Some(url) = &self.catalog_url {
            config.catalog_url = parse_catalog_url(url)
                .map_err(|e| ConfigError::InvalidEnvVar("--catalog-url".to_string(), e))?;
        }
        Ok(config)
    }
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &StorefrontConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

/// Initialize tracing with `EnvFilter` and Sentry integration.
///
/// Logs go to stderr so command output on stdout stays machine-readable.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "boutique_storefront=info,boutique_core=info,boutique=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Configuration is needed before tracing so Sentry can be initialized first
    let config = StorefrontConfig::from_env()
        .map_err(AppError::from)
        .and_then(|config| cli.globals.apply(config));

    let sentry_guard = config.as_ref().ok().and_then(init_sentry);
    init_tracing();

    let result = match config {
        Ok(config) => run(cli.command, &cli.globals, config).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        // Flush pending Sentry events before exiting
        drop(sentry_guard);
        std::process::exit(1);
    }
}

async fn run(command: Commands, globals: &Globals, config: StorefrontConfig) -> Result<()> {
    let storage: Arc<dyn KeyValueStore> = if globals.ephemeral {
        Arc::new(MemoryStore::new())
    } else {
        Arc::new(FileStore::new(&config.data_dir))
    };
    let state = AppState::new(config, storage)?;
    tracing::debug!(
        data_dir = %state.config().data_dir.display(),
        catalog_url = %state.config().catalog_url,
        ephemeral = globals.ephemeral,
        "Starting"
    );
    let output = Output::new(globals.json);

    match command {
        Commands::Products => commands::catalog::list(&state, output).await,
        Commands::Product { id } => commands::catalog::show(&state, &id, output).await,
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&state, output).await,
            CartAction::Add { id } => commands::cart::add(&state, &id, output).await,
            CartAction::Remove { id } => commands::cart::remove(&state, &id, output).await,
        },
        Commands::Menu { select } => {
            commands::menu::run(select.as_deref(), output);
            Ok(())
        }
    }
}
