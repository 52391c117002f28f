mod config;
mod file_store;
mod loader;
mod render;

use std::path::PathBuf;

use catalog::{Action, KeyValueStore, SortMode, Storefront};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, ConfigOverrides, StorefrontConfig};
use crate::file_store::FileStore;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("wishlist store unavailable: {0}")]
    Store(#[from] catalog::StoreError),
}

#[derive(Parser, Debug)]
#[command(name = "storefront", about = "Browse the product catalog and manage the wishlist")]
struct Cli {
    /// Catalog URL (overrides STOREFRONT_CATALOG_URL).
    #[arg(long, global = true, conflicts_with = "catalog_path")]
    catalog_url: Option<String>,

    /// Local catalog JSON file (overrides STOREFRONT_CATALOG_PATH).
    #[arg(long, global = true)]
    catalog_path: Option<PathBuf>,

    /// Wishlist store file (overrides STOREFRONT_STORE_PATH).
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Show one page of products.
    List(ListArgs),
    /// Like or unlike a product.
    Like { id: String },
    /// Show one page of liked products.
    Wishlist(PageArgs),
}

#[derive(Args, Debug, PartialEq, Eq)]
struct ListArgs {
    #[command(flatten)]
    page: PageArgs,

    /// Only show liked products.
    #[arg(long)]
    wishlist: bool,
}

#[derive(Args, Debug, PartialEq, Eq)]
struct PageArgs {
    /// Sort order: default, az or za.
    #[arg(long, default_value = "default")]
    sort: SortMode,

    /// 1-based page number.
    #[arg(long, default_value_t = 1)]
    page: usize,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            catalog_url: self.catalog_url.clone(),
            catalog_path: self.catalog_path.clone(),
            store_path: self.store.clone(),
        }
    }
}

impl Command {
    /// Storefront actions equivalent to this invocation, in gesture order.
    fn actions(&self) -> Vec<Action> {
        let view = |wishlist_only: bool, args: &PageArgs| {
            vec![Action::SetWishlistOnly(wishlist_only), Action::SetSort(args.sort), Action::SetPage(args.page)]
        };
        match self {
            Self::List(args) => view(args.wishlist, &args.page),
            Self::Wishlist(args) => view(true, args),
            Self::Like { id } => vec![Action::ToggleLike(id.clone())],
        }
    }
}

/// Apply `command` to a loaded storefront and render the outcome.
fn execute<S: KeyValueStore>(storefront: &mut Storefront<S>, command: &Command) -> String {
    for action in command.actions() {
        storefront.dispatch(action);
    }
    match command {
        Command::Like { id } => render::render_toggle(storefront, id),
        Command::List(_) | Command::Wishlist(_) => render::render_page(storefront),
    }
}

async fn run(command: &Command, config: StorefrontConfig) -> Result<String, CliError> {
    let store = FileStore::open(&config.store_path)?;
    tracing::debug!(store = %store.path().display(), "wishlist store opened");
    let mut storefront = Storefront::new(store);
    storefront.finish_load(loader::load_catalog(&config.source, config.timeouts).await);

    Ok(execute(&mut storefront, command))
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = StorefrontConfig::from_env_with(cli.overrides())?;
    let output = run(&cli.command, config).await?;
    print!("{output}");
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
