use album_inventory_server::catalog_store::{CatalogStore, SqliteCatalogStore};
use album_inventory_server::seed::seed_catalog;
use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn parse_path(s: &str) -> Result<PathBuf> {
    let original_path = PathBuf::from(s);
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

/// Wipes the album catalog and inserts the starter albums.
#[derive(Parser, Debug)]
struct CliArgs {
    /// Existing directory holding catalog.db. The file is created if missing.
    #[clap(value_parser = parse_path)]
    pub db_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()?;

    if !cli_args.db_dir.is_dir() {
        bail!("Database directory does not exist: {:?}", cli_args.db_dir);
    }

    let db_path = cli_args.db_dir.join("catalog.db");
    info!("Seeding catalog at {:?}", db_path);
    let store: Arc<dyn CatalogStore> = Arc::new(SqliteCatalogStore::new(&db_path)?);
    let inserted = seed_catalog(store)?;
    info!("Done, {} albums inserted", inserted);
    Ok(())
}
