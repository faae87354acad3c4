mod core;
mod images;
#[cfg(test)]
mod test_support;
mod tui;

use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use log::{info, warn};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use crate::core::catalog::Catalog;
use crate::core::config::{self, CliOverrides, ResolvedConfig};
use crate::core::route::Route;
use crate::core::state::App;
use crate::images::{HttpImageFetcher, ImageFetcher};

#[derive(Parser)]
#[command(name = "wander", about = "Browse a catalog of places from the terminal")]
struct Args {
    /// Screen to open on: list, favorites, settings or detail/<id>
    #[arg(short, long)]
    route: Option<Route>,

    /// Don't download item images
    #[arg(long)]
    no_images: bool,

    /// Catalog TOML file to use instead of the built-in items
    #[arg(short, long)]
    catalog: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to wander.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("wander.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    info!("Wander {} starting up", env!("CARGO_PKG_VERSION"));

    let file_config = config::load_config().unwrap_or_else(|e| {
        warn!("{}, using defaults", e);
        config::WanderConfig::default()
    });
    let cli = CliOverrides {
        route: args.route,
        catalog: args.catalog,
        no_images: args.no_images,
    };
    let resolved = config::resolve(&file_config, &cli);
    info!(
        "Start route: {}, images: {}",
        resolved.start_route, resolved.images_enabled
    );

    let catalog = Arc::new(load_catalog(&resolved));
    let fetcher = build_fetcher(&resolved);
    let app = App::from_config(catalog, &resolved);

    tui::run(app, fetcher)
}

/// The configured catalog file, or the seed items if none is set or it fails to load.
fn load_catalog(config: &ResolvedConfig) -> Catalog {
    let Some(path) = &config.catalog_path else {
        return Catalog::seed();
    };
    match Catalog::load(path) {
        Ok(catalog) => {
            info!("Loaded {} items from {}", catalog.len(), path.display());
            catalog
        }
        Err(e) => {
            warn!("Failed to load catalog {}: {}, using built-in items", path.display(), e);
            Catalog::seed()
        }
    }
}

fn build_fetcher(config: &ResolvedConfig) -> Option<Arc<dyn ImageFetcher>> {
    if !config.images_enabled {
        info!("Images disabled");
        return None;
    }
    match HttpImageFetcher::new(
        Duration::from_secs(config.image_timeout_secs),
        config.thumbnail_width,
    ) {
        Ok(fetcher) => Some(Arc::new(fetcher)),
        Err(e) => {
            warn!("Image fetcher unavailable: {}", e);
            None
        }
    }
}
