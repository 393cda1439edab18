//! Thedal GUI
//!
//! # What this program is
//! A desktop dashboard (built with `iced`) over a catalog of film songs.
//! Facet buttons, a search box and clickable charts narrow the catalog; every
//! panel shows aggregates of the narrowed list, and the list itself is a
//! playlist with transport controls.
//!
//! # How it hangs together
//! - `Thedal` = all app state. `Message` = something happened.
//! - `update(state, message)` turns clicks into `FilterCommand`s for the one
//!   `FilterState`, then refreshes the `Snapshot` and the playlist.
//! - `view(state)` draws the desktop or compact layout from that snapshot.
//!
//! # Startup
//! - CLI flags override the settings file, which overrides defaults.
//! - A broken settings file or catalog is logged and replaced by defaults /
//!   the built-in catalog; the window always opens.

mod gui;

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use thedal::config::{DashboardConfig, Layout};
use thedal::core::Catalog;

use gui::{Boot, Thedal};

#[derive(Parser, Debug)]
#[command(version, about = "Film song discovery dashboard")]
struct Cli {
    /// Settings file. Defaults to the platform config dir.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Catalog TOML file or a folder of tagged MP3s.
    #[arg(long)]
    catalog: Option<PathBuf>,

    #[arg(long, value_enum)]
    layout: Option<Layout>,

    /// Entries per ranked chart.
    #[arg(long)]
    top_k: Option<usize>,

    /// Start with shuffle on, using this seed.
    #[arg(long)]
    shuffle_seed: Option<u64>,
}

fn load_config(cli: &Cli) -> DashboardConfig {
    let path = cli.config.clone().or_else(DashboardConfig::default_path);

    let mut config = match path {
        Some(path) => DashboardConfig::load(&path).unwrap_or_else(|e| {
            error!(error = %e, "config unusable, using defaults");
            DashboardConfig::default()
        }),
        None => {
            warn!("no config directory on this platform, using defaults");
            DashboardConfig::default()
        }
    };

    if let Some(layout) = cli.layout {
        config.layout = layout;
    }
    if let Some(k) = cli.top_k {
        config.top_k = Some(k);
    }
    if let Some(seed) = cli.shuffle_seed {
        config.shuffle_seed = Some(seed);
    }
    if let Some(catalog) = &cli.catalog {
        config.catalog = Some(catalog.clone());
    }
    config
}

/// Catalog named in the config, else built-in. Returns the status line too.
fn load_catalog(config: &DashboardConfig) -> (Catalog, String) {
    if let Some(path) = &config.catalog {
        match Catalog::load(path) {
            Ok(catalog) => {
                let status = format!("Loaded {} songs from {}", catalog.len(), path.display());
                return (catalog, status);
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "catalog unusable, falling back to built-in");
            }
        }
    }

    match Catalog::builtin() {
        Ok(catalog) => {
            let status = format!("Built-in catalog: {} songs", catalog.len());
            (catalog, status)
        }
        Err(e) => {
            // Only reachable if the embedded data is broken; open empty.
            error!(error = %e, "built-in catalog invalid");
            (Catalog::empty(), format!("Built-in catalog error: {e}"))
        }
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting Thedal v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let config = load_config(&cli);
    let (catalog, status) = load_catalog(&config);

    info!(
        songs = catalog.len(),
        layout = ?config.layout,
        limits = ?config.limits(),
        "dashboard ready"
    );

    let boot = Boot {
        catalog,
        config,
        status,
    };

    // `iced::application` glues together:
    // - boot (initial state)
    // - update (how messages change state)
    // - view (how state becomes widgets)
    iced::application(move || Thedal::new(boot.clone()), gui::update, gui::view)
        .title(gui::view::TITLE)
        .subscription(gui::subscription)
        .run()
}
