mod app;
mod catalog;
mod config;
mod error;
mod paths;
mod ui;

use crate::app::Cinegrid;
use crate::catalog::{load_or_bundled, load_watchlist, Catalog};
use crate::config::load_cfg;
use crate::ui::focus::pure::{detail_table, home_table, watchlist_table, AdjacencyTable};
use crate::ui::theme;

use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cinegrid=info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|arg| arg == "--help") {
        println!("{}", USAGE_TEXT);
        std::process::exit(0);
    }

    if args.iter().any(|arg| arg == "--dump-tables") {
        dump_tables();
    }

    let mut catalog_arg: Option<PathBuf> = None;
    if let Some(index) = args.iter().position(|arg| arg == "--catalog") {
        if let Some(next_arg) = args.get(index + 1) {
            catalog_arg = Some(PathBuf::from(next_arg));
        } else {
            eprintln!("{}", USAGE_TEXT);
            std::process::exit(1);
        }
    }

    let mut cfg = load_cfg();
    if args.iter().any(|arg| arg == "--fullscreen") {
        cfg.fullscreen = true;
    }

    let catalog = match load_or_bundled(catalog_arg.as_deref()) {
        Ok(catalog) => catalog,
        Err(e) if catalog_arg.is_some() => {
            eprintln!("Failed to load catalog: {e}");
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to load catalog");
            catalog::operations::bundled_catalog().unwrap_or_else(|e| {
                tracing::error!(error = %e, "bundled catalog is invalid");
                Catalog::default()
            })
        }
    };
    let watchlist = load_watchlist();

    tracing::info!(
        items = catalog.items.len(),
        episodes = catalog.episodes.len(),
        saved = watchlist.len(),
        "catalog ready"
    );

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 720.0])
            .with_min_inner_size([640.0, 360.0])
            .with_fullscreen(cfg.fullscreen),
        ..Default::default()
    };

    let zoom = cfg.zoom;
    eframe::run_native(
        "Cinegrid",
        options,
        Box::new(move |cc| {
            // Posters are loaded by URL
            egui_extras::install_image_loaders(&cc.egui_ctx);
            cc.egui_ctx.set_zoom_factor(zoom);
            theme::apply_theme(&cc.egui_ctx);

            Ok(Box::new(Cinegrid::new(cfg, catalog, watchlist)))
        }),
    )
}

/// Print the per-page adjacency tables as JSON and exit
fn dump_tables() -> ! {
    let tables: BTreeMap<&str, AdjacencyTable> = BTreeMap::from([
        ("home", home_table()),
        ("detail", detail_table()),
        ("watchlist", watchlist_table()),
    ]);
    match serde_json::to_string_pretty(&tables) {
        Ok(json) => {
            println!("{json}");
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("Failed to serialize adjacency tables: {e}");
            std::process::exit(1);
        }
    }
}

static USAGE_TEXT: &str = r#"
Usage: cinegrid [OPTIONS]

Options:
    --catalog <path>      Load the catalog from a YAML file instead of the imported one
    --fullscreen          Start the GUI in fullscreen mode
    --dump-tables         Print the keyboard adjacency tables as JSON and exit
    --help                Show this message

Set RUST_LOG (e.g. RUST_LOG=cinegrid=debug) to change log verbosity.
"#;
