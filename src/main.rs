mod app;
mod dataset;
mod taxonomy;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Node positions and edges (`{ nodes, edges }` JSON).
    #[arg(long, default_value = "data/nodes_edges.json")]
    nodes_edges: PathBuf,

    /// Product metadata with names, codes and sectors.
    #[arg(long, default_value = "data/metadata.json")]
    metadata: PathBuf,

    #[arg(long, default_value_t = 1280.0)]
    width: f32,

    #[arg(long, default_value_t = 800.0)]
    height: f32,

    /// Used when `RUST_LOG` is not set.
    #[arg(long, default_value = "info")]
    log_filter: String,
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_filter)))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([args.width, args.height]),
        ..Default::default()
    };

    let paths = app::DataPaths {
        nodes_edges: args.nodes_edges,
        metadata: args.metadata,
    };

    eframe::run_native(
        "Product Space",
        options,
        Box::new(move |cc| Ok(Box::new(app::ProductSpaceApp::new(cc, paths)))),
    )
}
