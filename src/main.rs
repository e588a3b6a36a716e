#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global library file path, set from command line
static LIBRARY_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Get the library file path (set from command line or default)
pub fn get_library_path() -> PathBuf {
    LIBRARY_PATH
        .get()
        .cloned()
        .unwrap_or_else(default_library_path)
}

fn default_library_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("reelrank")
        .join("library.json")
}

/// Reelrank - Ranked trending shelf
#[derive(Parser, Debug)]
#[command(name = "reelrank-desktop")]
#[command(about = "Reelrank - Ranked trending titles on the desktop")]
struct Args {
    /// Library file with ranked titles (bundled feed is used when absent)
    #[arg(short, long)]
    library: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let library = args.library.unwrap_or_else(default_library_path);
    let _ = LIBRARY_PATH.set(library.clone());

    // Window size: wide enough for a full trending row
    let window_width = 1280.0;
    let window_height = 800.0;

    tracing::info!("Starting with library: {:?}", library);

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Reelrank")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
