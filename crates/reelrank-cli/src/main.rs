//! Reelrank CLI
//!
//! Thin wrapper around reelrank-core for command-line usage.
//!
//! ## Usage
//!
//! ```bash
//! # Show library information
//! reelrank info
//!
//! # Print the ranked trending row
//! reelrank trending
//!
//! # Print the top 5 only
//! reelrank trending --limit 5
//!
//! # Show the full record for one title
//! reelrank show 27205
//!
//! # Use a specific library file
//! reelrank --library ./feed.json trending
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use reelrank_core::display::{format_rating, rank_label};
use reelrank_core::{tmdb, Catalog, MediaKind};

/// Reelrank - Ranked trending titles
#[derive(Parser)]
#[command(name = "reelrank")]
#[command(version = "0.1.0")]
#[command(about = "Reelrank - Ranked trending titles")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Library file (default: data dir, bundled feed when absent)
    #[arg(long, global = true)]
    library: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show library information
    Info,

    /// Print the ranked trending row
    Trending {
        /// How many ranked entries to print
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },

    /// Show the full record for one title
    Show {
        /// Catalog id of the title
        id: u64,
    },
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Get the default library file (<data dir>/reelrank/library.json)
fn default_library_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("reelrank")
        .join("library.json")
}

/// Where the displayed catalog came from
enum LibrarySource {
    File(PathBuf),
    Bundled,
}

/// Load the catalog. An explicitly passed library must exist; the default
/// path silently falls back to the bundled feed.
fn load_catalog(library: Option<PathBuf>) -> Result<(Catalog, LibrarySource)> {
    match library {
        Some(path) => {
            let catalog = Catalog::load(&path)
                .with_context(|| format!("failed to load library {}", path.display()))?;
            Ok((catalog, LibrarySource::File(path)))
        }
        None => {
            let path = default_library_path();
            match Catalog::load(&path) {
                Ok(catalog) => Ok((catalog, LibrarySource::File(path))),
                Err(e) => {
                    tracing::debug!("No library at {:?} ({}), using bundled feed", path, e);
                    Ok((Catalog::bundled(), LibrarySource::Bundled))
                }
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let (catalog, source) = load_catalog(cli.library)?;

    match cli.command {
        Commands::Info => {
            println!("Reelrank v0.1.0");
            println!();
            match source {
                LibrarySource::File(path) => println!("Library: {}", path.display()),
                LibrarySource::Bundled => println!("Library: (bundled feed)"),
            }

            let movies = catalog
                .trending()
                .iter()
                .filter(|item| item.media_type == MediaKind::Movie)
                .count();
            let shows = catalog.len() - movies;
            let recent = catalog
                .trending()
                .iter()
                .filter(|item| item.recently_added)
                .count();

            println!("Titles: {}", catalog.len());
            println!("  Movies: {}", movies);
            println!("  TV: {}", shows);
            println!("Recently added: {}", recent);
        }

        Commands::Trending { limit } => {
            let row = catalog.top(limit);
            if row.is_empty() {
                println!("Nothing trending.");
                return Ok(());
            }

            println!("Trending (top {} of {}):", row.len(), catalog.len());
            for (i, item) in row.iter().enumerate() {
                let mut meta = vec![item.media_type.label().to_string()];
                if let Some(year) = item.display_year() {
                    meta.push(year.to_string());
                }
                if let Some(rating) = item.display_rating() {
                    meta.push(format!("★ {}", format_rating(rating)));
                }

                let mut line =
                    format!("{:>3}. {} ({})", rank_label(i), item.title, meta.join(", "));
                if item.recently_added {
                    line.push_str("  [recently added]");
                }
                println!("{}", line);
            }
        }

        Commands::Show { id } => {
            let item = catalog.require(id)?;

            println!("{}", item.title);
            println!("  ID: {}", item.id);
            println!("  Type: {}", item.media_type.label());
            if let Some(year) = item.display_year() {
                println!("  Year: {}", year);
            }
            if let Some(rating) = item.display_rating() {
                println!("  Rating: {}", format_rating(rating));
            }
            if item.recently_added {
                println!("  Recently added: yes");
            }
            if let Some(poster) = item.poster_path.as_deref() {
                println!("  Poster: {}", tmdb::poster_url(poster));
            }
            if let Some(backdrop) = item.backdrop_path.as_deref() {
                println!("  Backdrop: {}", tmdb::backdrop_url(backdrop));
            }
            if let Some(overview) = item.overview.as_deref() {
                println!();
                println!("{}", overview);
            }
        }
    }

    Ok(())
}
