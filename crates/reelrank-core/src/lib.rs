//! Reelrank Core Library
//!
//! Catalog types and display derivations for a ranked media-browsing UI.
//!
//! ## Overview
//!
//! Reelrank shows a trending row of ranked poster tiles. This crate holds
//! everything below the UI: the [`MediaItem`] record a feed supplies, the
//! [`Catalog`] that ranks those records, pure per-render display derivations
//! (year, one-decimal rating, rank label, eager-load hint), and CDN image
//! URL construction. The UI layer reads these; nothing here renders.
//!
//! ## Quick Start
//!
//! ```
//! use reelrank_core::{display, tmdb, Catalog};
//!
//! let catalog = Catalog::bundled();
//! for (index, item) in catalog.top(3).iter().enumerate() {
//!     let rank = display::rank_label(index);
//!     let year = item.display_year();
//!     println!("{}. {} ({:?})", rank, item.title, year);
//!     if let Some(path) = &item.poster_path {
//!         println!("   {}", tmdb::poster_url(path));
//!     }
//! }
//! ```

pub mod catalog;
pub mod display;
pub mod error;
pub mod tmdb;
pub mod types;

// Re-exports
pub use catalog::Catalog;
pub use error::{CatalogError, CatalogResult};
pub use types::{MediaItem, MediaKind};
