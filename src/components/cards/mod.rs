//! Ranked Tile Card System
//!
//! Poster-shaped tiles for the trending row.

mod numbered_media_card;

pub use numbered_media_card::{DetailsState, NumberedMediaCard};
