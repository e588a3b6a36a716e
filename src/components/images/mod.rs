//! Image components
//!
//! Poster rendering with CDN sourcing and placeholder fallback.

mod poster_image;

pub use poster_image::PosterImage;
