//! Page components for Reelrank.

mod landing;
mod trending;

pub use landing::Landing;
pub use trending::Trending;
