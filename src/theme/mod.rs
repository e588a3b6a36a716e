//! Theme for Reelrank.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
