//! UI Components for Reelrank.
//!
//! Dark cinema-shelf aesthetic components.

pub mod cards;
pub mod images;
mod media_details_modal;

pub use media_details_modal::MediaDetailsModal;
