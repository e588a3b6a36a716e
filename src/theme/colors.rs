//! Color constants for the Reelrank palette
//!
//! Dark cinema-shelf aesthetic. Values are mirrored as CSS custom
//! properties in `styles.rs`; a test there keeps the two in sync.

#![allow(dead_code)]

// === SHELF (Backgrounds) ===
pub const SHELF_BLACK: &str = "#0b0d12";
pub const SHELF_DEEP: &str = "#10131b";
pub const SHELF_BORDER: &str = "#1e2330";

// === MARQUEE (Badges, Alerts) ===
pub const BADGE_RED: &str = "#dc2626";

// === STAR (Ratings) ===
pub const STAR_GOLD: &str = "#facc15";

// === ACCENT (Buttons, Focus) ===
pub const ACCENT: &str = "#4f8cff";
pub const ACCENT_GLOW: &str = "rgba(79, 140, 255, 0.3)";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#f5f6f8";
pub const TEXT_SECONDARY: &str = "rgba(245, 246, 248, 0.72)";
pub const TEXT_MUTED: &str = "rgba(245, 246, 248, 0.5)";
