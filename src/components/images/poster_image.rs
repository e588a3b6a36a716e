//! Poster Image
//!
//! Renders a title's poster from the TMDB image CDN, falling back to an
//! embedded placeholder when the feed has no poster path.

use dioxus::prelude::*;
use reelrank_core::tmdb;

// Embed placeholder poster as base64 data URI
const PLACEHOLDER_SVG: &str = include_str!("../../../assets/poster-placeholder.svg");

fn placeholder_poster_uri() -> String {
    use base64::Engine;
    let base64 = base64::engine::general_purpose::STANDARD.encode(PLACEHOLDER_SVG);
    format!("data:image/svg+xml;base64,{}", base64)
}

/// Image source for an optional CDN path fragment
fn poster_src(path: Option<&str>) -> String {
    match path {
        Some(path) => tmdb::poster_url(path),
        None => placeholder_poster_uri(),
    }
}

/// Poster image with CDN source and lazy loading
///
/// # Examples
///
/// ```rust
/// rsx! {
///     PosterImage {
///         path: Some("/abc.jpg".to_string()),
///         alt: "Inception".to_string(),
///         priority: true,
///     }
/// }
/// ```
#[component]
pub fn PosterImage(
    /// CDN path fragment from the feed, e.g. "/abc.jpg"
    #[props(default = None)]
    path: Option<String>,
    /// Alt text for accessibility
    alt: String,
    /// Load eagerly instead of lazily (above-the-fold tiles)
    #[props(default = false)]
    priority: bool,
    /// Optional CSS class
    #[props(default = None)]
    class: Option<String>,
) -> Element {
    let src = poster_src(path.as_deref());
    let css_class = class.unwrap_or_else(|| "poster-image".to_string());
    let loading = if priority { "eager" } else { "lazy" };

    rsx! {
        img {
            class: "{css_class}",
            src: "{src}",
            alt: "{alt}",
            loading: "{loading}",
        }
    }
}
