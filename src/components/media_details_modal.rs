//! Media Details Modal
//!
//! Expanded view of a single catalog entry, opened from a ranked tile.

use dioxus::prelude::*;
use reelrank_core::display::format_rating;
use reelrank_core::{tmdb, MediaItem};

/// Backdrop image source, preferring the wide backdrop over the poster
fn backdrop_src(media: &MediaItem) -> Option<String> {
    if let Some(path) = media.backdrop_path.as_deref() {
        return Some(tmdb::backdrop_url(path));
    }
    media.poster_path.as_deref().map(tmdb::poster_url)
}

/// Media Details Modal component.
///
/// Modal dialog showing the full record behind a ranked tile. The parent
/// keeps it mounted while closed and toggles `open`, so tile-side state
/// is preserved across open/close cycles.
#[component]
pub fn MediaDetailsModal(
    /// Record to display
    media: MediaItem,
    /// Whether the modal is visible
    open: bool,
    /// Callback when modal should close
    on_close: EventHandler<()>,
) -> Element {
    if !open {
        return rsx! {};
    }

    let backdrop = backdrop_src(&media);

    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "modal-content media-details-modal",
                onclick: move |evt| evt.stop_propagation(),

                // Header
                header { class: "modal-header",
                    h2 { class: "media-details-modal__title", "{media.title}" }
                    button {
                        class: "modal-close-btn",
                        onclick: move |_| on_close.call(()),
                        "\u{00D7}"
                    }
                }

                // Body
                div { class: "modal-body",
                    if let Some(src) = &backdrop {
                        img {
                            class: "media-details-modal__backdrop",
                            src: "{src}",
                            alt: "{media.title}",
                        }
                    }

                    div { class: "media-details-modal__meta",
                        if let Some(rating) = media.display_rating() {
                            span { class: "media-details-modal__rating",
                                "★ {format_rating(rating)}"
                            }
                        }
                        if let Some(year) = media.display_year() {
                            span { class: "media-details-modal__year", "{year}" }
                        }
                        span { class: "media-details-modal__kind",
                            "{media.media_type.label()}"
                        }
                        if media.recently_added {
                            span { class: "media-details-modal__new", "Recently Added" }
                        }
                    }

                    if let Some(overview) = &media.overview {
                        if !overview.is_empty() {
                            p { class: "media-details-modal__overview", "{overview}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backdrop_preferred_over_poster() {
        let mut media = MediaItem::new(1, "Film");
        media.poster_path = Some("/poster.jpg".to_string());
        media.backdrop_path = Some("/wide.jpg".to_string());
        assert_eq!(
            backdrop_src(&media).as_deref(),
            Some("https://image.tmdb.org/t/p/w780/wide.jpg")
        );
    }

    #[test]
    fn test_poster_fallback_when_no_backdrop() {
        let mut media = MediaItem::new(1, "Film");
        media.poster_path = Some("/poster.jpg".to_string());
        assert_eq!(
            backdrop_src(&media).as_deref(),
            Some("https://image.tmdb.org/t/p/w500/poster.jpg")
        );
    }

    #[test]
    fn test_no_image_sources_yields_none() {
        let media = MediaItem::new(1, "Film");
        assert_eq!(backdrop_src(&media), None);
    }
}
