//! Numbered Media Card
//!
//! Ranked poster tile: oversized rank-number overlay, optional
//! "Recently Added" badge, hover overlay with title/rating/year, and a
//! click-to-open details modal owned by the tile.

use dioxus::prelude::*;

use crate::components::images::PosterImage;
use crate::components::MediaDetailsModal;
use reelrank_core::display::{eager_poster, format_rating, rank_label};
use reelrank_core::MediaItem;

/// Visibility of the details surface owned by a tile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DetailsState {
    /// Details surface hidden
    #[default]
    Closed,
    /// Details surface shown
    Open,
}

impl DetailsState {
    /// Transition taken on tile activation
    pub fn open(self) -> Self {
        DetailsState::Open
    }

    /// Transition taken when the details surface requests close
    pub fn close(self) -> Self {
        DetailsState::Closed
    }

    pub fn is_open(self) -> bool {
        self == DetailsState::Open
    }
}

/// Ranked poster tile for one catalog entry
///
/// # Examples
///
/// ```rust
/// rsx! {
///     NumberedMediaCard {
///         item: entry.clone(),
///         index: 0,
///     }
/// }
/// ```
#[component]
pub fn NumberedMediaCard(
    /// Catalog entry behind the tile
    item: MediaItem,
    /// Zero-based position in the ranked row
    index: usize,
) -> Element {
    let mut details: Signal<DetailsState> = use_signal(DetailsState::default);

    let handle_card_click = move |evt: MouseEvent| {
        evt.prevent_default();
        details.set(details().open());
    };

    let rank = rank_label(index);
    let rating = item.display_rating();
    let year = item.display_year();

    rsx! {
        div { class: "numbered-media-card",
            // Poster container
            div {
                class: "numbered-media-card__poster-wrap",
                onclick: handle_card_click,

                PosterImage {
                    path: item.poster_path.clone(),
                    alt: item.title.clone(),
                    priority: eager_poster(index),
                    class: Some("numbered-media-card__poster".to_string()),
                }

                // Rank overlay
                div { class: "numbered-media-card__rank", "{rank}" }

                // Recently Added badge
                if item.recently_added {
                    div { class: "numbered-media-card__badge-row",
                        span { class: "numbered-media-card__badge", "Recently Added" }
                    }
                }

                // Info overlay, revealed on hover
                div { class: "numbered-media-card__info",
                    span { class: "numbered-media-card__info-title", "{item.title}" }
                    div { class: "numbered-media-card__info-meta",
                        if let Some(rating) = rating {
                            div { class: "numbered-media-card__info-rating",
                                span { class: "numbered-media-card__star", "★" }
                                span { "{format_rating(rating)}" }
                            }
                        }
                        if let Some(year) = year {
                            span { "{year}" }
                        }
                    }
                }
            }
        }

        // Stays mounted while closed so open state lives on the tile
        MediaDetailsModal {
            media: item.clone(),
            open: details().is_open(),
            on_close: move |_| details.set(details().close()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_start_closed() {
        assert_eq!(DetailsState::default(), DetailsState::Closed);
        assert!(!DetailsState::default().is_open());
    }

    #[test]
    fn test_activation_opens_details() {
        assert_eq!(DetailsState::Closed.open(), DetailsState::Open);
        assert!(DetailsState::Closed.open().is_open());
    }

    #[test]
    fn test_close_returns_to_closed() {
        assert_eq!(DetailsState::Open.close(), DetailsState::Closed);
        assert!(!DetailsState::Open.close().is_open());
    }

    #[test]
    fn test_transitions_are_idempotent() {
        assert_eq!(DetailsState::Open.open(), DetailsState::Open);
        assert_eq!(DetailsState::Closed.close(), DetailsState::Closed);
    }
}
