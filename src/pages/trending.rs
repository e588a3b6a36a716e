//! Trending page - The ranked row.
//!
//! Reads the top of the catalog once it is loaded and lays the entries out
//! as numbered poster tiles.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::cards::NumberedMediaCard;
use crate::context::{use_catalog, use_catalog_ready};
use reelrank_core::MediaItem;

/// How many tiles the ranked row shows
const TRENDING_ROW_LEN: usize = 10;

/// Trending page component.
#[component]
pub fn Trending() -> Element {
    let navigator = use_navigator();
    let catalog = use_catalog();
    let catalog_ready = use_catalog_ready();
    let mut row: Signal<Vec<MediaItem>> = use_signal(Vec::new);
    let mut loaded = use_signal(|| false);

    // Copy the ranked head of the catalog once it is available
    use_effect(move || {
        if catalog_ready() {
            spawn(async move {
                let shared = catalog();
                let guard = shared.read().await;
                if let Some(ref cat) = *guard {
                    row.set(cat.top(TRENDING_ROW_LEN).to_vec());
                    loaded.set(true);
                }
            });
        }
    });

    let go_home = move |_| {
        navigator.push(Route::Landing {});
    };

    rsx! {
        main { class: "trending",
            header { class: "trending-header",
                div {
                    h1 { class: "page-title", "Trending Now" }
                    p { class: "tagline", "ranked by everyone watching" }
                }
                button {
                    class: "btn-back",
                    onclick: go_home,
                    "Home"
                }
            }

            if !loaded() {
                div { class: "trending-loading",
                    div { class: "loading-spinner" }
                    "Loading library..."
                }
            } else if row.read().is_empty() {
                div { class: "trending-empty",
                    "Nothing trending yet. Point --library at a feed file."
                }
            } else {
                div { class: "trending-row",
                    for (i, item) in row().into_iter().enumerate() {
                        NumberedMediaCard {
                            key: "{item.id}",
                            item: item.clone(),
                            index: i,
                        }
                    }
                }
            }
        }
    }
}
