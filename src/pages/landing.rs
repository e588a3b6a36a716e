//! Landing page - Entry point to Reelrank.
//!
//! Splash screen with a single call to action once the library is ready.

use dioxus::prelude::*;

use crate::app::Route;
use crate::context::use_catalog_ready;

/// Landing page component.
///
/// The browse button stays disabled until the catalog has loaded.
#[component]
pub fn Landing() -> Element {
    let navigator = use_navigator();
    let catalog_ready = use_catalog_ready();

    let browse = move |_| {
        navigator.push(Route::Trending {});
    };

    rsx! {
        main { class: "landing",
            header { class: "landing-header",
                h1 { class: "page-title", "Reelrank" }
                p { class: "tagline",
                    "a ranked shelf of what everyone is watching"
                }

                button {
                    class: "btn-enter",
                    disabled: !catalog_ready(),
                    onclick: browse,
                    if catalog_ready() {
                        "Browse Trending"
                    } else {
                        "Loading library..."
                    }
                }
            }

            section { class: "vision-section",
                p { class: "body-text",
                    "Ten titles, ranked. Hover a poster for the quick read, "
                    "click it for the full story."
                }
            }
        }
    }
}
