use std::sync::Arc;

use dioxus::prelude::*;
use tokio::sync::RwLock;

use crate::context::{get_library_path, SharedCatalog};
use crate::pages::{Landing, Trending};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Landing page with "Browse Trending" button
/// - `/trending` - Ranked trending row
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/trending")]
    Trending {},
}

/// Root application component.
///
/// Provides global styles, catalog context, and routing.
#[component]
pub fn App() -> Element {
    // Initialize shared catalog state
    let catalog: Signal<SharedCatalog> = use_signal(|| Arc::new(RwLock::new(None)));
    let mut catalog_ready: Signal<bool> = use_signal(|| false);

    // Provide catalog context to all child components
    use_context_provider(|| catalog);
    use_context_provider(|| catalog_ready);

    // Load the library on mount
    use_effect(move || {
        spawn(async move {
            let library = get_library_path();
            let loaded = match reelrank_core::Catalog::load(&library) {
                Ok(catalog) => catalog,
                Err(e) => {
                    tracing::warn!("No library at {:?} ({}), using bundled feed", library, e);
                    reelrank_core::Catalog::bundled()
                }
            };
            let titles = loaded.len();

            let shared = catalog();
            let mut guard = shared.write().await;
            *guard = Some(loaded);
            drop(guard);
            catalog_ready.set(true);
            tracing::info!("Catalog ready with {} titles", titles);
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
