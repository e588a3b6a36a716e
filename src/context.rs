//! Catalog context provider for Reelrank.
//!
//! Provides the loaded Catalog to all components via use_context.

use std::path::PathBuf;
use std::sync::Arc;

use dioxus::prelude::*;
use reelrank_core::Catalog;
use tokio::sync::RwLock;

/// Shared catalog type for context.
///
/// The catalog is wrapped in Arc<RwLock<>> to allow:
/// - Multiple components to read concurrently
/// - Replacing the loaded library without remounting the tree
pub type SharedCatalog = Arc<RwLock<Option<Catalog>>>;

/// Get the library file path for the application.
/// Uses the global path set from command line args.
pub fn get_library_path() -> PathBuf {
    crate::get_library_path()
}

/// Hook to access the Catalog from context.
///
/// Returns a Signal containing the shared catalog state.
///
/// # Example
///
/// ```ignore
/// let catalog = use_catalog();
///
/// // Read catalog state
/// if let Some(ref cat) = *catalog.read().await {
///     let row = cat.top(10).to_vec();
/// }
/// ```
pub fn use_catalog() -> Signal<SharedCatalog> {
    use_context::<Signal<SharedCatalog>>()
}

/// Hook to check if the catalog has finished loading.
///
/// Returns a reactive signal that updates when catalog state changes.
pub fn use_catalog_ready() -> Signal<bool> {
    use_context::<Signal<bool>>()
}
