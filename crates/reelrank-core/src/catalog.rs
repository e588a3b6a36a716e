//! Local trending catalog
//!
//! The ranked list of entries the UI browses. A catalog is a JSON array of
//! [`MediaItem`]s in rank order; it comes either from a library file on disk
//! or from the feed compiled into the binary. The catalog never reorders
//! entries: position in the list is the trending rank.

use std::path::Path;

use crate::error::{CatalogError, CatalogResult};
use crate::types::MediaItem;

/// Sample feed compiled into the binary, used when no library file is given
const BUNDLED_TRENDING: &str = include_str!("../data/trending.json");

/// Ranked collection of media entries
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    items: Vec<MediaItem>,
}

impl Catalog {
    /// Parse a catalog from a JSON array of entries
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let items: Vec<MediaItem> = serde_json::from_str(json)?;
        Ok(Self { items })
    }

    /// Load a catalog from a library file on disk
    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&contents)?;
        tracing::info!(
            "Loaded {} titles from library {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// The feed compiled into the binary
    pub fn bundled() -> Self {
        Self::from_json_str(BUNDLED_TRENDING).expect("bundled trending feed is valid JSON")
    }

    /// All entries in rank order
    pub fn trending(&self) -> &[MediaItem] {
        &self.items
    }

    /// The first `n` entries in rank order (fewer if the catalog is smaller)
    pub fn top(&self, n: usize) -> &[MediaItem] {
        &self.items[..n.min(self.items.len())]
    }

    /// Look up an entry by upstream id
    pub fn get(&self, id: u64) -> Option<&MediaItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Like [`Catalog::get`], but an absent id is an error
    pub fn require(&self, id: u64) -> CatalogResult<&MediaItem> {
        self.get(id).ok_or(CatalogError::NotFound(id))
    }

    /// Number of entries in the catalog
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
