//! Error types for Reelrank

use thiserror::Error;

/// Main error type for catalog operations
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog contents were not a valid media list
    #[error("Invalid catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// No title with the requested id exists in the catalog
    #[error("Title not found: {0}")]
    NotFound(u64),
}

/// Result type alias using CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CatalogError::NotFound(27205);
        assert_eq!(format!("{}", err), "Title not found: 27205");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let catalog_err: CatalogError = io_err.into();
        assert!(matches!(catalog_err, CatalogError::Io(_)));
    }
}
