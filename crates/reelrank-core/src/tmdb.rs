//! Image URL building for the TMDB CDN
//!
//! Poster and backdrop paths arrive as relative paths with a leading slash
//! (`"/abc.jpg"`); display URLs are the fixed CDN base plus a size segment
//! plus the path.

/// Fixed CDN base every image URL starts with
pub const IMAGE_BASE: &str = "https://image.tmdb.org/t/p/";

/// CDN image size variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    W92,
    W154,
    W185,
    W342,
    W500,
    W780,
    Original,
}

impl ImageSize {
    /// URL path segment for this size
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::W92 => "w92",
            ImageSize::W154 => "w154",
            ImageSize::W185 => "w185",
            ImageSize::W342 => "w342",
            ImageSize::W500 => "w500",
            ImageSize::W780 => "w780",
            ImageSize::Original => "original",
        }
    }
}

/// Full CDN URL for a relative image path at the given size
pub fn image_url(path: &str, size: ImageSize) -> String {
    format!("{}{}{}", IMAGE_BASE, size.as_str(), path)
}

/// Card posters use the larger w500 variant for quality at grid scale
pub fn poster_url(path: &str) -> String {
    image_url(path, ImageSize::W500)
}

/// Detail backdrops render wide, so they use w780
pub fn backdrop_url(path: &str) -> String {
    image_url(path, ImageSize::W780)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_segments() {
        assert_eq!(ImageSize::W92.as_str(), "w92");
        assert_eq!(ImageSize::W500.as_str(), "w500");
        assert_eq!(ImageSize::W780.as_str(), "w780");
        assert_eq!(ImageSize::Original.as_str(), "original");
    }

    #[test]
    fn test_poster_url_concatenation() {
        assert_eq!(
            poster_url("/abc.jpg"),
            "https://image.tmdb.org/t/p/w500/abc.jpg"
        );
    }

    #[test]
    fn test_backdrop_url_concatenation() {
        assert_eq!(
            backdrop_url("/back.jpg"),
            "https://image.tmdb.org/t/p/w780/back.jpg"
        );
    }

    #[test]
    fn test_image_url_with_explicit_size() {
        assert_eq!(
            image_url("/x.jpg", ImageSize::Original),
            "https://image.tmdb.org/t/p/original/x.jpg"
        );
    }
}
