//! Core types for Reelrank

use serde::{Deserialize, Serialize};

use crate::display;

/// Classification of a catalog entry
///
/// Feeds omit the field for plain movies, so `Movie` is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Feature film
    #[default]
    Movie,
    /// Television series
    Tv,
}

impl MediaKind {
    /// Wire value, as it appears in feed JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Tv => "tv",
        }
    }

    /// Human-readable label for UI display
    pub fn label(&self) -> &'static str {
        match self {
            MediaKind::Movie => "Movie",
            MediaKind::Tv => "TV Series",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One movie or show entry as supplied by a trending feed
///
/// Only `id` and `title` are required; every other field degrades to
/// "not shown" when absent. The struct is read-only to the UI: displayed
/// values (year, rating, image URLs) are derived per render by the pure
/// functions in [`crate::display`] and [`crate::tmdb`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Upstream identifier, unique within a catalog
    pub id: u64,
    /// Display title
    pub title: String,
    /// Relative poster path (leading slash included, e.g. "/abc.jpg")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    /// Movie vs TV classification, defaults to movie
    #[serde(default)]
    pub media_type: MediaKind,
    /// Synopsis paragraph, shown only by the details surface
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    /// Relative backdrop path, shown only by the details surface
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backdrop_path: Option<String>,
    /// Release date string, usually "YYYY-MM-DD"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    /// Average rating on the upstream 0-10 scale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote_average: Option<f64>,
    /// Whether the entry carries the "Recently Added" badge
    #[serde(default)]
    pub recently_added: bool,
}

impl MediaItem {
    /// Create a minimal entry; optional fields start absent
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            poster_path: None,
            media_type: MediaKind::default(),
            overview: None,
            backdrop_path: None,
            release_date: None,
            vote_average: None,
            recently_added: false,
        }
    }

    /// Calendar year derived from `release_date`, absent when unparseable
    pub fn display_year(&self) -> Option<i32> {
        display::display_year(self.release_date.as_deref())
    }

    /// Rating rounded to one decimal, absent for missing or zero averages
    pub fn display_rating(&self) -> Option<f64> {
        display::display_rating(self.vote_average)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_kind_default_is_movie() {
        assert_eq!(MediaKind::default(), MediaKind::Movie);
    }

    #[test]
    fn test_media_kind_wire_values() {
        assert_eq!(MediaKind::Movie.as_str(), "movie");
        assert_eq!(MediaKind::Tv.as_str(), "tv");
        assert_eq!(format!("{}", MediaKind::Tv), "tv");
    }

    #[test]
    fn test_media_kind_labels() {
        assert_eq!(MediaKind::Movie.label(), "Movie");
        assert_eq!(MediaKind::Tv.label(), "TV Series");
    }

    #[test]
    fn test_minimal_entry_deserializes() {
        let item: MediaItem =
            serde_json::from_str(r#"{"id": 42, "title": "Unknown"}"#).expect("minimal entry");
        assert_eq!(item.id, 42);
        assert_eq!(item.title, "Unknown");
        assert_eq!(item.media_type, MediaKind::Movie);
        assert!(item.poster_path.is_none());
        assert!(item.release_date.is_none());
        assert!(item.vote_average.is_none());
        assert!(!item.recently_added);
    }

    #[test]
    fn test_full_entry_deserializes() {
        let json = r#"{
            "id": 27205,
            "title": "Inception",
            "poster_path": "/abc.jpg",
            "media_type": "movie",
            "overview": "A thief who steals corporate secrets.",
            "backdrop_path": "/back.jpg",
            "release_date": "2010-07-16",
            "vote_average": 8.8,
            "recently_added": true
        }"#;
        let item: MediaItem = serde_json::from_str(json).expect("full entry");
        assert_eq!(item.poster_path.as_deref(), Some("/abc.jpg"));
        assert_eq!(item.vote_average, Some(8.8));
        assert!(item.recently_added);
    }

    #[test]
    fn test_tv_kind_parses_lowercase() {
        let item: MediaItem =
            serde_json::from_str(r#"{"id": 1, "title": "Show", "media_type": "tv"}"#)
                .expect("tv entry");
        assert_eq!(item.media_type, MediaKind::Tv);
    }

    #[test]
    fn test_missing_title_is_rejected() {
        let result = serde_json::from_str::<MediaItem>(r#"{"id": 1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_display_helpers_delegate() {
        let mut item = MediaItem::new(1, "Film");
        item.release_date = Some("1999-03-31".to_string());
        item.vote_average = Some(7.25);
        assert_eq!(item.display_year(), Some(1999));
        assert_eq!(item.display_rating(), Some(7.3));
    }
}
