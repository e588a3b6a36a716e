//! Display derivations for ranked tiles
//!
//! Pure functions recomputed at render time; nothing here is cached or
//! memoized. Parse failures degrade to `None` rather than erroring, so a
//! malformed feed field renders as "not shown" instead of failing the tile.

use chrono::{Datelike, NaiveDate};

/// Tiles at positions below this count request eager poster loading
pub const EAGER_POSTER_COUNT: usize = 3;

/// 1-based rank shown on a tile for a zero-based list position
pub fn rank_label(index: usize) -> usize {
    index + 1
}

/// Whether the poster at this position is above the fold and should load
/// eagerly rather than lazily
pub fn eager_poster(index: usize) -> bool {
    index < EAGER_POSTER_COUNT
}

/// Calendar year of a release-date string
///
/// Accepts the feed's usual `YYYY-MM-DD` form (unpadded month/day included)
/// and a bare 4-digit year. Anything else, including an absent date, yields
/// `None`.
pub fn display_year(release_date: Option<&str>) -> Option<i32> {
    let raw = release_date?.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.year());
    }
    if raw.len() == 4 && raw.bytes().all(|b| b.is_ascii_digit()) {
        return raw.parse().ok();
    }
    None
}

/// Rating rounded to one decimal place
///
/// An average of exactly `0` is indistinguishable from an unrated title in
/// the upstream feed and is treated as absent, as are NaN and missing values.
pub fn display_rating(vote_average: Option<f64>) -> Option<f64> {
    let value = vote_average?;
    if value == 0.0 || value.is_nan() {
        return None;
    }
    Some((value * 10.0).round() / 10.0)
}

/// Fixed one-decimal rendering of a derived rating
pub fn format_rating(rating: f64) -> String {
    format!("{:.1}", rating)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tmdb;

    #[test]
    fn test_rank_label_is_one_based() {
        assert_eq!(rank_label(0), 1);
        assert_eq!(rank_label(5), 6);
        assert_eq!(rank_label(9), 10);
    }

    #[test]
    fn test_eager_poster_first_three_only() {
        assert!(eager_poster(0));
        assert!(eager_poster(1));
        assert!(eager_poster(2));
        assert!(!eager_poster(3));
        assert!(!eager_poster(100));
    }

    #[test]
    fn test_display_year_iso_date() {
        assert_eq!(display_year(Some("2010-07-16")), Some(2010));
        assert_eq!(display_year(Some("1999-1-5")), Some(1999));
    }

    #[test]
    fn test_display_year_bare_year() {
        assert_eq!(display_year(Some("2010")), Some(2010));
    }

    #[test]
    fn test_display_year_unparseable() {
        assert_eq!(display_year(Some("not a date")), None);
        assert_eq!(display_year(Some("")), None);
        assert_eq!(display_year(Some("2010-13-40")), None);
        assert_eq!(display_year(Some("20x0")), None);
    }

    #[test]
    fn test_display_year_absent() {
        assert_eq!(display_year(None), None);
    }

    #[test]
    fn test_display_rating_rounds_to_one_decimal() {
        assert_eq!(display_rating(Some(8.8)), Some(8.8));
        assert_eq!(display_rating(Some(8.849)), Some(8.8));
        assert_eq!(display_rating(Some(7.25)), Some(7.3));
        assert_eq!(display_rating(Some(10.0)), Some(10.0));
    }

    #[test]
    fn test_display_rating_zero_is_absent() {
        assert_eq!(display_rating(Some(0.0)), None);
    }

    #[test]
    fn test_display_rating_near_zero_still_shown() {
        // Only an exact zero is hidden. A nonzero average below half a
        // rounding step is still "rated" and renders as 0.0.
        assert_eq!(display_rating(Some(0.04)), Some(0.0));
    }

    #[test]
    fn test_display_rating_nan_is_absent() {
        assert_eq!(display_rating(Some(f64::NAN)), None);
    }

    #[test]
    fn test_display_rating_absent() {
        assert_eq!(display_rating(None), None);
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(8.8), "8.8");
        assert_eq!(format_rating(10.0), "10.0");
        assert_eq!(format_rating(7.0), "7.0");
    }

    // The two reference tiles the UI is calibrated against: a fully
    // populated front-of-row entry and a bare mid-row entry.

    #[test]
    fn test_front_of_row_entry() {
        // {title: "Inception", poster_path: "/abc.jpg", index: 0,
        //  release_date: "2010-07-16", vote_average: 8.8}
        assert_eq!(rank_label(0), 1);
        assert!(eager_poster(0));
        assert_eq!(
            tmdb::poster_url("/abc.jpg"),
            "https://image.tmdb.org/t/p/w500/abc.jpg"
        );
        assert_eq!(display_year(Some("2010-07-16")), Some(2010));
        assert_eq!(display_rating(Some(8.8)), Some(8.8));
    }

    #[test]
    fn test_bare_mid_row_entry() {
        // {title: "Unknown", index: 5, recently_added: true}
        assert_eq!(rank_label(5), 6);
        assert!(!eager_poster(5));
        assert_eq!(display_year(None), None);
        assert_eq!(display_rating(None), None);
    }
}
