use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Base URL for poster display images (w500 rendition).
pub const POSTER_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";

/// A single catalog entry, carried through from the service unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub release_date: Option<String>,
    pub vote_average: Option<f32>,
    pub vote_count: Option<u64>,
    pub poster_path: Option<String>,
    pub original_language: Option<String>,
}

impl Movie {
    /// Full display URL for the poster, if the catalog supplied a path.
    pub fn poster_url(&self) -> Option<String> {
        self.poster_path.as_deref().map(|p| {
            if p.starts_with('/') {
                format!("{POSTER_IMAGE_BASE}{p}")
            } else {
                format!("{POSTER_IMAGE_BASE}/{p}")
            }
        })
    }

    pub fn release_year(&self) -> Option<i32> {
        self.release_date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
            .map(|d| d.year())
    }

    /// Vote average to one decimal; unrated entries show "N/A".
    pub fn rating_label(&self) -> String {
        match self.vote_average {
            Some(v) if v > 0.0 => format!("{v:.1}"),
            _ => "N/A".to_string(),
        }
    }

    pub fn votes_label(&self) -> String {
        match self.vote_count {
            Some(n) if n > 0 => n.to_string(),
            _ => "N/A".to_string(),
        }
    }

    pub fn language_label(&self) -> &str {
        match self.original_language.as_deref() {
            Some(lang) if !lang.is_empty() => lang,
            _ => "N/A",
        }
    }

    pub fn year_label(&self) -> String {
        self.release_year()
            .map(|y| y.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }
}

/// One fetched page of results. Replaced wholesale on every successful
/// fetch; pages are never merged.
#[derive(Debug, Clone, PartialEq)]
pub struct MoviePage {
    pub movies: Vec<Movie>,
    pub page: u32,
    pub total_pages: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie() -> Movie {
        Movie {
            id: 603,
            title: "The Matrix".into(),
            release_date: Some("1999-03-30".into()),
            vote_average: Some(8.22),
            vote_count: Some(26000),
            poster_path: Some("/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg".into()),
            original_language: Some("en".into()),
        }
    }

    #[test]
    fn test_poster_url_joins_cleanly() {
        let url = movie().poster_url().unwrap();
        assert_eq!(
            url,
            "https://image.tmdb.org/t/p/w500/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg"
        );

        // A path without a leading slash still produces a single separator.
        let mut m = movie();
        m.poster_path = Some("f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg".into());
        assert_eq!(m.poster_url().unwrap(), url);
    }

    #[test]
    fn test_release_year() {
        assert_eq!(movie().release_year(), Some(1999));
        assert_eq!(movie().year_label(), "1999");

        let mut m = movie();
        m.release_date = Some(String::new());
        assert_eq!(m.release_year(), None);
        assert_eq!(m.year_label(), "N/A");

        m.release_date = None;
        assert_eq!(m.year_label(), "N/A");
    }

    #[test]
    fn test_rating_label() {
        assert_eq!(movie().rating_label(), "8.2");

        let mut m = movie();
        m.vote_average = Some(0.0);
        assert_eq!(m.rating_label(), "N/A");
        m.vote_average = None;
        assert_eq!(m.rating_label(), "N/A");
    }

    #[test]
    fn test_votes_and_language_labels() {
        assert_eq!(movie().votes_label(), "26000");
        assert_eq!(movie().language_label(), "en");

        let mut m = movie();
        m.vote_count = Some(0);
        m.original_language = Some(String::new());
        assert_eq!(m.votes_label(), "N/A");
        assert_eq!(m.language_label(), "N/A");
    }

    #[test]
    fn test_deserializes_catalog_shape() {
        let json = r#"{
            "id": 268,
            "title": "Batman",
            "release_date": "1989-06-21",
            "vote_average": 7.2,
            "vote_count": 7800,
            "poster_path": "/kBf3g9crrADGMc2AMAMlLBgSm2h.jpg",
            "original_language": "en"
        }"#;

        let m: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(m.id, 268);
        assert_eq!(m.release_year(), Some(1989));
    }
}
