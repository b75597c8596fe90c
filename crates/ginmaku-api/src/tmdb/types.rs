use serde::Deserialize;

use ginmaku_core::models::{Movie, MoviePage};

/// Response envelope shared by `/search/movie` and `/discover/movie`.
///
/// TMDB omits or nulls fields more often than its docs suggest, so every
/// field is defaulted. A missing `total_pages` counts as a single page.
#[derive(Debug, Deserialize)]
pub struct MovieListResponse {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<MovieResult>,
    #[serde(default = "default_page")]
    pub total_pages: u32,
}

fn default_page() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
pub struct MovieResult {
    pub id: u64,
    pub title: String,
    pub release_date: Option<String>,
    pub vote_average: Option<f32>,
    pub vote_count: Option<u64>,
    pub poster_path: Option<String>,
    pub original_language: Option<String>,
}

impl MovieResult {
    pub fn into_movie(self) -> Movie {
        Movie {
            id: self.id,
            title: self.title,
            release_date: self.release_date,
            vote_average: self.vote_average,
            vote_count: self.vote_count,
            poster_path: self.poster_path,
            original_language: self.original_language,
        }
    }
}

impl MovieListResponse {
    pub fn into_page(self) -> MoviePage {
        MoviePage {
            page: self.page,
            total_pages: self.total_pages,
            movies: self.results.into_iter().map(|r| r.into_movie()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_search_response() {
        let json = r#"{
            "page": 1,
            "results": [
                {
                    "id": 268,
                    "title": "Batman",
                    "release_date": "1989-06-21",
                    "vote_average": 7.23,
                    "vote_count": 7583,
                    "poster_path": "/cij4dd21v2Rk2YtUQbV5kW69WB2.jpg",
                    "original_language": "en",
                    "overview": "Batman must face his most ruthless nemesis.",
                    "popularity": 42.5
                }
            ],
            "total_pages": 3,
            "total_results": 54
        }"#;

        let resp: MovieListResponse = serde_json::from_str(json).unwrap();
        let page = resp.into_page();
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.movies.len(), 1);

        let movie = &page.movies[0];
        assert_eq!(movie.id, 268);
        assert_eq!(movie.title, "Batman");
        assert_eq!(movie.release_date.as_deref(), Some("1989-06-21"));
        assert_eq!(movie.vote_count, Some(7583));
    }

    #[test]
    fn test_deserialize_sparse_result() {
        let json = r#"{
            "results": [
                {
                    "id": 1,
                    "title": "Obscure",
                    "release_date": null,
                    "poster_path": null
                }
            ]
        }"#;

        let resp: MovieListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.page, 1);
        assert_eq!(resp.total_pages, 1);

        let movie = resp.into_page().movies.remove(0);
        assert_eq!(movie.title, "Obscure");
        assert!(movie.poster_path.is_none());
        assert!(movie.vote_average.is_none());
    }

    #[test]
    fn test_deserialize_empty_envelope() {
        let resp: MovieListResponse = serde_json::from_str("{}").unwrap();
        let page = resp.into_page();
        assert!(page.movies.is_empty());
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
    }
}
