use reqwest::Client;

use ginmaku_core::models::MoviePage;

use super::error::TmdbError;
use super::types::MovieListResponse;
use crate::traits::MovieCatalog;

const BASE_URL: &str = "https://api.themoviedb.org/3";

/// TMDB v3 API client using Bearer token auth.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct TmdbClient {
    base_url: String,
    bearer_token: String,
    http: Client,
}

impl TmdbClient {
    pub fn new(bearer_token: String) -> Self {
        Self::with_base_url(bearer_token, BASE_URL.to_string())
    }

    /// Point the client at a non-default API root, e.g. a proxy.
    pub fn with_base_url(bearer_token: String, base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer_token,
            http: Client::new(),
        }
    }

    fn auth_header(&self) -> String {
        format!("Bearer {}", self.bearer_token)
    }

    /// Pass a successful response through; turn anything else into an
    /// API error carrying the body text.
    async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, TmdbError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status, "TMDB API error");
            Err(TmdbError::Api {
                status,
                message: body,
            })
        }
    }

    /// Pick the endpoint and query for a term and page. A blank term
    /// browses popular movies; anything else searches for it.
    fn plan_request(&self, term: &str, page: u32) -> (String, Vec<(&'static str, String)>) {
        let term = term.trim();
        if term.is_empty() {
            (
                format!("{}/discover/movie", self.base_url),
                vec![
                    ("sort_by", "popularity.desc".to_string()),
                    ("page", page.to_string()),
                ],
            )
        } else {
            (
                format!("{}/search/movie", self.base_url),
                vec![("query", term.to_string()), ("page", page.to_string())],
            )
        }
    }
}

impl MovieCatalog for TmdbClient {
    type Error = TmdbError;

    async fn fetch_page(&self, term: &str, page: u32) -> Result<MoviePage, TmdbError> {
        let (url, query) = self.plan_request(term, page);

        let resp = self
            .http
            .get(&url)
            .header("Authorization", self.auth_header())
            .header("Accept", "application/json")
            .query(&query)
            .send()
            .await?;

        let resp = Self::check_response(resp).await?;
        let body: MovieListResponse = resp
            .json()
            .await
            .map_err(|e| TmdbError::Parse(e.to_string()))?;

        Ok(body.into_page())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TmdbClient {
        TmdbClient::new("token".into())
    }

    #[test]
    fn test_blank_term_plans_discover() {
        let (url, query) = client().plan_request("", 1);
        assert_eq!(url, "https://api.themoviedb.org/3/discover/movie");
        assert_eq!(
            query,
            vec![
                ("sort_by", "popularity.desc".to_string()),
                ("page", "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_whitespace_term_plans_discover() {
        let (url, _) = client().plan_request("   ", 2);
        assert_eq!(url, "https://api.themoviedb.org/3/discover/movie");
    }

    #[test]
    fn test_term_plans_search() {
        let (url, query) = client().plan_request("batman", 3);
        assert_eq!(url, "https://api.themoviedb.org/3/search/movie");
        assert_eq!(
            query,
            vec![("query", "batman".to_string()), ("page", "3".to_string())]
        );
    }

    #[test]
    fn test_term_is_trimmed_before_search() {
        let (_, query) = client().plan_request("  batman  ", 1);
        assert_eq!(query[0], ("query", "batman".to_string()));
    }

    #[test]
    fn test_custom_base_url_drops_trailing_slash() {
        let client = TmdbClient::with_base_url("token".into(), "http://localhost:9090/".into());
        let (url, _) = client.plan_request("", 1);
        assert_eq!(url, "http://localhost:9090/discover/movie");
    }

    #[test]
    fn test_auth_header_is_bearer() {
        assert_eq!(client().auth_header(), "Bearer token");
    }
}
