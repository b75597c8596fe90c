use reqwest::Client;

use ginmaku_core::config::TrendingConfig;
use ginmaku_core::models::{Movie, TrendingEntry};
use ginmaku_core::normalize::normalize_term;

use super::error::AppwriteError;
use super::types::{DocumentListResponse, TrendingDocument};
use crate::traits::TrendingStore;

/// Appwrite database client for the search-count collection.
///
/// Documents are keyed on the normalized search term, so "Batman" and
/// "batman " land on the same counter.
#[derive(Clone)]
pub struct AppwriteClient {
    endpoint: String,
    project_id: String,
    api_key: String,
    database_id: String,
    collection_id: String,
    trending_limit: u32,
    http: Client,
}

impl AppwriteClient {
    pub fn new(config: &TrendingConfig) -> Self {
        Self {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            project_id: config.project_id.clone(),
            api_key: config.api_key.clone(),
            database_id: config.database_id.clone(),
            collection_id: config.collection_id.clone(),
            trending_limit: config.limit,
            http: Client::new(),
        }
    }

    fn documents_url(&self) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.endpoint, self.database_id, self.collection_id
        )
    }

    /// Pass a successful response through; turn anything else into an
    /// API error carrying the body text.
    async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, AppwriteError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status, "Appwrite API error");
            Err(AppwriteError::Api {
                status,
                message: body,
            })
        }
    }

    async fn find_by_term(
        &self,
        normalized: &str,
    ) -> Result<Option<TrendingDocument>, AppwriteError> {
        let resp = self
            .http
            .get(self.documents_url())
            .header("X-Appwrite-Project", &self.project_id)
            .header("X-Appwrite-Key", &self.api_key)
            .query(&[
                ("queries[]", query_equal("searchTerm", normalized)),
                ("queries[]", query_limit(1)),
            ])
            .send()
            .await?;

        let resp = Self::check_response(resp).await?;
        let body: DocumentListResponse = resp
            .json()
            .await
            .map_err(|e| AppwriteError::Parse(e.to_string()))?;

        Ok(body.documents.into_iter().next())
    }
}

impl TrendingStore for AppwriteClient {
    type Error = AppwriteError;

    async fn record_search(&self, term: &str, movie: &Movie) -> Result<(), AppwriteError> {
        let normalized = normalize_term(term);
        if normalized.is_empty() {
            return Ok(());
        }

        match self.find_by_term(&normalized).await? {
            Some(doc) => {
                let resp = self
                    .http
                    .patch(format!("{}/{}", self.documents_url(), doc.id))
                    .header("X-Appwrite-Project", &self.project_id)
                    .header("X-Appwrite-Key", &self.api_key)
                    .json(&update_payload(doc.count + 1))
                    .send()
                    .await?;
                Self::check_response(resp).await?;
            }
            None => {
                let resp = self
                    .http
                    .post(self.documents_url())
                    .header("X-Appwrite-Project", &self.project_id)
                    .header("X-Appwrite-Key", &self.api_key)
                    .json(&create_payload(&normalized, movie))
                    .send()
                    .await?;
                Self::check_response(resp).await?;
            }
        }

        tracing::debug!(term = %normalized, "Recorded search");
        Ok(())
    }

    async fn trending(&self) -> Result<Vec<TrendingEntry>, AppwriteError> {
        let resp = self
            .http
            .get(self.documents_url())
            .header("X-Appwrite-Project", &self.project_id)
            .header("X-Appwrite-Key", &self.api_key)
            .query(&[
                ("queries[]", query_order_desc("count")),
                ("queries[]", query_limit(self.trending_limit)),
            ])
            .send()
            .await?;

        let resp = Self::check_response(resp).await?;
        let body: DocumentListResponse = resp
            .json()
            .await
            .map_err(|e| AppwriteError::Parse(e.to_string()))?;

        Ok(body
            .documents
            .into_iter()
            .map(|doc| doc.into_entry())
            .collect())
    }
}

// ── Query and payload builders ──────────────────────────────────

/// Appwrite 1.4+ expects each query as a JSON object in a `queries[]`
/// parameter.
fn query_equal(attribute: &str, value: &str) -> String {
    serde_json::json!({
        "method": "equal",
        "attribute": attribute,
        "values": [value],
    })
    .to_string()
}

fn query_order_desc(attribute: &str) -> String {
    serde_json::json!({ "method": "orderDesc", "attribute": attribute }).to_string()
}

fn query_limit(limit: u32) -> String {
    serde_json::json!({ "method": "limit", "values": [limit] }).to_string()
}

fn create_payload(term: &str, movie: &Movie) -> serde_json::Value {
    serde_json::json!({
        "documentId": "unique()",
        "data": {
            "searchTerm": term,
            "count": 1,
            "movie_id": movie.id,
            "poster_url": movie.poster_url(),
        }
    })
}

fn update_payload(count: u64) -> serde_json::Value {
    serde_json::json!({ "data": { "count": count } })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> TrendingConfig {
        TrendingConfig {
            endpoint: "https://cloud.appwrite.io/v1/".into(),
            project_id: "proj".into(),
            api_key: "key".into(),
            database_id: "main".into(),
            collection_id: "trending".into(),
            limit: 5,
        }
    }

    fn movie() -> Movie {
        Movie {
            id: 268,
            title: "Batman".into(),
            release_date: Some("1989-06-21".into()),
            vote_average: Some(7.2),
            vote_count: Some(7583),
            poster_path: Some("/cij4.jpg".into()),
            original_language: Some("en".into()),
        }
    }

    #[test]
    fn test_documents_url_joins_cleanly() {
        let client = AppwriteClient::new(&config());
        assert_eq!(
            client.documents_url(),
            "https://cloud.appwrite.io/v1/databases/main/collections/trending/documents"
        );
    }

    #[test]
    fn test_query_equal_shape() {
        let q: serde_json::Value = serde_json::from_str(&query_equal("searchTerm", "batman"))
            .unwrap();
        assert_eq!(q["method"], "equal");
        assert_eq!(q["attribute"], "searchTerm");
        assert_eq!(q["values"][0], "batman");
    }

    #[test]
    fn test_query_order_and_limit_shape() {
        let order: serde_json::Value =
            serde_json::from_str(&query_order_desc("count")).unwrap();
        assert_eq!(order["method"], "orderDesc");
        assert_eq!(order["attribute"], "count");

        let limit: serde_json::Value = serde_json::from_str(&query_limit(5)).unwrap();
        assert_eq!(limit["method"], "limit");
        assert_eq!(limit["values"][0], 5);
    }

    #[test]
    fn test_create_payload_starts_count_at_one() {
        let payload = create_payload("batman", &movie());
        assert_eq!(payload["documentId"], "unique()");
        assert_eq!(payload["data"]["searchTerm"], "batman");
        assert_eq!(payload["data"]["count"], 1);
        assert_eq!(payload["data"]["movie_id"], 268);
        assert_eq!(
            payload["data"]["poster_url"],
            "https://image.tmdb.org/t/p/w500/cij4.jpg"
        );
    }

    #[test]
    fn test_create_payload_without_poster() {
        let mut movie = movie();
        movie.poster_path = None;
        let payload = create_payload("batman", &movie);
        assert!(payload["data"]["poster_url"].is_null());
    }

    #[test]
    fn test_update_payload_carries_new_count() {
        let payload = update_payload(13);
        assert_eq!(payload["data"]["count"], 13);
    }
}
