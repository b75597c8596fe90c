use serde::Deserialize;

use ginmaku_core::models::TrendingEntry;

/// Envelope returned by the list-documents endpoint.
#[derive(Debug, Deserialize)]
pub struct DocumentListResponse {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub documents: Vec<TrendingDocument>,
}

/// One search-count document. Appwrite prefixes its own metadata fields
/// with `$`; the rest match the collection schema.
#[derive(Debug, Deserialize)]
pub struct TrendingDocument {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(rename = "searchTerm")]
    pub search_term: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub movie_id: u64,
    pub poster_url: Option<String>,
}

impl TrendingDocument {
    pub fn into_entry(self) -> TrendingEntry {
        TrendingEntry {
            id: self.id,
            term: self.search_term,
            poster_url: self.poster_url,
            movie_id: self.movie_id,
            count: self.count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_document_list() {
        let json = r#"{
            "total": 2,
            "documents": [
                {
                    "$id": "65f1c2d4000a1b2c3d4e",
                    "$collectionId": "trending",
                    "$databaseId": "main",
                    "$createdAt": "2024-03-13T10:00:00.000+00:00",
                    "$updatedAt": "2024-03-14T08:30:00.000+00:00",
                    "searchTerm": "batman",
                    "count": 12,
                    "movie_id": 268,
                    "poster_url": "https://image.tmdb.org/t/p/w500/cij4.jpg"
                },
                {
                    "$id": "65f1c2d4000a1b2c3d4f",
                    "searchTerm": "dune",
                    "count": 7,
                    "movie_id": 438631,
                    "poster_url": null
                }
            ]
        }"#;

        let resp: DocumentListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.total, 2);
        assert_eq!(resp.documents.len(), 2);

        let entry = resp.documents.into_iter().next().unwrap().into_entry();
        assert_eq!(entry.id, "65f1c2d4000a1b2c3d4e");
        assert_eq!(entry.term, "batman");
        assert_eq!(entry.count, 12);
        assert_eq!(entry.movie_id, 268);
        assert!(entry.poster_url.is_some());
    }

    #[test]
    fn test_deserialize_empty_list() {
        let resp: DocumentListResponse = serde_json::from_str(r#"{"total": 0}"#).unwrap();
        assert_eq!(resp.total, 0);
        assert!(resp.documents.is_empty());
    }

    #[test]
    fn test_deserialize_document_without_counts() {
        let json = r#"{ "$id": "abc", "searchTerm": "tron", "poster_url": null }"#;
        let doc: TrendingDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.count, 0);
        assert_eq!(doc.movie_id, 0);
    }
}
