use serde::{Deserialize, Serialize};

/// One trending search term, as read back from the document store.
///
/// Created and incremented by the store client as a side effect of
/// successful searches; the UI only ever displays these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingEntry {
    /// Store-assigned document id.
    pub id: String,
    /// The search term as originally recorded.
    pub term: String,
    /// Display URL of the poster stored with the first recording.
    pub poster_url: Option<String>,
    /// Catalog id of the movie stored with the first recording.
    pub movie_id: u64,
    /// Number of times the term has been searched.
    pub count: u64,
}
