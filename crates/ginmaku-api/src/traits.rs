//! Trait definitions for the catalog and trending backends.
//!
//! The search flow and UI are written against these traits, so a backend
//! can be swapped or faked without touching either.

use std::future::Future;

use ginmaku_core::models::{Movie, MoviePage, TrendingEntry};

/// A movie catalog that can be searched and browsed page by page.
pub trait MovieCatalog: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch one page of movies. A blank `term` browses the catalog by
    /// popularity; anything else searches for the term.
    fn fetch_page(
        &self,
        term: &str,
        page: u32,
    ) -> impl Future<Output = Result<MoviePage, Self::Error>> + Send;
}

/// A store that aggregates search terms into a trending ranking.
pub trait TrendingStore: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Count one search for `term`. `movie` is the top result, kept so
    /// the ranking can show a poster next to the term.
    fn record_search(
        &self,
        term: &str,
        movie: &Movie,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// The most-searched terms, highest count first.
    fn trending(&self) -> impl Future<Output = Result<Vec<TrendingEntry>, Self::Error>> + Send;
}
