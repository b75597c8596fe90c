//! HTTP clients for the movie catalog and the trending store.
//!
//! `tmdb` talks to the TMDB v3 REST API, `appwrite` to an Appwrite
//! database that aggregates search counts. Both are exposed through the
//! traits in [`traits`] so the UI never depends on a concrete backend.

pub mod appwrite;
pub mod tmdb;
pub mod traits;

pub use appwrite::{AppwriteClient, AppwriteError};
pub use tmdb::{TmdbClient, TmdbError};
pub use traits::{MovieCatalog, TrendingStore};
