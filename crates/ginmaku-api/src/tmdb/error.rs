use thiserror::Error;

/// Failures talking to the movie catalog service.
#[derive(Debug, Error)]
pub enum TmdbError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("TMDB returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("malformed response body: {0}")]
    Parse(String),
}
