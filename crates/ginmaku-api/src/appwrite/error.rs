use thiserror::Error;

/// Failures talking to the trending document store.
#[derive(Debug, Error)]
pub enum AppwriteError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Appwrite returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("malformed response body: {0}")]
    Parse(String),
}
