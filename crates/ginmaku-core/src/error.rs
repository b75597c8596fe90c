use thiserror::Error;

/// Failures from configuration and local persistence.
#[derive(Debug, Error)]
pub enum GinmakuError {
    #[error("bad configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
