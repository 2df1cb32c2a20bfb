use thiserror::Error;

/// Unified error type for pr-title-check operations
#[derive(Error, Debug)]
pub enum TitleCheckError {
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in pr-title-check
pub type Result<T> = std::result::Result<T, TitleCheckError>;

impl TitleCheckError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        TitleCheckError::Config(msg.into())
    }
}
