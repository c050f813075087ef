//! Error types for assertgen

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// assertgen errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid field name: {0:?}")]
    InvalidName(String),

    #[error("Unresolved type: {0:?}")]
    UnresolvedType(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_norway::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<minijinja::Error> for Error {
    fn from(e: minijinja::Error) -> Self {
        Error::Render(e.to_string())
    }
}
