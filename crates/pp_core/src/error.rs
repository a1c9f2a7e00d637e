use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid article: {0}")]
    InvalidArticle(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Article not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
