// HotelChat — Atoms: Error

use thiserror::Error;

pub type WidgetResult<T> = Result<T, WidgetError>;

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

impl From<String> for WidgetError {
    fn from(message: String) -> Self {
        WidgetError::Other(message)
    }
}

impl From<&str> for WidgetError {
    fn from(message: &str) -> Self {
        WidgetError::Other(message.to_string())
    }
}
