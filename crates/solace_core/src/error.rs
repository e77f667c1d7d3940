//! Error types for Solace.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolaceError {
    #[error("Classifier error: {0}")]
    Classifier(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
