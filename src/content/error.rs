//! Content errors

use thiserror::Error;

use super::schema::SchemaError;

/// Errors raised while reading entries handed over by the content loader
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("Unsupported entries export format: {0}")]
    UnsupportedFormat(String),
}
