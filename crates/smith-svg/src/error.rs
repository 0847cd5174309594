use thiserror::Error;

#[derive(Error, Debug)]
pub enum SvgError {
    #[error("invalid value list entry: {0:?}")]
    InvalidValues(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
