use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("Invalid viewer style: {0}")]
    Style(#[from] validator::ValidationErrors),

    #[error("Failed to encode viewer data: {0}")]
    Encode(#[from] serde_json::Error),
}
