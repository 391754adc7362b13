use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode report as JSON: {0}")]
    Json(#[from] serde_json::Error),
}
