use thiserror::Error;

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    #[error("Invalid schedule customization: {0}")]
    Validation(String),
    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
