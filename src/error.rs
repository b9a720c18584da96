use crate::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to initialize logging: {0}")]
    Logging(String),
    #[error("failed to encode view: {0}")]
    Json(#[from] serde_json::Error),
}
