use thiserror::Error;
use watchlog_model::ModelError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WatchlogError {
    #[error("Invalid comparison operator: {0:?}")]
    InvalidOperator(String),

    #[error("Invalid schedule request: {0}")]
    InvalidRequest(String),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, WatchlogError>;
