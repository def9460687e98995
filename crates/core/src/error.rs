use symgather_api::ApiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatherError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Client task failed: {0}")]
    Join(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<tokio::task::JoinError> for GatherError {
    fn from(err: tokio::task::JoinError) -> Self {
        GatherError::Join(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GatherError>;
