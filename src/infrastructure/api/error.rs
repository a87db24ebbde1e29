use crate::shared::error::AppError;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("could not decode response: {0}")]
    Decode(String),
}

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Transport(inner) => AppError::Network(inner.to_string()),
            ApiError::Status { status, body } => match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    AppError::Unauthorized(format!("{status}: {body}"))
                }
                StatusCode::NOT_FOUND => AppError::NotFound(format!("{status}: {body}")),
                _ => AppError::Api(format!("{status}: {body}")),
            },
            ApiError::Decode(message) => AppError::DeserializationError(message),
        }
    }
}
