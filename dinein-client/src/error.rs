//! Client error types

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server rejected the username/password pair
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Request failed local validation
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// Unexpected server status
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ClientError::Http(e) if e.is_timeout() => ErrorCode::TimeoutError,
            ClientError::Http(_) => ErrorCode::NetworkError,
            ClientError::InvalidCredentials(_) => ErrorCode::InvalidCredentials,
            ClientError::InvalidResponse(_) | ClientError::Serialization(_) => {
                ErrorCode::InvalidRequest
            }
            ClientError::Validation(_) => ErrorCode::ValidationFailed,
            ClientError::Server { .. } => ErrorCode::InternalError,
        }
    }
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        AppError::with_message(err.error_code(), err.to_string())
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = ClientError::InvalidCredentials("Invalid credentials".to_string());
        assert_eq!(err.error_code(), ErrorCode::InvalidCredentials);

        let app: AppError = ClientError::Server {
            status: 503,
            message: "down".to_string(),
        }
        .into();
        assert_eq!(app.code, ErrorCode::InternalError);
        assert_eq!(app.message, "Server error (503): down");
    }
}
