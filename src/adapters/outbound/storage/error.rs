use crate::domain::errors::StorageError;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum StoreError {
    #[error("Object store error: {0}")]
    ObjectStore(#[from] object_store::Error),

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {status} - {message}")]
    Http {
        status: http::StatusCode,
        message: String,
    },
}

impl StoreError {
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        StoreError::Http {
            status: http::StatusCode::from_u16(status)
                .unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR),
            message: message.into(),
        }
    }
}

/// Convert object_store errors to domain storage errors
impl From<object_store::Error> for StorageError {
    fn from(err: object_store::Error) -> Self {
        match err {
            object_store::Error::NotSupported { .. } => StorageError::InvalidResponse {
                message: err.to_string(),
            },
            _ => StorageError::InfrastructureError {
                message: format!("Object store operation failed: {}", err),
                source: Some(err.to_string()),
            },
        }
    }
}

/// Convert infrastructure StoreError to domain StorageError
impl From<StoreError> for StorageError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::ObjectStore(object_err) => object_err.into(),
            StoreError::Transport(transport_err) => StorageError::InfrastructureError {
                message: format!("Listing request failed: {}", transport_err),
                source: Some(transport_err.to_string()),
            },
            StoreError::Serialization(serde_err) => StorageError::InvalidResponse {
                message: serde_err.to_string(),
            },
            StoreError::Http { status, message } => StorageError::RequestFailed {
                status: status.as_u16(),
                message,
            },
        }
    }
}
