use crate::domain::value_objects::BucketName;

/// Errors that can occur while listing a bucket
#[derive(Debug, Clone)]
pub enum StorageError {
    /// Bucket does not exist or is not publicly listable
    BucketNotFound { bucket: BucketName },

    /// Anonymous access was refused
    AccessDenied { bucket: BucketName, status: u16 },

    /// Listing request rejected by the server
    RequestFailed { status: u16, message: String },

    /// Server answered with a body we could not decode
    InvalidResponse { message: String },

    /// The in-flight listing was cancelled
    Cancelled,

    /// Infrastructure error with external source
    InfrastructureError {
        message: String,
        source: Option<String>, // Store error as string to allow Clone
    },
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::BucketNotFound { bucket } => {
                write!(f, "Bucket not found: {}", bucket)
            }
            StorageError::AccessDenied { bucket, status } => {
                write!(
                    f,
                    "Anonymous access denied for bucket '{}' (HTTP {})",
                    bucket, status
                )
            }
            StorageError::RequestFailed { status, message } => {
                write!(f, "Listing request failed with HTTP {}: {}", status, message)
            }
            StorageError::InvalidResponse { message } => {
                write!(f, "Invalid listing response: {}", message)
            }
            StorageError::Cancelled => write!(f, "Operation cancelled"),
            StorageError::InfrastructureError { message, .. } => {
                write!(f, "Infrastructure error: {}", message)
            }
        }
    }
}

impl std::error::Error for StorageError {}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
