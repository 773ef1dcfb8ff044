// Infrastructure error types
pub mod error;

// Listing implementations
pub mod apache_object_store_adapter;
pub mod gcs_json_adapter;

// Re-export key types
pub use apache_object_store_adapter::ApacheObjectStoreListingAdapter;
pub use error::StoreError;
pub use gcs_json_adapter::{GcsJsonListingAdapter, DEFAULT_GCS_ENDPOINT};
