use crate::domain::{errors::StorageResult, models::ListingQuery, value_objects::ObjectName};
use async_trait::async_trait;

/// Port for enumerating object names in a bucket
/// This abstracts the actual storage backend (GCS JSON API, object_store, etc.)
#[async_trait]
pub trait ObjectListing: Send + Sync + 'static {
    /// Drain the listing selected by `query` to completion
    async fn list_object_names(&self, query: &ListingQuery) -> StorageResult<Vec<ObjectName>>;

    /// Human readable description of where the listing comes from
    fn describe(&self) -> String;
}
