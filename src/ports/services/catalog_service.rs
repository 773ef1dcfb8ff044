use crate::domain::{errors::StorageResult, models::ListingQuery, models::VersionCatalog};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Service port for compiling the catalog of published SDK versions
#[async_trait]
pub trait VersionCatalogService: Send + Sync + 'static {
    /// List the bucket with `query` and collect the unique versions found
    /// in the object names. Fails with `StorageError::Cancelled` if `cancel`
    /// fires before the listing completes.
    async fn compile_versions(
        &self,
        query: &ListingQuery,
        cancel: &CancellationToken,
    ) -> StorageResult<VersionCatalog>;
}
