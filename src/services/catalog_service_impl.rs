use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::{
    domain::{
        errors::{StorageError, StorageResult},
        models::{ListingQuery, VersionCatalog},
    },
    ports::{services::VersionCatalogService, storage::ObjectListing},
};

/// Implementation of VersionCatalogService on top of an object listing
#[derive(Clone)]
pub struct VersionCatalogServiceImpl {
    listing: Arc<dyn ObjectListing>,
}

impl VersionCatalogServiceImpl {
    pub fn new(listing: Arc<dyn ObjectListing>) -> Self {
        Self { listing }
    }
}

#[async_trait]
impl VersionCatalogService for VersionCatalogServiceImpl {
    async fn compile_versions(
        &self,
        query: &ListingQuery,
        cancel: &CancellationToken,
    ) -> StorageResult<VersionCatalog> {
        debug!(source = %self.listing.describe(), glob = ?query.match_glob(), "listing objects");

        let names = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(StorageError::Cancelled),
            names = self.listing.list_object_names(query) => names?,
        };

        let mut catalog = VersionCatalog::new();
        let mut skipped = 0usize;
        for name in &names {
            if catalog.record(name.as_str()).is_none() {
                debug!(name = %name, "no version in object name");
                skipped += 1;
            }
        }

        info!(
            objects = names.len(),
            skipped,
            versions = catalog.len(),
            "compiled version catalog"
        );
        Ok(catalog)
    }
}
