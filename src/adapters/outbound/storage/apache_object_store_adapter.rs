use async_trait::async_trait;
use futures::TryStreamExt;
use object_store::ObjectStore as ApacheObjectStore;
use std::sync::Arc;
use tracing::{debug, info};

use crate::{
    adapters::outbound::storage::error::StoreError,
    domain::{errors::StorageResult, models::ListingQuery, value_objects::ObjectName},
    ports::storage::ObjectListing,
};

/// Adapter that implements our ObjectListing trait using Apache object_store
///
/// object_store has no server-side glob, so the whole store is listed and
/// the query is applied to each name as it streams in.
pub struct ApacheObjectStoreListingAdapter {
    inner: Arc<dyn ApacheObjectStore>,
}

impl ApacheObjectStoreListingAdapter {
    pub fn new(store: Arc<dyn ApacheObjectStore>) -> Self {
        Self { inner: store }
    }
}

#[async_trait]
impl ObjectListing for ApacheObjectStoreListingAdapter {
    async fn list_object_names(&self, query: &ListingQuery) -> StorageResult<Vec<ObjectName>> {
        // object_store prefixes are segment based, so prefixes are matched
        // on the raw name by the query instead
        let mut stream = self.inner.list(None);
        let mut names = Vec::new();
        let mut seen = 0usize;

        while let Some(meta) = stream.try_next().await.map_err(StoreError::from)? {
            seen += 1;
            let location = meta.location.to_string();
            if !query.matches(&location) {
                continue;
            }

            match ObjectName::new(location) {
                Ok(name) => {
                    debug!(%name, "matched object");
                    names.push(name);
                }
                Err(e) => debug!(error = %e, "skipping unusable object name"),
            }
        }

        info!(store = %self.inner, seen, matched = names.len(), "listing complete");
        Ok(names)
    }

    fn describe(&self) -> String {
        self.inner.to_string()
    }
}
