use object_store::ObjectStore as ApacheObjectStore;
use std::sync::Arc;

use crate::{
    adapters::outbound::{
        channel::{ComponentsManifestClient, COMPONENTS_MANIFEST_URL},
        storage::{ApacheObjectStoreListingAdapter, GcsJsonListingAdapter, DEFAULT_GCS_ENDPOINT},
    },
    domain::value_objects::BucketName,
    ports::{channel::ReleaseChannel, storage::ObjectListing},
    services::{ReleaseServiceImpl, VersionCatalogServiceImpl},
};

/// Configuration for the application
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub listing_backend: ListingBackend,
    pub components_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listing_backend: ListingBackend::Gcs {
                endpoint: DEFAULT_GCS_ENDPOINT.to_string(),
                bucket: BucketName::cloud_sdk_release(),
            },
            components_url: COMPONENTS_MANIFEST_URL.to_string(),
        }
    }
}

/// Where object names are listed from
#[derive(Debug, Clone)]
pub enum ListingBackend {
    /// Anonymous Cloud Storage JSON API
    Gcs { endpoint: String, bucket: BucketName },
    /// Any object_store implementation, filtered client-side
    ObjectStore { store: Arc<dyn ApacheObjectStore> },
}

/// Application dependencies container
pub struct AppDependencies {
    pub listing: Arc<dyn ObjectListing>,
    pub release_channel: Arc<dyn ReleaseChannel>,
}

/// Application services container
pub struct AppServices {
    pub catalog_service: VersionCatalogServiceImpl,
    pub release_service: ReleaseServiceImpl,
}

/// Application builder for dependency injection
pub struct AppBuilder {
    config: AppConfig,
}

impl AppBuilder {
    /// Create a new application builder
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// Configure the application with custom settings
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Configure listing backend
    pub fn with_listing_backend(mut self, backend: ListingBackend) -> Self {
        self.config.listing_backend = backend;
        self
    }

    /// Configure the components manifest location
    pub fn with_components_url(mut self, url: impl Into<String>) -> Self {
        self.config.components_url = url.into();
        self
    }

    /// Build the application dependencies
    pub fn build_dependencies(self) -> Result<AppDependencies, AppError> {
        let listing = self.create_listing()?;
        let release_channel = self.create_release_channel()?;

        Ok(AppDependencies {
            listing,
            release_channel,
        })
    }

    /// Build the complete application with services
    pub fn build(self) -> Result<AppServices, AppError> {
        let deps = self.build_dependencies()?;

        Ok(AppServices {
            catalog_service: VersionCatalogServiceImpl::new(deps.listing),
            release_service: ReleaseServiceImpl::new(deps.release_channel),
        })
    }

    fn create_listing(&self) -> Result<Arc<dyn ObjectListing>, AppError> {
        match &self.config.listing_backend {
            ListingBackend::Gcs { endpoint, bucket } => {
                let adapter = GcsJsonListingAdapter::new(endpoint.clone(), bucket.clone())
                    .map_err(|e| AppError::StorageInit {
                        message: e.to_string(),
                    })?;
                Ok(Arc::new(adapter))
            }
            ListingBackend::ObjectStore { store } => {
                Ok(Arc::new(ApacheObjectStoreListingAdapter::new(store.clone())))
            }
        }
    }

    fn create_release_channel(&self) -> Result<Arc<dyn ReleaseChannel>, AppError> {
        if self.config.components_url.is_empty() {
            return Err(AppError::Configuration {
                message: "components manifest URL cannot be empty".to_string(),
            });
        }

        let client = ComponentsManifestClient::new(self.config.components_url.clone())
            .map_err(|e| AppError::ChannelInit {
                message: e.to_string(),
            })?;
        Ok(Arc::new(client))
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Storage initialization error: {message}")]
    StorageInit { message: String },

    #[error("Release channel initialization error: {message}")]
    ChannelInit { message: String },
}

/// Convenience functions for common configurations
///
/// Create an application listing a Cloud Storage bucket anonymously
pub fn create_gcs_app(endpoint: impl Into<String>, bucket: BucketName) -> Result<AppServices, AppError> {
    AppBuilder::new()
        .with_listing_backend(ListingBackend::Gcs {
            endpoint: endpoint.into(),
            bucket,
        })
        .build()
}

/// Create an application listing an arbitrary object_store, e.g. `InMemory`
pub fn create_object_store_app(store: Arc<dyn ApacheObjectStore>) -> Result<AppServices, AppError> {
    AppBuilder::new()
        .with_listing_backend(ListingBackend::ObjectStore { store })
        .build()
}
