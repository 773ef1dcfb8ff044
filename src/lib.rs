pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

/// User agent sent with every outbound request
pub const USER_AGENT: &str = concat!("compile-versions/", env!("CARGO_PKG_VERSION"));

// Re-export key types for convenience

// Domain types - core business entities and value objects
pub use domain::{
    // Value objects
    BucketName,
    // Errors
    ChannelError,
    DomainValidationError,
    // Models
    ListingQuery,
    ObjectName,
    Platform,
    ReleaseTarget,
    SdkVersion,
    StorageError,
    VersionCatalog,
};

// Port types - interfaces for external systems
pub use ports::{ObjectListing, ReleaseChannel, ReleaseService, VersionCatalogService};

// Service implementations - business logic
pub use services::{ReleaseServiceImpl, VersionCatalogServiceImpl};

// Application factory and configuration
pub use app::{
    create_gcs_app, create_object_store_app, AppBuilder, AppConfig, AppDependencies, AppError,
    AppServices, ListingBackend,
};

// Adapter types - infrastructure implementations
pub use adapters::{
    inbound::output::{render_versions_json, write_versions_json, OutputError},
    outbound::{
        channel::ComponentsManifestClient,
        storage::{ApacheObjectStoreListingAdapter, GcsJsonListingAdapter},
    },
};

// Public facade for easy construction
pub mod prelude {
    pub use crate::{
        create_gcs_app, create_object_store_app, AppBuilder, AppServices, BucketName,
        ListingQuery, ObjectListing, ReleaseService, SdkVersion, VersionCatalog,
        VersionCatalogService,
    };
}
