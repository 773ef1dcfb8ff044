pub mod channel;
pub mod services;
pub mod storage;

// Re-export all port traits for convenience
pub use channel::ReleaseChannel;
pub use services::{ReleaseService, VersionCatalogService};
pub use storage::ObjectListing;
