pub mod listing_query;
pub mod release;
pub mod version_catalog;

pub use listing_query::{ListingQuery, LINUX_X86_64_ARCHIVE_GLOB};
pub use release::{sdk_architecture, Platform, ReleaseTarget, RELEASE_DOWNLOAD_BASE};
pub use version_catalog::{extract_version, VersionCatalog};
