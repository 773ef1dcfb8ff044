mod catalog_service;
mod release_service;

pub use catalog_service::VersionCatalogService;
pub use release_service::ReleaseService;
