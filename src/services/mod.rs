mod catalog_service_impl;
mod release_service_impl;

pub use catalog_service_impl::VersionCatalogServiceImpl;
pub use release_service_impl::ReleaseServiceImpl;
