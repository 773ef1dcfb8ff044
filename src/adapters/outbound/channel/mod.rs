pub mod components_client;

pub use components_client::{ComponentsManifestClient, COMPONENTS_MANIFEST_URL};
