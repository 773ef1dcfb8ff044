use crate::domain::{
    errors::{ChannelResult, ValidationError},
    models::ReleaseTarget,
    value_objects::SdkVersion,
};
use async_trait::async_trait;

/// Service port for release lookups
#[async_trait]
pub trait ReleaseService: Send + Sync + 'static {
    /// Latest SDK version announced by the release channel
    async fn latest_version(&self) -> ChannelResult<SdkVersion>;

    /// Resolve the archive for an OS, architecture and version
    fn release_target(
        &self,
        os: &str,
        arch: &str,
        version: &str,
    ) -> Result<ReleaseTarget, ValidationError>;
}
