use crate::domain::{errors::ChannelResult, value_objects::SdkVersion};
use async_trait::async_trait;

/// Port for the channel that announces the current SDK release
#[async_trait]
pub trait ReleaseChannel: Send + Sync + 'static {
    /// Latest version published on the channel
    async fn latest_version(&self) -> ChannelResult<SdkVersion>;
}
