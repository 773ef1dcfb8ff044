use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    domain::{
        errors::{ChannelResult, ValidationError},
        models::ReleaseTarget,
        value_objects::SdkVersion,
    },
    ports::{channel::ReleaseChannel, services::ReleaseService},
};

/// Implementation of ReleaseService
#[derive(Clone)]
pub struct ReleaseServiceImpl {
    channel: Arc<dyn ReleaseChannel>,
}

impl ReleaseServiceImpl {
    pub fn new(channel: Arc<dyn ReleaseChannel>) -> Self {
        Self { channel }
    }
}

#[async_trait]
impl ReleaseService for ReleaseServiceImpl {
    async fn latest_version(&self) -> ChannelResult<SdkVersion> {
        self.channel.latest_version().await
    }

    fn release_target(
        &self,
        os: &str,
        arch: &str,
        version: &str,
    ) -> Result<ReleaseTarget, ValidationError> {
        let version = SdkVersion::new(version.to_string())?;
        ReleaseTarget::new(os, arch, version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ChannelError;

    struct StaticChannel(Option<&'static str>);

    #[async_trait]
    impl ReleaseChannel for StaticChannel {
        async fn latest_version(&self) -> ChannelResult<SdkVersion> {
            match self.0 {
                Some(v) => Ok(SdkVersion::new(v.to_string()).unwrap()),
                None => Err(ChannelError::UnexpectedStatus { status: 503 }),
            }
        }
    }

    #[tokio::test]
    async fn test_latest_version_passthrough() {
        let service = ReleaseServiceImpl::new(Arc::new(StaticChannel(Some("401.0.0"))));
        assert_eq!(service.latest_version().await.unwrap().as_str(), "401.0.0");

        let service = ReleaseServiceImpl::new(Arc::new(StaticChannel(None)));
        assert!(service.latest_version().await.is_err());
    }

    #[test]
    fn test_release_target() {
        let service = ReleaseServiceImpl::new(Arc::new(StaticChannel(None)));

        let target = service.release_target("linux", "x64", "400.1.2").unwrap();
        assert!(target
            .release_url()
            .ends_with("google-cloud-sdk-400.1.2-linux-x86_64.tar.gz"));

        assert!(matches!(
            service.release_target("linux", "x64", "NOPE"),
            Err(ValidationError::MalformedSdkVersion(_))
        ));
        assert!(matches!(
            service.release_target("temple", "x64", "400.1.2"),
            Err(ValidationError::UnsupportedOs(_))
        ));
    }
}
