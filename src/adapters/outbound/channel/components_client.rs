use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::{
    domain::{
        errors::{ChannelError, ChannelResult},
        value_objects::SdkVersion,
    },
    ports::channel::ReleaseChannel,
    USER_AGENT,
};

/// JSON manifest describing the components on the rapid release channel
pub const COMPONENTS_MANIFEST_URL: &str =
    "https://dl.google.com/dl/cloudsdk/channels/rapid/components-2.json";

/// Attempts made before the last manifest error is returned
const MAX_ATTEMPTS: u32 = 3;

/// Delay before the second attempt, doubled for every attempt after it
const INITIAL_RETRY_DELAY: Duration = Duration::from_millis(200);

#[derive(Debug, Deserialize)]
struct ComponentsManifest {
    #[serde(default)]
    version: Option<String>,
}

/// Reads the latest release version from the components manifest
pub struct ComponentsManifestClient {
    client: Client,
    url: String,
}

impl ComponentsManifestClient {
    pub fn new(url: impl Into<String>) -> Result<Self, ChannelError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ChannelError::Transport {
                message: e.to_string(),
            })?;
        Ok(Self::with_client(client, url))
    }

    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

fn parse_manifest(body: &str) -> ChannelResult<SdkVersion> {
    let manifest: ComponentsManifest =
        serde_json::from_str(body).map_err(|e| ChannelError::InvalidManifest {
            message: e.to_string(),
        })?;

    match manifest.version {
        Some(version) if !version.is_empty() => {
            SdkVersion::new(version).map_err(|e| ChannelError::InvalidManifest {
                message: e.to_string(),
            })
        }
        _ => Err(ChannelError::InvalidManifest {
            message: "missing version".to_string(),
        }),
    }
}

impl ComponentsManifestClient {
    async fn fetch_once(&self) -> ChannelResult<SdkVersion> {
        debug!(url = %self.url, "fetching components manifest");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| ChannelError::Transport {
                message: e.to_string(),
            })?;

        if response.status() != StatusCode::OK {
            return Err(ChannelError::UnexpectedStatus {
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| ChannelError::Transport {
            message: e.to_string(),
        })?;

        parse_manifest(&body)
    }
}

#[async_trait]
impl ReleaseChannel for ComponentsManifestClient {
    /// Any failure is retried, up to `MAX_ATTEMPTS` in total
    async fn latest_version(&self) -> ChannelResult<SdkVersion> {
        let mut delay = INITIAL_RETRY_DELAY;
        let mut attempt = 1;

        loop {
            match self.fetch_once().await {
                Ok(version) => return Ok(version),
                Err(e) if attempt < MAX_ATTEMPTS => {
                    debug!(attempt, error = %e, "components manifest request failed, retrying");
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
