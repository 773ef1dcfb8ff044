use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::{
    adapters::outbound::storage::error::StoreError,
    domain::{
        errors::{StorageError, StorageResult},
        models::ListingQuery,
        value_objects::{BucketName, ObjectName},
    },
    ports::storage::ObjectListing,
    USER_AGENT,
};

/// Public Cloud Storage endpoint
pub const DEFAULT_GCS_ENDPOINT: &str = "https://storage.googleapis.com";

/// One page of `objects.list`, trimmed to the fields we ask for
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ObjectsPage {
    #[serde(default)]
    items: Vec<ObjectResource>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ObjectResource {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Lists a bucket anonymously through the Cloud Storage JSON API
///
/// Filtering happens server-side: the query's glob goes out as `matchGlob`
/// and a `fields` selector keeps responses down to object names.
pub struct GcsJsonListingAdapter {
    client: Client,
    endpoint: String,
    bucket: BucketName,
}

impl GcsJsonListingAdapter {
    /// Create an adapter with its own anonymous HTTP client
    pub fn new(endpoint: impl Into<String>, bucket: BucketName) -> Result<Self, StoreError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::with_client(client, endpoint, bucket))
    }

    pub fn with_client(client: Client, endpoint: impl Into<String>, bucket: BucketName) -> Self {
        let endpoint = endpoint.into().trim_end_matches('/').to_string();
        Self {
            client,
            endpoint,
            bucket,
        }
    }

    fn objects_url(&self) -> String {
        format!("{}/storage/v1/b/{}/o", self.endpoint, self.bucket)
    }

    async fn fetch_page(
        &self,
        query: &ListingQuery,
        page_token: Option<&str>,
    ) -> StorageResult<ObjectsPage> {
        let mut params: Vec<(&str, &str)> = Vec::with_capacity(4);
        if let Some(prefix) = query.prefix() {
            params.push(("prefix", prefix));
        }
        if let Some(glob) = query.match_glob() {
            params.push(("matchGlob", glob));
        }
        params.push(("fields", query.fields_selector()));
        if let Some(token) = page_token {
            params.push(("pageToken", token));
        }

        let response = self
            .client
            .get(self.objects_url())
            .query(&params)
            .send()
            .await
            .map_err(StoreError::from)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.status_error(status.as_u16(), &body));
        }

        let body = response.bytes().await.map_err(StoreError::from)?;
        let page = serde_json::from_slice(&body).map_err(StoreError::from)?;
        Ok(page)
    }

    fn status_error(&self, status: u16, body: &str) -> StorageError {
        match status {
            404 => StorageError::BucketNotFound {
                bucket: self.bucket.clone(),
            },
            401 | 403 => StorageError::AccessDenied {
                bucket: self.bucket.clone(),
                status,
            },
            _ => StoreError::http(status, error_message(body)).into(),
        }
    }
}

/// Pull the human readable message out of an API error body
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) => body.trim().to_string(),
    }
}

#[async_trait]
impl ObjectListing for GcsJsonListingAdapter {
    async fn list_object_names(&self, query: &ListingQuery) -> StorageResult<Vec<ObjectName>> {
        let mut names = Vec::new();
        let mut page_token: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let page = self.fetch_page(query, page_token.as_deref()).await?;
            pages += 1;
            debug!(
                bucket = %self.bucket,
                page = pages,
                items = page.items.len(),
                "fetched listing page"
            );

            for item in page.items {
                match ObjectName::new(item.name) {
                    Ok(name) => names.push(name),
                    Err(e) => {
                        debug!(bucket = %self.bucket, error = %e, "skipping unusable object name")
                    }
                }
            }

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        info!(bucket = %self.bucket, pages, objects = names.len(), "listing complete");
        Ok(names)
    }

    fn describe(&self) -> String {
        format!("gs://{} via {}", self.bucket, self.endpoint)
    }
}
