#![allow(dead_code)]

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Stand-in for the Cloud Storage JSON API and the components manifest
#[derive(Clone, Default)]
pub struct MockGcs {
    bucket: String,
    pages: Vec<Vec<String>>,
    failure: Option<u16>,
    manifest: Option<Value>,
    manifest_failures: Arc<AtomicUsize>,
    manifest_requests: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl MockGcs {
    pub fn new(bucket: &str) -> Self {
        Self {
            bucket: bucket.to_string(),
            ..Default::default()
        }
    }

    /// Each call adds one page to the listing
    pub fn with_page(mut self, names: &[&str]) -> Self {
        self.pages
            .push(names.iter().map(|n| n.to_string()).collect());
        self
    }

    pub fn failing_with(mut self, status: u16) -> Self {
        self.failure = Some(status);
        self
    }

    pub fn with_manifest(mut self, manifest: Value) -> Self {
        self.manifest = Some(manifest);
        self
    }

    /// Answer the first `times` manifest requests with 503
    pub fn with_manifest_failures(self, times: usize) -> Self {
        self.manifest_failures.store(times, Ordering::SeqCst);
        self
    }

    pub fn manifest_requests(&self) -> usize {
        self.manifest_requests.load(Ordering::SeqCst)
    }

    /// Query parameters of every listing request received so far
    pub fn requests(&self) -> Vec<HashMap<String, String>> {
        self.requests.lock().unwrap().clone()
    }

    /// Serve on an ephemeral port and return the base URL
    pub async fn spawn(&self) -> String {
        let app = Router::new()
            .route("/storage/v1/b/{bucket}/o", get(list_objects))
            .route("/components-2.json", get(components))
            .with_state(self.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}", addr)
    }
}

async fn list_objects(
    State(mock): State<MockGcs>,
    Path(bucket): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    mock.requests.lock().unwrap().push(params.clone());

    if let Some(status) = mock.failure {
        let status = StatusCode::from_u16(status).unwrap();
        let body = json!({"error": {"code": status.as_u16(), "message": "mock failure"}});
        return (status, Json(body)).into_response();
    }

    if bucket != mock.bucket {
        let body = json!({"error": {"code": 404, "message": "The specified bucket does not exist."}});
        return (StatusCode::NOT_FOUND, Json(body)).into_response();
    }

    let page: usize = params
        .get("pageToken")
        .and_then(|token| token.strip_prefix("page-"))
        .and_then(|n| n.parse().ok())
        .unwrap_or(0);

    let mut body = Map::new();
    if let Some(names) = mock.pages.get(page) {
        if !names.is_empty() {
            let items: Vec<Value> = names.iter().map(|n| json!({ "name": n })).collect();
            body.insert("items".to_string(), Value::Array(items));
        }
    }
    if page + 1 < mock.pages.len() {
        body.insert(
            "nextPageToken".to_string(),
            Value::String(format!("page-{}", page + 1)),
        );
    }

    Json(Value::Object(body)).into_response()
}

async fn components(State(mock): State<MockGcs>) -> Response {
    mock.manifest_requests.fetch_add(1, Ordering::SeqCst);

    let failing = mock
        .manifest_failures
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
        .is_ok();
    if failing {
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    }

    match mock.manifest {
        Some(manifest) => Json(manifest).into_response(),
        None => StatusCode::SERVICE_UNAVAILABLE.into_response(),
    }
}
