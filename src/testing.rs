//! In-process mock of the identity service for tests
//!
//! Serves canned responses per path and records every request it receives.

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::Response,
    Router,
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::config::ApiConfig;

/// Headers `reqwest` sets on its own for a JSON POST
const TRANSPORT_HEADERS: [&str; 5] = [
    "host",
    "accept",
    "accept-encoding",
    "content-type",
    "content-length",
];

/// A request as seen by the mock service
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    /// Lowercased header names, in arrival order
    pub header_names: Vec<String>,
    pub body: Value,
}

impl RecordedRequest {
    /// Header names beyond the ones the transport adds
    pub fn custom_headers(&self) -> Vec<String> {
        self.header_names
            .iter()
            .filter(|name| !TRANSPORT_HEADERS.contains(&name.as_str()))
            .cloned()
            .collect()
    }
}

#[derive(Default)]
struct MockInner {
    responses: HashMap<String, (u16, String)>,
    requests: Vec<RecordedRequest>,
}

/// Mock identity service
#[derive(Clone, Default)]
pub struct MockIdentity {
    inner: Arc<Mutex<MockInner>>,
}

impl MockIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `path` with `status` and a JSON body
    pub fn respond(&self, path: &str, status: u16, body: Value) -> &Self {
        self.respond_raw(path, status, &body.to_string())
    }

    /// Answer `path` with `status` and a raw body
    pub fn respond_raw(&self, path: &str, status: u16, body: &str) -> &Self {
        self.inner
            .lock()
            .unwrap()
            .responses
            .insert(path.to_string(), (status, body.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn hits(&self, path: &str) -> usize {
        self.requests().iter().filter(|r| r.path == path).count()
    }

    /// Bind to an ephemeral port and serve in the background
    pub async fn spawn(&self) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = Router::new().fallback(handle).with_state(self.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}/", addr)
    }

    /// Spawn and return an `ApiConfig` pointing at the mock
    pub async fn api_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.spawn().await,
            ..ApiConfig::default()
        }
    }
}

async fn handle(
    State(mock): State<MockIdentity>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let header_str = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string())
    };

    let recorded = RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        authorization: header_str("authorization"),
        header_names: headers.keys().map(|name| name.as_str().to_string()).collect(),
        body: serde_json::from_str(&body).unwrap_or(Value::Null),
    };

    let mut inner = mock.inner.lock().unwrap();
    inner.requests.push(recorded);

    let (status, body) = inner
        .responses
        .get(uri.path())
        .cloned()
        .unwrap_or((404, String::new()));

    Response::builder()
        .status(StatusCode::from_u16(status).unwrap())
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}
