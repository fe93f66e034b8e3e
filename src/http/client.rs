//! Identity Service HTTP Client
//!
//! One configured `reqwest` client per application context. Requests are
//! prepared, passed through the registered interceptors, then sent.
//!
//! Nothing is added to the wire beyond what callers and interceptors set.
//! Each send gets a local request id that only appears in log lines.

use reqwest::header::HeaderMap;
use reqwest::{Client, Method};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use super::error::{ApiError, ApiResult, ErrorBody};
use super::interceptor::{OutgoingRequest, RequestInterceptor};
use crate::config::ApiConfig;

/// HTTP client bound to one base address
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    interceptors: Vec<Arc<dyn RequestInterceptor>>,
}

impl HttpClient {
    /// Create a client for the configured base address
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        #[allow(unused_mut)]
        let mut builder = Client::builder();

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.clone(),
            interceptors: Vec::new(),
        })
    }

    /// Register an interceptor; they run in registration order
    pub fn with_interceptor<I: RequestInterceptor + 'static>(mut self, interceptor: I) -> Self {
        self.interceptors.push(Arc::new(interceptor));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a path, with exactly one slash at the seam
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Build a request and run every interceptor over it
    pub fn prepare(
        &self,
        method: Method,
        path: &str,
        headers: HeaderMap,
        body: Option<Value>,
    ) -> ApiResult<OutgoingRequest> {
        let mut request = OutgoingRequest {
            method,
            path: path.to_string(),
            headers,
            body,
        };

        for interceptor in &self.interceptors {
            interceptor.intercept(&mut request)?;
        }

        Ok(request)
    }

    /// POST a JSON body, returning the raw JSON response
    pub async fn post<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        headers: HeaderMap,
    ) -> ApiResult<Value> {
        let body = serde_json::to_value(body)?;
        let request = self.prepare(Method::POST, path, headers, Some(body))?;
        self.send(request).await
    }

    /// Send a prepared request
    pub async fn send(&self, request: OutgoingRequest) -> ApiResult<Value> {
        let url = self.url(&request.path);
        let request_id = uuid::Uuid::new_v4();

        tracing::debug!(
            request_id = %request_id,
            method = %request.method,
            path = %request.path,
            "Sending request"
        );

        let mut builder = self
            .client
            .request(request.method, &url)
            .headers(request.headers);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(ApiError::from_transport)?;
        let status = response.status();

        if status.is_success() {
            let text = response.text().await.map_err(ApiError::from_transport)?;
            if text.trim().is_empty() {
                return Ok(Value::Null);
            }
            Ok(serde_json::from_str(&text)?)
        } else {
            let text = response.text().await.unwrap_or_default();
            let body = ErrorBody::parse(&text);

            tracing::debug!(
                request_id = %request_id,
                status = status.as_u16(),
                "Request returned error status"
            );

            Err(ApiError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::extract_api_error;
    use crate::testing::MockIdentity;
    use serde_json::json;

    use reqwest::header::HeaderValue;

    struct StaticHeader(&'static str);

    impl RequestInterceptor for StaticHeader {
        fn intercept(&self, request: &mut OutgoingRequest) -> ApiResult<()> {
            request
                .headers
                .insert("x-client", HeaderValue::from_static(self.0));
            Ok(())
        }
    }

    fn client_for(base_url: &str) -> HttpClient {
        HttpClient::new(&ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_url_joining() {
        let client = client_for("https://iapitest.eva.guru/");
        assert_eq!(
            client.url("/oauth/token"),
            "https://iapitest.eva.guru/oauth/token"
        );
        assert_eq!(
            client.url("user/user-information"),
            "https://iapitest.eva.guru/user/user-information"
        );

        let client = client_for("http://localhost:8080");
        assert_eq!(client.url("/oauth/token"), "http://localhost:8080/oauth/token");
    }

    #[test]
    fn test_prepare_runs_interceptors_in_order() {
        let client = client_for("http://localhost:8080")
            .with_interceptor(StaticHeader("first"))
            .with_interceptor(StaticHeader("second"));

        let request = client
            .prepare(Method::POST, "/anything", HeaderMap::new(), None)
            .unwrap();

        assert_eq!(request.header("x-client"), Some("second"));
        assert_eq!(request.headers.len(), 1);
    }

    #[tokio::test]
    async fn test_post_returns_raw_json() {
        let mock = MockIdentity::new();
        mock.respond("/echo", 200, json!({"Data": {"value": 7}}));
        let client = client_for(&mock.spawn().await).with_interceptor(StaticHeader("cli"));

        let value = client
            .post("/echo", &json!({"email": "a@b.c"}), HeaderMap::new())
            .await
            .unwrap();

        assert_eq!(value["Data"]["value"], 7);

        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].body, json!({"email": "a@b.c"}));
        assert_eq!(requests[0].custom_headers(), vec!["x-client".to_string()]);
    }

    #[tokio::test]
    async fn test_error_status_keeps_description() {
        let mock = MockIdentity::new();
        mock.respond(
            "/oauth/token",
            400,
            json!({"error": "invalid_grant", "error_description": "invalid_grant"}),
        );
        let client = client_for(&mock.spawn().await);

        let err = client
            .post("/oauth/token", &json!({}), HeaderMap::new())
            .await
            .unwrap_err();

        match err {
            ApiError::Status { status, body } => {
                assert_eq!(status, 400);
                assert_eq!(
                    body.and_then(|b| b.error_description).as_deref(),
                    Some("invalid_grant")
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_error_status_with_non_string_error_field() {
        let mock = MockIdentity::new();
        mock.respond(
            "/oauth/token",
            400,
            json!({"error": true, "error_description": "invalid_grant"}),
        );
        let client = client_for(&mock.spawn().await);

        let err = client
            .post("/oauth/token", &json!({}), HeaderMap::new())
            .await
            .unwrap_err();

        assert_eq!(extract_api_error(&err, "Login failed"), "invalid_grant");
    }

    #[tokio::test]
    async fn test_plain_client_sends_no_custom_headers() {
        let mock = MockIdentity::new();
        mock.respond("/oauth/token", 200, json!({}));
        let client = client_for(&mock.spawn().await);

        client
            .post("/oauth/token", &json!({}), HeaderMap::new())
            .await
            .unwrap();

        assert!(mock.requests()[0].custom_headers().is_empty());
    }

    #[tokio::test]
    async fn test_error_status_with_unstructured_body() {
        let mock = MockIdentity::new();
        mock.respond_raw("/oops", 502, "<html>Bad Gateway</html>");
        let client = client_for(&mock.spawn().await);

        let err = client
            .post("/oops", &json!({}), HeaderMap::new())
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Status { status: 502, body: None }));
    }

    #[tokio::test]
    async fn test_success_with_invalid_json_is_decode_error() {
        let mock = MockIdentity::new();
        mock.respond_raw("/broken", 200, "not json");
        let client = client_for(&mock.spawn().await);

        let err = client
            .post("/broken", &json!({}), HeaderMap::new())
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_success_with_empty_body_is_null() {
        let mock = MockIdentity::new();
        mock.respond_raw("/empty", 200, "");
        let client = client_for(&mock.spawn().await);

        let value = client
            .post("/empty", &json!({}), HeaderMap::new())
            .await
            .unwrap();

        assert!(value.is_null());
    }

    #[tokio::test]
    async fn test_connection_refused_is_unavailable() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(&format!("http://{}/", addr));
        let err = client
            .post("/oauth/token", &json!({}), HeaderMap::new())
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Unavailable));
    }
}
