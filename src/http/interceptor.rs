//! Request interceptors
//!
//! Hooks that run over every prepared request before it is sent.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Method;

use super::error::ApiResult;
use crate::auth::AuthStore;

/// Token acquisition endpoint; requests whose path contains it stay unauthenticated
pub const TOKEN_PATH: &str = "/oauth/token";

/// A request after the caller built it and before it hits the wire
#[derive(Debug, Clone)]
pub struct OutgoingRequest {
    pub method: Method,
    /// Path relative to the client's base address
    pub path: String,
    pub headers: HeaderMap,
    pub body: Option<serde_json::Value>,
}

impl OutgoingRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Inspects or rewrites every outgoing request.
///
/// Interceptors run synchronously in registration order and must not block.
pub trait RequestInterceptor: Send + Sync {
    fn intercept(&self, request: &mut OutgoingRequest) -> ApiResult<()>;
}

/// Build an `Authorization: Bearer <token>` value
pub fn bearer_value(token: &str) -> ApiResult<HeaderValue> {
    Ok(HeaderValue::from_str(&format!("Bearer {}", token))?)
}

/// Attaches the stored access token to every request except token acquisition
#[derive(Clone)]
pub struct BearerTokenInterceptor {
    store: AuthStore,
}

impl BearerTokenInterceptor {
    pub fn new(store: AuthStore) -> Self {
        Self { store }
    }
}

impl RequestInterceptor for BearerTokenInterceptor {
    fn intercept(&self, request: &mut OutgoingRequest) -> ApiResult<()> {
        if request.path.contains(TOKEN_PATH) {
            tracing::debug!(path = %request.path, "Token request, not attaching bearer");
            return Ok(());
        }

        match self.store.access_token() {
            Some(token) if !token.is_empty() => {
                request.headers.insert(AUTHORIZATION, bearer_value(&token)?);
            }
            _ => {
                tracing::debug!(
                    path = %request.path,
                    "No access token held, sending unauthenticated"
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(path: &str) -> OutgoingRequest {
        OutgoingRequest::new(Method::POST, path)
    }

    #[test]
    fn test_token_path_never_gets_authorization() {
        let store = AuthStore::new();
        store.set_access_token("tok123");
        let interceptor = BearerTokenInterceptor::new(store);

        let mut request = post("/oauth/token");
        interceptor.intercept(&mut request).unwrap();
        assert!(request.header("authorization").is_none());

        let mut request = post("/v2/oauth/token?refresh=1");
        interceptor.intercept(&mut request).unwrap();
        assert!(request.header("authorization").is_none());
    }

    #[test]
    fn test_other_paths_get_bearer_when_token_held() {
        let store = AuthStore::new();
        store.set_access_token("tok123");
        let interceptor = BearerTokenInterceptor::new(store);

        let mut request = post("/user/user-information");
        interceptor.intercept(&mut request).unwrap();
        assert_eq!(request.header("authorization"), Some("Bearer tok123"));
        assert_eq!(request.headers.get_all(AUTHORIZATION).iter().count(), 1);
    }

    #[test]
    fn test_stored_token_replaces_existing_header() {
        let store = AuthStore::new();
        store.set_access_token("fresh");
        let interceptor = BearerTokenInterceptor::new(store);

        let mut request = post("/user/user-information");
        request
            .headers
            .insert(AUTHORIZATION, bearer_value("stale").unwrap());
        interceptor.intercept(&mut request).unwrap();
        assert_eq!(request.header("authorization"), Some("Bearer fresh"));
    }

    #[test]
    fn test_no_token_leaves_request_untouched() {
        let interceptor = BearerTokenInterceptor::new(AuthStore::new());

        let mut request = post("/user/user-information");
        interceptor.intercept(&mut request).unwrap();
        assert!(request.headers.is_empty());
    }

    #[test]
    fn test_interceptor_reads_token_at_request_time() {
        let store = AuthStore::new();
        let interceptor = BearerTokenInterceptor::new(store.clone());

        let mut before = post("/user/user-information");
        interceptor.intercept(&mut before).unwrap();
        assert!(before.header("authorization").is_none());

        store.set_access_token("later");
        let mut after = post("/user/user-information");
        interceptor.intercept(&mut after).unwrap();
        assert_eq!(after.header("authorization"), Some("Bearer later"));
    }

    #[test]
    fn test_unencodable_token_is_an_error() {
        let store = AuthStore::new();
        store.set_access_token("bad\ntoken");
        let interceptor = BearerTokenInterceptor::new(store);

        let mut request = post("/user/user-information");
        assert!(interceptor.intercept(&mut request).is_err());
    }
}
