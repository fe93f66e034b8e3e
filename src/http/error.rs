//! HTTP layer error types
//!
//! Failures of calls to the identity service, plus the normalizer that turns
//! any of them into a single user-facing message.

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when calling the identity service
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request did not complete in the configured time
    #[error("Request timeout")]
    Timeout,

    /// Could not connect to the service
    #[error("Service unavailable")]
    Unavailable,

    /// Any other transport failure
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-success status, with the decoded error document if there was one
    #[error("API error {status}")]
    Status {
        status: u16,
        body: Option<ErrorBody>,
    },

    /// Response body did not have the expected shape
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// User information response lacked the user or its stores
    #[error("User data or store info is missing")]
    MissingUserData,

    /// A header value could not be encoded
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

impl ApiError {
    /// Map a transport error the same way for every call site
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return ApiError::Timeout;
        }
        // reqwest only classifies connect failures on native targets
        #[cfg(not(target_arch = "wasm32"))]
        if err.is_connect() {
            return ApiError::Unavailable;
        }
        ApiError::Request(err)
    }

    /// HTTP status code, for status failures
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// OAuth-style error document returned with failed calls
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: Option<String>,
    pub error_description: Option<String>,
}

impl ErrorBody {
    /// Read the error document from a response body.
    ///
    /// Any JSON object qualifies. Fields are taken only when they hold
    /// strings, so an odd `error` never hides a usable `error_description`.
    pub fn parse(text: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(text).ok()?;
        if !value.is_object() {
            return None;
        }

        let field = |name: &str| value.get(name).and_then(Value::as_str).map(str::to_string);
        Some(Self {
            error: field("error"),
            error_description: field("error_description"),
        })
    }
}

/// Result type alias for HTTP calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Extract the message to show for a failed call.
///
/// Returns the service's `error_description` when the failure carries one,
/// otherwise `fallback`.
pub fn extract_api_error(error: &ApiError, fallback: &str) -> String {
    match error {
        ApiError::Status {
            body:
                Some(ErrorBody {
                    error_description: Some(description),
                    ..
                }),
            ..
        } => description.clone(),
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_error(body: Option<ErrorBody>) -> ApiError {
        ApiError::Status { status: 400, body }
    }

    #[test]
    fn test_description_is_returned_verbatim() {
        let err = status_error(Some(ErrorBody {
            error: Some("invalid_grant".to_string()),
            error_description: Some("The user credentials are incorrect.".to_string()),
        }));
        assert_eq!(
            extract_api_error(&err, "Login failed"),
            "The user credentials are incorrect."
        );
    }

    #[test]
    fn test_fallback_without_description() {
        let err = status_error(Some(ErrorBody {
            error: Some("invalid_grant".to_string()),
            error_description: None,
        }));
        assert_eq!(extract_api_error(&err, "Login failed"), "Login failed");

        let err = status_error(None);
        assert_eq!(extract_api_error(&err, "Login failed"), "Login failed");
    }

    #[test]
    fn test_fallback_for_non_status_errors() {
        assert_eq!(
            extract_api_error(&ApiError::Timeout, "Failed to fetch user info"),
            "Failed to fetch user info"
        );
        assert_eq!(
            extract_api_error(&ApiError::MissingUserData, "Failed to fetch user info"),
            "Failed to fetch user info"
        );

        let decode = serde_json::from_str::<Value>("not json").unwrap_err();
        assert_eq!(
            extract_api_error(&ApiError::Decode(decode), "Login failed"),
            "Login failed"
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ApiError::MissingUserData.to_string(),
            "User data or store info is missing"
        );
        assert_eq!(
            ApiError::Status { status: 401, body: None }.to_string(),
            "API error 401"
        );
        assert_eq!(ApiError::Status { status: 401, body: None }.status(), Some(401));
        assert_eq!(ApiError::Unavailable.status(), None);
    }

    #[test]
    fn test_error_body_tolerates_extra_fields() {
        let body = ErrorBody::parse(
            r#"{"error":"invalid_grant","error_description":"invalid_grant","trace":"x"}"#,
        )
        .unwrap();
        assert_eq!(body.error.as_deref(), Some("invalid_grant"));
        assert_eq!(body.error_description.as_deref(), Some("invalid_grant"));
    }

    #[test]
    fn test_error_body_ignores_non_string_error() {
        for text in [
            r#"{"error":true,"error_description":"invalid_grant"}"#,
            r#"{"error":{"code":7},"error_description":"invalid_grant"}"#,
            r#"{"error":400,"error_description":"invalid_grant"}"#,
        ] {
            let body = ErrorBody::parse(text).unwrap();
            assert_eq!(body.error, None);
            assert_eq!(
                extract_api_error(&status_error(Some(body)), "Login failed"),
                "invalid_grant"
            );
        }
    }

    #[test]
    fn test_error_body_requires_an_object() {
        assert_eq!(ErrorBody::parse("<html>Bad Gateway</html>"), None);
        assert_eq!(ErrorBody::parse(r#""invalid_grant""#), None);
        assert_eq!(ErrorBody::parse("[1, 2]"), None);

        let body = ErrorBody::parse(r#"{"error_description":42}"#).unwrap();
        assert_eq!(
            extract_api_error(&status_error(Some(body)), "Login failed"),
            "Login failed"
        );
    }
}
