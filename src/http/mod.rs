//! HTTP layer
//!
//! The client used for every call to the identity service, its interceptor
//! hook, and the typed errors it returns.

mod client;
mod error;
mod interceptor;

pub use client::HttpClient;
pub use error::{extract_api_error, ApiError, ApiResult, ErrorBody};
pub use interceptor::{
    bearer_value, BearerTokenInterceptor, OutgoingRequest, RequestInterceptor, TOKEN_PATH,
};
