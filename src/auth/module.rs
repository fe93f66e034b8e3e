//! Auth actions
//!
//! `login` and `fetch_user_info` talk to the identity service and commit
//! their results through the store's mutations, only on success.

use reqwest::header::{HeaderMap, AUTHORIZATION};
use serde_json::Value;
use thiserror::Error;

use super::models::{
    TokenRequest, TokenResponse, UserInfo, UserInformationRequest, UserInformationResponse,
};
use super::state::AuthStore;
use crate::config::{Config, OAuthConfig};
use crate::http::{
    bearer_value, extract_api_error, ApiError, ApiResult, BearerTokenInterceptor, HttpClient,
    TOKEN_PATH,
};

pub const USER_INFO_PATH: &str = "/user/user-information";

pub const LOGIN_FAILED: &str = "Login failed";
pub const USER_INFO_FAILED: &str = "Failed to fetch user info";

/// A failed action, reduced to the message to show the user
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct AuthError {
    message: String,
}

impl AuthError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Authentication context: the HTTP client plus the state it authenticates
#[derive(Clone)]
pub struct AuthModule {
    http: HttpClient,
    store: AuthStore,
    oauth: OAuthConfig,
}

impl AuthModule {
    pub fn new(http: HttpClient, store: AuthStore, oauth: OAuthConfig) -> Self {
        Self { http, store, oauth }
    }

    /// Build a fresh store and a client whose interceptor reads it
    pub fn from_config(config: &Config) -> ApiResult<Self> {
        let store = AuthStore::new();
        let http = HttpClient::new(&config.api)?
            .with_interceptor(BearerTokenInterceptor::new(store.clone()));
        Ok(Self::new(http, store, config.oauth.clone()))
    }

    pub fn store(&self) -> &AuthStore {
        &self.store
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Exchange credentials for an access token, then load the user profile.
    ///
    /// Returns the raw token response. A token committed before the profile
    /// fetch failed stays committed.
    pub async fn login(&self, email: &str, password: &str) -> Result<Value, AuthError> {
        tracing::info!("Logging in");
        tracing::debug!(email = %email, "Requesting access token");

        let response = self
            .acquire_token(email, password)
            .await
            .map_err(|e| normalize(e, LOGIN_FAILED))?;

        if let Err(e) = self.fetch_user_info(email).await {
            // The profile error is already reduced to a message and carries
            // no service body, so login reports its own fallback.
            tracing::warn!(error = %e, "Login aborted after token was stored");
            return Err(AuthError::new(LOGIN_FAILED));
        }

        tracing::info!("Login succeeded");
        Ok(response)
    }

    /// Load and store the user profile for the held token.
    ///
    /// Without a token this does nothing and succeeds.
    pub async fn fetch_user_info(&self, email: &str) -> Result<(), AuthError> {
        let token = match self.store.access_token() {
            Some(token) if !token.is_empty() => token,
            _ => {
                tracing::debug!("No access token held, skipping user info");
                return Ok(());
            }
        };

        let user = self
            .request_user_info(email, &token)
            .await
            .map_err(|e| normalize(e, USER_INFO_FAILED))?;

        tracing::info!(
            store_id = %user.store_id,
            marketplace = %user.marketplace_name,
            "User info loaded"
        );
        self.store.set_user(user);
        Ok(())
    }

    async fn acquire_token(&self, email: &str, password: &str) -> ApiResult<Value> {
        let body = TokenRequest::new(email, password, &self.oauth);
        let response = self.http.post(TOKEN_PATH, &body, HeaderMap::new()).await?;

        let token: TokenResponse = serde_json::from_value(response.clone())?;
        self.store.set_access_token(token.data.access_token);

        Ok(response)
    }

    async fn request_user_info(&self, email: &str, token: &str) -> ApiResult<UserInfo> {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, bearer_value(token)?);

        let response = self
            .http
            .post(USER_INFO_PATH, &UserInformationRequest { email }, headers)
            .await?;

        serde_json::from_value::<UserInformationResponse>(response)?.into_user_info()
    }
}

fn normalize(error: ApiError, fallback: &str) -> AuthError {
    let message = extract_api_error(&error, fallback);
    tracing::warn!(error = %error, message = %message, "Auth action failed");
    AuthError::new(message)
}
