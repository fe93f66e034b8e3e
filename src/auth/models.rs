//! Auth data model and identity service wire types

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::OAuthConfig;
use crate::http::{ApiError, ApiResult};

/// Reduced profile of the signed-in seller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub store_id: String,
    pub marketplace_name: String,
    /// Declared for callers but never filled from the user information response
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Password grant body for the token endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TokenRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub grant_type: &'a str,
    pub scope: &'a str,
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub redirect_uri: &'a str,
}

impl<'a> TokenRequest<'a> {
    pub fn new(email: &'a str, password: &'a str, oauth: &'a OAuthConfig) -> Self {
        Self {
            email,
            password,
            grant_type: &oauth.grant_type,
            scope: &oauth.scope,
            client_id: &oauth.client_id,
            client_secret: &oauth.client_secret,
            redirect_uri: &oauth.redirect_uri,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct TokenResponse {
    pub data: TokenData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct TokenData {
    pub access_token: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct UserInformationRequest<'a> {
    pub email: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct UserInformationResponse {
    pub data: UserInformationData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserInformationData {
    #[serde(default)]
    pub user: Option<RemoteUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RemoteUser {
    #[serde(default)]
    pub user_id: Value,
    #[serde(default)]
    pub store: Option<Vec<RemoteStore>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RemoteStore {
    #[serde(default)]
    pub store_id: Option<String>,
    #[serde(default)]
    pub marketplace_name: Option<String>,
}

impl UserInformationResponse {
    /// Derive the stored profile from the first store of a user with an id
    pub fn into_user_info(self) -> ApiResult<UserInfo> {
        let user = self.data.user.ok_or(ApiError::MissingUserData)?;
        if !is_truthy(&user.user_id) {
            return Err(ApiError::MissingUserData);
        }

        let store = user
            .store
            .and_then(|stores| stores.into_iter().next())
            .ok_or(ApiError::MissingUserData)?;

        match (store.store_id, store.marketplace_name) {
            (Some(store_id), Some(marketplace_name)) => Ok(UserInfo {
                store_id,
                marketplace_name,
                user_id: None,
            }),
            _ => Err(ApiError::MissingUserData),
        }
    }
}

/// JSON truthiness: ids may come back as strings or numbers
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
