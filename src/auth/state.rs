//! Auth state store
//!
//! Holds the access token and user profile for one application context.
//! Writes go through the two mutations only; readers get clones.

use serde::Serialize;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::models::UserInfo;

/// Snapshot of the authentication state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user: Option<UserInfo>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.as_deref().map_or(false, |t| !t.is_empty())
    }
}

/// Shared handle to the authentication state
#[derive(Debug, Clone, Default)]
pub struct AuthStore {
    inner: Arc<RwLock<AuthState>>,
}

impl AuthStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutation: replace the access token
    pub fn set_access_token(&self, token: impl Into<String>) {
        self.write().access_token = Some(token.into());
    }

    /// Mutation: replace the user profile
    pub fn set_user(&self, user: UserInfo) {
        self.write().user = Some(user);
    }

    pub fn access_token(&self) -> Option<String> {
        self.read().access_token.clone()
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.read().user.clone()
    }

    pub fn snapshot(&self) -> AuthState {
        self.read().clone()
    }

    // A panicking writer cannot leave a half-written field behind, so a
    // poisoned lock still holds a consistent state.
    fn read(&self) -> RwLockReadGuard<'_, AuthState> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, AuthState> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
