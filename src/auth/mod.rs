//! Authentication
//!
//! The auth state (access token and user profile), its two mutations, and
//! the `login` / `fetch_user_info` actions that drive it.

mod models;
mod module;
mod state;

pub use models::{TokenRequest, UserInfo};
pub use module::{AuthError, AuthModule, LOGIN_FAILED, USER_INFO_FAILED, USER_INFO_PATH};
pub use state::{AuthState, AuthStore};
