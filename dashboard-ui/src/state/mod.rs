//! State Management
//!
//! Auth context and error toast provided to the component tree.

pub mod auth;
pub mod toast;

pub use auth::{provide_auth_context, AuthContext};
