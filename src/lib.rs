//! # Evadash
//!
//! Authentication core of the Eva seller dashboard: signs a seller in
//! against the OAuth-style token endpoint, loads their store profile, and
//! keeps both in an explicit auth context shared by the HTTP client.
//!
//! ## Modules
//!
//! - [`auth`]: Auth state, its mutations, and the `login` / `fetch_user_info` actions
//! - [`http`]: HTTP client, request interceptors, typed errors and the error normalizer
//! - [`routes`]: The dashboard's route table
//! - [`config`]: TOML and environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use evadash::{AuthModule, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let auth = AuthModule::from_config(&Config::default())?;
//!
//!     auth.login("seller@example.com", "password").await?;
//!
//!     if let Some(user) = auth.store().user() {
//!         println!("Signed in to store {} ({})", user.store_id, user.marketplace_name);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod config;
pub mod http;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
pub mod routes;

#[cfg(test)]
mod testing;

pub use auth::{AuthError, AuthModule, AuthState, AuthStore, UserInfo};
pub use config::{
    generate_default_config, ApiConfig, Config, ConfigError, LoggingConfig, OAuthConfig,
};
pub use http::{
    extract_api_error, ApiError, ApiResult, BearerTokenInterceptor, HttpClient, RequestInterceptor,
};
pub use routes::Page;
