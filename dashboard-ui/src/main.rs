//! Evadash Dashboard
//!
//! Seller dashboard front end built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Authentication goes through the `evadash` auth core, whose
//! HTTP client talks to the identity service; the router maps `/` to the
//! login page and `/dashboard` to the dashboard.

use evadash::{AuthModule, Config};
use leptos::*;

mod app;
mod components;
mod pages;
mod state;

/// Local storage key overriding the identity service address
const API_URL_KEY: &str = "evadash_api_url";

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let auth = match AuthModule::from_config(&ui_config()) {
        Ok(auth) => auth,
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to create HTTP client: {}", e).into());
            return;
        }
    };

    mount_to_body(move || view! { <app::App auth=auth.clone() /> });
}

/// Default configuration, with the API address taken from local storage if set
fn ui_config() -> Config {
    let mut config = Config::default();

    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten());

    if let Some(url) = stored {
        config.api.base_url = url;
    }

    config
}
