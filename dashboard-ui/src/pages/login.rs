//! Login Page
//!
//! Email/password form. A successful login navigates to the dashboard.

use evadash::Page;
use leptos::*;
use leptos_router::use_navigate;

use crate::components::InlineLoading;
use crate::state::AuthContext;

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let auth = use_context::<AuthContext>().expect("AuthContext not found");
    let navigate = use_navigate();

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let pending = auth.pending;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email = email.get();
        let password = password.get();

        if !credentials_ready(&email, &password) {
            auth.show_error("Enter your email and password");
            return;
        }

        let auth = auth.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match auth.login(email, password).await {
                Ok(()) => navigate(Page::Dashboard.path(), Default::default()),
                Err(e) => {
                    web_sys::console::error_1(&format!("Login failed: {}", e).into());
                    auth.show_error(e.message());
                }
            }
        });
    };

    view! {
        <div class="flex items-center justify-center min-h-[70vh]">
            <form on:submit=on_submit class="w-full max-w-sm bg-gray-800 rounded-xl p-8 space-y-6">
                <div>
                    <h1 class="text-2xl font-bold">"Sign in"</h1>
                    <p class="text-gray-400 mt-1">"Use your seller account"</p>
                </div>

                <label class="block space-y-1">
                    <span class="text-sm text-gray-300">"Email"</span>
                    <input
                        type="email"
                        autocomplete="username"
                        class="w-full bg-gray-700 rounded-lg px-3 py-2 focus:outline-none focus:ring-2 focus:ring-primary-500"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>

                <label class="block space-y-1">
                    <span class="text-sm text-gray-300">"Password"</span>
                    <input
                        type="password"
                        autocomplete="current-password"
                        class="w-full bg-gray-700 rounded-lg px-3 py-2 focus:outline-none focus:ring-2 focus:ring-primary-500"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>

                <button
                    type="submit"
                    disabled=move || pending.get()
                    class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                           transition-colors flex items-center justify-center space-x-2"
                >
                    {move || if pending.get() {
                        view! {
                            <InlineLoading />
                            <span>"Signing in..."</span>
                        }.into_view()
                    } else {
                        view! { <span>"Sign in"</span> }.into_view()
                    }}
                </button>
            </form>
        </div>
    }
}

/// Both fields filled in (surrounding whitespace ignored)
fn credentials_ready(email: &str, password: &str) -> bool {
    !email.trim().is_empty() && !password.is_empty()
}
