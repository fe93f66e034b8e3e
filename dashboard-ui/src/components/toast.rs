//! Toast Notification Component
//!
//! Shows the current auth error, if any. Clicking dismisses it.

use leptos::*;

use crate::state::AuthContext;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let auth = use_context::<AuthContext>().expect("AuthContext not found");
    let toast = auth.error;

    view! {
        <div class="fixed bottom-20 right-4 z-50 space-y-2">
            {move || {
                toast.message.get().map(|message| view! {
                    <div
                        class="flex items-center space-x-3 bg-red-600 text-white px-4 py-3 \
                               rounded-lg shadow-lg cursor-pointer animate-slide-in"
                        on:click=move |_| toast.clear()
                    >
                        <span class="text-lg">"✕"</span>
                        <span class="text-sm font-medium">{message}</span>
                    </div>
                })
            }}
        </div>
    }
}
