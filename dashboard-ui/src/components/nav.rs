//! Navigation Component
//!
//! Header navigation bar with brand and page links.

use evadash::Page;
use leptos::*;
use leptos_router::*;

use crate::state::AuthContext;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let auth = use_context::<AuthContext>().expect("AuthContext not found");
    let state = auth.state;

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <A href=Page::Login.path() class="flex items-center space-x-3">
                        <span class="text-xl font-bold text-white">"Evadash"</span>
                    </A>

                    <div class="flex items-center space-x-4">
                        <div class="flex items-center space-x-1">
                            {Page::ALL
                                .into_iter()
                                .map(|page| view! { <NavLink page=page /> })
                                .collect_view()}
                        </div>

                        // Signed-in store, if any
                        {move || state.get().user.map(|user| view! {
                            <span class="text-sm text-gray-400">{user.store_id}</span>
                        })}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(page: Page) -> impl IntoView {
    view! {
        <A
            href=page.path()
            exact=true
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {page.name()}
        </A>
    }
}
