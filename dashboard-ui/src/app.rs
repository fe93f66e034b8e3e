//! App Root Component
//!
//! Main application component with routing, the auth context and the chart
//! theme.

use evadash::{AuthModule, Page};
use leptos::*;
use leptos_router::*;

use crate::components::{provide_chart_theme, ChartTheme, Nav, Toast};
use crate::pages::{Dashboard, Login};
use crate::state::provide_auth_context;

/// Root application component
#[component]
pub fn App(auth: AuthModule) -> impl IntoView {
    provide_auth_context(auth);
    provide_chart_theme(ChartTheme::default());

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                <Nav />

                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path=Page::Login.path() view=Login />
                        <Route path=Page::Dashboard.path() view=Dashboard />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Toast />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href=Page::Login.path()
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to Sign In"
            </A>
        </div>
    }
}
