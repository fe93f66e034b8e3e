//! Dashboard Page
//!
//! Shows the signed-in seller's store and recent sign-in activity.
//! Reachable without signing in.

use evadash::{Page, UserInfo};
use leptos::*;
use leptos_router::*;

use crate::components::{Chart, Loading, Point, Series, StatCard};
use crate::state::auth::LoginAttempt;
use crate::state::AuthContext;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let auth = use_context::<AuthContext>().expect("AuthContext not found");
    let state = auth.state;
    let signed_in_at = auth.signed_in_at;
    let pending = auth.pending;
    let attempts = auth.attempts;
    let activity = Signal::derive(move || attempt_series(&attempts.get()));

    view! {
        <div class="space-y-8">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Dashboard"</h1>
                    <p class="text-gray-400 mt-1">"Your store at a glance"</p>
                </div>

                <div class="text-sm text-gray-400">
                    {move || {
                        signed_in_at.get()
                            .and_then(chrono::DateTime::from_timestamp_millis)
                            .map(|dt| format!("Signed in at {}", dt.format("%H:%M:%S")))
                            .unwrap_or_default()
                    }}
                </div>
            </div>

            {move || {
                if pending.get() {
                    return view! { <Loading /> }.into_view();
                }
                match state.get().user {
                    Some(user) => view! { <StoreSummary user=user /> }.into_view(),
                    None => view! { <SignedOut /> }.into_view(),
                }
            }}

            <section>
                <h2 class="text-lg font-semibold mb-4">"Sign-in time (ms)"</h2>
                <div class="bg-gray-800 rounded-xl p-4">
                    <Chart series=activity empty_label="No sign-ins this session" />
                </div>
            </section>
        </div>
    }
}

#[component]
fn StoreSummary(user: UserInfo) -> impl IntoView {
    let marketplace = marketplace_label(&user.marketplace_name)
        .map(str::to_string)
        .unwrap_or_else(|| user.marketplace_name.clone());

    view! {
        <section>
            <h2 class="text-lg font-semibold mb-4">"Store"</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <StatCard label="Store ID" value=user.store_id />
                <StatCard label="Marketplace" value=marketplace detail=user.marketplace_name />
            </div>
        </section>
    }
}

#[component]
fn SignedOut() -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6 text-center space-y-4">
            <p class="text-gray-400">"No store information loaded."</p>
            <A
                href=Page::Login.path()
                class="inline-block px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Sign in"
            </A>
        </section>
    }
}

/// Login durations split into succeeded and failed lines
fn attempt_series(attempts: &[LoginAttempt]) -> Vec<Series> {
    let line = |name: &str, succeeded: bool| Series {
        name: name.to_string(),
        points: attempts
            .iter()
            .filter(|a| a.succeeded == succeeded)
            .map(|a| Point {
                x: a.at_ms as f64,
                y: a.duration_ms as f64,
            })
            .collect(),
    };

    vec![line("Succeeded", true), line("Failed", false)]
}

/// Human-readable name for an Amazon marketplace id
fn marketplace_label(marketplace_id: &str) -> Option<&'static str> {
    let label = match marketplace_id {
        "ATVPDKIKX0DER" => "Amazon.com (US)",
        "A2EUQ1WTGCTBG2" => "Amazon.ca (CA)",
        "A1AM78C64UM0Y8" => "Amazon.com.mx (MX)",
        "A2Q3Y263D00KWC" => "Amazon.com.br (BR)",
        "A1F83G8C2ARO7P" => "Amazon.co.uk (UK)",
        "A1PA6795UKMFR9" => "Amazon.de (DE)",
        "A13V1IB3VIYZZH" => "Amazon.fr (FR)",
        "APJ6JRA9NG5V4" => "Amazon.it (IT)",
        "A1RKKUPIHCS9HS" => "Amazon.es (ES)",
        "A1VC38T7YXB528" => "Amazon.co.jp (JP)",
        "A39IBJ37TRP1C6" => "Amazon.com.au (AU)",
        "A21TJRUUN4KGV" => "Amazon.in (IN)",
        _ => return None,
    };
    Some(label)
}
