//! Stat Card Component
//!
//! A labelled value with an optional secondary line.

use leptos::*;

/// Stat card component
#[component]
pub fn StatCard(
    /// Label shown above the value
    label: &'static str,
    #[prop(into)]
    value: String,
    /// Optional secondary line under the value
    #[prop(optional, into)]
    detail: Option<String>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <span class="text-gray-400 text-sm">{label}</span>

            <div class="text-2xl font-bold mt-2 break-all">{value}</div>

            {detail.map(|d| view! {
                <div class="text-gray-500 text-xs mt-1 font-mono">{d}</div>
            })}
        </div>
    }
}
