//! Loading Component
//!
//! Placeholders for the pending and failed query states.

use leptos::*;

/// Placeholder shown while the clash query is in flight
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="p-24">"Loading..."</div>
    }
}

/// Placeholder shown when the clash query failed
#[component]
pub fn LoadFailed(
    /// Human-readable message from the data source
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="p-24">{format!("Error: {}", message)}</div>
    }
}
