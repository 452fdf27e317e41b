//! App Root Component

use leptos::*;

use crate::pages::Clashes;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-white text-gray-900">
            <Clashes />
        </div>
    }
}
