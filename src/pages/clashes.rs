//! Clash List Page
//!
//! Fetches the clash collection once on mount and renders it as a
//! responsive card grid, with placeholders for the pending and failed
//! states.

use leptos::*;

use crate::api;
use crate::api::Clash;
use crate::components::{ClashCard, LoadFailed, Loading};
use crate::state::RemoteData;

/// Clash list page component
#[component]
pub fn Clashes() -> impl IntoView {
    let clashes = create_rw_signal::<RemoteData<Vec<Clash>>>(RemoteData::Loading);

    // Fetch the clash list on mount; one request per mount, no retry
    create_effect(move |_| {
        spawn_local(async move {
            let result = api::fetch_clashes().await;
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("Failed to fetch clashes: {}", e).into());
            }
            clashes.set(RemoteData::from_result(result));
        });
    });

    view! {
        {move || match clashes.get() {
            RemoteData::Loading => view! { <Loading /> }.into_view(),
            RemoteData::Failed(message) => view! { <LoadFailed message=message /> }.into_view(),
            RemoteData::Loaded(clashes) => view! { <ClashGrid clashes=clashes /> }.into_view(),
        }}
    }
}

/// Heading plus responsive grid of clash cards, keyed by clash id
#[component]
fn ClashGrid(clashes: Vec<Clash>) -> impl IntoView {
    view! {
        <main class="p-24 flex flex-col gap-8">
            <h1 class="text-3xl font-bold underline">"Clash List"</h1>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-4">
                <For
                    each=move || clashes.clone()
                    key=|clash| clash.id.clone()
                    children=|clash| view! { <ClashCard clash=clash /> }
                />
            </div>
        </main>
    }
}
