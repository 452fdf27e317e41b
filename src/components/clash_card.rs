//! Clash Card Component
//!
//! Displays a single clash with its picture, title, and participant avatars.

use leptos::*;

use crate::api::Clash;
use crate::components::ProfilePicture;

/// Card showing one clash. Pure presentational: no state, no side effects.
#[component]
pub fn ClashCard(clash: Clash) -> impl IntoView {
    let Clash {
        title,
        picture_url,
        participants,
        ..
    } = clash;

    view! {
        <div class="border-2 border-gray-200 rounded-lg p-2 flex gap-2 flex-col shadow max-w-64 max-h-72">
            <img src=picture_url alt=title.clone() class="object-cover max-h-48 w-full" />
            <h2 class="border-b-2 w-full">{title}</h2>

            // Participant avatars, in source order; empty row when none
            <div class="flex flex-row gap-2 mb-2">
                {participants.into_iter().map(|peer| view! {
                    <ProfilePicture profile_url=peer.picture_url />
                }).collect_view()}
            </div>
        </div>
    }
}
