//! Profile Picture Component

use leptos::*;

/// Circular avatar image with a fixed pixel diameter
#[component]
pub fn ProfilePicture(
    /// Image URL for the avatar
    #[prop(into)]
    profile_url: String,
    /// Diameter in pixels
    #[prop(default = 32)]
    diameter: u32,
) -> impl IntoView {
    view! {
        <img
            src=profile_url
            class="rounded-full object-cover"
            style=format!("width: {}px; height: {}px", diameter, diameter)
        />
    }
}
