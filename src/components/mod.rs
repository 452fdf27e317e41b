//! UI Components
//!
//! Reusable Leptos components for the clash list.

pub mod clash_card;
pub mod loading;
pub mod profile_picture;

pub use clash_card::ClashCard;
pub use loading::{LoadFailed, Loading};
pub use profile_picture::ProfilePicture;
