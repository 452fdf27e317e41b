//! GraphQL API Client
//!
//! Functions for communicating with the clash GraphQL endpoint.

pub mod client;

pub use client::{fetch_clashes, Clash, Participant};
