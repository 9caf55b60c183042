//! SerpAPI-backed [`SearchProvider`](outreach_core::search::SearchProvider).
//!
//! One [`SerpClient::fetch_page`] call is one `GET` against the SerpAPI
//! Google engine. No retries and no client-side timeout are applied.

mod client;

pub mod error;

pub use client::{SerpClient, SerpConfig};
pub use error::{Error, Result};
