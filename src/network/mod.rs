//! HTTP networking module
//!
//! Provides the shared HTTP client used for search engine requests and page fetches.

mod client;
mod user_agent;

pub use client::HttpClient;
pub use user_agent::{accept_html, DEFAULT_USER_AGENT};
