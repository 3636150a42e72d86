//! websift: live web search, condensed by a language model
//!
//! A query is run against a public search engine, the top pages are fetched and
//! reduced to their visible text, the excerpts are assembled into a bounded
//! context and a local model summarizes them in a few bullet points.

pub mod config;
pub mod context;
pub mod engines;
pub mod extract;
pub mod fetch;
pub mod llm;
pub mod network;
pub mod pipeline;
pub mod query;
pub mod search;
pub mod web;

#[cfg(test)]
pub(crate) mod testing;

pub use config::Settings;
pub use pipeline::{Pipeline, PipelineError};
pub use query::{Query, QueryError};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
