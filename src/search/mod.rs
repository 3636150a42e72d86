//! Search module
//!
//! Turns a query into an ordered list of candidate page URLs.

mod locator;

pub use locator::{EngineLocator, ResultLocator};
