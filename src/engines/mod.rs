//! Search engine module
//!
//! Defines the Engine trait and the HTML engines that supply candidate URLs.

mod links;
mod loader;
mod traits;

// Engine implementations
pub mod duckduckgo;
pub mod google;

pub use loader::EngineLoader;
pub use traits::*;
