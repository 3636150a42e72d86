//! Retrieval and summarization pipeline
//!
//! Ties the locator, fetcher, context assembler and summarizer together and
//! reports one of three failure kinds when no summary can be produced.

mod error;
mod orchestrator;

pub use error::PipelineError;
pub use orchestrator::Pipeline;
