//! Language model access and the summarization step

mod ollama;
mod summarizer;

pub use ollama::OllamaClient;
pub use summarizer::{Summarizer, SUMMARY_PROMPT};

use async_trait::async_trait;

/// A text-generation backend: prompt in, generated text out.
///
/// An `Ok` with empty text means the backend answered without any usable text.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Model identifier, for logging
    fn model(&self) -> &str;

    async fn generate(&self, prompt: &str) -> anyhow::Result<String>;
}
