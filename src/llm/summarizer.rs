//! Summarization step: fixed prompt template plus one model round trip

use super::LanguageModel;
use crate::context::AssembledContext;
use anyhow::Result;
use std::sync::Arc;
use std::time::Instant;
use tera::{Context, Tera};
use tracing::{debug, warn};

const TEMPLATE_NAME: &str = "summary_prompt.txt";

/// Prompt sent to the model; `context` is the only slot.
pub const SUMMARY_PROMPT: &str = "Below are excerpts from live web pages relevant to your query.\n\n\
{{ context }}\n\n\
Please write a vibrant, engaging summary in 3-5 bullet points. \
Highlight the most important facts and any interesting insights. \
Use descriptive language and mention why each point matters.\n";

/// Renders the summary prompt and asks the model for a summary
pub struct Summarizer {
    model: Arc<dyn LanguageModel>,
    templates: Tera,
}

impl Summarizer {
    pub fn new(model: Arc<dyn LanguageModel>) -> Result<Self> {
        let mut templates = Tera::default();
        templates.add_raw_template(TEMPLATE_NAME, SUMMARY_PROMPT)?;

        Ok(Self { model, templates })
    }

    /// Fill the prompt template with `context`
    pub fn render_prompt(&self, context: &AssembledContext) -> Result<String> {
        let mut ctx = Context::new();
        ctx.insert("context", context.as_str());
        Ok(self.templates.render(TEMPLATE_NAME, &ctx)?)
    }

    /// Summarize `context`. Empty text means the step failed; the cause is logged.
    pub async fn summarize(&self, context: &AssembledContext) -> String {
        let prompt = match self.render_prompt(context) {
            Ok(prompt) => prompt,
            Err(e) => {
                warn!("Failed to render summary prompt: {}", e);
                return String::new();
            }
        };

        let start = Instant::now();
        match self.model.generate(&prompt).await {
            Ok(text) => {
                debug!(
                    "Model {} answered {} chars in {:?}",
                    self.model.model(),
                    text.len(),
                    start.elapsed()
                );
                text
            }
            Err(e) => {
                warn!("Model {} failed: {:#}", self.model.model(), e);
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{assemble, PageExcerpt};
    use crate::testing::StubModel;

    fn context(text: &str) -> AssembledContext {
        assemble(&[PageExcerpt::new(1, "https://a.example/", text)], 2000, 3500).unwrap()
    }

    #[test]
    fn test_prompt_has_context_in_its_slot() {
        let summarizer = Summarizer::new(Arc::new(StubModel::answering("unused"))).unwrap();
        let prompt = summarizer.render_prompt(&context("ferris & friends <3")).unwrap();

        assert!(prompt.starts_with(
            "Below are excerpts from live web pages relevant to your query.\n\n--- Page 1: https://a.example/ ---\n"
        ));
        // Plain text template: no HTML escaping
        assert!(prompt.contains("ferris & friends <3"));
        assert!(prompt.contains("3-5 bullet points"));
        assert!(prompt.contains("why each point matters"));
    }

    #[test]
    fn test_braces_in_context_are_not_template_syntax() {
        let summarizer = Summarizer::new(Arc::new(StubModel::answering("unused"))).unwrap();
        let prompt = summarizer.render_prompt(&context("fn main() { {{ x }} }")).unwrap();
        assert!(prompt.contains("fn main() { {{ x }} }"));
    }

    #[tokio::test]
    async fn test_summarize_passes_prompt_and_returns_text() {
        let model = Arc::new(StubModel::answering("- point one\n- point two"));
        let summarizer = Summarizer::new(model.clone()).unwrap();

        let summary = summarizer.summarize(&context("alpha")).await;

        assert_eq!(summary, "- point one\n- point two");
        let prompts = model.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("alpha"));
    }

    #[tokio::test]
    async fn test_model_failure_is_empty() {
        let summarizer = Summarizer::new(Arc::new(StubModel::failing())).unwrap();
        assert_eq!(summarizer.summarize(&context("alpha")).await, "");
    }
}
