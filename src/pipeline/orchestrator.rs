//! Search, fetch, assemble, summarize

use super::error::PipelineError;
use crate::config::{PipelineSettings, Settings};
use crate::context::{assemble, PageExcerpt};
use crate::engines::EngineLoader;
use crate::fetch::{HttpPageFetcher, PageFetcher};
use crate::llm::{LanguageModel, OllamaClient, Summarizer};
use crate::network::HttpClient;
use crate::query::Query;
use crate::search::{EngineLocator, ResultLocator};
use anyhow::Result;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

/// One query in, one summary (or one failure kind) out.
///
/// Holds only read-only state, so a single instance serves concurrent runs.
pub struct Pipeline {
    locator: Arc<dyn ResultLocator>,
    fetcher: Arc<dyn PageFetcher>,
    summarizer: Summarizer,
    limits: PipelineSettings,
}

impl Pipeline {
    pub fn new(
        limits: PipelineSettings,
        locator: Arc<dyn ResultLocator>,
        fetcher: Arc<dyn PageFetcher>,
        model: Arc<dyn LanguageModel>,
    ) -> Result<Self> {
        Ok(Self {
            locator,
            fetcher,
            summarizer: Summarizer::new(model)?,
            limits,
        })
    }

    /// Wire the production collaborators from settings
    pub fn from_settings(settings: &Settings, client: HttpClient) -> Result<Self> {
        let engine = EngineLoader::load(&settings.search)?;
        let locator = EngineLocator::new(client.clone(), engine).with_lang(&settings.search.language);
        let fetcher = HttpPageFetcher::new(client, settings.outgoing.fetch_timeout()?);
        let model = OllamaClient::new(&settings.llm)?;
        info!("Using model {} at {}", settings.llm.model, model.base_url());

        Self::new(
            settings.pipeline.clone(),
            Arc::new(locator),
            Arc::new(fetcher),
            Arc::new(model),
        )
    }

    /// Run the whole pipeline for `query`
    pub async fn run(&self, query: &Query) -> Result<String, PipelineError> {
        let span = info_span!("pipeline", run_id = %Uuid::new_v4());
        self.execute(query).instrument(span).await
    }

    async fn execute(&self, query: &Query) -> Result<String, PipelineError> {
        let start = Instant::now();

        let urls = self.locator.locate(query, self.limits.result_count).await;
        if urls.is_empty() {
            warn!("No URLs found for '{}'", query);
            return Err(PipelineError::NoResults);
        }

        let excerpts = self.fetch_excerpts(&urls).await;
        info!("Fetched {}/{} pages", excerpts.len(), urls.len());

        let context = assemble(
            &excerpts,
            self.limits.max_chars_per_page,
            self.limits.max_context_chars,
        )
        .ok_or(PipelineError::NoFetchableContent)?;
        if context.is_truncated() {
            debug!("Context cut to {} chars", self.limits.max_context_chars);
        }

        let summary = self.summarizer.summarize(&context).await;
        if summary.trim().is_empty() {
            warn!("Summarization produced no text");
            return Err(PipelineError::SummarizationFailed);
        }

        info!("Summarized '{}' in {:?}", query, start.elapsed());
        Ok(summary)
    }

    /// Fetch pages one after another, keeping each success at its search position
    async fn fetch_excerpts(&self, urls: &[String]) -> Vec<PageExcerpt> {
        let mut excerpts = Vec::with_capacity(urls.len());

        for (idx, url) in urls.iter().enumerate() {
            let position = idx + 1;
            debug!("Fetching page {}: {}", position, url);

            let text = self.fetcher.fetch(url, self.limits.max_chars_per_page).await;
            match excerpt_from(position, url, text) {
                Some(excerpt) => excerpts.push(excerpt),
                None => debug!("Skipping page {}: no content", position),
            }
        }

        excerpts
    }
}

/// A failed fetch and an empty page look the same: no excerpt.
fn excerpt_from(position: usize, url: &str, text: String) -> Option<PageExcerpt> {
    if text.trim().is_empty() {
        None
    } else {
        Some(PageExcerpt::new(position, url, text))
    }
}
