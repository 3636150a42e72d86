//! Candidate URL lookup

use crate::engines::{Engine, RequestParams};
use crate::network::HttpClient;
use crate::query::Query;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Supplies candidate URLs for a query.
///
/// Best effort: failures are logged and reported as an empty list, never as an
/// error. At most `count` URLs come back, in the provider's relevance order.
#[async_trait]
pub trait ResultLocator: Send + Sync {
    async fn locate(&self, query: &Query, count: usize) -> Vec<String>;
}

/// [`ResultLocator`] backed by one search [`Engine`]
pub struct EngineLocator {
    client: HttpClient,
    engine: Arc<dyn Engine>,
    lang: String,
}

impl EngineLocator {
    pub fn new(client: HttpClient, engine: Arc<dyn Engine>) -> Self {
        Self {
            client,
            engine,
            lang: "en".to_string(),
        }
    }

    /// Set the interface language passed to the engine
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    async fn search(&self, query: &Query, count: usize) -> anyhow::Result<Vec<String>> {
        let params = RequestParams::new(query.as_str(), count).with_lang(self.lang.clone());
        let request = self.engine.request(&params)?;
        let response = self.client.execute(request).await?;
        self.engine.response(response)
    }
}

#[async_trait]
impl ResultLocator for EngineLocator {
    async fn locate(&self, query: &Query, count: usize) -> Vec<String> {
        let engine_name = self.engine.name();
        let start = Instant::now();

        info!(
            "Searching {} for '{}' (top {} results)",
            engine_name, query, count
        );

        match self.search(query, count).await {
            Ok(mut urls) => {
                urls.truncate(count);
                debug!(
                    "Engine {} returned {} urls in {:?}",
                    engine_name,
                    urls.len(),
                    start.elapsed()
                );
                urls
            }
            Err(e) => {
                warn!("Search failed for {}: {}", engine_name, e);
                Vec::new()
            }
        }
    }
}
