//! Deterministic stand-ins for the network-facing collaborators

use crate::extract::truncate_chars;
use crate::fetch::PageFetcher;
use crate::llm::LanguageModel;
use crate::query::Query;
use crate::search::ResultLocator;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::{sleep, timeout};

/// Returns a fixed URL list for every query
pub struct StubLocator {
    urls: Vec<String>,
    calls: Mutex<Vec<(String, usize)>>,
}

impl StubLocator {
    pub fn returning(urls: &[&str]) -> Self {
        Self {
            urls: urls.iter().map(|u| u.to_string()).collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, usize)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResultLocator for StubLocator {
    async fn locate(&self, query: &Query, count: usize) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .push((query.to_string(), count));
        self.urls.iter().take(count).cloned().collect()
    }
}

/// Serves page text from a map; unknown URLs fail (empty text).
///
/// Stalled URLs hang past the fetch budget and time out to empty text.
pub struct StubFetcher {
    pages: HashMap<String, String>,
    stalled: HashSet<String>,
    budget: Duration,
    fetched: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn serving(pages: &[(&str, &str)]) -> Self {
        Self {
            pages: pages
                .iter()
                .map(|(url, text)| (url.to_string(), text.to_string()))
                .collect(),
            stalled: HashSet::new(),
            budget: Duration::from_millis(50),
            fetched: Mutex::new(Vec::new()),
        }
    }

    /// Make `url` hang until the budget runs out
    pub fn stalling(mut self, url: &str) -> Self {
        self.stalled.insert(url.to_string());
        self
    }

    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for StubFetcher {
    async fn fetch(&self, url: &str, max_chars: usize) -> String {
        self.fetched.lock().unwrap().push(url.to_string());

        let page = async {
            if self.stalled.contains(url) {
                sleep(Duration::from_secs(30)).await;
            }
            self.pages
                .get(url)
                .map(|text| truncate_chars(text, max_chars).to_string())
                .unwrap_or_default()
        };

        timeout(self.budget, page).await.unwrap_or_default()
    }
}

/// Answers every prompt with the same text, or fails
pub struct StubModel {
    answer: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl StubModel {
    pub fn answering(answer: &str) -> Self {
        Self {
            answer: Some(answer.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            answer: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LanguageModel for StubModel {
    fn model(&self) -> &str {
        "stub"
    }

    async fn generate(&self, prompt: &str) -> anyhow::Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.answer
            .clone()
            .ok_or_else(|| anyhow::anyhow!("model unavailable"))
    }
}
