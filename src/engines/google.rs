//! Google search engine implementation

use super::links::{push_unique, resolve_result_link};
use super::traits::*;
use anyhow::Result as AnyhowResult;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use url::Url;

static RESULT_BLOCK: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.g, div.ezO2md, div.Gx5Zad").expect("valid selector"));
static RESULT_LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").expect("valid selector"));

/// Google web search engine
pub struct Google {
    base_url: String,
}

impl Google {
    pub fn new() -> Self {
        Self::with_base_url("https://www.google.com")
    }

    /// Point the engine at another host (used by tests against a local server)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.base_url.trim_end_matches('/'))
    }

    fn parse_results(&self, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        let base = match Url::parse(&self.search_url()) {
            Ok(base) => base,
            Err(_) => return Vec::new(),
        };

        let mut urls = Vec::new();

        for block in document.select(&RESULT_BLOCK) {
            // The first outbound link of a block is the result title
            let target = block
                .select(&RESULT_LINK)
                .filter_map(|a| a.value().attr("href"))
                .find_map(|href| resolve_result_link(href, &base, "q"));

            if let Some(url) = target {
                push_unique(&mut urls, url);
            }
        }

        urls
    }
}

impl Default for Google {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for Google {
    fn name(&self) -> &str {
        "google"
    }

    fn request(&self, params: &RequestParams) -> AnyhowResult<EngineRequest> {
        // Ask for a couple of spares; ads and widgets sometimes take a slot
        let num = params.count + 2;

        Ok(EngineRequest::get(self.search_url())
            .param("q", params.query.clone())
            .param("hl", params.lang.clone())
            .param("num", num.to_string()))
    }

    fn response(&self, response: EngineResponse) -> AnyhowResult<Vec<String>> {
        if !response.is_success() {
            return Err(anyhow::anyhow!("HTTP error: {}", response.status));
        }

        if response.is_captcha() {
            return Err(anyhow::anyhow!("CAPTCHA detected"));
        }

        Ok(self.parse_results(&response.text))
    }
}
