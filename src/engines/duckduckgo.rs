//! DuckDuckGo search engine implementation

use super::links::{push_unique, resolve_result_link};
use super::traits::*;
use anyhow::Result as AnyhowResult;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use std::collections::HashMap;
use url::Url;

static TITLE_LINK: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.result a.result__a").expect("valid selector"));

/// DuckDuckGo HTML (no-JavaScript) web search
pub struct DuckDuckGo {
    html_url: String,
}

impl DuckDuckGo {
    pub fn new() -> Self {
        Self::with_base_url("https://html.duckduckgo.com")
    }

    /// Point the engine at another host (used by tests against a local server)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            html_url: format!("{}/html/", base_url.into().trim_end_matches('/')),
        }
    }

    fn parse_html_results(&self, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        let base = match Url::parse(&self.html_url) {
            Ok(base) => base,
            Err(_) => return Vec::new(),
        };

        let mut urls = Vec::new();

        for link in document.select(&TITLE_LINK) {
            let resolved = link
                .value()
                .attr("href")
                .and_then(|href| resolve_result_link(href, &base, "uddg"));

            // Sponsored entries point at duckduckgo.com/y.js and resolve to nothing
            if let Some(url) = resolved {
                push_unique(&mut urls, url);
            }
        }

        urls
    }
}

impl Default for DuckDuckGo {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for DuckDuckGo {
    fn name(&self) -> &str {
        "duckduckgo"
    }

    fn request(&self, params: &RequestParams) -> AnyhowResult<EngineRequest> {
        let mut form_data = HashMap::new();
        form_data.insert("q".to_string(), params.query.clone());
        form_data.insert("b".to_string(), String::new());
        form_data.insert("kl".to_string(), region(&params.lang));

        Ok(EngineRequest::post(&self.html_url).form(form_data))
    }

    fn response(&self, response: EngineResponse) -> AnyhowResult<Vec<String>> {
        if !response.is_success() {
            return Err(anyhow::anyhow!("HTTP error: {}", response.status));
        }

        Ok(self.parse_html_results(&response.text))
    }
}

/// DuckDuckGo wants a region code such as `us-en`; `wt-wt` means no region.
fn region(lang: &str) -> String {
    match lang {
        "" | "all" => "wt-wt".to_string(),
        "en" => "us-en".to_string(),
        other if other.contains('-') => other.to_lowercase(),
        other => format!("{other}-{other}"),
    }
}
