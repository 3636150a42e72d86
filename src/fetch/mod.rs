//! Page fetching
//!
//! A fetch is a single time-bounded GET. Whatever goes wrong (timeout, refused
//! connection, non-2xx status, undecodable body) the caller just gets empty text.

use crate::extract::{truncate_chars, visible_text};
use crate::network::HttpClient;
use async_trait::async_trait;
use std::time::{Duration, Instant};
use tokio::time::timeout;
use tracing::{debug, warn};

/// Fetches the visible text of a page, capped at `max_chars` characters.
///
/// Returns an empty string on any failure.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str, max_chars: usize) -> String;
}

/// [`PageFetcher`] over the shared [`HttpClient`]
pub struct HttpPageFetcher {
    client: HttpClient,
    timeout: Duration,
}

impl HttpPageFetcher {
    pub fn new(client: HttpClient, timeout: Duration) -> Self {
        Self { client, timeout }
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str, max_chars: usize) -> String {
        let start = Instant::now();

        let result = timeout(self.timeout, self.client.get_with_timeout(url, self.timeout)).await;

        let response = match result {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => {
                warn!("Fetch failed for {}: {}", url, e);
                return String::new();
            }
            Err(_) => {
                warn!("Timeout fetching {} after {:?}", url, self.timeout);
                return String::new();
            }
        };

        if !response.is_success() {
            warn!("Fetch of {} returned HTTP {}", url, response.status);
            return String::new();
        }

        let text = visible_text(&response.text);
        let excerpt = truncate_chars(&text, max_chars).to_string();

        debug!(
            "Fetched {} ({} chars kept of {}) in {:?}",
            url,
            excerpt.chars().count(),
            text.chars().count(),
            start.elapsed()
        );

        excerpt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetcher(timeout: Duration) -> HttpPageFetcher {
        HttpPageFetcher::new(HttpClient::new().unwrap(), timeout)
    }

    #[tokio::test]
    async fn test_fetch_extracts_visible_text() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/article"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                "<html><body><nav>Menu</nav><p>Borrowing rules explained.</p></body></html>",
            ))
            .mount(&server)
            .await;

        let text = fetcher(Duration::from_secs(2))
            .fetch(&format!("{}/article", server.uri()), 2000)
            .await;

        assert_eq!(text, "Borrowing rules explained.");
    }

    #[tokio::test]
    async fn test_long_page_is_cut_to_exact_cap() {
        let server = MockServer::start().await;
        let body = format!("<p>{}</p>", "word ".repeat(1000));
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&server)
            .await;

        let text = fetcher(Duration::from_secs(2)).fetch(&server.uri(), 2000).await;

        assert_eq!(text.chars().count(), 2000);
    }

    #[tokio::test]
    async fn test_non_success_status_yields_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forbidden"))
            .respond_with(ResponseTemplate::new(403).set_body_string("<p>denied</p>"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/broken"))
            .respond_with(ResponseTemplate::new(500).set_body_string("<p>oops</p>"))
            .mount(&server)
            .await;

        let fetcher = fetcher(Duration::from_secs(2));
        assert_eq!(fetcher.fetch(&format!("{}/forbidden", server.uri()), 2000).await, "");
        assert_eq!(fetcher.fetch(&format!("{}/broken", server.uri()), 2000).await, "");
    }

    #[tokio::test]
    async fn test_slow_page_times_out_to_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("<p>too late</p>")
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let text = fetcher(Duration::from_millis(200)).fetch(&server.uri(), 2000).await;
        assert_eq!(text, "");
    }

    #[tokio::test]
    async fn test_transport_error_yields_empty() {
        let text = fetcher(Duration::from_secs(1))
            .fetch("http://127.0.0.1:9/unreachable", 2000)
            .await;
        assert_eq!(text, "");

        let text = fetcher(Duration::from_secs(1)).fetch("not a url", 2000).await;
        assert_eq!(text, "");
    }
}
