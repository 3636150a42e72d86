//! Settings structures for websift configuration

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Main settings structure, loaded from `settings.yml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub outgoing: OutgoingSettings,
    pub search: SearchSettings,
    pub pipeline: PipelineSettings,
    pub llm: LlmSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables (WEBSIFT_* prefix)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("WEBSIFT_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("WEBSIFT_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Ok(val) = std::env::var("WEBSIFT_MODEL") {
            self.llm.model = val;
        }
        if let Ok(val) = std::env::var("WEBSIFT_OLLAMA_URL") {
            self.llm.base_url = val;
        }
        if let Ok(val) = std::env::var("WEBSIFT_ENGINE") {
            self.search.engine = val;
        }
        if let Ok(val) = std::env::var("WEBSIFT_RESULT_COUNT") {
            if let Ok(count) = val.parse() {
                self.pipeline.result_count = count;
            }
        }
    }

    /// Reject values the pipeline cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.pipeline.result_count == 0 {
            bail!("pipeline.result_count must be at least 1");
        }
        if self.pipeline.max_chars_per_page == 0 {
            bail!("pipeline.max_chars_per_page must be at least 1");
        }
        if self.pipeline.max_context_chars == 0 {
            bail!("pipeline.max_context_chars must be at least 1");
        }
        check_timeout("outgoing.request_timeout", self.outgoing.request_timeout)?;
        check_timeout("outgoing.fetch_timeout", self.outgoing.fetch_timeout)?;
        check_timeout("llm.request_timeout", self.llm.request_timeout)?;
        if self.llm.model.trim().is_empty() {
            bail!("llm.model must not be empty");
        }
        Ok(())
    }
}

/// Timeouts become `Duration`s, which cannot hold NaN, infinite or negative seconds
fn check_timeout(name: &str, seconds: f64) -> Result<()> {
    if !(seconds.is_finite() && seconds > 0.0) {
        bail!("{} must be a positive number of seconds, got {}", name, seconds);
    }
    Ok(())
}

fn to_duration(name: &str, seconds: f64) -> Result<Duration> {
    check_timeout(name, seconds)?;
    Duration::try_from_secs_f64(seconds).with_context(|| format!("{} is out of range", name))
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 5050,
            bind_address: "127.0.0.1".to_string(),
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Timeout for search engine requests in seconds
    pub request_timeout: f64,
    /// Timeout for each page fetch in seconds
    pub fetch_timeout: f64,
    /// User agent sent with every request
    pub user_agent: String,
    /// Accept-Language sent with every request
    pub accept_language: String,
    /// Verify SSL certificates
    pub verify_ssl: bool,
    /// Proxy settings
    pub proxies: ProxySettings,
}

impl OutgoingSettings {
    pub fn fetch_timeout(&self) -> Result<Duration> {
        to_duration("outgoing.fetch_timeout", self.fetch_timeout)
    }

    pub fn request_timeout(&self) -> Result<Duration> {
        to_duration("outgoing.request_timeout", self.request_timeout)
    }
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: 5.0,
            fetch_timeout: 8.0,
            user_agent: crate::network::DEFAULT_USER_AGENT.to_string(),
            accept_language: "en-US,en;q=0.9".to_string(),
            verify_ssl: true,
            proxies: ProxySettings::default(),
        }
    }
}

/// Proxy settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub http: Option<String>,
    pub https: Option<String>,
    pub all: Option<String>,
}

/// Search provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Engine used to locate candidate pages (google, duckduckgo)
    pub engine: String,
    /// Interface language passed to the engine
    pub language: String,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            engine: "google".to_string(),
            language: "en".to_string(),
        }
    }
}

/// Size limits for a pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineSettings {
    /// How many search results to fetch
    pub result_count: usize,
    /// Character cap applied to each page's visible text
    pub max_chars_per_page: usize,
    /// Character cap applied to the combined context
    pub max_context_chars: usize,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            result_count: 3,
            max_chars_per_page: 2000,
            max_context_chars: 3500,
        }
    }
}

/// Language model settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    /// Ollama model tag
    pub model: String,
    /// Ollama server URL
    pub base_url: String,
    /// Timeout for one generation in seconds
    pub request_timeout: f64,
}

impl LlmSettings {
    pub fn request_timeout(&self) -> Result<Duration> {
        to_duration("llm.request_timeout", self.request_timeout)
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            model: "gemma2:latest".to_string(),
            base_url: "http://localhost:11434".to_string(),
            request_timeout: 120.0,
        }
    }
}
