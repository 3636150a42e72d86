//! Engine loader for picking the configured search engine

use super::traits::Engine;
use super::{duckduckgo, google};
use crate::config::SearchSettings;
use anyhow::Result;
use std::sync::Arc;
use tracing::info;

/// Loader for initializing the engine named in configuration
pub struct EngineLoader;

impl EngineLoader {
    /// Load the engine selected in settings
    pub fn load(settings: &SearchSettings) -> Result<Arc<dyn Engine>> {
        let engine = Self::create_engine(&settings.engine)?;
        info!("Loaded search engine: {}", engine.name());
        Ok(engine)
    }

    /// Create an engine instance by name
    fn create_engine(engine_type: &str) -> Result<Arc<dyn Engine>> {
        let engine: Arc<dyn Engine> = match engine_type {
            "google" => Arc::new(google::Google::new()),
            "duckduckgo" | "ddg" => Arc::new(duckduckgo::DuckDuckGo::new()),
            _ => {
                return Err(anyhow::anyhow!(
                    "Unknown engine type: {} (available: {})",
                    engine_type,
                    Self::available_engines().join(", ")
                ));
            }
        };

        Ok(engine)
    }

    /// Get list of available engine types
    pub fn available_engines() -> Vec<&'static str> {
        vec!["google", "duckduckgo"]
    }
}
