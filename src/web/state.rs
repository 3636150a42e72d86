//! Application state shared across handlers

use crate::config::Settings;
use crate::network::HttpClient;
use crate::pipeline::Pipeline;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Summarization pipeline
    pub pipeline: Arc<Pipeline>,
    /// Template renderer
    pub templates: Arc<super::Templates>,
}

impl AppState {
    /// Create application state with the production pipeline
    pub fn new(settings: Settings, client: HttpClient) -> anyhow::Result<Self> {
        let pipeline = Pipeline::from_settings(&settings, client)?;
        Self::with_pipeline(settings, pipeline)
    }

    /// Create application state around an already built pipeline
    pub fn with_pipeline(settings: Settings, pipeline: Pipeline) -> anyhow::Result<Self> {
        Ok(Self {
            settings: Arc::new(settings),
            pipeline: Arc::new(pipeline),
            templates: Arc::new(super::Templates::new()?),
        })
    }

    /// Model identifier shown in the UI
    pub fn model_name(&self) -> &str {
        &self.settings.llm.model
    }
}
