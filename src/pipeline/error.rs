use thiserror::Error;

/// Why a pipeline run produced no summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// The search step produced no candidate URLs
    #[error("search returned no results")]
    NoResults,

    /// Every candidate page failed to fetch or had no visible text
    #[error("no page content could be fetched")]
    NoFetchableContent,

    /// The model failed or returned no text
    #[error("summarization failed")]
    SummarizationFailed,
}

impl PipelineError {
    /// Stable machine-readable name
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NoResults => "no_results",
            Self::NoFetchableContent => "no_fetchable_content",
            Self::SummarizationFailed => "summarization_failed",
        }
    }
}
