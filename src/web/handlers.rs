//! HTTP request handlers

use super::state::AppState;
use crate::query::Query;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tera::Context;

/// Body of a chat request
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ChatRequest {
    pub prompt: String,
}

/// Successful chat reply
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Failed chat reply
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
}

/// Home page handler
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let mut ctx = Context::new();
    ctx.insert("model", state.model_name());
    ctx.insert("version", crate::VERSION);

    match state.templates.render_with_context("index.html", &ctx) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Template error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
        }
    }
}

/// Chat handler: run the pipeline for the submitted prompt
pub async fn chat(State(state): State<AppState>, body: Bytes) -> Response {
    // A missing or malformed body is treated like an empty prompt
    let request: ChatRequest = serde_json::from_slice(&body).unwrap_or_default();

    let query = match Query::parse(&request.prompt) {
        Ok(query) => query,
        Err(_) => {
            return error_response(StatusCode::BAD_REQUEST, "Empty prompt", None);
        }
    };

    match state.pipeline.run(&query).await {
        Ok(summary) => Json(ChatResponse { response: summary }).into_response(),
        Err(e) => {
            tracing::error!("Pipeline failed for '{}': {}", query, e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to retrieve or summarize pages.",
                Some(e.kind()),
            )
        }
    }
}

fn error_response(status: StatusCode, message: &str, kind: Option<&'static str>) -> Response {
    let body = ErrorResponse {
        error: message.to_string(),
        kind,
    };
    (status, Json(body)).into_response()
}

/// Health check handler
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION
    }))
}
