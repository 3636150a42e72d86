//! Web server module
//!
//! Exposes the pipeline over HTTP: a chat page, a JSON chat endpoint and a health check.

mod handlers;
mod routes;
mod state;
mod templates;

pub use handlers::{ChatRequest, ChatResponse, ErrorResponse};
pub use routes::create_router;
pub use state::AppState;
pub use templates::Templates;
