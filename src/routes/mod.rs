//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! All endpoints are JSON over HTTP. Generation routes need the LLM client;
//! `/api/parse` and `/healthz` work without it.

pub mod mindmap;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/mindmap", post(mindmap::create_mindmap))
        .route("/api/mindmap/tree", post(mindmap::create_mindmap_tree))
        .route("/api/theme", post(mindmap::explain_theme))
        .route("/api/parse", post(mindmap::parse_diagram))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
