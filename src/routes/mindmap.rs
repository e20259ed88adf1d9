//! Mindmap generation and diagram parsing routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use tracing::error;

use crate::error::ErrorCode;
use crate::mermaid::{FlowGraph, MindmapNode};
use crate::services::mindmap::{self, MindmapError};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct PromptBody {
    pub prompt: Option<String>,
}

#[derive(Deserialize)]
pub struct ThemeBody {
    pub label: Option<String>,
}

#[derive(Deserialize)]
pub struct DiagramBody {
    pub diagram: Option<String>,
}

/// Service error rendered as `{ "error", "code", "retryable" }`.
#[derive(Debug)]
pub struct ApiError(pub MindmapError);

impl From<MindmapError> for ApiError {
    fn from(err: MindmapError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let message = match &err {
            MindmapError::Llm(inner) => {
                error!(error = %inner, code = inner.error_code(), "mindmap: llm request failed");
                "Something went wrong".to_owned()
            }
            other => other.to_string(),
        };
        let body = serde_json::json!({
            "error": message,
            "code": err.error_code(),
            "retryable": err.retryable(),
        });
        (mindmap_error_to_status(&err), Json(body)).into_response()
    }
}

/// `POST /api/mindmap` — generate a laid-out flat graph for a topic.
pub async fn create_mindmap(
    State(state): State<AppState>,
    Json(body): Json<PromptBody>,
) -> Result<Json<FlowGraph>, ApiError> {
    let topic = required_topic(body.prompt.as_deref())?;
    let graph = mindmap::generate_flow(state.llm()?, topic).await?;
    Ok(Json(graph))
}

/// `POST /api/mindmap/tree` — generate the nested tree variant for a topic.
pub async fn create_mindmap_tree(
    State(state): State<AppState>,
    Json(body): Json<PromptBody>,
) -> Result<Json<Vec<MindmapNode>>, ApiError> {
    let topic = required_topic(body.prompt.as_deref())?;
    let roots = mindmap::generate_tree(state.llm()?, topic).await?;
    Ok(Json(roots))
}

/// `POST /api/theme` — short explanation of one node label.
pub async fn explain_theme(
    State(state): State<AppState>,
    Json(body): Json<ThemeBody>,
) -> Result<Json<String>, ApiError> {
    let label = body.label.as_deref().unwrap_or_default();
    if label.trim().is_empty() {
        return Err(MindmapError::MissingInput("Label").into());
    }
    let text = mindmap::explain_theme(state.llm()?, label).await?;
    Ok(Json(text))
}

/// `POST /api/parse` — lay out caller-supplied diagram text.
pub async fn parse_diagram(Json(body): Json<DiagramBody>) -> Result<Json<FlowGraph>, ApiError> {
    let graph = mindmap::flow_from_text(body.diagram.as_deref())?;
    Ok(Json(graph))
}

/// Input validation runs before the LLM check so a bad request is a 400
/// even when generation is unavailable.
fn required_topic(prompt: Option<&str>) -> Result<&str, MindmapError> {
    match prompt {
        Some(p) if !p.trim().is_empty() => Ok(p),
        _ => Err(MindmapError::MissingInput("Prompt")),
    }
}

pub(crate) fn mindmap_error_to_status(err: &MindmapError) -> StatusCode {
    match err {
        MindmapError::MissingInput(_) | MindmapError::EmptyResponse => StatusCode::BAD_REQUEST,
        MindmapError::LlmNotConfigured => StatusCode::SERVICE_UNAVAILABLE,
        MindmapError::Llm(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
#[path = "mindmap_test.rs"]
mod tests;
