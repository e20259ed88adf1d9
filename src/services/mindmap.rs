//! Mindmap service — topic prompt → LLM diagram text → graph.
//!
//! DESIGN
//! ======
//! The LLM is an opaque text source. An empty reply is reported as
//! [`MindmapError::EmptyResponse`] and never parsed as an empty diagram;
//! anything non-empty goes through the permissive flowchart parser, which
//! skips lines it does not recognize.

use std::sync::OnceLock;

use tracing::{info, warn};

use crate::error::ErrorCode;
use crate::llm::LlmChat;
use crate::llm::types::{LlmError, Message};
use crate::mermaid::{self, FlowGraph, MindmapNode};

use super::prompts;

const DEFAULT_MINDMAP_MAX_TOKENS: u32 = 1024;

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

fn mindmap_max_tokens() -> u32 {
    static VALUE: OnceLock<u32> = OnceLock::new();
    *VALUE.get_or_init(|| env_parse("MINDMAP_MAX_TOKENS", DEFAULT_MINDMAP_MAX_TOKENS))
}

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum MindmapError {
    /// A required request field was absent or blank.
    #[error("{0} is required")]
    MissingInput(&'static str),
    #[error("LLM not configured")]
    LlmNotConfigured,
    /// The LLM answered without any usable text.
    #[error("AI response is empty")]
    EmptyResponse,
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

impl ErrorCode for MindmapError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingInput(_) => "E_MISSING_INPUT",
            Self::LlmNotConfigured => "E_LLM_NOT_CONFIGURED",
            Self::EmptyResponse => "E_EMPTY_RESPONSE",
            Self::Llm(_) => "E_LLM_ERROR",
        }
    }

    fn retryable(&self) -> bool {
        match self {
            Self::EmptyResponse => true,
            Self::Llm(e) => e.retryable(),
            Self::MissingInput(_) | Self::LlmNotConfigured => false,
        }
    }
}

// =============================================================================
// ENTRY POINTS
// =============================================================================

/// Generate a flat, laid-out graph for `topic`.
///
/// # Errors
///
/// Fails on a blank topic, an LLM failure, or an empty LLM reply.
pub async fn generate_flow(llm: &dyn LlmChat, topic: &str) -> Result<FlowGraph, MindmapError> {
    let diagram = generate_diagram(llm, topic).await?;
    Ok(mermaid::flowchart(&diagram))
}

/// Generate the nested tree variant for `topic`.
///
/// # Errors
///
/// Fails on a blank topic, an LLM failure, or an empty LLM reply.
pub async fn generate_tree(llm: &dyn LlmChat, topic: &str) -> Result<Vec<MindmapNode>, MindmapError> {
    let diagram = generate_diagram(llm, topic).await?;
    Ok(mermaid::parse_tree(&diagram))
}

/// Ask the LLM for a short explanation of a node label.
///
/// # Errors
///
/// Fails on a blank label, an LLM failure, or an empty LLM reply.
pub async fn explain_theme(llm: &dyn LlmChat, label: &str) -> Result<String, MindmapError> {
    let label = require("Label", Some(label))?;
    info!(label_len = label.len(), "theme: prompt received");
    ask(llm, &prompts::theme(label)).await
}

/// Lay out caller-supplied diagram text without involving the LLM.
///
/// # Errors
///
/// Fails only when the text is absent or blank.
pub fn flow_from_text(diagram: Option<&str>) -> Result<FlowGraph, MindmapError> {
    let diagram = require("Diagram", diagram)?;
    Ok(mermaid::flowchart(diagram))
}

/// Ask the LLM for diagram text about `topic`, with code fences removed.
///
/// # Errors
///
/// Fails on a blank topic, an LLM failure, or an empty LLM reply.
pub async fn generate_diagram(llm: &dyn LlmChat, topic: &str) -> Result<String, MindmapError> {
    let topic = require("Prompt", Some(topic))?;
    info!(prompt_len = topic.len(), "mindmap: prompt received");
    let reply = ask(llm, &prompts::learning_path(topic)).await?;
    let diagram = strip_code_fence(&reply);
    if diagram.is_empty() {
        warn!("mindmap: reply held only a code fence");
        return Err(MindmapError::EmptyResponse);
    }
    Ok(diagram.to_string())
}

// =============================================================================
// HELPERS
// =============================================================================

async fn ask(llm: &dyn LlmChat, prompt: &str) -> Result<String, MindmapError> {
    let messages = [Message::user(prompt)];
    let response = llm
        .chat(mindmap_max_tokens(), prompts::SYSTEM_PROMPT, &messages)
        .await?;

    info!(
        model = %response.model,
        stop_reason = %response.stop_reason,
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        "llm: reply received"
    );

    if response.text.trim().is_empty() {
        warn!("llm: empty reply");
        return Err(MindmapError::EmptyResponse);
    }
    Ok(response.text)
}

fn require<'a>(field: &'static str, value: Option<&'a str>) -> Result<&'a str, MindmapError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(MindmapError::MissingInput(field)),
    }
}

/// Remove a surrounding Markdown code fence (```` ```mermaid ... ``` ````).
pub(crate) fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

#[cfg(test)]
#[path = "mindmap_test.rs"]
mod tests;
