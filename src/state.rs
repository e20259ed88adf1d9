//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Diagram parsing is stateless, so the only shared resource is the
//! optional LLM client.

use std::sync::Arc;

use crate::llm::LlmChat;
use crate::services::mindmap::MindmapError;

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    /// Optional LLM client. `None` if LLM env vars are not configured.
    pub llm: Option<Arc<dyn LlmChat>>,
}

impl AppState {
    #[must_use]
    pub fn new(llm: Option<Arc<dyn LlmChat>>) -> Self {
        Self { llm }
    }

    /// Borrow the LLM client, or report that generation is unavailable.
    ///
    /// # Errors
    ///
    /// Returns [`MindmapError::LlmNotConfigured`] when no client was built at startup.
    pub fn llm(&self) -> Result<&dyn LlmChat, MindmapError> {
        self.llm.as_deref().ok_or(MindmapError::LlmNotConfigured)
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
