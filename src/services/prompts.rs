//! Prompt templates sent to the LLM.

/// System prompt shared by every generation request.
pub const SYSTEM_PROMPT: &str = "You are a study planner that answers with concise, plain content.";

/// Ask for a `graph TD` learning path for `topic`.
#[must_use]
pub fn learning_path(topic: &str) -> String {
    format!(
        "Generate a Mermaid mindmap using 'graph TD' for the following topic as a structured learning path.\n\
         Output only the graph code, nothing else.\n\
         Data should be only about language.\n\
         Show graph TD; A[topic] variables than at the end directions like A --> B.\n\
         Topic: {topic} basics",
        topic = topic.trim()
    )
}

/// Ask for a short explanation of one mindmap node.
#[must_use]
pub fn theme(label: &str) -> String {
    format!("Brief information about {label}.\nOne example code", label = label.trim())
}
