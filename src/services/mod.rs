pub mod mindmap;
pub mod prompts;
