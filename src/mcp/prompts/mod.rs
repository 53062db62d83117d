//! MCP prompt definitions for deskimg.

mod templates;

pub use templates::{get_prompt, list_prompts};
