//! MCP tool definitions for deskimg
//!
//! Each tool wraps a library operation, exposing it as a structured MCP tool.
//! The run functions here produce the final user-facing text; the server
//! wraps their `Result` into the uniform response envelope.

pub mod compress;
pub mod count;
pub mod list;
