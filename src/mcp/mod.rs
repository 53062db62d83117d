//! MCP (Model Context Protocol) server implementation for deskimg
//!
//! Exposes the desktop image operations as MCP tools and prompts so AI
//! models can count, list, and compress desktop images directly.
//!
//! Start the server with `deskimg mcp`.

pub mod prompts;
mod server;
pub mod tools;

pub use server::{run_server, DesktopImageServer};
