//! Desktop image manager
//!
//! This library provides functionality to:
//! - Locate the user's desktop folder and classify its image files
//! - Re-encode images at a given quality with JPEG, PNG, or WebP codecs
//! - Expose the above as MCP tools and prompts for AI tool integration

pub mod classify;
pub mod cli;
pub mod compress;
pub mod config;
pub mod mcp;
pub mod scan;
