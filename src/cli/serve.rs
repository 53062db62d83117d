//! Execute the MCP server command.

use std::process::ExitCode;

use super::{EXIT_ERROR, EXIT_SUCCESS};
use crate::config::Config;

/// Execute the MCP server command
pub fn run_mcp(config: Config) -> ExitCode {
    use tokio::runtime::Runtime;

    init_tracing();

    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(err) => {
            eprintln!("Error: Failed to create async runtime: {err}");
            return ExitCode::from(EXIT_ERROR);
        }
    };

    if let Err(err) = rt.block_on(crate::mcp::run_server(config)) {
        eprintln!("Error: MCP server failed: {err}");
        return ExitCode::from(EXIT_ERROR);
    }
    ExitCode::from(EXIT_SUCCESS)
}

/// Diagnostics go to stderr; stdout carries the protocol stream.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
