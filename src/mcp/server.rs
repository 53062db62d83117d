//! Core MCP server implementation.

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::{
    tool, tool_handler, tool_router, ErrorData as McpError, RoleServer, ServerHandler, ServiceExt,
};

use super::prompts;
use super::tools::compress::{run_compress, CompressInput};
use super::tools::count::run_count;
use super::tools::list::run_list;
use crate::config::Config;

/// The deskimg MCP server
///
/// Exposes the desktop image operations (count, list, compress) as MCP tools
/// and the compress-image prompt template, over the Model Context Protocol.
#[derive(Debug, Clone)]
pub struct DesktopImageServer {
    config: Config,
    tool_router: ToolRouter<Self>,
}

/// Wrap a handler outcome into the uniform response envelope. Every tool
/// goes through here; errors become `isError` text blocks and never
/// propagate past the dispatch boundary.
fn envelope(result: Result<String, String>) -> CallToolResult {
    match result {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(message) => CallToolResult::error(vec![Content::text(message)]),
    }
}

#[tool_router]
impl DesktopImageServer {
    pub fn new(config: Config) -> Self {
        Self { config, tool_router: Self::tool_router() }
    }

    #[tool(
        name = "count-desktop-images",
        description = "Count the image files on the desktop"
    )]
    pub async fn count_desktop_images(&self) -> Result<CallToolResult, McpError> {
        Ok(envelope(run_count(&self.config)))
    }

    #[tool(
        name = "list-desktop-images",
        description = "List the names of the image files on the desktop"
    )]
    pub async fn list_desktop_images(&self) -> Result<CallToolResult, McpError> {
        Ok(envelope(run_list(&self.config)))
    }

    #[tool(
        name = "compress-image",
        description = "Compress an image file on the desktop at a given quality"
    )]
    pub async fn compress_image(
        &self,
        Parameters(input): Parameters<CompressInput>,
    ) -> Result<CallToolResult, McpError> {
        Ok(envelope(run_compress(&self.config, input)))
    }
}

#[tool_handler]
impl ServerHandler for DesktopImageServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().enable_prompts().build(),
            server_info: Implementation {
                name: "desktop-image-manager".into(),
                version: self.config.version.into(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Desktop image manager — inspect and compress image files in the \
                 user's desktop folder. Use count-desktop-images or \
                 list-desktop-images to see what is there, and compress-image to \
                 re-encode a file at a chosen quality."
                    .into(),
            ),
        }
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        Ok(ListPromptsResult { prompts: prompts::list_prompts(), ..Default::default() })
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        let arguments = request.arguments.unwrap_or_default();
        prompts::get_prompt(&request.name, &arguments).ok_or_else(|| {
            McpError::invalid_params(format!("Unknown prompt: {}", request.name), None)
        })
    }
}

/// Run the MCP server on stdin/stdout
pub async fn run_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let server = DesktopImageServer::new(config);
    let service = server.serve(rmcp::transport::stdio()).await?;
    service.waiting().await?;
    Ok(())
}
