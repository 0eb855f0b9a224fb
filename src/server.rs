//! MCP server implementation for the emoji catalog
//!
//! Declares the three tools and delegates to the pure handlers in
//! [`crate::handlers`]. Unknown tool names and undeserializable parameters
//! are rejected by the rmcp router before a handler runs.

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError,
};
use std::sync::Arc;

use crate::config::EmojiConfig;
use crate::dataset::EmojiDataset;
use crate::handlers;
use crate::params::{GetUrlParams, SearchEmojisParams};

/// The main emoji MCP server
pub struct EmojiMcpServer {
    dataset: Arc<EmojiDataset>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl EmojiMcpServer {
    /// Create a server with config from the environment
    pub fn new() -> Result<Self, anyhow::Error> {
        let config = EmojiConfig::from_env();
        config.validate()?;
        Self::with_config(&config)
    }

    /// Create a server from an explicit config
    pub fn with_config(config: &EmojiConfig) -> Result<Self, anyhow::Error> {
        let dataset = Arc::new(EmojiDataset::load(&config.data_file)?);

        Ok(Self {
            dataset,
            tool_router: Self::tool_router(),
        })
    }

    /// The loaded catalog (read-only)
    pub fn dataset(&self) -> &EmojiDataset {
        &self.dataset
    }

    #[tool(
        description = "List every available iOS emoji name in the catalog, sorted alphabetically, with the total count."
    )]
    async fn get_emojis(&self) -> Result<CallToolResult, McpError> {
        handlers::get_emojis(&self.dataset)
    }

    #[tool(
        description = "Fuzzy-search iOS emoji names. Matches exact names, prefixes, substrings, and in-order character subsequences, best matches first."
    )]
    async fn search_emojis(
        &self,
        Parameters(params): Parameters<SearchEmojisParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::search_emojis(&self.dataset, params)
    }

    #[tool(
        description = "Get the image URL for an emoji by exact name, at 160x160 or 320x320 pixels (default 160)."
    )]
    async fn get_url(
        &self,
        Parameters(params): Parameters<GetUrlParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_url(&self.dataset, params)
    }
}

#[tool_handler]
impl rmcp::ServerHandler for EmojiMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "iOS emoji image catalog server. Use get_emojis to list all \
                 names, search_emojis to fuzzy-search them, and get_url to \
                 resolve a name and size to an image URL."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
