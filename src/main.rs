//! Emoji MCP - iOS emoji image catalog server over stdio

use rmcp::{transport::io::stdio, ServiceExt};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use emoji_mcp::EmojiMcpServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to stderr (MCP uses stdout for the protocol)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .with(EnvFilter::from_default_env().add_directive("emoji_mcp=info".parse()?))
        .init();

    tracing::info!("Starting emoji MCP server");

    // Dataset load failure here is fatal: the process exits non-zero
    let server = EmojiMcpServer::new()?;

    let service = server.serve(stdio()).await?;

    tracing::info!("Emoji MCP server running");

    service.waiting().await?;

    tracing::info!("Emoji MCP server stopped");

    Ok(())
}
