//! MCP server entrypoint (stdio transport).
//!
//! Launches the tool gateway over stdio for editor/agent hosts. The process
//! blocks on the protocol stream and exits cleanly when the host closes it;
//! runtime configuration is shared with the HTTP binary.
use anyhow::{Context, Result};
use mem0_bridge::{config, logging, mcp::Mem0McpServer, mem0};
use rmcp::{service::ServiceExt, transport::stdio};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    config::init_config();
    logging::init_tracing();

    let service = Arc::new(
        mem0::Mem0Service::new().context("failed to build memory service client")?,
    );
    let server = Mem0McpServer::new(service);

    let service = server
        .serve(stdio())
        .await
        .context("failed to start MCP server over stdio")?;

    service
        .waiting()
        .await
        .context("MCP server terminated unexpectedly")?;

    Ok(())
}
