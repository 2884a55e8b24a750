//! MCP server bootstrap and request dispatch.

use std::{borrow::Cow, sync::Arc};

use crate::{
    mcp::{
        handlers::{
            add::handle_add_memory, list::handle_get_all_memories, search::handle_search_memories,
        },
        registry, schemas,
    },
    mem0::Mem0Service,
};
use rmcp::{
    ErrorData as McpError,
    handler::server::ServerHandler,
    model::{
        CallToolRequestParam, CallToolResult, Content, ListToolsResult, ServerCapabilities,
        ServerInfo, Tool, ToolAnnotations,
    },
};

/// MCP server bridging tool invocations to the upstream memory service.
#[derive(Clone)]
pub struct Mem0McpServer {
    service: Arc<Mem0Service>,
    registry: Arc<registry::Registry>,
}

impl Mem0McpServer {
    /// Create a new MCP server using the supplied memory service.
    pub fn new(service: Arc<Mem0Service>) -> Self {
        let mut registry = registry::Registry::new();
        registry.register_tool("search_memories", tool_search_memories);
        registry.register_tool("add_memory", tool_add_memory);
        registry.register_tool("get_all_memories", tool_get_all_memories);

        Self {
            service,
            registry: Arc::new(registry),
        }
    }

    fn describe_tools(&self) -> Vec<Tool> {
        vec![
            Tool {
                name: Cow::Borrowed("search_memories"),
                title: Some("Search Memories".to_string()),
                description: Some(Cow::Borrowed("Search user memories by query")),
                input_schema: Arc::new(schemas::search_memories_input_schema()),
                output_schema: None,
                annotations: Some(
                    ToolAnnotations::with_title("Search Memories")
                        .read_only(true)
                        .idempotent(true)
                        .open_world(false),
                ),
                icons: None,
            },
            Tool {
                name: Cow::Borrowed("add_memory"),
                title: Some("Add Memory".to_string()),
                description: Some(Cow::Borrowed("Add new memory from conversation")),
                input_schema: Arc::new(schemas::add_memory_input_schema()),
                output_schema: None,
                annotations: Some(
                    ToolAnnotations::with_title("Add Memory")
                        .destructive(false)
                        .idempotent(false)
                        .open_world(false),
                ),
                icons: None,
            },
            Tool {
                name: Cow::Borrowed("get_all_memories"),
                title: Some("Get All Memories".to_string()),
                description: Some(Cow::Borrowed("Get all memories for a user")),
                input_schema: Arc::new(schemas::get_all_memories_input_schema()),
                output_schema: None,
                annotations: Some(
                    ToolAnnotations::with_title("Get All Memories")
                        .read_only(true)
                        .idempotent(true)
                        .open_world(false),
                ),
                icons: None,
            },
        ]
    }
}

fn tool_search_memories(
    server: &Mem0McpServer,
    request: CallToolRequestParam,
) -> registry::ToolFuture {
    let service = server.service.clone();
    Box::pin(async move { handle_search_memories(&service, request.arguments).await })
}

fn tool_add_memory(server: &Mem0McpServer, request: CallToolRequestParam) -> registry::ToolFuture {
    let service = server.service.clone();
    Box::pin(async move { handle_add_memory(&service, request.arguments).await })
}

fn tool_get_all_memories(
    server: &Mem0McpServer,
    request: CallToolRequestParam,
) -> registry::ToolFuture {
    let service = server.service.clone();
    Box::pin(async move { handle_get_all_memories(&service, request.arguments).await })
}

impl ServerHandler for Mem0McpServer {
    fn get_info(&self) -> ServerInfo {
        let mut implementation = rmcp::model::Implementation::from_build_env();
        implementation.name = "mem0-advanced-memory".to_string();
        implementation.title = Some("Mem0 Advanced Memory".to_string());
        implementation.version = "1.0.0".to_string();

        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: implementation,
            instructions: Some(
                "Use this server to store and retrieve long-term user memories. Add conversation snippets with add_memory, then retrieve them with search_memories or get_all_memories.".into(),
            ),
            ..ServerInfo::default()
        }
    }

    fn list_tools(
        &self,
        _request: Option<rmcp::model::PaginatedRequestParam>,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListToolsResult, McpError>> + Send + '_ {
        let tools = self.describe_tools();
        std::future::ready(Ok(ListToolsResult::with_all_items(tools)))
    }

    // Failed invocations degrade to text results instead of protocol errors:
    // the session must survive bad arguments and handler faults, and clients
    // of this server expect the "Unknown tool:"/"Error:" text contract.
    #[allow(clippy::manual_async_fn)]
    fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<CallToolResult, McpError>> + Send + '_ {
        async move {
            let Some(handler) = self.registry.tools.get(request.name.as_ref()) else {
                return Ok(CallToolResult::success(vec![Content::text(format!(
                    "Unknown tool: {}",
                    request.name
                ))]));
            };

            let name = request.name.clone();
            match handler(self, request).await {
                Ok(result) => Ok(result),
                Err(error) => {
                    tracing::error!(tool = %name, error = %error.message, "Error in tool call");
                    Ok(CallToolResult::success(vec![Content::text(format!(
                        "Error: {}",
                        error.message
                    ))]))
                }
            }
        }
    }
}
