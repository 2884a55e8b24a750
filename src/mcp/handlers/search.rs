//! Handler for the `search_memories` tool.

use std::sync::Arc;

use crate::{
    mcp::{format::numbered_listing, handlers::parse_arguments},
    mem0::Mem0Service,
};
use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content, JsonObject},
};
use serde::Deserialize;

/// Request payload for the `search_memories` tool.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchMemoriesRequest {
    /// Owner of the memories to search.
    pub(crate) user_id: String,
    /// Natural language search query.
    pub(crate) query: String,
    /// Number of results to request upstream.
    #[serde(default = "default_top_k")]
    pub(crate) top_k: u32,
}

pub(crate) fn default_top_k() -> u32 {
    5
}

/// Handle `search_memories` by querying the upstream service and rendering a listing.
///
/// Upstream failures have already been degraded to an empty list by the
/// service layer, so the caller sees the no-results text rather than an error.
pub(crate) async fn handle_search_memories(
    service: &Arc<Mem0Service>,
    arguments: Option<JsonObject>,
) -> Result<CallToolResult, McpError> {
    let args: SearchMemoriesRequest = parse_arguments(arguments)?;

    let memories = service
        .search_memories(&args.user_id, &args.query, args.top_k)
        .await;

    let text = if memories.is_empty() {
        "No memories found for the query.".to_string()
    } else {
        numbered_listing("Found memories:\n", &memories)
    };

    Ok(CallToolResult::success(vec![Content::text(text)]))
}
