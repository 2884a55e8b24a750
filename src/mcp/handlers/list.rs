//! Handler for the `get_all_memories` tool.

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

/// Request payload for the `get_all_memories` tool.
#[derive(Debug, Deserialize)]
pub(crate) struct GetAllMemoriesRequest {
    /// Owner whose memories should be listed.
    pub(crate) user_id: String,
}

/// Handle `get_all_memories` by listing a user's memories with a count header.
pub(crate) async fn handle_get_all_memories(
    service: &Arc<Mem0Service>,
    arguments: Option<JsonObject>,
) -> Result<CallToolResult, McpError> {
    let args: GetAllMemoriesRequest = parse_arguments(arguments)?;

    let memories = service.get_all_memories(&args.user_id).await;

    let text = if memories.is_empty() {
        "User has no memories.".to_string()
    } else {
        numbered_listing(&format!("User has {} memories:\n", memories.len()), &memories)
    };

    Ok(CallToolResult::success(vec![Content::text(text)]))
}
