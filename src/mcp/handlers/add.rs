//! Handler for the `add_memory` tool.

use std::sync::Arc;

use crate::{
    mcp::{format::dumps, handlers::parse_arguments},
    mem0::{Mem0Service, Message},
};
use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content, JsonObject},
};
use serde::Deserialize;

/// Request payload for the `add_memory` tool.
#[derive(Debug, Deserialize)]
pub(crate) struct AddMemoryRequest {
    /// Owner of the new memory.
    pub(crate) user_id: String,
    /// Conversation messages to store as one memory.
    pub(crate) messages: Vec<Message>,
}

/// Handle `add_memory` by forwarding the messages upstream and echoing the response.
///
/// On upstream failure the service layer substitutes an error object, which is
/// rendered through the same `Memory added:` prefix; the invocation itself
/// always succeeds.
pub(crate) async fn handle_add_memory(
    service: &Arc<Mem0Service>,
    arguments: Option<JsonObject>,
) -> Result<CallToolResult, McpError> {
    let args: AddMemoryRequest = parse_arguments(arguments)?;

    let result = service.add_memory(&args.user_id, &args.messages).await;

    let text = format!("Memory added: {}", dumps(&result));
    Ok(CallToolResult::success(vec![Content::text(text)]))
}
