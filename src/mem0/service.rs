//! Service layer bridging both surfaces to the upstream client.
//!
//! The REST proxy needs errors propagated so it can translate them into
//! status codes; the MCP gateway deliberately degrades on failure instead
//! (log and return the empty-shaped value), so a failed upstream call never
//! surfaces as an invocation error. Both postures live here, on top of one
//! shared [`Mem0Client`].

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::mem0::client::Mem0Client;
use crate::mem0::types::{Mem0Error, MemoryFilters, Message};

/// Error-propagating memory operations consumed by the REST proxy.
///
/// A trait seam so router tests can substitute a recording stub.
#[async_trait]
pub trait MemoryApi: Send + Sync {
    /// Replace the engine configuration.
    async fn configure(&self, config: Value) -> Result<Value, Mem0Error>;
    /// Store new memories from a message list.
    async fn create_memories(&self, payload: Value) -> Result<Value, Mem0Error>;
    /// List memories matching identifier filters.
    async fn list_memories(&self, filters: &MemoryFilters, limit: u32) -> Result<Value, Mem0Error>;
    /// Fetch one memory by id; `None` when it does not exist.
    async fn get_memory(&self, memory_id: &str) -> Result<Option<Value>, Mem0Error>;
    /// Search memories with a query payload.
    async fn search(&self, payload: Value) -> Result<Value, Mem0Error>;
    /// Delete one memory by id.
    async fn delete_memory(&self, memory_id: &str) -> Result<(), Mem0Error>;
    /// Bulk-delete memories matching identifier filters.
    async fn delete_memories(&self, filters: &MemoryFilters) -> Result<(), Mem0Error>;
    /// Update one memory with an unstructured payload.
    async fn update_memory(&self, memory_id: &str, payload: Value) -> Result<Value, Mem0Error>;
    /// Fetch the audit history for a session.
    async fn history(&self, session_id: &str) -> Result<Value, Mem0Error>;
}

/// Concrete service wrapping the upstream HTTP client.
pub struct Mem0Service {
    client: Mem0Client,
}

impl Mem0Service {
    /// Build the service with a client derived from the environment.
    pub fn new() -> Result<Self, Mem0Error> {
        Ok(Self {
            client: Mem0Client::new()?,
        })
    }

    /// Build the service around an existing client (used by tests).
    pub fn with_client(client: Mem0Client) -> Self {
        Self { client }
    }

    /// Search memories for the gateway, degrading to an empty list on any failure.
    pub async fn search_memories(&self, user_id: &str, query: &str, top_k: u32) -> Vec<Value> {
        let body = json!({ "user_id": user_id, "query": query, "top_k": top_k });
        match self.client.search(&body).await {
            Ok(response) => extract_results(response),
            Err(error) => {
                tracing::error!(user_id, error = %error, "Error searching memories");
                Vec::new()
            }
        }
    }

    /// Add a memory for the gateway, degrading to an error object on failure.
    pub async fn add_memory(&self, user_id: &str, messages: &[Message]) -> Value {
        let body = json!({ "user_id": user_id, "messages": messages });
        match self.client.create_memories(&body).await {
            Ok(response) => response,
            Err(error @ Mem0Error::UnexpectedStatus { .. }) => {
                tracing::error!(user_id, error = %error, "Failed to add memory");
                json!({ "error": "Failed to add memory" })
            }
            Err(error) => {
                tracing::error!(user_id, error = %error, "Error adding memory");
                json!({ "error": error.to_string() })
            }
        }
    }

    /// List all memories for a user, degrading to an empty list on any failure.
    pub async fn get_all_memories(&self, user_id: &str) -> Vec<Value> {
        match self
            .client
            .list_memories(&[("user_id", user_id.to_string())])
            .await
        {
            Ok(response) => extract_results(response),
            Err(error) => {
                tracing::error!(user_id, error = %error, "Error getting memories");
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl MemoryApi for Mem0Service {
    async fn configure(&self, config: Value) -> Result<Value, Mem0Error> {
        self.client.configure(&config).await
    }

    async fn create_memories(&self, payload: Value) -> Result<Value, Mem0Error> {
        self.client.create_memories(&payload).await
    }

    async fn list_memories(&self, filters: &MemoryFilters, limit: u32) -> Result<Value, Mem0Error> {
        let mut query = filters.as_query_pairs();
        query.push(("limit", limit.to_string()));
        self.client.list_memories(&query).await
    }

    async fn get_memory(&self, memory_id: &str) -> Result<Option<Value>, Mem0Error> {
        self.client.get_memory(memory_id).await
    }

    async fn search(&self, payload: Value) -> Result<Value, Mem0Error> {
        self.client.search(&payload).await
    }

    async fn delete_memory(&self, memory_id: &str) -> Result<(), Mem0Error> {
        self.client.delete_memory(memory_id).await
    }

    async fn delete_memories(&self, filters: &MemoryFilters) -> Result<(), Mem0Error> {
        self.client.delete_memories(filters).await
    }

    async fn update_memory(&self, memory_id: &str, payload: Value) -> Result<Value, Mem0Error> {
        self.client.update_memory(memory_id, &payload).await
    }

    async fn history(&self, session_id: &str) -> Result<Value, Mem0Error> {
        self.client.history(session_id).await
    }
}

/// Pull the `results` list out of an upstream response, defaulting to empty.
pub fn extract_results(response: Value) -> Vec<Value> {
    match response {
        Value::Object(mut map) => match map.remove("results") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}
