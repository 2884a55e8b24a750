//! Shared types for the upstream memory-service client.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by the upstream memory-service client.
#[derive(Debug, Error)]
pub enum Mem0Error {
    /// Transport-level failure (connect, timeout, body decode).
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),
    /// The memory service answered with a non-success status.
    #[error("Unexpected status {status} from memory service: {body}")]
    UnexpectedStatus {
        /// HTTP status returned by the service.
        status: StatusCode,
        /// Response body, captured for diagnostics.
        body: String,
    },
    /// The configured base URL could not be parsed.
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}

/// A single conversation message grouped into a memory on ingestion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    /// Conventionally `"user"` or `"assistant"`; not enforced.
    pub role: String,
    /// Message content.
    pub content: String,
}

/// Identifier filters accepted by memory listing and deletion.
///
/// The memory service requires at least one of the three identifiers on
/// every request that scopes by owner.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryFilters {
    /// User identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Agent identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,
    /// Run identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_id: Option<String>,
}

impl MemoryFilters {
    /// True when at least one identifier is present.
    pub fn any(&self) -> bool {
        self.user_id.is_some() || self.agent_id.is_some() || self.run_id.is_some()
    }

    /// Render the set identifiers as query-string pairs.
    pub fn as_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(user_id) = &self.user_id {
            pairs.push(("user_id", user_id.clone()));
        }
        if let Some(agent_id) = &self.agent_id {
            pairs.push(("agent_id", agent_id.clone()));
        }
        if let Some(run_id) = &self.run_id {
            pairs.push(("run_id", run_id.clone()));
        }
        pairs
    }
}
