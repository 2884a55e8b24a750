//! Upstream mem0 memory-service integration.
//!
//! The bridge owns no memory state of its own: every operation is a single
//! HTTP call against the configured mem0 service. [`client::Mem0Client`]
//! wraps the raw endpoints; [`service::Mem0Service`] layers the two call
//! postures on top of it: error-propagating operations for the REST proxy,
//! and degraded (log-and-return-empty) operations for the MCP gateway tools.

mod client;
mod service;
mod types;

pub use client::Mem0Client;
pub use service::{Mem0Service, MemoryApi, extract_results};
pub use types::{Mem0Error, MemoryFilters, Message};
