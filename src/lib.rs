#![deny(missing_docs)]

//! Core library for the mem0 bridge.
//!
//! The bridge exposes a remote mem0 memory service through two surfaces that
//! share one upstream HTTP client: an MCP tool server (stdio) and a REST
//! proxy (axum).

/// HTTP routing and REST proxy handlers.
pub mod api;
/// Environment-driven configuration management.
pub mod config;
/// Default memory-engine configuration assembled from the environment.
pub mod engine;
/// Structured logging and tracing setup.
pub mod logging;
/// Model Context Protocol server implementation.
pub mod mcp;
/// Upstream mem0 HTTP client and service layer.
pub mod mem0;
