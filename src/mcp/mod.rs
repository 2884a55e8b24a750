//! Model Context Protocol (MCP) integration.
//!
//! This module exposes the upstream memory service to agent hosts over stdio.
//! The surface area is a fixed catalog of three tools: `search_memories`,
//! `add_memory`, and `get_all_memories`. Dispatch never fails the protocol
//! session: unknown tools and handler errors come back as plain text results.
//!
//! Handlers, schemas, and formatting helpers are kept in focused submodules to
//! make tests and reviews small and targeted.

mod format;
pub mod handlers;
mod registry;
mod schemas;
mod server;

pub use server::Mem0McpServer;
