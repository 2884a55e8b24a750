//! Default memory-engine configuration assembled from the environment.
//!
//! The upstream mem0 service accepts a configuration object through its
//! `/configure` endpoint describing the vector store, graph store, LLM,
//! embedder, and history database it should use. This module builds that
//! object from environment variables so the REST proxy can seed its
//! configuration cell and forward a complete default when asked.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::{load_env_optional, load_env_or};

/// Configuration format version understood by the engine.
pub const ENGINE_CONFIG_VERSION: &str = "v1.1";

/// Full engine configuration object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Configuration format version.
    pub version: String,
    /// Vector store backing memory embeddings.
    pub vector_store: ProviderConfig,
    /// Graph store backing entity relations, when enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph_store: Option<ProviderConfig>,
    /// LLM used by the engine for fact extraction.
    pub llm: ProviderConfig,
    /// Embedding model configuration.
    pub embedder: ProviderConfig,
    /// Path of the SQLite history database inside the engine container.
    pub history_db_path: String,
}

/// A provider name paired with its provider-specific settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider identifier (e.g. `qdrant`, `neo4j`, `openai`).
    pub provider: String,
    /// Provider-specific settings, passed through to the engine verbatim.
    pub config: Value,
}

/// Build the default engine configuration from environment variables.
///
/// Vector store selection honors `VECTOR_STORE_PROVIDER` (`qdrant` by default,
/// `pgvector` switches to the Postgres settings); graph store selection honors
/// `GRAPH_STORE_PROVIDER` (`neo4j` by default, `memgraph` as the alternative,
/// anything else disables the graph store).
pub fn default_config() -> EngineConfig {
    EngineConfig {
        version: ENGINE_CONFIG_VERSION.to_string(),
        vector_store: vector_store_from_env(),
        graph_store: graph_store_from_env(),
        llm: ProviderConfig {
            provider: "openai".into(),
            config: serde_json::json!({
                "api_key": load_env_optional("OPENAI_API_KEY"),
                "temperature": 0.7,
                "model": load_env_or("OPENAI_LLM_MODEL", "gpt-4o"),
            }),
        },
        embedder: ProviderConfig {
            provider: "openai".into(),
            config: serde_json::json!({
                "api_key": load_env_optional("OPENAI_API_KEY"),
                "model": load_env_or("OPENAI_EMBEDDER_MODEL", "text-embedding-3-small"),
            }),
        },
        history_db_path: load_env_or("HISTORY_DB_PATH", "/app/history/history.db"),
    }
}

fn vector_store_from_env() -> ProviderConfig {
    match load_env_or("VECTOR_STORE_PROVIDER", "qdrant").to_lowercase().as_str() {
        "pgvector" => ProviderConfig {
            provider: "pgvector".into(),
            config: serde_json::json!({
                "host": load_env_or("POSTGRES_HOST", "postgres"),
                "port": parse_port("POSTGRES_PORT", 5432),
                "dbname": load_env_or("POSTGRES_DB", "postgres"),
                "user": load_env_or("POSTGRES_USER", "postgres"),
                "password": load_env_or("POSTGRES_PASSWORD", "postgres"),
                "collection_name": load_env_or("POSTGRES_COLLECTION_NAME", "memories"),
            }),
        },
        _ => ProviderConfig {
            provider: "qdrant".into(),
            config: serde_json::json!({
                "host": load_env_or("QDRANT_HOST", "qdrant"),
                "port": parse_port("QDRANT_PORT", 6333),
                "collection_name": load_env_or("QDRANT_COLLECTION_NAME", "mem0"),
            }),
        },
    }
}

fn graph_store_from_env() -> Option<ProviderConfig> {
    match load_env_or("GRAPH_STORE_PROVIDER", "neo4j").to_lowercase().as_str() {
        "neo4j" => Some(ProviderConfig {
            provider: "neo4j".into(),
            config: serde_json::json!({
                "url": load_env_or("NEO4J_URI", "bolt://neo4j:7687"),
                "username": load_env_or("NEO4J_USERNAME", "neo4j"),
                "password": load_env_or("NEO4J_PASSWORD", "mem0graph"),
            }),
        }),
        "memgraph" => Some(ProviderConfig {
            provider: "memgraph".into(),
            config: serde_json::json!({
                "url": load_env_or("MEMGRAPH_URI", "bolt://localhost:7687"),
                "username": load_env_or("MEMGRAPH_USERNAME", "memgraph"),
                "password": load_env_or("MEMGRAPH_PASSWORD", "mem0graph"),
            }),
        }),
        _ => None,
    }
}

fn parse_port(key: &str, default: u16) -> u16 {
    match load_env_optional(key) {
        Some(value) => value.parse().unwrap_or_else(|_| {
            tracing::warn!(key, value, "Invalid port value; using default");
            default
        }),
        None => default,
    }
}
