//! JSON schema builders for MCP tools.
//!
//! The catalog shapes are part of the compatibility contract with existing
//! hosts, so properties and required lists match the advertised surface
//! exactly; no `additionalProperties` constraint is imposed and unknown
//! arguments are ignored at parse time.

use serde_json::{Map, Value};

/// Build the schema describing the `search_memories` tool input.
pub(crate) fn search_memories_input_schema() -> Map<String, Value> {
    let mut properties = Map::new();
    properties.insert("user_id".into(), string_schema("User identifier"));
    properties.insert("query".into(), string_schema("Search query"));

    let mut top_k_schema = Map::new();
    top_k_schema.insert("type".into(), Value::String("integer".into()));
    top_k_schema.insert("default".into(), Value::Number(5.into()));
    top_k_schema.insert(
        "description".into(),
        Value::String("Number of results".into()),
    );
    properties.insert("top_k".into(), Value::Object(top_k_schema));

    finalize_object_schema(properties, &["user_id", "query"])
}

/// Build the schema describing the `add_memory` tool input.
pub(crate) fn add_memory_input_schema() -> Map<String, Value> {
    let mut properties = Map::new();
    properties.insert("user_id".into(), string_schema("User identifier"));

    let mut message_properties = Map::new();
    message_properties.insert("role".into(), bare_string_schema());
    message_properties.insert("content".into(), bare_string_schema());
    let mut message_schema = Map::new();
    message_schema.insert("type".into(), Value::String("object".into()));
    message_schema.insert("properties".into(), Value::Object(message_properties));

    let mut messages_schema = Map::new();
    messages_schema.insert("type".into(), Value::String("array".into()));
    messages_schema.insert("items".into(), Value::Object(message_schema));
    properties.insert("messages".into(), Value::Object(messages_schema));

    finalize_object_schema(properties, &["user_id", "messages"])
}

/// Build the schema describing the `get_all_memories` tool input.
pub(crate) fn get_all_memories_input_schema() -> Map<String, Value> {
    let mut properties = Map::new();
    properties.insert("user_id".into(), string_schema("User identifier"));

    finalize_object_schema(properties, &["user_id"])
}

fn string_schema(description: &str) -> Value {
    let mut schema = Map::new();
    schema.insert("type".into(), Value::String("string".into()));
    schema.insert("description".into(), Value::String(description.into()));
    Value::Object(schema)
}

fn bare_string_schema() -> Value {
    let mut schema = Map::new();
    schema.insert("type".into(), Value::String("string".into()));
    Value::Object(schema)
}

fn finalize_object_schema(properties: Map<String, Value>, required: &[&str]) -> Map<String, Value> {
    let mut schema = Map::new();
    schema.insert("type".into(), Value::String("object".into()));
    schema.insert("properties".into(), Value::Object(properties));
    if !required.is_empty() {
        schema.insert(
            "required".into(),
            Value::Array(
                required
                    .iter()
                    .map(|&key| Value::String(key.into()))
                    .collect(),
            ),
        );
    }
    schema
}
