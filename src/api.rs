//! HTTP surface for the mem0 bridge.
//!
//! This module exposes the REST proxy over the upstream memory service:
//!
//! - `POST /configure` – Replace the engine configuration.
//! - `POST /memories` / `GET /memories` / `DELETE /memories` – Create, list,
//!   and bulk-delete memories scoped by `user_id`/`agent_id`/`run_id`.
//! - `GET|PUT|DELETE /memories/{id}` – Operate on one memory.
//! - `POST /search` – Ranked memory search.
//! - `GET /history/{session_id}` – Session audit history.
//! - `GET /` – Redirect to the command catalog; `GET /commands` – catalog;
//!   `GET /health` – liveness probe.
//!
//! Every handler forwards to the upstream service and applies one uniform
//! error translation: missing identifiers become 400 with a fixed message,
//! a missing memory becomes 404, and any upstream failure becomes 500
//! carrying the failure's message in a `{"detail": ...}` body.

use crate::engine;
use crate::mem0::{Mem0Error, MemoryApi, MemoryFilters, Message};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Fixed message for requests missing all three owner identifiers.
const IDENTIFIER_REQUIRED: &str =
    "At least one identifier (user_id, agent_id, run_id) is required.";

/// Shared router state: the memory service plus the engine configuration cell.
///
/// The configuration cell replaces the source's process-wide mutable engine
/// instance; it is seeded from the environment and swapped atomically under
/// the lock when `/configure` succeeds.
pub struct ApiState<S> {
    service: Arc<S>,
    engine_config: Arc<RwLock<Value>>,
}

impl<S> Clone for ApiState<S> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            engine_config: self.engine_config.clone(),
        }
    }
}

/// Build the HTTP router exposing the REST proxy surface.
pub fn create_router<S>(service: Arc<S>) -> Router
where
    S: MemoryApi + 'static,
{
    let default_config =
        serde_json::to_value(engine::default_config()).unwrap_or_else(|_| json!({}));
    let state = ApiState {
        service,
        engine_config: Arc::new(RwLock::new(default_config)),
    };

    Router::new()
        .route("/", get(root_redirect))
        .route("/configure", post(set_config::<S>))
        .route(
            "/memories",
            post(create_memories::<S>)
                .get(list_memories::<S>)
                .delete(delete_all_memories::<S>),
        )
        .route(
            "/memories/:memory_id",
            get(get_memory::<S>)
                .put(update_memory::<S>)
                .delete(delete_memory::<S>),
        )
        .route("/search", post(search_memories::<S>))
        .route("/history/:session_id", get(get_history::<S>))
        .route("/health", get(health_check))
        .route("/commands", get(get_commands))
        .with_state(state)
}

/// Request body for `POST /memories`.
#[derive(Debug, Serialize, Deserialize)]
struct MemoryCreate {
    /// Messages to store as one memory.
    messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    agent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    run_id: Option<String>,
    /// Free-form metadata persisted with the memory.
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<Value>,
}

impl MemoryCreate {
    fn filters(&self) -> MemoryFilters {
        MemoryFilters {
            user_id: self.user_id.clone(),
            agent_id: self.agent_id.clone(),
            run_id: self.run_id.clone(),
        }
    }
}

/// Request body for `POST /search`.
#[derive(Debug, Serialize, Deserialize)]
struct SearchRequest {
    /// Search query.
    query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    agent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    run_id: Option<String>,
    /// Additional engine-side filters, passed through verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    filters: Option<Value>,
    /// Number of top results to return.
    #[serde(default = "default_top_k")]
    top_k: u32,
}

fn default_top_k() -> u32 {
    5
}

impl SearchRequest {
    fn identifiers(&self) -> MemoryFilters {
        MemoryFilters {
            user_id: self.user_id.clone(),
            agent_id: self.agent_id.clone(),
            run_id: self.run_id.clone(),
        }
    }
}

/// Query parameters for `GET /memories` and `DELETE /memories`.
///
/// `serde(flatten)` does not round-trip through the query-string
/// deserializer, so the identifier fields are spelled out here.
#[derive(Debug, Deserialize)]
struct MemoriesQuery {
    user_id: Option<String>,
    agent_id: Option<String>,
    run_id: Option<String>,
    limit: Option<u32>,
}

impl MemoriesQuery {
    fn filters(&self) -> MemoryFilters {
        MemoryFilters {
            user_id: self.user_id.clone(),
            agent_id: self.agent_id.clone(),
            run_id: self.run_id.clone(),
        }
    }
}

/// Replace the engine configuration and forward it upstream.
async fn set_config<S>(
    State(state): State<ApiState<S>>,
    Json(config): Json<Value>,
) -> Result<Json<Value>, AppError>
where
    S: MemoryApi,
{
    state.service.configure(config.clone()).await?;
    *state.engine_config.write().await = config;
    tracing::info!("Engine configuration replaced");
    Ok(Json(json!({ "message": "Configuration set successfully" })))
}

/// Store new memories.
async fn create_memories<S>(
    State(state): State<ApiState<S>>,
    Json(request): Json<MemoryCreate>,
) -> Result<Json<Value>, AppError>
where
    S: MemoryApi,
{
    if !request.filters().any() {
        return Err(AppError::BadRequest(IDENTIFIER_REQUIRED));
    }

    let payload = serde_json::to_value(&request).map_err(AppError::internal)?;
    let response = state.service.create_memories(payload).await?;
    Ok(Json(response))
}

/// List memories matching the identifier filters.
async fn list_memories<S>(
    State(state): State<ApiState<S>>,
    Query(query): Query<MemoriesQuery>,
) -> Result<Json<Value>, AppError>
where
    S: MemoryApi,
{
    let filters = query.filters();
    if !filters.any() {
        return Err(AppError::BadRequest(IDENTIFIER_REQUIRED));
    }

    let response = state
        .service
        .list_memories(&filters, query.limit.unwrap_or(100))
        .await?;
    Ok(Json(response))
}

/// Fetch one memory by id.
async fn get_memory<S>(
    State(state): State<ApiState<S>>,
    Path(memory_id): Path<String>,
) -> Result<Json<Value>, AppError>
where
    S: MemoryApi,
{
    match state.service.get_memory(&memory_id).await? {
        Some(memory) => Ok(Json(json!({ "result": memory }))),
        None => Err(AppError::NotFound("Memory not found")),
    }
}

/// Search memories.
async fn search_memories<S>(
    State(state): State<ApiState<S>>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<Value>, AppError>
where
    S: MemoryApi,
{
    if !request.identifiers().any() {
        return Err(AppError::BadRequest(IDENTIFIER_REQUIRED));
    }

    let payload = serde_json::to_value(&request).map_err(AppError::internal)?;
    let response = state.service.search(payload).await?;
    Ok(Json(response))
}

/// Delete one memory by id. The confirmation is idempotent: it does not
/// distinguish whether the memory previously existed.
async fn delete_memory<S>(
    State(state): State<ApiState<S>>,
    Path(memory_id): Path<String>,
) -> Result<Json<Value>, AppError>
where
    S: MemoryApi,
{
    state.service.delete_memory(&memory_id).await?;
    Ok(Json(json!({
        "message": format!("Memory {memory_id} deleted successfully")
    })))
}

/// Bulk-delete memories matching the identifier filters.
async fn delete_all_memories<S>(
    State(state): State<ApiState<S>>,
    Query(query): Query<MemoriesQuery>,
) -> Result<Json<Value>, AppError>
where
    S: MemoryApi,
{
    let filters = query.filters();
    if !filters.any() {
        return Err(AppError::BadRequest(IDENTIFIER_REQUIRED));
    }

    state.service.delete_memories(&filters).await?;
    Ok(Json(json!({ "message": "Memories deleted successfully" })))
}

/// Update one memory with an unstructured payload, forwarded verbatim.
async fn update_memory<S>(
    State(state): State<ApiState<S>>,
    Path(memory_id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, AppError>
where
    S: MemoryApi,
{
    let response = state.service.update_memory(&memory_id, payload).await?;
    Ok(Json(json!({ "result": response })))
}

/// Return the audit history for a session.
async fn get_history<S>(
    State(state): State<ApiState<S>>,
    Path(session_id): Path<String>,
) -> Result<Json<Value>, AppError>
where
    S: MemoryApi,
{
    let response = state.service.history(&session_id).await?;
    Ok(Json(response))
}

/// Redirect the root path to the machine-readable catalog.
async fn root_redirect() -> Redirect {
    Redirect::temporary("/commands")
}

/// Liveness probe.
async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// Descriptor for a single command in the discovery catalog.
#[derive(Serialize)]
struct CommandDescriptor {
    name: &'static str,
    method: &'static str,
    path: &'static str,
    description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    request_example: Option<Value>,
}

/// Response body for `GET /commands`.
#[derive(Serialize)]
struct CommandsResponse {
    commands: Vec<CommandDescriptor>,
}

/// Enumerate supported HTTP commands for discovery by hosts and tools.
async fn get_commands() -> Json<CommandsResponse> {
    Json(CommandsResponse {
        commands: vec![
            CommandDescriptor {
                name: "configure",
                method: "POST",
                path: "/configure",
                description: "Replace the memory-engine configuration.",
                request_example: None,
            },
            CommandDescriptor {
                name: "create_memories",
                method: "POST",
                path: "/memories",
                description: "Store a list of messages as memories; requires user_id, agent_id, or run_id.",
                request_example: Some(json!({
                    "messages": [{ "role": "user", "content": "I prefer green tea" }],
                    "user_id": "u1",
                    "metadata": { "topic": "preferences" }
                })),
            },
            CommandDescriptor {
                name: "list_memories",
                method: "GET",
                path: "/memories",
                description: "List memories matching identifier filters; optional limit (default 100).",
                request_example: None,
            },
            CommandDescriptor {
                name: "get_memory",
                method: "GET",
                path: "/memories/{memory_id}",
                description: "Fetch one memory by id.",
                request_example: None,
            },
            CommandDescriptor {
                name: "search",
                method: "POST",
                path: "/search",
                description: "Return ranked matches for a query; requires user_id, agent_id, or run_id.",
                request_example: Some(json!({
                    "query": "what tea does the user like?",
                    "user_id": "u1",
                    "top_k": 5
                })),
            },
            CommandDescriptor {
                name: "delete_memory",
                method: "DELETE",
                path: "/memories/{memory_id}",
                description: "Delete one memory by id (idempotent confirmation).",
                request_example: None,
            },
            CommandDescriptor {
                name: "delete_memories",
                method: "DELETE",
                path: "/memories",
                description: "Bulk-delete memories matching identifier filters.",
                request_example: None,
            },
            CommandDescriptor {
                name: "update_memory",
                method: "PUT",
                path: "/memories/{memory_id}",
                description: "Update memory content with an unstructured payload.",
                request_example: None,
            },
            CommandDescriptor {
                name: "history",
                method: "GET",
                path: "/history/{session_id}",
                description: "Return the audit history for a session.",
                request_example: None,
            },
            CommandDescriptor {
                name: "health",
                method: "GET",
                path: "/health",
                description: "Liveness probe.",
                request_example: None,
            },
        ],
    })
}

enum AppError {
    BadRequest(&'static str),
    NotFound(&'static str),
    Internal(String),
    Upstream(Mem0Error),
}

impl AppError {
    fn internal(error: serde_json::Error) -> Self {
        Self::Internal(error.to_string())
    }
}

impl From<Mem0Error> for AppError {
    fn from(inner: Mem0Error) -> Self {
        Self::Upstream(inner)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message.to_string()),
            Self::NotFound(message) => (StatusCode::NOT_FOUND, message.to_string()),
            Self::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
            Self::Upstream(error) => (StatusCode::INTERNAL_SERVER_ERROR, error.to_string()),
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::{
        body::{Body, to_bytes},
        http::{Method, Request, StatusCode},
    };
    use tokio::sync::Mutex;
    use tower::ServiceExt;

    #[derive(Clone, Debug)]
    enum RecordedCall {
        Configure(Value),
        Create(Value),
        List(MemoryFilters, u32),
        Search(Value),
        DeleteOne(String),
        DeleteAll(MemoryFilters),
        Update(String, Value),
        History(String),
    }

    struct StubMemoryService {
        calls: Mutex<Vec<RecordedCall>>,
        fail_upstream: bool,
        memory_missing: bool,
    }

    impl StubMemoryService {
        fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_upstream: false,
                memory_missing: false,
            }
        }

        fn failing() -> Self {
            Self {
                fail_upstream: true,
                ..Self::new()
            }
        }

        async fn record(&self, call: RecordedCall) {
            self.calls.lock().await.push(call);
        }

        fn upstream_error(&self) -> Result<(), Mem0Error> {
            if self.fail_upstream {
                Err(Mem0Error::UnexpectedStatus {
                    status: reqwest::StatusCode::BAD_GATEWAY,
                    body: "engine exploded".into(),
                })
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl MemoryApi for StubMemoryService {
        async fn configure(&self, config: Value) -> Result<Value, Mem0Error> {
            self.upstream_error()?;
            self.record(RecordedCall::Configure(config)).await;
            Ok(json!({ "message": "Configuration set successfully" }))
        }

        async fn create_memories(&self, payload: Value) -> Result<Value, Mem0Error> {
            self.upstream_error()?;
            self.record(RecordedCall::Create(payload)).await;
            Ok(json!({ "results": [{ "id": "m1", "event": "ADD" }] }))
        }

        async fn list_memories(
            &self,
            filters: &MemoryFilters,
            limit: u32,
        ) -> Result<Value, Mem0Error> {
            self.upstream_error()?;
            self.record(RecordedCall::List(filters.clone(), limit)).await;
            Ok(json!({ "results": [] }))
        }

        async fn get_memory(&self, _memory_id: &str) -> Result<Option<Value>, Mem0Error> {
            self.upstream_error()?;
            if self.memory_missing {
                Ok(None)
            } else {
                Ok(Some(json!({ "id": "m1", "memory": "likes tea" })))
            }
        }

        async fn search(&self, payload: Value) -> Result<Value, Mem0Error> {
            self.upstream_error()?;
            self.record(RecordedCall::Search(payload)).await;
            Ok(json!({ "results": [{ "memory": "likes tea", "score": 0.9 }] }))
        }

        async fn delete_memory(&self, memory_id: &str) -> Result<(), Mem0Error> {
            self.upstream_error()?;
            self.record(RecordedCall::DeleteOne(memory_id.to_string()))
                .await;
            Ok(())
        }

        async fn delete_memories(&self, filters: &MemoryFilters) -> Result<(), Mem0Error> {
            self.upstream_error()?;
            self.record(RecordedCall::DeleteAll(filters.clone())).await;
            Ok(())
        }

        async fn update_memory(
            &self,
            memory_id: &str,
            payload: Value,
        ) -> Result<Value, Mem0Error> {
            self.upstream_error()?;
            self.record(RecordedCall::Update(memory_id.to_string(), payload))
                .await;
            Ok(json!({ "id": memory_id }))
        }

        async fn history(&self, session_id: &str) -> Result<Value, Mem0Error> {
            self.upstream_error()?;
            self.record(RecordedCall::History(session_id.to_string()))
                .await;
            Ok(json!({ "results": [] }))
        }
    }

    async fn send(
        app: Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let request = match body {
            Some(value) => Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(value.to_string()))
                .expect("request"),
            None => Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .expect("request"),
        };

        let response = app.oneshot(request).await.expect("router response");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json body")
        };
        (status, json)
    }

    #[tokio::test]
    async fn create_memories_requires_an_identifier() {
        let app = create_router(Arc::new(StubMemoryService::new()));
        let (status, body) = send(
            app,
            Method::POST,
            "/memories",
            Some(json!({ "messages": [{ "role": "user", "content": "hi" }] })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], IDENTIFIER_REQUIRED);
    }

    #[tokio::test]
    async fn create_memories_forwards_identifiers_and_metadata() {
        let service = Arc::new(StubMemoryService::new());
        let app = create_router(service.clone());

        let (status, body) = send(
            app,
            Method::POST,
            "/memories",
            Some(json!({
                "messages": [{ "role": "user", "content": "hi" }],
                "run_id": "session-9",
                "metadata": { "topic": "greeting" }
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["results"][0]["id"], "m1");

        let calls = service.calls.lock().await;
        match &calls[0] {
            RecordedCall::Create(payload) => {
                assert_eq!(payload["run_id"], "session-9");
                assert_eq!(payload["metadata"]["topic"], "greeting");
                assert!(payload.get("user_id").is_none());
            }
            other => panic!("unexpected call {other:?}"),
        }
    }

    #[tokio::test]
    async fn list_memories_defaults_limit_to_100() {
        let service = Arc::new(StubMemoryService::new());
        let app = create_router(service.clone());

        let (status, _) = send(app, Method::GET, "/memories?agent_id=a1", None).await;
        assert_eq!(status, StatusCode::OK);

        let calls = service.calls.lock().await;
        match &calls[0] {
            RecordedCall::List(filters, limit) => {
                assert_eq!(filters.agent_id.as_deref(), Some("a1"));
                assert_eq!(*limit, 100);
            }
            other => panic!("unexpected call {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_memory_maps_to_404() {
        let service = Arc::new(StubMemoryService {
            memory_missing: true,
            ..StubMemoryService::new()
        });
        let app = create_router(service);

        let (status, body) = send(app, Method::GET, "/memories/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Memory not found");
    }

    #[tokio::test]
    async fn search_requires_an_identifier() {
        let app = create_router(Arc::new(StubMemoryService::new()));
        let (status, body) = send(
            app,
            Method::POST,
            "/search",
            Some(json!({ "query": "tea" })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], IDENTIFIER_REQUIRED);
    }

    #[tokio::test]
    async fn search_applies_default_top_k() {
        let service = Arc::new(StubMemoryService::new());
        let app = create_router(service.clone());

        let (status, _) = send(
            app,
            Method::POST,
            "/search",
            Some(json!({ "query": "tea", "user_id": "u1" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let calls = service.calls.lock().await;
        match &calls[0] {
            RecordedCall::Search(payload) => {
                assert_eq!(payload["top_k"], 5);
                assert_eq!(payload["user_id"], "u1");
            }
            other => panic!("unexpected call {other:?}"),
        }
    }

    #[tokio::test]
    async fn upstream_failure_maps_to_500_with_detail() {
        let app = create_router(Arc::new(StubMemoryService::failing()));
        let (status, body) = send(
            app,
            Method::POST,
            "/search",
            Some(json!({ "query": "tea", "user_id": "u1" })),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let detail = body["detail"].as_str().expect("detail string");
        assert!(detail.contains("engine exploded"));
    }

    #[tokio::test]
    async fn delete_memory_confirms_regardless_of_prior_existence() {
        let service = Arc::new(StubMemoryService::new());
        let app = create_router(service.clone());

        let (status, body) = send(app, Method::DELETE, "/memories/m1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Memory m1 deleted successfully");
    }

    #[tokio::test]
    async fn delete_all_requires_an_identifier() {
        let app = create_router(Arc::new(StubMemoryService::new()));
        let (status, body) = send(app, Method::DELETE, "/memories", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], IDENTIFIER_REQUIRED);
    }

    #[tokio::test]
    async fn update_memory_forwards_unstructured_payload() {
        let service = Arc::new(StubMemoryService::new());
        let app = create_router(service.clone());

        let (status, body) = send(
            app,
            Method::PUT,
            "/memories/m1",
            Some(json!({ "text": "new content", "extra": [1, 2] })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["id"], "m1");

        let calls = service.calls.lock().await;
        match &calls[0] {
            RecordedCall::Update(id, payload) => {
                assert_eq!(id, "m1");
                assert_eq!(payload["extra"], json!([1, 2]));
            }
            other => panic!("unexpected call {other:?}"),
        }
    }

    #[tokio::test]
    async fn configure_returns_confirmation_and_forwards() {
        let service = Arc::new(StubMemoryService::new());
        let app = create_router(service.clone());

        let (status, body) = send(
            app,
            Method::POST,
            "/configure",
            Some(json!({ "version": "v1.1", "history_db_path": "/tmp/history.db" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Configuration set successfully");

        let calls = service.calls.lock().await;
        match &calls[0] {
            RecordedCall::Configure(config) => {
                assert_eq!(config["history_db_path"], "/tmp/history.db");
            }
            other => panic!("unexpected call {other:?}"),
        }
    }

    #[tokio::test]
    async fn root_redirects_to_commands() {
        let app = create_router(Arc::new(StubMemoryService::new()));
        let (status, _) = send(app, Method::GET, "/", None).await;
        assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
    }

    #[tokio::test]
    async fn health_reports_healthy() {
        let app = create_router(Arc::new(StubMemoryService::new()));
        let (status, body) = send(app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn history_passes_session_id_through() {
        let service = Arc::new(StubMemoryService::new());
        let app = create_router(service.clone());

        let (status, body) = send(app, Method::GET, "/history/session-1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["results"].as_array().is_some());

        let calls = service.calls.lock().await;
        match &calls[0] {
            RecordedCall::History(session_id) => assert_eq!(session_id, "session-1"),
            other => panic!("unexpected call {other:?}"),
        }
    }

    #[tokio::test]
    async fn commands_catalog_covers_the_surface() {
        let app = create_router(Arc::new(StubMemoryService::new()));
        let (status, body) = send(app, Method::GET, "/commands", None).await;
        assert_eq!(status, StatusCode::OK);

        let commands = body["commands"].as_array().expect("commands array");
        let names: Vec<&str> = commands
            .iter()
            .map(|command| command["name"].as_str().expect("name"))
            .collect();
        assert!(names.contains(&"search"));
        assert!(names.contains(&"create_memories"));
        assert!(names.contains(&"history"));
    }
}
