//! HTTP client wrapper for the upstream mem0 memory service.

use crate::config::get_config;
use crate::mem0::types::{Mem0Error, MemoryFilters};
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;

/// Lightweight HTTP client for memory-service operations.
///
/// One client is built at process start and shared for the process lifetime;
/// `reqwest::Client` is internally pooled and safe for concurrent use, so no
/// additional locking is layered on top.
pub struct Mem0Client {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) api_key: Option<String>,
}

impl Mem0Client {
    /// Construct a new client using configuration derived from the environment.
    pub fn new() -> Result<Self, Mem0Error> {
        let config = get_config();
        let client = Client::builder().user_agent("mem0-bridge/1.0").build()?;

        let base_url = normalize_base_url(&config.mem0_base_url).map_err(Mem0Error::InvalidUrl)?;
        tracing::debug!(
            url = %base_url,
            has_api_key = config.mem0_api_key.is_some(),
            "Initialized memory service HTTP client"
        );

        Ok(Self {
            client,
            base_url,
            api_key: config.mem0_api_key.clone(),
        })
    }

    /// Search memories: `POST /search` with a query payload.
    pub async fn search(&self, body: &Value) -> Result<Value, Mem0Error> {
        self.execute_json(self.request(Method::POST, "search").json(body))
            .await
    }

    /// Store memories: `POST /memories` with messages plus owner identifiers.
    pub async fn create_memories(&self, body: &Value) -> Result<Value, Mem0Error> {
        self.execute_json(self.request(Method::POST, "memories").json(body))
            .await
    }

    /// List memories matching identifier filters: `GET /memories`.
    pub async fn list_memories(
        &self,
        query: &[(&'static str, String)],
    ) -> Result<Value, Mem0Error> {
        self.execute_json(self.request(Method::GET, "memories").query(query))
            .await
    }

    /// Fetch one memory by id, returning `None` when the service reports 404.
    pub async fn get_memory(&self, memory_id: &str) -> Result<Option<Value>, Mem0Error> {
        let response = self
            .request(Method::GET, &format!("memories/{memory_id}"))
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(response.json().await?)),
            status => {
                let body = response.text().await.unwrap_or_default();
                let error = Mem0Error::UnexpectedStatus { status, body };
                tracing::error!(memory_id, error = %error, "Failed to fetch memory");
                Err(error)
            }
        }
    }

    /// Delete one memory by id: `DELETE /memories/{id}`.
    pub async fn delete_memory(&self, memory_id: &str) -> Result<(), Mem0Error> {
        let response = self
            .request(Method::DELETE, &format!("memories/{memory_id}"))
            .send()
            .await?;
        self.ensure_success(response).await
    }

    /// Bulk-delete memories matching identifier filters: `DELETE /memories`.
    pub async fn delete_memories(&self, filters: &MemoryFilters) -> Result<(), Mem0Error> {
        let response = self
            .request(Method::DELETE, "memories")
            .query(&filters.as_query_pairs())
            .send()
            .await?;
        self.ensure_success(response).await
    }

    /// Update memory content: `PUT /memories/{id}` with an unstructured payload.
    pub async fn update_memory(&self, memory_id: &str, body: &Value) -> Result<Value, Mem0Error> {
        self.execute_json(
            self.request(Method::PUT, &format!("memories/{memory_id}"))
                .json(body),
        )
        .await
    }

    /// Fetch the audit history for a session: `GET /history/{session_id}`.
    pub async fn history(&self, session_id: &str) -> Result<Value, Mem0Error> {
        self.execute_json(self.request(Method::GET, &format!("history/{session_id}")))
            .await
    }

    /// Replace the engine configuration: `POST /configure`.
    pub async fn configure(&self, body: &Value) -> Result<Value, Mem0Error> {
        self.execute_json(self.request(Method::POST, "configure").json(body))
            .await
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format_endpoint(&self.base_url, path);
        let mut req = self.client.request(method, url);
        if let Some(api_key) = &self.api_key
            && !api_key.is_empty()
        {
            req = req.bearer_auth(api_key);
        }
        req
    }

    async fn execute_json(&self, request: reqwest::RequestBuilder) -> Result<Value, Mem0Error> {
        let response = request.send().await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let error = Mem0Error::UnexpectedStatus { status, body };
            tracing::error!(error = %error, "Memory service request failed");
            Err(error)
        }
    }

    async fn ensure_success(&self, response: reqwest::Response) -> Result<(), Mem0Error> {
        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let error = Mem0Error::UnexpectedStatus { status, body };
            tracing::error!(error = %error, "Memory service request failed");
            Err(error)
        }
    }
}

fn normalize_base_url(url: &str) -> Result<String, String> {
    let mut parsed = reqwest::Url::parse(url).map_err(|err| err.to_string())?;
    let path = parsed.path().trim_end_matches('/').to_string();
    parsed.set_path(&path);
    Ok(parsed.to_string())
}

fn format_endpoint(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}
