use meetscribe_config::RetrievalSettings;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("retrieval request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("retrieval API error {status}: {body}")]
    Api { status: u16, body: String },
}

/// A ranked passage returned by the external search service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Passage {
    pub source: String,
    pub content: String,
    #[serde(default)]
    pub score: f64,
}

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
    top: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    meeting_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<Passage>,
}

/// Thin client for the external retrieval service that grounds Q&A answers.
///
/// The endpoint is optional; an unconfigured service simply contributes no
/// passages, and the Q&A path answers from the transcript window alone.
pub struct RetrievalService {
    client: Client,
    endpoint: Option<String>,
    api_key: Option<String>,
    top_k: usize,
}

impl RetrievalService {
    pub fn new(settings: RetrievalSettings) -> Self {
        Self {
            client: Client::new(),
            endpoint: settings.endpoint,
            api_key: settings.api_key,
            top_k: settings.top_k,
        }
    }

    pub fn is_available(&self) -> bool {
        self.endpoint.is_some()
    }

    /// Searches for passages relevant to `query`, optionally scoped to one
    /// meeting's documents.
    pub async fn search(
        &self,
        query: &str,
        meeting_id: Option<Uuid>,
    ) -> Result<Vec<Passage>, RetrievalError> {
        let Some(endpoint) = self.endpoint.as_ref() else {
            debug!("retrieval endpoint not configured, returning no passages");
            return Ok(Vec::new());
        };

        let request = SearchRequest {
            query,
            top: self.top_k,
            meeting_id: meeting_id.map(|id| id.to_string()),
        };

        let mut builder = self.client.post(endpoint).json(&request);
        if let Some(key) = self.api_key.as_ref() {
            builder = builder.header("api-key", key);
        }

        let response = builder.send().await?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(RetrievalError::Api { status, body });
        }

        let search: SearchResponse = response.json().await?;
        debug!(query, results = search.results.len(), "retrieval results");
        Ok(search.results)
    }
}
