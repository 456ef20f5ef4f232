use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::{ports::LlmService, DomainError};
use crate::infrastructure::auth::GoogleAuth;
use crate::infrastructure::config::GenerationConfig;

/// Returned when a generation response carries no usable candidate. The
/// request as a whole still succeeds.
const EMPTY_COMPLETION: &str = "No content generated.";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Vertex AI Gemini adapter for the `LlmService` port.
pub struct GeminiLlm {
    http: reqwest::Client,
    auth: Arc<GoogleAuth>,
    config: GenerationConfig,
    model_path: String,
    endpoint: String,
}

impl GeminiLlm {
    pub fn new(auth: Arc<GoogleAuth>, project_id: &str, config: GenerationConfig) -> Self {
        let model_path = format!(
            "projects/{}/locations/{}/publishers/google/models/{}",
            project_id, config.location, config.model
        );
        let endpoint = format!("https://{}-aiplatform.googleapis.com", config.location);
        Self {
            http: reqwest::Client::new(),
            auth,
            config,
            model_path,
            endpoint,
        }
    }

    /// Points the adapter at a non-default endpoint. Used by tests.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl LlmService for GeminiLlm {
    async fn complete(&self, prompt: &str) -> Result<String, DomainError> {
        let token = self.auth.access_token().await?;
        let url = format!("{}/v1/{}:generateContent", self.endpoint, self.model_path);

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
            temperature: self.config.temperature,
            max_output_tokens: self.config.max_output_tokens,
        };

        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::external(format!("generation request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::external(format!(
                "generation service returned {status}: {body}"
            )));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| DomainError::external(format!("malformed generation response: {e}")))?;

        // Missing candidates are not an error; substitute a placeholder so
        // one thin response never aborts the whole analysis.
        Ok(parsed
            .candidates
            .and_then(|c| c.into_iter().next())
            .and_then(|c| c.content)
            .and_then(|c| c.parts)
            .and_then(|p| p.into_iter().next())
            .and_then(|p| p.text)
            .unwrap_or_else(|| EMPTY_COMPLETION.to_string()))
    }
}
