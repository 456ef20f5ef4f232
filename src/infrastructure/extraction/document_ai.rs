use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::domain::{ports::DocumentExtractor, DomainError, UploadedFile};
use crate::infrastructure::auth::GoogleAuth;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProcessRequest {
    raw_document: RawDocument,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RawDocument {
    content: String,
    mime_type: String,
}

#[derive(Debug, Deserialize)]
struct ProcessResponse {
    document: Option<ProcessedDocument>,
}

#[derive(Debug, Deserialize)]
struct ProcessedDocument {
    text: Option<String>,
}

/// Document AI adapter: sends the raw bytes to a configured processor and
/// returns the recognized text.
pub struct DocumentAiExtractor {
    http: reqwest::Client,
    auth: Arc<GoogleAuth>,
    endpoint: String,
    processor_name: String,
}

impl DocumentAiExtractor {
    pub fn new(auth: Arc<GoogleAuth>, location: &str, processor_name: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            auth,
            endpoint: format!("https://{location}-documentai.googleapis.com"),
            processor_name: processor_name.into(),
        }
    }

    /// Points the adapter at a non-default endpoint. Used by tests.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl DocumentExtractor for DocumentAiExtractor {
    async fn extract(&self, file: &UploadedFile) -> Result<String, DomainError> {
        let token = self.auth.access_token().await?;
        let url = format!("{}/v1/{}:process", self.endpoint, self.processor_name);

        let request = ProcessRequest {
            raw_document: RawDocument {
                content: BASE64.encode(&file.content),
                mime_type: file.mime_type.clone(),
            },
        };

        debug!(processor = %self.processor_name, size = file.content.len(), "Submitting document for OCR");

        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::external(format!("Document AI request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::external(format!(
                "Document AI returned {status}: {body}"
            )));
        }

        let parsed: ProcessResponse = response
            .json()
            .await
            .map_err(|e| DomainError::external(format!("malformed Document AI response: {e}")))?;

        // A structurally absent text field is treated as an empty document,
        // not a provider failure.
        Ok(parsed
            .document
            .and_then(|d| d.text)
            .unwrap_or_default())
    }
}
