use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::domain::{AnalysisResult, UploadedFile};

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub text: String,
    pub summary: String,
    #[serde(rename = "keyTerms")]
    pub key_terms: String,
    #[serde(rename = "riskAssessment")]
    pub risk_assessment: String,
}

impl From<AnalysisResult> for AnalyzeResponse {
    fn from(result: AnalysisResult) -> Self {
        Self {
            text: result.text,
            summary: result.summary,
            key_terms: result.key_terms,
            risk_assessment: result.risk_assessment,
        }
    }
}

/// Accepts a multipart form with a single `file` field, runs the full
/// analysis and returns the four result strings.
pub async fn analyze_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let mut file: Option<UploadedFile> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::debug!(error = %e, "Failed to read multipart field");
        ApiError::BadRequest(format!("Failed to read multipart data: {e}"))
    })? {
        if field.name() == Some("file") {
            let mime_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let data = field.bytes().await.map_err(|e| {
                tracing::debug!(error = %e, "Failed to read file bytes");
                ApiError::BadRequest(format!("Failed to read file data: {e}"))
            })?;
            file = Some(UploadedFile::new(data.to_vec(), mime_type));
        }
        // Unknown fields are ignored.
    }

    let file = file.ok_or_else(|| ApiError::BadRequest("No file uploaded".to_string()))?;

    let result = state.analysis_service.analyze(&file).await?;
    Ok(Json(result.into()))
}
