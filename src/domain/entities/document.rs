use serde::{Deserialize, Serialize};

/// An uploaded document, alive only for the duration of one request.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub content: Vec<u8>,
    pub mime_type: String,
}

impl UploadedFile {
    pub fn new(content: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            content,
            mime_type: mime_type.into(),
        }
    }
}

/// The combined output of one analysis: the extracted text plus the three
/// generated sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub text: String,
    pub summary: String,
    pub key_terms: String,
    pub risk_assessment: String,
}
