use crate::domain::entities::UploadedFile;
use crate::domain::errors::DomainError;
use async_trait::async_trait;

#[async_trait]
pub trait DocumentExtractor: Send + Sync {
    /// Runs OCR over the raw document and returns its plain text.
    async fn extract(&self, file: &UploadedFile) -> Result<String, DomainError>;
}
