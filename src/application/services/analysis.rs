use std::sync::Arc;
use tracing::instrument;

use crate::domain::{
    ports::{DocumentExtractor, LlmService},
    AnalysisResult, DomainError, UploadedFile,
};

/// Orchestrates one document analysis: OCR, then three generation calls.
///
/// The generation calls carry no data dependency on each other, so they are
/// awaited concurrently; a failure in any of them fails the whole request.
pub struct AnalysisService {
    extractor: Arc<dyn DocumentExtractor>,
    llm: Arc<dyn LlmService>,
}

impl AnalysisService {
    pub fn new(extractor: Arc<dyn DocumentExtractor>, llm: Arc<dyn LlmService>) -> Self {
        Self { extractor, llm }
    }

    #[instrument(skip(self, file), fields(mime_type = %file.mime_type, size = file.content.len()))]
    pub async fn analyze(&self, file: &UploadedFile) -> Result<AnalysisResult, DomainError> {
        let text = self.extractor.extract(file).await?;
        if text.trim().is_empty() {
            return Err(DomainError::validation(
                "Document contained no extractable text.",
            ));
        }

        let summary_prompt = summary_prompt(&text);
        let key_terms_prompt = key_terms_prompt(&text);
        let risk_prompt = risk_prompt(&text);
        let (summary, key_terms, risk_assessment) = tokio::try_join!(
            self.llm.complete(&summary_prompt),
            self.llm.complete(&key_terms_prompt),
            self.llm.complete(&risk_prompt),
        )?;

        Ok(AnalysisResult {
            text,
            summary,
            key_terms,
            risk_assessment,
        })
    }
}

fn summary_prompt(text: &str) -> String {
    format!("Summarize this legal document:\n\n{text}")
}

fn key_terms_prompt(text: &str) -> String {
    format!("Extract key terms in bullet-point format:\n\n{text}")
}

fn risk_prompt(text: &str) -> String {
    format!(
        "Provide a risk assessment in this format:\n- Risk Item: Description (Severity: Low/Medium/High)\n\nFor this legal document:\n\n{text}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct StubExtractor {
        text: String,
    }

    #[async_trait]
    impl DocumentExtractor for StubExtractor {
        async fn extract(&self, _file: &UploadedFile) -> Result<String, DomainError> {
            Ok(self.text.clone())
        }
    }

    struct RecordingLlm {
        prompts: Mutex<Vec<String>>,
    }

    impl RecordingLlm {
        fn new() -> Self {
            Self {
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl LlmService for RecordingLlm {
        async fn complete(&self, prompt: &str) -> Result<String, DomainError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok(format!("reply to: {prompt}"))
        }
    }

    struct FailingLlm;

    #[async_trait]
    impl LlmService for FailingLlm {
        async fn complete(&self, _prompt: &str) -> Result<String, DomainError> {
            Err(DomainError::external("generation backend unreachable"))
        }
    }

    fn file() -> UploadedFile {
        UploadedFile::new(b"%PDF-1.4".to_vec(), "application/pdf")
    }

    #[tokio::test]
    async fn empty_text_short_circuits_before_generation() {
        let llm = Arc::new(RecordingLlm::new());
        let service = AnalysisService::new(
            Arc::new(StubExtractor {
                text: "   \n\t ".into(),
            }),
            llm.clone(),
        );

        let err = service.analyze(&file()).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(llm.prompts.lock().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn issues_three_prompts_each_containing_the_text() {
        let llm = Arc::new(RecordingLlm::new());
        let service = AnalysisService::new(
            Arc::new(StubExtractor {
                text: "This Agreement is made between the parties.".into(),
            }),
            llm.clone(),
        );

        let result = service.analyze(&file()).await.unwrap();
        assert_eq!(result.text, "This Agreement is made between the parties.");

        let prompts = llm.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 3);
        assert!(prompts
            .iter()
            .all(|p| p.contains("This Agreement is made between the parties.")));
        assert!(prompts
            .iter()
            .any(|p| p.starts_with("Summarize this legal document:")));
        assert!(prompts
            .iter()
            .any(|p| p.starts_with("Extract key terms in bullet-point format:")));
        assert!(prompts
            .iter()
            .any(|p| p.starts_with("Provide a risk assessment in this format:")));
    }

    #[tokio::test]
    async fn generation_failure_fails_the_analysis() {
        let service = AnalysisService::new(
            Arc::new(StubExtractor {
                text: "Some contract text".into(),
            }),
            Arc::new(FailingLlm),
        );

        let err = service.analyze(&file()).await.unwrap_err();
        assert!(matches!(err, DomainError::ExternalService(_)));
    }

    #[tokio::test]
    async fn extractor_failure_propagates() {
        struct BrokenExtractor;

        #[async_trait]
        impl DocumentExtractor for BrokenExtractor {
            async fn extract(&self, _file: &UploadedFile) -> Result<String, DomainError> {
                Err(DomainError::external("ocr backend returned 500"))
            }
        }

        let service =
            AnalysisService::new(Arc::new(BrokenExtractor), Arc::new(RecordingLlm::new()));
        let err = service.analyze(&file()).await.unwrap_err();
        assert!(matches!(err, DomainError::ExternalService(_)));
    }
}
