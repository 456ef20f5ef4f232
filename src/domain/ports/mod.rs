mod extractor;
mod llm;

pub use extractor::DocumentExtractor;
pub use llm::LlmService;
