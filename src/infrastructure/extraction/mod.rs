mod document_ai;

pub use document_ai::DocumentAiExtractor;
