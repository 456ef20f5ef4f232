mod document;

pub use document::{AnalysisResult, UploadedFile};
