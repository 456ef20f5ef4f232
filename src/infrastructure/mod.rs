pub mod auth;
pub mod config;
pub mod extraction;
pub mod llm;

pub use auth::GoogleAuth;
pub use config::AppConfig;
pub use extraction::DocumentAiExtractor;
pub use llm::GeminiLlm;
