use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub google: GoogleConfig,
    pub generation: GenerationConfig,
    pub cors: CorsConfig,
}

/// Identity material and resource addressing for the two Google APIs.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleConfig {
    pub project_id: String,
    pub processor_id: String,
    pub processor_location: String,
    pub client_email: String,
    pub private_key: String,
    pub token_uri: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationConfig {
    pub location: String,
    pub model: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl AppConfig {
    /// Loads configuration from the environment. `PROJECT_ID`, `PROCESSOR_ID`,
    /// `GOOGLE_CLIENT_EMAIL` and `GOOGLE_PRIVATE_KEY` are required; the rest
    /// have defaults matching the production deployment.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            google: GoogleConfig {
                project_id: require("PROJECT_ID")?,
                processor_id: require("PROCESSOR_ID")?,
                processor_location: std::env::var("DOCAI_LOCATION")
                    .unwrap_or_else(|_| "us".into()),
                client_email: require("GOOGLE_CLIENT_EMAIL")?,
                // Deployment environments store the key with escaped newlines.
                private_key: require("GOOGLE_PRIVATE_KEY")?.replace("\\n", "\n"),
                token_uri: std::env::var("GOOGLE_TOKEN_URI")
                    .unwrap_or_else(|_| "https://oauth2.googleapis.com/token".into()),
            },
            generation: GenerationConfig {
                location: std::env::var("VERTEX_LOCATION")
                    .unwrap_or_else(|_| "us-central1".into()),
                model: std::env::var("GEMINI_MODEL")
                    .unwrap_or_else(|_| "gemini-2.5-flash-lite".into()),
                temperature: 0.3,
                max_output_tokens: 300,
            },
            cors: CorsConfig {
                allowed_origins: std::env::var("ALLOWED_ORIGINS")
                    .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
                    .unwrap_or_default(),
            },
        })
    }

    /// The fully qualified Document AI processor resource name.
    pub fn processor_name(&self) -> String {
        format!(
            "projects/{}/locations/{}/processors/{}",
            self.google.project_id, self.google.processor_location, self.google.processor_id
        )
    }
}

fn require(key: &str) -> anyhow::Result<String> {
    std::env::var(key).map_err(|_| anyhow::anyhow!("missing required environment variable {key}"))
}

impl Default for AppConfig {
    // Placeholder values for local development and tests; production always
    // configures through the environment.
    fn default() -> Self {
        Self {
            google: GoogleConfig {
                project_id: "local-project".into(),
                processor_id: "local-processor".into(),
                processor_location: "us".into(),
                client_email: "svc@local-project.iam.gserviceaccount.com".into(),
                private_key: String::new(),
                token_uri: "https://oauth2.googleapis.com/token".into(),
            },
            generation: GenerationConfig {
                location: "us-central1".into(),
                model: "gemini-2.5-flash-lite".into(),
                temperature: 0.3,
                max_output_tokens: 300,
            },
            cors: CorsConfig {
                allowed_origins: vec![],
            },
        }
    }
}
