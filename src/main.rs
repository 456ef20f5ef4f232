use std::net::SocketAddr;
use std::sync::Arc;

use doc_analysis::api::{create_router, AppState};
use doc_analysis::application::AnalysisService;
use doc_analysis::infrastructure::{AppConfig, DocumentAiExtractor, GeminiLlm, GoogleAuth};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;

    let auth = Arc::new(GoogleAuth::new(config.google.clone())?);
    let extractor = Arc::new(DocumentAiExtractor::new(
        auth.clone(),
        &config.google.processor_location,
        config.processor_name(),
    ));
    let llm = Arc::new(GeminiLlm::new(
        auth,
        &config.google.project_id,
        config.generation.clone(),
    ));
    let analysis_service = Arc::new(AnalysisService::new(extractor, llm));
    info!(processor = %config.processor_name(), model = %config.generation.model, "Analysis pipeline initialized");

    let state = AppState::new(analysis_service, config);
    let app = create_router(state);

    let host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("SERVER_PORT")
        .unwrap_or_else(|_| "8080".into())
        .parse()?;
    let addr = SocketAddr::new(host.parse()?, port);

    info!("API server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
