use std::sync::Arc;

use crate::application::AnalysisService;
use crate::infrastructure::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub analysis_service: Arc<AnalysisService>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(analysis_service: Arc<AnalysisService>, config: AppConfig) -> Self {
        Self {
            analysis_service,
            config: Arc::new(config),
        }
    }
}
