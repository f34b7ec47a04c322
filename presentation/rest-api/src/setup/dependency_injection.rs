use std::sync::Arc;

use logger::TracingLogger;

use gemini::client::GeminiClient;
use gemini::item_identifier::ItemIdentifierGemini;
use youtube::client::YouTubeClient;
use youtube::video_recommender::VideoRecommenderYouTube;

use business::application::analysis::analyze::AnalyzeImageUseCaseImpl;
use business::application::analysis::session::AnalysisSession;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub analysis_api: crate::api::analysis::routes::AnalysisApi,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let mut gemini_client = GeminiClient::new(config.gemini.api_key.clone());
        if let Some(model) = &config.gemini.model {
            gemini_client = gemini_client.with_model(model.clone());
        }
        if let Some(base_url) = &config.gemini.base_url {
            gemini_client = gemini_client.with_base_url(base_url.clone());
        }

        let mut youtube_client = YouTubeClient::new(config.youtube.api_key.clone());
        if let Some(base_url) = &config.youtube.base_url {
            youtube_client = youtube_client.with_base_url(base_url.clone());
        }

        let identifier = Arc::new(ItemIdentifierGemini::new(gemini_client));
        let recommender = Arc::new(VideoRecommenderYouTube::new(youtube_client));

        // Analysis use case and the session that owns its visible state
        let analyze_use_case = Arc::new(AnalyzeImageUseCaseImpl {
            identifier,
            recommender,
            logger: logger.clone(),
        });
        let session = Arc::new(AnalysisSession::new(analyze_use_case, logger));

        let analysis_api = crate::api::analysis::routes::AnalysisApi::new(session);

        Self {
            health_api,
            analysis_api,
        }
    }
}
