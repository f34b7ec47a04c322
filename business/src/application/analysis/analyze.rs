use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::analysis::errors::AnalysisError;
use crate::domain::analysis::model::AnalysisResult;
use crate::domain::analysis::use_cases::analyze::{AnalyzeImageParams, AnalyzeImageUseCase};
use crate::domain::identification::services::ItemIdentifierService;
use crate::domain::image::encoder::encode;
use crate::domain::logger::Logger;
use crate::domain::video::services::VideoRecommenderService;

/// Encode, identify, then recommend. The first failure ends the pipeline.
pub struct AnalyzeImageUseCaseImpl {
    pub identifier: Arc<dyn ItemIdentifierService>,
    pub recommender: Arc<dyn VideoRecommenderService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AnalyzeImageUseCase for AnalyzeImageUseCaseImpl {
    async fn execute(&self, params: AnalyzeImageParams) -> Result<AnalysisResult, AnalysisError> {
        self.logger.info(&format!(
            "Analyzing image '{}' ({})",
            params.source.name(),
            params.source.mime_type()
        ));

        let payload = encode(params.source.as_ref()).await?;

        let identification = self.identifier.identify(&payload).await.map_err(|e| {
            self.logger.warn(&format!("Item identification failed: {:?}", e));
            e
        })?;

        self.logger
            .info(&format!("Item identified: {}", identification.item_name));

        let video_suggestions = self
            .recommender
            .recommend(&identification.item_name)
            .await
            .map_err(|e| {
                self.logger.warn(&format!("Video search failed: {:?}", e));
                e
            })?;

        self.logger.info(&format!(
            "Found {} videos for {}",
            video_suggestions.len(),
            identification.item_name
        ));

        Ok(AnalysisResult {
            analysis_id: Uuid::new_v4(),
            item_name: identification.item_name,
            video_suggestions,
        })
    }
}
