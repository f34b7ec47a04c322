use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::analysis::errors::AnalysisError;
use crate::domain::analysis::model::AnalysisResult;
use crate::domain::image::services::ImageSource;

pub struct AnalyzeImageParams {
    pub source: Arc<dyn ImageSource>,
}

#[async_trait]
pub trait AnalyzeImageUseCase: Send + Sync {
    async fn execute(&self, params: AnalyzeImageParams) -> Result<AnalysisResult, AnalysisError>;
}
