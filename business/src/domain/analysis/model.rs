use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::video::model::VideoSuggestion;

use super::errors::AnalysisError;

/// Outcome of one successful analysis. Replaced wholesale by the next one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub analysis_id: Uuid,
    pub item_name: String,
    pub video_suggestions: Vec<VideoSuggestion>,
}

/// Categorised failure kept by the session after formatting at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisFailure {
    pub code: String,
    pub message: String,
}

impl From<&AnalysisError> for AnalysisFailure {
    fn from(error: &AnalysisError) -> Self {
        Self {
            code: error.to_string(),
            message: error.user_message(),
        }
    }
}

/// What the caller currently sees for its analysis session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AnalysisStatus {
    #[default]
    Idle,
    InProgress,
    Succeeded(AnalysisResult),
    Failed(AnalysisFailure),
}

impl AnalysisStatus {
    pub fn is_in_progress(&self) -> bool {
        matches!(self, AnalysisStatus::InProgress)
    }
}

impl std::fmt::Display for AnalysisStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisStatus::Idle => write!(f, "idle"),
            AnalysisStatus::InProgress => write!(f, "in_progress"),
            AnalysisStatus::Succeeded(_) => write!(f, "succeeded"),
            AnalysisStatus::Failed(_) => write!(f, "failed"),
        }
    }
}
