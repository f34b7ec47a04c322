use poem_openapi::types::multipart::Upload;
use poem_openapi::{Enum, Multipart, Object};
use uuid::Uuid;

use business::domain::analysis::model::{AnalysisFailure, AnalysisResult, AnalysisStatus};
use business::domain::image::errors::ImageError;
use business::domain::image::model::ImagePayload;
use business::domain::image::sources::ImageFile;
use business::domain::video::link::{is_embed_url, normalize_embed_url};
use business::domain::video::model::VideoSuggestion;

use crate::api::error::ErrorResponse;

const INLINE_IMAGE_NAME: &str = "upload";

#[derive(Debug, Clone, Object)]
pub struct AnalyzeImageRequest {
    /// Base64 image data, optionally wrapped in a `data:` URL
    pub image_base64: String,
    /// MIME type of the image; taken from the data URL or sniffed when absent
    #[oai(skip_serializing_if_is_none)]
    pub mime_type: Option<String>,
}

impl AnalyzeImageRequest {
    pub fn into_image_file(self) -> Result<ImageFile, ImageError> {
        let payload = ImagePayload::from_base64(&self.image_base64, self.mime_type.as_deref())?;
        let bytes = payload.decode()?;
        Ok(ImageFile::new(INLINE_IMAGE_NAME, payload.mime_type(), bytes))
    }
}

#[derive(Multipart)]
pub struct AnalyzeUploadRequest {
    /// Photo of the waste item
    pub file: Upload,
}

#[derive(Debug, Clone, PartialEq, Object)]
pub struct VideoSuggestionResponse {
    /// Video title
    pub title: String,
    /// Channel that published the video
    pub channel: String,
    /// Description, at most 200 characters
    pub description: String,
    /// Canonical embeddable link
    pub embed_url: String,
    /// Whether `embed_url` can be shown in an inline player
    pub embeddable: bool,
}

impl From<VideoSuggestion> for VideoSuggestionResponse {
    fn from(video: VideoSuggestion) -> Self {
        let embed_url = normalize_embed_url(&video.embed_url);
        Self {
            title: video.title,
            channel: video.channel,
            description: video.description,
            embeddable: is_embed_url(&embed_url),
            embed_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Object)]
pub struct AnalysisResponse {
    /// Analysis identifier
    pub analysis_id: Uuid,
    /// Identified waste item
    pub item_name: String,
    /// Upcycling tutorials, newest first
    pub video_suggestions: Vec<VideoSuggestionResponse>,
}

impl From<AnalysisResult> for AnalysisResponse {
    fn from(result: AnalysisResult) -> Self {
        Self {
            analysis_id: result.analysis_id,
            item_name: result.item_name,
            video_suggestions: result
                .video_suggestions
                .into_iter()
                .map(|v| v.into())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Enum)]
pub enum AnalysisStateDto {
    #[oai(rename = "idle")]
    Idle,
    #[oai(rename = "in_progress")]
    InProgress,
    #[oai(rename = "succeeded")]
    Succeeded,
    #[oai(rename = "failed")]
    Failed,
}

#[derive(Debug, Clone, PartialEq, Object)]
pub struct AnalysisStatusResponse {
    /// Current state of the session
    pub state: AnalysisStateDto,
    /// Result, when the latest analysis succeeded
    #[oai(skip_serializing_if_is_none)]
    pub result: Option<AnalysisResponse>,
    /// Error, when the latest analysis failed
    #[oai(skip_serializing_if_is_none)]
    pub error: Option<ErrorResponse>,
}

impl From<AnalysisFailure> for ErrorResponse {
    fn from(failure: AnalysisFailure) -> Self {
        Self {
            name: "AnalysisFailed".to_string(),
            code: failure.code,
            message: failure.message,
        }
    }
}

impl From<AnalysisStatus> for AnalysisStatusResponse {
    fn from(status: AnalysisStatus) -> Self {
        let (state, result, error) = match status {
            AnalysisStatus::Idle => (AnalysisStateDto::Idle, None, None),
            AnalysisStatus::InProgress => (AnalysisStateDto::InProgress, None, None),
            AnalysisStatus::Succeeded(result) => {
                (AnalysisStateDto::Succeeded, Some(result.into()), None)
            }
            AnalysisStatus::Failed(failure) => {
                (AnalysisStateDto::Failed, None, Some(failure.into()))
            }
        };
        Self {
            state,
            result,
            error,
        }
    }
}
