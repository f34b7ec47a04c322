use crate::domain::identification::errors::IdentificationError;
use crate::domain::image::errors::ImageError;
use crate::domain::video::errors::VideoError;

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("analysis.no_image_selected")]
    NoImageSelected,
    #[error("analysis.superseded")]
    Superseded,
    #[error(transparent)]
    Image(#[from] ImageError),
    #[error(transparent)]
    Identification(#[from] IdentificationError),
    #[error(transparent)]
    Video(#[from] VideoError),
}

impl AnalysisError {
    /// The single human-readable message shown by the presentation layer.
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::NoImageSelected => "Please select an image first.".to_string(),
            AnalysisError::Superseded => {
                "This analysis was replaced by a newer request.".to_string()
            }
            _ => format!("Failed to analyze image. {}. Please try again.", self.detail()),
        }
    }

    fn detail(&self) -> String {
        match self {
            AnalysisError::Image(ImageError::ReadFailed(e)) => {
                format!("Could not read the image ({})", e)
            }
            AnalysisError::Image(ImageError::InvalidEncoding) => {
                "The image data is not valid base64".to_string()
            }
            AnalysisError::Identification(IdentificationError::Upstream(e)) => {
                format!("Identification service failed: {}", e.detail())
            }
            AnalysisError::Identification(IdentificationError::MalformedResponse(_)) => {
                "Failed to parse the identification response".to_string()
            }
            AnalysisError::Identification(IdentificationError::ItemNotIdentified) => {
                "Could not identify the waste item".to_string()
            }
            AnalysisError::Video(VideoError::Upstream(e)) => {
                format!("Video search failed: {}", e.detail())
            }
            AnalysisError::Video(VideoError::NoResults) => {
                "No videos found for this item".to_string()
            }
            AnalysisError::NoImageSelected | AnalysisError::Superseded => self.to_string(),
        }
    }
}
