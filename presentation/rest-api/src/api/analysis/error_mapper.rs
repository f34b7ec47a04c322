use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::analysis::errors::AnalysisError;
use business::domain::identification::errors::IdentificationError;
use business::domain::video::errors::VideoError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for AnalysisError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            AnalysisError::NoImageSelected => (StatusCode::BAD_REQUEST, "ValidationError"),
            AnalysisError::Image(_) => (StatusCode::BAD_REQUEST, "ImageError"),
            AnalysisError::Superseded => (StatusCode::CONFLICT, "Superseded"),
            AnalysisError::Identification(IdentificationError::Upstream(_))
            | AnalysisError::Video(VideoError::Upstream(_)) => {
                (StatusCode::BAD_GATEWAY, "UpstreamError")
            }
            AnalysisError::Identification(IdentificationError::MalformedResponse(_)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "MalformedResponse")
            }
            AnalysisError::Identification(IdentificationError::ItemNotIdentified) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "ItemNotIdentified")
            }
            AnalysisError::Video(VideoError::NoResults) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "NoResultsError")
            }
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                code: self.to_string(),
                message: self.user_message(),
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::UpstreamError;
    use business::domain::image::errors::ImageError;

    #[test]
    fn should_map_upstream_failures_to_bad_gateway() {
        let error = AnalysisError::from(VideoError::Upstream(UpstreamError::status(
            403,
            "quotaExceeded",
        )));

        let (status, Json(body)) = error.into_error_response();

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body.name, "UpstreamError");
        assert_eq!(body.code, "video.upstream");
        assert!(body.message.contains("quotaExceeded"));
    }

    #[test]
    fn should_map_unidentified_item_to_unprocessable_entity() {
        let (status, Json(body)) =
            AnalysisError::from(IdentificationError::ItemNotIdentified).into_error_response();

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.code, "identification.item_not_identified");
        assert_eq!(
            body.message,
            "Failed to analyze image. Could not identify the waste item. Please try again."
        );
    }

    #[test]
    fn should_map_bad_image_to_bad_request() {
        let (status, Json(body)) =
            AnalysisError::from(ImageError::InvalidEncoding).into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, "image.invalid_encoding");
    }

    #[test]
    fn should_map_superseded_to_conflict() {
        let (status, _) = AnalysisError::Superseded.into_error_response();
        assert_eq!(status, StatusCode::CONFLICT);
    }
}
