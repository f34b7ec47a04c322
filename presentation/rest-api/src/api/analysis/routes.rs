use std::sync::Arc;

use poem_openapi::{ApiResponse, OpenApi, payload::Json};

use business::application::analysis::session::AnalysisSession;
use business::domain::analysis::errors::AnalysisError;
use business::domain::image::errors::ImageError;
use business::domain::image::services::ImageSource;
use business::domain::image::sources::ImageFile;

use crate::api::analysis::dto::{
    AnalysisResponse, AnalysisStatusResponse, AnalyzeImageRequest, AnalyzeUploadRequest,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

const DEFAULT_UPLOAD_NAME: &str = "upload";

pub struct AnalysisApi {
    session: Arc<AnalysisSession>,
}

impl AnalysisApi {
    pub fn new(session: Arc<AnalysisSession>) -> Self {
        Self { session }
    }

    async fn run(&self, source: Arc<dyn ImageSource>) -> AnalyzeResponse {
        match self.session.analyze(source).await {
            Ok(result) => AnalyzeResponse::Ok(Json(result.into())),
            Err(err) => AnalyzeResponse::from_error(err),
        }
    }
}

/// Analysis API
///
/// Identifies a photographed waste item and suggests upcycling tutorials for it.
#[OpenApi]
impl AnalysisApi {
    /// Analyze a base64 image
    ///
    /// Accepts raw base64 or a `data:` URL. A new analysis replaces the visible
    /// result of any earlier one.
    #[oai(path = "/analyses", method = "post", tag = "ApiTags::Analyses")]
    async fn analyze_image(&self, body: Json<AnalyzeImageRequest>) -> AnalyzeResponse {
        match body.0.into_image_file() {
            Ok(file) => self.run(Arc::new(file)).await,
            Err(err) => AnalyzeResponse::from_error(err.into()),
        }
    }

    /// Analyze an uploaded photo
    ///
    /// Multipart upload with a single `file` field.
    #[oai(path = "/analyses/upload", method = "post", tag = "ApiTags::Analyses")]
    async fn analyze_upload(&self, form: AnalyzeUploadRequest) -> AnalyzeResponse {
        let name = form
            .file
            .file_name()
            .unwrap_or(DEFAULT_UPLOAD_NAME)
            .to_string();
        let mime_type = form.file.content_type().unwrap_or_default().to_string();

        match form.file.into_vec().await {
            Ok(bytes) => self.run(Arc::new(ImageFile::new(name, mime_type, bytes))).await,
            Err(err) => AnalyzeResponse::from_error(ImageError::ReadFailed(err).into()),
        }
    }

    /// Current analysis state
    ///
    /// Returns idle, in_progress, succeeded (with result) or failed (with error).
    #[oai(path = "/analyses/current", method = "get", tag = "ApiTags::Analyses")]
    async fn current_analysis(&self) -> Json<AnalysisStatusResponse> {
        Json(self.session.status().await.into())
    }

    /// Clear the current analysis
    ///
    /// Drops the visible result or error; an analysis still running will not
    /// publish its outcome.
    #[oai(path = "/analyses/current", method = "delete", tag = "ApiTags::Analyses")]
    async fn clear_analysis(&self) -> ClearAnalysisResponse {
        self.session.reset().await;
        ClearAnalysisResponse::NoContent
    }
}

#[derive(ApiResponse)]
pub enum AnalyzeResponse {
    #[oai(status = 200)]
    Ok(Json<AnalysisResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

impl AnalyzeResponse {
    fn from_error(err: AnalysisError) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => AnalyzeResponse::BadRequest(json),
            409 => AnalyzeResponse::Conflict(json),
            422 => AnalyzeResponse::UnprocessableEntity(json),
            _ => AnalyzeResponse::BadGateway(json),
        }
    }
}

#[derive(ApiResponse)]
pub enum ClearAnalysisResponse {
    #[oai(status = 204)]
    NoContent,
}
