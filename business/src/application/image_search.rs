use std::sync::Arc;

use crate::application::analysis::session::AnalysisSession;
use crate::application::camera::controller::CameraCaptureController;
use crate::domain::analysis::errors::AnalysisError;
use crate::domain::analysis::model::{AnalysisResult, AnalysisStatus};
use crate::domain::camera::errors::CameraError;
use crate::domain::image::services::ImageSource;

/// Find-projects-by-photo flow: pick a file or take a snapshot, then analyze it.
///
/// The two input sources are mutually exclusive. Choosing either one drops the
/// other, clears the previous result and error, and invalidates an analysis
/// still in flight.
pub struct ImageSearch {
    camera: CameraCaptureController,
    session: Arc<AnalysisSession>,
    selected: Option<Arc<dyn ImageSource>>,
    camera_error: Option<CameraError>,
}

impl ImageSearch {
    pub fn new(camera: CameraCaptureController, session: Arc<AnalysisSession>) -> Self {
        Self {
            camera,
            session,
            selected: None,
            camera_error: None,
        }
    }

    pub async fn select_file(&mut self, file: Arc<dyn ImageSource>) {
        if self.camera.is_live() {
            self.camera.close();
        }
        self.selected = Some(file);
        self.camera_error = None;
        self.session.reset().await;
    }

    pub async fn open_camera(&mut self) -> Result<(), CameraError> {
        self.selected = None;
        self.camera_error = None;
        self.session.reset().await;

        self.camera.open().await.inspect_err(|error| {
            self.camera_error = Some(error.clone());
        })
    }

    /// Uses the current camera frame as the selected image and closes the camera.
    pub fn take_snapshot(&mut self) -> Result<(), CameraError> {
        let snapshot = self.camera.capture_frame()?;
        self.selected = Some(Arc::new(snapshot));
        Ok(())
    }

    pub fn close_camera(&mut self) {
        self.camera.close();
    }

    pub async fn analyze(&self) -> Result<AnalysisResult, AnalysisError> {
        let source = self
            .selected
            .clone()
            .ok_or(AnalysisError::NoImageSelected)?;
        self.session.analyze(source).await
    }

    pub fn camera(&self) -> &CameraCaptureController {
        &self.camera
    }

    pub fn selected(&self) -> Option<&Arc<dyn ImageSource>> {
        self.selected.as_ref()
    }

    pub fn camera_error(&self) -> Option<&CameraError> {
        self.camera_error.as_ref()
    }

    pub async fn status(&self) -> AnalysisStatus {
        self.session.status().await
    }

    pub async fn is_loading(&self) -> bool {
        self.session.is_loading().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::camera::controller::tests::{FakeDevices, Grant, mock_logger};
    use crate::domain::analysis::use_cases::analyze::{AnalyzeImageParams, AnalyzeImageUseCase};
    use crate::domain::camera::model::CaptureState;
    use crate::domain::image::sources::ImageFile;
    use async_trait::async_trait;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub AnalyzeImage {}

        #[async_trait]
        impl AnalyzeImageUseCase for AnalyzeImage {
            async fn execute(
                &self,
                params: AnalyzeImageParams,
            ) -> Result<AnalysisResult, AnalysisError>;
        }
    }

    fn found(item_name: &str) -> Result<AnalysisResult, AnalysisError> {
        Ok(AnalysisResult {
            analysis_id: Uuid::new_v4(),
            item_name: item_name.to_string(),
            video_suggestions: vec![],
        })
    }

    fn search_with(
        use_case: MockAnalyzeImage,
        grant: Grant,
    ) -> (ImageSearch, Arc<FakeDevices>) {
        let devices = Arc::new(FakeDevices::new(grant));
        let camera = CameraCaptureController::new(devices.clone(), mock_logger());
        let session = Arc::new(AnalysisSession::new(Arc::new(use_case), mock_logger()));
        (ImageSearch::new(camera, session), devices)
    }

    fn upload() -> Arc<dyn ImageSource> {
        Arc::new(ImageFile::new("bottle.png", "image/png", vec![7, 7, 7]))
    }

    #[tokio::test]
    async fn should_ask_for_image_before_analyzing() {
        let mut use_case = MockAnalyzeImage::new();
        use_case.expect_execute().never();
        let (search, _) = search_with(use_case, Grant::Allow);

        let result = search.analyze().await;

        assert!(matches!(result, Err(AnalysisError::NoImageSelected)));
        assert_eq!(search.status().await, AnalysisStatus::Idle);
    }

    #[tokio::test]
    async fn should_analyze_selected_file() {
        let mut use_case = MockAnalyzeImage::new();
        use_case
            .expect_execute()
            .withf(|params| params.source.name() == "bottle.png")
            .times(1)
            .returning(|_| found("plastic bottle"));
        let (mut search, _) = search_with(use_case, Grant::Allow);

        search.select_file(upload()).await;
        let result = search.analyze().await.unwrap();

        assert_eq!(result.item_name, "plastic bottle");
        assert!(matches!(search.status().await, AnalysisStatus::Succeeded(_)));
        assert!(!search.is_loading().await);
    }

    #[tokio::test]
    async fn should_clear_result_and_selection_when_camera_opens() {
        let mut use_case = MockAnalyzeImage::new();
        use_case.expect_execute().returning(|_| found("tin can"));
        let (mut search, devices) = search_with(use_case, Grant::Allow);
        search.select_file(upload()).await;
        search.analyze().await.unwrap();

        search.open_camera().await.unwrap();

        assert!(search.selected().is_none());
        assert_eq!(search.status().await, AnalysisStatus::Idle);
        assert_eq!(search.camera().state(), CaptureState::Live);
        assert_eq!(devices.live_streams(), 1);
    }

    #[tokio::test]
    async fn should_close_camera_when_file_is_selected() {
        let use_case = MockAnalyzeImage::new();
        let (mut search, devices) = search_with(use_case, Grant::Allow);
        search.open_camera().await.unwrap();

        search.select_file(upload()).await;

        assert_eq!(search.camera().state(), CaptureState::Closed);
        assert_eq!(devices.live_streams(), 0);
        assert_eq!(search.selected().map(|s| s.name()), Some("bottle.png"));
    }

    #[tokio::test]
    async fn should_analyze_camera_snapshot() {
        let mut use_case = MockAnalyzeImage::new();
        use_case
            .expect_execute()
            .withf(|params| params.source.mime_type() == "image/jpeg")
            .times(1)
            .returning(|_| found("cardboard box"));
        let (mut search, devices) = search_with(use_case, Grant::Allow);
        search.open_camera().await.unwrap();

        search.take_snapshot().unwrap();
        let result = search.analyze().await.unwrap();

        assert_eq!(result.item_name, "cardboard box");
        assert_eq!(devices.live_streams(), 0);
        assert_eq!(search.selected().map(|s| s.name()), Some("snapshot.jpg"));
    }

    #[tokio::test]
    async fn should_remember_camera_error() {
        let use_case = MockAnalyzeImage::new();
        let (mut search, _) = search_with(use_case, Grant::Deny);

        let result = search.open_camera().await;

        assert_eq!(result, Err(CameraError::PermissionDenied));
        assert_eq!(search.camera_error(), Some(&CameraError::PermissionDenied));
        assert_eq!(search.camera().state(), CaptureState::Closed);
    }
}
