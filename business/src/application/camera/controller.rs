use std::sync::Arc;

use crate::domain::camera::errors::CameraError;
use crate::domain::camera::model::{CaptureState, VideoConstraints};
use crate::domain::camera::services::{MediaDevices, MediaStream};
use crate::domain::camera::snapshot::encode_snapshot;
use crate::domain::image::sources::ImageFile;
use crate::domain::logger::Logger;

/// Owns the single camera stream used for photographing an item.
///
/// At most one stream is held at a time, and it is stopped on every exit path:
/// snapshot, close, reopen, or drop of the controller.
pub struct CameraCaptureController {
    devices: Arc<dyn MediaDevices>,
    constraints: VideoConstraints,
    logger: Arc<dyn Logger>,
    state: CaptureState,
    stream: Option<Box<dyn MediaStream>>,
}

impl CameraCaptureController {
    /// Uses the rear-facing camera.
    pub fn new(devices: Arc<dyn MediaDevices>, logger: Arc<dyn Logger>) -> Self {
        Self::with_constraints(devices, VideoConstraints::default(), logger)
    }

    pub fn with_constraints(
        devices: Arc<dyn MediaDevices>,
        constraints: VideoConstraints,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            devices,
            constraints,
            logger,
            state: CaptureState::Closed,
            stream: None,
        }
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    pub fn is_live(&self) -> bool {
        self.state == CaptureState::Live
    }

    /// The live stream to attach to a preview surface.
    pub fn preview(&self) -> Option<&dyn MediaStream> {
        self.stream.as_deref()
    }

    /// Acquires a stream, stopping any stream held before.
    pub async fn open(&mut self) -> Result<(), CameraError> {
        self.release_stream();
        self.state = CaptureState::Opening;

        match self.devices.request_video_stream(self.constraints).await {
            Ok(stream) => {
                self.logger.info(&format!("Camera stream {} is live", stream.id()));
                self.stream = Some(stream);
                self.state = CaptureState::Live;
                Ok(())
            }
            Err(error) => {
                self.logger.warn(&format!("Error opening camera: {:?}", error));
                self.state = CaptureState::Closed;
                Err(error)
            }
        }
    }

    /// Grabs the current frame as a JPEG file and closes the camera.
    ///
    /// A failed grab leaves the stream live so the user can retry.
    pub fn capture_frame(&mut self) -> Result<ImageFile, CameraError> {
        let stream = match (&self.state, &self.stream) {
            (CaptureState::Live, Some(stream)) => stream,
            _ => return Err(CameraError::NotLive),
        };

        let native = stream.native_resolution();
        let frame = stream.current_frame()?;
        let snapshot = encode_snapshot(frame, native)?;

        self.logger.info(&format!(
            "Captured {}x{} snapshot ({} bytes)",
            native.0,
            native.1,
            snapshot.bytes.len()
        ));
        self.close();
        Ok(snapshot)
    }

    /// Stops every track and returns to `Closed`. Safe to call in any state.
    pub fn close(&mut self) {
        if self.state != CaptureState::Closed {
            self.logger.debug("Closing camera");
        }
        self.release_stream();
        self.state = CaptureState::Closed;
    }

    fn release_stream(&mut self) {
        if let Some(stream) = self.stream.take() {
            stream.stop();
        }
    }
}

impl Drop for CameraCaptureController {
    fn drop(&mut self) {
        self.release_stream();
    }
}
