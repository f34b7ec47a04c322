use async_trait::async_trait;

use super::errors::CameraError;
use super::model::{VideoConstraints, VideoFrame};

/// Platform media-capture capability.
///
/// Implementations map a user refusal to [`CameraError::PermissionDenied`] and
/// every other acquisition failure to [`CameraError::DeviceUnavailable`].
#[async_trait]
pub trait MediaDevices: Send + Sync {
    async fn request_video_stream(
        &self,
        constraints: VideoConstraints,
    ) -> Result<Box<dyn MediaStream>, CameraError>;
}

/// A live device stream. Holding one keeps the device busy until `stop` is called.
pub trait MediaStream: Send + Sync {
    fn id(&self) -> &str;

    /// Width and height the device delivers frames at.
    fn native_resolution(&self) -> (u32, u32);

    fn current_frame(&self) -> Result<VideoFrame, CameraError>;

    /// Stops every track of the stream. Must be safe to call more than once.
    fn stop(&self);
}
