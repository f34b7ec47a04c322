#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CameraError {
    #[error("camera.permission_denied")]
    PermissionDenied,
    #[error("camera.device_unavailable")]
    DeviceUnavailable(String),
    #[error("camera.not_live")]
    NotLive,
    #[error("camera.capture_failed")]
    CaptureFailed(String),
}

impl CameraError {
    /// Message shown next to the camera controls.
    pub fn user_message(&self) -> &'static str {
        match self {
            CameraError::PermissionDenied => {
                "Camera permission was denied. Please allow camera access in your settings."
            }
            CameraError::DeviceUnavailable(_) => {
                "Could not open camera. It might be in use or not available."
            }
            CameraError::NotLive => "The camera is not open.",
            CameraError::CaptureFailed(_) => "Could not capture a snapshot from the camera.",
        }
    }
}
