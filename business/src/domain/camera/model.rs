/// Lifecycle of the single capture session.
///
/// `Closed -> Opening -> Live -> Closed`, with `Opening` falling back to
/// `Closed` when acquisition fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureState {
    #[default]
    Closed,
    Opening,
    Live,
}

impl std::fmt::Display for CaptureState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CaptureState::Closed => write!(f, "closed"),
            CaptureState::Opening => write!(f, "opening"),
            CaptureState::Live => write!(f, "live"),
        }
    }
}

/// Which physical camera to prefer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacingMode {
    User,
    /// Rear camera.
    Environment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoConstraints {
    pub facing_mode: FacingMode,
}

impl Default for VideoConstraints {
    fn default() -> Self {
        Self {
            facing_mode: FacingMode::Environment,
        }
    }
}

/// A single RGBA8 frame pulled from a live stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoFrame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}
