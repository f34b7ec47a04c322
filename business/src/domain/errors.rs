/// Failures talking to a vendor HTTP endpoint.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpstreamError {
    /// Non-success HTTP status; `body` carries the response text as detail.
    #[error("upstream.status")]
    Status { status: u16, body: String },
    #[error("upstream.transport")]
    Transport(String),
    #[error("upstream.decode")]
    Decode(String),
}

impl UpstreamError {
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        UpstreamError::Status {
            status,
            body: body.into(),
        }
    }
    pub fn transport(detail: impl Into<String>) -> Self {
        UpstreamError::Transport(detail.into())
    }
    pub fn decode(detail: impl Into<String>) -> Self {
        UpstreamError::Decode(detail.into())
    }

    /// Human-readable detail suitable for the boundary message.
    pub fn detail(&self) -> String {
        match self {
            UpstreamError::Status { status, body } if body.trim().is_empty() => {
                format!("HTTP {}", status)
            }
            UpstreamError::Status { status, body } => format!("HTTP {}: {}", status, body.trim()),
            UpstreamError::Transport(detail) => format!("request failed: {}", detail),
            UpstreamError::Decode(detail) => format!("unreadable response: {}", detail),
        }
    }
}
