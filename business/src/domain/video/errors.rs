use crate::domain::errors::UpstreamError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VideoError {
    #[error("video.upstream")]
    Upstream(#[from] UpstreamError),
    #[error("video.no_results")]
    NoResults,
}
