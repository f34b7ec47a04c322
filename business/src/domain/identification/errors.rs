use crate::domain::errors::UpstreamError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IdentificationError {
    #[error("identification.upstream")]
    Upstream(#[from] UpstreamError),
    #[error("identification.malformed_response")]
    MalformedResponse(String),
    #[error("identification.item_not_identified")]
    ItemNotIdentified,
}
