use async_trait::async_trait;

use crate::domain::image::model::ImagePayload;

use super::errors::IdentificationError;
use super::model::IdentificationResult;

/// Service port for recognising the waste item shown in an image.
#[async_trait]
pub trait ItemIdentifierService: Send + Sync {
    async fn identify(
        &self,
        payload: &ImagePayload,
    ) -> Result<IdentificationResult, IdentificationError>;
}
