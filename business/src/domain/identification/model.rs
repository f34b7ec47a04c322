use serde::{Deserialize, Serialize};

use super::errors::IdentificationError;

/// The waste item recognised in an image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentificationResult {
    pub item_name: String,
}

impl IdentificationResult {
    /// Rejects blank names; surrounding whitespace is trimmed.
    pub fn new(item_name: impl Into<String>) -> Result<Self, IdentificationError> {
        let item_name = item_name.into();
        let trimmed = item_name.trim();
        if trimmed.is_empty() {
            return Err(IdentificationError::ItemNotIdentified);
        }
        Ok(Self {
            item_name: trimmed.to_string(),
        })
    }
}
