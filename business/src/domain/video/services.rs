use async_trait::async_trait;

use super::errors::VideoError;
use super::model::VideoSuggestion;

/// Service port for finding upcycling tutorials for an item.
#[async_trait]
pub trait VideoRecommenderService: Send + Sync {
    /// Returns suggestions in the order the search service ranked them.
    async fn recommend(&self, item_name: &str) -> Result<Vec<VideoSuggestion>, VideoError>;
}
