use serde::{Deserialize, Serialize};

pub const DESCRIPTION_LIMIT: usize = 200;
pub const DESCRIPTION_PLACEHOLDER: &str = "Upcycling tutorial video.";
pub const EMBED_BASE_URL: &str = "https://www.youtube.com/embed/";

/// A tutorial video ready to be rendered as a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSuggestion {
    pub title: String,
    pub channel: String,
    pub description: String,
    pub embed_url: String,
}

impl VideoSuggestion {
    /// Builds a suggestion from a raw search hit.
    ///
    /// Descriptions are cut to [`DESCRIPTION_LIMIT`] characters; a missing or empty
    /// one becomes [`DESCRIPTION_PLACEHOLDER`].
    pub fn from_search_hit(
        video_id: &str,
        title: impl Into<String>,
        channel: impl Into<String>,
        description: Option<&str>,
    ) -> Self {
        Self {
            title: title.into(),
            channel: channel.into(),
            description: truncate_description(description),
            embed_url: embed_url_for(video_id),
        }
    }
}

pub fn embed_url_for(video_id: &str) -> String {
    format!("{}{}", EMBED_BASE_URL, video_id)
}

pub fn truncate_description(description: Option<&str>) -> String {
    match description {
        Some(text) if !text.is_empty() => text.chars().take(DESCRIPTION_LIMIT).collect(),
        _ => DESCRIPTION_PLACEHOLDER.to_string(),
    }
}
