use anyhow::Context;
use std::env;

/// Configuration for YouTube Data API access.
///
/// Environment variables:
/// - YOUTUBE_API_KEY: API key (required)
/// - YOUTUBE_BASE_URL: API root (default: "https://www.googleapis.com/youtube/v3")
#[derive(Debug, Clone)]
pub struct YouTubeConfig {
    pub api_key: String,
    pub base_url: Option<String>,
}

impl YouTubeConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = env::var("YOUTUBE_API_KEY")
            .context("YOUTUBE_API_KEY environment variable must be set")?;

        Ok(Self {
            api_key,
            base_url: env::var("YOUTUBE_BASE_URL").ok().filter(|u| !u.is_empty()),
        })
    }
}
