use reqwest::Client;

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Shared YouTube Data API client configuration.
pub struct YouTubeClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
}

impl YouTubeClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Returns the search endpoint URL.
    pub fn search_url(&self) -> String {
        format!("{}/search", self.base_url)
    }
}
