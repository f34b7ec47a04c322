use anyhow::Context;
use std::env;

/// Configuration for Gemini API access.
///
/// Environment variables:
/// - GEMINI_API_KEY: API key (required)
/// - GEMINI_MODEL: Model name (default: "gemini-2.0-flash")
/// - GEMINI_BASE_URL: API root (default: the public v1beta endpoint)
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: Option<String>,
    pub base_url: Option<String>,
}

impl GeminiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .context("GEMINI_API_KEY environment variable must be set")?;

        Ok(Self {
            api_key,
            model: env::var("GEMINI_MODEL").ok().filter(|m| !m.is_empty()),
            base_url: env::var("GEMINI_BASE_URL").ok().filter(|u| !u.is_empty()),
        })
    }
}
