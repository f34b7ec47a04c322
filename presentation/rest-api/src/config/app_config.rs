use super::{
    cors_config, gemini_config::GeminiConfig, server_config::ServerConfig,
    youtube_config::YouTubeConfig,
};
use poem::middleware::Cors;

/// Process-wide configuration, loaded once at startup and read-only afterwards.
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub gemini: GeminiConfig,
    pub youtube: YouTubeConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            gemini: GeminiConfig::from_env()?,
            youtube: YouTubeConfig::from_env()?,
        })
    }
}
