use serde::{Deserialize, Serialize};

/// Configuration for the feed client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Base URL of the stats backend (e.g. "http://localhost:5000")
    pub base_url: String,

    /// Per-feed endpoint paths
    pub endpoints: FeedEndpoints,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedEndpoints {
    pub points: String,
    pub hitting: String,
    pub pitching: String,
    pub mvp: String,
    pub win: String,
    pub player_info: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            endpoints: FeedEndpoints {
                points: "/api/points".to_string(),
                hitting: "/api/hittingstats".to_string(),
                pitching: "/api/pitchingstats".to_string(),
                mvp: "/api/mvp".to_string(),
                win: "/api/win".to_string(),
                player_info: "/api/player_info".to_string(),
            },
            timeout_secs: 30,
        }
    }
}

impl FeedConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(base_url) = std::env::var("FEED_BASE_URL") {
            config.base_url = base_url;
        }

        if let Ok(timeout) = std::env::var("FEED_TIMEOUT_SECS") {
            config.timeout_secs = timeout.parse().unwrap_or(config.timeout_secs);
        }

        config
    }

    /// Full URL for one endpoint path
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}
