//! Service configuration management

use feed_client::FeedConfig;
use serde::{Deserialize, Serialize};

/// Main service configuration
#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    /// HTTP server settings
    pub server: ServerConfig,

    /// Upstream feed client configuration
    pub feeds: FeedConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,

    /// Bind port
    pub port: u16,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (json, pretty, compact)
    pub format: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".to_string(), port: 8080 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), format: "compact".to_string() }
    }
}

impl ServiceConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self { feeds: FeedConfig::from_env(), ..Default::default() };

        if let Ok(host) = std::env::var("LEADERBOARD_HOST") {
            config.server.host = host;
        }

        if let Ok(port) = std::env::var("LEADERBOARD_PORT") {
            config.server.port = port.parse().unwrap_or(config.server.port);
        }

        if let Ok(level) = std::env::var("LEADERBOARD_LOG_LEVEL") {
            config.logging.level = level;
        }

        config
    }
}
