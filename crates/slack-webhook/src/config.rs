//! Configuration for the webhook service.

use anyhow::{Context, Result};
use chat_driver::{DriverConfig, SLACK_TOKEN_KEY};
use serde::Deserialize;
use std::time::Duration;

/// Service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Slack API configuration
    #[serde(default)]
    pub slack: SlackConfig,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlackConfig {
    /// Bot token used for chat.postMessage
    #[serde(default)]
    pub token: Option<String>,

    /// Timeout for outbound Slack API calls
    #[serde(default = "default_api_timeout", with = "humantime_serde")]
    pub api_timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for SlackConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_timeout: default_api_timeout(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            port: default_port(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_api_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_listen_addr() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".into()
}

impl SlackConfig {
    /// Settings handed to each Slack driver.
    pub fn driver_config(&self) -> DriverConfig {
        self.token
            .iter()
            .map(|token| (SLACK_TOKEN_KEY, token.as_str()))
            .collect()
    }
}

impl Config {
    /// Load configuration from environment variables (`SLACK__TOKEN`, `SERVER__PORT`, ...).
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    // Tokens must stay strings.
                    .try_parsing(false),
            )
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}
