//! Configuration management for the GymTrack engine
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: GT__)

use crate::gateway::ApiCredential;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub history: HistoryConfig,
}

/// Generation service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// Base URL of the chat-completions endpoint
    pub base_url: String,
    pub model: String,
    /// Token-budget ceiling per request
    pub max_tokens: u32,
    pub request_timeout_secs: u64,
    /// Optional API key. Absence means every generation uses the local path.
    pub api_key: Option<String>,
}

impl AiConfig {
    /// Credential for delegation, if one is configured.
    ///
    /// The capability to supply or withhold this belongs to the caller —
    /// generators take it as an explicit parameter, never ambient state.
    pub fn credential(&self) -> Option<ApiCredential> {
        self.api_key.as_deref().map(ApiCredential::new)
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            max_tokens: 2000,
            request_timeout_secs: 30,
            api_key: None,
        }
    }
}

/// Local history storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Directory holding the per-collection JSON files
    pub data_dir: PathBuf,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ai: AiConfig::default(),
            history: HistoryConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with GT__ prefix
    ///    e.g., GT__AI__MODEL=gpt-4 sets ai.model
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(config::File::with_name(&config_file).required(false))
            .add_source(config::Environment::with_prefix("GT").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
