/// Configuration system for git-history-mcp
///
/// Supports loading from multiple sources with priority:
/// CLI args > Environment variables > Config file > Defaults
use crate::error::{ConfigError, HistoryMcpError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming an alternative config file location
pub const CONFIG_PATH_ENV: &str = "GIT_HISTORY_MCP_CONFIG";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Completion endpoint configuration
    #[serde(default)]
    pub llm: LlmConfig,
}

/// Completion endpoint (Ollama) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Base URL of the local completion service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model identifier passed to the endpoint
    #[serde(default = "default_model")]
    pub model: String,

    /// Output token budget for a summarization call
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

// Default value functions
fn default_base_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    "phi3:mini".to_string()
}

fn default_max_tokens() -> u32 {
    500
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            max_tokens: default_max_tokens(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn from_file(path: &Path) -> Result<Self, HistoryMcpError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()).into());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::LoadFailed(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::ParseFailed(format!("Invalid TOML: {e}")))?;

        Ok(config)
    }

    /// Load configuration from an explicit path, the path named by
    /// `GIT_HISTORY_MCP_CONFIG`, or defaults, then apply environment
    /// variable overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, HistoryMcpError> {
        let mut config = match path {
            Some(path) => {
                tracing::info!("Loading config from: {}", path.display());
                Self::from_file(path)?
            }
            None => match std::env::var(CONFIG_PATH_ENV) {
                Ok(env_path) => {
                    tracing::info!("Loading config from {CONFIG_PATH_ENV}: {env_path}");
                    Self::from_file(Path::new(&env_path))?
                }
                Err(_) => {
                    tracing::info!("No config file specified, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides to this configuration
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("GIT_HISTORY_MCP_OLLAMA_URL") {
            self.llm.base_url = url;
        }
        if let Ok(model) = std::env::var("GIT_HISTORY_MCP_MODEL") {
            self.llm.model = model;
        }
        if let Ok(tokens) = std::env::var("GIT_HISTORY_MCP_MAX_TOKENS")
            && let Ok(tokens) = tokens.parse()
        {
            self.llm.max_tokens = tokens;
        }
    }
}
