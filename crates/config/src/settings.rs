//! Main settings module
//!
//! Layered loading: `config/default.yaml`, then `config/{environment}.yaml`,
//! then `STYLIST__`-prefixed environment variables (double underscore as the
//! section separator, e.g. `STYLIST__LLM__API_KEY`).

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_log_level() -> String {
    "info".to_string()
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level filter (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON-formatted logs instead of human-readable ones
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_llm_enabled() -> bool {
    true
}

fn default_llm_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_llm_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_llm_timeout_ms() -> u64 {
    8_000
}

fn default_llm_temperature() -> f32 {
    0.7
}

fn default_llm_max_output_tokens() -> u32 {
    1_024
}

/// Fallback language-model configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    /// Master switch for the remote fallback
    #[serde(default = "default_llm_enabled")]
    pub enabled: bool,

    /// API key; when empty the fallback is effectively disabled and every
    /// escalated message degrades to the apology reply
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_llm_model")]
    pub model: String,

    #[serde(default = "default_llm_endpoint")]
    pub endpoint: String,

    /// Bound on a single fallback call; no retries are attempted
    #[serde(default = "default_llm_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default = "default_llm_temperature")]
    pub temperature: f32,

    #[serde(default = "default_llm_max_output_tokens")]
    pub max_output_tokens: u32,
}

impl LlmSettings {
    /// True when escalated messages should actually reach the remote model.
    pub fn fallback_active(&self) -> bool {
        self.enabled && !self.api_key.is_empty()
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            enabled: default_llm_enabled(),
            api_key: String::new(),
            model: default_llm_model(),
            endpoint: default_llm_endpoint(),
            timeout_ms: default_llm_timeout_ms(),
            temperature: default_llm_temperature(),
            max_output_tokens: default_llm_max_output_tokens(),
        }
    }
}

/// Optional file overrides for the built-in domain data
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataSettings {
    /// YAML catalog override; built-in seed catalog when unset
    #[serde(default)]
    pub catalog_path: Option<String>,

    /// YAML vocabulary override; built-in tables when unset
    #[serde(default)]
    pub vocabulary_path: Option<String>,

    /// YAML store-info override
    #[serde(default)]
    pub store_path: Option<String>,

    /// YAML reply-templates override
    #[serde(default)]
    pub templates_path: Option<String>,
}

/// Main application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingSettings,

    /// Fallback language-model configuration
    #[serde(default)]
    pub llm: LlmSettings,

    /// Domain data overrides
    #[serde(default)]
    pub data: DataSettings,
}

impl Settings {
    /// Create default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_llm()
    }

    fn validate_llm(&self) -> Result<(), ConfigError> {
        let llm = &self.llm;

        if llm.model.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "llm.model".to_string(),
                message: "Model name must not be empty".to_string(),
            });
        }

        if llm.endpoint.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "llm.endpoint".to_string(),
                message: "Endpoint must not be empty".to_string(),
            });
        }

        if llm.timeout_ms == 0 || llm.timeout_ms > 60_000 {
            return Err(ConfigError::InvalidValue {
                field: "llm.timeout_ms".to_string(),
                message: format!("Must be between 1 and 60000, got {}", llm.timeout_ms),
            });
        }

        if !(0.0..=2.0).contains(&llm.temperature) {
            return Err(ConfigError::InvalidValue {
                field: "llm.temperature".to_string(),
                message: format!("Must be between 0.0 and 2.0, got {}", llm.temperature),
            });
        }

        if llm.max_output_tokens == 0 {
            return Err(ConfigError::InvalidValue {
                field: "llm.max_output_tokens".to_string(),
                message: "Must be positive".to_string(),
            });
        }

        Ok(())
    }
}

/// Load settings for the given environment ("default", "production", ...).
pub fn load_settings(environment: &str) -> Result<Settings, ConfigError> {
    let settings: Settings = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(&format!("config/{}", environment)).required(false))
        .add_source(
            Environment::with_prefix("STYLIST")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()?;
    settings.validate()?;
    Ok(settings)
}
