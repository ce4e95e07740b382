//! Trainer configuration loading from file and environment variables.

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Top-level trainer configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrainerConfig {
    /// Conversation settings.
    #[serde(default)]
    pub session: SessionConfig,

    /// Speech modality settings.
    #[serde(default)]
    pub speech: SpeechConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Conversation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Pause before the customer answers, in milliseconds.
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,

    /// TOML scenario catalogue to use instead of the built-in one.
    #[serde(default)]
    pub scenarios_path: Option<String>,
}

/// Speech modality settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SpeechConfig {
    /// Speak customer lines aloud.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Offer microphone dictation.
    #[serde(default = "default_true")]
    pub dictation: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "roleplay_dialogue=debug,info").
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether to output logs in JSON format.
    #[serde(default)]
    pub json: bool,
}

fn default_reply_delay_ms() -> u64 {
    1000
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl SessionConfig {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay_ms(),
            scenarios_path: None,
        }
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dictation: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

fn parse_flag(value: &str) -> bool {
    value == "true" || value == "1"
}

/// Loads configuration from a TOML file, falling back to defaults.
///
/// Environment variable overrides:
/// - `ROLEPLAY_REPLY_DELAY_MS` overrides `session.reply_delay_ms`
/// - `ROLEPLAY_SCENARIOS_PATH` overrides `session.scenarios_path`
/// - `ROLEPLAY_SPEECH_ENABLED` overrides `speech.enabled` ("true"/"1" to enable)
/// - `ROLEPLAY_LOG_LEVEL` overrides `logging.level`
/// - `ROLEPLAY_LOG_JSON` overrides `logging.json` (set to "true" to enable)
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read or parsed.
pub fn load_config(path: Option<&str>) -> Result<TrainerConfig, ConfigError> {
    let mut config = match path {
        Some(p) => match std::fs::read_to_string(p) {
            Ok(contents) => toml::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = p, "config file not found, using defaults");
                TrainerConfig::default()
            }
            Err(e) => return Err(ConfigError::FileRead(e)),
        },
        None => TrainerConfig::default(),
    };

    // Environment variable overrides
    if let Ok(delay) = std::env::var("ROLEPLAY_REPLY_DELAY_MS") {
        if let Ok(parsed) = delay.parse() {
            config.session.reply_delay_ms = parsed;
        }
    }
    if let Ok(path) = std::env::var("ROLEPLAY_SCENARIOS_PATH") {
        if !path.trim().is_empty() {
            config.session.scenarios_path = Some(path);
        }
    }
    if let Ok(enabled) = std::env::var("ROLEPLAY_SPEECH_ENABLED") {
        config.speech.enabled = parse_flag(&enabled);
    }
    if let Ok(level) = std::env::var("ROLEPLAY_LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Ok(json) = std::env::var("ROLEPLAY_LOG_JSON") {
        config.logging.json = parse_flag(&json);
    }

    Ok(config)
}
