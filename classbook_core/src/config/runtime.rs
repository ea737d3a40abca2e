// RUNTIME PREFERENCES (User Experience)

use crate::logging::codes::{self, Code};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingPreferences {
    /// Whether to emit events as JSON lines
    pub use_structured_logging: bool,

    /// Whether to forward events to the `log` facade instead of stderr
    pub use_log_facade: bool,

    /// Minimum level to log
    pub min_log_level: LogLevel,

    /// Whether to tag events with the command line being processed
    pub include_command_context: bool,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: env::var(env_vars::LOGGING_USE_STRUCTURED)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            use_log_facade: env::var(env_vars::LOGGING_USE_LOG_FACADE)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            min_log_level: env::var(env_vars::LOGGING_MIN_LEVEL)
                .ok()
                .and_then(|v| parse_log_level(&v))
                .unwrap_or(LogLevel::Warning),
            include_command_context: env::var(env_vars::LOGGING_INCLUDE_COMMAND_CONTEXT)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Convert to events::LogLevel for compatibility
    pub fn to_events_log_level(&self) -> crate::logging::events::LogLevel {
        match self {
            LogLevel::Error => crate::logging::events::LogLevel::Error,
            LogLevel::Warning => crate::logging::events::LogLevel::Warning,
            LogLevel::Info => crate::logging::events::LogLevel::Info,
            LogLevel::Debug => crate::logging::events::LogLevel::Debug,
        }
    }
}

/// Parse log level from string (used for environment variables and CLI flags)
pub fn parse_log_level(level: &str) -> Option<LogLevel> {
    match level.to_lowercase().as_str() {
        "error" | "0" => Some(LogLevel::Error),
        "warning" | "warn" | "1" => Some(LogLevel::Warning),
        "info" | "2" => Some(LogLevel::Info),
        "debug" | "3" => Some(LogLevel::Debug),
        _ => None,
    }
}

/// Preferences of the interactive session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPrefs {
    /// Prompt printed before each command in the REPL
    pub prompt: String,

    /// Whether the REPL greets the user on start
    pub show_welcome: bool,
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self {
            prompt: env::var(env_vars::PROMPT).unwrap_or_else(|_| "> ".to_string()),
            show_welcome: env::var(env_vars::SHOW_WELCOME)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

/// Errors raised while loading configuration files
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl ConfigError {
    pub fn error_code(&self) -> Code {
        match self {
            ConfigError::Io { .. } => codes::config::CONFIG_IO_ERROR,
            ConfigError::Parse(_) | ConfigError::Serialize(_) => codes::config::CONFIG_PARSE_ERROR,
        }
    }
}

/// Whole application configuration as read from a TOML file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingPreferences,
    pub user: UserPrefs,
}

impl AppConfig {
    /// Parse configuration from TOML text; missing keys take their defaults
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }
}

/// Environment variable names for configuration
pub mod env_vars {
    // Logging
    pub const LOGGING_USE_STRUCTURED: &str = "CLASSBOOK_LOGGING_USE_STRUCTURED";
    pub const LOGGING_USE_LOG_FACADE: &str = "CLASSBOOK_LOGGING_USE_LOG_FACADE";
    pub const LOGGING_MIN_LEVEL: &str = "CLASSBOOK_LOGGING_MIN_LEVEL";
    pub const LOGGING_INCLUDE_COMMAND_CONTEXT: &str = "CLASSBOOK_LOGGING_INCLUDE_COMMAND_CONTEXT";

    // Session
    pub const PROMPT: &str = "CLASSBOOK_PROMPT";
    pub const SHOW_WELCOME: &str = "CLASSBOOK_SHOW_WELCOME";
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(parse_log_level("error"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("ERROR"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("warn"), Some(LogLevel::Warning));
        assert_eq!(parse_log_level("warning"), Some(LogLevel::Warning));
        assert_eq!(parse_log_level("2"), Some(LogLevel::Info));
        assert_eq!(parse_log_level("debug"), Some(LogLevel::Debug));
        assert_eq!(parse_log_level("invalid"), None);
    }

    #[test]
    fn test_from_toml_str_reads_sections() {
        let config = AppConfig::from_toml_str(
            r#"
            [logging]
            use_structured_logging = true
            use_log_facade = false
            min_log_level = "debug"
            include_command_context = false

            [user]
            prompt = "classbook> "
            show_welcome = false
            "#,
        )
        .unwrap();

        assert!(config.logging.use_structured_logging);
        assert_eq!(config.logging.min_log_level, LogLevel::Debug);
        assert!(!config.logging.include_command_context);
        assert_eq!(config.user.prompt, "classbook> ");
        assert!(!config.user.show_welcome);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = AppConfig::default();
        config.user.prompt = "$ ".to_string();
        config.logging.min_log_level = LogLevel::Error;

        let text = config.to_toml().unwrap();
        let parsed = AppConfig::from_toml_str(&text).unwrap();

        assert_eq!(parsed.user, config.user);
        assert_eq!(parsed.logging.min_log_level, LogLevel::Error);
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let result = AppConfig::from_toml_str("[logging\nmin_log_level = ");
        assert_matches!(result, Err(ConfigError::Parse(_)));

        let result = AppConfig::from_toml_str("[logging]\nmin_log_level = \"loud\"");
        assert_matches!(result, Err(ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[user]\nprompt = \"cb> \"").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.user.prompt, "cb> ");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(&dir.path().join("absent.toml")).unwrap_err();

        assert_matches!(err, ConfigError::Io { .. });
        assert_eq!(err.error_code(), codes::config::CONFIG_IO_ERROR);
    }

    #[test]
    fn test_env_var_names_exist() {
        assert!(env_vars::LOGGING_MIN_LEVEL.starts_with("CLASSBOOK_"));
        assert!(env_vars::PROMPT.starts_with("CLASSBOOK_"));
    }
}
