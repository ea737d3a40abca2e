//! Configuration module for classbook
//!
//! Compile-time limits live in [`constants`]; user-facing preferences and the
//! TOML loader live in [`runtime`].

pub mod constants;
pub mod runtime;

pub use runtime::{AppConfig, ConfigError, LoggingPreferences, UserPrefs};
