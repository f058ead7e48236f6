//! Host-environment configuration.
//!
//! The current locale, the forced-locale flag and the process-wide default
//! parameters form an explicit configuration object supplied when the
//! [`Translator`](crate::Translator) is built, rather than being read from
//! host singletons at call time.

use std::collections::HashMap;
use std::path::Path;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// Name of the optional configuration file looked up by [`HostConfig::load_from_dir`].
pub const CONFIG_FILE_NAME: &str = ".translator.json";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "defaultLocale")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HostConfig {
    /// Locale used when no explicit locale is requested.
    pub default_locale: String,

    /// When true, actors' own locales are ignored and every translation uses
    /// `default_locale`.
    pub locale_forced: bool,

    /// Parameters merged into every `translate` call. Caller-supplied
    /// parameters win on key collision.
    pub default_params: HashMap<String, String>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            default_locale: "eng".to_string(),
            locale_forced: false,
            default_params: HashMap::new(),
        }
    }
}

impl HostConfig {
    /// # Errors
    /// - `defaultLocale` is not a three-letter code
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        let locale = &self.default_locale;
        if locale.len() != 3 || !locale.chars().all(|c| c.is_ascii_alphabetic()) {
            errors.push(ValidationError::new(
                "defaultLocale",
                format!(
                    "Expected a three-letter locale code (e.g., \"eng\"), got '{locale}'"
                ),
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Loads the configuration from a directory.
    ///
    /// Looks for [`CONFIG_FILE_NAME`] inside `dir`.
    ///
    /// # Returns
    /// - `Ok(Some(config))`: the file exists, parsed and validated
    /// - `Ok(None)`: no configuration file present
    /// - `Err(ConfigError)`: read, parse or validation failure
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            tracing::debug!("Configuration file not found: {:?}", config_path);
            return Ok(None);
        }

        tracing::debug!("Loading configuration from: {:?}", config_path);

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate().map_err(ConfigError::ValidationErrors)?;

        Ok(Some(config))
    }
}
