use crate::session::state::ConverterState;
use crate::units::error::UnitError;
use crate::units::types::Category;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_PLACEHOLDER: &str = "--";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    Unit(#[from] UnitError),
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    // Initial selections
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DisplayConfig {
    // Shown when the result is empty
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    // Append the output unit name to the value
    #[serde(default = "default_show_unit")]
    pub show_unit: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            show_unit: default_show_unit(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_category")]
    pub category: Category,
    #[serde(default = "default_unit")]
    pub from: String,
    #[serde(default = "default_unit")]
    pub to: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            category: default_category(),
            from: default_unit(),
            to: default_unit(),
        }
    }
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

fn default_show_unit() -> bool {
    true
}

fn default_category() -> Category {
    Category::Length
}

fn default_unit() -> String {
    "Meters".to_string()
}

impl Config {
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Converter state with the configured selections
    pub fn initial_state(&self) -> Result<ConverterState, ConfigError> {
        ConverterState::with_defaults(&self.defaults).map_err(|e| {
            tracing::warn!("invalid default selection: {}", e);
            ConfigError::from(e)
        })
    }
}
