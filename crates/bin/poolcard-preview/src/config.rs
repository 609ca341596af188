//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `poolcard.toml` in the working directory (or the path in
//! `POOLCARD_CONFIG`). Every field has a sensible default so the file is
//! optional. Environment variables take precedence over file values.

use poolcard_domain::action::UserAction;
use serde::Deserialize;

/// Default location of the configuration file.
const CONFIG_PATH: &str = "poolcard.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Card settings, same keys as the dashboard configuration.
    /// Falls back to a card covering the demo pool when absent.
    pub card: Option<toml::Table>,
    /// Scripted interactions.
    pub preview: PreviewConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Interactions replayed against the card after the first render.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    pub actions: Vec<UserAction>,
}

impl Config {
    /// Load configuration from `poolcard.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("POOLCARD_CONFIG").unwrap_or_else(|_| CONFIG_PATH.to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("POOLCARD_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging filter must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// The card configuration as the JSON value the card expects.
    ///
    /// # Errors
    ///
    /// Returns an error if the `[card]` table holds a value JSON cannot
    /// represent.
    pub fn card_value(&self) -> Result<serde_json::Value, ConfigError> {
        match &self.card {
            Some(table) => serde_json::to_value(table).map_err(ConfigError::Convert),
            None => Ok(demo_card()),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "poolcard_preview=info,poolcard_app=info,poolcard_adapter_virtual=info"
                .to_string(),
        }
    }
}

/// Card configuration matching the entities of the virtual demo pool.
fn demo_card() -> serde_json::Value {
    serde_json::json!({
        "title": "Pool",
        "temperature": "sensor.pool_water_temperature",
        "pool_spa": "select.pool_spa_selection",
        "favourite": "select.active_favourite",
        "heater": "climate.heater",
        "solar": "water_heater.solar",
        "channels": ["switch.filter_pump", "switch.waterfall"],
        "valves": ["select.cleaner_valve_mode"],
        "lights": ["light.pool_lights"]
    })
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// `[card]` table could not be converted to JSON.
    #[error("failed to convert card configuration")]
    Convert(#[from] serde_json::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use poolcard_domain::id::EntityId;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert!(config.logging.filter.contains("poolcard_preview=info"));
        assert!(config.card.is_none());
        assert!(config.preview.actions.is_empty());
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.card.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [logging]
            filter = 'debug'

            [card]
            title = 'Backyard'
            temperature = 'sensor.t'
            channels = ['switch.pump', { entity = 'switch.jets', name = 'Jets' }]

            [[preview.actions]]
            type = 'toggle'
            entity = 'switch.pump'

            [[preview.actions]]
            type = 'set_climate_temperature'
            entity = 'climate.heater'
            temperature = 31
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(
            config.preview.actions,
            vec![
                UserAction::Toggle {
                    entity: EntityId::from("switch.pump")
                },
                UserAction::SetClimateTemperature {
                    entity: EntityId::from("climate.heater"),
                    temperature: 31.0
                },
            ]
        );

        let card = config.card_value().unwrap();
        assert_eq!(card["title"], "Backyard");
        assert_eq!(card["channels"][1]["name"], "Jets");
    }

    #[test]
    fn should_fall_back_to_demo_card() {
        let card = Config::default().card_value().unwrap();
        assert_eq!(card["heater"], "climate.heater");
        assert_eq!(card["channels"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert!(config.card.is_none());
    }

    #[test]
    fn should_reject_empty_log_filter() {
        let mut config = Config::default();
        config.logging.filter = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_report_parse_error_for_unknown_action_type() {
        let toml = "
            [[preview.actions]]
            type = 'reboot'
            entity = 'switch.pump'
        ";
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }
}
