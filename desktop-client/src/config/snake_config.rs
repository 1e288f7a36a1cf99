use std::time::Duration;
use common::config::{Validate, validate_range};
use common::games::snake::SnakeSessionSettings;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SnakeConfig {
    pub field_width: u32,
    pub field_height: u32,
    pub tick_interval_ms: u32,
}

impl Validate for SnakeConfig {
    fn validate(&self) -> Result<(), String> {
        validate_range("field_width", self.field_width, 5..=50)?;
        validate_range("field_height", self.field_height, 5..=50)?;
        validate_range("tick_interval_ms", self.tick_interval_ms, 50..=1000)?;
        Ok(())
    }
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            field_width: 19,
            field_height: 19,
            tick_interval_ms: 200,
        }
    }
}

impl From<&SnakeConfig> for SnakeSessionSettings {
    fn from(config: &SnakeConfig) -> Self {
        Self {
            field_width: config.field_width as usize,
            field_height: config.field_height as usize,
            tick_interval: Duration::from_millis(config.tick_interval_ms as u64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_converts_to_default_session_settings() {
        let settings = SnakeSessionSettings::from(&SnakeConfig::default());
        assert_eq!(settings, SnakeSessionSettings::default());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_field_too_large_is_rejected() {
        let config = SnakeConfig {
            field_width: 51,
            ..SnakeConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
