use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, PoisonError};

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Arc<Mutex<Option<TConfig>>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: Arc::new(Mutex::new(None)),
            config_content_provider,
            config_serializer,
        }
    }

    /// Returns the cached config, reading it on first use. A missing file
    /// yields `TConfig::default()` without caching it.
    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self.config.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let Some(config_data) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&config_data)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider
            .set_config_content(&serialized_config)?;

        let mut current = self.config.lock().unwrap_or_else(PoisonError::into_inner);
        *current = Some(config.clone());
        Ok(())
    }

    /// Like `get_config`, but writes the defaults out when nothing is stored
    /// yet so the user has a file to edit.
    pub fn load_or_create(&self) -> Result<TConfig, String> {
        if self.config_content_provider.get_config_content()?.is_some() {
            return self.get_config();
        }

        let config = TConfig::default();
        self.set_config(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::validate_range;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestConfig {
        field_width: u32,
        tick_interval_ms: u32,
    }

    impl Default for TestConfig {
        fn default() -> Self {
            Self {
                field_width: 19,
                tick_interval_ms: 200,
            }
        }
    }

    impl Validate for TestConfig {
        fn validate(&self) -> Result<(), String> {
            validate_range("field_width", self.field_width, 5..=50)?;
            validate_range("tick_interval_ms", self.tick_interval_ms, 50..=1000)
        }
    }

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_snake_common_config_{}.yaml", random_number));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_missing_file_returns_default_config() {
        let manager: ConfigManager<_, TestConfig, _> =
            ConfigManager::from_yaml_file("this_file_does_not_exist.yaml");
        assert_eq!(manager.get_config().unwrap(), TestConfig::default());
    }

    #[test]
    fn test_set_then_get_round_trips_through_file() {
        let file_path = get_temp_file_path();
        let config = TestConfig {
            field_width: 30,
            tick_interval_ms: 120,
        };

        let manager: ConfigManager<_, TestConfig, _> = ConfigManager::from_yaml_file(&file_path);
        manager.set_config(&config).unwrap();

        let fresh: ConfigManager<_, TestConfig, _> = ConfigManager::from_yaml_file(&file_path);
        assert_eq!(fresh.get_config().unwrap(), config);
        assert_eq!(fresh.get_config().unwrap(), config);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_invalid_config_cant_be_saved() {
        let manager: ConfigManager<_, TestConfig, _> =
            ConfigManager::from_yaml_file(&get_temp_file_path());
        let config = TestConfig {
            field_width: 2,
            tick_interval_ms: 200,
        };
        assert!(manager.set_config(&config).is_err());
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let file_path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(file_path.clone());
        provider
            .set_config_content("field_width: 500\ntick_interval_ms: 200\n")
            .unwrap();

        let manager: ConfigManager<_, TestConfig, _> =
            ConfigManager::new(provider, YamlConfigSerializer::new());
        assert!(manager.get_config().is_err());

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_load_or_create_writes_defaults() {
        let file_path = get_temp_file_path();
        let manager: ConfigManager<_, TestConfig, _> = ConfigManager::from_yaml_file(&file_path);

        assert_eq!(manager.load_or_create().unwrap(), TestConfig::default());

        let content = FileContentConfigProvider::new(file_path.clone())
            .get_config_content()
            .unwrap();
        assert!(content.unwrap().contains("field_width: 19"));

        let _ = std::fs::remove_file(file_path);
    }
}
