// src/config/config_manager.rs

use crate::model::frequency::FrequencyType;

/// Resolved runtime configuration.
///
/// The display frequency is the stand-in for per-partner configuration:
/// until a partner settings store exists it is a single marketplace-wide
/// value, overridable from the command line.
#[derive(Clone, Debug)]
pub struct ConfigManager {
    pub frequency: FrequencyType,
    pub inventory_api: Option<String>,
}

impl ConfigManager {
    pub fn new(frequency: FrequencyType, inventory_api: Option<String>) -> Self {
        ConfigManager {
            frequency,
            inventory_api,
        }
    }

    pub fn from_args(frequency: &str, inventory_api: Option<&str>) -> Result<Self, String> {
        let frequency = FrequencyType::try_from(frequency.to_string())?;
        Ok(ConfigManager::new(
            frequency,
            inventory_api.map(str::to_string),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_args_parses_frequency_tags() {
        let config = ConfigManager::from_args("5min", None).unwrap();
        assert_eq!(config.frequency, FrequencyType::FiveMin);
        assert!(ConfigManager::from_args("45min", None).is_err());
    }
}
