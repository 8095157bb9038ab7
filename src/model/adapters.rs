// src/model/adapters.rs

use std::fs;

use tracing::warn;

use crate::error::ExchangeError;
use crate::model::screen::Screen;

/// Bundled demo inventory, the fallback when no inventory API is
/// configured or reachable.
pub struct FixtureScreenSource {
    pub path: String,
}

impl FixtureScreenSource {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
        }
    }

    /// Lenient load: a missing or malformed fixture file yields an empty
    /// inventory rather than an error.
    pub fn load(&self) -> Vec<Screen> {
        let content = fs::read_to_string(&self.path).unwrap_or_else(|_| "[]".to_string());
        match serde_json::from_str(&content) {
            Ok(screens) => screens,
            Err(e) => {
                warn!(path = %self.path, error = %e, "fixture inventory unreadable, starting empty");
                Vec::new()
            }
        }
    }
}

/// Partner inventory API, `GET {base_url}/Screens/all`.
pub struct RestScreenSource {
    base_url: String,
    client: reqwest::Client,
}

impl RestScreenSource {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub async fn fetch_all(&self) -> Result<Vec<Screen>, ExchangeError> {
        let url = format!("{}/Screens/all", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ExchangeError::InventorySource(format!("{}: {}", url, e)))?;
        response
            .json::<Vec<Screen>>()
            .await
            .map_err(|e| ExchangeError::InventorySource(format!("{}: {}", url, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fixture_file_yields_empty_inventory() {
        let source = FixtureScreenSource::new("static/does_not_exist.json");
        assert!(source.load().is_empty());
    }

    #[test]
    fn bundled_fixtures_parse() {
        let source = FixtureScreenSource::new("static/screens.json");
        let screens = source.load();
        assert!(!screens.is_empty());
        assert!(screens.iter().any(|s| s.pricing.bundles.daily.enabled));
        assert!(screens.iter().any(|s| s.coordinates.is_none()));
    }
}
