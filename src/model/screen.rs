// src/model/screen.rs

use serde::{Deserialize, Serialize};

/// A partner-managed marketplace screen, as served by the inventory API.
/// Read-only here: the exchange derives everything else from it on demand.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Screen {
    pub id: String,
    pub name: String,
    pub address: String,
    /// Absent for screens registered without geolocation.
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    pub category: Category,
    #[serde(default)]
    pub operating_hours: OperatingHours,
    #[serde(default)]
    pub specs: DisplaySpecs,
    #[serde(default)]
    pub views: ViewMetrics,
    /// Partner package configuration. Missing or partial pricing
    /// deserializes to the all-disabled structure, never an error.
    #[serde(default)]
    pub pricing: Pricing,
}

impl Screen {
    /// Lat/lng with the documented (0.0, 0.0) default for screens
    /// registered without coordinates.
    pub fn coordinates_or_default(&self) -> Coordinates {
        self.coordinates.clone().unwrap_or_default()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Category {
    pub name: String,
}

/// Daily operating window, "HH:MM" local time.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OperatingHours {
    pub start: String,
    pub end: String,
}

impl Default for OperatingHours {
    fn default() -> Self {
        Self {
            start: "06:00".to_string(),
            end: "22:00".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySpecs {
    pub width_px: u32,
    pub height_px: u32,
    #[serde(default)]
    pub resolution: String,
    #[serde(default)]
    pub brightness_nits: u32,
}

/// Estimated audience reach reported by the partner.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ViewMetrics {
    pub daily: u64,
    pub weekly: u64,
    pub monthly: u64,
}

/// Partner package pricing. Every field defaults so a screen with no
/// pricing object behaves as all-disabled.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    #[serde(default)]
    pub allow_moments: bool,
    #[serde(default)]
    pub bundles: PackageBundles,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct PackageBundles {
    #[serde(default)]
    pub hourly: PackagePricing,
    #[serde(default)]
    pub daily: PackagePricing,
    #[serde(default)]
    pub weekly: PackagePricing,
    #[serde(default)]
    pub monthly: PackagePricing,
}

/// One purchasable package type as configured by the partner.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct PackagePricing {
    #[serde(default)]
    pub enabled: bool,
    /// Integer COP.
    #[serde(default)]
    pub price: u64,
    /// Partner-advertised spot count, informational only.
    #[serde(default)]
    pub spots: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_pricing_defaults_to_all_disabled() {
        let raw = r#"{
            "id": "scr-1",
            "name": "Pantalla Norte",
            "address": "Cra 7 # 12-34",
            "category": { "name": "Centro Comercial Andino" }
        }"#;
        let screen: Screen = serde_json::from_str(raw).unwrap();
        assert!(!screen.pricing.allow_moments);
        assert!(!screen.pricing.bundles.hourly.enabled);
        assert!(!screen.pricing.bundles.monthly.enabled);
        assert_eq!(screen.coordinates_or_default(), Coordinates { lat: 0.0, lng: 0.0 });
    }

    #[test]
    fn partial_pricing_keeps_defaults_for_the_rest() {
        let raw = r#"{
            "id": "scr-2",
            "name": "Pantalla Sur",
            "address": "Cll 100",
            "category": { "name": "Aeropuerto El Dorado" },
            "pricing": { "bundles": { "daily": { "enabled": true, "price": 180000 } } }
        }"#;
        let screen: Screen = serde_json::from_str(raw).unwrap();
        assert!(screen.pricing.bundles.daily.enabled);
        assert_eq!(screen.pricing.bundles.daily.price, 180_000);
        assert!(!screen.pricing.bundles.hourly.enabled);
        assert!(!screen.pricing.allow_moments);
    }
}
