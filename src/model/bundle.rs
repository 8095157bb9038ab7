// src/model/bundle.rs

use serde::{Deserialize, Serialize};

use crate::model::frequency::FrequencyType;

/// Booking mode a bundle belongs to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AdMode {
    Momentos,
    Hourly,
    Daily,
    Weekly,
    Monthly,
}

impl AdMode {
    pub const ALL: [AdMode; 5] = [
        AdMode::Momentos,
        AdMode::Hourly,
        AdMode::Daily,
        AdMode::Weekly,
        AdMode::Monthly,
    ];
}

/// Frequency terms of a bundle: the tier plus the spot count it resolves
/// to over the bundle's duration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BundleFrequency {
    pub kind: FrequencyType,
    pub display_text: String,
    pub spots_per_hour: u32,
    pub total_spots: u32,
}

impl BundleFrequency {
    pub fn new(kind: FrequencyType, total_spots: u32) -> Self {
        Self {
            kind,
            display_text: kind.display_text().to_string(),
            spots_per_hour: kind.spots_per_hour(),
            total_spots,
        }
    }
}

/// A purchasable offer derived from a screen's package pricing. Computed
/// fresh per request, never persisted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    /// Stable within its mode, e.g. "daily-standard".
    pub id: String,
    pub name: String,
    pub description: String,
    /// Human duration label, e.g. "1 día".
    pub duration: String,
    /// Integer COP.
    pub price: u64,
    pub frequency: BundleFrequency,
    /// Exactly one bundle per populated mode carries the highlight.
    pub is_highlighted: bool,
}

impl Bundle {
    /// Per-spot price in COP, the floor unit for the programmatic path.
    pub fn price_per_spot(&self) -> f64 {
        self.price as f64 / self.frequency.total_spots as f64
    }
}

/// Bundle catalogue per booking mode, the generator's output.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct BundleCatalog {
    pub momentos: Vec<Bundle>,
    pub hourly: Vec<Bundle>,
    pub daily: Vec<Bundle>,
    pub weekly: Vec<Bundle>,
    pub monthly: Vec<Bundle>,
}

impl BundleCatalog {
    pub fn for_mode(&self, mode: AdMode) -> &[Bundle] {
        match mode {
            AdMode::Momentos => &self.momentos,
            AdMode::Hourly => &self.hourly,
            AdMode::Daily => &self.daily,
            AdMode::Weekly => &self.weekly,
            AdMode::Monthly => &self.monthly,
        }
    }

    /// Look a bundle up by id across all modes.
    pub fn find(&self, bundle_id: &str) -> Option<&Bundle> {
        AdMode::ALL
            .into_iter()
            .flat_map(|mode| self.for_mode(mode).iter())
            .find(|b| b.id == bundle_id)
    }
}
