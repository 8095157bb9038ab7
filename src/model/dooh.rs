// src/model/dooh.rs

use serde::{Deserialize, Serialize};

use crate::model::screen::Coordinates;

/// Venue classification in ad-tech vocabulary, derived from the
/// marketplace category name.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum VenueType {
    Retail,
    Transit,
    Leisure,
    Outdoor,
}

impl VenueType {
    pub fn tag(self) -> &'static str {
        match self {
            VenueType::Retail => "retail",
            VenueType::Transit => "transit",
            VenueType::Leisure => "leisure",
            VenueType::Outdoor => "outdoor",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum VenueSubType {
    Mall,
    Airports,
    SportsEntertainment,
    Hotels,
    CasualDining,
    Billboards,
}

impl VenueSubType {
    pub fn tag(self) -> &'static str {
        match self {
            VenueSubType::Mall => "mall",
            VenueSubType::Airports => "airports",
            VenueSubType::SportsEntertainment => "sports_entertainment",
            VenueSubType::Hotels => "hotels",
            VenueSubType::CasualDining => "casual_dining",
            VenueSubType::Billboards => "billboards",
        }
    }
}

/// OpenOOH taxonomy ids for a classified venue.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OpenOohIds {
    pub parent_id: u32,
    pub child_id: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Landscape,
    Portrait,
}

/// CPM pricing with the marketplace's fixed time modifiers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CpmPricing {
    /// Integer COP per thousand impressions.
    pub base_cpm: u64,
    pub peak_multiplier: f64,
    pub weekday_multiplier: f64,
}

impl CpmPricing {
    pub const PEAK_MULTIPLIER: f64 = 1.5;
    pub const WEEKDAY_MULTIPLIER: f64 = 1.2;

    pub fn new(base_cpm: u64) -> Self {
        Self {
            base_cpm,
            peak_multiplier: Self::PEAK_MULTIPLIER,
            weekday_multiplier: Self::WEEKDAY_MULTIPLIER,
        }
    }

    /// Peak windows are 07:00-09:00 and 17:00-20:00, half-open.
    pub fn is_peak_hour(hour: u32) -> bool {
        matches!(hour, 7..=8 | 17..=19)
    }

    pub fn effective_cpm(&self, hour: u32, weekday: bool) -> f64 {
        let mut cpm = self.base_cpm as f64;
        if Self::is_peak_hour(hour) {
            cpm *= self.peak_multiplier;
        }
        if weekday {
            cpm *= self.weekday_multiplier;
        }
        cpm
    }
}

/// Weekly availability window. The conversion emits a single all-week
/// window spanning the screen's operating hours.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityWindow {
    /// chrono weekday numbering, Monday = 1 .. Sunday = 7.
    pub days: Vec<u8>,
    pub start: String,
    pub end: String,
}

/// Synthetic audience figures. Placeholder data produced by a
/// `MetricsProvider`, not a measurement pipeline.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AudienceMetrics {
    /// Estimated impressions per local hour, 24 entries.
    pub hourly_impressions: Vec<u64>,
    pub demographics: Vec<DemographicShare>,
    /// Seconds-bucketed dwell time distribution, shares sum to ~1.0.
    pub dwell_time: Vec<DwellBucket>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DemographicShare {
    pub segment: String,
    pub share: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DwellBucket {
    pub seconds: u32,
    pub share: f64,
}

/// Read-only projection of a marketplace screen into DOOH vocabulary.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DoohScreen {
    pub screen_id: String,
    pub name: String,
    pub venue_type: VenueType,
    pub venue_sub_type: VenueSubType,
    pub openooh: OpenOohIds,
    pub geo: Coordinates,
    pub width_px: u32,
    pub height_px: u32,
    pub resolution: String,
    pub brightness_nits: u32,
    pub orientation: Orientation,
    pub availability: Vec<AvailabilityWindow>,
    pub pricing: CpmPricing,
    pub audience: AudienceMetrics,
}
