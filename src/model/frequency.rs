// src/model/frequency.rs

use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;

/// Display frequency of an ad inside a screen's playout loop.
///
/// Closed set: every tier maps to a fixed number of spots per hour, and the
/// tiers form a ladder ordered from densest (`OneMin`) to sparsest
/// (`OneHour`).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub enum FrequencyType {
    OneMin,
    TwoMin,
    FiveMin,
    TenMin,
    FifteenMin,
    ThirtyMin,
    OneHour,
}

impl FrequencyType {
    pub const ALL: [FrequencyType; 7] = [
        FrequencyType::OneMin,
        FrequencyType::TwoMin,
        FrequencyType::FiveMin,
        FrequencyType::TenMin,
        FrequencyType::FifteenMin,
        FrequencyType::ThirtyMin,
        FrequencyType::OneHour,
    ];

    /// Spots aired per operating hour at this tier.
    pub fn spots_per_hour(self) -> u32 {
        match self {
            FrequencyType::OneMin => 60,
            FrequencyType::TwoMin => 30,
            FrequencyType::FiveMin => 12,
            FrequencyType::TenMin => 6,
            FrequencyType::FifteenMin => 4,
            FrequencyType::ThirtyMin => 2,
            FrequencyType::OneHour => 1,
        }
    }

    /// Wire/config tag, e.g. "15min".
    pub fn tag(self) -> &'static str {
        match self {
            FrequencyType::OneMin => "1min",
            FrequencyType::TwoMin => "2min",
            FrequencyType::FiveMin => "5min",
            FrequencyType::TenMin => "10min",
            FrequencyType::FifteenMin => "15min",
            FrequencyType::ThirtyMin => "30min",
            FrequencyType::OneHour => "1hour",
        }
    }

    /// Human label shown next to a bundle.
    pub fn display_text(self) -> &'static str {
        match self {
            FrequencyType::OneMin => "Cada minuto",
            FrequencyType::TwoMin => "Cada 2 minutos",
            FrequencyType::FiveMin => "Cada 5 minutos",
            FrequencyType::TenMin => "Cada 10 minutos",
            FrequencyType::FifteenMin => "Cada 15 minutos",
            FrequencyType::ThirtyMin => "Cada 30 minutos",
            FrequencyType::OneHour => "Cada hora",
        }
    }

    /// Next denser tier on the ladder, saturating at `OneMin`.
    /// Used for the intensive/weekend bundle variants.
    pub fn denser(self) -> FrequencyType {
        match self {
            FrequencyType::OneMin | FrequencyType::TwoMin => FrequencyType::OneMin,
            FrequencyType::FiveMin => FrequencyType::TwoMin,
            FrequencyType::TenMin => FrequencyType::FiveMin,
            FrequencyType::FifteenMin => FrequencyType::TenMin,
            FrequencyType::ThirtyMin => FrequencyType::FifteenMin,
            FrequencyType::OneHour => FrequencyType::ThirtyMin,
        }
    }
}

impl Default for FrequencyType {
    /// Stand-in for absent partner configuration.
    fn default() -> Self {
        FrequencyType::FifteenMin
    }
}

impl fmt::Display for FrequencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl TryFrom<String> for FrequencyType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        FrequencyType::ALL
            .into_iter()
            .find(|ft| ft.tag() == value)
            .ok_or_else(|| format!("Invalid frequency tag: {}", value))
    }
}

impl From<FrequencyType> for String {
    fn from(ft: FrequencyType) -> Self {
        ft.tag().to_string()
    }
}
