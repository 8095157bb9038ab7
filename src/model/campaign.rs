// src/model/campaign.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::screen::Coordinates;

/// Buyer-supplied purchase details forwarded by the booking flow.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseData {
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub advertiser: Option<String>,
    #[serde(default)]
    pub creative_url: Option<String>,
}

/// Geo-radius targeting around the screen.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeoTargeting {
    pub center: Coordinates,
    pub radius_m: u32,
}

/// Demographic buckets. Fixed marketplace-wide defaults, not buyer input.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DemographicTargeting {
    pub age_ranges: Vec<String>,
    pub genders: Vec<String>,
}

/// Temporal window: which weekdays and which local hours qualify.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TemporalTargeting {
    /// Monday = 1 .. Sunday = 7.
    pub days: Vec<u8>,
    pub hour_start: u32,
    pub hour_end: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Targeting {
    pub geo: GeoTargeting,
    pub demographics: DemographicTargeting,
    pub temporal: TemporalTargeting,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    /// Integer COP, equal to the bundle price.
    pub total_budget: u64,
    /// Per-spot ceiling: total budget spread across the spot count.
    pub max_bid: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub spots_per_hour: u32,
}

/// Campaign intent assembled from a screen and a chosen bundle.
/// Transient: constructed, consumed and discarded within one purchase.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DoohCampaignRequest {
    pub campaign_id: String,
    pub screen_id: String,
    pub bundle_id: String,
    pub targeting: Targeting,
    pub budget: Budget,
    pub schedule: Schedule,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum CampaignStatus {
    Active,
    Rejected,
}

/// One slice of inventory granted to a campaign.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InventoryAllocation {
    pub screen_id: String,
    pub spots: u32,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Final outcome handed back to the booking flow. Informational: the
/// wallet transaction itself lives with the external purchase service.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CampaignResponse {
    pub campaign_id: String,
    pub status: CampaignStatus,
    pub allocations: Vec<InventoryAllocation>,
    pub total_impressions: u32,
    /// ⌊total_spots × 0.8⌋ for locally-owned DOOH inventory.
    pub total_reach: u32,
    /// Integer COP, equal to the bundle price.
    pub total_cost: u64,
    pub currency: String,
    pub winning_price_per_spot: f64,
    pub deal_id: String,
}

/// Billing split for inventory sourced from a third-party SSP.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SspBilling {
    pub currency: String,
    pub gross: f64,
    /// Exchange fee retained from the gross amount.
    pub fee: f64,
    /// Amount owed to the SSP.
    pub net: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SspTracking {
    pub impression_url: String,
    pub click_url: String,
}

/// Synthetic purchase confirmation for SSP-sourced inventory.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SspPurchaseResponse {
    pub purchase_id: String,
    pub ssp: String,
    pub screen_id: String,
    pub bundle_id: String,
    pub status: CampaignStatus,
    pub total_spots: u32,
    /// ⌊total_spots × 0.75⌋ for SSP-sourced inventory.
    pub estimated_reach: u32,
    pub billing: SspBilling,
    pub tracking: SspTracking,
}
