// src/bidding/mapper.rs

use chrono::{DateTime, Duration, Utc};
use tracing::{error, warn};
use uuid::Uuid;

use crate::bidding::validator;
use crate::dooh::convert::convert_screen_to_dooh;
use crate::dooh::metrics::MetricsProvider;
use crate::dooh::taxonomy;
use crate::error::ExchangeError;
use crate::model::bundle::Bundle;
use crate::model::campaign::{
    Budget, CampaignResponse, CampaignStatus, DemographicTargeting, DoohCampaignRequest,
    GeoTargeting, InventoryAllocation, PurchaseData, Schedule, Targeting, TemporalTargeting,
};
use crate::model::frequency::FrequencyType;
use crate::model::screen::Screen;
use crate::openrtb::request::{BidRequest, Deal, Dooh, DurationFloor, Imp, Pmp, Video};
use crate::openrtb::response::{Bid, BidResponse, SeatBid};

/// Targeting radius around the screen, meters.
const GEO_RADIUS_M: u32 = 1_000;
/// Fixed marketplace-wide demographic buckets.
const AGE_RANGES: [&str; 4] = ["18-24", "25-34", "35-44", "45-54"];
const GENDERS: [&str; 2] = ["male", "female"];

/// Campaign window length from the purchase instant.
const CAMPAIGN_WINDOW_HOURS: i64 = 24;

/// Minimum CPM per second of creative duration on the guaranteed deal.
const DEAL_MIN_CPM_PER_SEC: f64 = 2.0;
/// Reach discount applied to locally-owned DOOH inventory.
const DOOH_REACH_RATIO: f64 = 0.8;

const CURRENCY: &str = "COP";
/// Content categories blocked marketplace-wide, IAB Content Taxonomy 2.x.
const BLOCKED_CATEGORIES: [&str; 2] = ["IAB25", "IAB26"];
const CONTENT_TAXONOMY_VERSION: u32 = 2;
/// OpenOOH venue taxonomy version tag.
const VENUE_TAXONOMY_VERSION: u32 = 1;

const AD_MARKUP_STUB: &str =
    "<div class=\"dooh-creative\"><video autoplay muted loop src=\"creative.mp4\"></video></div>";

/// Assembles the campaign intent for a screen/bundle pair at `now`.
pub fn build_campaign_request(
    screen: &Screen,
    bundle: &Bundle,
    now: DateTime<Utc>,
) -> DoohCampaignRequest {
    DoohCampaignRequest {
        campaign_id: campaign_id(screen, now),
        screen_id: screen.id.clone(),
        bundle_id: bundle.id.clone(),
        targeting: Targeting {
            geo: GeoTargeting {
                center: screen.coordinates_or_default(),
                radius_m: GEO_RADIUS_M,
            },
            demographics: DemographicTargeting {
                age_ranges: AGE_RANGES.iter().map(|s| s.to_string()).collect(),
                genders: GENDERS.iter().map(|s| s.to_string()).collect(),
            },
            temporal: TemporalTargeting {
                days: vec![1, 2, 3, 4, 5, 6, 7],
                hour_start: 0,
                hour_end: 23,
            },
        },
        budget: Budget {
            total_budget: bundle.price,
            max_bid: bundle.price_per_spot(),
        },
        schedule: Schedule {
            start: now,
            end: now + Duration::hours(CAMPAIGN_WINDOW_HOURS),
            spots_per_hour: bundle.frequency.spots_per_hour,
        },
    }
}

fn campaign_id(screen: &Screen, now: DateTime<Utc>) -> String {
    format!("purchase-{}-{}", screen.id, now.timestamp_millis())
}

/// Spot-duration window in seconds for a frequency tier: the one-minute
/// loop only fits short spots, everything else allows up to 5 minutes.
fn spot_duration_bounds(kind: FrequencyType) -> (u32, u32) {
    match kind {
        FrequencyType::OneMin => (5, 60),
        _ => (10, 300),
    }
}

/// Duration-floor table: three ascending bands across the spot window,
/// each floored at the bundle's per-spot price.
pub fn duration_floors(kind: FrequencyType, price_per_spot: f64) -> Vec<DurationFloor> {
    let (min, max) = spot_duration_bounds(kind);
    let first = min + (max - min) / 4;
    let second = min + (max - min) / 2;
    [(min, first), (first, second), (second, max)]
        .into_iter()
        .map(|(mindur, maxdur)| DurationFloor {
            mindur,
            maxdur,
            bidfloor: price_per_spot,
        })
        .collect()
}

/// Builds the OpenRTB bid request for a screen/bundle pair: venue ids from
/// the OpenOOH table, one impression slot carrying the duration-floor
/// table and a single guaranteed deal priced per spot.
pub fn create_programmatic_bid_request(screen: &Screen, bundle: &Bundle) -> BidRequest {
    let (venue_type, venue_sub_type) = taxonomy::classify(screen);
    let openooh = taxonomy::openooh_ids(venue_type, venue_sub_type);
    let per_spot = bundle.price_per_spot();
    let (minduration, maxduration) = spot_duration_bounds(bundle.frequency.kind);

    let deal = Deal {
        id: format!("deal-{}-{}", screen.id, bundle.id),
        bidfloor: Some(per_spot),
        bidfloorcur: Some(CURRENCY.to_string()),
        at: Some(3),
        guar: Some(1),
        mincpmpersec: Some(DEAL_MIN_CPM_PER_SEC),
    };

    let imp = Imp {
        id: "1".to_string(),
        tagid: Some(screen.id.clone()),
        bidfloor: Some(per_spot),
        bidfloorcur: Some(CURRENCY.to_string()),
        video: Some(Video {
            mimes: vec!["video/mp4".to_string(), "image/jpeg".to_string()],
            minduration: Some(minduration),
            maxduration: Some(maxduration),
            w: Some(screen.specs.width_px),
            h: Some(screen.specs.height_px),
            durfloors: Some(duration_floors(bundle.frequency.kind, per_spot)),
        }),
        pmp: Some(Pmp {
            private_auction: Some(1),
            deals: vec![deal],
        }),
    };

    BidRequest {
        id: Uuid::new_v4().to_string(),
        imp: vec![imp],
        dooh: Dooh {
            id: screen.id.clone(),
            name: Some(screen.name.clone()),
            venuetype: vec![openooh.parent_id, openooh.child_id],
            venuetypetax: Some(VENUE_TAXONOMY_VERSION),
        },
        at: Some(3),
        tmax: Some(250),
        cur: Some(vec![CURRENCY.to_string()]),
        bcat: Some(BLOCKED_CATEGORIES.iter().map(|s| s.to_string()).collect()),
        cattax: Some(CONTENT_TAXONOMY_VERSION),
        test: None,
    }
}

/// Simulates the winning side of the guaranteed deal: one seat, one bid
/// at the per-spot price, markup stub attached.
pub fn simulate_award(request: &BidRequest, bundle: &Bundle, advertiser: Option<&str>) -> BidResponse {
    let bids = request
        .imp
        .iter()
        .map(|imp| Bid {
            id: Uuid::new_v4().to_string(),
            impid: imp.id.clone(),
            price: bundle.price_per_spot(),
            adm: Some(AD_MARKUP_STUB.to_string()),
            dealid: imp
                .pmp
                .as_ref()
                .and_then(|pmp| pmp.deals.first())
                .map(|deal| deal.id.clone()),
            adomain: advertiser.map(|a| vec![a.to_string()]),
            crid: None,
        })
        .collect();

    BidResponse {
        id: request.id.clone(),
        seatbid: vec![SeatBid {
            bid: bids,
            seat: Some("dooh-exchange".to_string()),
            group: Some(0),
        }],
        bidid: Some(Uuid::new_v4().to_string()),
        cur: Some(CURRENCY.to_string()),
        nbr: None,
    }
}

/// Runs the full purchase mapping at the current instant.
///
/// All-or-nothing: either a fully-formed `CampaignResponse` or the
/// original error, logged and propagated unchanged. No retries, no
/// partial state.
pub fn process_dooh_purchase(
    screen: &Screen,
    bundle: &Bundle,
    purchase: &PurchaseData,
    metrics: &dyn MetricsProvider,
) -> Result<CampaignResponse, ExchangeError> {
    process_dooh_purchase_at(screen, bundle, purchase, metrics, Utc::now())
}

/// Clock-injected variant of [`process_dooh_purchase`].
pub fn process_dooh_purchase_at(
    screen: &Screen,
    bundle: &Bundle,
    purchase: &PurchaseData,
    metrics: &dyn MetricsProvider,
    now: DateTime<Utc>,
) -> Result<CampaignResponse, ExchangeError> {
    let result = assemble_campaign(screen, bundle, purchase, metrics, now);
    if let Err(ref e) = result {
        error!(screen_id = %screen.id, bundle_id = %bundle.id, error = %e,
            "DOOH purchase mapping failed");
    }
    result
}

fn assemble_campaign(
    screen: &Screen,
    bundle: &Bundle,
    purchase: &PurchaseData,
    metrics: &dyn MetricsProvider,
    now: DateTime<Utc>,
) -> Result<CampaignResponse, ExchangeError> {
    let total_spots = bundle.frequency.total_spots;
    if total_spots == 0 {
        return Err(ExchangeError::EmptyBundle(bundle.id.clone()));
    }

    let dooh_screen = convert_screen_to_dooh(screen, metrics);
    let campaign = build_campaign_request(screen, bundle, now);
    let bid_request = create_programmatic_bid_request(screen, bundle);

    let warnings = validator::validate_purchase(&bid_request, &campaign);
    for w in &warnings {
        warn!(rule = w.rule, detail = %w.detail, request_id = %bid_request.id,
            "bid request validation warning");
    }

    let bid_response = simulate_award(&bid_request, bundle, purchase.advertiser.as_deref());
    let winning_bid = bid_response
        .seatbid
        .first()
        .and_then(|sb| sb.bid.first())
        .ok_or_else(|| ExchangeError::EmptyBundle(bundle.id.clone()))?;

    tracing::info!(
        campaign_id = %campaign.campaign_id,
        screen_id = %screen.id,
        venue = dooh_screen.venue_type.tag(),
        spots = total_spots,
        warnings = warnings.len(),
        "DOOH campaign assembled"
    );

    Ok(CampaignResponse {
        campaign_id: campaign.campaign_id,
        status: CampaignStatus::Active,
        allocations: vec![InventoryAllocation {
            screen_id: screen.id.clone(),
            spots: total_spots,
            start: campaign.schedule.start,
            end: campaign.schedule.end,
        }],
        total_impressions: total_spots,
        total_reach: (total_spots as f64 * DOOH_REACH_RATIO).floor() as u32,
        total_cost: bundle.price,
        currency: CURRENCY.to_string(),
        winning_price_per_spot: winning_bid.price,
        deal_id: winning_bid
            .dealid
            .clone()
            .unwrap_or_else(|| format!("deal-{}-{}", screen.id, bundle.id)),
    })
}
