// src/bidding/validator.rs

use crate::model::campaign::DoohCampaignRequest;
use crate::openrtb::request::BidRequest;

/// One non-fatal rule violation. Violations are logged by the caller and
/// never abort a purchase.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationWarning {
    pub rule: &'static str,
    pub detail: String,
}

impl ValidationWarning {
    fn new(rule: &'static str, detail: impl Into<String>) -> Self {
        Self {
            rule,
            detail: detail.into(),
        }
    }
}

/// Checks a constructed bid request plus its campaign intent against the
/// marketplace rule set. Returns every violation found; an empty vec means
/// the request is clean.
pub fn validate_purchase(
    request: &BidRequest,
    campaign: &DoohCampaignRequest,
) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    validate_bid_request(request, &mut warnings);
    validate_campaign(campaign, &mut warnings);
    warnings
}

fn validate_bid_request(request: &BidRequest, warnings: &mut Vec<ValidationWarning>) {
    if request.imp.is_empty() {
        warnings.push(ValidationWarning::new("imp-present", "request has no impressions"));
    }

    if request.dooh.venuetype.is_empty() {
        warnings.push(ValidationWarning::new("venue-ids", "dooh object has no venue ids"));
    }

    for imp in &request.imp {
        match imp.bidfloor {
            Some(floor) if floor > 0.0 => {}
            other => warnings.push(ValidationWarning::new(
                "floor-positive",
                format!("imp {} has non-positive bid floor {:?}", imp.id, other),
            )),
        }

        let deals = imp.pmp.as_ref().map(|pmp| pmp.deals.as_slice()).unwrap_or(&[]);
        if deals.is_empty() {
            warnings.push(ValidationWarning::new(
                "deal-present",
                format!("imp {} carries no guaranteed deal", imp.id),
            ));
        }
        for deal in deals {
            if deal.guar != Some(1) {
                warnings.push(ValidationWarning::new(
                    "deal-guaranteed",
                    format!("deal {} is not flagged guaranteed", deal.id),
                ));
            }
        }

        if let Some(floors) = imp.video.as_ref().and_then(|v| v.durfloors.as_ref()) {
            for floor in floors {
                if floor.mindur >= floor.maxdur {
                    warnings.push(ValidationWarning::new(
                        "durfloor-window",
                        format!("imp {} duration band {}-{}s is empty", imp.id, floor.mindur, floor.maxdur),
                    ));
                }
            }
            for pair in floors.windows(2) {
                if pair[1].bidfloor < pair[0].bidfloor {
                    warnings.push(ValidationWarning::new(
                        "durfloor-monotonic",
                        format!("imp {} duration floors decrease with duration", imp.id),
                    ));
                }
            }
        }
    }
}

fn validate_campaign(campaign: &DoohCampaignRequest, warnings: &mut Vec<ValidationWarning>) {
    let center = &campaign.targeting.geo.center;
    if !(-90.0..=90.0).contains(&center.lat) || !(-180.0..=180.0).contains(&center.lng) {
        warnings.push(ValidationWarning::new(
            "geo-range",
            format!("coordinates out of range: ({}, {})", center.lat, center.lng),
        ));
    }

    if campaign.schedule.end <= campaign.schedule.start {
        warnings.push(ValidationWarning::new(
            "schedule-window",
            "schedule ends before it starts".to_string(),
        ));
    }

    if campaign.budget.total_budget == 0 {
        warnings.push(ValidationWarning::new("budget-positive", "zero total budget"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bidding::mapper::{build_campaign_request, create_programmatic_bid_request};
    use crate::model::frequency::FrequencyType;
    use crate::model::screen::Screen;
    use crate::pricing::bundles::generate_bundles;
    use chrono::Utc;

    fn screen() -> Screen {
        serde_json::from_value(serde_json::json!({
            "id": "scr-7",
            "name": "Pantalla",
            "address": "Cll 26",
            "coordinates": { "lat": 4.70, "lng": -74.14 },
            "category": { "name": "Aeropuerto El Dorado" },
            "pricing": { "bundles": { "hourly": { "enabled": true, "price": 60000 } } },
        }))
        .unwrap()
    }

    #[test]
    fn well_formed_purchase_is_clean() {
        let screen = screen();
        let bundle = generate_bundles(&screen, FrequencyType::default()).hourly[0].clone();
        let request = create_programmatic_bid_request(&screen, &bundle);
        let campaign = build_campaign_request(&screen, &bundle, Utc::now());
        assert!(validate_purchase(&request, &campaign).is_empty());
    }

    #[test]
    fn bad_coordinates_warn_but_do_not_fail() {
        let mut screen = screen();
        screen.coordinates = Some(crate::model::screen::Coordinates { lat: 240.0, lng: 0.0 });
        let bundle = generate_bundles(&screen, FrequencyType::default()).hourly[0].clone();
        let request = create_programmatic_bid_request(&screen, &bundle);
        let campaign = build_campaign_request(&screen, &bundle, Utc::now());

        let warnings = validate_purchase(&request, &campaign);
        assert!(warnings.iter().any(|w| w.rule == "geo-range"));
    }

    #[test]
    fn missing_deal_and_floor_warn() {
        let screen = screen();
        let bundle = generate_bundles(&screen, FrequencyType::default()).hourly[0].clone();
        let mut request = create_programmatic_bid_request(&screen, &bundle);
        request.imp[0].pmp = None;
        request.imp[0].bidfloor = Some(0.0);
        let campaign = build_campaign_request(&screen, &bundle, Utc::now());

        let warnings = validate_purchase(&request, &campaign);
        let rules: Vec<_> = warnings.iter().map(|w| w.rule).collect();
        assert!(rules.contains(&"deal-present"));
        assert!(rules.contains(&"floor-positive"));
    }
}
