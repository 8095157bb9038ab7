// src/bidding/ssp.rs

use chrono::{DateTime, Utc};
use tracing::error;

use crate::error::ExchangeError;
use crate::model::bundle::Bundle;
use crate::model::campaign::{
    CampaignStatus, PurchaseData, SspBilling, SspPurchaseResponse, SspTracking,
};
use crate::model::screen::Screen;

/// Exchange fee retained from SSP-sourced purchases.
const SSP_FEE_RATE: f64 = 0.15;
/// Reach discount for SSP-sourced inventory, lower than local DOOH.
const SSP_REACH_RATIO: f64 = 0.75;
/// SSP billing is settled in USD at a fixed reference rate.
const COP_PER_USD: f64 = 4_000.0;

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Synthetic purchase for inventory sourced from a third-party SSP.
///
/// Same all-or-nothing contract as the DOOH path: a fully-formed response
/// or the original error, nothing in between.
pub fn process_ssp_purchase(
    screen: &Screen,
    bundle: &Bundle,
    ssp_name: &str,
    purchase: &PurchaseData,
) -> Result<SspPurchaseResponse, ExchangeError> {
    process_ssp_purchase_at(screen, bundle, ssp_name, purchase, Utc::now())
}

/// Clock-injected variant of [`process_ssp_purchase`].
pub fn process_ssp_purchase_at(
    screen: &Screen,
    bundle: &Bundle,
    ssp_name: &str,
    _purchase: &PurchaseData,
    now: DateTime<Utc>,
) -> Result<SspPurchaseResponse, ExchangeError> {
    let total_spots = bundle.frequency.total_spots;
    if total_spots == 0 {
        let err = ExchangeError::EmptyBundle(bundle.id.clone());
        error!(screen_id = %screen.id, ssp = ssp_name, error = %err, "SSP purchase failed");
        return Err(err);
    }

    let ssp_slug = ssp_name.to_lowercase().replace(' ', "-");
    let purchase_id = format!("ssp-{}-{}-{}", ssp_slug, screen.id, now.timestamp_millis());

    let gross = round_cents(bundle.price as f64 / COP_PER_USD);
    let fee = round_cents(gross * SSP_FEE_RATE);

    Ok(SspPurchaseResponse {
        purchase_id: purchase_id.clone(),
        ssp: ssp_name.to_string(),
        screen_id: screen.id.clone(),
        bundle_id: bundle.id.clone(),
        status: CampaignStatus::Active,
        total_spots,
        estimated_reach: (total_spots as f64 * SSP_REACH_RATIO).floor() as u32,
        billing: SspBilling {
            currency: "USD".to_string(),
            gross,
            fee,
            net: round_cents(gross - fee),
        },
        tracking: SspTracking {
            impression_url: format!(
                "http://tk.{}.dooh-exchange.com/impression?purchase={}",
                ssp_slug, purchase_id
            ),
            click_url: format!(
                "http://tk.{}.dooh-exchange.com/click?purchase={}",
                ssp_slug, purchase_id
            ),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::frequency::FrequencyType;
    use crate::pricing::bundles::generate_bundles;

    fn screen() -> Screen {
        serde_json::from_value(serde_json::json!({
            "id": "scr-11",
            "name": "Pantalla LatinAd",
            "address": "Av 68",
            "category": { "name": "Estadio El Campín" },
            "pricing": { "bundles": { "weekly": { "enabled": true, "price": 900000 } } },
        }))
        .unwrap()
    }

    #[test]
    fn billing_splits_fifteen_percent_in_usd() {
        let screen = screen();
        let bundle = generate_bundles(&screen, FrequencyType::default()).weekly[0].clone();

        let response =
            process_ssp_purchase(&screen, &bundle, "LatinAd", &PurchaseData::default()).unwrap();

        assert_eq!(response.billing.currency, "USD");
        assert_eq!(response.billing.gross, 225.0); // 900 000 COP at 4 000 COP/USD
        assert_eq!(response.billing.fee, 33.75);
        assert_eq!(response.billing.net, 191.25);
        assert_eq!(response.total_spots, 4 * 16 * 7);
        assert_eq!(response.estimated_reach, (448.0_f64 * 0.75).floor() as u32);
    }

    #[test]
    fn tracking_urls_carry_the_ssp_slug() {
        let screen = screen();
        let bundle = generate_bundles(&screen, FrequencyType::default()).weekly[0].clone();

        let response =
            process_ssp_purchase(&screen, &bundle, "Broadsign Reach", &PurchaseData::default())
                .unwrap();
        assert!(response.tracking.impression_url.contains("tk.broadsign-reach.dooh-exchange.com"));
        assert!(response.tracking.impression_url.contains(&response.purchase_id));
        assert!(response.tracking.click_url.contains("/click?"));
    }

    #[test]
    fn zero_spot_bundle_is_rejected_unchanged() {
        let screen = screen();
        let mut bundle = generate_bundles(&screen, FrequencyType::default()).weekly[0].clone();
        bundle.frequency.total_spots = 0;

        let err = process_ssp_purchase(&screen, &bundle, "LatinAd", &PurchaseData::default())
            .unwrap_err();
        assert!(matches!(err, ExchangeError::EmptyBundle(_)));
    }
}
