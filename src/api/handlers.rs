// src/api/handlers.rs

use axum::{extract::Path, extract::State, http::StatusCode, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::bidding::mapper::process_dooh_purchase;
use crate::bidding::ssp::process_ssp_purchase;
use crate::error::ExchangeError;
use crate::logging::audit::PurchaseAudit;
use crate::model::bundle::Bundle;
use crate::model::campaign::PurchaseData;
use crate::model::screen::Screen;
use crate::pricing::bundles::generate_bundles;
use crate::AppState;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DoohPurchaseBody {
    pub screen_id: String,
    pub bundle_id: String,
    #[serde(flatten)]
    pub purchase: PurchaseData,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SspPurchaseBody {
    pub screen_id: String,
    pub bundle_id: String,
    pub ssp: String,
    #[serde(flatten)]
    pub purchase: PurchaseData,
}

fn error_body(error: &ExchangeError) -> Json<Value> {
    Json(json!({ "error": error.to_string() }))
}

fn lookup<'a>(
    state: &'a AppState,
    screen_id: &str,
    bundle_id: &str,
) -> Result<(&'a Screen, Bundle), ExchangeError> {
    let screen = state
        .screens
        .iter()
        .find(|s| s.id == screen_id)
        .ok_or_else(|| ExchangeError::ScreenNotFound(screen_id.to_string()))?;
    let bundle = generate_bundles(screen, state.config.frequency)
        .find(bundle_id)
        .cloned()
        .ok_or_else(|| ExchangeError::BundleNotFound {
            screen_id: screen_id.to_string(),
            bundle_id: bundle_id.to_string(),
        })?;
    Ok((screen, bundle))
}

/// `GET /screens` — current inventory.
pub async fn list_screens(State(state): State<Arc<AppState>>) -> Json<Vec<Screen>> {
    Json(state.screens.as_ref().clone())
}

/// `GET /screens/{id}/bundles` — bundle catalogue at the configured
/// frequency.
pub async fn screen_bundles(
    State(state): State<Arc<AppState>>,
    Path(screen_id): Path<String>,
) -> (StatusCode, Json<Value>) {
    match state.screens.iter().find(|s| s.id == screen_id) {
        Some(screen) => {
            let catalog = generate_bundles(screen, state.config.frequency);
            (StatusCode::OK, Json(json!(catalog)))
        }
        None => {
            let err = ExchangeError::ScreenNotFound(screen_id);
            (StatusCode::NOT_FOUND, error_body(&err))
        }
    }
}

/// `POST /purchase/dooh` — map a bundle purchase into a programmatic
/// campaign response.
pub async fn purchase_dooh(
    State(state): State<Arc<AppState>>,
    Json(body): Json<DoohPurchaseBody>,
) -> (StatusCode, Json<Value>) {
    let (screen, bundle) = match lookup(&state, &body.screen_id, &body.bundle_id) {
        Ok(found) => found,
        Err(err) => return (StatusCode::NOT_FOUND, error_body(&err)),
    };

    match process_dooh_purchase(screen, &bundle, &body.purchase, state.metrics.as_ref()) {
        Ok(response) => {
            let audit =
                PurchaseAudit::new("dooh", &response.campaign_id, &screen.id, &bundle.id)
                    .settled(response.total_cost as f64, &response.currency);
            state.audit.record(audit).await;
            (StatusCode::OK, Json(json!(response)))
        }
        Err(err) => {
            let audit = PurchaseAudit::new("dooh", "-", &screen.id, &bundle.id);
            state.audit.record(audit).await;
            (StatusCode::INTERNAL_SERVER_ERROR, error_body(&err))
        }
    }
}

/// `POST /purchase/ssp` — synthetic purchase against third-party SSP
/// inventory.
pub async fn purchase_ssp(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SspPurchaseBody>,
) -> (StatusCode, Json<Value>) {
    let (screen, bundle) = match lookup(&state, &body.screen_id, &body.bundle_id) {
        Ok(found) => found,
        Err(err) => return (StatusCode::NOT_FOUND, error_body(&err)),
    };

    match process_ssp_purchase(screen, &bundle, &body.ssp, &body.purchase) {
        Ok(response) => {
            let audit = PurchaseAudit::new("ssp", &response.purchase_id, &screen.id, &bundle.id)
                .settled(response.billing.gross, &response.billing.currency);
            state.audit.record(audit).await;
            (StatusCode::OK, Json(json!(response)))
        }
        Err(err) => {
            let audit = PurchaseAudit::new("ssp", "-", &screen.id, &bundle.id);
            state.audit.record(audit).await;
            (StatusCode::INTERNAL_SERVER_ERROR, error_body(&err))
        }
    }
}
