// src/mock_inventory.rs

use axum::{serve, Json, Router};
use axum::routing::get;
use tokio::net::TcpListener;
use tracing::info;

use crate::model::adapters::FixtureScreenSource;
use crate::model::screen::Screen;

/// Serves the fixture inventory with the partner API's shape so the REST
/// source can be exercised without a real backend.
async fn handle_all_screens() -> Json<Vec<Screen>> {
    Json(FixtureScreenSource::new("static/screens.json").load())
}

/// Starts the mock inventory service; route is `/Screens/all`, matching
/// the partner API the REST source points at.
pub async fn start_mock_inventory_server(port: u16) {
    let app = Router::new().route("/Screens/all", get(handle_all_screens));

    let addr = format!("0.0.0.0:{}", port);
    info!("Mock inventory API running at http://{}", addr);

    let listener = TcpListener::bind(&addr).await.unwrap();
    serve(listener, app).await.unwrap();
}
