// src/main.rs

use axum::{serve, Router};
use axum::routing::{get, post};
use clap::Parser;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};
use tracing_appender::rolling;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

mod api;
mod bidding;
mod config;
mod dooh;
mod error;
mod logging;
mod mock_inventory;
mod model;
mod openrtb;
mod pricing;

use config::ConfigManager;
use dooh::metrics::{MetricsProvider, SyntheticMetrics};
use logging::audit::AuditLogger;
use model::adapters::{FixtureScreenSource, RestScreenSource};
use model::screen::Screen;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ConfigManager>,
    pub screens: Arc<Vec<Screen>>,
    pub audit: Arc<AuditLogger>,
    pub metrics: Arc<dyn MetricsProvider>,
}

#[derive(Parser, Debug)]
#[command(version = "1.0", about = "A programmatic DOOH inventory and bundle pricing service")]
struct CliArgs {
    #[arg(short, long, default_value_t = 8080)]
    port: u16,
    #[arg(long, default_value = "logs")]
    log_dir: String,
    /// Partner inventory API base URL; fixtures are used when absent.
    #[arg(long)]
    inventory_api: Option<String>,
    /// Marketplace-wide display frequency until partner settings exist.
    #[arg(long, default_value = "15min")]
    frequency: String,
    /// Spawn the in-process mock inventory API on port 9001.
    #[arg(long, default_value_t = false)]
    mock_inventory: bool,
}

#[tokio::main]
async fn main() {
    // Marketplace operates on Colombian local time.
    std::env::set_var("TZ", "America/Bogota");

    let args = CliArgs::parse();

    let mock_server = if args.mock_inventory {
        Some(tokio::spawn(async {
            mock_inventory::start_mock_inventory_server(9001).await;
        }))
    } else {
        None
    };

    let log_file = rolling::hourly(&args.log_dir, "dooh_exchange.json");
    let (non_blocking, _guard) = tracing_appender::non_blocking(log_file);
    let subscriber = Registry::default()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().json().with_writer(non_blocking));
    tracing::subscriber::set_global_default(subscriber)
        .expect("Unable to set global tracing subscriber");
    info!("DOOH exchange starting on port {}", args.port);

    let config = Arc::new(
        ConfigManager::from_args(&args.frequency, args.inventory_api.as_deref())
            .expect("Invalid --frequency value"),
    );

    let screens = load_inventory(&config).await;
    info!("Loaded {} screens", screens.len());

    let audit = AuditLogger::new(&args.log_dir, 1000, 100, 1000);

    let state = Arc::new(AppState {
        config: config.clone(),
        screens: Arc::new(screens),
        audit: audit.clone(),
        metrics: Arc::new(SyntheticMetrics),
    });

    let exchange_server = tokio::spawn({
        let state = state.clone();
        let port = args.port;
        async move {
            let app = Router::new()
                .route("/screens", get(api::handlers::list_screens))
                .route("/screens/{id}/bundles", get(api::handlers::screen_bundles))
                .route("/purchase/dooh", post(api::handlers::purchase_dooh))
                .route("/purchase/ssp", post(api::handlers::purchase_ssp))
                .with_state(state);
            let addr = format!("0.0.0.0:{}", port);
            info!("DOOH exchange running at http://{}", addr);
            let listener = TcpListener::bind(&addr).await.unwrap();
            serve(listener, app).await.unwrap();
        }
    });

    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down gracefully...");
        }
    }

    audit.shutdown().await;
    exchange_server.abort();
    if let Some(mock) = mock_server {
        mock.abort();
    }
    info!("DOOH exchange shut down.");
}

/// Resolves the screen inventory: the configured REST API when reachable,
/// bundled fixtures otherwise.
async fn load_inventory(config: &ConfigManager) -> Vec<Screen> {
    if let Some(base_url) = &config.inventory_api {
        match RestScreenSource::new(base_url).fetch_all().await {
            Ok(screens) => return screens,
            Err(e) => {
                warn!(error = %e, "inventory API unavailable, falling back to fixtures");
            }
        }
    }
    FixtureScreenSource::new("static/screens.json").load()
}
