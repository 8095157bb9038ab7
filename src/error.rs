// src/error.rs

/// Errors surfaced by the purchase path. Input-shape defects (missing
/// pricing, missing coordinates) are defaulted upstream and never reach
/// this type; construction failures propagate through it unchanged.
#[derive(Debug, thiserror::Error)]
pub enum ExchangeError {
    #[error("Screen not found: {0}")]
    ScreenNotFound(String),

    #[error("Bundle not found: {bundle_id} on screen {screen_id}")]
    BundleNotFound {
        screen_id: String,
        bundle_id: String,
    },

    #[error("Bundle {0} resolves to zero spots")]
    EmptyBundle(String),

    #[error("Inventory source error: {0}")]
    InventorySource(String),
}
