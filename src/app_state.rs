//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::MarketplaceService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Fixture lookups, calculators and the seeded random source.
    pub service: Arc<MarketplaceService>,
}

impl AppState {
    /// Wraps `service` for sharing across handlers.
    #[must_use]
    pub fn new(service: MarketplaceService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}
