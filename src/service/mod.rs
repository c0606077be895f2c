//! Service layer: business logic orchestration.
//!
//! [`MarketplaceService`] resolves fixture lookups, applies listing filters,
//! computes match rates and fee quotes, and drives the seeded random source
//! behind the generated time series.

pub mod marketplace_service;

pub use marketplace_service::{
    ApplicationDraft, ApplicationFilter, DeliverableDraft, MarketplaceService, ReviewOutcome,
};
