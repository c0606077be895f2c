//! Dashboard, filter-option and public marketplace DTOs.

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::common_dto::CountedOption;
use crate::domain::listing::PageInfo;
use crate::domain::records::{CampaignSummary, PublicCampaign};

/// Trending campaigns.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TrendingCampaigns {
    /// Campaigns with match rates.
    pub campaigns: Vec<CampaignSummary>,
    /// Trend window, e.g. `24h`.
    pub period: String,
}

/// Running campaigns.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LiveCampaigns {
    /// Campaigns with match rates.
    pub campaigns: Vec<CampaignSummary>,
    /// Number of running campaigns platform-wide.
    pub active_count: u32,
}

/// Something the creator should act on.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActionItem {
    /// Item identifier.
    pub id: Uuid,
    /// Action kind, e.g. `DELIVERABLE_SUBMIT`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Short title.
    pub title: String,
    /// Details.
    pub description: String,
    /// `HIGH`, `MEDIUM` or `LOW`.
    pub priority: String,
    /// Due time, if any.
    pub deadline: Option<String>,
    /// Application, deliverable or campaign the item refers to.
    pub related_entity_id: Uuid,
}

/// Pending action items.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ActionItems {
    /// Items, most urgent first.
    pub items: Vec<ActionItem>,
}

/// Platform-wide totals shown on the dashboard.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlatformAnalytics {
    /// Campaigns ever created.
    pub total_campaigns: u32,
    /// Campaigns currently active.
    pub active_campaigns: u32,
    /// Registered creators.
    pub total_creators: u32,
    /// Total budget processed, USD.
    pub total_value_processed: u64,
}

/// Onboarding stage option.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StageOption {
    /// Stage number.
    pub id: u8,
    /// Stage name.
    pub name: String,
}

/// Budget bucket option.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BudgetRange {
    /// Inclusive lower bound.
    pub min: u64,
    /// Exclusive upper bound; `null` for the open-ended bucket.
    pub max: Option<u64>,
    /// Display label.
    pub label: String,
    /// Number of campaigns in the bucket.
    pub count: u32,
}

/// Options for the campaign filter menu.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CampaignOptions {
    /// `FocusArea` options.
    pub focus_areas: Vec<CountedOption>,
    /// `DeliverableType` options.
    pub deliverable_types: Vec<CountedOption>,
    /// `CampaignDuration` options.
    pub durations: Vec<CountedOption>,
    /// Settings onboarding stages.
    pub stages: Vec<StageOption>,
    /// Budget buckets.
    pub budget_ranges: Vec<BudgetRange>,
}

/// Paginated anonymous marketplace listing.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PublicCampaignPage {
    /// Campaigns on this page.
    pub campaigns: Vec<PublicCampaign>,
    /// Pagination metadata.
    pub pagination: PageInfo,
}

/// Public marketplace totals.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceStats {
    /// Campaigns ever created.
    pub total_campaigns: u32,
    /// Campaigns currently active.
    pub active_campaigns: u32,
    /// Registered creators.
    pub total_creators: u32,
    /// Registered projects.
    pub total_projects: u32,
    /// Total budget processed, USD.
    pub total_value_processed: u64,
    /// Mean campaign budget, USD.
    pub average_campaign_budget: u32,
}
