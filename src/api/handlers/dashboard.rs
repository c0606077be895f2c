//! Creator dashboard and filter-menu handlers.

use axum::Router;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use uuid::Uuid;

use crate::api::dto::{
    ActionItem, ActionItems, BudgetRange, CampaignOptions, CountedOption, LiveCampaigns,
    PlatformAnalytics, StageOption, TrendingCampaigns,
};
use crate::api::envelope::ApiResponse;
use crate::app_state::AppState;
use crate::domain::enums::EnumDomain;

/// Platform-wide campaign count.
pub(crate) const TOTAL_CAMPAIGNS: u32 = 1247;
/// Platform-wide active campaign count.
pub(crate) const ACTIVE_CAMPAIGNS: u32 = 186;
/// Registered creators.
pub(crate) const TOTAL_CREATORS: u32 = 8954;
/// Budget processed to date, USD.
pub(crate) const TOTAL_VALUE_PROCESSED: u64 = 12_450_000;

const RUNNING_CAMPAIGNS: u32 = 28;

/// Campaign counts per `FocusArea` code, in code order.
const FOCUS_AREA_COUNTS: [u32; 9] = [45, 38, 32, 28, 22, 18, 15, 12, 8];
/// Campaign counts per `DeliverableType` code, in code order.
const DELIVERABLE_TYPE_COUNTS: [u32; 8] = [62, 48, 35, 25, 18, 15, 12, 10];
/// Campaign counts per `CampaignDuration` code, in code order.
const DURATION_COUNTS: [u32; 5] = [28, 42, 58, 35, 18];

const SETTINGS_STAGES: [&str; 6] = [
    "Language",
    "Rate Configuration",
    "Notification Preferences",
    "Privacy Controls",
    "Wallet & Payout",
    "Security",
];

const BUDGET_BUCKETS: [(u64, Option<u64>, &str, u32); 5] = [
    (0, Some(1_000), "$0 - $1,000", 45),
    (1_000, Some(5_000), "$1,000 - $5,000", 78),
    (5_000, Some(10_000), "$5,000 - $10,000", 52),
    (10_000, Some(50_000), "$10,000 - $50,000", 28),
    (50_000, None, "$50,000+", 15),
];

/// Pairs every entry of `domain` with its count. Labels always come from the
/// lookup table.
fn counted(domain: EnumDomain, counts: &[u32]) -> Vec<CountedOption> {
    domain
        .entries()
        .zip(counts.iter().copied())
        .map(|((id, name), count)| CountedOption {
            id,
            name: name.to_string(),
            count,
        })
        .collect()
}

/// `GET /api/dashboard/trending`: Trending campaigns.
#[utoipa::path(
    get,
    path = "/api/dashboard/trending",
    tag = "Dashboard",
    summary = "Trending campaigns",
    responses((status = 200, description = "Trending campaigns", body = ApiResponse<TrendingCampaigns>))
)]
pub async fn trending(State(state): State<AppState>) -> impl IntoResponse {
    ApiResponse::ok(TrendingCampaigns {
        campaigns: state.service.trending_campaigns(),
        period: "24h".to_string(),
    })
}

/// `GET /api/dashboard/live`: Running campaigns.
#[utoipa::path(
    get,
    path = "/api/dashboard/live",
    tag = "Dashboard",
    summary = "Live campaigns",
    responses((status = 200, description = "Live campaigns", body = ApiResponse<LiveCampaigns>))
)]
pub async fn live(State(state): State<AppState>) -> impl IntoResponse {
    ApiResponse::ok(LiveCampaigns {
        campaigns: state.service.live_campaigns(),
        active_count: RUNNING_CAMPAIGNS,
    })
}

/// `GET /api/dashboard/action-items`: What the creator should do next.
#[utoipa::path(
    get,
    path = "/api/dashboard/action-items",
    tag = "Dashboard",
    summary = "Action items",
    description = "Each item links to the application, deliverable or campaign it concerns.",
    responses((status = 200, description = "Action items", body = ApiResponse<ActionItems>))
)]
pub async fn action_items(State(state): State<AppState>) -> impl IntoResponse {
    let fixtures = state.service.fixtures();
    let campaign_id = |i: usize| {
        fixtures
            .open_campaigns
            .get(i)
            .map_or_else(Uuid::new_v4, |c| c.campaign_id)
    };
    let application_id = fixtures
        .creator_applications
        .iter()
        .find(|a| a.reviewed_at.is_some())
        .map_or_else(Uuid::new_v4, |a| a.application_id);
    let deliverable_id = fixtures
        .creator_deliverables
        .first()
        .map_or_else(Uuid::new_v4, |d| d.deliverable_id);

    let items = vec![
        ActionItem {
            id: Uuid::new_v4(),
            kind: "DELIVERABLE_SUBMIT".to_string(),
            title: "Submit deliverable for DeFi Campaign".to_string(),
            description: "Content deadline approaching in 2 days".to_string(),
            priority: "HIGH".to_string(),
            deadline: Some("2024-12-12T23:59:59Z".to_string()),
            related_entity_id: campaign_id(0),
        },
        ActionItem {
            id: Uuid::new_v4(),
            kind: "APPLICATION_REVIEW".to_string(),
            title: "Check application status".to_string(),
            description: "Your application has been reviewed".to_string(),
            priority: "MEDIUM".to_string(),
            deadline: None,
            related_entity_id: application_id,
        },
        ActionItem {
            id: Uuid::new_v4(),
            kind: "PAYMENT_PENDING".to_string(),
            title: "Payment verification in progress".to_string(),
            description: "Your deliverable is being verified for payment".to_string(),
            priority: "LOW".to_string(),
            deadline: None,
            related_entity_id: deliverable_id,
        },
    ];
    ApiResponse::ok(ActionItems { items })
}

/// `GET /api/dashboard/analytics`: Platform totals.
#[utoipa::path(
    get,
    path = "/api/dashboard/analytics",
    tag = "Dashboard",
    summary = "Platform analytics",
    responses((status = 200, description = "Platform totals", body = ApiResponse<PlatformAnalytics>))
)]
pub async fn analytics() -> impl IntoResponse {
    ApiResponse::ok(PlatformAnalytics {
        total_campaigns: TOTAL_CAMPAIGNS,
        active_campaigns: ACTIVE_CAMPAIGNS,
        total_creators: TOTAL_CREATORS,
        total_value_processed: TOTAL_VALUE_PROCESSED,
    })
}

/// `GET /api/filters/campaign-options`: Filter menu contents.
#[utoipa::path(
    get,
    path = "/api/filters/campaign-options",
    tag = "Dashboard",
    summary = "Campaign filter options",
    description = "Focus areas, deliverable types and durations are labelled from the enum tables.",
    responses((status = 200, description = "Filter options", body = ApiResponse<CampaignOptions>))
)]
pub async fn campaign_options() -> impl IntoResponse {
    let stages = (1u8..)
        .zip(SETTINGS_STAGES)
        .map(|(id, name)| StageOption {
            id,
            name: name.to_string(),
        })
        .collect();
    let budget_ranges = BUDGET_BUCKETS
        .into_iter()
        .map(|(min, max, label, count)| BudgetRange {
            min,
            max,
            label: label.to_string(),
            count,
        })
        .collect();
    ApiResponse::ok(CampaignOptions {
        focus_areas: counted(EnumDomain::FocusArea, &FOCUS_AREA_COUNTS),
        deliverable_types: counted(EnumDomain::DeliverableType, &DELIVERABLE_TYPE_COUNTS),
        durations: counted(EnumDomain::CampaignDuration, &DURATION_COUNTS),
        stages,
        budget_ranges,
    })
}

/// Dashboard and filter routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/dashboard/trending", get(trending))
        .route("/api/dashboard/live", get(live))
        .route("/api/dashboard/action-items", get(action_items))
        .route("/api/dashboard/analytics", get(analytics))
        .route("/api/filters/campaign-options", get(campaign_options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counted_options_cover_every_code() {
        let options = counted(EnumDomain::FocusArea, &FOCUS_AREA_COUNTS);
        assert_eq!(options.len(), 9);
        assert!(
            options
                .iter()
                .all(|o| EnumDomain::FocusArea.label(i64::from(o.id)) == Ok(o.name.as_str()))
        );
        assert_eq!(
            counted(EnumDomain::DeliverableType, &DELIVERABLE_TYPE_COUNTS).len(),
            8
        );
        assert_eq!(
            counted(EnumDomain::CampaignDuration, &DURATION_COUNTS).len(),
            5
        );
    }
}
