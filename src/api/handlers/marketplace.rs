//! Anonymous marketplace handlers.

use axum::Router;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;

use super::dashboard::{ACTIVE_CAMPAIGNS, TOTAL_CAMPAIGNS, TOTAL_CREATORS, TOTAL_VALUE_PROCESSED};
use crate::api::dto::{ListQuery, MarketplaceStats, PublicCampaignPage};
use crate::api::envelope::ApiResponse;
use crate::api::extract::ApiQuery;
use crate::app_state::AppState;

/// `GET /api/public/marketplace/campaigns`: Public campaign listing.
#[utoipa::path(
    get,
    path = "/api/public/marketplace/campaigns",
    tag = "Marketplace",
    summary = "Browse public campaigns",
    description = "Same filters and pagination as the creator listing, without match rates or project details.",
    params(ListQuery),
    responses((status = 200, description = "Campaign page", body = ApiResponse<PublicCampaignPage>))
)]
pub async fn public_campaigns(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListQuery>,
) -> impl IntoResponse {
    let page = state
        .service
        .public_campaigns(&query.filter(), query.page_request());
    ApiResponse::ok(PublicCampaignPage {
        campaigns: page.items,
        pagination: page.info,
    })
}

/// `GET /api/public/marketplace/stats`: Public totals.
#[utoipa::path(
    get,
    path = "/api/public/marketplace/stats",
    tag = "Marketplace",
    summary = "Marketplace statistics",
    responses((status = 200, description = "Marketplace totals", body = ApiResponse<MarketplaceStats>))
)]
pub async fn stats() -> impl IntoResponse {
    ApiResponse::ok(MarketplaceStats {
        total_campaigns: TOTAL_CAMPAIGNS,
        active_campaigns: ACTIVE_CAMPAIGNS,
        total_creators: TOTAL_CREATORS,
        total_projects: 542,
        total_value_processed: TOTAL_VALUE_PROCESSED,
        average_campaign_budget: 4520,
    })
}

/// Public marketplace routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/public/marketplace/campaigns", get(public_campaigns))
        .route("/api/public/marketplace/stats", get(stats))
}
