//! Project handlers: dashboard, fee quotes, application review,
//! deliverable review, creator discovery and analytics.

use axum::Router;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};

use crate::api::dto::{
    AnalyticsOverview, ApplicationListQuery, CreatorPage, DeliverableList, DeliverableRejected,
    DeliverableReview, FeeEstimateRequest, KpiResult, ListQuery, OracleVerification,
    PaymentRelease, PeriodComparison, ProjectApplicationPage, ProjectDashboardStats,
    RecommendedCreator, RecommendedCreators, RejectDeliverableRequest, ReviewApplicationsRequest,
    ReviewResult, RevisionRequest, RevisionRequested,
};
use crate::api::envelope::ApiResponse;
use crate::api::extract::{ApiJson, ApiQuery};
use crate::app_state::AppState;
use crate::domain::fees::FeeQuote;
use crate::domain::fixtures::STATUS_ACTIVE;
use crate::domain::records::{CreatorCard, ProjectApplication};
use crate::error::{ApiError, ErrorResponse};

/// Suggestions returned by the recommendation endpoint.
const RECOMMENDATION_LIMIT: usize = 3;

/// `GET /api/project/dashboard/stats`: Project headline figures.
#[utoipa::path(
    get,
    path = "/api/project/dashboard/stats",
    tag = "Project",
    summary = "Dashboard statistics",
    responses((status = 200, description = "Dashboard figures", body = ApiResponse<ProjectDashboardStats>))
)]
pub async fn dashboard_stats(State(state): State<AppState>) -> impl IntoResponse {
    let fixtures = state.service.fixtures();
    let active_campaigns = fixtures
        .project_campaigns
        .iter()
        .filter(|c| c.status == STATUS_ACTIVE)
        .count();
    ApiResponse::ok(ProjectDashboardStats {
        active_campaigns: u32::try_from(active_campaigns).unwrap_or(u32::MAX),
        pending_applications: 12,
        budget_available: 25_000.0,
        deliverables_submitted: 3,
        total_campaigns: 28,
        total_spent: 245_000.0,
        reputation_score: 780.0,
        reputation_tier: "B".to_string(),
        avg_campaign_cvpi: 95.3,
    })
}

/// `POST /api/project/fees/estimate`: Quote platform fees.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] on a missing or non-positive budget or
/// an unknown complexity.
#[utoipa::path(
    post,
    path = "/api/project/fees/estimate",
    tag = "Project",
    summary = "Estimate fees",
    description = "Service fee is 5% of the budget (4% when paying in AW3) plus a 1% oracle fee. Quotes are valid for 15 minutes.",
    request_body = FeeEstimateRequest,
    responses(
        (status = 200, description = "Fee quote", body = ApiResponse<FeeQuote>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
    )
)]
pub async fn estimate_fees(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<FeeEstimateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let quote = state.service.estimate_fees(req.into_inputs()?)?;
    Ok(ApiResponse::ok(quote))
}

/// `GET /api/project/applications`: Applications to the project's campaigns.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] on an unknown `status` code.
#[utoipa::path(
    get,
    path = "/api/project/applications",
    tag = "Project",
    summary = "List applications",
    params(ApplicationListQuery),
    responses(
        (status = 200, description = "Application page", body = ApiResponse<ProjectApplicationPage>),
        (status = 400, description = "Invalid status filter", body = ErrorResponse),
    )
)]
pub async fn list_applications(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ApplicationListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let page = state
        .service
        .project_applications(&query.filter()?, query.page_request());
    Ok(ApiResponse::ok(ProjectApplicationPage {
        applications: page.items,
        pagination: page.info,
    }))
}

/// `GET /api/project/applications/{id}`: One application.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] on an unknown id.
#[utoipa::path(
    get,
    path = "/api/project/applications/{id}",
    tag = "Project",
    summary = "Get an application",
    params(("id" = String, Path, description = "Application id")),
    responses(
        (status = 200, description = "Application", body = ApiResponse<ProjectApplication>),
        (status = 404, description = "Unknown application", body = ErrorResponse),
    )
)]
pub async fn get_application(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(ApiResponse::ok(
        state.service.project_application(&id)?.clone(),
    ))
}

/// `POST /api/project/applications/approve`: Approve applications in bulk.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] on a malformed body.
#[utoipa::path(
    post,
    path = "/api/project/applications/approve",
    tag = "Project",
    summary = "Approve applications",
    description = "Ids that do not resolve are listed in `failedIds` with one message each.",
    request_body = ReviewApplicationsRequest,
    responses(
        (status = 200, description = "Review result", body = ApiResponse<ReviewResult>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
    )
)]
pub async fn approve_applications(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ReviewApplicationsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let outcome = state
        .service
        .review_applications(&req.application_ids, true);
    Ok(ApiResponse::ok(ReviewResult::from(outcome)))
}

/// `POST /api/project/applications/reject`: Reject applications in bulk.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] on a malformed body.
#[utoipa::path(
    post,
    path = "/api/project/applications/reject",
    tag = "Project",
    summary = "Reject applications",
    description = "Ids that do not resolve are listed in `failedIds` with one message each.",
    request_body = ReviewApplicationsRequest,
    responses(
        (status = 200, description = "Review result", body = ApiResponse<ReviewResult>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
    )
)]
pub async fn reject_applications(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ReviewApplicationsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let outcome = state
        .service
        .review_applications(&req.application_ids, false);
    Ok(ApiResponse::ok(ReviewResult::from(outcome)))
}

/// `GET /api/project/applications/{id}/deliverables`: Work under one application.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] on an unknown application id.
#[utoipa::path(
    get,
    path = "/api/project/applications/{id}/deliverables",
    tag = "Project",
    summary = "Deliverables of an application",
    params(("id" = String, Path, description = "Application id")),
    responses(
        (status = 200, description = "Deliverables", body = ApiResponse<DeliverableList>),
        (status = 404, description = "Unknown application", body = ErrorResponse),
    )
)]
pub async fn application_deliverables(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let deliverables = state.service.application_deliverables(&id)?;
    Ok(ApiResponse::ok(DeliverableList { deliverables }))
}

/// `GET /api/project/deliverables`: Deliverables awaiting review.
#[utoipa::path(
    get,
    path = "/api/project/deliverables",
    tag = "Project",
    summary = "List deliverables",
    responses((status = 200, description = "Deliverables", body = ApiResponse<DeliverableList>))
)]
pub async fn list_deliverables(State(state): State<AppState>) -> impl IntoResponse {
    ApiResponse::ok(DeliverableList {
        deliverables: state.service.fixtures().project_deliverables.clone(),
    })
}

fn kpi_result(kpi: &str, target: f64, actual: f64) -> KpiResult {
    let ratio = actual / target * 100.0;
    KpiResult {
        kpi: kpi.to_string(),
        target,
        actual,
        achievement: ratio.round() as u32,
        status: if ratio >= 120.0 { "Exceeded" } else { "Met" }.to_string(),
    }
}

/// `GET /api/project/deliverables/{id}`: Deliverable with verification data.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] on an unknown id.
#[utoipa::path(
    get,
    path = "/api/project/deliverables/{id}",
    tag = "Project",
    summary = "Review a deliverable",
    params(("id" = String, Path, description = "Deliverable id")),
    responses(
        (status = 200, description = "Deliverable review", body = ApiResponse<DeliverableReview>),
        (status = 404, description = "Unknown deliverable", body = ErrorResponse),
    )
)]
pub async fn get_deliverable(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let deliverable = state.service.project_deliverable(&id)?.clone();
    let creator_name = state
        .service
        .fixtures()
        .project_applications
        .iter()
        .find(|a| a.creator_id == deliverable.creator_id)
        .map_or_else(|| "Unknown creator".to_string(), |a| a.creator_name.clone());
    Ok(ApiResponse::ok(DeliverableReview {
        deliverable,
        creator_name,
        oracle_verification: OracleVerification {
            status: "Complete".to_string(),
            verified_by: "Oracle Node #12".to_string(),
            verified_at: "2024-11-23T10:30:00Z".to_string(),
        },
        kpi_results: vec![
            kpi_result("Engagement Rate", 7.5, 8.2),
            kpi_result("Reach", 200_000.0, 245_000.0),
        ],
    }))
}

/// `POST /api/project/deliverables/{id}/verify`: Release payment.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] on an unknown id.
#[utoipa::path(
    post,
    path = "/api/project/deliverables/{id}/verify",
    tag = "Project",
    summary = "Verify a deliverable",
    description = "Releases the deliverable's payment from escrow.",
    params(("id" = String, Path, description = "Deliverable id")),
    responses(
        (status = 200, description = "Payment released", body = ApiResponse<PaymentRelease>),
        (status = 404, description = "Unknown deliverable", body = ErrorResponse),
    )
)]
pub async fn verify_deliverable(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let amount = state
        .service
        .project_deliverable(&id)?
        .payment_amount
        .unwrap_or_default();
    let transaction_hash = state.service.transaction_hash().await;
    tracing::info!(deliverable_id = %id, tx = %transaction_hash, amount, "payment released");
    Ok(ApiResponse::ok(PaymentRelease {
        message: "Payment release initiated".to_string(),
        transaction_hash,
        amount,
    }))
}

/// `POST /api/project/deliverables/{id}/request-revision`: Ask for changes.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] on an unknown id and
/// [`ApiError::Validation`] on blank feedback.
#[utoipa::path(
    post,
    path = "/api/project/deliverables/{id}/request-revision",
    tag = "Project",
    summary = "Request a revision",
    params(("id" = String, Path, description = "Deliverable id")),
    request_body = RevisionRequest,
    responses(
        (status = 200, description = "Revision requested", body = ApiResponse<RevisionRequested>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Unknown deliverable", body = ErrorResponse),
    )
)]
pub async fn request_revision(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<RevisionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state.service.project_deliverable(&id)?;
    req.validate()?;
    Ok(ApiResponse::ok(RevisionRequested {
        message: "Revision requested".to_string(),
        feedback: req.feedback,
    }))
}

/// `POST /api/project/deliverables/{id}/reject`: Reject and open a dispute.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] on an unknown id and
/// [`ApiError::Validation`] on a blank reason.
#[utoipa::path(
    post,
    path = "/api/project/deliverables/{id}/reject",
    tag = "Project",
    summary = "Reject a deliverable",
    params(("id" = String, Path, description = "Deliverable id")),
    request_body = RejectDeliverableRequest,
    responses(
        (status = 200, description = "Deliverable rejected", body = ApiResponse<DeliverableRejected>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Unknown deliverable", body = ErrorResponse),
    )
)]
pub async fn reject_deliverable(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<RejectDeliverableRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state.service.project_deliverable(&id)?;
    req.validate()?;
    tracing::info!(deliverable_id = %id, "deliverable rejected, dispute opened");
    Ok(ApiResponse::ok(DeliverableRejected {
        message: "Deliverable rejected".to_string(),
        reason: req.reason,
        dispute_initiated: true,
    }))
}

/// `GET /api/project/creators/discover`: Search creators.
#[utoipa::path(
    get,
    path = "/api/project/creators/discover",
    tag = "Project",
    summary = "Discover creators",
    description = "`category` matches vertical experience and `search` matches the display name. Budget bounds do not apply to creators.",
    params(ListQuery),
    responses((status = 200, description = "Creator page", body = ApiResponse<CreatorPage>))
)]
pub async fn discover_creators(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListQuery>,
) -> impl IntoResponse {
    let page = state
        .service
        .discover_creators(&query.filter(), query.page_request());
    ApiResponse::ok(CreatorPage {
        creators: page.items,
        pagination: page.info,
    })
}

/// `GET /api/project/creators/recommended`: Suggested creators.
#[utoipa::path(
    get,
    path = "/api/project/creators/recommended",
    tag = "Project",
    summary = "Recommended creators",
    description = "Available creators ordered by reputation.",
    responses((status = 200, description = "Suggestions", body = ApiResponse<RecommendedCreators>))
)]
pub async fn recommended_creators(State(state): State<AppState>) -> impl IntoResponse {
    let mut available: Vec<&CreatorCard> = state
        .service
        .fixtures()
        .creators
        .iter()
        .filter(|c| c.available)
        .collect();
    available.sort_by(|a, b| b.reputation.total_cmp(&a.reputation));
    let creators = available
        .into_iter()
        .take(RECOMMENDATION_LIMIT)
        .map(RecommendedCreator::from_card)
        .collect();
    ApiResponse::ok(RecommendedCreators { creators })
}

/// `GET /api/project/creators/{id}`: One creator.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] on an unknown id.
#[utoipa::path(
    get,
    path = "/api/project/creators/{id}",
    tag = "Project",
    summary = "Get a creator",
    params(("id" = String, Path, description = "Creator id")),
    responses(
        (status = 200, description = "Creator", body = ApiResponse<CreatorCard>),
        (status = 404, description = "Unknown creator", body = ErrorResponse),
    )
)]
pub async fn get_creator(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(ApiResponse::ok(state.service.creator_card(&id)?.clone()))
}

/// `GET /api/project/analytics/overview`: Cross-campaign analytics.
#[utoipa::path(
    get,
    path = "/api/project/analytics/overview",
    tag = "Project",
    summary = "Analytics overview",
    responses((status = 200, description = "Analytics", body = ApiResponse<AnalyticsOverview>))
)]
pub async fn analytics_overview() -> impl IntoResponse {
    ApiResponse::ok(AnalyticsOverview {
        total_spend: 245_000.0,
        avg_cvpi: 95.3,
        campaign_success_rate: 92,
        total_reach: 2_800_000,
        period_comparison: PeriodComparison {
            previous_period: 18.0,
            platform_average: 12.0,
            vertical_average: 8.0,
        },
    })
}

/// Project routes other than campaign management.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/project/dashboard/stats", get(dashboard_stats))
        .route("/api/project/fees/estimate", post(estimate_fees))
        .route("/api/project/applications", get(list_applications))
        .route(
            "/api/project/applications/approve",
            post(approve_applications),
        )
        .route(
            "/api/project/applications/reject",
            post(reject_applications),
        )
        .route("/api/project/applications/{id}", get(get_application))
        .route(
            "/api/project/applications/{id}/deliverables",
            get(application_deliverables),
        )
        .route("/api/project/deliverables", get(list_deliverables))
        .route("/api/project/deliverables/{id}", get(get_deliverable))
        .route(
            "/api/project/deliverables/{id}/verify",
            post(verify_deliverable),
        )
        .route(
            "/api/project/deliverables/{id}/request-revision",
            post(request_revision),
        )
        .route(
            "/api/project/deliverables/{id}/reject",
            post(reject_deliverable),
        )
        .route("/api/project/creators/discover", get(discover_creators))
        .route(
            "/api/project/creators/recommended",
            get(recommended_creators),
        )
        .route("/api/project/creators/{id}", get(get_creator))
        .route("/api/project/analytics/overview", get(analytics_overview))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kpi_results_grade_achievement() {
        let met = kpi_result("Engagement Rate", 7.5, 8.2);
        assert_eq!((met.achievement, met.status.as_str()), (109, "Met"));
        let exceeded = kpi_result("Reach", 200_000.0, 245_000.0);
        assert_eq!(
            (exceeded.achievement, exceeded.status.as_str()),
            (123, "Exceeded")
        );
    }
}
