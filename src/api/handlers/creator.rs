//! Creator handlers: profile, campaigns, applications, deliverables,
//! earnings, CVPI and certificates.

use std::collections::BTreeMap;

use axum::Router;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use uuid::Uuid;

use crate::api::dto::{
    CampaignPage, Certificate, CertificateList, CvpiComponents, CvpiHistory, CvpiHistoryQuery,
    CvpiScore, EarningsHistory, EarningsHistoryQuery, EarningsSummary, ListQuery,
    NewApplicationRequest, NewDeliverableRequest, RelatedCampaign, ReputationSummary,
    SocialVerification, SocialVerificationRequest, UpdateProfileRequest,
};
use crate::api::envelope::ApiResponse;
use crate::api::extract::{ApiJson, ApiQuery};
use crate::app_state::AppState;
use crate::domain::listing::parse_positive_int;
use crate::domain::records::{CampaignDetail, CreatorApplication, CreatorProfile, Deliverable};
use crate::domain::time_series::{EarningsRange, HistoryWindow};
use crate::domain::timestamp::now_iso8601;
use crate::error::{ApiError, ErrorResponse};

/// Points returned by the CVPI history when `limit` is absent.
const DEFAULT_CVPI_LIMIT: u32 = 30;

/// `GET /api/creator/profile/me`: Signed-in creator's profile.
#[utoipa::path(
    get,
    path = "/api/creator/profile/me",
    tag = "Creator",
    summary = "Get own profile",
    responses(
        (status = 200, description = "Creator profile", body = ApiResponse<CreatorProfile>),
    )
)]
pub async fn get_profile(State(state): State<AppState>) -> impl IntoResponse {
    ApiResponse::ok(state.service.fixtures().creator.clone())
}

/// `PUT /api/creator/profile/me`: Update the profile.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] on an unknown focus-area code.
#[utoipa::path(
    put,
    path = "/api/creator/profile/me",
    tag = "Creator",
    summary = "Update own profile",
    description = "Supplied fields replace the stored ones in the response; nothing is persisted.",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Updated profile", body = ApiResponse<CreatorProfile>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
    )
)]
pub async fn update_profile(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<UpdateProfileRequest>,
) -> Result<impl IntoResponse, ApiError> {
    req.validate()?;
    let current = &state.service.fixtures().creator;
    let profile = CreatorProfile {
        display_name: req
            .display_name
            .unwrap_or_else(|| current.display_name.clone()),
        avatar: req.avatar.unwrap_or_else(|| current.avatar.clone()),
        bio: req.bio.unwrap_or_else(|| current.bio.clone()),
        focus_area: req.focus_area.unwrap_or_else(|| current.focus_area.clone()),
        ..current.clone()
    };
    Ok(ApiResponse::ok(profile))
}

/// `POST /api/creator/profile/social-verification`: Start verifying a handle.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] on an unknown platform or blank handle.
#[utoipa::path(
    post,
    path = "/api/creator/profile/social-verification",
    tag = "Creator",
    summary = "Verify a social account",
    request_body = SocialVerificationRequest,
    responses(
        (status = 200, description = "Verification started", body = ApiResponse<SocialVerification>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
    )
)]
pub async fn social_verification(
    ApiJson(req): ApiJson<SocialVerificationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    req.validate()?;
    Ok(ApiResponse::ok(SocialVerification {
        platform: req.platform,
        handle: req.handle,
        verification_status: "PENDING".to_string(),
        message: "Verification initiated. Please check your social media for instructions."
            .to_string(),
    }))
}

/// `GET /api/creator/campaigns`: Open campaigns with match rates.
#[utoipa::path(
    get,
    path = "/api/creator/campaigns",
    tag = "Creator",
    summary = "Browse campaigns",
    description = "Filters by focus area, budget range and title, then paginates. Each campaign carries the signed-in creator's match rate.",
    params(ListQuery),
    responses(
        (status = 200, description = "Campaign page", body = ApiResponse<CampaignPage>),
    )
)]
pub async fn list_campaigns(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListQuery>,
) -> impl IntoResponse {
    let page = state
        .service
        .creator_campaigns(&query.filter(), query.page_request());
    ApiResponse::ok(CampaignPage {
        campaigns: page.items,
        pagination: page.info,
    })
}

/// `GET /api/creator/campaigns/{id}`: Full campaign.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] on an unknown id.
#[utoipa::path(
    get,
    path = "/api/creator/campaigns/{id}",
    tag = "Creator",
    summary = "Get a campaign",
    params(("id" = String, Path, description = "Campaign id")),
    responses(
        (status = 200, description = "Campaign detail", body = ApiResponse<CampaignDetail>),
        (status = 404, description = "Unknown campaign", body = ErrorResponse),
    )
)]
pub async fn get_campaign(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(ApiResponse::ok(state.service.campaign_detail(&id)?))
}

/// `GET /api/creator/applications`: Own applications.
#[utoipa::path(
    get,
    path = "/api/creator/applications",
    tag = "Creator",
    summary = "List own applications",
    responses(
        (status = 200, description = "Applications", body = ApiResponse<Vec<CreatorApplication>>),
    )
)]
pub async fn list_applications(State(state): State<AppState>) -> impl IntoResponse {
    ApiResponse::ok(state.service.fixtures().creator_applications.clone())
}

/// `POST /api/creator/applications`: Apply to a campaign.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] on an invalid body and
/// [`ApiError::NotFound`] on an unknown campaign.
#[utoipa::path(
    post,
    path = "/api/creator/applications",
    tag = "Creator",
    summary = "Submit an application",
    description = "The match score is computed from the creator's reputation and focus areas against the campaign.",
    request_body = NewApplicationRequest,
    responses(
        (status = 200, description = "Application submitted", body = ApiResponse<CreatorApplication>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Unknown campaign", body = ErrorResponse),
    )
)]
pub async fn submit_application(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<NewApplicationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let application = state.service.submit_application(req.into_draft()?)?;
    Ok(ApiResponse::ok(application))
}

/// `GET /api/creator/applications/{id}`: One application.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] on an unknown id.
#[utoipa::path(
    get,
    path = "/api/creator/applications/{id}",
    tag = "Creator",
    summary = "Get an application",
    params(("id" = String, Path, description = "Application id")),
    responses(
        (status = 200, description = "Application", body = ApiResponse<CreatorApplication>),
        (status = 404, description = "Unknown application", body = ErrorResponse),
    )
)]
pub async fn get_application(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(ApiResponse::ok(
        state.service.creator_application(&id)?.clone(),
    ))
}

/// `GET /api/creator/deliverables`: Own deliverables.
#[utoipa::path(
    get,
    path = "/api/creator/deliverables",
    tag = "Creator",
    summary = "List own deliverables",
    responses(
        (status = 200, description = "Deliverables", body = ApiResponse<Vec<Deliverable>>),
    )
)]
pub async fn list_deliverables(State(state): State<AppState>) -> impl IntoResponse {
    ApiResponse::ok(state.service.fixtures().creator_deliverables.clone())
}

/// `POST /api/creator/deliverables`: Submit a deliverable.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] on an invalid body and
/// [`ApiError::NotFound`] on an unknown campaign.
#[utoipa::path(
    post,
    path = "/api/creator/deliverables",
    tag = "Creator",
    summary = "Submit a deliverable",
    request_body = NewDeliverableRequest,
    responses(
        (status = 200, description = "Deliverable submitted", body = ApiResponse<Deliverable>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Unknown campaign", body = ErrorResponse),
    )
)]
pub async fn submit_deliverable(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<NewDeliverableRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let deliverable = state.service.submit_deliverable(req.into_draft()?)?;
    Ok(ApiResponse::ok(deliverable))
}

/// `GET /api/creator/deliverables/{id}`: One deliverable.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] on an unknown id.
#[utoipa::path(
    get,
    path = "/api/creator/deliverables/{id}",
    tag = "Creator",
    summary = "Get a deliverable",
    params(("id" = String, Path, description = "Deliverable id")),
    responses(
        (status = 200, description = "Deliverable", body = ApiResponse<Deliverable>),
        (status = 404, description = "Unknown deliverable", body = ErrorResponse),
    )
)]
pub async fn get_deliverable(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(ApiResponse::ok(
        state.service.creator_deliverable(&id)?.clone(),
    ))
}

/// `GET /api/creator/earnings`: Earnings summary.
#[utoipa::path(
    get,
    path = "/api/creator/earnings",
    tag = "Creator",
    summary = "Earnings summary",
    responses(
        (status = 200, description = "Earnings", body = ApiResponse<EarningsSummary>),
    )
)]
pub async fn earnings() -> impl IntoResponse {
    ApiResponse::ok(EarningsSummary {
        total_earned: 12_450.50,
        pending_payments: 1_500.00,
        available_balance: 10_950.50,
        currency: "USDC".to_string(),
        average_roi: 45.8,
        growth_rate: 12.5,
    })
}

/// `GET /api/creator/earnings/history`: Generated earnings series.
#[utoipa::path(
    get,
    path = "/api/creator/earnings/history",
    tag = "Creator",
    summary = "Earnings history",
    description = "`range` is an `EarningsRange` code: 1 hourly (25 points), 2 daily (31), 3 monthly (13). Missing or unknown values fall back to monthly.",
    params(EarningsHistoryQuery),
    responses(
        (status = 200, description = "Earnings series", body = ApiResponse<EarningsHistory>),
    )
)]
pub async fn earnings_history(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<EarningsHistoryQuery>,
) -> impl IntoResponse {
    let range = EarningsRange::from_code(parse_positive_int(query.range.as_deref()));
    let data = state.service.earnings_history(range).await;
    ApiResponse::ok(EarningsHistory::new(range.code(), data))
}

/// `GET /api/creator/cvpi/score`: Current CVPI breakdown.
#[utoipa::path(
    get,
    path = "/api/creator/cvpi/score",
    tag = "Creator",
    summary = "CVPI score",
    responses(
        (status = 200, description = "CVPI score", body = ApiResponse<CvpiScore>),
    )
)]
pub async fn cvpi_score(State(state): State<AppState>) -> impl IntoResponse {
    let fixtures = state.service.fixtures();
    ApiResponse::ok(CvpiScore {
        user_id: fixtures.creator.user_id,
        overall_score: 82.3,
        components: CvpiComponents {
            engagement: 85.0,
            reach: 78.5,
            conversion: 88.2,
            consistency: 80.0,
            quality: 79.8,
        },
        reputation: ReputationSummary {
            score: fixtures.creator_reputation,
            tier: "GOLD".to_string(),
            total_reviews: 42,
            average_rating: 4.7,
        },
        trend: "UP".to_string(),
        percentile: 87,
        last_updated: now_iso8601(),
    })
}

/// `GET /api/creator/cvpi/history`: Generated CVPI series.
#[utoipa::path(
    get,
    path = "/api/creator/cvpi/history",
    tag = "Creator",
    summary = "CVPI history",
    description = "`period` is a `TimePeriod` code (1 7d, 2 30d, 3 90d, 4 1y; default 30d). At most `limit` points (default 30) are returned, ending today.",
    params(CvpiHistoryQuery),
    responses(
        (status = 200, description = "CVPI series", body = ApiResponse<CvpiHistory>),
    )
)]
pub async fn cvpi_history(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<CvpiHistoryQuery>,
) -> impl IntoResponse {
    let window = HistoryWindow::from_code(parse_positive_int(query.period.as_deref()));
    let limit = parse_positive_int(query.limit.as_deref()).unwrap_or(DEFAULT_CVPI_LIMIT);
    let history = state.service.cvpi_history(window, limit).await;
    ApiResponse::ok(CvpiHistory {
        history,
        period: window.code(),
        limit,
    })
}

fn certificate(
    kind: &str,
    title: &str,
    issue_date: &str,
    image_colour: &str,
    campaign: RelatedCampaign,
    metadata: [(&str, &str); 2],
) -> Certificate {
    Certificate {
        certificate_id: Uuid::new_v4(),
        certificate_type: kind.to_string(),
        title: title.to_string(),
        issue_date: issue_date.to_string(),
        image_url: format!(
            "https://via.placeholder.com/800x600/{image_colour}/FFFFFF?text={}",
            kind.replace(' ', "+")
        ),
        related_campaign: campaign,
        metadata: metadata
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<BTreeMap<_, _>>(),
    }
}

/// `GET /api/creator/certificates`: Earned certificates.
#[utoipa::path(
    get,
    path = "/api/creator/certificates",
    tag = "Creator",
    summary = "List certificates",
    description = "One certificate per open campaign, linked to that campaign.",
    responses(
        (status = 200, description = "Certificates", body = ApiResponse<CertificateList>),
    )
)]
pub async fn certificates(State(state): State<AppState>) -> impl IntoResponse {
    let awards = [
        (
            "Top Performer",
            "DeFi Campaign Excellence",
            "2024-11-15",
            "4F46E5",
            [("achievement", "Exceeded KPIs by 150%"), ("rank", "1/24")],
        ),
        (
            "Quality Content",
            "NFT Content Creation Award",
            "2024-10-20",
            "7C3AED",
            [
                ("achievement", "Outstanding content quality"),
                ("rating", "4.9/5.0"),
            ],
        ),
        (
            "High Engagement",
            "Community Builder Recognition",
            "2024-09-10",
            "059669",
            [("achievement", "12% engagement rate"), ("followers", "+5000")],
        ),
    ];
    let certificates = state
        .service
        .fixtures()
        .open_campaigns
        .iter()
        .zip(awards)
        .map(|(campaign, (kind, title, issued, colour, metadata))| {
            let related = RelatedCampaign {
                campaign_id: campaign.campaign_id,
                campaign_title: campaign.title.clone(),
                project_name: campaign.project_info.project_name.clone(),
            };
            certificate(kind, title, issued, colour, related, metadata)
        })
        .collect();
    ApiResponse::ok(CertificateList { certificates })
}

/// Creator routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/creator/profile/me", get(get_profile).put(update_profile))
        .route(
            "/api/creator/profile/social-verification",
            post(social_verification),
        )
        .route("/api/creator/campaigns", get(list_campaigns))
        .route("/api/creator/campaigns/{id}", get(get_campaign))
        .route(
            "/api/creator/applications",
            get(list_applications).post(submit_application),
        )
        .route("/api/creator/applications/{id}", get(get_application))
        .route(
            "/api/creator/deliverables",
            get(list_deliverables).post(submit_deliverable),
        )
        .route("/api/creator/deliverables/{id}", get(get_deliverable))
        .route("/api/creator/earnings", get(earnings))
        .route("/api/creator/earnings/history", get(earnings_history))
        .route("/api/creator/cvpi/score", get(cvpi_score))
        .route("/api/creator/cvpi/history", get(cvpi_history))
        .route("/api/creator/certificates", get(certificates))
}
