//! Project campaign management and reporting handlers.
//!
//! Every `{id}` route resolves the campaign first, so an unknown id is a
//! `404` no matter the action.

use axum::Router;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use uuid::Uuid;

use crate::api::dto::{
    AnalyticsSummary, ApprovedCreator, AudienceReach, BudgetAllocation, CONFIRMATION_TIME_SECS,
    CampaignAnalytics, CampaignBrief, CampaignCreated, CampaignExtended, CampaignFinancials,
    CampaignMetrics, CampaignOverview, CampaignStatusChange, CostEfficiency, CreateCampaignRequest,
    CreatorCvpi, ESCROW_LOCK_MULTIPLIER, EscrowOverview, EscrowPayment, ExportQuery, ExportReport,
    ExtendCampaignRequest, FeeBreakdown, InvitationsSent, InviteCreatorsRequest, KpiAchievement,
    KpiProgress, ListQuery, MessageResponse, ProjectCampaignPage, UpdateCampaignRequest,
    require_text,
};
use crate::api::envelope::ApiResponse;
use crate::api::extract::{ApiJson, ApiQuery};
use crate::app_state::AppState;
use crate::domain::fees::{ORACLE_FEE_RATE, SERVICE_FEE_RATE};
use crate::domain::records::ProjectCampaign;
use crate::error::{ApiError, ErrorResponse};

/// Escrow contract holding campaign budgets.
const ESCROW_CONTRACT: &str = "0x742d35Cc6634C0532925a3b844Bc454e4438f44e";

/// `GET /api/project/campaigns`: The project's campaigns.
#[utoipa::path(
    get,
    path = "/api/project/campaigns",
    tag = "Project",
    summary = "List own campaigns",
    params(ListQuery),
    responses((status = 200, description = "Campaign page", body = ApiResponse<ProjectCampaignPage>))
)]
pub async fn list_campaigns(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListQuery>,
) -> impl IntoResponse {
    let page = state
        .service
        .project_campaigns(&query.filter(), query.page_request());
    ApiResponse::ok(ProjectCampaignPage {
        campaigns: page.items,
        pagination: page.info,
    })
}

/// `POST /api/project/campaigns`: Create a campaign and lock its budget.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] on a blank name, non-positive budget or
/// unknown code.
#[utoipa::path(
    post,
    path = "/api/project/campaigns",
    tag = "Project",
    summary = "Create a campaign",
    description = "Locks the creator budget plus 12% in escrow and returns the pending transaction.",
    request_body = CreateCampaignRequest,
    responses(
        (status = 200, description = "Campaign pending escrow", body = ApiResponse<CampaignCreated>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
    )
)]
pub async fn create_campaign(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateCampaignRequest>,
) -> Result<impl IntoResponse, ApiError> {
    req.validate()?;
    let created = CampaignCreated {
        campaign_id: Uuid::new_v4(),
        transaction_hash: state.service.transaction_hash().await,
        status: "PENDING".to_string(),
        estimated_confirmation_time: CONFIRMATION_TIME_SECS,
        total_locked: req.total_locked(),
    };
    tracing::info!(
        campaign_id = %created.campaign_id,
        tx = %created.transaction_hash,
        total_locked = created.total_locked,
        "campaign created"
    );
    Ok(ApiResponse::ok(created))
}

/// `GET /api/project/campaigns/{id}`: One campaign.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] on an unknown id.
#[utoipa::path(
    get,
    path = "/api/project/campaigns/{id}",
    tag = "Project",
    summary = "Get a campaign",
    params(("id" = String, Path, description = "Campaign id")),
    responses(
        (status = 200, description = "Campaign", body = ApiResponse<ProjectCampaign>),
        (status = 404, description = "Unknown campaign", body = ErrorResponse),
    )
)]
pub async fn get_campaign(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let campaign = state.service.project_campaign(&id)?.clone();
    Ok(ApiResponse::ok(campaign))
}

/// `PUT /api/project/campaigns/{id}`: Update a campaign.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] on an unknown id.
#[utoipa::path(
    put,
    path = "/api/project/campaigns/{id}",
    tag = "Project",
    summary = "Update a campaign",
    params(("id" = String, Path, description = "Campaign id")),
    request_body = UpdateCampaignRequest,
    responses(
        (status = 200, description = "Campaign updated", body = ApiResponse<MessageResponse>),
        (status = 404, description = "Unknown campaign", body = ErrorResponse),
    )
)]
pub async fn update_campaign(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(_req): ApiJson<UpdateCampaignRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state.service.project_campaign(&id)?;
    Ok(ApiResponse::ok(MessageResponse::new(
        "Campaign updated successfully",
    )))
}

/// `DELETE /api/project/campaigns/{id}`: Delete a campaign.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] on an unknown id.
#[utoipa::path(
    delete,
    path = "/api/project/campaigns/{id}",
    tag = "Project",
    summary = "Delete a campaign",
    params(("id" = String, Path, description = "Campaign id")),
    responses(
        (status = 200, description = "Campaign deleted", body = ApiResponse<MessageResponse>),
        (status = 404, description = "Unknown campaign", body = ErrorResponse),
    )
)]
pub async fn delete_campaign(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let campaign = state.service.project_campaign(&id)?;
    tracing::info!(campaign_id = %campaign.campaign_id, "campaign deleted");
    Ok(ApiResponse::ok(MessageResponse::new(
        "Campaign deleted successfully",
    )))
}

fn status_change(message: &str, status: &str) -> ApiResponse<CampaignStatusChange> {
    ApiResponse::ok(CampaignStatusChange {
        message: message.to_string(),
        status: status.to_string(),
    })
}

/// `POST /api/project/campaigns/{id}/pause`: Pause a campaign.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] on an unknown id.
#[utoipa::path(
    post,
    path = "/api/project/campaigns/{id}/pause",
    tag = "Project",
    summary = "Pause a campaign",
    params(("id" = String, Path, description = "Campaign id")),
    responses(
        (status = 200, description = "Campaign paused", body = ApiResponse<CampaignStatusChange>),
        (status = 404, description = "Unknown campaign", body = ErrorResponse),
    )
)]
pub async fn pause_campaign(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.service.project_campaign(&id)?;
    Ok(status_change("Campaign paused", "PAUSED"))
}

/// `POST /api/project/campaigns/{id}/resume`: Resume a paused campaign.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] on an unknown id.
#[utoipa::path(
    post,
    path = "/api/project/campaigns/{id}/resume",
    tag = "Project",
    summary = "Resume a campaign",
    params(("id" = String, Path, description = "Campaign id")),
    responses(
        (status = 200, description = "Campaign resumed", body = ApiResponse<CampaignStatusChange>),
        (status = 404, description = "Unknown campaign", body = ErrorResponse),
    )
)]
pub async fn resume_campaign(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.service.project_campaign(&id)?;
    Ok(status_change("Campaign resumed", "ACTIVE"))
}

/// `POST /api/project/campaigns/{id}/extend`: Move the end date.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] on an unknown id and
/// [`ApiError::Validation`] on a blank date.
#[utoipa::path(
    post,
    path = "/api/project/campaigns/{id}/extend",
    tag = "Project",
    summary = "Extend a campaign",
    params(("id" = String, Path, description = "Campaign id")),
    request_body = ExtendCampaignRequest,
    responses(
        (status = 200, description = "Campaign extended", body = ApiResponse<CampaignExtended>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Unknown campaign", body = ErrorResponse),
    )
)]
pub async fn extend_campaign(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<ExtendCampaignRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state.service.project_campaign(&id)?;
    require_text("newEndDate", &req.new_end_date)?;
    Ok(ApiResponse::ok(CampaignExtended {
        message: "Campaign extended".to_string(),
        new_end_date: req.new_end_date,
    }))
}

/// `POST /api/project/campaigns/{id}/invite`: Invite creators.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] on an unknown id.
#[utoipa::path(
    post,
    path = "/api/project/campaigns/{id}/invite",
    tag = "Project",
    summary = "Invite creators",
    params(("id" = String, Path, description = "Campaign id")),
    request_body = InviteCreatorsRequest,
    responses(
        (status = 200, description = "Invitations sent", body = ApiResponse<InvitationsSent>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Unknown campaign", body = ErrorResponse),
    )
)]
pub async fn invite_creators(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<InviteCreatorsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state.service.project_campaign(&id)?;
    Ok(ApiResponse::ok(InvitationsSent {
        message: format!("{} invitations sent", req.creator_ids.len()),
        invited: req.creator_ids,
    }))
}

/// `GET /api/project/campaigns/{id}/export`: Start a report export.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] on an unknown id and
/// [`ApiError::Validation`] when `format` is missing or blank.
#[utoipa::path(
    get,
    path = "/api/project/campaigns/{id}/export",
    tag = "Project",
    summary = "Export a campaign report",
    params(("id" = String, Path, description = "Campaign id"), ExportQuery),
    responses(
        (status = 200, description = "Export started", body = ApiResponse<ExportReport>),
        (status = 400, description = "Missing format", body = ErrorResponse),
        (status = 404, description = "Unknown campaign", body = ErrorResponse),
    )
)]
pub async fn export_report(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiQuery(query): ApiQuery<ExportQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let campaign = state.service.project_campaign(&id)?;
    Ok(ApiResponse::ok(ExportReport::new(
        &campaign.campaign_id,
        query.format,
    )?))
}

/// `GET /api/project/campaigns/{id}/metrics`: Budget, funnel and progress.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] on an unknown id.
#[utoipa::path(
    get,
    path = "/api/project/campaigns/{id}/metrics",
    tag = "Project",
    summary = "Campaign metrics",
    params(("id" = String, Path, description = "Campaign id")),
    responses(
        (status = 200, description = "Metrics", body = ApiResponse<CampaignMetrics>),
        (status = 404, description = "Unknown campaign", body = ErrorResponse),
    )
)]
pub async fn campaign_metrics(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let campaign = state.service.project_campaign(&id)?;
    Ok(ApiResponse::ok(CampaignMetrics::for_campaign(campaign)))
}

/// `GET /api/project/campaigns/{id}/overview`: Brief, KPIs and creators.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] on an unknown id.
#[utoipa::path(
    get,
    path = "/api/project/campaigns/{id}/overview",
    tag = "Project",
    summary = "Campaign overview",
    params(("id" = String, Path, description = "Campaign id")),
    responses(
        (status = 200, description = "Overview", body = ApiResponse<CampaignOverview>),
        (status = 404, description = "Unknown campaign", body = ErrorResponse),
    )
)]
pub async fn campaign_overview(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let campaign = state.service.project_campaign(&id)?;
    let creators = &state.service.fixtures().creators;
    let slots = campaign.approved_count.max(1);
    let approved_creators = creators
        .iter()
        .take(campaign.approved_count as usize)
        .map(|card| ApprovedCreator {
            creator_id: card.creator_id,
            name: card.display_name.clone(),
            avatar: card.avatar.clone(),
            reputation: card.reputation,
            payment: (campaign.budget_total / f64::from(slots)).floor(),
            deliverable_status: 3,
            cvpi_contribution: card.avg_cvpi,
        })
        .collect();

    let kpi = |name: &str, target: f64, weight: u32, current: f64| KpiProgress {
        kpi_name: name.to_string(),
        target,
        weight,
        current_average: current,
        status: if current >= target {
            "Exceeding"
        } else {
            "BelowTarget"
        }
        .to_string(),
    };

    Ok(ApiResponse::ok(CampaignOverview {
        campaign_id: campaign.campaign_id,
        details: CampaignBrief {
            name: campaign.name.clone(),
            description: format!("Help us launch {} with engaging creator content", campaign.name),
            deliverable_requirements: vec![
                "Twitter Thread".to_string(),
                "YouTube Video".to_string(),
                "Blog Article".to_string(),
            ],
            content_guidelines: "Focus on education, positive tone, include #DeFi hashtags"
                .to_string(),
        },
        kpi_targets: vec![
            kpi("Engagement Rate", 7.5, 40, 8.2),
            kpi("Reach", 200_000.0, 30, 245_000.0),
            kpi("Conversions", 350.0, 30, 280.0),
        ],
        approved_creators,
    }))
}

/// `GET /api/project/campaigns/{id}/analytics`: Performance analytics.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] on an unknown id.
#[utoipa::path(
    get,
    path = "/api/project/campaigns/{id}/analytics",
    tag = "Project",
    summary = "Campaign analytics",
    params(("id" = String, Path, description = "Campaign id")),
    responses(
        (status = 200, description = "Analytics", body = ApiResponse<CampaignAnalytics>),
        (status = 404, description = "Unknown campaign", body = ErrorResponse),
    )
)]
pub async fn campaign_analytics(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let campaign = state.service.project_campaign(&id)?;
    let creators = &state.service.fixtures().creators;
    let avg_creator_reputation = if creators.is_empty() {
        0.0
    } else {
        creators.iter().map(|c| c.reputation).sum::<f64>() / creators.len() as f64
    };
    let cvpi_breakdown = creators
        .iter()
        .map(|c| CreatorCvpi {
            creator_name: c.display_name.clone(),
            cvpi_score: c.avg_cvpi,
            classification: c.cvpi_classification.clone(),
        })
        .collect();

    Ok(ApiResponse::ok(CampaignAnalytics {
        summary: AnalyticsSummary {
            total_spend: campaign.budget_total - campaign.budget_remaining,
            avg_cvpi: campaign.cvpi_score,
            kpi_success_rate: 87,
            avg_creator_reputation,
        },
        cvpi_breakdown,
        kpi_achievement: vec![
            KpiAchievement {
                date: "2024-12-01".to_string(),
                kpi_name: "Engagement Rate".to_string(),
                achievement_percentage: 109,
            },
            KpiAchievement {
                date: "2024-12-08".to_string(),
                kpi_name: "Reach".to_string(),
                achievement_percentage: 123,
            },
        ],
        audience_reach: AudienceReach {
            total_impressions: 735_000,
            unique_reach: 612_000,
            total_engagements: 58_300,
            avg_engagement_rate: 7.9,
        },
        cost_efficiency: CostEfficiency {
            cost_per_1k_impressions: 14.65,
            cost_per_engagement: 0.18,
            cost_per_conversion: 26.25,
        },
    }))
}

/// `GET /api/project/campaigns/{id}/financials`: Escrow and fee report.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] on an unknown id.
#[utoipa::path(
    get,
    path = "/api/project/campaigns/{id}/financials",
    tag = "Project",
    summary = "Campaign financials",
    description = "Escrow totals and budget allocation are derived from the campaign budget.",
    params(("id" = String, Path, description = "Campaign id")),
    responses(
        (status = 200, description = "Financials", body = ApiResponse<CampaignFinancials>),
        (status = 404, description = "Unknown campaign", body = ErrorResponse),
    )
)]
pub async fn campaign_financials(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let campaign = state.service.project_campaign(&id)?.clone();
    let total_locked = campaign.budget_total * ESCROW_LOCK_MULTIPLIER;
    let released = campaign.budget_total - campaign.budget_remaining;
    let service_fees = campaign.budget_total * SERVICE_FEE_RATE;
    let oracle_fees = campaign.budget_total * ORACLE_FEE_RATE;
    let escrow_buffer = total_locked - campaign.budget_total - service_fees - oracle_fees;

    let payment = |kind: &str, recipient: &str, amount: f64, hash: String| EscrowPayment {
        date: "2024-11-23T10:30:00Z".to_string(),
        kind: kind.to_string(),
        recipient: recipient.to_string(),
        amount,
        status: "Completed".to_string(),
        transaction_hash: hash,
    };
    let creator_name = state
        .service
        .fixtures()
        .creators
        .first()
        .map_or_else(|| "Creator A".to_string(), |c| c.display_name.clone());
    let payment_history = vec![
        payment(
            "CreatorPayment",
            &creator_name,
            released,
            state.service.transaction_hash().await,
        ),
        payment(
            "ServiceFee",
            "AW3 Platform",
            released * SERVICE_FEE_RATE,
            state.service.transaction_hash().await,
        ),
    ];

    Ok(ApiResponse::ok(CampaignFinancials {
        escrow_overview: EscrowOverview {
            smart_contract_address: ESCROW_CONTRACT.to_string(),
            chain: "BASE Mainnet".to_string(),
            total_locked,
            total_released: released,
            remaining_balance: total_locked - released,
            expected_refund: escrow_buffer,
        },
        budget_allocation: BudgetAllocation {
            creator_payments: campaign.budget_total,
            service_fees,
            oracle_fees,
            escrow_buffer,
            unused: campaign.budget_remaining,
        },
        payment_history,
        fee_breakdown: FeeBreakdown {
            base_rate: 8.0,
            complexity_multiplier: 1.5,
            reputation_discount: -20.0,
            token_payment_discount: -20.0,
            effective_rate: 7.68,
            total_saved: 432.0,
        },
    }))
}

/// Project campaign routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/project/campaigns",
            get(list_campaigns).post(create_campaign),
        )
        .route(
            "/api/project/campaigns/{id}",
            get(get_campaign)
                .put(update_campaign)
                .delete(delete_campaign),
        )
        .route("/api/project/campaigns/{id}/pause", post(pause_campaign))
        .route("/api/project/campaigns/{id}/resume", post(resume_campaign))
        .route("/api/project/campaigns/{id}/extend", post(extend_campaign))
        .route("/api/project/campaigns/{id}/invite", post(invite_creators))
        .route("/api/project/campaigns/{id}/export", get(export_report))
        .route("/api/project/campaigns/{id}/metrics", get(campaign_metrics))
        .route("/api/project/campaigns/{id}/overview", get(campaign_overview))
        .route(
            "/api/project/campaigns/{id}/analytics",
            get(campaign_analytics),
        )
        .route(
            "/api/project/campaigns/{id}/financials",
            get(campaign_financials),
        )
}
