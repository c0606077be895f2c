//! Project campaign management and reporting DTOs.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use super::common_dto::{check_code, require_text};
use crate::domain::enums::EnumDomain;
use crate::domain::listing::PageInfo;
use crate::domain::records::ProjectCampaign;
use crate::error::ApiError;

/// Share of the creator budget locked in escrow (budget + fees + buffer).
pub const ESCROW_LOCK_MULTIPLIER: f64 = 1.12;
/// Expected on-chain confirmation time in seconds.
pub const CONFIRMATION_TIME_SECS: u32 = 30;
/// Nominal campaign length used by progress metrics.
pub const CAMPAIGN_LENGTH_DAYS: u32 = 30;
/// Applications shown as awaiting review at most.
const MAX_PENDING_REVIEW: u32 = 12;

/// Paginated project campaign list.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProjectCampaignPage {
    /// Campaigns on this page.
    pub campaigns: Vec<ProjectCampaign>,
    /// Pagination metadata.
    pub pagination: PageInfo,
}

/// Request body for `POST /api/project/campaigns`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCampaignRequest {
    /// Campaign name.
    pub name: String,
    /// `FocusArea` code.
    pub focus_area: u8,
    /// Budget paid out to creators.
    pub creator_budget: f64,
    /// `PaymentToken` code. Defaults to USDC.
    #[serde(default)]
    pub budget_token: Option<u8>,
    /// `Complexity` code.
    #[serde(default)]
    pub complexity: Option<u8>,
    /// Creator slots.
    #[serde(default)]
    pub number_of_creators: Option<u32>,
    /// Submission deadline.
    #[serde(default)]
    pub deadline: Option<String>,
}

impl CreateCampaignRequest {
    /// Validates the name, budget and enum codes.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] on a blank name, non-positive
    /// budget or unknown code.
    pub fn validate(&self) -> Result<(), ApiError> {
        require_text("name", &self.name)?;
        if !(self.creator_budget.is_finite() && self.creator_budget > 0.0) {
            return Err(ApiError::Validation(
                "creatorBudget must be a positive number".to_string(),
            ));
        }
        check_code("focusArea", EnumDomain::FocusArea, self.focus_area)?;
        if let Some(token) = self.budget_token {
            check_code("budgetToken", EnumDomain::PaymentToken, token)?;
        }
        if let Some(complexity) = self.complexity {
            check_code("complexity", EnumDomain::Complexity, complexity)?;
        }
        Ok(())
    }

    /// Amount locked in escrow for this campaign.
    #[must_use]
    pub fn total_locked(&self) -> f64 {
        self.creator_budget * ESCROW_LOCK_MULTIPLIER
    }
}

/// Escrow funding transaction for a new campaign.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CampaignCreated {
    /// New campaign identifier.
    pub campaign_id: Uuid,
    /// Escrow funding transaction.
    pub transaction_hash: String,
    /// Always `PENDING` until confirmed.
    pub status: String,
    /// Expected confirmation time in seconds.
    pub estimated_confirmation_time: u32,
    /// Amount locked in escrow.
    pub total_locked: f64,
}

/// Request body for `PUT /api/project/campaigns/{id}`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCampaignRequest {
    /// New name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New deadline.
    pub deadline: Option<String>,
}

/// Result of pausing or resuming a campaign.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CampaignStatusChange {
    /// Human-readable outcome.
    pub message: String,
    /// New status name.
    pub status: String,
}

/// Request body for `POST /api/project/campaigns/{id}/extend`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtendCampaignRequest {
    /// New end date.
    pub new_end_date: String,
}

/// Result of extending a campaign.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CampaignExtended {
    /// Human-readable outcome.
    pub message: String,
    /// New end date.
    pub new_end_date: String,
}

/// Request body for `POST /api/project/campaigns/{id}/invite`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InviteCreatorsRequest {
    /// Creators to invite.
    pub creator_ids: Vec<String>,
}

/// Result of sending invitations.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InvitationsSent {
    /// `"<n> invitations sent"`.
    pub message: String,
    /// Invited creator ids.
    pub invited: Vec<String>,
}

/// Query for `GET /api/project/campaigns/{id}/export`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ExportQuery {
    /// Report format, e.g. `CSV` or `PDF`.
    pub format: String,
}

/// Report export ticket.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExportReport {
    /// Human-readable outcome.
    pub message: String,
    /// Requested format.
    pub format: String,
    /// Where the report will be available.
    pub download_url: String,
}

impl ExportReport {
    /// Builds the ticket for `campaign_id` in `format`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] on a blank format.
    pub fn new(campaign_id: &Uuid, format: String) -> Result<Self, ApiError> {
        require_text("format", &format)?;
        let download_url = format!(
            "/downloads/campaign-{campaign_id}.{}",
            format.trim().to_lowercase()
        );
        Ok(Self {
            message: "Report generation initiated".to_string(),
            format,
            download_url,
        })
    }
}

/// Escrow budget usage.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BudgetStatus {
    /// Total budget.
    pub total: f64,
    /// Remaining budget.
    pub remaining: f64,
    /// Released budget.
    pub spent: f64,
    /// `spent / total`, percent.
    pub percentage_used: f64,
}

/// Application funnel.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationFunnel {
    /// Applications received.
    pub received: u32,
    /// Applications approved.
    pub approved: u32,
    /// Applications awaiting review.
    pub pending_review: u32,
    /// Applications rejected.
    pub rejected: u32,
}

/// Timeline progress.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CampaignProgress {
    /// `CampaignStatus` code.
    pub status: u8,
    /// Days since launch.
    pub days_elapsed: u32,
    /// Planned length in days.
    pub days_total: u32,
    /// `days_elapsed / days_total`, percent.
    pub percentage_complete: u32,
    /// End date.
    pub end_date: String,
}

/// Campaign CVPI snapshot.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CvpiSnapshot {
    /// Current score.
    pub current: f64,
    /// Classification label.
    pub classification: String,
    /// Change since last period.
    pub trend: f64,
}

/// Headline metrics of one campaign.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CampaignMetrics {
    /// Escrow budget usage.
    pub budget_status: BudgetStatus,
    /// Application funnel.
    pub applications: ApplicationFunnel,
    /// Timeline progress.
    pub progress: CampaignProgress,
    /// CVPI snapshot.
    pub cvpi_score: CvpiSnapshot,
}

impl CampaignMetrics {
    /// Derives the metrics from a campaign record.
    #[must_use]
    pub fn for_campaign(campaign: &ProjectCampaign) -> Self {
        let total = campaign.budget_total;
        let spent = total - campaign.budget_remaining;
        let percentage_used = if total > 0.0 {
            spent / total * 100.0
        } else {
            0.0
        };

        let undecided = campaign
            .application_count
            .saturating_sub(campaign.approved_count);
        let pending_review = undecided.min(MAX_PENDING_REVIEW);

        let days_total = CAMPAIGN_LENGTH_DAYS;
        let days_elapsed = campaign
            .days_remaining
            .map_or(days_total, |left| days_total.saturating_sub(left));

        Self {
            budget_status: BudgetStatus {
                total,
                remaining: campaign.budget_remaining,
                spent,
                percentage_used,
            },
            applications: ApplicationFunnel {
                received: campaign.application_count,
                approved: campaign.approved_count,
                pending_review,
                rejected: undecided - pending_review,
            },
            progress: CampaignProgress {
                status: campaign.status,
                days_elapsed,
                days_total,
                percentage_complete: days_elapsed * 100 / days_total,
                end_date: campaign.end_date.clone(),
            },
            cvpi_score: CvpiSnapshot {
                current: campaign.cvpi_score,
                classification: campaign.cvpi_classification.clone(),
                trend: 3.2,
            },
        }
    }
}

/// Campaign brief.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CampaignBrief {
    /// Campaign name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Requested content formats.
    pub deliverable_requirements: Vec<String>,
    /// Style guidance for creators.
    pub content_guidelines: String,
}

/// Progress against one KPI.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct KpiProgress {
    /// KPI name.
    pub kpi_name: String,
    /// Target value.
    pub target: f64,
    /// Weight in the campaign score, percent.
    pub weight: u32,
    /// Average across deliverables so far.
    pub current_average: f64,
    /// `Exceeding` or `BelowTarget`.
    pub status: String,
}

/// Creator approved for a campaign.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApprovedCreator {
    /// Creator identifier.
    pub creator_id: Uuid,
    /// Display name.
    pub name: String,
    /// Avatar URL.
    pub avatar: String,
    /// Reputation score.
    pub reputation: f64,
    /// Agreed payment.
    pub payment: f64,
    /// `DeliverableStatus` code of the latest delivery.
    pub deliverable_status: u8,
    /// Contribution to the campaign CVPI.
    pub cvpi_contribution: f64,
}

/// Campaign overview.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CampaignOverview {
    /// Campaign identifier.
    pub campaign_id: Uuid,
    /// Campaign brief.
    pub details: CampaignBrief,
    /// KPI progress.
    pub kpi_targets: Vec<KpiProgress>,
    /// Approved creators.
    pub approved_creators: Vec<ApprovedCreator>,
}

/// Analytics headline figures.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    /// Total spend.
    pub total_spend: f64,
    /// Mean CVPI across creators.
    #[serde(rename = "avgCVPI")]
    pub avg_cvpi: f64,
    /// KPIs met, percent.
    pub kpi_success_rate: u32,
    /// Mean creator reputation.
    pub avg_creator_reputation: f64,
}

/// CVPI of one creator in the campaign.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatorCvpi {
    /// Creator name.
    pub creator_name: String,
    /// CVPI score.
    pub cvpi_score: f64,
    /// Classification label.
    pub classification: String,
}

/// KPI achievement on a date.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct KpiAchievement {
    /// Measurement date `YYYY-MM-DD`.
    pub date: String,
    /// KPI name.
    pub kpi_name: String,
    /// Achievement versus target, percent.
    pub achievement_percentage: u32,
}

/// Audience reach totals.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AudienceReach {
    /// Impressions.
    pub total_impressions: u64,
    /// Unique accounts reached.
    pub unique_reach: u64,
    /// Engagements.
    pub total_engagements: u64,
    /// Mean engagement rate, percent.
    pub avg_engagement_rate: f64,
}

/// Unit costs.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CostEfficiency {
    /// Cost per thousand impressions.
    #[serde(rename = "costPer1KImpressions")]
    pub cost_per_1k_impressions: f64,
    /// Cost per engagement.
    pub cost_per_engagement: f64,
    /// Cost per conversion.
    pub cost_per_conversion: f64,
}

/// Campaign analytics.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CampaignAnalytics {
    /// Headline figures.
    pub summary: AnalyticsSummary,
    /// Per-creator CVPI.
    pub cvpi_breakdown: Vec<CreatorCvpi>,
    /// KPI achievement over time.
    pub kpi_achievement: Vec<KpiAchievement>,
    /// Audience reach.
    pub audience_reach: AudienceReach,
    /// Unit costs.
    pub cost_efficiency: CostEfficiency,
}

/// Escrow contract balances.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EscrowOverview {
    /// Escrow contract address.
    pub smart_contract_address: String,
    /// Chain name.
    pub chain: String,
    /// Amount locked at launch.
    pub total_locked: f64,
    /// Amount released so far.
    pub total_released: f64,
    /// Amount still locked.
    pub remaining_balance: f64,
    /// Amount expected back at close.
    pub expected_refund: f64,
}

/// How the locked amount is allocated.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BudgetAllocation {
    /// Creator payouts.
    pub creator_payments: f64,
    /// Platform service fees.
    pub service_fees: f64,
    /// Oracle verification fees.
    pub oracle_fees: f64,
    /// Safety buffer.
    pub escrow_buffer: f64,
    /// Unallocated remainder.
    pub unused: f64,
}

/// One escrow payment.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EscrowPayment {
    /// Payment time.
    pub date: String,
    /// `CreatorPayment` or `ServiceFee`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Payee.
    pub recipient: String,
    /// Amount paid.
    pub amount: f64,
    /// Settlement status.
    pub status: String,
    /// Payment transaction.
    pub transaction_hash: String,
}

/// How the effective fee rate was reached.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeeBreakdown {
    /// Base rate, percent.
    pub base_rate: f64,
    /// Complexity multiplier.
    pub complexity_multiplier: f64,
    /// Reputation discount, percent.
    pub reputation_discount: f64,
    /// Token payment discount, percent.
    pub token_payment_discount: f64,
    /// Resulting rate, percent.
    pub effective_rate: f64,
    /// Fees saved by discounts.
    pub total_saved: f64,
}

/// Campaign financials.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CampaignFinancials {
    /// Escrow balances.
    pub escrow_overview: EscrowOverview,
    /// Budget allocation.
    pub budget_allocation: BudgetAllocation,
    /// Payments so far.
    pub payment_history: Vec<EscrowPayment>,
    /// Fee computation.
    pub fee_breakdown: FeeBreakdown,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn campaign(days_remaining: Option<u32>) -> ProjectCampaign {
        ProjectCampaign {
            campaign_id: Uuid::new_v4(),
            name: "DeFi Protocol Launch".into(),
            focus_area: 1,
            status: 3,
            budget_total: 10_000.0,
            budget_remaining: 8000.0,
            application_count: 45,
            approved_count: 3,
            deliverable_count: 2,
            days_remaining,
            cvpi_score: 85.3,
            cvpi_classification: "Good".into(),
            progress_stage: "InProgress".into(),
            created_at: "2024-12-01T10:00:00Z".into(),
            end_date: "2025-01-15T23:59:59Z".into(),
        }
    }

    #[test]
    fn metrics_derive_from_record() {
        let metrics = CampaignMetrics::for_campaign(&campaign(Some(12)));
        assert!((metrics.budget_status.spent - 2000.0).abs() < 1e-9);
        assert!((metrics.budget_status.percentage_used - 20.0).abs() < 1e-9);
        assert_eq!(metrics.applications.pending_review, 12);
        assert_eq!(metrics.applications.rejected, 30);
        assert_eq!(metrics.progress.days_elapsed, 18);
        assert_eq!(metrics.progress.percentage_complete, 60);
    }

    #[test]
    fn finished_campaign_is_complete() {
        let metrics = CampaignMetrics::for_campaign(&campaign(None));
        assert_eq!(metrics.progress.percentage_complete, 100);
    }

    #[test]
    fn create_request_locks_twelve_percent_more() {
        let req = CreateCampaignRequest {
            name: "Launch".into(),
            focus_area: 1,
            creator_budget: 10_000.0,
            budget_token: None,
            complexity: Some(2),
            number_of_creators: None,
            deadline: None,
        };
        assert!(req.validate().is_ok());
        assert!((req.total_locked() - 11_200.0).abs() < 1e-6);
    }

    #[test]
    fn create_request_rejects_bad_codes_and_budget() {
        let base = CreateCampaignRequest {
            name: "Launch".into(),
            focus_area: 1,
            creator_budget: 100.0,
            budget_token: Some(5),
            complexity: None,
            number_of_creators: None,
            deadline: None,
        };
        assert!(base.validate().is_err());
        let zero = CreateCampaignRequest {
            budget_token: None,
            creator_budget: 0.0,
            ..base
        };
        assert!(zero.validate().is_err());
    }

    #[test]
    fn export_url_uses_lowercase_extension() {
        let id = Uuid::nil();
        let Ok(report) = ExportReport::new(&id, "CSV".into()) else {
            panic!("valid format");
        };
        assert_eq!(
            report.download_url,
            "/downloads/campaign-00000000-0000-0000-0000-000000000000.csv"
        );
        assert!(ExportReport::new(&id, " ".into()).is_err());
    }
}
