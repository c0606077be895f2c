//! Project-side DTOs: dashboard, fees, applications, deliverables,
//! creator discovery and analytics.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use super::common_dto::{check_code, require_text};
use crate::domain::enums::EnumDomain;
use crate::domain::fees::FeeInputs;
use crate::domain::listing::{PageInfo, PageRequest, parse_positive_int};
use crate::domain::records::{CreatorCard, Deliverable, ProjectApplication};
use crate::error::ApiError;
use crate::service::{ApplicationFilter, ReviewOutcome};

/// Project dashboard headline figures.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDashboardStats {
    /// Campaigns currently active.
    pub active_campaigns: u32,
    /// Applications awaiting review.
    pub pending_applications: u32,
    /// Budget not yet committed.
    pub budget_available: f64,
    /// Deliverables awaiting verification.
    pub deliverables_submitted: u32,
    /// Campaigns ever created.
    pub total_campaigns: u32,
    /// Total spend.
    pub total_spent: f64,
    /// Project reputation score.
    pub reputation_score: f64,
    /// Reputation tier letter.
    pub reputation_tier: String,
    /// Mean campaign CVPI.
    #[serde(rename = "avgCampaignCVPI")]
    pub avg_campaign_cvpi: f64,
}

/// Request body for `POST /api/project/fees/estimate`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeeEstimateRequest {
    /// Creator budget to quote.
    pub campaign_budget: f64,
    /// Pay fees in AW3 for the discounted rate.
    #[serde(default, rename = "useAW3Token")]
    pub use_aw3_token: bool,
    /// `Complexity` code. Validated, not priced.
    #[serde(default)]
    pub complexity: Option<u8>,
    /// Creator slots. Validated, not priced.
    #[serde(default)]
    pub number_of_creators: Option<u32>,
}

impl FeeEstimateRequest {
    /// Validates the optional fields and returns the pricing inputs.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] on an unknown complexity or zero
    /// creators.
    pub fn into_inputs(self) -> Result<FeeInputs, ApiError> {
        if let Some(code) = self.complexity {
            check_code("complexity", EnumDomain::Complexity, code)?;
        }
        if self.number_of_creators == Some(0) {
            return Err(ApiError::Validation(
                "numberOfCreators must be at least 1".to_string(),
            ));
        }
        Ok(FeeInputs {
            campaign_budget: self.campaign_budget,
            use_aw3_token: self.use_aw3_token,
        })
    }
}

/// Query for `GET /api/project/applications`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct ApplicationListQuery {
    /// 0-based page index. Defaults to 0.
    pub page: Option<String>,
    /// Items per page. Defaults to 20.
    pub size: Option<String>,
    /// Only applications to this campaign.
    pub campaign_id: Option<String>,
    /// Only applications with this `ApplicationStatus` code.
    pub status: Option<String>,
}

impl ApplicationListQuery {
    /// Requested page window.
    #[must_use]
    pub fn page_request(&self) -> PageRequest {
        PageRequest::from_query(self.page.as_deref(), self.size.as_deref())
    }

    /// Application filters.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] if `status` is outside the
    /// `ApplicationStatus` table.
    pub fn filter(&self) -> Result<ApplicationFilter, ApiError> {
        let status = match self.status.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => {
                let code = parse_positive_int(Some(raw))
                    .and_then(|c| u8::try_from(c).ok())
                    .ok_or_else(|| {
                        ApiError::Validation(format!("status: invalid ApplicationStatus {raw}"))
                    })?;
                check_code("status", EnumDomain::ApplicationStatus, code)?;
                Some(code)
            }
        };
        Ok(ApplicationFilter {
            campaign_id: self
                .campaign_id
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            status,
        })
    }
}

/// Paginated project application list.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProjectApplicationPage {
    /// Applications on this page.
    pub applications: Vec<ProjectApplication>,
    /// Pagination metadata.
    pub pagination: PageInfo,
}

/// Request body for bulk approve and reject.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewApplicationsRequest {
    /// Applications to update.
    pub application_ids: Vec<String>,
}

/// Bulk review result.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResult {
    /// Applications updated.
    pub success_count: u32,
    /// Ids that did not resolve.
    pub failed_ids: Vec<String>,
    /// One message per failed id.
    pub errors: Vec<String>,
}

impl From<ReviewOutcome> for ReviewResult {
    fn from(outcome: ReviewOutcome) -> Self {
        Self {
            success_count: outcome.success_count,
            failed_ids: outcome.failed_ids,
            errors: outcome.errors,
        }
    }
}

/// Deliverable list.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeliverableList {
    /// Deliverables.
    pub deliverables: Vec<Deliverable>,
}

/// Oracle verification status.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OracleVerification {
    /// `Complete` or `Pending`.
    pub status: String,
    /// Verifying oracle node.
    pub verified_by: String,
    /// Verification time.
    pub verified_at: String,
}

/// Measured result for one KPI.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct KpiResult {
    /// KPI name.
    pub kpi: String,
    /// Target value.
    pub target: f64,
    /// Measured value.
    pub actual: f64,
    /// `actual / target`, percent.
    pub achievement: u32,
    /// `Met` or `Exceeded`.
    pub status: String,
}

/// A deliverable with the data a project needs to review it.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeliverableReview {
    /// Deliverable fields.
    #[serde(flatten)]
    pub deliverable: Deliverable,
    /// Submitting creator's name.
    pub creator_name: String,
    /// Oracle verification.
    pub oracle_verification: OracleVerification,
    /// KPI results.
    pub kpi_results: Vec<KpiResult>,
}

/// Payment released for a verified deliverable.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRelease {
    /// Human-readable outcome.
    pub message: String,
    /// Release transaction.
    pub transaction_hash: String,
    /// Amount released.
    pub amount: f64,
}

/// Request body for `POST /api/project/deliverables/{id}/request-revision`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RevisionRequest {
    /// What the creator should change.
    pub feedback: String,
}

impl RevisionRequest {
    /// Validates the feedback.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] on blank feedback.
    pub fn validate(&self) -> Result<(), ApiError> {
        require_text("feedback", &self.feedback)
    }
}

/// Revision requested.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RevisionRequested {
    /// Human-readable outcome.
    pub message: String,
    /// Feedback echoed to the creator.
    pub feedback: String,
}

/// Request body for `POST /api/project/deliverables/{id}/reject`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RejectDeliverableRequest {
    /// Why the deliverable is rejected.
    pub reason: String,
}

impl RejectDeliverableRequest {
    /// Validates the reason.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] on a blank reason.
    pub fn validate(&self) -> Result<(), ApiError> {
        require_text("reason", &self.reason)
    }
}

/// Deliverable rejected.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeliverableRejected {
    /// Human-readable outcome.
    pub message: String,
    /// Reason echoed to the creator.
    pub reason: String,
    /// A dispute was opened with the creator.
    pub dispute_initiated: bool,
}

/// Paginated creator discovery list.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreatorPage {
    /// Creators on this page.
    pub creators: Vec<CreatorCard>,
    /// Pagination metadata.
    pub pagination: PageInfo,
}

/// A creator suggested for the project's next campaign.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedCreator {
    /// Creator identifier.
    pub creator_id: Uuid,
    /// Display name.
    pub display_name: String,
    /// Average CVPI.
    #[serde(rename = "avgCVPI")]
    pub avg_cvpi: f64,
    /// Reputation score.
    pub reputation: f64,
    /// Why the creator is suggested.
    pub reason: String,
}

impl RecommendedCreator {
    /// Builds a suggestion from a discovery card.
    #[must_use]
    pub fn from_card(card: &CreatorCard) -> Self {
        let vertical = card
            .vertical_experience
            .first()
            .and_then(|code| EnumDomain::FocusArea.label(i64::from(*code)).ok())
            .unwrap_or("Web3");
        Self {
            creator_id: card.creator_id,
            display_name: card.display_name.clone(),
            avg_cvpi: card.avg_cvpi,
            reputation: card.reputation,
            reason: format!("Excellent performance in similar {vertical} campaigns"),
        }
    }
}

/// Suggested creators.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecommendedCreators {
    /// Suggestions, best first.
    pub creators: Vec<RecommendedCreator>,
}

/// Growth versus comparison groups, percent.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PeriodComparison {
    /// Versus the previous period.
    pub previous_period: f64,
    /// Versus the platform average.
    pub platform_average: f64,
    /// Versus the vertical average.
    pub vertical_average: f64,
}

/// Project analytics across all campaigns.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsOverview {
    /// Total spend.
    pub total_spend: f64,
    /// Mean CVPI.
    #[serde(rename = "avgCVPI")]
    pub avg_cvpi: f64,
    /// Campaigns that met their KPIs, percent.
    pub campaign_success_rate: u32,
    /// Accounts reached.
    pub total_reach: u64,
    /// Growth comparison.
    pub period_comparison: PeriodComparison,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn fee_request_flag_name_and_validation() {
        let Ok(req) = serde_json::from_str::<FeeEstimateRequest>(
            r#"{"campaignBudget": 5000, "useAW3Token": true, "complexity": 2}"#,
        ) else {
            panic!("valid body");
        };
        let Ok(inputs) = req.into_inputs() else {
            panic!("valid inputs");
        };
        assert!(inputs.use_aw3_token);

        let Ok(bad) = serde_json::from_str::<FeeEstimateRequest>(
            r#"{"campaignBudget": 5000, "complexity": 4}"#,
        ) else {
            panic!("valid body");
        };
        assert!(bad.into_inputs().is_err());
    }

    #[test]
    fn fee_request_requires_budget() {
        let parsed = serde_json::from_str::<FeeEstimateRequest>(r#"{"useAW3Token": true}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn application_query_status_filter() {
        let query = ApplicationListQuery {
            status: Some("2".into()),
            ..ApplicationListQuery::default()
        };
        let Ok(filter) = query.filter() else {
            panic!("2 is ACCEPTED");
        };
        assert_eq!(filter.status, Some(2));

        let bad = ApplicationListQuery {
            status: Some("7".into()),
            ..ApplicationListQuery::default()
        };
        assert!(bad.filter().is_err());
    }
}
