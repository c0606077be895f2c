//! Creator-side DTOs: profile, campaigns, applications, deliverables,
//! earnings, CVPI and certificates.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use super::common_dto::{check_code, require_text};
use crate::domain::enums::EnumDomain;
use crate::domain::listing::PageInfo;
use crate::domain::records::CampaignSummary;
use crate::domain::time_series::{CvpiPoint, EarningsPoint};
use crate::error::ApiError;
use crate::service::{ApplicationDraft, DeliverableDraft};

/// Request body for `PUT /api/creator/profile/me`. Absent fields keep
/// their current value.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    /// New display name.
    pub display_name: Option<String>,
    /// New avatar URL.
    pub avatar: Option<String>,
    /// New biography.
    pub bio: Option<String>,
    /// New `FocusArea` codes.
    pub focus_area: Option<Vec<u8>>,
}

impl UpdateProfileRequest {
    /// Validates every focus-area code.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] on an unknown focus area.
    pub fn validate(&self) -> Result<(), ApiError> {
        self.focus_area
            .iter()
            .flatten()
            .try_for_each(|code| check_code("focusArea", EnumDomain::FocusArea, *code))
    }
}

/// Request body for `POST /api/creator/profile/social-verification`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SocialVerificationRequest {
    /// `SocialPlatform` code.
    pub platform: u8,
    /// Account handle to verify.
    pub handle: String,
}

impl SocialVerificationRequest {
    /// Validates the platform and handle.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] on an unknown platform or blank handle.
    pub fn validate(&self) -> Result<(), ApiError> {
        check_code("platform", EnumDomain::SocialPlatform, self.platform)?;
        require_text("handle", &self.handle)
    }
}

/// Social verification ticket.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SocialVerification {
    /// `SocialPlatform` code.
    pub platform: u8,
    /// Handle being verified.
    pub handle: String,
    /// Always `PENDING`.
    pub verification_status: String,
    /// Next steps for the creator.
    pub message: String,
}

/// Paginated creator campaign list.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CampaignPage {
    /// Campaigns on this page.
    pub campaigns: Vec<CampaignSummary>,
    /// Pagination metadata.
    pub pagination: PageInfo,
}

/// Request body for `POST /api/creator/applications`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewApplicationRequest {
    /// Target campaign.
    pub campaign_id: String,
    /// Proposed rate.
    pub proposed_rate: f64,
    /// Proposal text.
    pub proposal: String,
    /// Portfolio URLs.
    #[serde(default)]
    pub portfolio_links: Vec<String>,
    /// Relevant experience summary.
    #[serde(default)]
    pub relevant_experience: String,
    /// Estimated completion in days.
    pub estimated_completion_days: u32,
}

impl NewApplicationRequest {
    /// Converts into a service draft.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] on a negative rate or blank proposal.
    pub fn into_draft(self) -> Result<ApplicationDraft, ApiError> {
        if !(self.proposed_rate.is_finite() && self.proposed_rate >= 0.0) {
            return Err(ApiError::Validation(
                "proposedRate must be a non-negative number".to_string(),
            ));
        }
        require_text("proposal", &self.proposal)?;
        Ok(ApplicationDraft {
            campaign_id: self.campaign_id,
            proposed_rate: self.proposed_rate,
            proposal: self.proposal,
            portfolio_links: self.portfolio_links,
            relevant_experience: self.relevant_experience,
            estimated_completion_days: self.estimated_completion_days,
        })
    }
}

/// Request body for `POST /api/creator/deliverables`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewDeliverableRequest {
    /// Campaign delivered for.
    pub campaign_id: String,
    /// Content URL.
    pub content_url: String,
    /// `DeliverableType` code.
    pub deliverable_type: u8,
    /// `SocialPlatform` code.
    pub platform: u8,
    /// Optional notes for the reviewer.
    #[serde(default)]
    pub description: Option<String>,
}

impl NewDeliverableRequest {
    /// Converts into a service draft.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] on unknown codes or a blank URL.
    pub fn into_draft(self) -> Result<DeliverableDraft, ApiError> {
        require_text("contentUrl", &self.content_url)?;
        check_code(
            "deliverableType",
            EnumDomain::DeliverableType,
            self.deliverable_type,
        )?;
        check_code("platform", EnumDomain::SocialPlatform, self.platform)?;
        Ok(DeliverableDraft {
            campaign_id: self.campaign_id,
            content_url: self.content_url,
            deliverable_type: self.deliverable_type,
            platform: self.platform,
        })
    }
}

/// Earnings totals.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EarningsSummary {
    /// Lifetime earnings.
    pub total_earned: f64,
    /// Payments awaiting release.
    pub pending_payments: f64,
    /// Withdrawable balance.
    pub available_balance: f64,
    /// Settlement currency.
    pub currency: String,
    /// Average return on investment, percent.
    #[serde(rename = "averageROI")]
    pub average_roi: f64,
    /// Period-over-period growth, percent.
    pub growth_rate: f64,
}

/// Query for `GET /api/creator/earnings/history`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EarningsHistoryQuery {
    /// `EarningsRange` code; unknown codes fall back to 3 (Monthly).
    pub range: Option<String>,
}

/// Generated earnings series.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EarningsHistory {
    /// Points, oldest first.
    pub data: Vec<EarningsPoint>,
    /// Resolved `EarningsRange` code.
    pub range: u8,
    /// Sum of the point amounts.
    pub total_amount: f64,
    /// First point time.
    pub period_start: String,
    /// Last point time.
    pub period_end: String,
}

impl EarningsHistory {
    /// Summarizes a generated series.
    #[must_use]
    pub fn new(range: u8, data: Vec<EarningsPoint>) -> Self {
        let total_amount = data.iter().map(|p| p.amount).sum();
        let (period_start, period_end) = match (data.first(), data.last()) {
            (Some(first), Some(last)) => (first.timestamp.clone(), last.timestamp.clone()),
            _ => (String::new(), String::new()),
        };
        Self {
            data,
            range,
            total_amount,
            period_start,
            period_end,
        }
    }
}

/// CVPI component scores.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CvpiComponents {
    /// Engagement score.
    pub engagement: f64,
    /// Reach score.
    pub reach: f64,
    /// Conversion score.
    pub conversion: f64,
    /// Posting consistency score.
    pub consistency: f64,
    /// Content quality score.
    pub quality: f64,
}

/// Reputation summary.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReputationSummary {
    /// Reputation score.
    pub score: f64,
    /// Tier name.
    pub tier: String,
    /// Number of project reviews.
    pub total_reviews: u32,
    /// Mean review rating out of 5.
    pub average_rating: f64,
}

/// Current CVPI score of the signed-in creator.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CvpiScore {
    /// Creator identifier.
    pub user_id: Uuid,
    /// Weighted overall score.
    pub overall_score: f64,
    /// Component scores.
    pub components: CvpiComponents,
    /// Reputation summary.
    pub reputation: ReputationSummary,
    /// `UP`, `DOWN` or `FLAT`.
    pub trend: String,
    /// Percentile among all creators.
    pub percentile: u32,
    /// Score computation time.
    pub last_updated: String,
}

/// Query for `GET /api/creator/cvpi/history`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CvpiHistoryQuery {
    /// `TimePeriod` code; unknown codes fall back to 2 (30d).
    pub period: Option<String>,
    /// Maximum number of points. Defaults to 30.
    pub limit: Option<String>,
}

/// Generated CVPI series.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CvpiHistory {
    /// Points, oldest first, ending today.
    pub history: Vec<CvpiPoint>,
    /// Resolved `TimePeriod` code.
    pub period: u8,
    /// Effective point limit.
    pub limit: u32,
}

/// Campaign a certificate was earned in.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RelatedCampaign {
    /// Campaign identifier.
    pub campaign_id: Uuid,
    /// Campaign title.
    pub campaign_title: String,
    /// Project name.
    pub project_name: String,
}

/// Achievement certificate.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    /// Certificate identifier.
    pub certificate_id: Uuid,
    /// Award category.
    pub certificate_type: String,
    /// Certificate title.
    pub title: String,
    /// Issue date `YYYY-MM-DD`.
    pub issue_date: String,
    /// Rendered certificate image.
    pub image_url: String,
    /// Campaign the award relates to.
    pub related_campaign: RelatedCampaign,
    /// Free-form achievement details.
    pub metadata: BTreeMap<String, String>,
}

/// Certificates of the signed-in creator.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CertificateList {
    /// Certificates, newest first.
    pub certificates: Vec<Certificate>,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn earnings_history_totals_and_bounds() {
        let data = vec![
            EarningsPoint {
                timestamp: "2025-01-01T00:00:00.000Z".into(),
                amount: 100.5,
                transaction_count: 1,
            },
            EarningsPoint {
                timestamp: "2025-02-01T00:00:00.000Z".into(),
                amount: 200.0,
                transaction_count: 3,
            },
        ];
        let history = EarningsHistory::new(3, data);
        assert!((history.total_amount - 300.5).abs() < 1e-9);
        assert_eq!(history.period_start, "2025-01-01T00:00:00.000Z");
        assert_eq!(history.period_end, "2025-02-01T00:00:00.000Z");
    }

    #[test]
    fn deliverable_codes_are_validated() {
        let req = NewDeliverableRequest {
            campaign_id: "c".into(),
            content_url: "https://x.com/p/1".into(),
            deliverable_type: 9,
            platform: 1,
            description: None,
        };
        assert!(matches!(req.into_draft(), Err(ApiError::Validation(_))));
    }

    #[test]
    fn profile_focus_areas_are_validated() {
        let ok = UpdateProfileRequest {
            focus_area: Some(vec![1, 9]),
            ..UpdateProfileRequest::default()
        };
        assert!(ok.validate().is_ok());
        let bad = UpdateProfileRequest {
            focus_area: Some(vec![1, 10]),
            ..UpdateProfileRequest::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn application_rate_must_be_non_negative() {
        let req = NewApplicationRequest {
            campaign_id: "c".into(),
            proposed_rate: -1.0,
            proposal: "hi".into(),
            portfolio_links: vec![],
            relevant_experience: String::new(),
            estimated_completion_days: 3,
        };
        assert!(req.into_draft().is_err());
    }
}
