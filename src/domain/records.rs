//! Fixture record types.
//!
//! Records are plain data serialized in camelCase. Numeric `status`,
//! `platform`, `focusArea` and similar fields carry codes from
//! [`super::enums::EnumDomain`] tables.

use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::listing::Listing;
use super::match_rate::CampaignRequirements;

/// Records addressable by a UUID path parameter.
pub trait Identified {
    /// The record identifier.
    fn id(&self) -> Uuid;
}

/// A linked social account.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SocialAccount {
    /// `SocialPlatform` code.
    pub platform: u8,
    /// Account handle.
    pub handle: String,
    /// Profile URL.
    pub link: String,
    /// Follower count.
    pub followers: u64,
    /// Whether ownership was verified.
    pub verified: bool,
    /// Verification time.
    pub verified_at: Option<String>,
}

/// Follower count on one platform.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SocialStat {
    /// `SocialPlatform` code.
    pub platform: u8,
    /// Follower count.
    pub followers: u64,
}

/// Public project information attached to a campaign.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    /// Project identifier.
    pub project_id: Uuid,
    /// Display name.
    pub project_name: String,
    /// Avatar URL.
    pub project_avatar: String,
    /// Website URL.
    pub website: String,
    /// Official social channels.
    pub social_channels: Vec<SocialAccount>,
}

/// Escrow payment terms of a campaign.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentTerms {
    /// How creators are paid.
    pub payment_method: String,
    /// When payments are released.
    pub payment_schedule: String,
    /// What must hold for a payment to release.
    pub payment_conditions: String,
}

/// A campaign as seen by creators.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    /// Campaign identifier.
    pub campaign_id: Uuid,
    /// Owning project.
    pub project_id: Uuid,
    /// Campaign title.
    pub title: String,
    /// Long description.
    pub description: String,
    /// Marketing objective.
    pub objective: String,
    /// `FocusArea` code.
    pub focus_area: u8,
    /// `CampaignStatus` code.
    pub status: u8,
    /// Creator budget.
    pub budget_amount: f64,
    /// `PaymentToken` code of the budget.
    pub budget_token: u8,
    /// Creator slots.
    pub number_of_creators: u32,
    /// Applications received.
    pub number_of_applicants: u32,
    /// Deliverables requested.
    pub number_of_deliveries: u32,
    /// Submission deadline.
    pub deadline: String,
    /// `Complexity` code.
    pub complexity: u8,
    /// KPI name → target.
    pub kpi_targets: BTreeMap<String, f64>,
    /// Minimum creator reputation.
    pub required_reputation: f64,
    /// Owning project details.
    pub project_info: ProjectInfo,
    /// Escrow payment terms.
    pub payment_terms: PaymentTerms,
    /// Creation time.
    pub created_at: String,
    /// Last update time.
    pub updated_at: String,
}

impl Campaign {
    /// Match-rate inputs for this campaign.
    #[must_use]
    pub fn requirements(&self) -> CampaignRequirements<'_> {
        CampaignRequirements {
            required_reputation: Some(self.required_reputation),
            focus_area: self.focus_area,
            kpi_targets: Some(&self.kpi_targets),
        }
    }
}

impl Identified for Campaign {
    fn id(&self) -> Uuid {
        self.campaign_id
    }
}

impl Listing for Campaign {
    fn focus_areas(&self) -> &[u8] {
        std::slice::from_ref(&self.focus_area)
    }

    fn budget(&self) -> Option<f64> {
        Some(self.budget_amount)
    }

    fn title(&self) -> &str {
        &self.title
    }
}

/// Campaign list row with the viewer's match rate.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CampaignSummary {
    /// Campaign identifier.
    pub campaign_id: Uuid,
    /// Owning project.
    pub project_id: Uuid,
    /// Campaign title.
    pub title: String,
    /// `FocusArea` code.
    pub focus_area: u8,
    /// `CampaignStatus` code.
    pub status: u8,
    /// Creator budget.
    pub budget_amount: f64,
    /// `PaymentToken` code.
    pub budget_token: u8,
    /// Applications received.
    pub number_of_applicants: u32,
    /// Deliverables requested.
    pub number_of_deliveries: u32,
    /// Submission deadline.
    pub deadline: String,
    /// KPI name → target.
    pub kpi_targets: BTreeMap<String, f64>,
    /// Minimum creator reputation.
    pub required_reputation: f64,
    /// Match rate for the signed-in creator.
    pub match_rate: Option<f64>,
    /// Project avatar URL.
    pub project_avatar: String,
    /// Creation time.
    pub created_at: String,
    /// Last update time.
    pub updated_at: String,
}

impl CampaignSummary {
    /// Projects a campaign into a list row.
    #[must_use]
    pub fn new(campaign: &Campaign, match_rate: Option<f64>) -> Self {
        Self {
            campaign_id: campaign.campaign_id,
            project_id: campaign.project_id,
            title: campaign.title.clone(),
            focus_area: campaign.focus_area,
            status: campaign.status,
            budget_amount: campaign.budget_amount,
            budget_token: campaign.budget_token,
            number_of_applicants: campaign.number_of_applicants,
            number_of_deliveries: campaign.number_of_deliveries,
            deadline: campaign.deadline.clone(),
            kpi_targets: campaign.kpi_targets.clone(),
            required_reputation: campaign.required_reputation,
            match_rate,
            project_avatar: campaign.project_info.project_avatar.clone(),
            created_at: campaign.created_at.clone(),
            updated_at: campaign.updated_at.clone(),
        }
    }
}

/// Full campaign with the viewer's match rate.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CampaignDetail {
    /// Campaign fields.
    #[serde(flatten)]
    pub campaign: Campaign,
    /// Match rate for the signed-in creator.
    pub match_rate: Option<f64>,
}

/// Anonymous marketplace listing.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicCampaign {
    /// Campaign identifier.
    pub campaign_id: Uuid,
    /// Campaign title.
    pub title: String,
    /// `FocusArea` code.
    pub focus_area: u8,
    /// Creator budget.
    pub budget_amount: f64,
    /// `PaymentToken` code.
    pub budget_token: u8,
    /// Submission deadline.
    pub deadline: String,
}

impl From<&Campaign> for PublicCampaign {
    fn from(c: &Campaign) -> Self {
        Self {
            campaign_id: c.campaign_id,
            title: c.title.clone(),
            focus_area: c.focus_area,
            budget_amount: c.budget_amount,
            budget_token: c.budget_token,
            deadline: c.deadline.clone(),
        }
    }
}

/// A campaign as seen by the owning project.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCampaign {
    /// Campaign identifier.
    pub campaign_id: Uuid,
    /// Campaign name.
    pub name: String,
    /// `FocusArea` code.
    pub focus_area: u8,
    /// `CampaignStatus` code.
    pub status: u8,
    /// Total creator budget.
    pub budget_total: f64,
    /// Budget still in escrow.
    pub budget_remaining: f64,
    /// Applications received.
    pub application_count: u32,
    /// Applications approved.
    pub approved_count: u32,
    /// Deliverables submitted.
    pub deliverable_count: u32,
    /// Days until the end date, `null` once finished.
    pub days_remaining: Option<u32>,
    /// Campaign CVPI score.
    pub cvpi_score: f64,
    /// CVPI classification label.
    pub cvpi_classification: String,
    /// Progress stage label.
    pub progress_stage: String,
    /// Creation time.
    pub created_at: String,
    /// End date.
    pub end_date: String,
}

impl Identified for ProjectCampaign {
    fn id(&self) -> Uuid {
        self.campaign_id
    }
}

impl Listing for ProjectCampaign {
    fn focus_areas(&self) -> &[u8] {
        std::slice::from_ref(&self.focus_area)
    }

    fn budget(&self) -> Option<f64> {
        Some(self.budget_total)
    }

    fn title(&self) -> &str {
        &self.name
    }
}

/// A creator's own application.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatorApplication {
    /// Application identifier.
    pub application_id: Uuid,
    /// Target campaign.
    pub campaign_id: Uuid,
    /// Target campaign title.
    pub campaign_title: String,
    /// Applicant.
    pub creator_id: Uuid,
    /// Proposed rate.
    pub proposed_rate: f64,
    /// Proposal text.
    pub proposal: String,
    /// `ApplicationStatus` code.
    pub status: u8,
    /// Portfolio URLs.
    pub portfolio_links: Vec<String>,
    /// Relevant experience summary.
    pub relevant_experience: String,
    /// Estimated completion in days.
    pub estimated_completion_days: u32,
    /// Match score at application time.
    pub match_score: f64,
    /// Submission time.
    pub applied_at: String,
    /// Review time, `null` while pending.
    pub reviewed_at: Option<String>,
}

impl Identified for CreatorApplication {
    fn id(&self) -> Uuid {
        self.application_id
    }
}

/// A portfolio entry attached to an application.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PortfolioLink {
    /// Content URL.
    pub url: String,
    /// Content title.
    pub title: String,
    /// Short description.
    pub description: String,
}

/// An application as seen by the project reviewing it.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectApplication {
    /// Application identifier.
    pub application_id: Uuid,
    /// Target campaign.
    pub campaign_id: Uuid,
    /// Target campaign name.
    pub campaign_name: String,
    /// Applicant.
    pub creator_id: Uuid,
    /// Applicant display name.
    pub creator_name: String,
    /// Applicant avatar URL.
    pub creator_avatar: String,
    /// Applicant reputation.
    pub reputation: f64,
    /// Reputation tier letter.
    pub reputation_tier: String,
    /// Average CVPI across past campaigns.
    #[serde(rename = "avgCVPI")]
    pub avg_cvpi: f64,
    /// CVPI classification label.
    pub cvpi_classification: String,
    /// Follower counts per platform.
    pub social_stats: Vec<SocialStat>,
    /// Campaigns completed.
    pub campaigns_completed: u32,
    /// Success rate percentage.
    pub success_rate: u32,
    /// Cover message.
    pub application_message: String,
    /// Portfolio entries.
    pub portfolio_links: Vec<PortfolioLink>,
    /// Submission time.
    pub applied_at: String,
    /// `ApplicationStatus` code.
    pub status: u8,
    /// Match score.
    pub match_score: f64,
}

impl Identified for ProjectApplication {
    fn id(&self) -> Uuid {
        self.application_id
    }
}

/// Engagement metrics of a published deliverable.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeliverableMetrics {
    /// Views.
    pub views: u64,
    /// Likes.
    pub likes: u64,
    /// Comments.
    pub comments: u64,
    /// Shares.
    pub shares: u64,
    /// Engagement rate percentage.
    pub engagement_rate: f64,
}

/// A piece of submitted content.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Deliverable {
    /// Deliverable identifier.
    pub deliverable_id: Uuid,
    /// Campaign delivered for.
    pub campaign_id: Uuid,
    /// Submitting creator.
    pub creator_id: Uuid,
    /// Content URL.
    pub content_url: String,
    /// `DeliverableType` code.
    pub deliverable_type: u8,
    /// `SocialPlatform` code.
    pub platform: u8,
    /// `DeliverableStatus` code.
    pub status: u8,
    /// Engagement metrics once published.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<DeliverableMetrics>,
    /// CVPI score once measured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvpi_score: Option<f64>,
    /// Payment due once verified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_amount: Option<f64>,
    /// Submission time.
    pub submitted_at: String,
    /// Verification time, `null` until verified.
    pub verified_at: Option<String>,
}

impl Identified for Deliverable {
    fn id(&self) -> Uuid {
        self.deliverable_id
    }
}

/// A creator as listed in project-side discovery.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatorCard {
    /// Creator identifier.
    pub creator_id: Uuid,
    /// Display name.
    pub display_name: String,
    /// Avatar URL.
    pub avatar: String,
    /// Short biography.
    pub bio: String,
    /// Reputation score.
    pub reputation: f64,
    /// Reputation tier letter.
    pub reputation_tier: String,
    /// Average CVPI across past campaigns.
    #[serde(rename = "avgCVPI")]
    pub avg_cvpi: f64,
    /// CVPI classification label.
    pub cvpi_classification: String,
    /// Follower counts per platform.
    pub social_stats: Vec<SocialStat>,
    /// Campaigns completed.
    pub campaigns_completed: u32,
    /// Success rate percentage.
    pub success_rate: u32,
    /// `FocusArea` codes the creator has worked in.
    pub vertical_experience: Vec<u8>,
    /// Projected CVPI for the project's next campaign.
    #[serde(rename = "estimatedCVPI")]
    pub estimated_cvpi: f64,
    /// Currently accepting work.
    pub available: bool,
}

impl Identified for CreatorCard {
    fn id(&self) -> Uuid {
        self.creator_id
    }
}

impl Listing for CreatorCard {
    fn focus_areas(&self) -> &[u8] {
        &self.vertical_experience
    }

    fn budget(&self) -> Option<f64> {
        None
    }

    fn title(&self) -> &str {
        &self.display_name
    }
}

/// The signed-in creator's profile.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatorProfile {
    /// User identifier.
    pub user_id: Uuid,
    /// Wallet address.
    pub wallet_address: String,
    /// Display name.
    pub display_name: String,
    /// Avatar URL.
    pub avatar: String,
    /// Short biography.
    pub bio: String,
    /// `FocusArea` codes.
    pub focus_area: Vec<u8>,
    /// Linked social accounts.
    pub social_accounts: Vec<SocialAccount>,
    /// Onboarding finished.
    pub profile_complete: bool,
    /// Registration time.
    pub created_at: String,
}
