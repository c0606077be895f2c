//! Marketplace service: fixture lookups, listings and generated data.

use std::sync::Arc;

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::FixtureStore;
use crate::domain::fees::{self, FeeInputs, FeeQuote};
use crate::domain::listing::{ListingFilter, Page, PageRequest, paginate};
use crate::domain::match_rate::match_rate;
use crate::domain::records::{
    Campaign, CampaignDetail, CampaignSummary, CreatorApplication, CreatorCard, Deliverable,
    ProjectApplication, ProjectCampaign, PublicCampaign,
};
use crate::domain::time_series::{self, CvpiPoint, EarningsPoint, EarningsRange, HistoryWindow};
use crate::domain::timestamp::now_iso8601;
use crate::domain::tx_hash::mock_tx_hash;
use crate::error::ApiError;

/// A new application as submitted by the signed-in creator.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationDraft {
    /// Target campaign id as supplied by the client.
    pub campaign_id: String,
    /// Proposed rate.
    pub proposed_rate: f64,
    /// Proposal text.
    pub proposal: String,
    /// Portfolio URLs.
    pub portfolio_links: Vec<String>,
    /// Relevant experience summary.
    pub relevant_experience: String,
    /// Estimated completion in days.
    pub estimated_completion_days: u32,
}

/// A new deliverable as submitted by the signed-in creator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliverableDraft {
    /// Campaign id as supplied by the client.
    pub campaign_id: String,
    /// Content URL.
    pub content_url: String,
    /// `DeliverableType` code.
    pub deliverable_type: u8,
    /// `SocialPlatform` code.
    pub platform: u8,
}

/// Filters accepted by the project application list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationFilter {
    /// Only applications to this campaign.
    pub campaign_id: Option<String>,
    /// Only applications with this `ApplicationStatus` code.
    pub status: Option<u8>,
}

/// Outcome of a bulk approve or reject.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewOutcome {
    /// Applications that were found and updated.
    pub success_count: u32,
    /// Ids that did not resolve to an application.
    pub failed_ids: Vec<String>,
    /// One message per failed id.
    pub errors: Vec<String>,
}

/// Orchestration layer for every marketplace endpoint.
///
/// Owns the read-only [`FixtureStore`] and the only piece of shared mutable
/// state: the random source used by the mock generators. The lock is held
/// for a single generation call.
#[derive(Debug)]
pub struct MarketplaceService {
    fixtures: Arc<FixtureStore>,
    rng: Mutex<StdRng>,
}

impl MarketplaceService {
    /// Creates a service over `fixtures`.
    ///
    /// With a `seed` the generated series and hashes repeat across runs.
    #[must_use]
    pub fn new(fixtures: Arc<FixtureStore>, seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Self {
            fixtures,
            rng: Mutex::new(rng),
        }
    }

    /// Returns the fixture store.
    #[must_use]
    pub fn fixtures(&self) -> &FixtureStore {
        &self.fixtures
    }

    fn summarize(&self, campaign: &Campaign) -> CampaignSummary {
        let creator = self.fixtures.creator_traits();
        let rate = match_rate(Some(&creator), Some(&campaign.requirements()));
        CampaignSummary::new(campaign, rate)
    }

    /// Open campaigns for the signed-in creator, filtered and paginated.
    #[must_use]
    pub fn creator_campaigns(
        &self,
        filter: &ListingFilter,
        page: PageRequest,
    ) -> Page<CampaignSummary> {
        let matched = filter.apply(&self.fixtures.open_campaigns);
        paginate(matched, page).map(|c| self.summarize(&c))
    }

    /// Full campaign with the signed-in creator's match rate.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if no campaign has this id.
    pub fn campaign_detail(&self, id: &str) -> Result<CampaignDetail, ApiError> {
        let campaign = self
            .fixtures
            .campaign(id)
            .ok_or_else(|| ApiError::not_found("campaign", id))?;
        let creator = self.fixtures.creator_traits();
        Ok(CampaignDetail {
            match_rate: match_rate(Some(&creator), Some(&campaign.requirements())),
            campaign: campaign.clone(),
        })
    }

    /// Trending campaigns with match rates.
    #[must_use]
    pub fn trending_campaigns(&self) -> Vec<CampaignSummary> {
        self.fixtures
            .trending_campaigns
            .iter()
            .map(|c| self.summarize(c))
            .collect()
    }

    /// Running campaigns with match rates.
    #[must_use]
    pub fn live_campaigns(&self) -> Vec<CampaignSummary> {
        self.fixtures
            .live_campaigns
            .iter()
            .map(|c| self.summarize(c))
            .collect()
    }

    /// Anonymous marketplace listing, filtered and paginated.
    #[must_use]
    pub fn public_campaigns(
        &self,
        filter: &ListingFilter,
        page: PageRequest,
    ) -> Page<PublicCampaign> {
        let matched = filter.apply(&self.fixtures.open_campaigns);
        paginate(matched, page).map(|c| PublicCampaign::from(&c))
    }

    /// Records a new application for one response; nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the campaign does not exist.
    pub fn submit_application(
        &self,
        draft: ApplicationDraft,
    ) -> Result<CreatorApplication, ApiError> {
        let campaign = self
            .fixtures
            .campaign(&draft.campaign_id)
            .ok_or_else(|| ApiError::not_found("campaign", draft.campaign_id.clone()))?;
        let creator = self.fixtures.creator_traits();
        let match_score =
            match_rate(Some(&creator), Some(&campaign.requirements())).unwrap_or_default();

        let application = CreatorApplication {
            application_id: Uuid::new_v4(),
            campaign_id: campaign.campaign_id,
            campaign_title: campaign.title.clone(),
            creator_id: self.fixtures.creator.user_id,
            proposed_rate: draft.proposed_rate,
            proposal: draft.proposal,
            status: 1,
            portfolio_links: draft.portfolio_links,
            relevant_experience: draft.relevant_experience,
            estimated_completion_days: draft.estimated_completion_days,
            match_score,
            applied_at: now_iso8601(),
            reviewed_at: None,
        };
        tracing::info!(
            application_id = %application.application_id,
            campaign_id = %application.campaign_id,
            match_score,
            "application submitted"
        );
        Ok(application)
    }

    /// Records a new deliverable for one response; nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the campaign does not exist.
    pub fn submit_deliverable(&self, draft: DeliverableDraft) -> Result<Deliverable, ApiError> {
        let campaign = self
            .fixtures
            .campaign(&draft.campaign_id)
            .ok_or_else(|| ApiError::not_found("campaign", draft.campaign_id.clone()))?;
        let deliverable = Deliverable {
            deliverable_id: Uuid::new_v4(),
            campaign_id: campaign.campaign_id,
            creator_id: self.fixtures.creator.user_id,
            content_url: draft.content_url,
            deliverable_type: draft.deliverable_type,
            platform: draft.platform,
            status: 1,
            metrics: None,
            cvpi_score: None,
            payment_amount: None,
            submitted_at: now_iso8601(),
            verified_at: None,
        };
        tracing::info!(
            deliverable_id = %deliverable.deliverable_id,
            campaign_id = %deliverable.campaign_id,
            "deliverable submitted"
        );
        Ok(deliverable)
    }

    /// One of the creator's applications.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] on an unknown id.
    pub fn creator_application(&self, id: &str) -> Result<&CreatorApplication, ApiError> {
        self.fixtures
            .creator_application(id)
            .ok_or_else(|| ApiError::not_found("application", id))
    }

    /// One of the creator's deliverables.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] on an unknown id.
    pub fn creator_deliverable(&self, id: &str) -> Result<&Deliverable, ApiError> {
        self.fixtures
            .creator_deliverable(id)
            .ok_or_else(|| ApiError::not_found("deliverable", id))
    }

    /// The project's campaigns, filtered and paginated.
    #[must_use]
    pub fn project_campaigns(
        &self,
        filter: &ListingFilter,
        page: PageRequest,
    ) -> Page<ProjectCampaign> {
        paginate(filter.apply(&self.fixtures.project_campaigns), page)
    }

    /// One of the project's campaigns.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] on an unknown id.
    pub fn project_campaign(&self, id: &str) -> Result<&ProjectCampaign, ApiError> {
        self.fixtures
            .project_campaign(id)
            .ok_or_else(|| ApiError::not_found("campaign", id))
    }

    /// Applications to the project's campaigns, filtered and paginated.
    #[must_use]
    pub fn project_applications(
        &self,
        filter: &ApplicationFilter,
        page: PageRequest,
    ) -> Page<ProjectApplication> {
        let wanted_campaign = filter
            .campaign_id
            .as_deref()
            .map(|id| Uuid::parse_str(id).ok());
        let matched: Vec<ProjectApplication> = self
            .fixtures
            .project_applications
            .iter()
            .filter(|a| wanted_campaign.is_none_or(|id| id == Some(a.campaign_id)))
            .filter(|a| filter.status.is_none_or(|s| s == a.status))
            .cloned()
            .collect();
        paginate(matched, page)
    }

    /// One application to the project's campaigns.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] on an unknown id.
    pub fn project_application(&self, id: &str) -> Result<&ProjectApplication, ApiError> {
        self.fixtures
            .project_application(id)
            .ok_or_else(|| ApiError::not_found("application", id))
    }

    /// Deliverables submitted under one application.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] on an unknown application id.
    pub fn application_deliverables(&self, id: &str) -> Result<Vec<Deliverable>, ApiError> {
        let application = self.project_application(id)?;
        Ok(self
            .fixtures
            .project_deliverables
            .iter()
            .filter(|d| {
                d.campaign_id == application.campaign_id && d.creator_id == application.creator_id
            })
            .cloned()
            .collect())
    }

    /// Approves or rejects applications in bulk. Nothing is stored.
    #[must_use]
    pub fn review_applications(&self, ids: &[String], approve: bool) -> ReviewOutcome {
        let mut outcome = ReviewOutcome::default();
        for id in ids {
            if self.fixtures.project_application(id).is_some() {
                outcome.success_count += 1;
            } else {
                outcome.failed_ids.push(id.clone());
                outcome.errors.push(format!("application {id} not found"));
            }
        }
        tracing::info!(
            approve,
            succeeded = outcome.success_count,
            failed = outcome.failed_ids.len(),
            "applications reviewed"
        );
        outcome
    }

    /// One deliverable submitted to the project.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] on an unknown id.
    pub fn project_deliverable(&self, id: &str) -> Result<&Deliverable, ApiError> {
        self.fixtures
            .project_deliverable(id)
            .ok_or_else(|| ApiError::not_found("deliverable", id))
    }

    /// Discoverable creators, filtered and paginated.
    #[must_use]
    pub fn discover_creators(
        &self,
        filter: &ListingFilter,
        page: PageRequest,
    ) -> Page<CreatorCard> {
        paginate(filter.apply(&self.fixtures.creators), page)
    }

    /// One discoverable creator.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] on an unknown id.
    pub fn creator_card(&self, id: &str) -> Result<&CreatorCard, ApiError> {
        self.fixtures
            .creator_card(id)
            .ok_or_else(|| ApiError::not_found("creator", id))
    }

    /// Quotes platform fees for a campaign budget.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] unless the budget is positive.
    pub fn estimate_fees(&self, inputs: FeeInputs) -> Result<FeeQuote, ApiError> {
        if !(inputs.campaign_budget.is_finite() && inputs.campaign_budget > 0.0) {
            return Err(ApiError::Validation(
                "campaignBudget must be a positive number".to_string(),
            ));
        }
        let quote = fees::estimate(inputs, Utc::now());
        tracing::debug!(quote_id = %quote.quote_id, total = quote.total_required, "fee quote");
        Ok(quote)
    }

    /// Generates an earnings series ending now.
    pub async fn earnings_history(&self, range: EarningsRange) -> Vec<EarningsPoint> {
        let mut rng = self.rng.lock().await;
        time_series::earnings_history(&mut *rng, range, Utc::now())
    }

    /// Generates a CVPI series ending today.
    pub async fn cvpi_history(&self, window: HistoryWindow, limit: u32) -> Vec<CvpiPoint> {
        let mut rng = self.rng.lock().await;
        time_series::cvpi_history(&mut *rng, window, limit, Utc::now())
    }

    /// Generates a mock transaction hash.
    pub async fn transaction_hash(&self) -> String {
        let mut rng = self.rng.lock().await;
        mock_tx_hash(&mut *rng)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn service() -> MarketplaceService {
        MarketplaceService::new(Arc::new(FixtureStore::new()), Some(7))
    }

    #[test]
    fn creator_campaigns_carry_match_rates() {
        let svc = service();
        let page = svc.creator_campaigns(&ListingFilter::default(), PageRequest::default());
        let rates: Vec<_> = page.items.iter().map(|c| c.match_rate).collect();
        // 87.5 clears every requirement; only Gaming is outside DeFi/NFT/DAO.
        assert_eq!(rates, vec![Some(100.0), Some(100.0), Some(84.0)]);
        assert_eq!(page.info.total_elements, 3);
    }

    #[test]
    fn creator_campaigns_category_filter() {
        let svc = service();
        let filter = ListingFilter {
            category: Some("gaming".to_string()),
            ..ListingFilter::default()
        };
        let page = svc.creator_campaigns(&filter, PageRequest::default());
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.info.total_pages, 1);
    }

    #[test]
    fn campaign_detail_resolves_every_list() {
        let svc = service();
        let ids: Vec<String> = svc
            .fixtures()
            .campaigns()
            .map(|c| c.campaign_id.to_string())
            .collect();
        for id in ids {
            assert!(svc.campaign_detail(&id).is_ok(), "{id}");
        }
        let Err(err) = svc.campaign_detail("missing") else {
            panic!("unknown id must miss");
        };
        assert_eq!(err.error_code(), "NOT_FOUND");
    }

    #[test]
    fn trending_empty_kpis_still_score() {
        let svc = service();
        let trending = svc.trending_campaigns();
        assert!(trending.iter().all(|c| c.match_rate.is_some()));
        assert_eq!(svc.live_campaigns().len(), 1);
    }

    #[test]
    fn submit_application_scores_against_campaign() {
        let svc = service();
        let Some(gaming) = svc.fixtures().open_campaigns.get(2) else {
            panic!("three open campaigns");
        };
        let draft = ApplicationDraft {
            campaign_id: gaming.campaign_id.to_string(),
            proposed_rate: 450.0,
            proposal: "Streams every weekend".to_string(),
            portfolio_links: vec![],
            relevant_experience: "Esports caster".to_string(),
            estimated_completion_days: 10,
        };
        let Ok(app) = svc.submit_application(draft) else {
            panic!("known campaign");
        };
        assert_eq!(app.campaign_id, gaming.campaign_id);
        assert_eq!(app.status, 1);
        assert!((app.match_score - 84.0).abs() < f64::EPSILON);
        assert!(app.reviewed_at.is_none());
    }

    #[test]
    fn submit_application_unknown_campaign() {
        let svc = service();
        let draft = ApplicationDraft {
            campaign_id: Uuid::new_v4().to_string(),
            proposed_rate: 1.0,
            proposal: String::new(),
            portfolio_links: vec![],
            relevant_experience: String::new(),
            estimated_completion_days: 1,
        };
        assert!(matches!(
            svc.submit_application(draft),
            Err(ApiError::NotFound { .. })
        ));
    }

    #[test]
    fn review_reports_unknown_ids() {
        let svc = service();
        let Some(known) = svc.fixtures().project_applications.first() else {
            panic!("fixture applications");
        };
        let ids = vec![known.application_id.to_string(), "ghost".to_string()];
        let outcome = svc.review_applications(&ids, true);
        assert_eq!(outcome.success_count, 1);
        assert_eq!(outcome.failed_ids, vec!["ghost".to_string()]);
        assert_eq!(outcome.errors.len(), 1);
    }

    #[test]
    fn application_filter_by_status_and_campaign() {
        let svc = service();
        let all = svc.project_applications(&ApplicationFilter::default(), PageRequest::default());
        assert_eq!(all.info.total_elements, 2);

        let accepted = ApplicationFilter {
            status: Some(2),
            ..ApplicationFilter::default()
        };
        let none = svc.project_applications(&accepted, PageRequest::default());
        assert!(none.items.is_empty());

        let bogus = ApplicationFilter {
            campaign_id: Some("not-a-uuid".to_string()),
            ..ApplicationFilter::default()
        };
        let none = svc.project_applications(&bogus, PageRequest::default());
        assert_eq!(none.info.total_elements, 0);
    }

    #[test]
    fn application_deliverables_follow_links() {
        let svc = service();
        let Some(first) = svc.fixtures().project_applications.first() else {
            panic!("fixture applications");
        };
        let id = first.application_id.to_string();
        let Ok(delivered) = svc.application_deliverables(&id) else {
            panic!("known application");
        };
        assert_eq!(delivered.len(), 1);
    }

    #[test]
    fn fee_estimate_rejects_non_positive_budget() {
        let svc = service();
        for budget in [0.0, -10.0, f64::NAN] {
            let inputs = FeeInputs {
                campaign_budget: budget,
                use_aw3_token: false,
            };
            assert!(matches!(
                svc.estimate_fees(inputs),
                Err(ApiError::Validation(_))
            ));
        }
        let Ok(quote) = svc.estimate_fees(FeeInputs {
            campaign_budget: 5000.0,
            use_aw3_token: false,
        }) else {
            panic!("valid budget");
        };
        assert!((quote.total_required - 5300.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn seeded_services_generate_identical_hashes() {
        let a = service();
        let b = service();
        assert_eq!(a.transaction_hash().await, b.transaction_hash().await);
    }

    #[tokio::test]
    async fn generated_series_have_expected_lengths() {
        let svc = service();
        assert_eq!(svc.earnings_history(EarningsRange::Hourly).await.len(), 25);
        assert_eq!(svc.cvpi_history(HistoryWindow::Month, 30).await.len(), 30);
    }
}
