//! Read-only fixture store.
//!
//! Built once at startup with fresh v4 identifiers and shared behind an
//! `Arc`. Records cross-reference each other (applications point at real
//! campaign ids, project applications at real creator ids) so id lookups
//! issued from one list resolve in another.

use std::collections::BTreeMap;

use uuid::Uuid;

use super::match_rate::CreatorTraits;
use super::records::{
    Campaign, CreatorApplication, CreatorCard, CreatorProfile, Deliverable, DeliverableMetrics,
    Identified, PaymentTerms, PortfolioLink, ProjectApplication, ProjectCampaign, ProjectInfo,
    SocialAccount, SocialStat,
};

/// `CampaignStatus::ACTIVE`.
pub const STATUS_ACTIVE: u8 = 3;
/// `CampaignStatus::IN_PROGRESS`.
pub const STATUS_IN_PROGRESS: u8 = 4;
/// `CampaignStatus::COMPLETED`.
pub const STATUS_COMPLETED: u8 = 5;

const CREATOR_WALLET: &str = "0x742d35Cc6634C0532925a3b844Bc454e4438f44e";
const CREATOR_REPUTATION: f64 = 87.5;

/// Every fixture list served by the API.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    /// Signed-in creator.
    pub creator: CreatorProfile,
    /// Signed-in creator's reputation, used for match rates.
    pub creator_reputation: f64,
    /// Campaigns open for applications.
    pub open_campaigns: Vec<Campaign>,
    /// Campaigns featured as trending.
    pub trending_campaigns: Vec<Campaign>,
    /// Campaigns currently running.
    pub live_campaigns: Vec<Campaign>,
    /// Signed-in creator's applications.
    pub creator_applications: Vec<CreatorApplication>,
    /// Signed-in creator's deliverables.
    pub creator_deliverables: Vec<Deliverable>,
    /// Signed-in project.
    pub project: ProjectInfo,
    /// Signed-in project's campaigns.
    pub project_campaigns: Vec<ProjectCampaign>,
    /// Applications to the project's campaigns.
    pub project_applications: Vec<ProjectApplication>,
    /// Deliverables submitted to the project's campaigns.
    pub project_deliverables: Vec<Deliverable>,
    /// Creators available for discovery.
    pub creators: Vec<CreatorCard>,
}

impl FixtureStore {
    /// Builds the store with freshly generated identifiers.
    #[must_use]
    pub fn new() -> Self {
        let defimax = defimax_project();
        let artblock = project(
            "ArtBlock NFTs",
            "https://i.pravatar.cc/150?u=project2",
            "https://artblock.io",
            "@ArtBlockNFT",
            38_000,
        );
        let metagame = project(
            "MetaGame Arena",
            "https://i.pravatar.cc/150?u=project3",
            "https://metagame.gg",
            "@MetaGameArena",
            61_000,
        );

        let open_campaigns = vec![
            Campaign {
                campaign_id: Uuid::new_v4(),
                project_id: defimax.project_id,
                title: "DeFi Protocol Launch Campaign".into(),
                description: "Help us launch our revolutionary DeFi protocol with engaging content that educates and attracts users.".into(),
                objective: "Increase platform awareness and drive user signups through authentic creator content showcasing our unique features and benefits.".into(),
                focus_area: 1,
                status: STATUS_ACTIVE,
                budget_amount: 5000.0,
                budget_token: 1,
                number_of_creators: 10,
                number_of_applicants: 24,
                number_of_deliveries: 5,
                deadline: "2025-01-15T23:59:59Z".into(),
                complexity: 2,
                kpi_targets: kpis(&[
                    ("views", 50_000.0),
                    ("engagement", 5.0),
                    ("conversions", 500.0),
                ]),
                required_reputation: 75.0,
                project_info: defimax.clone(),
                payment_terms: escrow_terms(),
                created_at: "2024-12-01T10:00:00Z".into(),
                updated_at: "2024-12-10T10:00:00Z".into(),
            },
            Campaign {
                campaign_id: Uuid::new_v4(),
                project_id: artblock.project_id,
                title: "NFT Collection Promotion".into(),
                description:
                    "Showcase our generative art collection ahead of the public mint.".into(),
                objective:
                    "Build mint-day demand and grow the collector community on Discord.".into(),
                focus_area: 2,
                status: STATUS_ACTIVE,
                budget_amount: 3500.0,
                budget_token: 1,
                number_of_creators: 6,
                number_of_applicants: 18,
                number_of_deliveries: 8,
                deadline: "2025-01-20T23:59:59Z".into(),
                complexity: 1,
                kpi_targets: kpis(&[("views", 30_000.0), ("engagement", 4.0)]),
                required_reputation: 70.0,
                project_info: artblock.clone(),
                payment_terms: escrow_terms(),
                created_at: "2024-12-02T10:00:00Z".into(),
                updated_at: "2024-12-09T10:00:00Z".into(),
            },
            Campaign {
                campaign_id: Uuid::new_v4(),
                project_id: metagame.project_id,
                title: "Gaming Platform Beta Test".into(),
                description:
                    "Stream and review the closed beta of our on-chain battle arena.".into(),
                objective:
                    "Recruit beta testers and collect gameplay feedback before launch.".into(),
                focus_area: 3,
                status: STATUS_ACTIVE,
                budget_amount: 8000.0,
                budget_token: 1,
                number_of_creators: 8,
                number_of_applicants: 42,
                number_of_deliveries: 10,
                deadline: "2025-02-01T23:59:59Z".into(),
                complexity: 3,
                kpi_targets: kpis(&[("signups", 1000.0), ("engagement", 6.0)]),
                required_reputation: 80.0,
                project_info: metagame.clone(),
                payment_terms: escrow_terms(),
                created_at: "2024-12-03T10:00:00Z".into(),
                updated_at: "2024-12-08T10:00:00Z".into(),
            },
        ];

        let trending_campaigns = vec![
            Campaign {
                campaign_id: Uuid::new_v4(),
                project_id: defimax.project_id,
                title: "Viral DeFi Launch".into(),
                description:
                    "Amplify the launch of our lending market with short-form content.".into(),
                objective: "Reach one million impressions in the first launch week.".into(),
                focus_area: 1,
                status: STATUS_ACTIVE,
                budget_amount: 10_000.0,
                budget_token: 1,
                number_of_creators: 12,
                number_of_applicants: 67,
                number_of_deliveries: 15,
                deadline: "2025-01-25T23:59:59Z".into(),
                complexity: 2,
                kpi_targets: BTreeMap::new(),
                required_reputation: 85.0,
                project_info: defimax.clone(),
                payment_terms: escrow_terms(),
                created_at: "2024-12-08T10:00:00Z".into(),
                updated_at: "2024-12-10T10:00:00Z".into(),
            },
            Campaign {
                campaign_id: Uuid::new_v4(),
                project_id: artblock.project_id,
                title: "Trending NFT Drop".into(),
                description: "Cover the surprise drop of our second collection.".into(),
                objective: "Sell out the drop within 24 hours.".into(),
                focus_area: 2,
                status: STATUS_ACTIVE,
                budget_amount: 7500.0,
                budget_token: 1,
                number_of_creators: 8,
                number_of_applicants: 52,
                number_of_deliveries: 12,
                deadline: "2025-01-18T23:59:59Z".into(),
                complexity: 1,
                kpi_targets: BTreeMap::new(),
                required_reputation: 80.0,
                project_info: artblock.clone(),
                payment_terms: escrow_terms(),
                created_at: "2024-12-09T10:00:00Z".into(),
                updated_at: "2024-12-10T10:00:00Z".into(),
            },
        ];

        let live_campaigns = vec![Campaign {
            campaign_id: Uuid::new_v4(),
            project_id: metagame.project_id,
            title: "Live Gaming Tournament".into(),
            description: "Live-stream the season one tournament finals.".into(),
            objective: "Maximise concurrent viewers during the finals.".into(),
            focus_area: 3,
            status: STATUS_IN_PROGRESS,
            budget_amount: 6000.0,
            budget_token: 1,
            number_of_creators: 5,
            number_of_applicants: 35,
            number_of_deliveries: 20,
            deadline: "2025-01-30T23:59:59Z".into(),
            complexity: 2,
            kpi_targets: BTreeMap::new(),
            required_reputation: 75.0,
            project_info: metagame,
            payment_terms: escrow_terms(),
            created_at: "2024-12-05T10:00:00Z".into(),
            updated_at: "2024-12-10T10:00:00Z".into(),
        }];

        let creator = CreatorProfile {
            user_id: Uuid::new_v4(),
            wallet_address: CREATOR_WALLET.into(),
            display_name: "CryptoCreator".into(),
            avatar: "https://i.pravatar.cc/150?u=creator1".into(),
            bio: "Web3 content creator specializing in DeFi and NFT projects".into(),
            focus_area: vec![1, 2, 6],
            social_accounts: vec![
                SocialAccount {
                    platform: 1,
                    handle: "@cryptoinfluencer".into(),
                    link: "https://twitter.com/cryptoinfluencer".into(),
                    followers: 125_000,
                    verified: true,
                    verified_at: Some("2024-01-15T10:00:00Z".into()),
                },
                SocialAccount {
                    platform: 2,
                    handle: "@cryptovideos".into(),
                    link: "https://youtube.com/@cryptovideos".into(),
                    followers: 85_000,
                    verified: true,
                    verified_at: Some("2024-01-20T10:00:00Z".into()),
                },
            ],
            profile_complete: true,
            created_at: "2024-01-10T10:00:00Z".into(),
        };

        let creator_applications = creator_applications(creator.user_id, &open_campaigns);
        let creator_deliverables = creator_deliverables(creator.user_id, &open_campaigns);
        let creators = creator_cards();
        let project_campaigns = project_campaigns();
        let project_applications = project_applications(&project_campaigns, &creators);
        let project_deliverables = project_deliverables(&project_campaigns, &creators);

        Self {
            creator,
            creator_reputation: CREATOR_REPUTATION,
            open_campaigns,
            trending_campaigns,
            live_campaigns,
            creator_applications,
            creator_deliverables,
            project: defimax,
            project_campaigns,
            project_applications,
            project_deliverables,
            creators,
        }
    }

    /// Match-rate inputs for the signed-in creator.
    #[must_use]
    pub fn creator_traits(&self) -> CreatorTraits {
        CreatorTraits {
            reputation: self.creator_reputation,
            focus_areas: self.creator.focus_area.clone(),
        }
    }

    /// Every campaign visible to creators, in list order.
    pub fn campaigns(&self) -> impl Iterator<Item = &Campaign> {
        self.open_campaigns
            .iter()
            .chain(&self.trending_campaigns)
            .chain(&self.live_campaigns)
    }

    /// Finds a creator-visible campaign by id.
    #[must_use]
    pub fn campaign(&self, id: &str) -> Option<&Campaign> {
        let id = Uuid::parse_str(id).ok()?;
        self.campaigns().find(|c| c.campaign_id == id)
    }

    /// Finds one of the project's campaigns by id.
    #[must_use]
    pub fn project_campaign(&self, id: &str) -> Option<&ProjectCampaign> {
        find(&self.project_campaigns, id)
    }

    /// Finds one of the creator's applications by id.
    #[must_use]
    pub fn creator_application(&self, id: &str) -> Option<&CreatorApplication> {
        find(&self.creator_applications, id)
    }

    /// Finds an application to the project's campaigns by id.
    #[must_use]
    pub fn project_application(&self, id: &str) -> Option<&ProjectApplication> {
        find(&self.project_applications, id)
    }

    /// Finds one of the creator's deliverables by id.
    #[must_use]
    pub fn creator_deliverable(&self, id: &str) -> Option<&Deliverable> {
        find(&self.creator_deliverables, id)
    }

    /// Finds a deliverable submitted to the project by id.
    #[must_use]
    pub fn project_deliverable(&self, id: &str) -> Option<&Deliverable> {
        find(&self.project_deliverables, id)
    }

    /// Finds a discoverable creator by id.
    #[must_use]
    pub fn creator_card(&self, id: &str) -> Option<&CreatorCard> {
        find(&self.creators, id)
    }
}

impl Default for FixtureStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Looks up `id` in `items`. Malformed ids never match.
fn find<'a, T: Identified>(items: &'a [T], id: &str) -> Option<&'a T> {
    let id = Uuid::parse_str(id).ok()?;
    items.iter().find(|item| item.id() == id)
}

fn kpis(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
    pairs
        .iter()
        .map(|(name, target)| ((*name).to_string(), *target))
        .collect()
}

fn escrow_terms() -> PaymentTerms {
    PaymentTerms {
        payment_method: "USDC on Ethereum mainnet via smart contract escrow".into(),
        payment_schedule:
            "Milestone-based: 50% upon content approval, 50% after 7 days performance verification"
                .into(),
        payment_conditions:
            "Content must meet quality standards and achieve minimum 70% of target KPIs".into(),
    }
}

fn defimax_project() -> ProjectInfo {
    ProjectInfo {
        project_id: Uuid::new_v4(),
        project_name: "DefiMax Protocol".into(),
        project_avatar: "https://i.pravatar.cc/150?u=project1".into(),
        website: "https://defimax.io".into(),
        social_channels: vec![
            SocialAccount {
                platform: 1,
                handle: "@DefiMax".into(),
                link: "https://twitter.com/defimax".into(),
                followers: 45_000,
                verified: true,
                verified_at: Some("2024-01-01T00:00:00Z".into()),
            },
            SocialAccount {
                platform: 5,
                handle: "DefiMax Community".into(),
                link: "https://discord.gg/defimax".into(),
                followers: 12_000,
                verified: true,
                verified_at: Some("2024-01-01T00:00:00Z".into()),
            },
        ],
    }
}

fn project(name: &str, avatar: &str, website: &str, handle: &str, followers: u64) -> ProjectInfo {
    ProjectInfo {
        project_id: Uuid::new_v4(),
        project_name: name.into(),
        project_avatar: avatar.into(),
        website: website.into(),
        social_channels: vec![SocialAccount {
            platform: 1,
            handle: handle.into(),
            link: format!("https://twitter.com/{}", handle.trim_start_matches('@').to_lowercase()),
            followers,
            verified: true,
            verified_at: Some("2024-02-01T00:00:00Z".into()),
        }],
    }
}

fn creator_applications(creator_id: Uuid, campaigns: &[Campaign]) -> Vec<CreatorApplication> {
    let mut applications = Vec::new();
    if let Some(defi) = campaigns.first() {
        applications.push(CreatorApplication {
            application_id: Uuid::new_v4(),
            campaign_id: defi.campaign_id,
            campaign_title: defi.title.clone(),
            creator_id,
            proposed_rate: 500.0,
            proposal: "I have extensive experience promoting DeFi projects with proven track record..."
                .into(),
            status: 1,
            portfolio_links: vec![
                "https://youtube.com/video1".into(),
                "https://twitter.com/post1".into(),
            ],
            relevant_experience: "3 years in Web3 content creation".into(),
            estimated_completion_days: 7,
            match_score: 92.5,
            applied_at: "2024-12-08T10:00:00Z".into(),
            reviewed_at: None,
        });
    }
    if let Some(nft) = campaigns.get(1) {
        applications.push(CreatorApplication {
            application_id: Uuid::new_v4(),
            campaign_id: nft.campaign_id,
            campaign_title: nft.title.clone(),
            creator_id,
            proposed_rate: 400.0,
            proposal: "My audience loves NFT content...".into(),
            status: 2,
            portfolio_links: vec!["https://youtube.com/video2".into()],
            relevant_experience: "2 years NFT content".into(),
            estimated_completion_days: 5,
            match_score: 88.0,
            applied_at: "2024-12-05T10:00:00Z".into(),
            reviewed_at: Some("2024-12-07T10:00:00Z".into()),
        });
    }
    applications
}

fn video_metrics() -> DeliverableMetrics {
    DeliverableMetrics {
        views: 52_000,
        likes: 3200,
        comments: 450,
        shares: 280,
        engagement_rate: 7.5,
    }
}

fn creator_deliverables(creator_id: Uuid, campaigns: &[Campaign]) -> Vec<Deliverable> {
    campaigns
        .first()
        .map(|defi| Deliverable {
            deliverable_id: Uuid::new_v4(),
            campaign_id: defi.campaign_id,
            creator_id,
            content_url: "https://youtube.com/watch?v=abc123".into(),
            deliverable_type: 2,
            platform: 2,
            status: 3,
            metrics: Some(video_metrics()),
            cvpi_score: Some(88.5),
            payment_amount: Some(500.0),
            submitted_at: "2024-12-05T10:00:00Z".into(),
            verified_at: Some("2024-12-07T10:00:00Z".into()),
        })
        .into_iter()
        .collect()
}

fn project_campaigns() -> Vec<ProjectCampaign> {
    vec![
        ProjectCampaign {
            campaign_id: Uuid::new_v4(),
            name: "DeFi Protocol Launch".into(),
            focus_area: 1,
            status: STATUS_ACTIVE,
            budget_total: 10_000.0,
            budget_remaining: 8000.0,
            application_count: 45,
            approved_count: 3,
            deliverable_count: 2,
            days_remaining: Some(12),
            cvpi_score: 85.3,
            cvpi_classification: "Good".into(),
            progress_stage: "InProgress".into(),
            created_at: "2024-12-01T10:00:00Z".into(),
            end_date: "2025-01-15T23:59:59Z".into(),
        },
        ProjectCampaign {
            campaign_id: Uuid::new_v4(),
            name: "NFT Collection Drop".into(),
            focus_area: 2,
            status: STATUS_ACTIVE,
            budget_total: 7000.0,
            budget_remaining: 5500.0,
            application_count: 32,
            approved_count: 2,
            deliverable_count: 1,
            days_remaining: Some(18),
            cvpi_score: 78.6,
            cvpi_classification: "Good".into(),
            progress_stage: "Verification".into(),
            created_at: "2024-11-20T10:00:00Z".into(),
            end_date: "2025-01-20T23:59:59Z".into(),
        },
        ProjectCampaign {
            campaign_id: Uuid::new_v4(),
            name: "Gaming Partnership".into(),
            focus_area: 3,
            status: STATUS_COMPLETED,
            budget_total: 8500.0,
            budget_remaining: 0.0,
            application_count: 28,
            approved_count: 2,
            deliverable_count: 2,
            days_remaining: None,
            cvpi_score: 92.1,
            cvpi_classification: "Good".into(),
            progress_stage: "Completed".into(),
            created_at: "2024-10-15T10:00:00Z".into(),
            end_date: "2024-11-30T23:59:59Z".into(),
        },
    ]
}

fn creator_cards() -> Vec<CreatorCard> {
    vec![
        CreatorCard {
            creator_id: Uuid::new_v4(),
            display_name: "CryptoInfluencer".into(),
            avatar: "https://i.pravatar.cc/150?u=creator1".into(),
            bio: "Web3 content creator specializing in DeFi and NFT projects".into(),
            reputation: 850.0,
            reputation_tier: "A".into(),
            avg_cvpi: 68.5,
            cvpi_classification: "Excellent".into(),
            social_stats: vec![
                SocialStat {
                    platform: 1,
                    followers: 125_000,
                },
                SocialStat {
                    platform: 2,
                    followers: 85_000,
                },
            ],
            campaigns_completed: 42,
            success_rate: 95,
            vertical_experience: vec![1, 2],
            estimated_cvpi: 72.3,
            available: true,
        },
        CreatorCard {
            creator_id: Uuid::new_v4(),
            display_name: "BlockchainGuru".into(),
            avatar: "https://i.pravatar.cc/150?u=creator2".into(),
            bio: "Infrastructure deep-dives and protocol explainers".into(),
            reputation: 920.0,
            reputation_tier: "S".into(),
            avg_cvpi: 55.8,
            cvpi_classification: "Excellent".into(),
            social_stats: vec![
                SocialStat {
                    platform: 1,
                    followers: 250_000,
                },
                SocialStat {
                    platform: 2,
                    followers: 150_000,
                },
            ],
            campaigns_completed: 78,
            success_rate: 97,
            vertical_experience: vec![1, 4],
            estimated_cvpi: 58.2,
            available: true,
        },
    ]
}

fn project_applications(
    campaigns: &[ProjectCampaign],
    creators: &[CreatorCard],
) -> Vec<ProjectApplication> {
    let Some(campaign) = campaigns.first() else {
        return Vec::new();
    };
    let creator_id = |idx: usize| {
        creators
            .get(idx)
            .map_or_else(Uuid::new_v4, |c| c.creator_id)
    };

    vec![
        ProjectApplication {
            application_id: Uuid::new_v4(),
            campaign_id: campaign.campaign_id,
            campaign_name: campaign.name.clone(),
            creator_id: creator_id(0),
            creator_name: "CryptoInfluencer".into(),
            creator_avatar: "https://i.pravatar.cc/150?u=creator1".into(),
            reputation: 850.0,
            reputation_tier: "A".into(),
            avg_cvpi: 68.5,
            cvpi_classification: "Excellent".into(),
            social_stats: vec![
                SocialStat {
                    platform: 1,
                    followers: 125_000,
                },
                SocialStat {
                    platform: 5,
                    followers: 2300,
                },
            ],
            campaigns_completed: 42,
            success_rate: 95,
            application_message: "I have extensive experience promoting DeFi projects with proven track record of delivering high engagement rates and conversions.".into(),
            portfolio_links: vec![PortfolioLink {
                url: "https://youtube.com/video1".into(),
                title: "DeFi Explained".into(),
                description: "Educational video about DeFi protocols".into(),
            }],
            applied_at: "2024-12-08T10:00:00Z".into(),
            status: 1,
            match_score: 92.5,
        },
        ProjectApplication {
            application_id: Uuid::new_v4(),
            campaign_id: campaign.campaign_id,
            campaign_name: campaign.name.clone(),
            creator_id: creator_id(1),
            creator_name: "BlockchainExpert".into(),
            creator_avatar: "https://i.pravatar.cc/150?u=creator2".into(),
            reputation: 780.0,
            reputation_tier: "B".into(),
            avg_cvpi: 75.2,
            cvpi_classification: "Good".into(),
            social_stats: vec![SocialStat {
                platform: 1,
                followers: 85_000,
            }],
            campaigns_completed: 28,
            success_rate: 89,
            application_message: "My audience is highly engaged with DeFi content...".into(),
            portfolio_links: Vec::new(),
            applied_at: "2024-12-07T15:30:00Z".into(),
            status: 1,
            match_score: 85.0,
        },
    ]
}

fn project_deliverables(
    campaigns: &[ProjectCampaign],
    creators: &[CreatorCard],
) -> Vec<Deliverable> {
    let Some(campaign) = campaigns.first() else {
        return Vec::new();
    };
    vec![Deliverable {
        deliverable_id: Uuid::new_v4(),
        campaign_id: campaign.campaign_id,
        creator_id: creators.first().map_or_else(Uuid::new_v4, |c| c.creator_id),
        content_url: "https://youtube.com/watch?v=abc123".into(),
        deliverable_type: 2,
        platform: 2,
        status: 2,
        metrics: Some(video_metrics()),
        cvpi_score: Some(88.5),
        payment_amount: Some(3333.0),
        submitted_at: "2024-12-05T10:00:00Z".into(),
        verified_at: None,
    }]
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::enums::EnumDomain;

    #[test]
    fn ids_resolve_across_lists() {
        let store = FixtureStore::new();
        for app in &store.creator_applications {
            assert!(store.campaign(&app.campaign_id.to_string()).is_some());
        }
        for app in &store.project_applications {
            assert!(
                store
                    .project_campaign(&app.campaign_id.to_string())
                    .is_some()
            );
            assert!(store.creator_card(&app.creator_id.to_string()).is_some());
        }
    }

    #[test]
    fn lookups_miss_on_unknown_or_malformed_ids() {
        let store = FixtureStore::new();
        assert!(store.campaign(&Uuid::new_v4().to_string()).is_none());
        assert!(store.campaign("not-a-uuid").is_none());
        assert!(store.project_deliverable("").is_none());
    }

    #[test]
    fn every_code_is_in_its_table() {
        let store = FixtureStore::new();
        for c in store.campaigns() {
            assert!(EnumDomain::FocusArea.contains(i64::from(c.focus_area)));
            assert!(EnumDomain::CampaignStatus.contains(i64::from(c.status)));
            assert!(EnumDomain::PaymentToken.contains(i64::from(c.budget_token)));
            assert!(EnumDomain::Complexity.contains(i64::from(c.complexity)));
        }
        for d in store
            .creator_deliverables
            .iter()
            .chain(&store.project_deliverables)
        {
            let deliverable_type = i64::from(d.deliverable_type);
            assert!(EnumDomain::DeliverableType.contains(deliverable_type));
            assert!(EnumDomain::SocialPlatform.contains(i64::from(d.platform)));
            assert!(EnumDomain::DeliverableStatus.contains(i64::from(d.status)));
        }
        for code in &store.creator.focus_area {
            assert!(EnumDomain::FocusArea.contains(i64::from(*code)));
        }
    }

    #[test]
    fn campaigns_iterates_all_lists() {
        let store = FixtureStore::new();
        assert_eq!(store.campaigns().count(), 6);
    }
}
