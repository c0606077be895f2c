//! Closed code → label lookup tables.
//!
//! Every numeric field on a fixture record (role, platform, status, token,
//! ...) is a small integer code drawn from one of these tables. Codes are
//! dense and start at 1, so a table is stored as a slice of labels and the
//! code is the 1-based position.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use utoipa::ToSchema;

const USER_ROLE: &[&str] = &["Creator", "Projector", "Admin", "Validator"];
const WALLET_TYPE: &[&str] = &["MetaMask", "WalletConnect", "Coinbase", "Rainbow"];
const SOCIAL_PLATFORM: &[&str] = &["Twitter", "YouTube", "Instagram", "TikTok", "Discord"];
const FOCUS_AREA: &[&str] = &[
    "DeFi",
    "NFT",
    "Gaming",
    "Infrastructure",
    "L2",
    "DAO",
    "Metaverse",
    "Trading",
    "Other",
];
const CAMPAIGN_STATUS: &[&str] = &[
    "DRAFT",
    "PENDING_ESCROW",
    "ACTIVE",
    "IN_PROGRESS",
    "COMPLETED",
    "CANCELLED",
    "SUSPENDED",
];
const APPLICATION_STATUS: &[&str] = &["PENDING", "ACCEPTED", "REJECTED", "WITHDRAWN"];
const DELIVERABLE_STATUS: &[&str] = &[
    "SUBMITTED",
    "PENDING_VERIFICATION",
    "VERIFIED",
    "REJECTED",
    "PAID",
];
const DELIVERABLE_TYPE: &[&str] = &[
    "Twitter Posts",
    "Videos",
    "Articles",
    "AMAs",
    "Discord Management",
    "Community Growth",
    "Instagram Post",
    "TikTok",
];
const CAMPAIGN_DURATION: &[&str] = &[
    "Less Than 1 Week",
    "1-2 Weeks",
    "2-4 Weeks",
    "1-3 Months",
    "3+ Months",
];
const COMPLEXITY: &[&str] = &["LOW", "MEDIUM", "HIGH"];
const PAYMENT_TOKEN: &[&str] = &["USDC", "USDT", "ETH", "AW3"];
const TIME_PERIOD: &[&str] = &["7d", "30d", "90d", "1y"];
const EARNINGS_RANGE: &[&str] = &["Hourly", "Daily", "Monthly"];

/// A named code space. No two domains share codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
pub enum EnumDomain {
    /// Platform account role.
    UserRole,
    /// Wallet provider used to sign in.
    WalletType,
    /// Social network of a linked account.
    SocialPlatform,
    /// Content vertical of a campaign or creator.
    FocusArea,
    /// Campaign lifecycle status.
    CampaignStatus,
    /// Creator application status.
    ApplicationStatus,
    /// Deliverable verification status.
    DeliverableStatus,
    /// Kind of content delivered.
    DeliverableType,
    /// Expected campaign duration bucket.
    CampaignDuration,
    /// Campaign complexity tier.
    Complexity,
    /// Token a campaign budget is denominated in.
    PaymentToken,
    /// CVPI history window.
    TimePeriod,
    /// Earnings history granularity.
    EarningsRange,
}

impl EnumDomain {
    /// Every domain, in declaration order.
    pub const ALL: [Self; 13] = [
        Self::UserRole,
        Self::WalletType,
        Self::SocialPlatform,
        Self::FocusArea,
        Self::CampaignStatus,
        Self::ApplicationStatus,
        Self::DeliverableStatus,
        Self::DeliverableType,
        Self::CampaignDuration,
        Self::Complexity,
        Self::PaymentToken,
        Self::TimePeriod,
        Self::EarningsRange,
    ];

    /// Returns the domain name as used in URLs and documentation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::UserRole => "UserRole",
            Self::WalletType => "WalletType",
            Self::SocialPlatform => "SocialPlatform",
            Self::FocusArea => "FocusArea",
            Self::CampaignStatus => "CampaignStatus",
            Self::ApplicationStatus => "ApplicationStatus",
            Self::DeliverableStatus => "DeliverableStatus",
            Self::DeliverableType => "DeliverableType",
            Self::CampaignDuration => "CampaignDuration",
            Self::Complexity => "Complexity",
            Self::PaymentToken => "PaymentToken",
            Self::TimePeriod => "TimePeriod",
            Self::EarningsRange => "EarningsRange",
        }
    }

    const fn labels(self) -> &'static [&'static str] {
        match self {
            Self::UserRole => USER_ROLE,
            Self::WalletType => WALLET_TYPE,
            Self::SocialPlatform => SOCIAL_PLATFORM,
            Self::FocusArea => FOCUS_AREA,
            Self::CampaignStatus => CAMPAIGN_STATUS,
            Self::ApplicationStatus => APPLICATION_STATUS,
            Self::DeliverableStatus => DELIVERABLE_STATUS,
            Self::DeliverableType => DELIVERABLE_TYPE,
            Self::CampaignDuration => CAMPAIGN_DURATION,
            Self::Complexity => COMPLEXITY,
            Self::PaymentToken => PAYMENT_TOKEN,
            Self::TimePeriod => TIME_PERIOD,
            Self::EarningsRange => EARNINGS_RANGE,
        }
    }

    /// Returns the label for `code`.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownCode`] if `code` is not in this domain's table.
    pub fn label(self, code: i64) -> Result<&'static str, UnknownCode> {
        usize::try_from(code)
            .ok()
            .and_then(|c| c.checked_sub(1))
            .and_then(|idx| self.labels().get(idx).copied())
            .ok_or(UnknownCode { domain: self, code })
    }

    /// Returns `true` if `code` has a label in this domain.
    #[must_use]
    pub fn contains(self, code: i64) -> bool {
        self.label(code).is_ok()
    }

    /// Iterates `(code, label)` pairs in code order.
    pub fn entries(self) -> impl Iterator<Item = (u8, &'static str)> {
        (1u8..).zip(self.labels().iter().copied())
    }

    /// Finds the code whose label equals `label`, ignoring ASCII case.
    #[must_use]
    pub fn code_of(self, label: &str) -> Option<u8> {
        self.entries()
            .find(|(_, l)| l.eq_ignore_ascii_case(label))
            .map(|(code, _)| code)
    }
}

impl fmt::Display for EnumDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EnumDomain {
    type Err = UnknownDomain;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownDomain(s.to_string()))
    }
}

/// Lookup miss: the code has no label in the domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown {domain} code {code}")]
pub struct UnknownCode {
    /// Domain that was searched.
    pub domain: EnumDomain,
    /// Code that was not found.
    pub code: i64,
}

/// The named domain does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown enum domain: {0}")]
pub struct UnknownDomain(pub String);

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn labels_of(domain: EnumDomain) -> Vec<&'static str> {
        domain.entries().map(|(_, l)| l).collect()
    }

    #[test]
    fn every_table_matches_published_labels() {
        let expected: [(EnumDomain, &[&str]); 13] = [
            (
                EnumDomain::UserRole,
                &["Creator", "Projector", "Admin", "Validator"],
            ),
            (
                EnumDomain::WalletType,
                &["MetaMask", "WalletConnect", "Coinbase", "Rainbow"],
            ),
            (
                EnumDomain::SocialPlatform,
                &["Twitter", "YouTube", "Instagram", "TikTok", "Discord"],
            ),
            (
                EnumDomain::FocusArea,
                &[
                    "DeFi",
                    "NFT",
                    "Gaming",
                    "Infrastructure",
                    "L2",
                    "DAO",
                    "Metaverse",
                    "Trading",
                    "Other",
                ],
            ),
            (
                EnumDomain::CampaignStatus,
                &[
                    "DRAFT",
                    "PENDING_ESCROW",
                    "ACTIVE",
                    "IN_PROGRESS",
                    "COMPLETED",
                    "CANCELLED",
                    "SUSPENDED",
                ],
            ),
            (
                EnumDomain::ApplicationStatus,
                &["PENDING", "ACCEPTED", "REJECTED", "WITHDRAWN"],
            ),
            (
                EnumDomain::DeliverableStatus,
                &[
                    "SUBMITTED",
                    "PENDING_VERIFICATION",
                    "VERIFIED",
                    "REJECTED",
                    "PAID",
                ],
            ),
            (
                EnumDomain::DeliverableType,
                &[
                    "Twitter Posts",
                    "Videos",
                    "Articles",
                    "AMAs",
                    "Discord Management",
                    "Community Growth",
                    "Instagram Post",
                    "TikTok",
                ],
            ),
            (
                EnumDomain::CampaignDuration,
                &[
                    "Less Than 1 Week",
                    "1-2 Weeks",
                    "2-4 Weeks",
                    "1-3 Months",
                    "3+ Months",
                ],
            ),
            (EnumDomain::Complexity, &["LOW", "MEDIUM", "HIGH"]),
            (EnumDomain::PaymentToken, &["USDC", "USDT", "ETH", "AW3"]),
            (EnumDomain::TimePeriod, &["7d", "30d", "90d", "1y"]),
            (EnumDomain::EarningsRange, &["Hourly", "Daily", "Monthly"]),
        ];

        for (domain, labels) in expected {
            assert_eq!(labels_of(domain), labels, "{domain}");
            for (code, label) in (1i64..).zip(labels.iter()) {
                assert_eq!(domain.label(code), Ok(*label), "{domain} {code}");
            }
        }
    }

    #[test]
    fn codes_outside_table_are_unknown() {
        for domain in EnumDomain::ALL {
            let past_end = i64::try_from(labels_of(domain).len()).unwrap_or(0) + 1;
            for code in [0, -1, past_end, i64::MAX] {
                let Err(err) = domain.label(code) else {
                    panic!("{domain} code {code} should be unknown");
                };
                assert_eq!(err, UnknownCode { domain, code });
            }
        }
    }

    #[test]
    fn unknown_code_message_names_domain() {
        let Err(err) = EnumDomain::FocusArea.label(42) else {
            panic!("expected miss");
        };
        assert_eq!(err.to_string(), "unknown FocusArea code 42");
    }

    #[test]
    fn domain_parses_case_insensitively() {
        assert_eq!("focusarea".parse(), Ok(EnumDomain::FocusArea));
        assert_eq!("PaymentToken".parse(), Ok(EnumDomain::PaymentToken));
        assert!("Planet".parse::<EnumDomain>().is_err());
    }

    #[test]
    fn code_of_ignores_case() {
        assert_eq!(EnumDomain::FocusArea.code_of("defi"), Some(1));
        assert_eq!(EnumDomain::FocusArea.code_of("nft"), Some(2));
        assert_eq!(EnumDomain::FocusArea.code_of("Sports"), None);
    }
}
