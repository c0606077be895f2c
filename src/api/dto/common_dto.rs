//! Shared DTO types used across multiple endpoints.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::enums::EnumDomain;
use crate::domain::listing::{ListingFilter, PageRequest, parse_number};
use crate::error::ApiError;

/// Pagination and filter query parameters for list endpoints.
///
/// Values stay raw strings so malformed numbers fall back to defaults
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct ListQuery {
    /// 0-based page index. Defaults to 0.
    pub page: Option<String>,
    /// Items per page. Defaults to 20.
    pub size: Option<String>,
    /// Focus-area code or label, e.g. `1` or `DeFi`.
    pub category: Option<String>,
    /// Inclusive lower budget bound.
    pub min_budget: Option<String>,
    /// Inclusive upper budget bound.
    pub max_budget: Option<String>,
    /// Case-insensitive substring of the title or name.
    pub search: Option<String>,
}

impl ListQuery {
    /// Requested page window.
    #[must_use]
    pub fn page_request(&self) -> PageRequest {
        PageRequest::from_query(self.page.as_deref(), self.size.as_deref())
    }

    /// Field filters; blank values are ignored.
    #[must_use]
    pub fn filter(&self) -> ListingFilter {
        ListingFilter {
            category: non_blank(self.category.as_deref()),
            min_budget: parse_number(self.min_budget.as_deref()),
            max_budget: parse_number(self.max_budget.as_deref()),
            search: non_blank(self.search.as_deref()),
        }
    }
}

fn non_blank(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Plain acknowledgement payload.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable outcome.
    pub message: String,
}

impl MessageResponse {
    /// Builds an acknowledgement.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{ id, name, count }` option used by filter menus.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CountedOption {
    /// Enum code.
    pub id: u8,
    /// Enum label.
    pub name: String,
    /// Number of matching campaigns.
    pub count: u32,
}

/// Rejects an enum code carried in a request body.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] naming `field` if `code` is outside the
/// `domain` table.
pub fn check_code(field: &str, domain: EnumDomain, code: u8) -> Result<(), ApiError> {
    domain
        .label(i64::from(code))
        .map(|_| ())
        .map_err(|miss| ApiError::Validation(format!("{field}: {miss}")))
}

/// Rejects a blank required string.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] naming `field` if `value` is blank.
pub fn require_text(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn list_query_defaults_and_filters() {
        let query = ListQuery {
            page: Some("x".into()),
            size: Some("5".into()),
            category: Some("  ".into()),
            min_budget: Some("1000".into()),
            max_budget: Some("abc".into()),
            search: Some(" launch ".into()),
        };
        let page = query.page_request();
        assert_eq!((page.page, page.size), (0, 5));

        let filter = query.filter();
        assert_eq!(filter.category, None);
        assert_eq!(filter.min_budget, Some(1000.0));
        assert_eq!(filter.max_budget, None);
        assert_eq!(filter.search.as_deref(), Some("launch"));
    }

    #[test]
    fn code_checks_name_the_field() {
        let discord = check_code("platform", EnumDomain::SocialPlatform, 5);
        assert!(discord.is_ok());
        let Err(ApiError::Validation(msg)) = check_code("platform", EnumDomain::SocialPlatform, 6)
        else {
            panic!("6 is outside SocialPlatform");
        };
        assert_eq!(msg, "platform: unknown SocialPlatform code 6");
    }

    #[test]
    fn blank_text_is_rejected() {
        assert!(require_text("walletAddress", "0xabc").is_ok());
        assert!(matches!(
            require_text("walletAddress", "   "),
            Err(ApiError::Validation(_))
        ));
    }
}
