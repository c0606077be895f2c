//! Filtering and pagination over in-memory fixture lists.
//!
//! Query parameters arrive as raw strings and are parsed leniently: a
//! value that is missing, non-numeric, zero or negative falls back to the
//! default instead of failing the request. Pagination metadata is always
//! derived from the filtered list.

use serde::Serialize;
use utoipa::ToSchema;

use super::enums::EnumDomain;

/// Default page index (pages are 0-based).
pub const DEFAULT_PAGE: u32 = 0;
/// Default page size.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Parses the leading integer of `raw`, like a lenient `parseInt`.
///
/// Returns `None` for missing, non-numeric, zero or negative input.
/// Values beyond `u32::MAX` saturate.
#[must_use]
pub fn parse_positive_int(raw: Option<&str>) -> Option<u32> {
    let trimmed = raw?.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = unsigned.get(..digits_end).filter(|d| !d.is_empty())?;
    match digits.parse::<u32>() {
        Ok(0) => None,
        Ok(n) => Some(n),
        // only overflow is left once the digits are non-empty
        Err(_) => Some(u32::MAX),
    }
}

/// Parses a decimal number, ignoring values that are not finite.
#[must_use]
pub fn parse_number(raw: Option<&str>) -> Option<f64> {
    raw?.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Requested page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 0-based page index.
    pub page: u32,
    /// Items per page, always ≥ 1.
    pub size: u32,
}

impl PageRequest {
    /// Builds a page request from raw query values.
    #[must_use]
    pub fn from_query(page: Option<&str>, size: Option<&str>) -> Self {
        Self {
            page: parse_positive_int(page).unwrap_or(DEFAULT_PAGE),
            size: parse_positive_int(size).unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Pagination descriptor returned beside every paginated list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Page index echoed from the request.
    pub current_page: u32,
    /// `ceil(totalElements / pageSize)`.
    pub total_pages: u32,
    /// Number of items after filtering.
    pub total_elements: u32,
    /// Page size echoed from the request.
    pub page_size: u32,
}

/// One page of a filtered list.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Items on the requested page.
    pub items: Vec<T>,
    /// Pagination metadata for the whole filtered list.
    pub info: PageInfo,
}

impl<T> Page<T> {
    /// Maps every item, keeping the metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            info: self.info,
        }
    }
}

/// Slices `items` into the page described by `request`.
#[must_use]
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> Page<T> {
    let size = request.size.max(1);
    let total = u32::try_from(items.len()).unwrap_or(u32::MAX);
    let skip = usize::try_from(u64::from(request.page) * u64::from(size)).unwrap_or(usize::MAX);
    let take = usize::try_from(size).unwrap_or(usize::MAX);

    Page {
        items: items.into_iter().skip(skip).take(take).collect(),
        info: PageInfo {
            current_page: request.page,
            total_pages: total.div_ceil(size),
            total_elements: total,
            page_size: size,
        },
    }
}

/// Anything that can be filtered by the marketplace list filters.
pub trait Listing {
    /// Focus-area codes the record belongs to.
    fn focus_areas(&self) -> &[u8];
    /// Budget, if the record has one.
    fn budget(&self) -> Option<f64>;
    /// Text matched by the `search` filter.
    fn title(&self) -> &str;
}

/// Field predicates combined with logical AND. Absent fields match all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingFilter {
    /// Focus-area code (`"1"`) or label (`"defi"`), case-insensitive.
    pub category: Option<String>,
    /// Inclusive lower budget bound.
    pub min_budget: Option<f64>,
    /// Inclusive upper budget bound.
    pub max_budget: Option<f64>,
    /// Case-insensitive title substring.
    pub search: Option<String>,
}

impl ListingFilter {
    /// Returns `true` when `item` satisfies every supplied predicate.
    #[must_use]
    pub fn matches<L: Listing + ?Sized>(&self, item: &L) -> bool {
        self.matches_category(item) && self.matches_budget(item) && self.matches_search(item)
    }

    /// Keeps the items that match, preserving order.
    #[must_use]
    pub fn apply<L: Listing + Clone>(&self, items: &[L]) -> Vec<L> {
        items
            .iter()
            .filter(|item| self.matches(*item))
            .cloned()
            .collect()
    }

    fn matches_category<L: Listing + ?Sized>(&self, item: &L) -> bool {
        let Some(category) = self.category.as_deref().map(str::trim) else {
            return true;
        };
        let wanted = category
            .parse::<u8>()
            .ok()
            .or_else(|| EnumDomain::FocusArea.code_of(category));
        wanted.is_some_and(|code| item.focus_areas().contains(&code))
    }

    fn matches_budget<L: Listing + ?Sized>(&self, item: &L) -> bool {
        if self.min_budget.is_none() && self.max_budget.is_none() {
            return true;
        }
        let Some(budget) = item.budget() else {
            return false;
        };
        self.min_budget.is_none_or(|min| budget >= min)
            && self.max_budget.is_none_or(|max| budget <= max)
    }

    fn matches_search<L: Listing + ?Sized>(&self, item: &L) -> bool {
        self.search.as_deref().is_none_or(|needle| {
            item.title()
                .to_lowercase()
                .contains(&needle.trim().to_lowercase())
        })
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        title: &'static str,
        focus: Vec<u8>,
        budget: Option<f64>,
    }

    impl Listing for Row {
        fn focus_areas(&self) -> &[u8] {
            &self.focus
        }
        fn budget(&self) -> Option<f64> {
            self.budget
        }
        fn title(&self) -> &str {
            self.title
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                title: "DeFi Protocol Launch Campaign",
                focus: vec![1],
                budget: Some(5000.0),
            },
            Row {
                title: "NFT Collection Promotion",
                focus: vec![2],
                budget: Some(3500.0),
            },
            Row {
                title: "Gaming Platform Beta Test",
                focus: vec![3],
                budget: Some(8000.0),
            },
        ]
    }

    #[test]
    fn lenient_int_parsing() {
        assert_eq!(parse_positive_int(Some("3")), Some(3));
        assert_eq!(parse_positive_int(Some("12abc")), Some(12));
        assert_eq!(parse_positive_int(Some(" 7")), Some(7));
        assert_eq!(parse_positive_int(Some("+4")), Some(4));
        assert_eq!(parse_positive_int(Some("0")), None);
        assert_eq!(parse_positive_int(Some("000")), None);
        assert_eq!(parse_positive_int(Some("99999999999999")), Some(u32::MAX));
        assert_eq!(parse_positive_int(Some("4294967296abc")), Some(u32::MAX));
        assert_eq!(parse_positive_int(Some("-2")), None);
        assert_eq!(parse_positive_int(Some("abc")), None);
        assert_eq!(parse_positive_int(Some("")), None);
        assert_eq!(parse_positive_int(None), None);
    }

    #[test]
    fn page_request_defaults() {
        assert_eq!(PageRequest::from_query(None, None), PageRequest::default());
        let req = PageRequest::from_query(Some("-1"), Some("nope"));
        assert_eq!(req.page, 0);
        assert_eq!(req.size, 20);
        let req = PageRequest::from_query(Some("2"), Some("5"));
        assert_eq!((req.page, req.size), (2, 5));
    }

    #[test]
    fn category_filter_single_match_pagination() {
        let filter = ListingFilter {
            category: Some("DeFi".to_string()),
            ..ListingFilter::default()
        };
        let page = paginate(filter.apply(&rows()), PageRequest::default());
        assert_eq!(page.items.len(), 1);
        assert_eq!(
            page.info,
            PageInfo {
                current_page: 0,
                total_pages: 1,
                total_elements: 1,
                page_size: 20,
            }
        );
    }

    #[test]
    fn category_is_case_insensitive_and_accepts_codes() {
        for category in ["nft", "NFT", "2"] {
            let filter = ListingFilter {
                category: Some(category.to_string()),
                ..ListingFilter::default()
            };
            let matched = filter.apply(&rows());
            assert_eq!(matched.len(), 1, "{category}");
            assert!(matched.iter().all(|r| r.focus == vec![2]));
        }
    }

    #[test]
    fn unmatched_filters_return_empty() {
        let filter = ListingFilter {
            category: Some("Metaverse".to_string()),
            ..ListingFilter::default()
        };
        let page = paginate(filter.apply(&rows()), PageRequest::default());
        assert!(page.items.is_empty());
        assert_eq!(page.info.total_elements, 0);
        assert_eq!(page.info.total_pages, 0);

        let unknown = ListingFilter {
            category: Some("Sports".to_string()),
            ..ListingFilter::default()
        };
        assert!(unknown.apply(&rows()).is_empty());
    }

    #[test]
    fn budget_range_is_inclusive_and_anded() {
        let filter = ListingFilter {
            min_budget: Some(3500.0),
            max_budget: Some(5000.0),
            ..ListingFilter::default()
        };
        let titles: Vec<_> = filter.apply(&rows()).into_iter().map(|r| r.title).collect();
        assert_eq!(
            titles,
            vec!["DeFi Protocol Launch Campaign", "NFT Collection Promotion"]
        );

        let narrowed = ListingFilter {
            category: Some("DeFi".to_string()),
            min_budget: Some(6000.0),
            ..ListingFilter::default()
        };
        assert!(narrowed.apply(&rows()).is_empty());
    }

    #[test]
    fn budget_filter_rejects_unbudgeted_records() {
        let row = Row {
            title: "Creator",
            focus: vec![1],
            budget: None,
        };
        let filter = ListingFilter {
            max_budget: Some(10.0),
            ..ListingFilter::default()
        };
        assert!(!filter.matches(&row));
        assert!(ListingFilter::default().matches(&row));
    }

    #[test]
    fn search_matches_title_substring() {
        let filter = ListingFilter {
            search: Some("beta".to_string()),
            ..ListingFilter::default()
        };
        let matched = filter.apply(&rows());
        assert_eq!(matched.len(), 1);
        assert!(matched.iter().all(|r| r.title.contains("Beta")));
    }

    #[test]
    fn pagination_slices_and_rounds_up() {
        let items: Vec<u32> = (0..45).collect();
        let page = paginate(items.clone(), PageRequest { page: 2, size: 20 });
        assert_eq!(page.items, (40..45).collect::<Vec<_>>());
        assert_eq!(page.info.total_pages, 3);
        assert_eq!(page.info.total_elements, 45);

        let beyond = paginate(items, PageRequest { page: 9, size: 20 });
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.info.current_page, 9);
    }

    #[test]
    fn oversized_page_is_past_the_end() {
        let request = PageRequest::from_query(Some("99999999999999"), Some("1"));
        let page = paginate(vec![1, 2, 3], request);
        assert!(page.items.is_empty());
        assert_eq!(page.info.current_page, u32::MAX);
        assert_eq!(page.info.total_pages, 3);
    }
}
