//! Random time-series fixtures for earnings and CVPI history.
//!
//! Values are random; the shape is not. Every series is chronological,
//! evenly spaced and ends at the supplied `now`. The random source is a
//! parameter so tests can seed it.

use chrono::{DateTime, Duration, Months, Utc};
use rand::Rng;
use serde::Serialize;
use utoipa::ToSchema;

use super::enums::EnumDomain;
use super::timestamp::iso8601;

/// Granularity of the earnings history (`EarningsRange` codes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EarningsRange {
    /// 24 hourly steps.
    Hourly,
    /// 30 daily steps.
    Daily,
    /// 12 monthly steps.
    Monthly,
}

impl EarningsRange {
    /// Range used when the request supplies none or an unknown code.
    pub const DEFAULT: Self = Self::Monthly;

    /// Resolves an `EarningsRange` code, falling back to [`Self::DEFAULT`].
    #[must_use]
    pub fn from_code(code: Option<u32>) -> Self {
        match code {
            Some(1) => Self::Hourly,
            Some(2) => Self::Daily,
            Some(3) => Self::Monthly,
            _ => Self::DEFAULT,
        }
    }

    /// The `EarningsRange` code of this range.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Hourly => 1,
            Self::Daily => 2,
            Self::Monthly => 3,
        }
    }

    /// Display label from the `EarningsRange` table.
    #[must_use]
    pub fn label(self) -> &'static str {
        EnumDomain::EarningsRange
            .label(i64::from(self.code()))
            .unwrap_or("Monthly")
    }

    /// Number of steps back from now; the series has `steps + 1` points.
    #[must_use]
    pub const fn steps(self) -> u32 {
        match self {
            Self::Hourly => 24,
            Self::Daily => 30,
            Self::Monthly => 12,
        }
    }

    fn step_back(self, now: DateTime<Utc>, steps: u32) -> DateTime<Utc> {
        match self {
            Self::Hourly => now - Duration::hours(i64::from(steps)),
            Self::Daily => now - Duration::days(i64::from(steps)),
            Self::Monthly => now.checked_sub_months(Months::new(steps)).unwrap_or(now),
        }
    }
}

/// CVPI history window (`TimePeriod` codes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryWindow {
    /// 7 days.
    Week,
    /// 30 days.
    Month,
    /// 90 days.
    Quarter,
    /// 365 days.
    Year,
}

impl HistoryWindow {
    /// Window used when the request supplies none or an unknown code.
    pub const DEFAULT: Self = Self::Month;

    /// Resolves a `TimePeriod` code, falling back to [`Self::DEFAULT`].
    #[must_use]
    pub fn from_code(code: Option<u32>) -> Self {
        match code {
            Some(1) => Self::Week,
            Some(2) => Self::Month,
            Some(3) => Self::Quarter,
            Some(4) => Self::Year,
            _ => Self::DEFAULT,
        }
    }

    /// The `TimePeriod` code of this window.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Week => 1,
            Self::Month => 2,
            Self::Quarter => 3,
            Self::Year => 4,
        }
    }

    /// Display label from the `TimePeriod` table.
    #[must_use]
    pub fn label(self) -> &'static str {
        EnumDomain::TimePeriod
            .label(i64::from(self.code()))
            .unwrap_or("30d")
    }

    /// Window length in days.
    #[must_use]
    pub const fn days(self) -> u32 {
        match self {
            Self::Week => 7,
            Self::Month => 30,
            Self::Quarter => 90,
            Self::Year => 365,
        }
    }
}

/// One earnings data point.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EarningsPoint {
    /// Point time (ISO-8601).
    pub timestamp: String,
    /// Amount earned, in `[100, 600)`.
    pub amount: f64,
    /// Number of payouts, in `[1, 5]`.
    pub transaction_count: u32,
}

/// One CVPI history data point.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CvpiPoint {
    /// Calendar date `YYYY-MM-DD`.
    pub date: String,
    /// CVPI score, in `[70, 90)`.
    pub score: f64,
    /// Reputation score, in `[75, 90)`.
    pub reputation: f64,
}

/// Generates the earnings series for `range`, oldest first, ending at `now`.
pub fn earnings_history<R: Rng + ?Sized>(
    rng: &mut R,
    range: EarningsRange,
    now: DateTime<Utc>,
) -> Vec<EarningsPoint> {
    (0..=range.steps())
        .rev()
        .map(|i| EarningsPoint {
            timestamp: iso8601(range.step_back(now, i)),
            amount: rng.gen_range(100.0..600.0),
            transaction_count: rng.gen_range(1..=5),
        })
        .collect()
}

/// Generates up to `limit` daily CVPI points over `window`, ending today.
///
/// Points are spaced `floor(days / min(limit, days))` days apart, counted
/// back from today; only the most recent `limit` points are kept.
pub fn cvpi_history<R: Rng + ?Sized>(
    rng: &mut R,
    window: HistoryWindow,
    limit: u32,
    now: DateTime<Utc>,
) -> Vec<CvpiPoint> {
    let days = window.days();
    let limit = limit.max(1);
    let interval = (days / limit.min(days)).max(1);
    let step = usize::try_from(interval).unwrap_or(1);
    let keep = usize::try_from(limit).unwrap_or(usize::MAX);

    let mut days_ago: Vec<u32> = (0..=days).step_by(step).take(keep).collect();
    days_ago.reverse();

    days_ago
        .into_iter()
        .map(|ago| CvpiPoint {
            date: (now - Duration::days(i64::from(ago)))
                .format("%Y-%m-%d")
                .to_string(),
            score: rng.gen_range(70.0..90.0),
            reputation: rng.gen_range(75.0..90.0),
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn fixed_now() -> DateTime<Utc> {
        let Some(now) = Utc.with_ymd_and_hms(2025, 3, 31, 12, 0, 0).single() else {
            panic!("valid date");
        };
        now
    }

    fn parse(ts: &str) -> DateTime<Utc> {
        let Ok(t) = DateTime::parse_from_rfc3339(ts) else {
            panic!("bad timestamp {ts}");
        };
        t.with_timezone(&Utc)
    }

    #[test]
    fn range_codes_resolve_with_default() {
        assert_eq!(EarningsRange::from_code(Some(1)), EarningsRange::Hourly);
        assert_eq!(EarningsRange::from_code(Some(2)), EarningsRange::Daily);
        assert_eq!(EarningsRange::from_code(Some(3)), EarningsRange::Monthly);
        assert_eq!(EarningsRange::from_code(Some(4)), EarningsRange::DEFAULT);
        assert_eq!(EarningsRange::from_code(None), EarningsRange::DEFAULT);

        assert_eq!(HistoryWindow::from_code(Some(4)), HistoryWindow::Year);
        assert_eq!(HistoryWindow::from_code(Some(9)), HistoryWindow::DEFAULT);

        assert_eq!(EarningsRange::Hourly.label(), "Hourly");
        assert_eq!(HistoryWindow::Quarter.label(), "90d");
    }

    #[test]
    fn hourly_series_is_evenly_spaced_and_ends_now() {
        let mut rng = StdRng::seed_from_u64(7);
        let now = fixed_now();
        let points = earnings_history(&mut rng, EarningsRange::Hourly, now);
        assert_eq!(points.len(), 25);

        let times: Vec<_> = points.iter().map(|p| parse(&p.timestamp)).collect();
        for pair in times.windows(2) {
            let [a, b] = pair else {
                panic!("window of two");
            };
            assert_eq!(*b - *a, Duration::hours(1));
        }
        assert_eq!(times.last().copied(), Some(now));
    }

    #[test]
    fn daily_and_monthly_point_counts() {
        let mut rng = StdRng::seed_from_u64(1);
        let now = fixed_now();
        assert_eq!(
            earnings_history(&mut rng, EarningsRange::Daily, now).len(),
            31
        );
        let monthly = earnings_history(&mut rng, EarningsRange::Monthly, now);
        assert_eq!(monthly.len(), 13);
        assert_eq!(
            monthly.first().map(|p| parse(&p.timestamp)),
            now.checked_sub_months(Months::new(12))
        );
    }

    #[test]
    fn earnings_values_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(99);
        for p in earnings_history(&mut rng, EarningsRange::Daily, fixed_now()) {
            assert!((100.0..600.0).contains(&p.amount), "{}", p.amount);
            assert!((1..=5).contains(&p.transaction_count));
        }
    }

    #[test]
    fn seeded_generators_repeat() {
        let now = fixed_now();
        let a = earnings_history(&mut StdRng::seed_from_u64(5), EarningsRange::Daily, now);
        let b = earnings_history(&mut StdRng::seed_from_u64(5), EarningsRange::Daily, now);
        assert_eq!(a, b);
    }

    #[test]
    fn cvpi_month_daily_limit_thirty_ends_today() {
        let mut rng = StdRng::seed_from_u64(3);
        let now = fixed_now();
        let points = cvpi_history(&mut rng, HistoryWindow::Month, 30, now);
        assert_eq!(points.len(), 30);
        assert_eq!(
            points.last().map(|p| p.date.as_str()),
            Some("2025-03-31")
        );
        for p in &points {
            assert!((70.0..90.0).contains(&p.score));
            assert!((75.0..90.0).contains(&p.reputation));
        }
    }

    #[test]
    fn cvpi_year_spacing_follows_interval() {
        let mut rng = StdRng::seed_from_u64(11);
        let now = fixed_now();
        let points = cvpi_history(&mut rng, HistoryWindow::Year, 12, now);
        // floor(365 / 12) = 30 days between points.
        let dates: Vec<NaiveDate> = points
            .iter()
            .filter_map(|p| NaiveDate::parse_from_str(&p.date, "%Y-%m-%d").ok())
            .collect();
        assert_eq!(dates.len(), 12);
        for pair in dates.windows(2) {
            let [a, b] = pair else {
                panic!("window of two");
            };
            assert_eq!((*b - *a).num_days(), 30);
        }
        assert_eq!(dates.last().copied(), Some(now.date_naive()));
    }

    #[test]
    fn cvpi_limit_larger_than_window() {
        let mut rng = StdRng::seed_from_u64(2);
        let points = cvpi_history(&mut rng, HistoryWindow::Week, 100, fixed_now());
        assert_eq!(points.len(), 8);
    }

    #[test]
    fn cvpi_zero_limit_treated_as_one() {
        let mut rng = StdRng::seed_from_u64(2);
        let points = cvpi_history(&mut rng, HistoryWindow::Week, 0, fixed_now());
        assert_eq!(points.len(), 1);
    }
}
