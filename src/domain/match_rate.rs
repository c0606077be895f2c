//! Creator ↔ campaign match rate.
//!
//! A two-factor weighted score: reputation carries 60 % of the weight and
//! focus-area overlap carries 40 %. A miss on either factor is penalised
//! rather than zeroed, so the score never drops below 54.

use std::collections::BTreeMap;

const REPUTATION_WEIGHT: f64 = 0.6;
const FOCUS_AREA_WEIGHT: f64 = 0.4;
const REPUTATION_MISS: f64 = 0.5;
const FOCUS_AREA_MISS: f64 = 0.6;

/// The creator side of a match.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatorTraits {
    /// Creator reputation score.
    pub reputation: f64,
    /// Focus-area codes the creator works in.
    pub focus_areas: Vec<u8>,
}

/// The campaign side of a match.
///
/// `required_reputation` and `kpi_targets` are optional because fixtures
/// may omit them; a campaign missing either cannot be scored.
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignRequirements<'a> {
    /// Minimum reputation the campaign asks for.
    pub required_reputation: Option<f64>,
    /// Focus-area code of the campaign.
    pub focus_area: u8,
    /// KPI targets. Presence matters, contents do not.
    pub kpi_targets: Option<&'a BTreeMap<String, f64>>,
}

/// Computes the match rate in `[0, 100]`, rounded to one decimal.
///
/// Returns `None` when either side is absent or the campaign has no
/// `required_reputation` or no `kpi_targets`. An empty KPI map still
/// counts as present.
#[must_use]
pub fn match_rate(
    creator: Option<&CreatorTraits>,
    campaign: Option<&CampaignRequirements<'_>>,
) -> Option<f64> {
    let creator = creator?;
    let campaign = campaign?;
    let required = campaign.required_reputation?;
    campaign.kpi_targets?;

    let reputation_match = if creator.reputation >= required {
        1.0
    } else {
        REPUTATION_MISS
    };
    let focus_area_match = if creator.focus_areas.contains(&campaign.focus_area) {
        1.0
    } else {
        FOCUS_AREA_MISS
    };

    let rate =
        (reputation_match * REPUTATION_WEIGHT + focus_area_match * FOCUS_AREA_WEIGHT) * 100.0;
    Some((rate * 10.0).round() / 10.0)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn creator(reputation: f64, focus_areas: &[u8]) -> CreatorTraits {
        CreatorTraits {
            reputation,
            focus_areas: focus_areas.to_vec(),
        }
    }

    fn campaign<'a>(
        required: Option<f64>,
        focus_area: u8,
        kpis: Option<&'a BTreeMap<String, f64>>,
    ) -> CampaignRequirements<'a> {
        CampaignRequirements {
            required_reputation: required,
            focus_area,
            kpi_targets: kpis,
        }
    }

    #[test]
    fn truth_table() {
        let kpis = BTreeMap::new();
        let cases = [
            (90.0, 1, 100.0),
            (90.0, 3, 84.0),
            (60.0, 1, 70.0),
            (60.0, 3, 54.0),
        ];
        for (reputation, focus, expected) in cases {
            let c = creator(reputation, &[1, 2]);
            let k = campaign(Some(75.0), focus, Some(&kpis));
            assert_eq!(
                match_rate(Some(&c), Some(&k)),
                Some(expected),
                "reputation {reputation}, focus {focus}"
            );
        }
    }

    #[test]
    fn equal_reputation_counts_as_match() {
        let kpis = BTreeMap::new();
        let c = creator(75.0, &[1]);
        let k = campaign(Some(75.0), 1, Some(&kpis));
        assert_eq!(match_rate(Some(&c), Some(&k)), Some(100.0));
    }

    #[test]
    fn missing_inputs_yield_none() {
        let kpis = BTreeMap::new();
        let c = creator(90.0, &[1]);
        let scored = campaign(Some(75.0), 1, Some(&kpis));

        assert_eq!(match_rate(None, Some(&scored)), None);
        assert_eq!(match_rate(Some(&c), None), None);
        assert_eq!(
            match_rate(Some(&c), Some(&campaign(None, 1, Some(&kpis)))),
            None
        );
        assert_eq!(
            match_rate(Some(&c), Some(&campaign(Some(75.0), 1, None))),
            None
        );
    }

    #[test]
    fn empty_kpi_targets_still_score() {
        let empty = BTreeMap::new();
        let c = creator(87.5, &[1, 2]);
        let k = campaign(Some(80.0), 3, Some(&empty));
        assert_eq!(match_rate(Some(&c), Some(&k)), Some(84.0));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let mut kpis = BTreeMap::new();
        kpis.insert("views".to_string(), 50_000.0);
        let c = creator(70.0, &[2, 6]);
        let k = campaign(Some(75.0), 6, Some(&kpis));
        let first = match_rate(Some(&c), Some(&k));
        for _ in 0..10 {
            assert_eq!(match_rate(Some(&c), Some(&k)), first);
        }
    }

    #[test]
    fn creator_without_focus_areas_misses() {
        let kpis = BTreeMap::new();
        let c = creator(90.0, &[]);
        let k = campaign(Some(10.0), 1, Some(&kpis));
        assert_eq!(match_rate(Some(&c), Some(&k)), Some(84.0));
    }
}
