//! Platform fee estimation for campaign budgets.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::timestamp::iso8601;

/// Service fee rate when paying in stablecoins/ETH.
pub const SERVICE_FEE_RATE: f64 = 0.05;
/// Service fee rate when paying with the AW3 token.
pub const SERVICE_FEE_RATE_AW3: f64 = 0.04;
/// Oracle verification fee rate.
pub const ORACLE_FEE_RATE: f64 = 0.01;
/// Advertised discount (percent) for paying with AW3.
pub const AW3_DISCOUNT_PERCENT: f64 = 20.0;
/// How long a quote stays valid.
pub const QUOTE_VALIDITY_MINUTES: i64 = 15;

/// Fee estimation inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeeInputs {
    /// Creator budget. Must be positive.
    pub campaign_budget: f64,
    /// Pay fees with the AW3 token.
    pub use_aw3_token: bool,
}

/// A one-shot fee quote. Quotes are never stored.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeeQuote {
    /// Fresh identifier per quote.
    pub quote_id: Uuid,
    /// Budget echoed from the request.
    pub campaign_budget: f64,
    /// Whether the AW3 discount was applied.
    #[serde(rename = "useAW3Token")]
    pub use_aw3_token: bool,
    /// Service fee rate applied.
    pub service_fee_rate: f64,
    /// Service fee amount.
    pub service_fee: f64,
    /// Oracle fee rate applied.
    pub oracle_fee_rate: f64,
    /// Oracle fee amount.
    pub oracle_fee: f64,
    /// Service plus oracle fee.
    pub total_fee: f64,
    /// Discount percentage (20 with AW3, else 0).
    pub discount: f64,
    /// Budget plus all fees.
    pub total_required: f64,
    /// When the quote was generated.
    pub generated_at: String,
    /// Quote expiry, 15 minutes after generation.
    pub valid_until: String,
}

/// Builds a fee quote for `inputs` generated at `now`.
///
/// Callers validate that the budget is positive.
#[must_use]
pub fn estimate(inputs: FeeInputs, now: DateTime<Utc>) -> FeeQuote {
    let budget = inputs.campaign_budget;
    let service_fee_rate = if inputs.use_aw3_token {
        SERVICE_FEE_RATE_AW3
    } else {
        SERVICE_FEE_RATE
    };
    let service_fee = budget * service_fee_rate;
    let oracle_fee = budget * ORACLE_FEE_RATE;
    let total_fee = service_fee + oracle_fee;
    let discount = if inputs.use_aw3_token {
        AW3_DISCOUNT_PERCENT
    } else {
        0.0
    };

    FeeQuote {
        quote_id: Uuid::new_v4(),
        campaign_budget: budget,
        use_aw3_token: inputs.use_aw3_token,
        service_fee_rate,
        service_fee,
        oracle_fee_rate: ORACLE_FEE_RATE,
        oracle_fee,
        total_fee,
        discount,
        total_required: budget + total_fee,
        generated_at: iso8601(now),
        valid_until: iso8601(now + Duration::minutes(QUOTE_VALIDITY_MINUTES)),
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn standard_rates() {
        let q = estimate(
            FeeInputs {
                campaign_budget: 5000.0,
                use_aw3_token: false,
            },
            Utc::now(),
        );
        assert!(close(q.service_fee, 250.0));
        assert!(close(q.oracle_fee, 50.0));
        assert!(close(q.total_fee, 300.0));
        assert!(close(q.discount, 0.0));
        assert!(close(q.total_required, 5300.0));
    }

    #[test]
    fn aw3_token_rates() {
        let q = estimate(
            FeeInputs {
                campaign_budget: 5000.0,
                use_aw3_token: true,
            },
            Utc::now(),
        );
        assert!(close(q.service_fee, 200.0));
        assert!(close(q.oracle_fee, 50.0));
        assert!(close(q.total_fee, 250.0));
        assert!(close(q.discount, 20.0));
        assert!(close(q.total_required, 5250.0));
    }

    #[test]
    fn quote_valid_for_fifteen_minutes() {
        let now = Utc::now();
        let q = estimate(
            FeeInputs {
                campaign_budget: 1000.0,
                use_aw3_token: false,
            },
            now,
        );
        let Ok(generated) = DateTime::parse_from_rfc3339(&q.generated_at) else {
            panic!("generatedAt not ISO-8601: {}", q.generated_at);
        };
        let Ok(valid_until) = DateTime::parse_from_rfc3339(&q.valid_until) else {
            panic!("validUntil not ISO-8601: {}", q.valid_until);
        };
        assert_eq!(valid_until - generated, Duration::minutes(15));
    }

    #[test]
    fn identical_inputs_get_fresh_ids() {
        let inputs = FeeInputs {
            campaign_budget: 750.0,
            use_aw3_token: true,
        };
        let a = estimate(inputs, Utc::now());
        let b = estimate(inputs, Utc::now());
        assert_ne!(a.quote_id, b.quote_id);
        assert!(close(a.total_required, b.total_required));
    }

    #[test]
    fn serializes_aw3_flag_name() {
        let q = estimate(
            FeeInputs {
                campaign_budget: 100.0,
                use_aw3_token: true,
            },
            Utc::now(),
        );
        let Ok(json) = serde_json::to_value(&q) else {
            panic!("serialization failed");
        };
        assert_eq!(json["useAW3Token"], serde_json::Value::Bool(true));
        assert!(json.get("totalRequired").is_some());
    }
}
