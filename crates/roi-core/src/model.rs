//! Domain Models
//!
//! Input and result types for the meeting cost calculation.
//! Uses `rust_decimal` for all monetary values - never use f64 for money!

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// User-entered calculator inputs.
///
/// Created with defaults at session start, mutated on every keystroke,
/// never persisted. Counts are signed on purpose: the calculator applies
/// the formula as-is and out-of-range entries are not validated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inputs {
    /// Number of admins attending each meeting
    pub admins: i64,

    /// Number of directors attending each meeting
    pub directors: i64,

    /// Average annual director salary in USD
    pub avg_annual_salary: Decimal,

    /// Board meetings held per year
    pub meetings_per_year: i64,

    /// Monthly board-software spend, only meaningful once the savings
    /// view is unlocked
    pub saas_monthly: Option<Decimal>,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            admins: 2,
            directors: 10,
            avg_annual_salary: dec!(150000),
            meetings_per_year: 24,
            saas_monthly: None,
        }
    }
}

impl Inputs {
    /// Parse a count field, substituting the safe minimum of 1 for
    /// anything unparseable or zero. Negative entries pass through.
    #[must_use]
    pub fn parse_count(raw: &str) -> i64 {
        match raw.trim().parse::<i64>() {
            Ok(0) | Err(_) => 1,
            Ok(n) => n,
        }
    }

    /// Parse a currency field, substituting 0 for anything unparseable.
    #[must_use]
    pub fn parse_currency(raw: &str) -> Decimal {
        raw.trim().parse().unwrap_or(Decimal::ZERO)
    }

    /// Parse the optional SaaS cost field. Empty, unparseable, and zero
    /// entries all mean "not provided" - zero spend is no comparison.
    #[must_use]
    pub fn parse_optional_currency(raw: &str) -> Option<Decimal> {
        match raw.trim().parse::<Decimal>() {
            Ok(value) if !value.is_zero() => Some(value),
            _ => None,
        }
    }
}

/// Derived cost figures, recomputed in full on every explicit trigger.
///
/// `total_meeting_cost` and `total_annual_cost` are two named fields holding
/// the same value; both are kept for output compatibility. The optional
/// fields are present only when the savings view is unlocked and a SaaS
/// spend was entered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub total_admin_cost: Decimal,
    pub total_director_cost: Decimal,
    pub total_meeting_cost: Decimal,
    pub total_annual_cost: Decimal,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub saas_annual_cost: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings: Option<Decimal>,
}
