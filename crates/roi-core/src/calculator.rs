//! Meeting Cost Calculator
//!
//! Pure function from [`Inputs`] plus the unlock flag to a
//! [`CalculationResult`]. No side effects, no failure modes: invalid form
//! text is defaulted before it gets here, and out-of-range values are
//! applied as-is (negative inputs yield negative costs).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::model::{CalculationResult, Inputs};

/// Fraction of average salary attributed to one meeting-hour block.
pub const COST_FRACTION: Decimal = dec!(0.15);

/// Hours an admin spends per meeting (prep, minutes, follow-up).
pub const ADMIN_HOURS_PER_MEETING: Decimal = dec!(4);

/// Hours a director spends per meeting.
pub const DIRECTOR_HOURS_PER_MEETING: Decimal = dec!(2);

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Compute the full cost breakdown.
///
/// The savings comparison is derived only when `unlocked` is true and a
/// monthly SaaS spend was entered; otherwise both premium fields are `None`.
#[must_use]
pub fn calculate(inputs: &Inputs, unlocked: bool) -> CalculationResult {
    let cost_per_meeting = inputs.avg_annual_salary / dec!(100) * COST_FRACTION;
    let meetings = Decimal::from(inputs.meetings_per_year);

    let total_admin_cost =
        Decimal::from(inputs.admins) * meetings * cost_per_meeting * ADMIN_HOURS_PER_MEETING;
    let total_director_cost =
        Decimal::from(inputs.directors) * meetings * cost_per_meeting * DIRECTOR_HOURS_PER_MEETING;
    let total_annual_cost = total_admin_cost + total_director_cost;

    let (saas_annual_cost, savings) = match inputs.saas_monthly {
        Some(monthly) if unlocked => {
            let annual = monthly * MONTHS_PER_YEAR;
            (Some(annual), Some(total_annual_cost - annual))
        }
        _ => (None, None),
    };

    tracing::debug!(
        %total_annual_cost,
        unlocked,
        has_savings = savings.is_some(),
        "computed cost breakdown"
    );

    CalculationResult {
        total_admin_cost,
        total_director_cost,
        total_meeting_cost: total_annual_cost,
        total_annual_cost,
        saas_annual_cost,
        savings,
    }
}
