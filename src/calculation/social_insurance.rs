//! Pay Related Social Insurance sub-calculation.
//!
//! Employed and self-employed income are assessed separately and summed.
//! Neither charge is marginal: once its threshold is crossed, the flat rate
//! applies to the whole of that income.

use rust_decimal::Decimal;

use crate::models::TaxInput;
use crate::tables::TaxYearTables;

use super::WEEKS_PER_YEAR;

/// Calculates the total social insurance contribution for an input profile.
///
/// Employed income is converted to a weekly equivalent (annual / 52); only
/// when the weekly figure exceeds the weekly exemption is the entire annual
/// employed income charged at the flat rate. Self-employed income above the
/// annual threshold is charged at its flat rate subject to the fixed
/// minimum contribution. Either part may be zero. The sum is rounded to 2
/// decimal places.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_engine::calculation::calculate_social_insurance;
/// use tax_engine::models::{FilingStatus, TaxInput};
/// use tax_engine::tables::TaxTables;
///
/// let tables = TaxTables::bundled();
/// let input = TaxInput {
///     employed_income: dec!(50000),
///     self_employed_income: dec!(0),
///     status: FilingStatus::Single,
///     children_under18: 0,
///     year: 2025,
/// };
/// assert_eq!(
///     calculate_social_insurance(&input, tables.for_year(2025)),
///     dec!(2050.00)
/// );
/// ```
pub fn calculate_social_insurance(input: &TaxInput, tables: &TaxYearTables) -> Decimal {
    let table = &tables.social_insurance;
    let mut contribution = Decimal::ZERO;

    if input.employed_income > Decimal::ZERO {
        let weekly = input.employed_income / WEEKS_PER_YEAR;
        if weekly > table.employee_weekly_exemption {
            contribution += input.employed_income * table.employee_rate;
        }
    }

    if input.self_employed_income > table.self_employed_threshold {
        let charged = input.self_employed_income * table.self_employed_rate;
        contribution += charged.max(table.self_employed_minimum);
    }

    contribution.round_dp(2)
}
