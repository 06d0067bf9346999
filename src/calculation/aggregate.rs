//! Aggregation of the three sub-calculations into a full tax result.

use rust_decimal::Decimal;

use crate::models::{TaxInput, TaxResult};
use crate::tables::TaxYearTables;

use super::{calculate_income_tax, calculate_social_insurance, calculate_universal_charge};

/// Months in a tax year, for the net monthly figure.
pub const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Weeks in a tax year, for the net weekly figure and the PRSI weekly
/// equivalent.
pub const WEEKS_PER_YEAR: Decimal = Decimal::from_parts(52, 0, 0, false, 0);

/// Calculates the complete tax breakdown for an input profile.
///
/// Composes the income tax, Universal Social Charge and social insurance
/// sub-calculations, derives the totals and echoes every input field into
/// the result. The monthly and weekly figures are plain division of net
/// income with no proration for partial years.
///
/// This is a single-pass, deterministic, pure computation: no state is
/// shared between calls and there are no partial results.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_engine::calculation::calculate_tax;
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
///
/// let result = calculate_tax(&input, tables.for_year(2025));
/// assert_eq!(result.total_deductions + result.net_income, result.gross_income);
/// ```
pub fn calculate_tax(input: &TaxInput, tables: &TaxYearTables) -> TaxResult {
    let gross_income = input.gross_income();

    let details = calculate_income_tax(input, tables);
    let usc = calculate_universal_charge(input, tables);
    let prsi = calculate_social_insurance(input, tables);

    let income_tax = details.net_tax;
    let total_deductions = income_tax + usc + prsi;
    let net_income = gross_income - total_deductions;

    TaxResult {
        year: input.year,
        status: input.status,
        children_under18: input.children_under18,
        employed_income: input.employed_income,
        self_employed_income: input.self_employed_income,
        gross_income,
        income_tax,
        usc,
        prsi,
        total_deductions: total_deductions.round_dp(2),
        net_income: net_income.round_dp(2),
        net_monthly: (net_income / MONTHS_PER_YEAR).round_dp(2),
        net_weekly: (net_income / WEEKS_PER_YEAR).round_dp(2),
        details,
    }
}
