//! Income tax sub-calculation.
//!
//! Splits total income across the two rate bands for the filing status,
//! applies credits and floors the result at zero.

use rust_decimal::Decimal;

use crate::models::{FilingStatus, IncomeTaxBreakdown, TaxInput};
use crate::tables::TaxYearTables;

/// Calculates income tax for an input profile.
///
/// # Arguments
///
/// * `input` - The income profile to assess
/// * `tables` - The constant table for the tax year
///
/// # Returns
///
/// An [`IncomeTaxBreakdown`] with gross tax, credits, net tax, the income
/// taxed at the higher rate and the standard-rate band that was applied.
/// Monetary fields are rounded to 2 decimal places.
///
/// # Behavior
///
/// - The standard-rate band depends on status: single gets the base band,
///   single parents get the base band plus a fixed extra allowance, and
///   married one-income (the fallback for anything unrecognized) gets the
///   larger married band.
/// - Credits are the personal credit, an employment credit capped at a
///   fixed maximum regardless of how many of the PAYE and earned-income
///   sub-credits apply, and the Single Person Child Carer Credit for single
///   parents with at least one child under 18.
/// - Credits cannot make tax negative and do not carry forward; with zero
///   income the credits are still computed and reported.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_engine::calculation::calculate_income_tax;
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
/// let breakdown = calculate_income_tax(&input, tables.for_year(2025));
/// assert_eq!(breakdown.gross_tax, dec!(11200.00));
/// assert_eq!(breakdown.credits, dec!(4000.00));
/// assert_eq!(breakdown.net_tax, dec!(7200.00));
/// ```
pub fn calculate_income_tax(input: &TaxInput, tables: &TaxYearTables) -> IncomeTaxBreakdown {
    let rates = &tables.income_tax;
    let income = input.gross_income();

    let standard_rate_band = match input.status {
        FilingStatus::Single => rates.band_single,
        FilingStatus::SingleParent => rates.band_single + rates.band_single_parent_extra,
        FilingStatus::MarriedOneIncome => rates.band_married,
    };

    let standard_part = income.min(standard_rate_band);
    let higher_part = (income - standard_rate_band).max(Decimal::ZERO);
    let gross_tax = standard_part * rates.standard_rate + higher_part * rates.higher_rate;

    let mut credits = match input.status {
        FilingStatus::MarriedOneIncome => rates.credit_personal_married,
        _ => rates.credit_personal_single,
    };

    let paye = if input.employed_income > Decimal::ZERO {
        rates.credit_paye
    } else {
        Decimal::ZERO
    };
    let earned = if input.self_employed_income > Decimal::ZERO {
        rates.credit_earned_income
    } else {
        Decimal::ZERO
    };
    credits += rates.credit_employment_cap.min(paye + earned);

    if input.status == FilingStatus::SingleParent && input.children_under18 > 0 {
        credits += rates.credit_single_parent_child;
    }

    let net_tax = (gross_tax - credits).max(Decimal::ZERO);

    IncomeTaxBreakdown {
        gross_tax: gross_tax.round_dp(2),
        credits: credits.round_dp(2),
        net_tax: net_tax.round_dp(2),
        higher_rate_income: higher_part.round_dp(2),
        standard_rate_band,
    }
}
