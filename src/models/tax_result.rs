//! Tax result models for the Tax Calculation Engine.
//!
//! This module contains the [`TaxResult`] type and the nested
//! [`IncomeTaxBreakdown`] that together capture all outputs of a tax
//! calculation. Both are fully derived value objects with no identity and
//! no mutation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::FilingStatus;

/// Breakdown of the income-tax sub-calculation.
///
/// Reported as the `details` field of a [`TaxResult`], showing how the net
/// income tax figure was reached.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_engine::models::IncomeTaxBreakdown;
///
/// let details = IncomeTaxBreakdown {
///     gross_tax: dec!(11200.00),
///     credits: dec!(4000.00),
///     net_tax: dec!(7200.00),
///     higher_rate_income: dec!(6000.00),
///     standard_rate_band: dec!(44000),
/// };
/// assert_eq!(details.gross_tax - details.credits, details.net_tax);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeTaxBreakdown {
    /// Tax due across both rate bands before any credits are applied.
    pub gross_tax: Decimal,
    /// Total credits applied against gross tax.
    pub credits: Decimal,
    /// Tax payable after credits, floored at zero.
    pub net_tax: Decimal,
    /// The portion of income taxed at the higher rate.
    pub higher_rate_income: Decimal,
    /// The standard-rate band applied for the filing status.
    pub standard_rate_band: Decimal,
}

/// The complete result of a tax calculation.
///
/// Echoes every input field alongside the computed deductions, totals and
/// per-period net figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    /// The tax year the calculation was requested for.
    pub year: i32,
    /// The filing status the calculation applied.
    pub status: FilingStatus,
    /// Number of children under 18, echoed from the input.
    pub children_under18: u32,
    /// Annual gross employment earnings, echoed from the input.
    pub employed_income: Decimal,
    /// Annual gross self-employment earnings, echoed from the input.
    pub self_employed_income: Decimal,
    /// Total gross income across both sources.
    pub gross_income: Decimal,
    /// Net income tax payable (after credits).
    pub income_tax: Decimal,
    /// Universal Social Charge payable.
    pub usc: Decimal,
    /// Pay Related Social Insurance payable.
    pub prsi: Decimal,
    /// Sum of the three deductions.
    pub total_deductions: Decimal,
    /// Gross income less total deductions. Not clamped at zero.
    pub net_income: Decimal,
    /// Net income divided by 12.
    pub net_monthly: Decimal,
    /// Net income divided by 52.
    pub net_weekly: Decimal,
    /// Breakdown of the income-tax sub-calculation.
    pub details: IncomeTaxBreakdown,
}
