//! Strongly-typed tax constant structures.
//!
//! One [`TaxYearTables`] value holds every band, credit, charge and
//! threshold the calculation needs for a single tax year.

use rust_decimal::Decimal;

/// Income tax bands, rates and credits for a tax year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomeTaxTable {
    /// Rate applied to income inside the standard-rate band.
    pub standard_rate: Decimal,
    /// Rate applied to income above the standard-rate band.
    pub higher_rate: Decimal,
    /// Standard-rate band for a single person.
    pub band_single: Decimal,
    /// Standard-rate band for a married one-income couple.
    pub band_married: Decimal,
    /// Extra standard-rate band granted to single parents.
    pub band_single_parent_extra: Decimal,
    /// Personal credit for single and single-parent filers.
    pub credit_personal_single: Decimal,
    /// Personal credit for married one-income filers.
    pub credit_personal_married: Decimal,
    /// Credit granted when there is any employment income.
    pub credit_paye: Decimal,
    /// Credit granted when there is any self-employment income.
    pub credit_earned_income: Decimal,
    /// Cap on the combined PAYE and earned-income credits.
    pub credit_employment_cap: Decimal,
    /// Single Person Child Carer Credit. Flat per qualifying household,
    /// not per child.
    pub credit_single_parent_child: Decimal,
}

/// One marginal band of the Universal Social Charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChargeBand {
    /// Upper bound of the band. `None` marks the unbounded top band.
    pub upper: Option<Decimal>,
    /// Rate applied to the portion of income inside this band.
    pub rate: Decimal,
}

/// Universal Social Charge thresholds and marginal bands for a tax year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniversalChargeTable {
    /// Incomes at or below this threshold pay no charge at all. This is a
    /// full exemption, not a zero-rate band: one unit above it the marginal
    /// bands apply from zero.
    pub exemption_threshold: Decimal,
    /// Marginal bands in ascending order. The final band must be unbounded.
    pub bands: Vec<ChargeBand>,
}

/// Pay Related Social Insurance rates and thresholds for a tax year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialInsuranceTable {
    /// Flat rate charged on the whole of employed income once the weekly
    /// equivalent crosses the exemption.
    pub employee_rate: Decimal,
    /// Weekly earnings at or below this figure are fully exempt.
    pub employee_weekly_exemption: Decimal,
    /// Flat rate charged on self-employed income above the threshold.
    pub self_employed_rate: Decimal,
    /// Self-employed income must exceed this annual figure to be charged.
    pub self_employed_threshold: Decimal,
    /// Minimum annual contribution once self-employed income is chargeable.
    pub self_employed_minimum: Decimal,
}

/// The complete set of tax constants for one tax year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxYearTables {
    /// The tax year these constants apply to.
    pub year: i32,
    /// Income tax bands, rates and credits.
    pub income_tax: IncomeTaxTable,
    /// Universal Social Charge thresholds and bands.
    pub universal_charge: UniversalChargeTable,
    /// Social insurance rates and thresholds.
    pub social_insurance: SocialInsuranceTable,
}
