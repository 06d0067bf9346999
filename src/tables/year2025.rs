//! Tax constants for the 2025 tax year.

use rust_decimal_macros::dec;

use super::types::{
    ChargeBand, IncomeTaxTable, SocialInsuranceTable, TaxYearTables, UniversalChargeTable,
};

/// Builds the 2025 constant table.
pub fn year_2025() -> TaxYearTables {
    TaxYearTables {
        year: 2025,
        income_tax: IncomeTaxTable {
            standard_rate: dec!(0.20),
            higher_rate: dec!(0.40),
            band_single: dec!(44_000),
            band_married: dec!(53_000),
            band_single_parent_extra: dec!(4_000),
            credit_personal_single: dec!(2_000),
            credit_personal_married: dec!(4_000),
            credit_paye: dec!(2_000),
            credit_earned_income: dec!(2_000),
            credit_employment_cap: dec!(2_000),
            credit_single_parent_child: dec!(1_900),
        },
        universal_charge: UniversalChargeTable {
            exemption_threshold: dec!(13_000),
            bands: vec![
                ChargeBand {
                    upper: Some(dec!(12_012)),
                    rate: dec!(0.005),
                },
                ChargeBand {
                    upper: Some(dec!(27_382)),
                    rate: dec!(0.02),
                },
                ChargeBand {
                    upper: Some(dec!(70_044)),
                    rate: dec!(0.03),
                },
                ChargeBand {
                    upper: None,
                    rate: dec!(0.08),
                },
            ],
        },
        social_insurance: SocialInsuranceTable {
            employee_rate: dec!(0.041),
            employee_weekly_exemption: dec!(352),
            self_employed_rate: dec!(0.04),
            self_employed_threshold: dec!(5_000),
            self_employed_minimum: dec!(500),
        },
    }
}
