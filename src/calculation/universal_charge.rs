//! Universal Social Charge sub-calculation.

use rust_decimal::Decimal;

use crate::models::TaxInput;
use crate::tables::TaxYearTables;

/// Calculates the Universal Social Charge for an input profile.
///
/// Total income at or below the exemption threshold pays exactly zero. The
/// exemption is all-or-nothing: one unit above the threshold the marginal
/// bands apply to the whole income from zero, not just to the excess.
///
/// Above the threshold, each band's rate applies only to the portion of
/// income falling inside that band. The result is rounded to 2 decimal
/// places.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_engine::calculation::calculate_universal_charge;
/// use tax_engine::models::{FilingStatus, TaxInput};
/// use tax_engine::tables::TaxTables;
///
/// let tables = TaxTables::bundled();
/// let input = TaxInput {
///     employed_income: dec!(13000),
///     self_employed_income: dec!(0),
///     status: FilingStatus::Single,
///     children_under18: 0,
///     year: 2025,
/// };
/// assert_eq!(calculate_universal_charge(&input, tables.for_year(2025)), dec!(0));
/// ```
pub fn calculate_universal_charge(input: &TaxInput, tables: &TaxYearTables) -> Decimal {
    let table = &tables.universal_charge;
    let income = input.gross_income();

    if income <= table.exemption_threshold {
        return Decimal::ZERO;
    }

    let mut remaining = income;
    let mut lower = Decimal::ZERO;
    let mut charge = Decimal::ZERO;

    for band in &table.bands {
        let portion = match band.upper {
            Some(upper) => remaining.min(upper - lower),
            None => remaining,
        };
        charge += portion * band.rate;
        remaining -= portion;

        if remaining <= Decimal::ZERO {
            break;
        }
        if let Some(upper) = band.upper {
            lower = upper;
        }
    }

    charge.round_dp(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FilingStatus;
    use crate::tables::TaxTables;
    use rust_decimal_macros::dec;

    fn charge_on(total_income: Decimal) -> Decimal {
        let tables = TaxTables::bundled();
        let input = TaxInput {
            employed_income: total_income,
            self_employed_income: dec!(0),
            status: FilingStatus::Single,
            children_under18: 0,
            year: 2025,
        };
        calculate_universal_charge(&input, tables.for_year(2025))
    }

    /// UC-001: income at the exemption threshold pays nothing
    #[test]
    fn test_income_at_exemption_threshold_is_exempt() {
        assert_eq!(charge_on(dec!(13000)), dec!(0));
    }

    /// UC-002: income below the threshold pays nothing
    #[test]
    fn test_income_below_exemption_threshold_is_exempt() {
        assert_eq!(charge_on(dec!(0)), dec!(0));
        assert_eq!(charge_on(dec!(9500)), dec!(0));
    }

    /// UC-003: crossing the threshold charges from zero, not on the excess
    #[test]
    fn test_exemption_is_a_hard_cliff() {
        let charge = charge_on(dec!(13001));
        // 12012 * 0.005 + 989 * 0.02 = 60.06 + 19.78
        assert_eq!(charge, dec!(79.84));
        assert!(charge > dec!(0));
    }

    /// UC-004: marginal rates apply per band portion
    #[test]
    fn test_marginal_split_just_above_band_one() {
        assert_eq!(
            charge_on(dec!(15000)),
            dec!(12012) * dec!(0.005) + dec!(2988) * dec!(0.02)
        );
    }

    /// UC-005: worked figures across three bands
    #[test]
    fn test_three_band_income() {
        // 12012 * 0.005 + 15370 * 0.02 + 22618 * 0.03
        assert_eq!(charge_on(dec!(50000)), dec!(1046.00));
    }

    /// UC-006: income in the top band pays 8% on the remainder
    #[test]
    fn test_top_band_income() {
        // 60.06 + 307.40 + 1279.86 + 2396.48
        let expected = dec!(12012) * dec!(0.005)
            + (dec!(27382) - dec!(12012)) * dec!(0.02)
            + (dec!(70044) - dec!(27382)) * dec!(0.03)
            + (dec!(100000) - dec!(70044)) * dec!(0.08);
        assert_eq!(charge_on(dec!(100000)), expected.round_dp(2));
    }

    /// UC-007: band ceilings are inclusive on the lower band
    #[test]
    fn test_band_two_ceiling() {
        // 12012 * 0.005 + (27382 - 12012) * 0.02
        assert_eq!(charge_on(dec!(27382)), dec!(367.46));
    }

    /// UC-008: both income sources count toward the total
    #[test]
    fn test_total_income_combines_sources() {
        let tables = TaxTables::bundled();
        let input = TaxInput {
            employed_income: dec!(6500),
            self_employed_income: dec!(6500),
            status: FilingStatus::Single,
            children_under18: 0,
            year: 2025,
        };
        // 13000 total is exactly at the threshold.
        assert_eq!(
            calculate_universal_charge(&input, tables.for_year(2025)),
            dec!(0)
        );
    }
}
