//! Tax input model and related types.
//!
//! This module defines the TaxInput struct and FilingStatus enum
//! for representing the income profile a calculation runs against.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Represents the filing status of the taxpayer.
///
/// The set is closed: any status string the engine does not recognize
/// resolves to [`FilingStatus::MarriedOneIncome`], which carries the widest
/// standard-rate band and the married personal credit. Unknown statuses are
/// never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilingStatus {
    /// Single person without qualifying children.
    #[default]
    Single,
    /// Single person with qualifying children (extra standard-rate band,
    /// eligible for the Single Person Child Carer Credit).
    SingleParent,
    /// Married couple assessed on one income. Also the fallback treatment
    /// for unrecognized status values.
    MarriedOneIncome,
}

impl From<&str> for FilingStatus {
    fn from(value: &str) -> Self {
        match value {
            "single" => FilingStatus::Single,
            "single_parent" => FilingStatus::SingleParent,
            _ => FilingStatus::MarriedOneIncome,
        }
    }
}

// Hand-written so that unrecognized wire values fall through to the married
// treatment instead of failing deserialization.
impl<'de> Deserialize<'de> for FilingStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(FilingStatus::from(value.as_str()))
    }
}

impl std::fmt::Display for FilingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilingStatus::Single => write!(f, "single"),
            FilingStatus::SingleParent => write!(f, "single_parent"),
            FilingStatus::MarriedOneIncome => write!(f, "married_one_income"),
        }
    }
}

/// Represents the income profile a tax calculation runs against.
///
/// Immutable once constructed; a profile is built from request parameters,
/// consumed by the calculation and discarded. No state is carried between
/// calculations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxInput {
    /// Annual gross employment earnings.
    pub employed_income: Decimal,
    /// Annual gross self-employment earnings.
    pub self_employed_income: Decimal,
    /// The filing status of the taxpayer.
    pub status: FilingStatus,
    /// Number of children under 18. Only meaningful when the status is
    /// [`FilingStatus::SingleParent`].
    pub children_under18: u32,
    /// The tax year. Selects the constants table; currently a single year of
    /// constants ships, so the value is echoed through unchanged.
    pub year: i32,
}

impl TaxInput {
    /// Returns the total gross income across both income sources.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use tax_engine::models::{FilingStatus, TaxInput};
    ///
    /// let input = TaxInput {
    ///     employed_income: dec!(30000),
    ///     self_employed_income: dec!(12000),
    ///     status: FilingStatus::Single,
    ///     children_under18: 0,
    ///     year: 2025,
    /// };
    /// assert_eq!(input.gross_income(), dec!(42000));
    /// ```
    pub fn gross_income(&self) -> Decimal {
        self.employed_income + self.self_employed_income
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn create_test_input(status: FilingStatus) -> TaxInput {
        TaxInput {
            employed_income: dec!(50000),
            self_employed_income: dec!(0),
            status,
            children_under18: 0,
            year: 2025,
        }
    }

    #[test]
    fn test_filing_status_from_known_strings() {
        assert_eq!(FilingStatus::from("single"), FilingStatus::Single);
        assert_eq!(FilingStatus::from("single_parent"), FilingStatus::SingleParent);
        assert_eq!(
            FilingStatus::from("married_one_income"),
            FilingStatus::MarriedOneIncome
        );
    }

    #[test]
    fn test_filing_status_unknown_string_falls_back_to_married() {
        assert_eq!(FilingStatus::from("widowed"), FilingStatus::MarriedOneIncome);
        assert_eq!(FilingStatus::from(""), FilingStatus::MarriedOneIncome);
        assert_eq!(FilingStatus::from("SINGLE"), FilingStatus::MarriedOneIncome);
    }

    #[test]
    fn test_filing_status_default_is_single() {
        assert_eq!(FilingStatus::default(), FilingStatus::Single);
    }

    #[test]
    fn test_filing_status_serialization() {
        assert_eq!(
            serde_json::to_string(&FilingStatus::Single).unwrap(),
            "\"single\""
        );
        assert_eq!(
            serde_json::to_string(&FilingStatus::SingleParent).unwrap(),
            "\"single_parent\""
        );
        assert_eq!(
            serde_json::to_string(&FilingStatus::MarriedOneIncome).unwrap(),
            "\"married_one_income\""
        );
    }

    #[test]
    fn test_filing_status_deserialization_never_fails() {
        let status: FilingStatus = serde_json::from_str("\"single_parent\"").unwrap();
        assert_eq!(status, FilingStatus::SingleParent);

        let status: FilingStatus = serde_json::from_str("\"cohabiting\"").unwrap();
        assert_eq!(status, FilingStatus::MarriedOneIncome);
    }

    #[test]
    fn test_filing_status_display_matches_wire_form() {
        assert_eq!(FilingStatus::Single.to_string(), "single");
        assert_eq!(FilingStatus::SingleParent.to_string(), "single_parent");
        assert_eq!(
            FilingStatus::MarriedOneIncome.to_string(),
            "married_one_income"
        );
    }

    #[test]
    fn test_deserialize_tax_input() {
        let json = r#"{
            "employed_income": "50000",
            "self_employed_income": "0",
            "status": "single",
            "children_under18": 0,
            "year": 2025
        }"#;

        let input: TaxInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.employed_income, dec!(50000));
        assert_eq!(input.self_employed_income, dec!(0));
        assert_eq!(input.status, FilingStatus::Single);
        assert_eq!(input.children_under18, 0);
        assert_eq!(input.year, 2025);
    }

    #[test]
    fn test_serialize_tax_input_round_trip() {
        let input = create_test_input(FilingStatus::SingleParent);
        let json = serde_json::to_string(&input).unwrap();

        let deserialized: TaxInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, deserialized);
    }

    #[test]
    fn test_gross_income_sums_both_sources() {
        let input = TaxInput {
            employed_income: dec!(30000),
            self_employed_income: dec!(15000.50),
            status: FilingStatus::Single,
            children_under18: 0,
            year: 2025,
        };
        assert_eq!(input.gross_income(), dec!(45000.50));
    }

    #[test]
    fn test_gross_income_zero_when_no_income() {
        let input = TaxInput {
            employed_income: Decimal::ZERO,
            self_employed_income: Decimal::ZERO,
            status: FilingStatus::Single,
            children_under18: 0,
            year: 2025,
        };
        assert_eq!(input.gross_income(), Decimal::ZERO);
    }
}
