//! Request types for the Tax Calculation Engine API.
//!
//! This module defines the query-string structure for the `/api/calc`
//! endpoint. Every parameter is optional and carries a default, so a bare
//! request is valid.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{FilingStatus, TaxInput};

/// Query parameters for the `/api/calc` endpoint.
///
/// All five parameters are optional. Incomes default to zero, the status
/// defaults to `single`, the child count to zero and the year to 2025.
/// Unrecognized status values deserialize to the married one-income
/// treatment rather than failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxQuery {
    /// Annual gross employment earnings.
    #[serde(default)]
    pub employed_income: Decimal,
    /// Annual gross self-employment earnings.
    #[serde(default)]
    pub self_employed_income: Decimal,
    /// Filing status of the taxpayer.
    #[serde(default)]
    pub status: FilingStatus,
    /// Number of children under 18.
    #[serde(default)]
    pub children_under18: u32,
    /// The tax year to calculate for.
    #[serde(default = "default_year")]
    pub year: i32,
}

fn default_year() -> i32 {
    2025
}

impl From<TaxQuery> for TaxInput {
    fn from(query: TaxQuery) -> Self {
        TaxInput {
            employed_income: query.employed_income,
            self_employed_income: query.self_employed_income,
            status: query.status,
            children_under18: query.children_under18,
            year: query.year,
        }
    }
}
