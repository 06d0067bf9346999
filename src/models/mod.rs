//! Core data models for the Tax Calculation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod tax_input;
mod tax_result;

pub use tax_input::{FilingStatus, TaxInput};
pub use tax_result::{IncomeTaxBreakdown, TaxResult};
