//! Personal Tax Calculation Engine for Irish income tax.
//!
//! This crate computes a simplified personal tax breakdown (income tax,
//! Universal Social Charge and Pay Related Social Insurance) for a given
//! income profile, filing status and tax year, and exposes the calculation
//! through a single read-only HTTP query endpoint.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod error;
pub mod models;
pub mod tables;
