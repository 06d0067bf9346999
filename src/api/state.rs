//! Application state for the Tax Calculation Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::tables::TaxTables;

/// Shared application state.
///
/// Contains the tax constant tables shared across all request handlers.
/// The tables are immutable, so handlers need no synchronization.
#[derive(Clone)]
pub struct AppState {
    /// The bundled tax-year constant tables.
    tables: Arc<TaxTables>,
}

impl AppState {
    /// Creates a new application state with the given tax tables.
    pub fn new(tables: TaxTables) -> Self {
        Self {
            tables: Arc::new(tables),
        }
    }

    /// Returns a reference to the tax tables.
    pub fn tables(&self) -> &TaxTables {
        &self.tables
    }
}
