//! HTTP API module for the Tax Calculation Engine.
//!
//! This module provides the single read-only query endpoint that binds
//! request parameters into an input profile and returns the calculated
//! breakdown.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::TaxQuery;
pub use response::ApiError;
pub use state::AppState;
