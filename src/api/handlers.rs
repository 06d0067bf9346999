//! HTTP request handlers for the Tax Calculation Engine API.
//!
//! This module contains the handler for the single query endpoint.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_tax;
use crate::models::TaxInput;

use super::request::TaxQuery;
use super::response::ApiError;
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/calc", get(calculate_handler))
        .with_state(state)
}

/// Handler for the GET /api/calc endpoint.
///
/// Binds the query parameters into an input profile, runs the calculation
/// and returns the aggregated breakdown. Stateless and side-effect free, so
/// the endpoint is idempotent and cacheable by inputs.
async fn calculate_handler(
    State(state): State<AppState>,
    query: Result<Query<TaxQuery>, QueryRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing tax calculation request");

    // The only failure mode: a query value the transport layer cannot
    // type-coerce. Unknown status strings are not an error; they fall back
    // during deserialization.
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Query rejection"
            );
            let error = ApiError::malformed_query(rejection.body_text());
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let input: TaxInput = query.into();
    let tables = state.tables().for_year(input.year);

    let start_time = Instant::now();
    let result = calculate_tax(&input, tables);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        status = %input.status,
        gross_income = %result.gross_income,
        total_deductions = %result.total_deductions,
        net_income = %result.net_income,
        duration_us = duration.as_micros(),
        "Calculation completed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(result),
    )
        .into_response()
}
