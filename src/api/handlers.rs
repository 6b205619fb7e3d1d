//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use tracing::warn;

use super::AppState;
use super::types::{ApiError, ProductionPlanRequest, WelcomeResponse};
use crate::dispatch::Allocation;
use crate::fleet::DispatchRequest;

/// `GET /` → 200 + short usage hint.
pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the production plan API. \
                  POST a payload to /productionplan to compute a production plan.",
    })
}

/// Computes the production plan for the posted load and fleet.
///
/// `POST /productionplan` → 200 + `[{"name", "p"}]` in request order
/// Out-of-range fields or an infeasible load → 422 + `ErrorResponse`
pub async fn production_plan(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ProductionPlanRequest>,
) -> Result<Json<Allocation>, ApiError> {
    let request = DispatchRequest::from(payload);

    let errors = request.validate();
    if !errors.is_empty() {
        let err = ApiError::Validation(errors);
        warn!(error = %err, "rejected production plan request");
        return Err(err);
    }

    let include_co2 = state.include_co2;
    let allocation = tokio::task::spawn_blocking(move || request.allocate(include_co2))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .map_err(|e| {
            warn!(error = %e, "dispatch failed");
            ApiError::from(e)
        })?;

    Ok(Json(allocation))
}
