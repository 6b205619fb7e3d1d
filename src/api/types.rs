//! Wire types for the production-plan endpoint.
//!
//! Field names follow the public payload contract (`"gas(euro/MWh)"`,
//! `"type"`, ...) and are mapped onto the crate's fleet types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ConfigError;
use crate::dispatch::DispatchError;
use crate::fleet::{DispatchRequest, Fuels, Plant, PlantKind};

/// Body of `POST /productionplan`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProductionPlanRequest {
    /// Power to produce (MW).
    pub load: f64,
    /// Fuel prices and wind availability.
    pub fuels: FuelsPayload,
    /// Fleet in request order.
    pub powerplants: Vec<PowerplantPayload>,
}

/// Fuel section of the request payload.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FuelsPayload {
    #[serde(rename = "gas(euro/MWh)")]
    pub gas: f64,
    #[serde(rename = "kerosine(euro/MWh)")]
    pub kerosine: f64,
    #[serde(rename = "co2(euro/ton)")]
    pub co2: f64,
    #[serde(rename = "wind(%)")]
    pub wind: f64,
}

/// One plant in the request payload.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PowerplantPayload {
    pub name: String,
    /// `gasfired`, `turbojet` or `windturbine`.
    #[serde(rename = "type")]
    pub kind: String,
    pub efficiency: f64,
    pub pmin: f64,
    pub pmax: f64,
}

impl From<ProductionPlanRequest> for DispatchRequest {
    fn from(req: ProductionPlanRequest) -> Self {
        let fuels = Fuels {
            gas_euro_per_mwh: req.fuels.gas,
            kerosine_euro_per_mwh: req.fuels.kerosine,
            co2_euro_per_ton: req.fuels.co2,
            wind_pct: req.fuels.wind,
        };
        let plants = req
            .powerplants
            .into_iter()
            .map(|p| Plant {
                name: p.name,
                kind: PlantKind::from(p.kind),
                efficiency: p.efficiency,
                pmin: p.pmin,
                pmax: p.pmax,
            })
            .collect();
        DispatchRequest::new(req.load, fuels, plants)
    }
}

/// Body of `GET /`.
#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

/// Error body for all non-2xx responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error category.
    pub error: String,
    /// Human-readable description.
    pub detail: String,
}

/// Failures of the production-plan endpoint.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Payload fields out of range.
    #[error("{}", join_errors(.0))]
    Validation(Vec<ConfigError>),

    /// The dispatcher rejected the request.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    /// Unexpected failure while computing the plan.
    #[error("internal server error")]
    Internal(String),
}

fn join_errors(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Dispatch(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            Self::Validation(_) => "ValidationError",
            Self::Dispatch(DispatchError::InvalidInput { .. }) => "InvalidInput",
            Self::Dispatch(DispatchError::InfeasibleLoad { .. }) => "InfeasibleLoad",
            Self::Internal(_) => "InternalError",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(detail) = &self {
            tracing::error!(%detail, "production plan failed unexpectedly");
        }
        let body = ErrorResponse {
            error: self.error_type().to_string(),
            detail: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
