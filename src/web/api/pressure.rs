use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::atmosphere::{pressure_at_altitude, temperature_at_altitude};
use crate::web::api::error::{ApiError, ApiResult, ErrorResponse};

#[derive(Debug, Deserialize, ToSchema)]
pub struct PressureQuery {
    pub altitude_m: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PressureResponse {
    pub altitude_m: f64,
    pub pressure_hpa: f64,
    pub temperature_k: f64,
}

#[utoipa::path(
    get,
    path = "/api/pressure",
    params(
        ("altitude_m" = f64, Query, description = "Altitude above sea level (m)")
    ),
    responses(
        (status = 200, description = "Standard atmosphere at altitude", body = PressureResponse),
        (status = 400, description = "Invalid altitude", body = ErrorResponse)
    ),
    tag = "geometry"
)]
pub async fn standard_atmosphere(
    Query(query): Query<PressureQuery>,
) -> ApiResult<Json<PressureResponse>> {
    if !query.altitude_m.is_finite() {
        return Err(ApiError::Validation("altitude_m must be finite".into()));
    }

    Ok(Json(PressureResponse {
        altitude_m: query.altitude_m,
        pressure_hpa: pressure_at_altitude(query.altitude_m),
        temperature_k: temperature_at_altitude(query.altitude_m),
    }))
}
