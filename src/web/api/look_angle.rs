use axum::{extract::State, Json};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::geodesy::{look_angle, GeoPoint, LookAngle};
use crate::web::api::error::{ApiError, ApiResult, ErrorResponse};
use crate::web::server::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LookAngleRequest {
    /// Observer; the configured station when omitted
    #[serde(default)]
    pub from: Option<GeoPoint>,
    pub to: GeoPoint,
}

#[utoipa::path(
    post,
    path = "/api/look-angle",
    request_body = LookAngleRequest,
    responses(
        (status = 200, description = "Look angle from observer to target", body = LookAngle),
        (status = 400, description = "No observer and no station configured", body = ErrorResponse)
    ),
    tag = "geometry"
)]
pub async fn compute(
    State(state): State<AppState>,
    Json(request): Json<LookAngleRequest>,
) -> ApiResult<Json<LookAngle>> {
    let from = request
        .from
        .or(state.station)
        .ok_or_else(|| ApiError::Validation("No observer given and no station configured".into()))?;

    Ok(Json(look_angle(&from, &request.to)))
}

#[cfg(test)]
mod test {
    use super::{compute, LookAngleRequest};
    use crate::geodesy::GeoPoint;
    use crate::web::api::error::ApiError;
    use crate::web::server::AppState;
    use crate::web::Config;
    use axum::{extract::State, Json};

    fn station_state() -> AppState {
        AppState::new(
            Config::from_yaml("station:\n  coordinates: \"-35.0,138.5\"\n  altitude_m: 100\n")
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn defaults_to_station() {
        let request = LookAngleRequest {
            from: None,
            to: GeoPoint::new(-35.0, 138.5, 1100.0),
        };
        let Json(result) = compute(State(station_state()), Json(request)).await.unwrap();
        assert!((result.elevation_deg - 90.0).abs() < 1e-6);
        assert!((result.range_m - 1000.0).abs() < 1e-2);
    }

    #[tokio::test]
    async fn explicit_observer() {
        let request = LookAngleRequest {
            from: Some(GeoPoint::new(0.0, 0.0, 0.0)),
            to: GeoPoint::new(0.0, 1.0, 0.0),
        };
        let Json(result) = compute(State(station_state()), Json(request)).await.unwrap();
        assert!((result.azimuth_deg - 90.0).abs() < 1e-6);
    }

    #[tokio::test]
    async fn missing_observer() {
        let state = AppState::new(Config::from_yaml("{}").unwrap());
        let request = LookAngleRequest {
            from: None,
            to: GeoPoint::new(0.0, 1.0, 0.0),
        };
        let result = compute(State(state), Json(request)).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }
}
