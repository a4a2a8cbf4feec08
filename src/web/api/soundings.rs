use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::sounding::{
    build_soundings, find_burst_index, order_track, FlightRecord, SoundingRecord,
};
use crate::web::api::error::{ApiResult, ErrorResponse};
use crate::web::server::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SoundingRequest {
    /// Flight track; samples are ordered by timestamp before use
    pub track: Vec<FlightRecord>,
    /// Ascent/descent boundary; the highest sample when omitted
    #[serde(default)]
    pub burst_index: Option<usize>,
    /// Overrides the configured telemetry cadence
    #[serde(default)]
    pub legacy_format: Option<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SoundingResponse {
    pub burst_index: usize,
    pub soundings: Vec<SoundingRecord>,
}

#[utoipa::path(
    post,
    path = "/api/soundings",
    request_body = SoundingRequest,
    responses(
        (status = 200, description = "Skew-T levels", body = SoundingResponse),
        (status = 422, description = "Track unusable for a sounding", body = ErrorResponse)
    ),
    tag = "soundings"
)]
pub async fn build(
    State(state): State<AppState>,
    Json(request): Json<SoundingRequest>,
) -> ApiResult<Json<SoundingResponse>> {
    let mut track = request.track;
    order_track(&mut track);

    let burst_index = request
        .burst_index
        .or_else(|| find_burst_index(&track))
        .unwrap_or(0);
    let legacy_format = request
        .legacy_format
        .unwrap_or(state.config.sounding.legacy_format);

    let soundings = build_soundings(&track, burst_index, legacy_format)?;

    Ok(Json(SoundingResponse {
        burst_index,
        soundings,
    }))
}
