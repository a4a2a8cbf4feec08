use utoipa::OpenApi;

use super::api::error::ErrorResponse;
use super::api::look_angle::LookAngleRequest;
use super::api::pressure::{PressureQuery, PressureResponse};
use super::api::soundings::{SoundingRequest, SoundingResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::api::soundings::build,
        super::api::look_angle::compute,
        super::api::pressure::standard_atmosphere,
    ),
    components(
        schemas(
            SoundingRequest,
            SoundingResponse,
            LookAngleRequest,
            PressureQuery,
            PressureResponse,
            ErrorResponse,
            crate::sounding::FlightRecord,
            crate::sounding::SoundingRecord,
            crate::geodesy::GeoPoint,
            crate::geodesy::LookAngle,
        )
    ),
    info(
        title = "Sounding-O-Mat API",
        description = "Skew-T soundings and look angles from radiosonde flight tracks",
        version = "0.1.0"
    ),
    tags(
        (name = "soundings", description = "Sounding extraction"),
        (name = "geometry", description = "Look angles and standard atmosphere")
    )
)]
pub struct ApiDoc;
