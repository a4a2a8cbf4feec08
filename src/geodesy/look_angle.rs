use std::f64::consts::TAU;

use serde::Serialize;
use utoipa::ToSchema;

use super::{GeoPoint, EARTH_RADIUS_M};

/// Direction and distance from an observer point to a target point.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct LookAngle {
    pub elevation_deg: f64,
    /// East of true north, in `[0, 360)`.
    pub azimuth_deg: f64,
    /// Straight-line distance between the two points.
    pub range_m: f64,
    /// Surface distance along the great circle at sea level.
    pub great_circle_distance_m: f64,
    /// Quadrant form of the azimuth, e.g. `N 34° E`.
    pub bearing_label: String,
}

/// Computes the look angle from `a` to `b` on a spherical Earth.
///
/// When both points share latitude and longitude the bearing is degenerate:
/// azimuth is reported as 0, great-circle distance as 0 and elevation as
/// +90°/-90° depending on whether `b` is above or below `a` (0° if the
/// altitudes are also equal).
pub fn look_angle(a: &GeoPoint, b: &GeoPoint) -> LookAngle {
    let (lat_a, lon_a) = (a.lat_rad(), a.lon_rad());
    let (lat_b, lon_b) = (b.lat_rad(), b.lon_rad());

    let d_lon = lon_b - lon_a;
    let sa = lat_b.cos() * d_lon.sin();
    let sb = lat_a.cos() * lat_b.sin() - lat_a.sin() * lat_b.cos() * d_lon.cos();

    let mut bearing = sa.atan2(sb);
    if bearing < 0.0 {
        bearing += TAU;
    }

    let angle_at_centre = sa.hypot(sb).atan2(
        lat_a.sin() * lat_b.sin() + lat_a.cos() * lat_b.cos() * d_lon.cos(),
    );
    let great_circle_distance_m = angle_at_centre * EARTH_RADIUS_M;

    let ta = EARTH_RADIUS_M + a.altitude_m;
    let tb = EARTH_RADIUS_M + b.altitude_m;
    let ea = angle_at_centre.cos() * tb - ta;
    let eb = angle_at_centre.sin() * tb;
    let elevation_deg = ea.atan2(eb).to_degrees();

    // Law of cosines on the triangle of the two geocentric radii, written with
    // the half-angle form so small vertical separations survive cancellation.
    let half_angle_sin = (angle_at_centre / 2.0).sin();
    let delta_altitude = b.altitude_m - a.altitude_m;
    let range_sq = delta_altitude * delta_altitude
        + 4.0 * ta * tb * half_angle_sin * half_angle_sin;
    let range_m = range_sq.max(0.0).sqrt();

    let azimuth_deg = normalize_azimuth(bearing.to_degrees());

    LookAngle {
        elevation_deg,
        azimuth_deg,
        range_m,
        great_circle_distance_m,
        bearing_label: bearing_label(azimuth_deg),
    }
}

/// Formats an azimuth as a quadrant bearing such as `N 34° E` or `S 60° W`.
pub fn bearing_label(azimuth_deg: f64) -> String {
    let north_south = if azimuth_deg < 90.0 || azimuth_deg > 270.0 {
        'N'
    } else {
        'S'
    };
    let east_west = if azimuth_deg < 180.0 { 'E' } else { 'W' };

    let mut value = (azimuth_deg % 90.0).round();
    if (azimuth_deg > 90.0 && azimuth_deg < 180.0) || (azimuth_deg > 270.0 && azimuth_deg < 360.0)
    {
        value = 90.0 - value;
    }

    format!("{} {}° {}", north_south, value as u32, east_west)
}

fn normalize_azimuth(azimuth_deg: f64) -> f64 {
    // Adding TAU to a tiny negative bearing can round up to a full turn; the
    // `+ 0.0` folds negative zero.
    if azimuth_deg >= 360.0 {
        0.0
    } else {
        azimuth_deg + 0.0
    }
}
