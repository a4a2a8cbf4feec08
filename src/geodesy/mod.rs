mod look_angle;
mod point;

pub use look_angle::{bearing_label, look_angle, LookAngle};
pub use point::GeoPoint;

/// Mean Earth radius used by the spherical look-angle model.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;
