//! 1976 U.S. Standard Atmosphere, up to the base of the 84.852 km layer.

mod layers;
mod pressure;

pub use layers::{AtmosphereLayer, LAYERS};
pub use pressure::{pressure_at_altitude, temperature_at_altitude};

/// Sea level standard pressure [Pa].
pub const PRESSURE_SEA_LEVEL_PA: f64 = 101_325.0;
/// Standard gravity [m/s²].
pub const GRAVITY_M_S2: f64 = 9.80665;
/// Molar mass of dry air [g/mol].
pub const AIR_MOLAR_MASS: f64 = 28.9644;
/// Universal gas constant as used by the 1976 model [J/(mol·K)].
pub const GAS_CONSTANT: f64 = 8.31432;
