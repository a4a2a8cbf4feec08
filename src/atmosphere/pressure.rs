use super::layers::layer_for;
use super::{AIR_MOLAR_MASS, GAS_CONSTANT, GRAVITY_M_S2, PRESSURE_SEA_LEVEL_PA};

/// Standard atmosphere temperature [K] at `altitude_m`.
pub fn temperature_at_altitude(altitude_m: f64) -> f64 {
    let layer = layer_for(altitude_m);
    let delta_altitude = altitude_m - layer.base_altitude_m;
    layer.base_temperature_k + layer.lapse_rate_k_km / 1000.0 * delta_altitude
}

/// Standard atmosphere pressure [hPa] at `altitude_m`.
///
/// Valid from sea level to the top of the tabulated model (84 852 m); above
/// that the last isothermal layer is extrapolated.
pub fn pressure_at_altitude(altitude_m: f64) -> f64 {
    let layer = layer_for(altitude_m);
    let g_m_r = GRAVITY_M_S2 * AIR_MOLAR_MASS / GAS_CONSTANT;

    let base_temperature = layer.base_temperature_k;
    let lapse_rate = layer.lapse_rate_k_km / 1000.0;
    let delta_altitude = altitude_m - layer.base_altitude_m;
    let temperature = base_temperature + lapse_rate * delta_altitude;

    let pressure_ratio = if layer.is_isothermal() {
        layer.base_pressure_ratio * (-g_m_r * delta_altitude / 1000.0 / base_temperature).exp()
    } else {
        let exponent = g_m_r / lapse_rate / 1000.0;
        layer.base_pressure_ratio * (base_temperature / temperature).powf(exponent)
    };

    pressure_ratio * PRESSURE_SEA_LEVEL_PA / 100.0
}
