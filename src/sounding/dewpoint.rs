/// Dewpoint reported when humidity is unavailable.
pub const DEWPOINT_MISSING: f64 = -999.0;

const MAGNUS_B: f64 = 17.625;
const MAGNUS_C: f64 = 243.04;

/// Magnus-Tetens dewpoint [°C] from air temperature [°C] and relative
/// humidity [%].
///
/// Returns `None` for negative humidity and when the result is not finite
/// (0 % humidity).
pub fn dewpoint(temperature_c: f64, relative_humidity_pct: f64) -> Option<f64> {
    if relative_humidity_pct.is_nan() || relative_humidity_pct < 0.0 {
        return None;
    }

    let ln_rh = (relative_humidity_pct / 100.0).ln();
    let gamma = MAGNUS_B * temperature_c / (MAGNUS_C + temperature_c);
    let dewpoint = MAGNUS_C * (ln_rh + gamma) / (MAGNUS_B - ln_rh - gamma);

    dewpoint.is_finite().then_some(dewpoint)
}
