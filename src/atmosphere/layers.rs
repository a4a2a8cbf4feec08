#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphereLayer {
    /// Geopotential altitude at the bottom of the layer [m].
    pub base_altitude_m: f64,
    /// Temperature at the layer base [K].
    pub base_temperature_k: f64,
    /// Temperature gradient through the layer [K/km].
    pub lapse_rate_k_km: f64,
    /// Pressure at the layer base relative to sea level.
    pub base_pressure_ratio: f64,
}

impl AtmosphereLayer {
    const fn new(
        base_altitude_m: f64,
        base_temperature_k: f64,
        lapse_rate_k_km: f64,
        base_pressure_ratio: f64,
    ) -> Self {
        Self {
            base_altitude_m,
            base_temperature_k,
            lapse_rate_k_km,
            base_pressure_ratio,
        }
    }

    pub fn is_isothermal(&self) -> bool {
        (self.lapse_rate_k_km / 1000.0).abs() < 1e-10
    }
}

/// Layers sorted by ascending base altitude.
pub const LAYERS: [AtmosphereLayer; 8] = [
    // Troposphere
    AtmosphereLayer::new(0.0, 288.15, -6.5, 1.0),
    // Tropopause
    AtmosphereLayer::new(11_000.0, 216.65, 0.0, 2.23361105092158e-1),
    // Stratosphere
    AtmosphereLayer::new(20_000.0, 216.65, 1.0, 5.403295010784876e-2),
    AtmosphereLayer::new(32_000.0, 228.65, 2.8, 8.566678359291667e-3),
    // Stratopause
    AtmosphereLayer::new(47_000.0, 270.65, 0.0, 1.0945601337771144e-3),
    // Mesosphere
    AtmosphereLayer::new(51_000.0, 270.65, -2.8, 6.606353132858367e-4),
    AtmosphereLayer::new(71_000.0, 214.65, -2.0, 3.904683373343926e-5),
    AtmosphereLayer::new(84_852.0, 186.946, 0.0, 3.6850095235747942e-6),
];

/// Highest layer whose base lies at or below `altitude_m`. Altitudes below
/// sea level fall back to the troposphere.
pub(crate) fn layer_for(altitude_m: f64) -> &'static AtmosphereLayer {
    LAYERS
        .iter()
        .rev()
        .find(|layer| layer.base_altitude_m <= altitude_m)
        .unwrap_or(&LAYERS[0])
}

#[cfg(test)]
mod test {
    use super::{layer_for, LAYERS};
    use rstest::rstest;

    #[rstest]
    #[case(-120.0, 0)]
    #[case(0.0, 0)]
    #[case(10_999.9, 0)]
    #[case(11_000.0, 1)]
    #[case(25_000.0, 2)]
    #[case(47_000.0, 4)]
    #[case(84_852.0, 7)]
    #[case(120_000.0, 7)]
    fn layer_selection(#[case] altitude: f64, #[case] expected: usize) {
        assert_eq!(*layer_for(altitude), LAYERS[expected]);
    }

    #[test]
    fn layers_are_sorted() {
        assert!(LAYERS
            .windows(2)
            .all(|w| w[0].base_altitude_m < w[1].base_altitude_m));
    }

    #[test]
    fn isothermal_layers() {
        let isothermal: Vec<_> = LAYERS
            .iter()
            .enumerate()
            .filter(|(_, l)| l.is_isothermal())
            .map(|(i, _)| i)
            .collect();
        assert_eq!(isothermal, vec![1, 4, 7]);
    }
}
