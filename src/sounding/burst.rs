use super::FlightRecord;

/// Index of the highest sample in `track`, taken as the ascent/descent
/// boundary. Ties resolve to the earliest sample.
pub fn find_burst_index(track: &[FlightRecord]) -> Option<usize> {
    track
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (idx, record)| match best {
            Some((_, altitude)) if altitude >= record.altitude_m => best,
            _ => Some((idx, record.altitude_m)),
        })
        .map(|(idx, _)| idx)
}
