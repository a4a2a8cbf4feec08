mod burst;
mod dewpoint;
mod error;
mod pipeline;
mod track_loader;
mod types;

pub use burst::find_burst_index;
pub use dewpoint::{dewpoint, DEWPOINT_MISSING};
pub use error::{SoundingError, TrackError};
pub use pipeline::{build_soundings, DECIMATION, LEGACY_DECIMATION};
pub use track_loader::{order_track, parse_track, TrackFormat, TrackLoader};
pub use types::{FlightRecord, SoundingRecord};
