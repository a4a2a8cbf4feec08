use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use sounding_o_mat::atmosphere::{pressure_at_altitude, temperature_at_altitude};
use sounding_o_mat::geodesy::{look_angle, GeoPoint};
use sounding_o_mat::sounding::{build_soundings, find_burst_index, TrackLoader};
use sounding_o_mat::web::{run_server, Config};

#[derive(Parser)]
#[command(name = "sounding-o-mat")]
#[command(about = "Skew-T soundings from radiosonde flight tracks")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract skew-T levels from a flight track (JSON or YAML)
    Soundings {
        track: PathBuf,
        /// Ascent/descent boundary; the highest sample when omitted
        #[arg(long)]
        burst_index: Option<usize>,
        /// Track uses the coarse legacy telemetry cadence
        #[arg(long)]
        legacy: bool,
    },
    /// Look angle between two "lat,lon" positions
    LookAngle {
        #[arg(allow_hyphen_values = true)]
        from: String,
        #[arg(allow_hyphen_values = true)]
        to: String,
        #[arg(long, default_value_t = 0.0)]
        from_alt: f64,
        #[arg(long, default_value_t = 0.0)]
        to_alt: f64,
    },
    /// Standard atmosphere pressure at an altitude in meters
    Pressure {
        #[arg(allow_hyphen_values = true)]
        altitude_m: f64,
    },
    /// Serve the HTTP API
    Serve {
        #[arg(long)]
        config: String,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Soundings {
            track,
            burst_index,
            legacy,
        } => soundings(track, burst_index, legacy),
        Commands::LookAngle {
            from,
            to,
            from_alt,
            to_alt,
        } => look_angle_between(&from, &to, from_alt, to_alt),
        Commands::Pressure { altitude_m } => pressure(altitude_m),
        Commands::Serve { config } => serve(&config),
    }
}

fn soundings(path: PathBuf, burst_index: Option<usize>, legacy: bool) -> ExitCode {
    let track = match TrackLoader::new(path).load() {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error loading track: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let burst_index = burst_index
        .or_else(|| find_burst_index(&track))
        .unwrap_or(0);

    match build_soundings(&track, burst_index, legacy) {
        Ok(levels) => match serde_json::to_string_pretty(&levels) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error serializing soundings: {}", e);
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("{} ({})", e, e.reason());
            ExitCode::FAILURE
        }
    }
}

fn look_angle_between(from: &str, to: &str, from_alt: f64, to_alt: f64) -> ExitCode {
    let (Some(a), Some(b)) = (
        GeoPoint::from_coordinates(from, Some(from_alt)),
        GeoPoint::from_coordinates(to, Some(to_alt)),
    ) else {
        eprintln!("Coordinates must be given as \"lat,lon\"");
        return ExitCode::FAILURE;
    };

    let result = look_angle(&a, &b);
    println!("Elevation:   {:.2}°", result.elevation_deg);
    println!(
        "Azimuth:     {:.2}° ({})",
        result.azimuth_deg, result.bearing_label
    );
    println!("Range:       {:.1} m", result.range_m);
    println!("Surface:     {:.1} m", result.great_circle_distance_m);
    ExitCode::SUCCESS
}

fn pressure(altitude_m: f64) -> ExitCode {
    println!(
        "{:.1} m: {:.2} hPa, {:.2} K",
        altitude_m,
        pressure_at_altitude(altitude_m),
        temperature_at_altitude(altitude_m)
    );
    ExitCode::SUCCESS
}

fn serve(path: &str) -> ExitCode {
    let config = match Config::from_file(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error reading config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error starting runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run_server(config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}
