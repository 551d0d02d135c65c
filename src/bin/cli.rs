//! grovetrack CLI - Debug tool for grove proximity evaluation
//!
//! Usage:
//!   grovetrack-cli nearest <groves.json> --lat <LAT> --lng <LNG>
//!   grovetrack-cli walk <groves.json> <track.json>
//!   grovetrack-cli render <groves.json> [--output <file>]
//!
//! Grove files are JSON arrays of groves; track files are JSON arrays of
//! latitude/longitude points. The walk command replays a track through the
//! engine and shows which effects fire along the way.

use clap::{Parser, Subcommand};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use grovetrack::proximity::ProximityEffect;
use grovetrack::{
    geo_utils, render, GeoPoint, Grove, GroveEngine, LogNotifier, ProximityConfig, Result,
};

#[derive(Parser)]
#[command(name = "grovetrack-cli")]
#[command(about = "Debug tool for grove proximity evaluation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report the grove nearest to a point
    Nearest {
        /// JSON file with the grove list
        groves: PathBuf,

        /// Latitude of the query point
        #[arg(long)]
        lat: f64,

        /// Longitude of the query point
        #[arg(long)]
        lng: f64,
    },

    /// Replay a location track through the proximity engine
    Walk {
        /// JSON file with the grove list
        groves: PathBuf,

        /// JSON file with the location track
        track: PathBuf,

        /// Auto-spray radius in meters
        #[arg(long, default_value = "10.0")]
        spray_radius: f64,

        /// Organic alert radius in meters
        #[arg(long, default_value = "20.0")]
        alert_radius: f64,
    },

    /// Export grove markers as GeoJSON
    Render {
        /// JSON file with the grove list
        groves: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "[{:5}] {}", record.level(), record.args()))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Nearest { groves, lat, lng } => run_nearest(&groves, lat, lng),
        Commands::Walk {
            groves,
            track,
            spray_radius,
            alert_radius,
        } => run_walk(&groves, &track, spray_radius, alert_radius),
        Commands::Render { groves, output } => run_render(&groves, output.as_deref()),
    }
}

/// Load a grove list from a JSON file.
fn load_groves(path: &PathBuf) -> Result<Vec<Grove>> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Load a location track from a JSON file.
fn load_track(path: &PathBuf) -> Result<Vec<GeoPoint>> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn run_nearest(groves_path: &PathBuf, lat: f64, lng: f64) -> Result<()> {
    let groves = load_groves(groves_path)?;
    let point = GeoPoint::new(lat, lng);

    println!("Loaded {} grove(s) from {}", groves.len(), groves_path.display());

    match grovetrack::nearest_grove(&point, &groves) {
        Some(grove) => {
            let distance = grove.min_distance_to(&point);
            let center = geo_utils::compute_center(&grove.coordinates);
            println!(
                "Nearest grove: {} ({}) [{}]",
                grove.owner,
                grove.variety,
                grove.key.as_deref().unwrap_or("unpersisted")
            );
            println!("  status:   {}", status_str(grove));
            println!("  distance: {:.1} m (nearest vertex)", distance);
            println!("  center:   {:.5}, {:.5}", center.latitude, center.longitude);
        }
        None => println!("No grove with boundary coordinates found."),
    }

    Ok(())
}

fn run_walk(
    groves_path: &PathBuf,
    track_path: &PathBuf,
    spray_radius: f64,
    alert_radius: f64,
) -> Result<()> {
    let groves = load_groves(groves_path)?;
    let track = load_track(track_path)?;

    let mut engine = GroveEngine::with_config(ProximityConfig {
        auto_spray_radius: spray_radius,
        organic_alert_radius: alert_radius,
        ..ProximityConfig::default()
    });
    for grove in groves {
        engine.add_grove(grove);
    }

    println!(
        "Walking {} sample(s) over {} grove(s)",
        track.len(),
        engine.grove_count()
    );

    let mut notifier = LogNotifier;
    let mut sprayed = 0usize;
    let mut alerts = 0usize;

    for (i, sample) in track.iter().enumerate() {
        let effects = engine.handle_location(sample, &mut notifier);
        for effect in &effects {
            match effect {
                ProximityEffect::MarkSprayed { key, .. } => {
                    sprayed += 1;
                    println!(
                        "  [{:4}] ({:.5}, {:.5}) auto-sprayed grove '{}'",
                        i, sample.latitude, sample.longitude, key
                    );
                }
                ProximityEffect::Notify { title, body } => {
                    alerts += 1;
                    println!(
                        "  [{:4}] ({:.5}, {:.5}) {}: {}",
                        i, sample.latitude, sample.longitude, title, body
                    );
                }
            }
        }
    }

    println!("\n{}", "=".repeat(60));
    println!("Auto-spray mutations: {}", sprayed);
    println!("Organic alerts:       {}", alerts);
    for key in engine.grove_keys() {
        if let Some(grove) = engine.grove(&key) {
            println!("  {} -> {}", key, status_str(grove));
        }
    }

    Ok(())
}

fn run_render(groves_path: &PathBuf, output: Option<&std::path::Path>) -> Result<()> {
    let groves = load_groves(groves_path)?;
    let geojson = render::groves_to_geojson(&groves)?;

    match output {
        Some(path) => {
            fs::write(path, &geojson)?;
            println!("Wrote GeoJSON for {} grove(s) to {}", groves.len(), path.display());
        }
        None => println!("{}", geojson),
    }

    Ok(())
}

fn status_str(grove: &Grove) -> &'static str {
    if grove.organic {
        "organic"
    } else if grove.sprayed {
        "sprayed"
    } else {
        "untracked"
    }
}
