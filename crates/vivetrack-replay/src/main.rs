//! ViveTrack Replay - Main entry point
//!
//! Replays a recorded runtime snapshot sequence through a tracked-device
//! component and logs the resolved placements.

mod config;
mod recording;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use vivetrack_components::TrackedDeviceComponent;

#[derive(Parser, Debug)]
#[command(name = "vivetrack-replay")]
#[command(about = "Replay recorded VR runtime snapshots through the pose resolver")]
#[command(version)]
struct Args {
    /// Path to the recording (JSON)
    recording: PathBuf,

    /// Path to configuration file
    #[arg(short, long, default_value = "vivetrack.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Toggle pause before this frame (0-based)
    #[arg(long)]
    pause_at: Option<usize>,

    /// Toggle back to live before this frame (0-based)
    #[arg(long)]
    resume_at: Option<usize>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("ViveTrack Replay v{}", env!("CARGO_PKG_VERSION"));

    let config = config::load_config(&args.config)?;
    info!(
        class = %config.tracking.class,
        ordinal = config.tracking.ordinal,
        meters_to_units = config.units.meters_to_units,
        "Configuration loaded"
    );

    let recording = recording::Recording::from_file(&args.recording)?;
    info!(
        name = recording.name.as_deref().unwrap_or("unnamed"),
        frames = recording.frames.len(),
        "Recording loaded"
    );

    let mut component = TrackedDeviceComponent::new(config.tracking.class, config.tracking.ordinal)
        .with_correction(config.correction());

    for (frame_index, frame) in recording.frames.iter().enumerate() {
        if args.pause_at == Some(frame_index) || args.resume_at == Some(frame_index) {
            let state = component.toggle_pause();
            info!(frame = frame_index, state = ?state, "Toggled pause");
        }

        let snapshot = frame.to_snapshot();
        let output = component.solve(Some(&snapshot));

        if let Some(warning) = &output.warning {
            warn!(frame = frame_index, %warning, "Resolve warning");
        }
        match &output.placement {
            Some(placement) => {
                let [x, y, z] = placement.plane.origin;
                info!(
                    frame = frame_index,
                    status = output.status.as_deref().unwrap_or(""),
                    origin = %format!("({x:.4}, {y:.4}, {z:.4})"),
                    "Resolved placement"
                );
            }
            None => info!(frame = frame_index, "No placement yet"),
        }
    }

    Ok(())
}
