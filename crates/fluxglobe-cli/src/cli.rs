use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use fluxglobe_core::{AssetClass, RiskLevel};

#[derive(Debug, Parser)]
#[command(
    name = "fluxglobe",
    about = "Asset signal filtering, flow arc tessellation, and timeline playback",
    version
)]
pub struct Cli {
    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Tessellate a great-circle arc between two coordinates.
    Arc(ArcArgs),
    /// Load a dataset and print the filtered view.
    Signals(SignalsArgs),
    /// Play the timeline over a dataset and report per-instant counts.
    Playback(PlaybackArgs),
}

#[derive(Debug, Args)]
pub struct ArcArgs {
    #[arg(long, allow_hyphen_values = true)]
    pub from_lat: f64,
    #[arg(long, allow_hyphen_values = true)]
    pub from_lon: f64,
    #[arg(long, allow_hyphen_values = true)]
    pub to_lat: f64,
    #[arg(long, allow_hyphen_values = true)]
    pub to_lon: f64,

    /// Upper cap on tessellation segments.
    #[arg(long, default_value_t = 64)]
    pub segments: usize,

    /// Radial arch height as a fraction of the Earth radius.
    #[arg(long, default_value_t = 0.12)]
    pub height_scale: f64,

    /// Flow magnitude; when given, width/opacity hints are included.
    #[arg(long)]
    pub magnitude: Option<f64>,
}

#[derive(Debug, Args)]
pub struct SignalsArgs {
    /// Path to the signal records JSON array.
    #[arg(long)]
    pub signals: PathBuf,

    /// Path to the flow records JSON array.
    #[arg(long)]
    pub flows: Option<PathBuf>,

    /// Asset classes to keep; defaults to all when omitted.
    #[arg(long = "class", value_name = "CLASS")]
    pub classes: Vec<AssetClass>,

    /// Inclusive minimum risk level.
    #[arg(long)]
    pub risk_min: Option<RiskLevel>,

    /// Inclusive window start (RFC3339 UTC).
    #[arg(long)]
    pub window_start: Option<String>,

    /// Inclusive window end (RFC3339 UTC).
    #[arg(long)]
    pub window_end: Option<String>,

    /// Show only entities timestamped exactly at this instant.
    #[arg(long, conflicts_with_all = ["window_start", "window_end"])]
    pub at: Option<String>,

    /// Hide all flows regardless of class.
    #[arg(long)]
    pub no_flows: bool,
}

#[derive(Debug, Args)]
pub struct PlaybackArgs {
    #[arg(long)]
    pub signals: PathBuf,

    #[arg(long)]
    pub flows: PathBuf,

    /// Stop after this many ticks even if the timeline has not reached the
    /// end of its bounds.
    #[arg(long)]
    pub ticks: Option<u32>,
}
