//! Risk-driven marker styling lookup.
//!
//! Pure functions from risk level to presentation parameters; the renderer
//! owns nothing mutable here.

use serde::{Deserialize, Serialize};

use crate::RiskLevel;

/// Marker color palette. The color-vision-friendly variant avoids the
/// red/green axis entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Palette {
    Standard,
    ColorVisionFriendly,
}

/// Resolved presentation parameters for a signal marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarkerStyle {
    pub color: &'static str,
    pub pulse_rate_hz: f64,
    pub halo_width: f64,
    pub dot_size: f64,
}

impl MarkerStyle {
    /// Seconds per pulse cycle.
    pub fn animation_duration_s(self) -> f64 {
        1.0 / self.pulse_rate_hz
    }
}

pub fn marker_style(risk: RiskLevel, palette: Palette) -> MarkerStyle {
    let color = match (palette, risk) {
        (Palette::Standard, RiskLevel::Low) => "green",
        (Palette::Standard, RiskLevel::Medium) => "yellow",
        (Palette::Standard, RiskLevel::High) => "orange",
        (Palette::Standard, RiskLevel::Extreme) => "red",
        (Palette::ColorVisionFriendly, RiskLevel::Low) => "blue",
        (Palette::ColorVisionFriendly, RiskLevel::Medium) => "cyan",
        (Palette::ColorVisionFriendly, RiskLevel::High) => "purple",
        (Palette::ColorVisionFriendly, RiskLevel::Extreme) => "pink",
    };

    let (pulse_rate_hz, halo_width, dot_size) = match risk {
        RiskLevel::Low => (1.2, 4.0, 8.0),
        RiskLevel::Medium => (0.9, 6.0, 10.0),
        RiskLevel::High => (0.6, 8.0, 12.0),
        RiskLevel::Extreme => (0.45, 10.0, 14.0),
    };

    MarkerStyle {
        color,
        pulse_rate_hz,
        halo_width,
        dot_size,
    }
}
