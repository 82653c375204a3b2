//! Core contracts for fluxglobe.
//!
//! This crate contains:
//! - Canonical domain models and validation
//! - Great-circle arc tessellation with adaptive resolution
//! - Pure filter predicates over signals and flows
//! - Risk styling lookup for rendering collaborators

pub mod arc;
pub mod domain;
pub mod error;
pub mod filter;
pub mod styling;

pub use domain::{
    AssetClass, AssetFlow, AssetSignal, Coordinate, InstantRange, RegionPreset, RiskLevel,
    UtcDateTime,
};
pub use error::{CoreError, ValidationError};
pub use filter::FilterConfig;
pub use styling::{marker_style, MarkerStyle, Palette};
