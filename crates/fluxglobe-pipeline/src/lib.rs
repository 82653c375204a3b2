//! Reactive plumbing for fluxglobe.
//!
//! This crate contains:
//! - Dataset loading with per-record recovery
//! - The debounced `SignalPipeline` publishing a filtered view
//! - The `TimelineController` playback state machine

pub mod error;
pub mod loader;
pub mod pipeline;
pub mod timeline;

pub use error::LoadError;
pub use loader::{load_dataset, load_flows, load_signals, Dataset, RecordIssue};
pub use pipeline::{FilteredView, SignalPipeline, DEBOUNCE_WINDOW};
pub use timeline::{FeedbackSink, NoopFeedback, TimelineController, TICK_STEP};
