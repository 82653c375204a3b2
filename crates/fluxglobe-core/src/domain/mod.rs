mod asset_class;
mod coordinate;
mod range;
mod region;
mod risk;
mod signal;
mod timestamp;

pub use asset_class::AssetClass;
pub use coordinate::Coordinate;
pub use range::InstantRange;
pub use region::RegionPreset;
pub use risk::RiskLevel;
pub use signal::{AssetFlow, AssetSignal};
pub use timestamp::UtcDateTime;
