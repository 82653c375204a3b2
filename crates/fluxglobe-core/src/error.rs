use thiserror::Error;

/// Validation and contract errors exposed by `fluxglobe-core`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("latitude {value} out of range [-90, 90]")]
    LatitudeOutOfRange { value: f64 },
    #[error("longitude {value} out of range [-180, 180]")]
    LongitudeOutOfRange { value: f64 },

    #[error("invalid asset class '{value}', expected one of currency, crypto, bond, commodity, stablecoin")]
    InvalidAssetClass { value: String },
    #[error("invalid risk level '{value}', expected one of low, medium, high, extreme")]
    InvalidRiskLevel { value: String },
    #[error("invalid region '{value}'")]
    InvalidRegion { value: String },

    #[error("timestamp must be RFC3339 UTC (suffix Z): '{value}'")]
    TimestampNotUtc { value: String },
    #[error("unparseable timestamp '{value}'")]
    InvalidTimestamp { value: String },

    #[error("range lower bound {lower} is after upper bound {upper}")]
    InvalidRange { lower: String, upper: String },

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("field '{field}' must be non-negative")]
    NegativeValue { field: &'static str },

    #[error("entity id cannot be empty")]
    EmptyId,
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
