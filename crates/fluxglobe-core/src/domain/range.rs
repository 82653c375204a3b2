use serde::{Deserialize, Serialize};

use crate::{UtcDateTime, ValidationError};

/// Inclusive closed range of instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstantRange {
    lower: UtcDateTime,
    upper: UtcDateTime,
}

impl InstantRange {
    pub fn new(lower: UtcDateTime, upper: UtcDateTime) -> Result<Self, ValidationError> {
        if lower > upper {
            return Err(ValidationError::InvalidRange {
                lower: lower.format_rfc3339(),
                upper: upper.format_rfc3339(),
            });
        }

        Ok(Self { lower, upper })
    }

    /// Zero-width range admitting exactly one instant.
    pub fn point(at: UtcDateTime) -> Self {
        Self {
            lower: at,
            upper: at,
        }
    }

    /// Range admitting every representable instant.
    pub fn unbounded() -> Self {
        Self {
            lower: UtcDateTime::DISTANT_PAST,
            upper: UtcDateTime::DISTANT_FUTURE,
        }
    }

    pub fn lower(self) -> UtcDateTime {
        self.lower
    }

    pub fn upper(self) -> UtcDateTime {
        self.upper
    }

    pub fn contains(self, instant: UtcDateTime) -> bool {
        self.lower <= instant && instant <= self.upper
    }

    pub fn duration_seconds(self) -> f64 {
        self.upper.seconds_since(self.lower)
    }
}

impl Default for InstantRange {
    fn default() -> Self {
        Self::unbounded()
    }
}
