use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Coordinate, ValidationError};

/// Camera framing preset. Consumed by rendering collaborators only;
/// entity filtering never looks at the region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionPreset {
    Global,
    Africa,
    Latam,
    Apac,
    Emea,
    Mena,
    Europe,
    NorthAmerica,
}

impl RegionPreset {
    pub const ALL: [Self; 8] = [
        Self::Global,
        Self::Africa,
        Self::Latam,
        Self::Apac,
        Self::Emea,
        Self::Mena,
        Self::Europe,
        Self::NorthAmerica,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Africa => "africa",
            Self::Latam => "latam",
            Self::Apac => "apac",
            Self::Emea => "emea",
            Self::Mena => "mena",
            Self::Europe => "europe",
            Self::NorthAmerica => "north_america",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Global => "Global",
            Self::Africa => "Africa",
            Self::Latam => "Latin America",
            Self::Apac => "Asia Pacific",
            Self::Emea => "EMEA",
            Self::Mena => "MENA",
            Self::Europe => "Europe",
            Self::NorthAmerica => "North America",
        }
    }

    pub const fn center(self) -> Coordinate {
        let (latitude, longitude) = match self {
            Self::Global => (0.0, 0.0),
            Self::Africa => (4.0, 20.0),
            Self::Latam => (-15.0, -60.0),
            Self::Apac => (10.0, 115.0),
            Self::Emea => (35.0, 20.0),
            Self::Mena => (24.0, 44.0),
            Self::Europe => (54.0, 15.0),
            Self::NorthAmerica => (39.0, -98.0),
        };
        Coordinate {
            latitude,
            longitude,
        }
    }

    /// Camera standoff distance in meters for the preset.
    pub const fn camera_distance_m(self) -> f64 {
        match self {
            Self::Global => 25_000_000.0,
            Self::Africa => 4_200_000.0,
            Self::Latam => 5_000_000.0,
            Self::Apac => 6_000_000.0,
            Self::Emea => 5_200_000.0,
            Self::Mena => 3_800_000.0,
            Self::Europe => 2_800_000.0,
            Self::NorthAmerica => 3_800_000.0,
        }
    }
}

impl Display for RegionPreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegionPreset {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "global" => Ok(Self::Global),
            "africa" => Ok(Self::Africa),
            "latam" => Ok(Self::Latam),
            "apac" => Ok(Self::Apac),
            "emea" => Ok(Self::Emea),
            "mena" => Ok(Self::Mena),
            "europe" => Ok(Self::Europe),
            "north_america" | "northamerica" => Ok(Self::NorthAmerica),
            other => Err(ValidationError::InvalidRegion {
                value: other.to_owned(),
            }),
        }
    }
}
