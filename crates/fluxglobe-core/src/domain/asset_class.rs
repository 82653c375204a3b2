use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Canonical asset class for signals and flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetClass {
    Currency,
    Crypto,
    Bond,
    Commodity,
    Stablecoin,
}

impl AssetClass {
    pub const ALL: [Self; 5] = [
        Self::Currency,
        Self::Crypto,
        Self::Bond,
        Self::Commodity,
        Self::Stablecoin,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Currency => "currency",
            Self::Crypto => "crypto",
            Self::Bond => "bond",
            Self::Commodity => "commodity",
            Self::Stablecoin => "stablecoin",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Currency => "Currency",
            Self::Crypto => "Cryptocurrency",
            Self::Bond => "Bond",
            Self::Commodity => "Commodity",
            Self::Stablecoin => "Stablecoin",
        }
    }
}

impl Display for AssetClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetClass {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "currency" => Ok(Self::Currency),
            "crypto" => Ok(Self::Crypto),
            "bond" => Ok(Self::Bond),
            "commodity" => Ok(Self::Commodity),
            "stablecoin" => Ok(Self::Stablecoin),
            other => Err(ValidationError::InvalidAssetClass {
                value: other.to_owned(),
            }),
        }
    }
}
