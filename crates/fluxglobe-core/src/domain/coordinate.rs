use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Geographic point in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        if !latitude.is_finite() {
            return Err(ValidationError::NonFiniteValue { field: "latitude" });
        }
        if !longitude.is_finite() {
            return Err(ValidationError::NonFiniteValue { field: "longitude" });
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ValidationError::LatitudeOutOfRange { value: latitude });
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ValidationError::LongitudeOutOfRange { value: longitude });
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude_rad(self) -> f64 {
        self.latitude.to_radians()
    }

    pub fn longitude_rad(self) -> f64 {
        self.longitude.to_radians()
    }
}
