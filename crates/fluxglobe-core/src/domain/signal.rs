use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::arc::haversine_m;
use crate::{AssetClass, Coordinate, RiskLevel, UtcDateTime, ValidationError};

/// Point-located asset signal. Identity and equality are by `id` alone;
/// records are immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetSignal {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub asset_class: AssetClass,
    pub latitude: f64,
    pub longitude: f64,
    pub value: f64,
    pub risk: RiskLevel,
    pub country: String,
    pub ts: UtcDateTime,
}

impl AssetSignal {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        asset_class: AssetClass,
        location: Coordinate,
        value: f64,
        risk: RiskLevel,
        country: impl Into<String>,
        ts: UtcDateTime,
    ) -> Result<Self, ValidationError> {
        let signal = Self {
            id: id.into(),
            name: name.into(),
            asset_class,
            latitude: location.latitude,
            longitude: location.longitude,
            value,
            risk,
            country: country.into(),
            ts,
        };
        signal.validate()?;

        Ok(signal)
    }

    /// Checks the record invariants. Deserialized records bypass the
    /// constructor, so the loader re-runs this on every parsed record.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::EmptyId);
        }
        Coordinate::new(self.latitude, self.longitude)?;
        if !self.value.is_finite() {
            return Err(ValidationError::NonFiniteValue { field: "value" });
        }

        Ok(())
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

impl PartialEq for AssetSignal {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for AssetSignal {}

impl Hash for AssetSignal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Directional flow between two locations. Identity and equality by `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetFlow {
    pub id: String,
    #[serde(rename = "fromLat")]
    pub from_lat: f64,
    #[serde(rename = "fromLon")]
    pub from_lon: f64,
    #[serde(rename = "toLat")]
    pub to_lat: f64,
    #[serde(rename = "toLon")]
    pub to_lon: f64,
    pub magnitude: f64,
    #[serde(rename = "classTag")]
    pub class_tag: AssetClass,
    pub ts: UtcDateTime,
}

impl AssetFlow {
    pub fn new(
        id: impl Into<String>,
        from: Coordinate,
        to: Coordinate,
        magnitude: f64,
        class_tag: AssetClass,
        ts: UtcDateTime,
    ) -> Result<Self, ValidationError> {
        let flow = Self {
            id: id.into(),
            from_lat: from.latitude,
            from_lon: from.longitude,
            to_lat: to.latitude,
            to_lon: to.longitude,
            magnitude,
            class_tag,
            ts,
        };
        flow.validate()?;

        Ok(flow)
    }

    /// Checks the record invariants; see [`AssetSignal::validate`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::EmptyId);
        }
        Coordinate::new(self.from_lat, self.from_lon)?;
        Coordinate::new(self.to_lat, self.to_lon)?;
        if !self.magnitude.is_finite() {
            return Err(ValidationError::NonFiniteValue { field: "magnitude" });
        }
        if self.magnitude < 0.0 {
            return Err(ValidationError::NegativeValue { field: "magnitude" });
        }

        Ok(())
    }

    pub fn from_coordinate(&self) -> Coordinate {
        Coordinate {
            latitude: self.from_lat,
            longitude: self.from_lon,
        }
    }

    pub fn to_coordinate(&self) -> Coordinate {
        Coordinate {
            latitude: self.to_lat,
            longitude: self.to_lon,
        }
    }

    /// Great-circle surface distance between the endpoints, in meters.
    pub fn distance_m(&self) -> f64 {
        haversine_m(self.from_coordinate(), self.to_coordinate())
    }
}

impl PartialEq for AssetFlow {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for AssetFlow {}

impl Hash for AssetFlow {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(latitude: f64, longitude: f64) -> Coordinate {
        Coordinate::new(latitude, longitude).expect("must validate")
    }

    fn ts() -> UtcDateTime {
        UtcDateTime::parse("2024-01-01T00:00:00Z").expect("must parse")
    }

    #[test]
    fn signal_equality_is_by_id() {
        let a = AssetSignal::new(
            "sig-1",
            "BTC Lagos",
            AssetClass::Crypto,
            coord(6.5, 3.4),
            1_000.0,
            RiskLevel::High,
            "NG",
            ts(),
        )
        .expect("must validate");
        let mut b = a.clone();
        b.value = 2_000.0;
        assert_eq!(a, b);
    }

    #[test]
    fn signal_rejects_empty_id() {
        let err = AssetSignal::new(
            "",
            "x",
            AssetClass::Bond,
            coord(0.0, 0.0),
            1.0,
            RiskLevel::Low,
            "US",
            ts(),
        )
        .expect_err("must fail");
        assert!(matches!(err, ValidationError::EmptyId));
    }

    #[test]
    fn flow_rejects_negative_magnitude() {
        let err = AssetFlow::new(
            "flow-1",
            coord(0.0, 0.0),
            coord(1.0, 1.0),
            -0.5,
            AssetClass::Currency,
            ts(),
        )
        .expect_err("must fail");
        assert!(matches!(err, ValidationError::NegativeValue { .. }));
    }

    #[test]
    fn flow_distance_for_one_degree_of_longitude_at_equator() {
        let flow = AssetFlow::new(
            "flow-1",
            coord(0.0, 0.0),
            coord(0.0, 1.0),
            1.0,
            AssetClass::Currency,
            ts(),
        )
        .expect("must validate");
        // One degree of longitude at the equator is roughly 111 km.
        let km = flow.distance_m() / 1000.0;
        assert!((km - 111.0).abs() < 1.0, "got {km} km");
    }

    #[test]
    fn signal_record_deserializes_from_dataset_shape() {
        let json = r#"{
            "id": "sig-9",
            "name": "Naira Spot",
            "type": "currency",
            "latitude": 9.06,
            "longitude": 7.49,
            "value": 1523000.0,
            "risk": "extreme",
            "country": "NG",
            "ts": "2024-03-15T12:30:00.250Z"
        }"#;
        let signal: AssetSignal = serde_json::from_str(json).expect("must deserialize");
        assert_eq!(signal.asset_class, AssetClass::Currency);
        assert_eq!(signal.risk, RiskLevel::Extreme);
    }

    #[test]
    fn flow_record_deserializes_from_dataset_shape() {
        let json = r#"{
            "id": "flow-9",
            "fromLat": 6.5,
            "fromLon": 3.4,
            "toLat": 51.5,
            "toLon": -0.1,
            "magnitude": 2.5,
            "classTag": "stablecoin",
            "ts": "2024-03-15T12:00:00Z"
        }"#;
        let flow: AssetFlow = serde_json::from_str(json).expect("must deserialize");
        assert_eq!(flow.class_tag, AssetClass::Stablecoin);
        assert_eq!(flow.to_coordinate().latitude, 51.5);
    }

    #[test]
    fn validate_catches_what_deserialization_lets_through() {
        // serde alone accepts any floats; the invariants live in validate().
        let json = r#"{
            "id": "flow-bad",
            "fromLat": 6.5,
            "fromLon": 3.4,
            "toLat": 200.0,
            "toLon": 999.0,
            "magnitude": -5.0,
            "classTag": "crypto",
            "ts": "2024-03-15T12:00:00Z"
        }"#;
        let flow: AssetFlow = serde_json::from_str(json).expect("must deserialize");
        let err = flow.validate().expect_err("must fail");
        assert!(matches!(err, ValidationError::LatitudeOutOfRange { .. }));
    }

    #[test]
    fn validate_rejects_negative_magnitude_on_parsed_records() {
        let json = r#"{
            "id": "flow-neg",
            "fromLat": 0.0,
            "fromLon": 0.0,
            "toLat": 1.0,
            "toLon": 1.0,
            "magnitude": -0.1,
            "classTag": "bond",
            "ts": "2024-03-15T12:00:00Z"
        }"#;
        let flow: AssetFlow = serde_json::from_str(json).expect("must deserialize");
        let err = flow.validate().expect_err("must fail");
        assert!(matches!(err, ValidationError::NegativeValue { .. }));
    }
}
