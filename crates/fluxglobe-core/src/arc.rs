//! Great-circle arc tessellation.
//!
//! Converts a coordinate pair into a renderable curved path with adaptive
//! resolution, plus the width/opacity scalars a renderer derives from flow
//! magnitude. Pure math, no I/O.

use std::f64::consts::PI;

use crate::{AssetFlow, Coordinate};

pub const EARTH_RADIUS_M: f64 = 6_371_000.0;
pub const DEFAULT_MAX_SEGMENTS: usize = 64;
pub const MIN_SEGMENTS: usize = 24;
pub const MAX_SEGMENTS: usize = 96;
const KM_PER_SEGMENT: f64 = 500.0;

/// Below this angular separation slerp is numerically unstable; above
/// `PI - NEAR_COINCIDENT_RAD` the endpoints are near-antipodal and
/// `sin(d)` vanishes. Both fall back to linear interpolation.
const NEAR_COINCIDENT_RAD: f64 = 1e-3;

/// Tessellates the great-circle path from `start` to `end`.
///
/// Longer arcs get finer tessellation: one segment per 500 km of surface
/// distance, clamped to [24, 96], and never more than `max_segments`.
/// The output always has `final_segments + 1` points with both endpoints
/// reproduced exactly (within floating tolerance).
///
/// `height_scale` lifts the path radially by `1 + height_scale * sin(t*pi)`
/// so the arc bulges at its midpoint and touches the surface at both ends.
pub fn build_arc(
    start: Coordinate,
    end: Coordinate,
    max_segments: usize,
    height_scale: f64,
) -> Vec<Coordinate> {
    let d = angular_distance_rad(start, end);
    let distance_km = d * EARTH_RADIUS_M / 1000.0;

    let adaptive = ((distance_km / KM_PER_SEGMENT) as usize).clamp(MIN_SEGMENTS, MAX_SEGMENTS);
    let final_segments = max_segments.min(adaptive).max(1);

    let mut coordinates = Vec::with_capacity(final_segments + 1);
    for i in 0..=final_segments {
        let t = i as f64 / final_segments as f64;
        coordinates.push(interpolate(start, end, d, t, height_scale));
    }

    coordinates
}

/// Arc for a flow entity: height scale follows magnitude, clamped so heavy
/// flows arch visibly higher without leaving the camera frustum.
pub fn arc_from_flow(flow: &AssetFlow) -> Vec<Coordinate> {
    let height_scale = (flow.magnitude * 0.1).clamp(0.05, 0.12);
    build_arc(
        flow.from_coordinate(),
        flow.to_coordinate(),
        DEFAULT_MAX_SEGMENTS,
        height_scale,
    )
}

/// Rendered stroke width in points for a flow magnitude.
pub fn line_width(magnitude: f64) -> f64 {
    (magnitude * 2.0).clamp(1.0, 5.0)
}

/// Rendered stroke opacity for a flow magnitude.
pub fn line_opacity(magnitude: f64) -> f64 {
    (magnitude * 0.5).clamp(0.3, 1.0)
}

/// Haversine angular distance in radians on the unit sphere.
pub fn angular_distance_rad(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.latitude_rad();
    let lat2 = b.latitude_rad();
    let d_lat = lat2 - lat1;
    let d_lon = b.longitude_rad() - a.longitude_rad();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Great-circle surface distance in meters.
pub fn haversine_m(a: Coordinate, b: Coordinate) -> f64 {
    angular_distance_rad(a, b) * EARTH_RADIUS_M
}

fn interpolate(start: Coordinate, end: Coordinate, d: f64, t: f64, height_scale: f64) -> Coordinate {
    // Slerp divides by sin(d): unusable for near-coincident endpoints and
    // for near-antipodal ones (d ~ pi). Linear lat/lon interpolation is the
    // deterministic fallback for both.
    if d <= NEAR_COINCIDENT_RAD || d >= PI - NEAR_COINCIDENT_RAD {
        return Coordinate {
            latitude: start.latitude + t * (end.latitude - start.latitude),
            longitude: start.longitude + t * (end.longitude - start.longitude),
        };
    }

    let lat1 = start.latitude_rad();
    let lon1 = start.longitude_rad();
    let lat2 = end.latitude_rad();
    let lon2 = end.longitude_rad();

    let a = ((1.0 - t) * d).sin() / d.sin();
    let b = (t * d).sin() / d.sin();

    let x = a * lat1.cos() * lon1.cos() + b * lat2.cos() * lon2.cos();
    let y = a * lat1.cos() * lon1.sin() + b * lat2.cos() * lon2.sin();
    let z = a * lat1.sin() + b * lat2.sin();

    // Radial lift peaking at t = 0.5, zero at both endpoints.
    let height_factor = 1.0 + height_scale * (t * PI).sin();

    let x = x * height_factor;
    let y = y * height_factor;
    let z = z * height_factor;

    Coordinate {
        latitude: z.atan2((x * x + y * y).sqrt()).to_degrees(),
        longitude: y.atan2(x).to_degrees(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(latitude: f64, longitude: f64) -> Coordinate {
        Coordinate::new(latitude, longitude).expect("must validate")
    }

    fn assert_finite(path: &[Coordinate]) {
        for point in path {
            assert!(point.latitude.is_finite(), "latitude must be finite");
            assert!(point.longitude.is_finite(), "longitude must be finite");
        }
    }

    #[test]
    fn endpoints_are_reproduced_exactly() {
        let start = coord(0.0, 0.0);
        let end = coord(90.0, 0.0);
        let path = build_arc(start, end, 10, 0.12);

        let first = path.first().expect("path must not be empty");
        let last = path.last().expect("path must not be empty");
        assert!((first.latitude - start.latitude).abs() < 1e-3);
        assert!((first.longitude - start.longitude).abs() < 1e-3);
        assert!((last.latitude - end.latitude).abs() < 1e-3);
        assert!((last.longitude - end.longitude).abs() < 1e-3);
    }

    #[test]
    fn short_arc_clamps_to_minimum_segments() {
        // ~111 km: adaptive count would be 0, clamped up to 24.
        let path = build_arc(coord(0.0, 0.0), coord(0.0, 1.0), 64, 0.12);
        assert_eq!(path.len(), MIN_SEGMENTS + 1);
    }

    #[test]
    fn long_arc_tessellates_more_finely() {
        // ~16,700 km of surface distance: one segment per 500 km gives 33.
        let path = build_arc(coord(0.0, 0.0), coord(0.0, 150.0), 64, 0.12);
        assert_eq!(path.len(), 34);
        assert!(path.len() <= MAX_SEGMENTS + 1);
    }

    #[test]
    fn caller_segment_cap_is_respected() {
        let path = build_arc(coord(0.0, 0.0), coord(0.0, 90.0), 10, 0.12);
        assert_eq!(path.len(), 11);
    }

    #[test]
    fn identical_endpoints_produce_a_finite_path() {
        let path = build_arc(coord(10.0, 10.0), coord(10.0, 10.0), 64, 0.12);
        assert_eq!(path.len(), MIN_SEGMENTS + 1);
        assert_finite(&path);
        for point in &path {
            assert!((point.latitude - 10.0).abs() < 1e-9);
            assert!((point.longitude - 10.0).abs() < 1e-9);
        }
    }

    #[test]
    fn antipodal_endpoints_produce_a_finite_path() {
        // d is exactly pi here: sin(d) is zero and slerp weights blow up,
        // so the linear fallback must take over. 20,015 km -> 40 segments.
        let path = build_arc(coord(0.0, 0.0), coord(0.0, 180.0), 96, 0.12);
        assert_eq!(path.len(), 41);
        assert_finite(&path);
        let first = path.first().expect("non-empty");
        let last = path.last().expect("non-empty");
        assert!((first.longitude - 0.0).abs() < 1e-3);
        assert!((last.longitude - 180.0).abs() < 1e-3);
    }

    #[test]
    fn small_arc_longitudes_advance_monotonically() {
        let path = build_arc(coord(0.0, 0.0), coord(0.1, 0.1), 20, 0.12);
        let mut previous = path[0].longitude;
        for point in &path[1..] {
            assert!(point.longitude >= previous - 0.1);
            previous = point.longitude;
        }
    }

    #[test]
    fn line_width_is_monotone_and_bounded() {
        let w1 = line_width(0.3);
        let w2 = line_width(1.0);
        let w3 = line_width(4.0);
        assert!(w1 <= w2 && w2 <= w3);
        assert!((1.0..=5.0).contains(&w1));
        assert!((1.0..=5.0).contains(&w3));
        assert_eq!(line_width(0.0), 1.0);
        assert_eq!(line_width(100.0), 5.0);
    }

    #[test]
    fn line_opacity_is_monotone_and_bounded() {
        let a1 = line_opacity(0.3);
        let a2 = line_opacity(1.0);
        let a3 = line_opacity(4.0);
        assert!(a1 <= a2 && a2 <= a3);
        assert!((0.3..=1.0).contains(&a1));
        assert!((0.3..=1.0).contains(&a3));
        assert_eq!(line_opacity(0.0), 0.3);
        assert_eq!(line_opacity(100.0), 1.0);
    }

    #[test]
    fn flow_height_scale_is_clamped() {
        use crate::{AssetClass, AssetFlow, UtcDateTime};

        let ts = UtcDateTime::parse("2024-01-01T00:00:00Z").expect("must parse");
        let heavy = AssetFlow::new(
            "f1",
            coord(0.0, 0.0),
            coord(10.0, 10.0),
            50.0,
            AssetClass::Crypto,
            ts,
        )
        .expect("must validate");

        let path = arc_from_flow(&heavy);
        assert!(!path.is_empty());
        assert_finite(&path);
        let first = path.first().expect("non-empty");
        assert!((first.latitude - heavy.from_lat).abs() < 1e-3);
    }

    #[test]
    fn one_degree_equatorial_distance_is_about_111_km() {
        let km = haversine_m(coord(0.0, 0.0), coord(0.0, 1.0)) / 1000.0;
        assert!((km - 111.19).abs() < 0.5, "got {km}");
    }
}
