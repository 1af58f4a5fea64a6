//! Great-circle distance on WGS84 degree coordinates.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::Node;

/// Mean Earth radius used by the haversine formula, in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether both components are finite and inside WGS84 degree ranges.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// Great-circle distance to another coordinate in meters.
    pub fn distance_to(&self, other: &Self) -> f64 {
        haversine_distance(*self, *other)
    }

    /// Squared difference in raw degrees.
    ///
    /// Only meaningful for ranking candidates inside a small area where
    /// curvature is negligible; it is not a distance.
    pub fn planar_distance_sq(&self, other: &Self) -> f64 {
        let dlat = self.lat - other.lat;
        let dlng = self.lng - other.lng;
        dlat * dlat + dlng * dlng
    }
}

/// Haversine distance between two coordinates in meters.
pub fn haversine_distance(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlng = (b.lng - a.lng).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_METERS * c
}

/// Distance between two nodes, failing when either lacks a location.
pub fn edge_length(from: &Node, to: &Node) -> Result<f64> {
    let start = from.location.ok_or_else(|| Error::MissingCoordinate {
        node: from.id.clone(),
    })?;
    let end = to.location.ok_or_else(|| Error::MissingCoordinate {
        node: to.id.clone(),
    })?;
    Ok(haversine_distance(start, end))
}
