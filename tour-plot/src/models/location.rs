use crate::models::NodeId;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A geographic point in WGS84 degrees. Serialized as `[lat, lng]` pair.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct GeoPoint {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

impl GeoPoint {
    /// Creates a new instance of `GeoPoint`.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns coordinates in `(lng, lat)` order used by GeoJSON.
    pub fn as_lng_lat(&self) -> (f64, f64) {
        (self.lng, self.lat)
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

impl From<GeoPoint> for (f64, f64) {
    fn from(point: GeoPoint) -> Self {
        (point.lat, point.lng)
    }
}

/// Maps node to its geographic position.
pub type Positions = FxHashMap<NodeId, GeoPoint>;

/// Maps node to its display label.
pub type Names = FxHashMap<NodeId, String>;
