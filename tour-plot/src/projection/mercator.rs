#[cfg(test)]
#[path = "../../tests/unit/projection/mercator_test.rs"]
mod mercator_test;

use crate::models::{GeoPoint, NodeId, Positions};
use crate::utils::GenericResult;
use rustc_hash::FxHashMap;
use std::f64::consts::{FRAC_PI_4, PI};

/// Radius of the sphere used by Web Mercator (EPSG:3857), in meters.
pub const EARTH_RADIUS: f64 = 6_378_137.;

/// Half of the Web Mercator world extent, in meters.
pub const HALF_WORLD_SIZE: f64 = PI * EARTH_RADIUS;

/// Max absolute latitude representable in Web Mercator.
pub const MAX_MERCATOR_LATITUDE: f64 = 85.051_128_78;

/// A projected point in figure coordinates.
pub type ProjectedPoint = (f64, f64);

/// Maps node to its projected position.
pub type ProjectedPositions = FxHashMap<NodeId, ProjectedPoint>;

/// Specifies how geographic positions are mapped to figure coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Projection {
    /// Longitude is used as x and latitude as y.
    #[default]
    Plain,
    /// Spherical Web Mercator (EPSG:3857) which matches web map tiles.
    WebMercator,
}

impl Projection {
    /// Returns a projection suitable for the basemap mode.
    pub fn for_basemap(use_basemap: bool) -> Self {
        if use_basemap { Projection::WebMercator } else { Projection::Plain }
    }

    /// Projects geographic point to figure coordinates.
    pub fn project(&self, point: &GeoPoint) -> ProjectedPoint {
        match self {
            Projection::Plain => (point.lng, point.lat),
            Projection::WebMercator => {
                let lat = point.lat.clamp(-MAX_MERCATOR_LATITUDE, MAX_MERCATOR_LATITUDE);
                let x = EARTH_RADIUS * point.lng.to_radians();
                let y = EARTH_RADIUS * (FRAC_PI_4 + lat.to_radians() / 2.).tan().ln();

                (x, y)
            }
        }
    }

    /// Returns max absolute latitude supported by the projection.
    pub fn latitude_limit(&self) -> f64 {
        match self {
            Projection::Plain => 90.,
            Projection::WebMercator => MAX_MERCATOR_LATITUDE,
        }
    }

    /// Checks that the point can be projected.
    pub fn check(&self, point: &GeoPoint) -> GenericResult<()> {
        let limit = self.latitude_limit();

        if !point.lat.is_finite() || !point.lng.is_finite() {
            Err(format!("position ({}, {}) is not finite", point.lat, point.lng).into())
        } else if point.lat.abs() > limit {
            Err(format!("latitude {} is outside of [-{limit}, {limit}]", point.lat).into())
        } else if point.lng.abs() > 180. {
            Err(format!("longitude {} is outside of [-180, 180]", point.lng).into())
        } else {
            Ok(())
        }
    }
}

/// Projects all positions.
pub fn project_positions(positions: &Positions, projection: Projection) -> ProjectedPositions {
    positions.iter().map(|(&node, point)| (node, projection.project(point))).collect()
}
