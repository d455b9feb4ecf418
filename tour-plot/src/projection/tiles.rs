#[cfg(test)]
#[path = "../../tests/unit/projection/tiles_test.rs"]
mod tiles_test;

use crate::models::GeoPoint;
use crate::projection::{Bounds, HALF_WORLD_SIZE, Projection};

/// Side of a square slippy map tile, in pixels.
pub const TILE_SIZE: u32 = 256;

/// Max zoom level supported by common tile providers.
pub const MAX_ZOOM: u8 = 19;

/// A slippy map tile index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TileIndex {
    /// Zoom level.
    pub zoom: u8,
    /// Column, grows eastward.
    pub x: u32,
    /// Row, grows southward.
    pub y: u32,
}

impl TileIndex {
    /// Returns a tile which contains the given geographic point.
    pub fn containing(point: &GeoPoint, zoom: u8) -> Self {
        let (x, y) = Projection::WebMercator.project(point);

        Self::containing_projected(x, y, zoom)
    }

    /// Returns a tile which contains the given Web Mercator point.
    pub fn containing_projected(x: f64, y: f64, zoom: u8) -> Self {
        let count = tiles_per_side(zoom);
        let size = tile_world_size(zoom);
        let to_index = |value: f64| ((value / size).floor().max(0.) as u32).min(count - 1);

        Self { zoom, x: to_index(x + HALF_WORLD_SIZE), y: to_index(HALF_WORLD_SIZE - y) }
    }

    /// Returns tile extent in Web Mercator meters.
    pub fn mercator_bounds(&self) -> Bounds {
        let size = tile_world_size(self.zoom);
        let min_x = -HALF_WORLD_SIZE + self.x as f64 * size;
        let max_y = HALF_WORLD_SIZE - self.y as f64 * size;

        Bounds { min_x, max_x: min_x + size, min_y: max_y - size, max_y }
    }
}

/// Returns amount of tiles along one side of the world at the given zoom.
pub fn tiles_per_side(zoom: u8) -> u32 {
    1_u32 << zoom.min(MAX_ZOOM)
}

/// Returns tile side length in Web Mercator meters.
pub fn tile_world_size(zoom: u8) -> f64 {
    2. * HALF_WORLD_SIZE / tiles_per_side(zoom) as f64
}

/// Chooses the highest zoom level at which the bounds fit into `pixel_width` pixels.
pub fn choose_zoom(bounds: &Bounds, pixel_width: u32) -> u8 {
    let width = bounds.width().max(bounds.height());
    if width <= 0. || pixel_width == 0 {
        return MAX_ZOOM;
    }

    let scale = pixel_width as f64 * 2. * HALF_WORLD_SIZE / (TILE_SIZE as f64 * width);

    scale.log2().floor().clamp(0., MAX_ZOOM as f64) as u8
}

/// Returns tiles which cover the given Web Mercator bounds, row by row.
pub fn covering_tiles(bounds: &Bounds, zoom: u8) -> Vec<TileIndex> {
    let top_left = TileIndex::containing_projected(bounds.min_x, bounds.max_y, zoom);
    let bottom_right = TileIndex::containing_projected(bounds.max_x, bounds.min_y, zoom);

    (top_left.y..=bottom_right.y)
        .flat_map(|y| (top_left.x..=bottom_right.x).map(move |x| TileIndex { zoom, x, y }))
        .collect()
}
