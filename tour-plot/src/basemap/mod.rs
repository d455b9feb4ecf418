//! Contains basemap tile providers and sources of tile images.

#[cfg(test)]
#[path = "../../tests/unit/basemap/basemap_test.rs"]
mod basemap_test;

use crate::projection::{MAX_ZOOM, TileIndex};
use crate::utils::GenericResult;
use image::RgbImage;
use std::path::{Path, PathBuf};

/// A web tile provider: url template with `{z}`, `{x}` and `{y}` placeholders plus attribution.
#[derive(Clone, Debug, PartialEq)]
pub struct TileProvider {
    /// Url template.
    pub url_template: String,
    /// Attribution shown on the map.
    pub attribution: String,
    /// Max zoom level served by the provider.
    pub max_zoom: u8,
}

impl TileProvider {
    /// Returns OpenStreetMap Mapnik tile provider.
    pub fn open_street_map() -> Self {
        Self {
            url_template: "https://tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
                .to_string(),
            max_zoom: MAX_ZOOM,
        }
    }
}

impl Default for TileProvider {
    fn default() -> Self {
        Self::open_street_map()
    }
}

/// Provides basemap tile images.
pub trait TileSource {
    /// Loads a tile image. Returns `None` if the source has no such tile.
    fn load_tile(&self, tile: &TileIndex) -> GenericResult<Option<RgbImage>>;
}

/// Reads tiles from a local directory with `{z}/{x}/{y}.png` layout, e.g. a tile cache.
#[derive(Clone, Debug)]
pub struct DirectoryTileSource {
    root: PathBuf,
}

impl DirectoryTileSource {
    /// Creates a new instance of `DirectoryTileSource`.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }

    /// Returns path to the tile image.
    pub fn tile_path(&self, tile: &TileIndex) -> PathBuf {
        self.root.join(tile.zoom.to_string()).join(tile.x.to_string()).join(format!("{}.png", tile.y))
    }
}

impl TileSource for DirectoryTileSource {
    fn load_tile(&self, tile: &TileIndex) -> GenericResult<Option<RgbImage>> {
        let path = self.tile_path(tile);

        if !path.is_file() {
            return Ok(None);
        }

        image::open(&path)
            .map(|image| Some(image.to_rgb8()))
            .map_err(|err| format!("cannot read tile '{}': '{err}'", path.display()).into())
    }
}
