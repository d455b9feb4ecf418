use super::*;
use crate::projection::{TileIndex, choose_zoom, covering_tiles};
use image::imageops::{self, FilterType};
use plotters::element::BitMapElement;

/// Limits amount of tiles drawn under one panel.
const MAX_TILES: usize = 64;

/// Limits tile side after scaling, in pixels.
const MAX_TILE_PIXELS: i32 = 8192;

/// Draws basemap tiles which intersect the chart plotting area.
pub(crate) fn draw_basemap<B>(
    chart: &PanelChart<B>,
    bounds: &Bounds,
    layer: &BasemapLayer,
    logger: &InfoLogger,
) -> DrawResult<()>
where
    B: DrawingBackend,
    B::ErrorType: 'static,
{
    let plotting_area = chart.plotting_area();
    let (x_pixels, y_pixels) = plotting_area.get_pixel_range();
    let pixel_width = (x_pixels.end - x_pixels.start).max(1) as u32;

    let (zoom, tiles) = get_tiles(bounds, layer, pixel_width);
    logger(&format!("basemap: drawing {} tiles at zoom {zoom}", tiles.len()));

    let shifted = plotting_area.strip_coord_spec();

    tiles.iter().try_for_each(|tile| {
        let Some(image) = layer.source.load_tile(tile)? else {
            logger(&format!("basemap: tile {}/{}/{} is missing, skipped", tile.zoom, tile.x, tile.y));
            return Ok(());
        };

        let tile_bounds = tile.mercator_bounds();
        let (x0, y0) = chart.backend_coord(&(tile_bounds.min_x, tile_bounds.max_y));
        let (x1, y1) = chart.backend_coord(&(tile_bounds.max_x, tile_bounds.min_y));

        let (clip_x0, clip_x1) = (x0.max(x_pixels.start), x1.min(x_pixels.end));
        let (clip_y0, clip_y1) = (y0.max(y_pixels.start), y1.min(y_pixels.end));

        if x1 <= x0 || y1 <= y0 || clip_x1 <= clip_x0 || clip_y1 <= clip_y0 {
            return Ok(());
        }

        if x1 - x0 > MAX_TILE_PIXELS || y1 - y0 > MAX_TILE_PIXELS {
            logger(&format!("basemap: zoom {} is too low for the figure extent, tile skipped", tile.zoom));
            return Ok(());
        }

        let resized = imageops::resize(&image, (x1 - x0) as u32, (y1 - y0) as u32, FilterType::Triangle);
        let cropped = imageops::crop_imm(
            &resized,
            (clip_x0 - x0) as u32,
            (clip_y0 - y0) as u32,
            (clip_x1 - clip_x0) as u32,
            (clip_y1 - clip_y0) as u32,
        )
        .to_image();

        let size = cropped.dimensions();
        let position = (clip_x0 - x_pixels.start, clip_y0 - y_pixels.start);
        let element: BitMapElement<(i32, i32)> = BitMapElement::with_owned_buffer(position, size, cropped.into_raw())
            .ok_or_else(|| format!("cannot create bitmap for tile {}/{}/{}", tile.zoom, tile.x, tile.y))?;

        shifted.draw(&element)?;

        Ok::<_, Box<dyn std::error::Error>>(())
    })
}

/// Returns zoom level and tiles which cover the bounds, reducing zoom while there are too many tiles.
fn get_tiles(bounds: &Bounds, layer: &BasemapLayer, pixel_width: u32) -> (u8, Vec<TileIndex>) {
    let mut zoom = layer.zoom.unwrap_or_else(|| choose_zoom(bounds, pixel_width)).min(layer.max_zoom);

    loop {
        let tiles = covering_tiles(bounds, zoom);
        if tiles.len() <= MAX_TILES || zoom == 0 {
            return (zoom, tiles);
        }

        zoom -= 1;
    }
}
