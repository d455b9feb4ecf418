#[cfg(test)]
#[path = "../../tests/unit/web/route_map_test.rs"]
mod route_map_test;

use super::{InteractiveMap, Marker, MarkerColor, PolyLine};
use crate::basemap::TileProvider;
use crate::format::get_title_box_html;
use crate::models::{Names, Positions, Priority, Tour, get_name, get_position, validate_tour};
use crate::projection::Projection;
use crate::utils::GenericResult;

/// An interactive map style.
#[derive(Clone, Debug)]
pub struct MapStyle {
    /// Initial zoom level.
    pub zoom: u8,
    /// Tile provider.
    pub tile_provider: TileProvider,
    /// Start marker color.
    pub start_color: MarkerColor,
    /// Color of other markers.
    pub stop_color: MarkerColor,
    /// Route line color.
    pub route_color: String,
    /// Route line width in pixels.
    pub route_weight: f64,
    /// Route line opacity.
    pub route_opacity: f64,
}

impl Default for MapStyle {
    fn default() -> Self {
        Self {
            zoom: 6,
            tile_provider: TileProvider::default(),
            start_color: MarkerColor::Red,
            stop_color: MarkerColor::Blue,
            route_color: "red".to_string(),
            route_weight: 5.,
            route_opacity: 0.8,
        }
    }
}

/// Creates an interactive map centered at the tour start with numbered markers, a route polyline
/// and a floating box which reports the tour cost.
pub fn plot_route_map(
    tour: &Tour,
    positions: &Positions,
    names: &Names,
    priority: Priority,
    style: &MapStyle,
) -> GenericResult<InteractiveMap> {
    validate_tour(tour, positions, names, Projection::Plain)?;

    let route = tour.path.iter().map(|&node| get_position(positions, node)).collect::<GenericResult<Vec<_>>>()?;
    let center = route.first().copied().ok_or("tour has no nodes")?;

    let mut map = InteractiveMap::new(center, style.zoom).with_tile_provider(style.tile_provider.clone());

    tour.path.iter().zip(route.iter()).enumerate().try_for_each(|(idx, (&node, &location))| {
        let label = format!("{idx}: {}", get_name(names, node)?);
        let color = if idx == 0 { style.start_color } else { style.stop_color };

        map.add_marker(Marker { location, popup: label.clone(), tooltip: label, color });

        GenericResult::Ok(())
    })?;

    map.add_polyline(PolyLine {
        locations: route,
        color: style.route_color.clone(),
        weight: style.route_weight,
        opacity: style.route_opacity,
    });

    map.add_html_element(get_title_box_html(&tour.cost, priority));

    Ok(map)
}
