//! Visualization configuration.

#[cfg(test)]
#[path = "../../tests/unit/extensions/config_test.rs"]
mod config_test;

use serde::Deserialize;
use std::io::{BufReader, Read};
use std::path::PathBuf;
use tour_plot::basemap::TileProvider;
use tour_plot::plots::{FigureStyle, node_radius_from_size, parse_color};
use tour_plot::utils::{InfoLogger, create_noop_logger, create_stdout_logger};
use tour_plot::web::{MapStyle, MarkerColor};

/// A visualization configuration. Every value is optional, defaults are used for missing ones.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Specifies static figure configuration.
    pub figure: Option<FigureConfig>,
    /// Specifies interactive map configuration.
    pub map: Option<MapConfig>,
    /// Specifies basemap configuration of the static figure.
    pub basemap: Option<BasemapConfig>,
    /// Specifies logging configuration.
    pub logging: Option<LoggingConfig>,
}

/// A static figure configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FigureConfig {
    /// Figure size in pixels: width and height.
    pub size: Option<(u32, u32)>,
    /// Node size as marker area in points squared. Ignored when node radius is set.
    pub node_size: Option<f64>,
    /// Node radius in pixels.
    pub node_radius: Option<u32>,
    /// Font sizes.
    pub fonts: Option<FontsConfig>,
    /// Colors.
    pub colors: Option<ColorsConfig>,
    /// Tour edge width in pixels.
    pub tour_edge_width: Option<u32>,
}

/// A fonts configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontsConfig {
    /// Font family name.
    pub family: Option<String>,
    /// A ttf/otf font file, overrides the system font used by png output.
    pub path: Option<PathBuf>,
    /// Node names font size.
    pub name: Option<u32>,
    /// Order labels font size.
    pub order: Option<u32>,
    /// Legend font size.
    pub legend: Option<u32>,
    /// Edge weight labels font size.
    pub edge_label: Option<u32>,
    /// Panel titles font size.
    pub title: Option<u32>,
}

/// A colors configuration: `#rrggbb` or a common color name.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorsConfig {
    /// Node color.
    pub node: Option<String>,
    /// Start node color.
    pub start: Option<String>,
    /// Edge color on the graph panel.
    pub graph_edge: Option<String>,
    /// Edge color on the tour panel.
    pub background_edge: Option<String>,
    /// Tour edge color.
    pub tour_edge: Option<String>,
    /// Text color.
    pub text: Option<String>,
}

/// An interactive map configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapConfig {
    /// Initial zoom level.
    pub zoom: Option<u8>,
    /// Tile url template with `{z}`, `{x}` and `{y}` placeholders.
    pub tile_url: Option<String>,
    /// Tile attribution.
    pub attribution: Option<String>,
    /// Max zoom of the tile provider.
    pub max_zoom: Option<u8>,
    /// Start marker color.
    pub start_color: Option<String>,
    /// Color of other markers.
    pub stop_color: Option<String>,
    /// Route polyline color.
    pub route_color: Option<String>,
    /// Route polyline width.
    pub route_weight: Option<f64>,
    /// Route polyline opacity.
    pub route_opacity: Option<f64>,
}

/// A basemap configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasemapConfig {
    /// Enables basemap mode without command line flag.
    pub enabled: Option<bool>,
    /// A directory with `{z}/{x}/{y}.png` tiles.
    pub tiles_dir: Option<PathBuf>,
    /// Fixed zoom level. Chosen from the figure extent when not set.
    pub zoom: Option<u8>,
}

/// A logging configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LoggingConfig {
    /// Specifies whether logging is enabled.
    pub enabled: bool,
}

impl Config {
    /// Creates a figure style from defaults overridden by figure configuration.
    pub fn figure_style(&self) -> Result<FigureStyle, String> {
        let mut style = FigureStyle::default();

        let Some(figure) = self.figure.as_ref() else {
            return Ok(style);
        };

        if let Some(size) = figure.size {
            style.size = size;
        }

        if let Some(node_radius) = figure.node_radius.or(figure.node_size.map(node_radius_from_size)) {
            style.node_radius = node_radius;
        }

        if let Some(width) = figure.tour_edge_width {
            style.tour_edge_width = width;
        }

        if let Some(fonts) = figure.fonts.as_ref() {
            let sizes = [
                (fonts.name, &mut style.name_font_size),
                (fonts.order, &mut style.order_font_size),
                (fonts.legend, &mut style.legend_font_size),
                (fonts.edge_label, &mut style.edge_label_font_size),
                (fonts.title, &mut style.title_font_size),
            ];
            sizes.into_iter().for_each(|(value, target)| {
                if let Some(value) = value {
                    *target = value;
                }
            });

            if let Some(family) = fonts.family.as_ref() {
                style.font_family = family.clone();
            }

            if fonts.path.is_some() {
                style.font_path = fonts.path.clone();
            }
        }

        if let Some(colors) = figure.colors.as_ref() {
            let targets = [
                (colors.node.as_ref(), &mut style.node_color),
                (colors.start.as_ref(), &mut style.start_color),
                (colors.graph_edge.as_ref(), &mut style.graph_edge_color),
                (colors.background_edge.as_ref(), &mut style.background_edge_color),
                (colors.tour_edge.as_ref(), &mut style.tour_edge_color),
                (colors.text.as_ref(), &mut style.text_color),
            ];
            targets.into_iter().try_for_each(|(value, target)| {
                if let Some(value) = value {
                    *target = parse_color(value).map_err(|err| err.to_string())?;
                }

                Ok::<_, String>(())
            })?;
        }

        Ok(style)
    }

    /// Creates a map style from defaults overridden by map configuration.
    pub fn map_style(&self) -> Result<MapStyle, String> {
        let mut style = MapStyle::default();

        let Some(map) = self.map.as_ref() else {
            return Ok(style);
        };

        if let Some(zoom) = map.zoom {
            style.zoom = zoom;
        }

        if let Some(tile_url) = map.tile_url.as_ref() {
            style.tile_provider = TileProvider {
                url_template: tile_url.clone(),
                attribution: map.attribution.clone().unwrap_or_default(),
                max_zoom: map.max_zoom.unwrap_or(style.tile_provider.max_zoom),
            };
        } else {
            if let Some(attribution) = map.attribution.as_ref() {
                style.tile_provider.attribution = attribution.clone();
            }
            if let Some(max_zoom) = map.max_zoom {
                style.tile_provider.max_zoom = max_zoom;
            }
        }

        if let Some(color) = map.start_color.as_ref() {
            style.start_color = color.parse::<MarkerColor>()?;
        }

        if let Some(color) = map.stop_color.as_ref() {
            style.stop_color = color.parse::<MarkerColor>()?;
        }

        if let Some(color) = map.route_color.as_ref() {
            style.route_color = color.clone();
        }

        if let Some(weight) = map.route_weight {
            style.route_weight = weight;
        }

        if let Some(opacity) = map.route_opacity {
            style.route_opacity = opacity;
        }

        Ok(style)
    }

    /// Returns true if basemap is enabled by configuration.
    pub fn is_basemap_enabled(&self) -> bool {
        self.basemap.as_ref().and_then(|basemap| basemap.enabled).unwrap_or(false)
    }

    /// Creates a logger: stdout logger if logging is enabled by the flag or the config, no-op otherwise.
    pub fn create_logger(&self, is_flag_set: bool) -> InfoLogger {
        if is_flag_set || self.logging.as_ref().is_some_and(|logging| logging.enabled) {
            create_stdout_logger()
        } else {
            create_noop_logger()
        }
    }
}

/// Reads config from json.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, String> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'"))
}
