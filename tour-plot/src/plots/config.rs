#[cfg(test)]
#[path = "../../tests/unit/plots/config_test.rs"]
mod config_test;

use crate::utils::GenericResult;
use plotters::style::RGBColor;
use std::path::PathBuf;

/// Sky blue node color.
pub const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);
/// Grey edge color.
pub const GREY: RGBColor = RGBColor(128, 128, 128);
/// Light gray edge color.
pub const LIGHT_GRAY: RGBColor = RGBColor(211, 211, 211);

/// Default node size as marker area in points squared.
pub const DEFAULT_NODE_SIZE: f64 = 800.;

/// Default figure size: 20x10 inches at 100 dpi.
pub const DEFAULT_FIGURE_SIZE: (u32, u32) = (2000, 1000);

/// A static figure style.
#[derive(Clone, Debug)]
pub struct FigureStyle {
    /// Figure size in pixels.
    pub size: (u32, u32),
    /// Node circle radius in pixels.
    pub node_radius: u32,
    /// Font size of node names on the graph panel.
    pub name_font_size: u32,
    /// Font size of order labels on the tour panel.
    pub order_font_size: u32,
    /// Font size of the legend.
    pub legend_font_size: u32,
    /// Font size of edge weight labels.
    pub edge_label_font_size: u32,
    /// Font size of panel titles.
    pub title_font_size: u32,
    /// Font family name.
    pub font_family: String,
    /// A font file to register for the font family. When not set, bitmap output uses a matching system font.
    pub font_path: Option<PathBuf>,
    /// Node color.
    pub node_color: RGBColor,
    /// Tour start node color.
    pub start_color: RGBColor,
    /// Edge color on the graph panel.
    pub graph_edge_color: RGBColor,
    /// Edge color on the tour panel.
    pub background_edge_color: RGBColor,
    /// Tour edge color.
    pub tour_edge_color: RGBColor,
    /// Tour edge width in pixels.
    pub tour_edge_width: u32,
    /// Text color.
    pub text_color: RGBColor,
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            size: DEFAULT_FIGURE_SIZE,
            node_radius: node_radius_from_size(DEFAULT_NODE_SIZE),
            name_font_size: 12,
            order_font_size: 14,
            legend_font_size: 12,
            edge_label_font_size: 10,
            title_font_size: 16,
            font_family: "sans-serif".to_string(),
            font_path: None,
            node_color: SKY_BLUE,
            start_color: RGBColor(255, 0, 0),
            graph_edge_color: GREY,
            background_edge_color: LIGHT_GRAY,
            tour_edge_color: RGBColor(255, 0, 0),
            tour_edge_width: 3,
            text_color: RGBColor(0, 0, 0),
        }
    }
}

/// Converts marker area in points squared to circle radius in pixels at 100 dpi.
pub fn node_radius_from_size(node_size: f64) -> u32 {
    (node_size.max(0.).sqrt() / 2. * 100. / 72.).round() as u32
}

/// Parses color given as `#rrggbb` or as one of the common names.
pub fn parse_color(value: &str) -> GenericResult<RGBColor> {
    let value = value.trim().to_ascii_lowercase();

    if let Some(hex) = value.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("cannot parse color: '{value}'").into());
        }

        let channel = |idx: usize| {
            u8::from_str_radix(&hex[idx..idx + 2], 16).map_err(|err| format!("cannot parse color '{value}': {err}"))
        };

        return Ok(RGBColor(channel(0)?, channel(2)?, channel(4)?));
    }

    match value.as_str() {
        "red" => Ok(RGBColor(255, 0, 0)),
        "green" => Ok(RGBColor(0, 128, 0)),
        "blue" => Ok(RGBColor(0, 0, 255)),
        "black" => Ok(RGBColor(0, 0, 0)),
        "white" => Ok(RGBColor(255, 255, 255)),
        "skyblue" => Ok(SKY_BLUE),
        "grey" | "gray" => Ok(GREY),
        "lightgrey" | "lightgray" => Ok(LIGHT_GRAY),
        "orange" => Ok(RGBColor(255, 165, 0)),
        _ => Err(format!("unknown color name: '{value}'").into()),
    }
}
