use super::{DrawResult, FigureStyle};
use crate::basemap::TileSource;
use crate::format::OrderedLabel;
use crate::models::{Graph, Names, NodeId};
use crate::projection::{Bounds, ProjectedPositions};
use crate::utils::InfoLogger;
use plotters::coord::Shift;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle};

mod draw_basemap;
use self::draw_basemap::*;

mod draw_graph;
use self::draw_graph::*;

mod draw_legend;
use self::draw_legend::*;

mod draw_tour;
use self::draw_tour::*;

/// A chart type used by both panels.
pub(crate) type PanelChart<'a, B> = ChartContext<'a, B, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Specifies basemap tiles to draw under the graph.
pub(crate) struct BasemapLayer<'a> {
    pub source: &'a dyn TileSource,
    pub zoom: Option<u8>,
    pub max_zoom: u8,
}

/// Keeps everything needed to draw the figure, already projected and formatted.
pub(crate) struct FigureContext<'a> {
    pub style: &'a FigureStyle,
    pub graph: &'a Graph,
    pub names: &'a Names,
    pub positions: ProjectedPositions,
    pub bounds: Bounds,
    pub tour_legs: Vec<(NodeId, NodeId)>,
    pub start: Option<NodeId>,
    pub ordered_labels: Vec<OrderedLabel>,
    pub legend_lines: Vec<String>,
    pub title: Option<String>,
    pub edge_labels: Vec<(NodeId, NodeId, String)>,
    pub basemap: Option<BasemapLayer<'a>>,
    pub logger: InfoLogger,
}

/// Draws both panels on the drawing area.
pub(crate) fn draw_figure<B>(area: &DrawingArea<B, Shift>, context: &FigureContext) -> DrawResult<()>
where
    B: DrawingBackend,
    B::ErrorType: 'static,
{
    area.fill(&WHITE)?;

    let (width, _) = area.dim_in_pixel();
    let (left, right) = area.split_horizontally(width as i32 / 2);

    draw_graph_panel(&left, context)?;
    draw_tour_panel(&right, context)?;

    Ok(())
}

/// Splits panel into title and body areas.
fn split_panel<B: DrawingBackend>(
    panel: &DrawingArea<B, Shift>,
    style: &FigureStyle,
) -> (DrawingArea<B, Shift>, DrawingArea<B, Shift>) {
    panel.split_vertically((style.title_font_size * 3) as i32)
}

fn draw_title<B>(area: &DrawingArea<B, Shift>, title: &str, style: &FigureStyle) -> DrawResult<()>
where
    B: DrawingBackend,
    B::ErrorType: 'static,
{
    let (width, height) = area.dim_in_pixel();
    let text_style = create_text_style(style, style.title_font_size, FontStyle::Normal, Pos::new(HPos::Center, VPos::Center));

    area.draw(&Text::new(title.to_string(), (width as i32 / 2, height as i32 / 2), text_style))?;

    Ok(())
}

/// Builds a chart which keeps aspect ratio of projected coordinates.
fn build_panel_chart<'a, B>(area: &'a DrawingArea<B, Shift>, context: &FigureContext) -> DrawResult<(PanelChart<'a, B>, Bounds)>
where
    B: DrawingBackend,
    B::ErrorType: 'static,
{
    let margin = context.style.node_radius + 4;
    let (width, height) = area.dim_in_pixel();
    let inner_width = width.saturating_sub(2 * margin).max(1);
    let inner_height = height.saturating_sub(2 * margin).max(1);

    let bounds = context.bounds.with_aspect(inner_width as f64 / inner_height as f64);
    let chart = ChartBuilder::on(area).margin(margin).build_cartesian_2d(bounds.x_range(), bounds.y_range())?;

    Ok((chart, bounds))
}

fn draw_edges<B, I>(chart: &mut PanelChart<B>, context: &FigureContext, edges: I, style: ShapeStyle) -> DrawResult<()>
where
    B: DrawingBackend,
    B::ErrorType: 'static,
    I: Iterator<Item = (NodeId, NodeId)>,
{
    let positions = &context.positions;

    chart.draw_series(edges.filter_map(|(from, to)| {
        Some(PathElement::new(vec![*positions.get(&from)?, *positions.get(&to)?], style))
    }))?;

    Ok(())
}

fn draw_nodes<B, F>(chart: &mut PanelChart<B>, context: &FigureContext, color_fn: F) -> DrawResult<()>
where
    B: DrawingBackend,
    B::ErrorType: 'static,
    F: Fn(NodeId) -> RGBColor,
{
    let radius = context.style.node_radius;

    chart.draw_series(context.graph.nodes.iter().filter_map(|&node| {
        context.positions.get(&node).map(|&point| Circle::new(point, radius, color_fn(node).filled()))
    }))?;

    Ok(())
}

fn draw_labels<'b, B, I>(chart: &mut PanelChart<B>, context: &FigureContext, labels: I, text_style: TextStyle) -> DrawResult<()>
where
    B: DrawingBackend,
    B::ErrorType: 'static,
    I: Iterator<Item = (NodeId, &'b str)>,
{
    chart.draw_series(labels.filter_map(|(node, label)| {
        context.positions.get(&node).map(|&point| Text::new(label.to_string(), point, text_style.clone()))
    }))?;

    Ok(())
}

fn create_text_style<'a>(style: &'a FigureStyle, size: u32, font_style: FontStyle, pos: Pos) -> TextStyle<'a> {
    FontDesc::new(FontFamily::from(style.font_family.as_str()), size as f64, font_style).color(&style.text_color).pos(pos)
}

/// Estimates text width in pixels without font metrics.
fn estimate_text_width(text: &str, font_size: u32) -> u32 {
    (text.chars().count() as f64 * font_size as f64 * 0.6).ceil() as u32
}
