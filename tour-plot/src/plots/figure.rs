#[cfg(test)]
#[path = "../../tests/unit/plots/figure_test.rs"]
mod figure_test;

use super::drawing::{BasemapLayer, FigureContext, draw_figure};
use super::{FigureStyle, register_font_file, register_system_font};
use crate::basemap::TileSource;
use crate::format::{format_edge_weight, get_figure_title, get_legend_lines, get_ordered_labels};
use crate::models::PlotInput;
use crate::projection::{Bounds, MAX_ZOOM, Projection, project_positions};
use crate::utils::{GenericError, GenericResult, InfoLogger, create_noop_logger};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;
use std::sync::Arc;

/// A padding around nodes as a share of the graph extent.
const BOUNDS_PADDING: f64 = 0.1;

/// A static dual-panel figure of a graph and a tour.
pub struct StaticFigure {
    input: PlotInput,
    style: FigureStyle,
    use_basemap: bool,
    tile_source: Option<Arc<dyn TileSource + Send + Sync>>,
    basemap_zoom: Option<u8>,
    logger: InfoLogger,
}

impl StaticFigure {
    /// Creates a new instance of `StaticFigure` with default style and without basemap.
    pub fn new(input: PlotInput) -> Self {
        Self {
            input,
            style: FigureStyle::default(),
            use_basemap: false,
            tile_source: None,
            basemap_zoom: None,
            logger: create_noop_logger(),
        }
    }

    /// Sets figure style.
    pub fn with_style(mut self, style: FigureStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets whether nodes are projected to Web Mercator and drawn over a basemap.
    pub fn with_basemap(mut self, use_basemap: bool) -> Self {
        self.use_basemap = use_basemap;
        self
    }

    /// Sets a source of basemap tiles.
    pub fn with_tile_source(mut self, tile_source: Arc<dyn TileSource + Send + Sync>) -> Self {
        self.tile_source = Some(tile_source);
        self
    }

    /// Sets basemap zoom level. When not set, zoom is chosen from the figure extent.
    pub fn with_basemap_zoom(mut self, zoom: Option<u8>) -> Self {
        self.basemap_zoom = zoom;
        self
    }

    /// Sets a logger.
    pub fn with_logger(mut self, logger: InfoLogger) -> Self {
        self.logger = logger;
        self
    }

    /// Returns input data.
    pub fn input(&self) -> &PlotInput {
        &self.input
    }

    /// Returns figure style.
    pub fn style(&self) -> &FigureStyle {
        &self.style
    }

    /// Returns projection used to place nodes.
    pub fn projection(&self) -> Projection {
        Projection::for_basemap(self.use_basemap)
    }

    /// Checks that input can be drawn.
    pub fn validate(&self) -> GenericResult<()> {
        self.input.validate(self.projection())
    }

    /// Renders figure as svg document.
    pub fn to_svg(&self) -> GenericResult<String> {
        let mut buffer = String::new();
        {
            let root = SVGBackend::with_string(&mut buffer, self.style.size).into_drawing_area();
            self.render(root)?;
        }

        Ok(buffer)
    }

    /// Saves figure to the file, format is defined by extension: `svg` or `png`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> GenericResult<()> {
        let path = path.as_ref();
        let extension = path.extension().and_then(|ext| ext.to_str()).map(|ext| ext.to_ascii_lowercase());

        let result = match extension.as_deref() {
            Some("svg") => self.render(SVGBackend::new(path, self.style.size).into_drawing_area()),
            Some("png") => self
                .register_fonts()
                .and_then(|_| self.render(BitMapBackend::new(path, self.style.size).into_drawing_area())),
            _ => Err(format!("unsupported figure format: '{}', expected svg or png", path.display()).into()),
        };

        result.map_err(|err| err.context(format!("cannot save figure to '{}'", path.display()).as_str()))?;

        (self.logger)(&format!("figure is saved to '{}'", path.display()));

        Ok(())
    }

    /// Registers fonts used by bitmap output: the configured font file or a matching system font.
    fn register_fonts(&self) -> GenericResult<()> {
        let family = self.style.font_family.as_str();

        match self.style.font_path.as_ref() {
            Some(font_path) => register_font_file(family, font_path),
            None => register_system_font(family),
        }
    }

    fn render<B>(&self, root: DrawingArea<B, Shift>) -> GenericResult<()>
    where
        B: DrawingBackend,
        B::ErrorType: 'static,
    {
        let context = self.create_context()?;

        draw_figure(&root, &context)?;

        root.present().map_err(|err| format!("cannot present figure: '{err}'").into())
    }

    fn create_context(&self) -> GenericResult<FigureContext<'_>> {
        let projection = self.projection();
        self.input.validate(projection)?;

        let input = &self.input;
        let positions = project_positions(&input.positions, projection);

        let min_extent = match projection {
            Projection::Plain => 0.01,
            Projection::WebMercator => 1000.,
        };
        let bounds = Bounds::from_points(
            input.graph.nodes.iter().chain(input.tour.path.iter()).filter_map(|node| positions.get(node)),
        )
        .ok_or_else(|| GenericError::from("nothing to draw: graph and tour have no nodes"))?
        .with_min_extent(min_extent)
        .with_padding(BOUNDS_PADDING);

        let ordered_labels = get_ordered_labels(&input.tour, input.graph.node_count());
        let legend_lines = get_legend_lines(&ordered_labels, &input.names)?;

        let edge_labels = if self.use_basemap {
            Vec::default()
        } else {
            input.graph.edges.iter().map(|edge| (edge.from, edge.to, format_edge_weight(edge.weight))).collect()
        };

        let basemap = match (self.use_basemap, self.tile_source.as_ref()) {
            (true, Some(source)) => {
                Some(BasemapLayer { source: source.as_ref(), zoom: self.basemap_zoom, max_zoom: MAX_ZOOM })
            }
            (true, None) => {
                (self.logger)("basemap: no tile source is configured, tiles are not drawn");
                None
            }
            _ => None,
        };

        (self.logger)(&format!(
            "figure: {} nodes, {} edges, tour with {} visits",
            input.graph.node_count(),
            input.graph.edges.len(),
            input.tour.path.len()
        ));

        Ok(FigureContext {
            style: &self.style,
            graph: &input.graph,
            names: &input.names,
            positions,
            bounds,
            tour_legs: input.tour.legs().collect(),
            start: input.tour.start(),
            ordered_labels,
            legend_lines,
            title: get_figure_title(&input.tour.cost, input.priority),
            edge_labels,
            basemap,
            logger: self.logger.clone(),
        })
    }
}

/// Creates a static figure of the graph and the tour and validates its input. When `name` is specified,
/// the figure is saved to that file.
pub fn plot_graph_and_tour(input: PlotInput, use_basemap: bool, name: Option<&Path>) -> GenericResult<StaticFigure> {
    let figure = StaticFigure::new(input).with_basemap(use_basemap);

    figure.validate()?;

    if let Some(path) = name {
        figure.save(path)?;
    }

    Ok(figure)
}
