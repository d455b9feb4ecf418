//! This module reimports commonly used types.

pub use crate::basemap::{DirectoryTileSource, TileProvider, TileSource};
pub use crate::models::{CostBreakdown, Edge, GeoPoint, Graph, Names, NodeId, PlotInput, Positions, Priority, Tour, TourCost};
pub use crate::plots::{FigureStyle, StaticFigure, plot_graph_and_tour};
pub use crate::projection::Projection;
pub use crate::utils::{GenericError, GenericResult, InfoLogger};
pub use crate::web::{InteractiveMap, MapStyle, plot_route_map};
