//! A crate to visualize a graph together with a traveling salesman tour computed elsewhere.
//!
//! # Renderers
//!
//! - **static figure**: two panels rendered with `plotters`. The left panel shows the full graph with
//!   node names, the right one highlights the tour with ordered labels, a legend and a cost title.
//!   Nodes can be projected to Web Mercator and drawn over basemap tiles. See [`plot_graph_and_tour`].
//! - **interactive map**: a standalone Leaflet html document with numbered markers, a route polyline
//!   and a floating cost box. See [`plot_route_map`].
//!
//! Additionally, a tour can be exported as geo json, see [`format::serialize_tour_as_geojson`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

pub mod basemap;
pub mod format;
pub mod models;
pub mod plots;
pub mod prelude;
pub mod projection;
pub mod utils;
pub mod web;

pub use crate::plots::plot_graph_and_tour;
pub use crate::web::plot_route_map;
