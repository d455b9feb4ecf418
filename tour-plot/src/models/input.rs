#[cfg(test)]
#[path = "../../tests/unit/models/input_test.rs"]
mod input_test;

use crate::models::*;
use crate::projection::Projection;
use crate::utils::{GenericError, GenericResult};
use serde::{Deserialize, Serialize};

/// Aggregates everything needed to plot a graph with a tour.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PlotInput {
    /// A graph to draw.
    pub graph: Graph,
    /// Node positions.
    pub positions: Positions,
    /// Node display labels.
    pub names: Names,
    /// A tour to highlight.
    pub tour: Tour,
    /// A priority the tour cost refers to.
    #[serde(default)]
    pub priority: Priority,
}

impl PlotInput {
    /// Checks that the input is consistent and can be drawn using the given projection.
    pub fn validate(&self, projection: Projection) -> GenericResult<()> {
        let mut errors = Vec::new();

        self.graph.nodes.iter().for_each(|&node| {
            check_node(node, &self.positions, &self.names, projection, "graph", &mut errors);
        });

        self.graph.edges.iter().filter(|edge| !self.graph.contains(edge.from) || !self.graph.contains(edge.to)).for_each(
            |edge| errors.push(format!("edge ({}, {}) refers to unknown node", edge.from, edge.to).into()),
        );

        if let Err(err) = validate_tour(&self.tour, &self.positions, &self.names, projection) {
            errors.push(err);
        }

        if errors.is_empty() { Ok(()) } else { Err(GenericError::join_many(&errors, "\n").into()) }
    }

    /// Returns position of the node.
    pub fn position(&self, node: NodeId) -> GenericResult<GeoPoint> {
        get_position(&self.positions, node)
    }

    /// Returns display name of the node.
    pub fn name(&self, node: NodeId) -> GenericResult<&str> {
        get_name(&self.names, node)
    }
}

/// Checks that the tour is not empty and all its nodes have valid positions and names.
pub fn validate_tour(tour: &Tour, positions: &Positions, names: &Names, projection: Projection) -> GenericResult<()> {
    if tour.path.is_empty() {
        return Err("tour has no nodes".into());
    }

    let mut errors = Vec::new();
    tour.path.iter().for_each(|&node| check_node(node, positions, names, projection, "tour", &mut errors));

    match &tour.cost {
        TourCost::Single(value) if !value.is_finite() => errors.push(format!("tour cost {value} is not finite").into()),
        TourCost::Breakdown(breakdown)
            if [breakdown.time, breakdown.distance, breakdown.cost].iter().any(|value| !value.is_finite()) =>
        {
            errors.push("tour cost breakdown has non finite values".into())
        }
        _ => {}
    }

    if errors.is_empty() { Ok(()) } else { Err(GenericError::join_many(&errors, "\n").into()) }
}

/// Returns position of the node or an error if it is missing.
pub fn get_position(positions: &Positions, node: NodeId) -> GenericResult<GeoPoint> {
    positions.get(&node).copied().ok_or_else(|| format!("node {node} has no position").into())
}

/// Returns display name of the node or an error if it is missing.
pub fn get_name(names: &Names, node: NodeId) -> GenericResult<&str> {
    names.get(&node).map(|name| name.as_str()).ok_or_else(|| format!("node {node} has no name").into())
}

fn check_node(
    node: NodeId,
    positions: &Positions,
    names: &Names,
    projection: Projection,
    scope: &str,
    errors: &mut Vec<GenericError>,
) {
    match positions.get(&node) {
        Some(point) => {
            if let Err(err) = projection.check(point) {
                errors.push(format!("{scope} node {node}: {err}").into());
            }
        }
        None => errors.push(format!("{scope} node {node} has no position").into()),
    }

    if !names.contains_key(&node) {
        errors.push(format!("{scope} node {node} has no name").into());
    }
}
