#[cfg(test)]
#[path = "../../tests/unit/models/graph_test.rs"]
mod graph_test;

use serde::{Deserialize, Serialize};

/// A node identifier.
pub type NodeId = usize;

/// An undirected weighted edge.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Edge {
    /// Edge start node.
    pub from: NodeId,
    /// Edge end node.
    pub to: NodeId,
    /// Edge weight.
    pub weight: f64,
}

/// A graph with ordered nodes and undirected weighted edges. Node order is the drawing order.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Graph {
    /// Graph nodes.
    pub nodes: Vec<NodeId>,
    /// Graph edges.
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Graph {
    /// Creates a new instance of `Graph`.
    pub fn new(nodes: Vec<NodeId>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    /// Returns amount of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Checks whether the node belongs to the graph.
    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }
}
