#[cfg(test)]
#[path = "../../tests/unit/format/labels_test.rs"]
mod labels_test;

use crate::models::{NodeId, Names, Tour, get_name};
use crate::utils::GenericResult;

/// A node with its visiting order label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderedLabel {
    /// Labelled node.
    pub node: NodeId,
    /// Order label.
    pub label: String,
}

/// Returns order labels for tour nodes.
///
/// When the tour visits as many entries as the graph has nodes, every entry is labelled. Otherwise the
/// last entry is treated as the return to the start and skipped. A node met twice keeps its first
/// position and gets the later order.
pub fn get_ordered_labels(tour: &Tour, node_count: usize) -> Vec<OrderedLabel> {
    let visits = if tour.path.len() == node_count {
        tour.path.as_slice()
    } else {
        &tour.path[..tour.path.len().saturating_sub(1)]
    };

    visits.iter().enumerate().fold(Vec::with_capacity(visits.len()), |mut labels, (idx, &node)| {
        match labels.iter_mut().find(|ordered| ordered.node == node) {
            Some(ordered) => ordered.label = idx.to_string(),
            None => labels.push(OrderedLabel { node, label: idx.to_string() }),
        }

        labels
    })
}

/// Returns legend lines in the form `"{label}: {name}"`.
pub fn get_legend_lines(labels: &[OrderedLabel], names: &Names) -> GenericResult<Vec<String>> {
    labels.iter().map(|ordered| get_name(names, ordered.node).map(|name| format!("{}: {name}", ordered.label))).collect()
}

/// Returns legend text with one line per ordered label.
pub fn get_legend_text(labels: &[OrderedLabel], names: &Names) -> GenericResult<String> {
    get_legend_lines(labels, names).map(|lines| lines.join("\n"))
}

/// Formats edge weight label.
pub fn format_edge_weight(weight: f64) -> String {
    format!("{weight:.1}")
}
