use super::*;
use crate::helpers::models::*;
use crate::models::TourCost;

fn to_pairs(labels: &[OrderedLabel]) -> Vec<(NodeId, &str)> {
    labels.iter().map(|ordered| (ordered.node, ordered.label.as_str())).collect()
}

parameterized_test! {can_get_ordered_labels, (path, node_count, expected), {
    can_get_ordered_labels_impl(path, node_count, expected);
}}

can_get_ordered_labels! {
    case_01_closed_tour: (vec![0, 1, 3, 2, 0], 4, vec![(0, "0"), (1, "1"), (3, "2"), (2, "3")]),
    case_02_open_path_over_all_nodes: (vec![2, 0, 1, 3], 4, vec![(2, "0"), (0, "1"), (1, "2"), (3, "3")]),
    case_03_partial_closed_tour: (vec![0, 1, 0], 4, vec![(0, "0"), (1, "1")]),
    case_04_repeated_visit: (vec![0, 1, 0, 2], 5, vec![(0, "2"), (1, "1")]),
    case_05_single_node: (vec![1], 4, vec![]),
    case_06_single_node_graph: (vec![1], 1, vec![(1, "0")]),
}

fn can_get_ordered_labels_impl(path: Vec<NodeId>, node_count: usize, expected: Vec<(NodeId, &str)>) {
    let tour = Tour::new(path, TourCost::Single(0.));

    let labels = get_ordered_labels(&tour, node_count);

    assert_eq!(to_pairs(&labels), expected);
}

#[test]
fn can_get_legend_text() {
    let tour = create_example_tour(TourCost::Single(1.));
    let labels = get_ordered_labels(&tour, 4);

    let legend = get_legend_text(&labels, &create_example_names()).unwrap();

    assert_eq!(legend, "0: Berlin\n1: Hamburg\n2: Cologne\n3: Munich");
}

#[test]
fn can_fail_legend_for_unknown_name() {
    let labels = vec![OrderedLabel { node: 42, label: "0".to_string() }];

    let result = get_legend_lines(&labels, &create_example_names());

    assert_eq!(result, Err("node 42 has no name".into()));
}

parameterized_test! {can_format_edge_weight, (weight, expected), {
    assert_eq!(format_edge_weight(weight), expected);
}}

can_format_edge_weight! {
    case_01: (12.34, "12.3"),
    case_02: (777.77, "777.8"),
    case_03: (5., "5.0"),
}
