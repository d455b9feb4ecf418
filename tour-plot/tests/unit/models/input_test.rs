use super::*;
use crate::helpers::models::*;

#[test]
fn can_validate_example_input() {
    let input = create_example_input();

    assert_eq!(input.validate(Projection::Plain), Ok(()));
    assert_eq!(input.validate(Projection::WebMercator), Ok(()));
}

#[test]
fn can_detect_missing_position_and_name() {
    let mut input = create_example_input();
    input.positions.remove(&MUNICH);
    input.names.remove(&COLOGNE);

    let error = input.validate(Projection::Plain).unwrap_err().to_string();

    assert!(error.contains("graph node 2 has no position"));
    assert!(error.contains("graph node 3 has no name"));
    assert!(error.contains("tour node 2 has no position"));
}

#[test]
fn can_detect_edge_with_unknown_node() {
    let mut input = create_example_input();
    input.graph.edges.push(Edge { from: BERLIN, to: 42, weight: 1. });

    let error = input.validate(Projection::Plain).unwrap_err().to_string();

    assert_eq!(error, "edge (0, 42) refers to unknown node");
}

#[test]
fn can_detect_latitude_outside_of_web_mercator() {
    let mut input = create_example_input();
    input.positions.insert(HAMBURG, GeoPoint::new(89., 10.));

    assert!(input.validate(Projection::Plain).is_ok());
    assert!(input.validate(Projection::WebMercator).unwrap_err().to_string().contains("latitude 89 is outside"));
}

#[test]
fn can_detect_empty_tour() {
    let tour = Tour::new(vec![], TourCost::Single(0.));

    let result = validate_tour(&tour, &create_example_positions(), &create_example_names(), Projection::Plain);

    assert_eq!(result, Err("tour has no nodes".into()));
}

parameterized_test! {can_detect_non_finite_tour_cost, (cost, expected), {
    can_detect_non_finite_tour_cost_impl(cost, expected);
}}

can_detect_non_finite_tour_cost! {
    case_01_nan: (TourCost::Single(f64::NAN), "tour cost NaN is not finite"),
    case_02_infinity: (TourCost::Single(f64::INFINITY), "tour cost inf is not finite"),
    case_03_breakdown_nan: (
        TourCost::Breakdown(CostBreakdown { time: 1., distance: f64::NAN, cost: 2. }),
        "tour cost breakdown has non finite values"
    ),
}

fn can_detect_non_finite_tour_cost_impl(cost: TourCost, expected: &str) {
    let tour = create_example_tour(cost);

    let result = validate_tour(&tour, &create_example_positions(), &create_example_names(), Projection::Plain);

    assert_eq!(result, Err(expected.into()));
}

#[test]
fn can_get_position_and_name() {
    let input = create_example_input();

    assert_eq!(input.position(BERLIN), Ok(GeoPoint::new(52.52, 13.405)));
    assert_eq!(input.name(MUNICH), Ok("Munich"));
    assert_eq!(input.name(42), Err("node 42 has no name".into()));
}

#[test]
fn can_deserialize_input() {
    let input: PlotInput = serde_json::from_str(
        r#"{
            "graph": { "nodes": [0, 1], "edges": [{ "from": 0, "to": 1, "weight": 2.5 }] },
            "positions": { "0": [52.52, 13.405], "1": [48.1351, 11.582] },
            "names": { "0": "Berlin", "1": "Munich" },
            "tour": { "path": [0, 1, 0], "cost": [1.5, 10, 20] }
        }"#,
    )
    .unwrap();

    assert_eq!(input.priority, Priority::Time);
    assert_eq!(input.positions.get(&1), Some(&GeoPoint::new(48.1351, 11.582)));
    assert_eq!(input.tour.cost, TourCost::Breakdown(CostBreakdown { time: 1.5, distance: 10., cost: 20. }));
    assert!(input.validate(Projection::WebMercator).is_ok());
}
