use crate::models::*;

pub const BERLIN: NodeId = 0;
pub const HAMBURG: NodeId = 1;
pub const MUNICH: NodeId = 2;
pub const COLOGNE: NodeId = 3;

pub fn create_positions(points: &[(NodeId, f64, f64)]) -> Positions {
    points.iter().map(|&(node, lat, lng)| (node, GeoPoint::new(lat, lng))).collect()
}

pub fn create_names(names: &[(NodeId, &str)]) -> Names {
    names.iter().map(|&(node, name)| (node, name.to_string())).collect()
}

pub fn create_example_positions() -> Positions {
    create_positions(&[
        (BERLIN, 52.52, 13.405),
        (HAMBURG, 53.5511, 9.9937),
        (MUNICH, 48.1351, 11.582),
        (COLOGNE, 50.9375, 6.9603),
    ])
}

pub fn create_example_names() -> Names {
    create_names(&[(BERLIN, "Berlin"), (HAMBURG, "Hamburg"), (MUNICH, "Munich"), (COLOGNE, "Cologne")])
}

pub fn create_example_graph() -> Graph {
    Graph::new(
        vec![BERLIN, HAMBURG, MUNICH, COLOGNE],
        vec![
            Edge { from: BERLIN, to: HAMBURG, weight: 255.3 },
            Edge { from: HAMBURG, to: COLOGNE, weight: 357.1 },
            Edge { from: COLOGNE, to: MUNICH, weight: 456.4 },
            Edge { from: MUNICH, to: BERLIN, weight: 504.6 },
            Edge { from: BERLIN, to: COLOGNE, weight: 777.77 },
        ],
    )
}

pub fn create_example_tour(cost: TourCost) -> Tour {
    Tour::new(vec![BERLIN, HAMBURG, COLOGNE, MUNICH, BERLIN], cost)
}

pub fn create_example_input() -> PlotInput {
    create_example_input_with_cost(TourCost::Single(7.3456))
}

pub fn create_example_input_with_cost(cost: TourCost) -> PlotInput {
    PlotInput {
        graph: create_example_graph(),
        positions: create_example_positions(),
        names: create_example_names(),
        tour: create_example_tour(cost),
        priority: Priority::Time,
    }
}

pub fn create_example_breakdown() -> TourCost {
    TourCost::Breakdown(CostBreakdown { time: 1.5, distance: 120.25, cost: 30. })
}
