use super::*;
use crate::models::CostBreakdown;

fn create_breakdown() -> TourCost {
    TourCost::Breakdown(CostBreakdown { time: 1.5, distance: 120.25, cost: 30. })
}

parameterized_test! {can_get_figure_title, (cost, priority, expected), {
    assert_eq!(get_figure_title(&cost, priority).as_deref(), expected);
}}

can_get_figure_title! {
    case_01_time: (TourCost::Single(7.3456), Priority::Time, Some("TSP Path Total time: 7.35 hours")),
    case_02_distance: (TourCost::Single(1234.5678), Priority::Distance, Some("TSP Path Total distance: 1234.57 km")),
    case_03_cost: (TourCost::Single(42.), Priority::Cost, Some("TSP Path Total cost: 42.00 local currency")),
    case_04_breakdown: (create_breakdown(), Priority::Time, None),
}

parameterized_test! {can_get_title_box_text, (cost, priority, expected), {
    assert_eq!(get_title_box_text(&cost, priority), expected);
}}

can_get_title_box_text! {
    case_01_time: (TourCost::Single(7.3456), Priority::Time, "Total time: 7.35 hours"),
    case_02_cost: (TourCost::Single(42.), Priority::Cost, "Total cost: 42.00 local currency"),
    case_03_breakdown: (create_breakdown(), Priority::Distance, "Time: 1.50 hours, Distance: 120.25 km, Cost: 30.00 local currency"),
    case_04_breakdown_with_cost_priority: (create_breakdown(), Priority::Cost, "Time: 1.50 hours, Distance: 120.25 km, Cost: 30.00 local currency"),
}

#[test]
fn can_get_title_box_html() {
    let html = get_title_box_html(&TourCost::Single(2.), Priority::Distance);

    assert!(html.starts_with(r#"<h4 style="position:fixed;top:10px;left:10px;z-index:9999;background:white;"#));
    assert!(html.contains("padding:10px;border-radius:8px;box-shadow:2px 2px 10px rgba(0,0,0,0.1);"));
    assert!(html.ends_with(">Total distance: 2.00 km</h4>"));
}

#[test]
fn can_escape_html() {
    assert_eq!(escape_html(r#"<b>"A" & 'B'</b>"#), "&lt;b&gt;&quot;A&quot; &amp; &#39;B&#39;&lt;/b&gt;");
    assert_eq!(escape_html("Köln"), "Köln");
}
