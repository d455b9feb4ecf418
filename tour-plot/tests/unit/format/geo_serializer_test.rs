use super::*;
use crate::helpers::models::*;
use crate::models::TourCost;

#[test]
fn can_create_tour_geojson() {
    let tour = create_example_tour(TourCost::Single(1.));

    let collection = create_tour_geojson(&tour, &create_example_positions(), &create_example_names()).unwrap();

    assert_eq!(collection.features.len(), 6);

    let start = collection.features.first().unwrap();
    assert_eq!(start.geometry, Geometry::Point { coordinates: (13.405, 52.52) });
    assert_eq!(start.properties.get("marker-color").map(String::as_str), Some("#ff0000"));
    assert_eq!(start.properties.get("name").map(String::as_str), Some("Berlin"));
    assert_eq!(start.properties.get("order").map(String::as_str), Some("0"));

    let second = collection.features.get(1).unwrap();
    assert_eq!(second.properties.get("marker-color").map(String::as_str), Some("#0000ff"));
    assert_eq!(second.properties.get("name").map(String::as_str), Some("Hamburg"));

    let route = collection.features.last().unwrap();
    match &route.geometry {
        Geometry::LineString { coordinates } => {
            assert_eq!(coordinates.len(), 5);
            assert_eq!(coordinates.first(), coordinates.last());
        }
        Geometry::Point { .. } => unreachable!("route should be a line string"),
    }
}

#[test]
fn can_serialize_tour_as_geojson() {
    let tour = create_example_tour(TourCost::Single(1.));
    let mut buffer = Vec::new();

    serialize_tour_as_geojson(BufWriter::new(&mut buffer), &tour, &create_example_positions(), &create_example_names())
        .unwrap();

    let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
    assert_eq!(value["type"], "FeatureCollection");
    assert_eq!(value["features"][0]["type"], "Feature");
    assert_eq!(value["features"][0]["geometry"]["type"], "Point");
    assert_eq!(value["features"][5]["geometry"]["type"], "LineString");
    assert_eq!(value["features"][5]["properties"]["stroke-width"], "5");
}

#[test]
fn can_fail_geojson_for_unknown_node() {
    let tour = Tour::new(vec![BERLIN, 42], TourCost::Single(1.));

    let result = create_tour_geojson(&tour, &create_example_positions(), &create_example_names());

    assert!(result.is_err());
}
