use super::*;

fn create_map() -> InteractiveMap {
    let mut map = InteractiveMap::new(GeoPoint::new(52.52, 13.405), 6);

    map.add_marker(Marker {
        location: GeoPoint::new(52.52, 13.405),
        popup: "0: Berlin".to_string(),
        tooltip: "0: Berlin".to_string(),
        color: MarkerColor::Red,
    });
    map.add_polyline(PolyLine {
        locations: vec![GeoPoint::new(52.52, 13.405), GeoPoint::new(53.5511, 9.9937)],
        color: "red".to_string(),
        weight: 5.,
        opacity: 0.8,
    });
    map.add_html_element("<h4>Total</h4>".to_string());

    map
}

#[test]
fn can_render_map_as_html() {
    let html = create_map().to_html().unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(LEAFLET_JS));
    assert!(html.contains(AWESOME_MARKERS_JS));
    assert!(html.contains("L.map(\"map\", { center: [52.52,13.405], zoom: 6 })"));
    assert!(html.contains("https://tile.openstreetmap.org/{z}/{x}/{y}.png"));
    assert!(html.contains(r#"{"location":[52.52,13.405],"popup":"0: Berlin","tooltip":"0: Berlin","color":"red"}"#));
    assert!(html.contains(r#""locations":[[52.52,13.405],[53.5511,9.9937]],"color":"red","weight":5.0,"opacity":0.8"#));
    assert!(html.contains("<h4>Total</h4>\n<div id=\"map\"></div>"));
}

#[test]
fn can_escape_marker_texts() {
    let mut map = InteractiveMap::new(GeoPoint::new(0., 0.), 1);
    map.add_marker(Marker {
        location: GeoPoint::new(0., 0.),
        popup: "<script>alert('x')</script>".to_string(),
        tooltip: "A & B".to_string(),
        color: MarkerColor::Blue,
    });

    let html = map.to_html().unwrap();

    assert!(!html.contains("<script>alert"));
    assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
    assert!(html.contains("A &amp; B"));
}

#[test]
fn can_use_custom_tile_provider() {
    let provider = TileProvider {
        url_template: "https://tiles.example.org/{z}/{x}/{y}.png".to_string(),
        attribution: "</script>".to_string(),
        max_zoom: 12,
    };

    let html = InteractiveMap::new(GeoPoint::new(0., 0.), 3).with_tile_provider(provider).to_html().unwrap();

    assert!(html.contains("https://tiles.example.org/{z}/{x}/{y}.png"));
    assert!(html.contains(r#""maxZoom":12"#));
    assert_eq!(html.matches("</script>").count(), 3);
}

parameterized_test! {can_parse_marker_color, (value, expected), {
    can_parse_marker_color_impl(value, expected);
}}

can_parse_marker_color! {
    case_01_red: ("red", Ok(MarkerColor::Red)),
    case_02_grey: ("grey", Ok(MarkerColor::Gray)),
    case_03_purple: ("purple", Ok(MarkerColor::Purple)),
    case_04_unknown: ("pink", Err("unknown marker color: 'pink'".to_string())),
}

fn can_parse_marker_color_impl(value: &str, expected: Result<MarkerColor, String>) {
    assert_eq!(value.parse::<MarkerColor>(), expected);
}

#[test]
fn can_save_map() {
    let directory = tempfile::tempdir().unwrap();
    let path = directory.path().join("map.html");
    let map = create_map();

    map.save(&path).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), map.to_html().unwrap());
}
