use super::*;

#[test]
fn can_create_default_style() {
    let style = FigureStyle::default();

    assert_eq!(style.size, (2000, 1000));
    assert_eq!(style.node_radius, 20);
    assert_eq!(style.name_font_size, 12);
    assert_eq!(style.order_font_size, 14);
    assert_eq!(style.tour_edge_width, 3);
    assert!(style.font_path.is_none());
}

parameterized_test! {can_get_node_radius_from_size, (node_size, expected), {
    can_get_node_radius_from_size_impl(node_size, expected);
}}

can_get_node_radius_from_size! {
    case_01_default: (800., 20),
    case_02_small: (100., 7),
    case_03_zero: (0., 0),
    case_04_negative: (-10., 0),
}

fn can_get_node_radius_from_size_impl(node_size: f64, expected: u32) {
    assert_eq!(node_radius_from_size(node_size), expected);
}

parameterized_test! {can_parse_color, (value, expected), {
    can_parse_color_impl(value, expected);
}}

can_parse_color! {
    case_01_hex: ("#ff8000", Some((255, 128, 0))),
    case_02_hex_upper: ("#FF0000", Some((255, 0, 0))),
    case_03_name: ("skyblue", Some((135, 206, 235))),
    case_04_name_mixed_case: (" LightGray ", Some((211, 211, 211))),
    case_05_grey: ("grey", Some((128, 128, 128))),
    case_06_short_hex: ("#fff", None),
    case_07_bad_hex: ("#zzzzzz", None),
    case_08_unknown_name: ("magenta", None),
    case_09_non_ascii_hex: ("#a\u{e9}\u{e9}a", None),
}

fn can_parse_color_impl(value: &str, expected: Option<(u8, u8, u8)>) {
    let result = parse_color(value).map(|RGBColor(r, g, b)| (r, g, b));

    assert_eq!(result.ok(), expected);
}
