use super::*;

#[test]
fn can_create_bounds_from_points() {
    let points = [(1., 5.), (-2., 3.), (4., -1.)];

    let bounds = Bounds::from_points(points.iter()).unwrap();

    assert_eq!(bounds, Bounds { min_x: -2., max_x: 4., min_y: -1., max_y: 5. });
    assert_eq!(bounds.width(), 6.);
    assert_eq!(bounds.height(), 6.);
    assert_eq!(bounds.center(), (1., 2.));
}

#[test]
fn can_handle_empty_points() {
    assert!(Bounds::from_points(std::iter::empty()).is_none());
}

#[test]
fn can_grow_single_point_to_min_extent() {
    let bounds = Bounds::from_points([(10., 20.)].iter()).unwrap().with_min_extent(2.);

    assert_eq!(bounds, Bounds { min_x: 9., max_x: 11., min_y: 19., max_y: 21. });
}

#[test]
fn can_add_padding() {
    let bounds = Bounds { min_x: 0., max_x: 10., min_y: 0., max_y: 20. }.with_padding(0.1);

    assert_eq!(bounds, Bounds { min_x: -1., max_x: 11., min_y: -2., max_y: 22. });
}

parameterized_test! {can_fit_aspect, (bounds, aspect, expected), {
    assert_eq!(bounds.with_aspect(aspect), expected);
}}

can_fit_aspect! {
    case_01_wider: (Bounds { min_x: 0., max_x: 10., min_y: 0., max_y: 10. }, 2., Bounds { min_x: -5., max_x: 15., min_y: 0., max_y: 10. }),
    case_02_taller: (Bounds { min_x: 0., max_x: 10., min_y: 0., max_y: 10. }, 0.5, Bounds { min_x: 0., max_x: 10., min_y: -5., max_y: 15. }),
    case_03_same: (Bounds { min_x: 0., max_x: 4., min_y: 0., max_y: 2. }, 2., Bounds { min_x: 0., max_x: 4., min_y: 0., max_y: 2. }),
    case_04_invalid: (Bounds { min_x: 0., max_x: 4., min_y: 0., max_y: 2. }, f64::NAN, Bounds { min_x: 0., max_x: 4., min_y: 0., max_y: 2. }),
}
