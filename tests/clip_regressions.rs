//! 裁剪回归用例

use spatio_core::geometry::{IndexOptions, Line, Point, Poly, Rect};
use spatio_core::{clip, Object};

fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

fn window(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Object {
    Object::Rect(Rect::new(min_x, min_y, max_x, max_y))
}

#[test]
fn test_zigzag_line_splits_into_two_parts() {
    let line = Object::LineString(Line::new(pts(&[(1.0, 1.0), (2.0, 2.0), (3.0, 1.0)]), None));
    let clipped = clip(&line, &window(1.5, 0.5, 2.5, 1.8), &IndexOptions::default());
    assert_eq!(clipped.type_name(), "MultiLineString");
    assert_eq!(clipped.children().len(), 2);
}

#[test]
fn test_shapes_inside_window_are_unchanged() {
    let opts = IndexOptions::default();
    let big = window(-100.0, -100.0, 100.0, 100.0);

    let line = Object::LineString(Line::new(pts(&[(1.0, 1.0), (2.0, 2.0), (3.0, 1.0)]), None));
    assert_eq!(clip(&line, &big, &opts), line);

    let poly = Object::Polygon(Poly::new(
        pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)]),
        vec![pts(&[(2.0, 2.0), (4.0, 2.0), (4.0, 4.0), (2.0, 4.0), (2.0, 2.0)])],
        None,
    ));
    assert_eq!(clip(&poly, &big, &opts), poly);

    let point = Object::Point(Point::new(5.0, 5.0));
    assert_eq!(clip(&point, &big, &opts), point);
}

#[test]
fn test_shapes_outside_window_are_empty() {
    let opts = IndexOptions::default();
    let far = window(100.0, 100.0, 200.0, 200.0);
    let shapes = vec![
        Object::Point(Point::new(5.0, 5.0)),
        Object::Rect(Rect::new(0.0, 0.0, 10.0, 10.0)),
        Object::LineString(Line::new(pts(&[(1.0, 1.0), (2.0, 2.0)]), None)),
        Object::Polygon(Poly::new(
            pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 0.0)]),
            vec![],
            None,
        )),
        Object::MultiPoint(vec![Point::new(1.0, 1.0)]),
    ];
    for shape in shapes {
        let clipped = clip(&shape, &far, &opts);
        assert!(clipped.empty(), "{} -> {:?}", shape.type_name(), clipped);
    }
}

#[test]
fn test_polygon_with_hole_clip() {
    let opts = IndexOptions::default();
    let polygon = Object::Polygon(Poly::new(
        pts(&[(2.0, 2.0), (1.0, 2.0), (1.5, 1.5), (1.0, 1.0), (2.0, 1.0), (2.0, 2.0)]),
        vec![pts(&[(1.9, 1.9), (1.2, 1.9), (1.45, 1.65), (1.9, 1.5), (1.9, 1.9)])],
        None,
    ));

    match clip(&polygon, &window(1.3, 1.3, 1.4, 2.15), &opts) {
        Object::Polygon(poly) => assert_eq!(poly.holes.len(), 1),
        other => panic!("wrong type: {}", other.type_name()),
    }
    match clip(&polygon, &window(1.1, 0.8, 1.15, 2.1), &opts) {
        Object::Polygon(poly) => assert!(poly.holes.is_empty()),
        other => panic!("wrong type: {}", other.type_name()),
    }
}

#[test]
fn test_clip_feature_collection_from_geojson() {
    let text = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "id": 1, "properties": {"kind": "road"},
             "geometry": {"type": "LineString", "coordinates": [[-10.0, 5.0], [20.0, 5.0]]}},
            {"type": "Feature", "id": 2, "properties": {},
             "geometry": {"type": "Point", "coordinates": [50.0, 50.0]}},
            {"type": "Feature", "id": 3, "properties": {},
             "geometry": {"type": "Polygon", "coordinates": [[[5.0, 5.0], [15.0, 5.0], [15.0, 15.0], [5.0, 15.0], [5.0, 5.0]]]}}
        ]
    }"#;
    let collection = Object::from_geojson_str(text).unwrap();
    let clipped = clip(&collection, &window(0.0, 0.0, 10.0, 10.0), &IndexOptions::default());
    let Object::FeatureCollection(features) = &clipped else {
        panic!("wrong type: {}", clipped.type_name());
    };
    assert_eq!(features.len(), 2);
    assert_eq!(features[0].properties["kind"], "road");
    assert_eq!(features[0].geometry.rect(), Rect::new(0.0, 5.0, 10.0, 5.0));
    assert_eq!(features[1].geometry.rect(), Rect::new(5.0, 5.0, 10.0, 10.0));

    // 结果可以写回 GeoJSON 再读入
    let json = clipped.to_json_string().unwrap();
    let reparsed = Object::from_geojson_str(&json).unwrap();
    assert_eq!(reparsed.children().len(), 2);
}
