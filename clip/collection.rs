use tracing::trace;

use super::clip_to_rect;
use crate::geometry::{IndexOptions, Rect};
use crate::object::{Feature, Object};

/// 裁剪集合的每个子对象
///
/// 结果总是 FeatureCollection：裁剪后为空的子对象被丢弃，不是
/// Feature 的子对象包一层不带 id 的 Feature。
pub fn clip_collection(object: &Object, window: Rect, opts: &IndexOptions) -> Object {
    let children = object.children();
    let total = children.len();
    let features: Vec<Feature> = children
        .iter()
        .map(|child| clip_to_rect(child, window, opts))
        .filter(|clipped| !clipped.empty())
        .map(|clipped| match clipped {
            Object::Feature(feature) => *feature,
            other => Feature::new(other),
        })
        .collect();
    trace!(
        "Clipped {} with {} children, {} kept",
        object.type_name(),
        total,
        features.len()
    );
    Object::FeatureCollection(features)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Line, Point};

    #[test]
    fn test_clip_multipoint() {
        let multi = Object::MultiPoint(vec![
            Point::new(1.0, 1.0),
            Point::new(20.0, 20.0),
            Point::new(5.0, 5.0),
        ]);
        let window = Rect::new(0.0, 0.0, 10.0, 10.0);
        match clip_collection(&multi, window, &IndexOptions::default()) {
            Object::FeatureCollection(features) => {
                assert_eq!(features.len(), 2);
                assert!(features.iter().all(|f| f.id.is_none()));
                assert_eq!(features[1].geometry, Object::Point(Point::new(5.0, 5.0)));
            }
            other => panic!("wrong type: {}", other.type_name()),
        }
    }

    #[test]
    fn test_clip_feature_collection_keeps_properties() {
        let collection = Object::FeatureCollection(vec![
            Feature::new(Object::Rect(Rect::new(0.0, 0.0, 4.0, 4.0)))
                .with_id(1)
                .with_property("name", "a"),
            Feature::new(Object::LineString(Line::new(
                vec![Point::new(50.0, 50.0), Point::new(60.0, 60.0)],
                None,
            )))
            .with_id(2),
        ]);
        let window = Rect::new(2.0, 2.0, 10.0, 10.0);
        match clip_collection(&collection, window, &IndexOptions::default()) {
            Object::FeatureCollection(features) => {
                assert_eq!(features.len(), 1);
                assert_eq!(features[0].id, Some(1.into()));
                assert_eq!(features[0].properties["name"], "a");
                assert_eq!(features[0].geometry.type_name(), "Polygon");
                assert_eq!(features[0].geometry.rect(), Rect::new(2.0, 2.0, 4.0, 4.0));
            }
            other => panic!("wrong type: {}", other.type_name()),
        }
    }

    #[test]
    fn test_clip_empty_collection() {
        let window = Rect::new(0.0, 0.0, 1.0, 1.0);
        let clipped = clip_collection(&Object::GeometryCollection(Vec::new()), window, &IndexOptions::default());
        assert_eq!(clipped, Object::FeatureCollection(Vec::new()));
    }
}
