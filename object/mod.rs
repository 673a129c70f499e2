// 对象模块
// GeoJSON 风格的对象模型，集合谓词以及与 geojson / geo 的互相转换

pub mod convert;
pub mod predicates;

use serde_json::{Map, Value};

use crate::geometry::{Geometry, Line, Point, Poly, Rect};

/// 可以被存储、查询和裁剪的对象
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    Point(Point),
    Rect(Rect),
    LineString(Line),
    Polygon(Poly),
    MultiPoint(Vec<Point>),
    MultiLineString(Vec<Line>),
    MultiPolygon(Vec<Poly>),
    GeometryCollection(Vec<Object>),
    Feature(Box<Feature>),
    FeatureCollection(Vec<Feature>),
}

/// 带 id 和属性的几何对象
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub geometry: Object,
    pub id: Option<Value>,
    pub properties: Map<String, Value>,
}

impl Feature {
    pub fn new(geometry: Object) -> Self {
        Feature {
            geometry,
            id: None,
            properties: Map::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<Value>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// 换一个几何体，保留 id 和属性
    pub fn with_geometry(&self, geometry: Object) -> Feature {
        Feature {
            geometry,
            id: self.id.clone(),
            properties: self.properties.clone(),
        }
    }
}

/// 对象展开后的基础几何体
#[derive(Debug, Clone, Copy)]
pub(crate) enum Leaf<'a> {
    Point(Point),
    Rect(Rect),
    Line(&'a Line),
    Poly(&'a Poly),
}

impl<'a> Leaf<'a> {
    pub(crate) fn geometry(&self) -> &dyn Geometry {
        match self {
            Leaf::Point(point) => point,
            Leaf::Rect(rect) => rect,
            Leaf::Line(line) => *line,
            Leaf::Poly(poly) => *poly,
        }
    }
}

impl Object {
    /// 类型名，与 GeoJSON 的 `type` 字段一致
    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Point(_) => "Point",
            Object::Rect(_) => "Rect",
            Object::LineString(_) => "LineString",
            Object::Polygon(_) => "Polygon",
            Object::MultiPoint(_) => "MultiPoint",
            Object::MultiLineString(_) => "MultiLineString",
            Object::MultiPolygon(_) => "MultiPolygon",
            Object::GeometryCollection(_) => "GeometryCollection",
            Object::Feature(_) => "Feature",
            Object::FeatureCollection(_) => "FeatureCollection",
        }
    }

    /// 集合类型在所有子对象都为空时为空
    pub fn empty(&self) -> bool {
        self.leaves().iter().all(|leaf| leaf.geometry().empty())
    }

    pub fn valid(&self) -> bool {
        self.leaves().iter().all(|leaf| leaf.geometry().valid())
    }

    /// 所有非空子对象边界框的并集，没有时返回零矩形
    pub fn rect(&self) -> Rect {
        let mut rect: Option<Rect> = None;
        for leaf in self.leaves() {
            let geometry = leaf.geometry();
            if geometry.empty() {
                continue;
            }
            let leaf_rect = geometry.rect();
            rect = Some(match rect {
                Some(acc) => acc.union(&leaf_rect),
                None => leaf_rect,
            });
        }
        rect.unwrap_or_default()
    }

    pub fn center(&self) -> Point {
        self.rect().center()
    }

    pub fn num_points(&self) -> usize {
        self.leaves()
            .iter()
            .map(|leaf| match leaf {
                Leaf::Point(_) => 1,
                Leaf::Rect(rect) => rect.num_points(),
                Leaf::Line(line) => line.num_points(),
                Leaf::Poly(poly) => {
                    poly.exterior.num_points()
                        + poly.holes.iter().map(|h| h.num_points()).sum::<usize>()
                }
            })
            .sum()
    }

    /// 集合的直接子对象，非集合返回空列表
    pub fn children(&self) -> Vec<Object> {
        match self {
            Object::MultiPoint(points) => points.iter().copied().map(Object::Point).collect(),
            Object::MultiLineString(lines) => lines.iter().cloned().map(Object::LineString).collect(),
            Object::MultiPolygon(polys) => polys.iter().cloned().map(Object::Polygon).collect(),
            Object::GeometryCollection(objects) => objects.clone(),
            Object::FeatureCollection(features) => features
                .iter()
                .cloned()
                .map(|f| Object::Feature(Box::new(f)))
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn is_collection(&self) -> bool {
        matches!(
            self,
            Object::MultiPoint(_)
                | Object::MultiLineString(_)
                | Object::MultiPolygon(_)
                | Object::GeometryCollection(_)
                | Object::FeatureCollection(_)
        )
    }

    /// 递归展开成基础几何体
    pub(crate) fn leaves(&self) -> Vec<Leaf<'_>> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<Leaf<'a>>) {
        match self {
            Object::Point(point) => out.push(Leaf::Point(*point)),
            Object::Rect(rect) => out.push(Leaf::Rect(*rect)),
            Object::LineString(line) => out.push(Leaf::Line(line)),
            Object::Polygon(poly) => out.push(Leaf::Poly(poly)),
            Object::MultiPoint(points) => out.extend(points.iter().map(|p| Leaf::Point(*p))),
            Object::MultiLineString(lines) => out.extend(lines.iter().map(Leaf::Line)),
            Object::MultiPolygon(polys) => out.extend(polys.iter().map(Leaf::Poly)),
            Object::GeometryCollection(objects) => {
                for object in objects {
                    object.collect_leaves(out);
                }
            }
            Object::Feature(feature) => feature.geometry.collect_leaves(out),
            Object::FeatureCollection(features) => {
                for feature in features {
                    feature.geometry.collect_leaves(out);
                }
            }
        }
    }
}

impl From<Feature> for Object {
    fn from(feature: Feature) -> Self {
        Object::Feature(Box::new(feature))
    }
}
