//! GeoJSON 与 geo 类型的转换
//!
//! 解析时多边形的每个环至少 4 个点且首尾相同，折线至少 2 个点，
//! 坐标至少两维（多出的维度忽略）。矩形输出为多边形。

use geojson::{feature::Id, GeoJson, Position};
use serde_json::Value;
use tracing::debug;

use super::{Feature, Object};
use crate::error::{Result, SpatioError};
use crate::geometry::{IndexOptions, Line, Point, Poly, Rect};

impl Object {
    /// 用默认索引选项解析 GeoJSON 文本
    pub fn from_geojson_str(text: &str) -> Result<Object> {
        Object::parse(text, &IndexOptions::default())
    }

    /// 解析 GeoJSON 文本，支持 Geometry、Feature 和 FeatureCollection
    pub fn parse(text: &str, opts: &IndexOptions) -> Result<Object> {
        let geojson = text.parse::<GeoJson>()?;
        Object::from_geojson(geojson, opts)
    }

    pub fn from_geojson(geojson: GeoJson, opts: &IndexOptions) -> Result<Object> {
        match geojson {
            GeoJson::Geometry(geometry) => from_geometry(geometry, opts),
            GeoJson::Feature(feature) => Ok(Object::Feature(Box::new(from_feature(feature, opts)?))),
            GeoJson::FeatureCollection(collection) => {
                let features = collection
                    .features
                    .into_iter()
                    .map(|feature| from_feature(feature, opts))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Object::FeatureCollection(features))
            }
        }
    }

    pub fn to_geojson(&self) -> GeoJson {
        match self {
            Object::Feature(feature) => GeoJson::Feature(to_feature(feature)),
            Object::FeatureCollection(features) => GeoJson::FeatureCollection(geojson::FeatureCollection {
                bbox: None,
                features: features.iter().map(to_feature).collect(),
                foreign_members: None,
            }),
            _ => GeoJson::Geometry(self.to_geometry()),
        }
    }

    /// 紧凑的 GeoJSON 文本
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_geojson())?)
    }

    /// 转成 GeoJSON 几何体，Feature 取其几何体
    pub fn to_geometry(&self) -> geojson::Geometry {
        let value = match self {
            Object::Point(point) => geojson::Value::Point(position(*point)),
            Object::Rect(rect) => geojson::Value::Polygon(vec![rect_positions(rect)]),
            Object::LineString(line) => geojson::Value::LineString(positions(line.points())),
            Object::Polygon(poly) => geojson::Value::Polygon(poly_positions(poly)),
            Object::MultiPoint(points) => {
                geojson::Value::MultiPoint(points.iter().map(|p| position(*p)).collect())
            }
            Object::MultiLineString(lines) => {
                geojson::Value::MultiLineString(lines.iter().map(|l| positions(l.points())).collect())
            }
            Object::MultiPolygon(polys) => {
                geojson::Value::MultiPolygon(polys.iter().map(poly_positions).collect())
            }
            Object::GeometryCollection(objects) => {
                geojson::Value::GeometryCollection(objects.iter().map(|o| o.to_geometry()).collect())
            }
            Object::Feature(feature) => return feature.geometry.to_geometry(),
            Object::FeatureCollection(features) => geojson::Value::GeometryCollection(
                features.iter().map(|f| f.geometry.to_geometry()).collect(),
            ),
        };
        geojson::Geometry::new(value)
    }

    /// 转成 geo 的几何体，Feature 取其几何体
    pub fn to_geo(&self) -> geo::Geometry<f64> {
        match self {
            Object::Point(point) => geo::Geometry::Point(geo::Point::new(point.x, point.y)),
            Object::Rect(rect) => geo::Geometry::Rect(geo::Rect::new(
                geo::coord! { x: rect.min.x, y: rect.min.y },
                geo::coord! { x: rect.max.x, y: rect.max.y },
            )),
            Object::LineString(line) => geo::Geometry::LineString(geo_line(line.points())),
            Object::Polygon(poly) => geo::Geometry::Polygon(geo_polygon(poly)),
            Object::MultiPoint(points) => geo::Geometry::MultiPoint(geo::MultiPoint(
                points.iter().map(|p| geo::Point::new(p.x, p.y)).collect(),
            )),
            Object::MultiLineString(lines) => geo::Geometry::MultiLineString(geo::MultiLineString(
                lines.iter().map(|l| geo_line(l.points())).collect(),
            )),
            Object::MultiPolygon(polys) => {
                geo::Geometry::MultiPolygon(geo::MultiPolygon(polys.iter().map(geo_polygon).collect()))
            }
            Object::GeometryCollection(objects) => geo::Geometry::GeometryCollection(
                geo::GeometryCollection(objects.iter().map(|o| o.to_geo()).collect()),
            ),
            Object::Feature(feature) => feature.geometry.to_geo(),
            Object::FeatureCollection(features) => geo::Geometry::GeometryCollection(
                geo::GeometryCollection(features.iter().map(|f| f.geometry.to_geo()).collect()),
            ),
        }
    }
}

impl From<geo::Geometry<f64>> for Object {
    fn from(geometry: geo::Geometry<f64>) -> Self {
        match geometry {
            geo::Geometry::Point(p) => Object::Point(Point::new(p.x(), p.y())),
            geo::Geometry::Line(l) => Object::LineString(Line::new(
                vec![Point::new(l.start.x, l.start.y), Point::new(l.end.x, l.end.y)],
                None,
            )),
            geo::Geometry::LineString(ls) => Object::LineString(Line::new(coords_to_points(&ls), None)),
            geo::Geometry::Polygon(p) => Object::Polygon(poly_from_geo(&p)),
            geo::Geometry::MultiPoint(mp) => {
                Object::MultiPoint(mp.0.iter().map(|p| Point::new(p.x(), p.y())).collect())
            }
            geo::Geometry::MultiLineString(mls) => Object::MultiLineString(
                mls.0.iter().map(|ls| Line::new(coords_to_points(ls), None)).collect(),
            ),
            geo::Geometry::MultiPolygon(mp) => Object::MultiPolygon(mp.0.iter().map(poly_from_geo).collect()),
            geo::Geometry::GeometryCollection(gc) => {
                Object::GeometryCollection(gc.0.into_iter().map(Object::from).collect())
            }
            geo::Geometry::Rect(r) => Object::Rect(Rect::new(r.min().x, r.min().y, r.max().x, r.max().y)),
            geo::Geometry::Triangle(t) => Object::Polygon(poly_from_geo(&t.to_polygon())),
        }
    }
}

fn from_feature(feature: geojson::Feature, opts: &IndexOptions) -> Result<Feature> {
    let Some(geometry) = feature.geometry else {
        return Err(SpatioError::Unsupported("feature without geometry".to_string()));
    };
    let id = feature.id.map(|id| match id {
        Id::String(s) => Value::String(s),
        Id::Number(n) => Value::Number(n),
    });
    Ok(Feature {
        geometry: from_geometry(geometry, opts)?,
        id,
        properties: feature.properties.unwrap_or_default(),
    })
}

fn to_feature(feature: &Feature) -> geojson::Feature {
    let id = feature.id.as_ref().and_then(|id| match id {
        Value::String(s) => Some(Id::String(s.clone())),
        Value::Number(n) => Some(Id::Number(n.clone())),
        other => {
            debug!(id = %other, "dropping feature id that is neither string nor number");
            None
        }
    });
    geojson::Feature {
        bbox: None,
        geometry: Some(feature.geometry.to_geometry()),
        id,
        properties: if feature.properties.is_empty() {
            None
        } else {
            Some(feature.properties.clone())
        },
        foreign_members: None,
    }
}

fn from_geometry(geometry: geojson::Geometry, opts: &IndexOptions) -> Result<Object> {
    match geometry.value {
        geojson::Value::Point(pos) => Ok(Object::Point(point(&pos)?)),
        geojson::Value::MultiPoint(list) => Ok(Object::MultiPoint(
            list.iter().map(point).collect::<Result<_>>()?,
        )),
        geojson::Value::LineString(list) => Ok(Object::LineString(line(&list, opts)?)),
        geojson::Value::MultiLineString(lines) => Ok(Object::MultiLineString(
            lines.iter().map(|list| line(list, opts)).collect::<Result<_>>()?,
        )),
        geojson::Value::Polygon(rings) => Ok(Object::Polygon(poly(&rings, opts)?)),
        geojson::Value::MultiPolygon(polys) => Ok(Object::MultiPolygon(
            polys.iter().map(|rings| poly(rings, opts)).collect::<Result<_>>()?,
        )),
        geojson::Value::GeometryCollection(geometries) => Ok(Object::GeometryCollection(
            geometries
                .into_iter()
                .map(|g| from_geometry(g, opts))
                .collect::<Result<_>>()?,
        )),
    }
}

fn point(pos: &Position) -> Result<Point> {
    if pos.len() < 2 {
        return Err(SpatioError::Unsupported(format!(
            "position needs at least 2 coordinates, got {}",
            pos.len()
        )));
    }
    Ok(Point::new(pos[0], pos[1]))
}

fn points(list: &[Position]) -> Result<Vec<Point>> {
    list.iter().map(point).collect()
}

fn line(list: &[Position], opts: &IndexOptions) -> Result<Line> {
    if list.len() < 2 {
        return Err(SpatioError::Unsupported(
            "line string needs at least 2 positions".to_string(),
        ));
    }
    Ok(Line::new(points(list)?, Some(opts)))
}

fn poly(rings: &[Vec<Position>], opts: &IndexOptions) -> Result<Poly> {
    let Some((exterior, holes)) = rings.split_first() else {
        return Err(SpatioError::Unsupported("polygon without rings".to_string()));
    };
    let exterior = linear_ring(exterior)?;
    let holes = holes.iter().map(|h| linear_ring(h)).collect::<Result<Vec<_>>>()?;
    Ok(Poly::new(exterior, holes, Some(opts)))
}

fn linear_ring(list: &[Position]) -> Result<Vec<Point>> {
    let ring = points(list)?;
    if ring.len() < 4 || ring.first() != ring.last() {
        return Err(SpatioError::Unsupported(
            "polygon ring needs at least 4 positions and must be closed".to_string(),
        ));
    }
    Ok(ring)
}

fn position(point: Point) -> Position {
    vec![point.x, point.y]
}

fn positions(list: &[Point]) -> Vec<Position> {
    list.iter().map(|p| position(*p)).collect()
}

fn rect_positions(rect: &Rect) -> Vec<Position> {
    (0..rect.num_points()).map(|i| position(rect.point_at(i))).collect()
}

fn poly_positions(poly: &Poly) -> Vec<Vec<Position>> {
    std::iter::once(&poly.exterior)
        .chain(poly.holes.iter())
        .map(|ring| positions(ring.points()))
        .collect()
}

fn geo_line(list: &[Point]) -> geo::LineString<f64> {
    geo::LineString::new(list.iter().map(|p| geo::coord! { x: p.x, y: p.y }).collect())
}

fn geo_polygon(poly: &Poly) -> geo::Polygon<f64> {
    geo::Polygon::new(
        geo_line(poly.exterior.points()),
        poly.holes.iter().map(|h| geo_line(h.points())).collect(),
    )
}

fn coords_to_points(ls: &geo::LineString<f64>) -> Vec<Point> {
    ls.0.iter().map(|c| Point::new(c.x, c.y)).collect()
}

fn poly_from_geo(polygon: &geo::Polygon<f64>) -> Poly {
    Poly::new(
        coords_to_points(polygon.exterior()),
        polygon.interiors().iter().map(coords_to_points).collect(),
        None,
    )
}
