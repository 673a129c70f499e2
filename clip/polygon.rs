use super::clip_ring;
use crate::geometry::{Geometry, IndexOptions, Point, Poly, Rect};
use crate::object::Object;

/// 裁剪多边形
///
/// 外环和每个洞分别做环裁剪，丢掉裁剪后为空的环。剩下的第一个环作为
/// 新外环，其余作为洞。结果为空时返回空的 MultiPolygon。
pub fn clip_polygon(poly: &Poly, window: Rect, opts: &IndexOptions) -> Object {
    let mut rings: Vec<Vec<Point>> = std::iter::once(&poly.exterior)
        .chain(poly.holes.iter())
        .map(|ring| clip_ring(ring.points(), window))
        .filter(|points| !points.is_empty())
        .collect();
    if rings.is_empty() {
        return Object::MultiPolygon(Vec::new());
    }
    let exterior = rings.remove(0);
    let clipped = Poly::new(exterior, rings, Some(opts));
    if clipped.empty() {
        return Object::MultiPolygon(Vec::new());
    }
    Object::Polygon(clipped)
}

/// 矩形先转成五个点的多边形再裁剪
pub fn clip_rect(rect: Rect, window: Rect, opts: &IndexOptions) -> Object {
    let points = (0..rect.num_points()).map(|i| rect.point_at(i)).collect();
    let poly = Poly::new(points, Vec::new(), Some(opts));
    clip_polygon(&poly, window, opts)
}
