// 几何模块
// 包含点、矩形、线段、折线、多边形以及基于射线法的空间谓词

pub mod line;
pub mod point;
pub mod poly;
pub mod raycast;
pub mod rect;
pub mod ring;
pub mod segment;
pub mod series;

pub use line::Line;
pub use point::{haversine_distance, Point, EARTH_RADIUS_METERS};
pub use poly::Poly;
pub use raycast::RaycastResult;
pub use rect::Rect;
pub use ring::RingResult;
pub use segment::Segment;
pub use series::{BaseSeries, IndexKind, IndexOptions, Ring};

/// 所有基础几何类型共有的谓词
///
/// 比较一律使用精确的浮点比较，不引入容差。
pub trait Geometry {
    /// 边界框
    fn rect(&self) -> Rect;
    fn empty(&self) -> bool;
    /// 所有坐标都落在经纬度范围内
    fn valid(&self) -> bool;
    fn contains_point(&self, point: Point) -> bool;
    fn intersects_point(&self, point: Point) -> bool;
    fn contains_rect(&self, rect: Rect) -> bool;
    fn intersects_rect(&self, rect: Rect) -> bool;
    fn contains_line(&self, line: &Line) -> bool;
    fn intersects_line(&self, line: &Line) -> bool;
    fn contains_poly(&self, poly: &Poly) -> bool;
    fn intersects_poly(&self, poly: &Poly) -> bool;
}

/// 覆盖全部合法经纬度的多边形
pub fn world_polygon() -> Poly {
    Poly::new(
        vec![
            Point::new(-180.0, -90.0),
            Point::new(-180.0, 90.0),
            Point::new(180.0, 90.0),
            Point::new(180.0, -90.0),
            Point::new(-180.0, -90.0),
        ],
        Vec::new(),
        Some(&IndexOptions::none()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_polygon() {
        let world = world_polygon();
        assert!(world.contains_point(Point::new(0.0, 0.0)));
        assert!(world.contains_point(Point::new(180.0, 90.0)));
        assert!(!world.contains_point(Point::new(180.5, 0.0)));
        assert!(world.clockwise());
        assert_eq!(world.rect(), Rect::new(-180.0, -90.0, 180.0, 90.0));
    }
}
