use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::{Geometry, Line, Poly, Rect};

/// 地球平均半径（米）
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// 二维点，相等比较为精确浮点比较
#[derive(Debug, Display, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[display(fmt = "({} {})", x, y)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// 平移
    pub fn move_by(&self, delta_x: f64, delta_y: f64) -> Point {
        Point::new(self.x + delta_x, self.y + delta_y)
    }

    /// 以经纬度解释两点，返回大圆距离（米）
    pub fn haversine_to(&self, other: &Point) -> f64 {
        haversine_distance(self.x, self.y, other.x, other.y)
    }
}

impl From<[f64; 2]> for Point {
    fn from(xy: [f64; 2]) -> Self {
        Point::new(xy[0], xy[1])
    }
}

impl From<Point> for [f64; 2] {
    fn from(point: Point) -> Self {
        [point.x, point.y]
    }
}

/// Haversine 大圆距离
///
/// * `lon1`, `lat1` - 第一个点（经度、纬度，单位度）
/// * `lon2`, `lat2` - 第二个点
///
/// 返回米。
pub fn haversine_distance(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METERS * c
}

impl Geometry for Point {
    fn rect(&self) -> Rect {
        Rect {
            min: *self,
            max: *self,
        }
    }

    fn empty(&self) -> bool {
        false
    }

    /// 经度在 [-180, 180]、纬度在 [-90, 90] 内
    fn valid(&self) -> bool {
        self.x >= -180.0 && self.x <= 180.0 && self.y >= -90.0 && self.y <= 90.0
    }

    fn contains_point(&self, point: Point) -> bool {
        *self == point
    }

    fn intersects_point(&self, point: Point) -> bool {
        *self == point
    }

    fn contains_rect(&self, rect: Rect) -> bool {
        self.rect() == rect
    }

    fn intersects_rect(&self, rect: Rect) -> bool {
        rect.contains_point(*self)
    }

    fn contains_line(&self, line: &Line) -> bool {
        !line.empty() && line.rect() == self.rect()
    }

    fn intersects_line(&self, line: &Line) -> bool {
        line.intersects_point(*self)
    }

    fn contains_poly(&self, poly: &Poly) -> bool {
        !poly.empty() && poly.rect() == self.rect()
    }

    fn intersects_poly(&self, poly: &Poly) -> bool {
        poly.intersects_point(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_valid() {
        assert!(Point::new(-180.0, 90.0).valid());
        assert!(!Point::new(180.1, 0.0).valid());
        assert!(!Point::new(0.0, -90.5).valid());
    }

    #[test]
    fn test_point_predicates() {
        let p = Point::new(1.0, 2.0);
        assert!(p.contains_point(Point::new(1.0, 2.0)));
        assert!(!p.contains_point(Point::new(1.0, 2.0000001)));
        assert!(p.intersects_rect(Rect::new(0.0, 0.0, 1.0, 2.0)));
        assert!(p.contains_rect(Rect::new(1.0, 2.0, 1.0, 2.0)));
        assert!(!p.contains_rect(Rect::new(0.0, 0.0, 1.0, 2.0)));
        assert_eq!(p.move_by(1.0, -1.0), Point::new(2.0, 1.0));
        assert_eq!(p.to_string(), "(1 2)");
    }

    #[test]
    fn test_haversine() {
        // 赤道上经度相差一度约 111.19 公里
        let d = Point::new(0.0, 0.0).haversine_to(&Point::new(1.0, 0.0));
        assert!((d - 111_194.93).abs() < 1.0, "{}", d);
        assert_eq!(Point::new(5.0, 5.0).haversine_to(&Point::new(5.0, 5.0)), 0.0);
    }
}
