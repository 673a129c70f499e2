use super::ring::{
    ring_contains_line, ring_contains_point, ring_contains_ring, ring_intersects_line,
    ring_intersects_ring,
};
use super::series::{BaseSeries, IndexOptions, Ring};
use super::{Geometry, Line, Point, Rect};

/// 带洞多边形
///
/// 点在外环内且不在任何洞内才算被包含；洞的边界属于多边形。
#[derive(Debug, Clone, PartialEq)]
pub struct Poly {
    pub exterior: Ring,
    pub holes: Vec<Ring>,
}

impl Poly {
    /// 从点序列创建，外环和洞共用同一套索引选项
    pub fn new(exterior: Vec<Point>, holes: Vec<Vec<Point>>, opts: Option<&IndexOptions>) -> Self {
        Poly {
            exterior: BaseSeries::new(exterior, true, opts),
            holes: holes
                .into_iter()
                .map(|hole| BaseSeries::new(hole, true, opts))
                .collect(),
        }
    }

    /// 从已经构造好的环创建
    pub fn from_rings(exterior: Ring, holes: Vec<Ring>) -> Self {
        Poly { exterior, holes }
    }

    pub fn clockwise(&self) -> bool {
        self.exterior.clockwise()
    }

    /// 平移
    pub fn move_by(&self, delta_x: f64, delta_y: f64) -> Poly {
        Poly {
            exterior: self.exterior.move_by(delta_x, delta_y),
            holes: self
                .holes
                .iter()
                .map(|hole| hole.move_by(delta_x, delta_y))
                .collect(),
        }
    }
}

impl Geometry for Poly {
    fn rect(&self) -> Rect {
        self.exterior.rect()
    }

    fn empty(&self) -> bool {
        self.exterior.empty()
    }

    fn valid(&self) -> bool {
        self.exterior.valid() && self.holes.iter().all(|hole| hole.valid())
    }

    fn contains_point(&self, point: Point) -> bool {
        if !ring_contains_point(&self.exterior, point, true).hit {
            return false;
        }
        !self
            .holes
            .iter()
            .any(|hole| ring_contains_point(hole, point, false).hit)
    }

    fn intersects_point(&self, point: Point) -> bool {
        self.contains_point(point)
    }

    fn contains_rect(&self, rect: Rect) -> bool {
        self.contains_poly(&rect.to_poly())
    }

    fn intersects_rect(&self, rect: Rect) -> bool {
        self.intersects_poly(&rect.to_poly())
    }

    fn contains_line(&self, line: &Line) -> bool {
        if !ring_contains_line(&self.exterior, line, true) {
            return false;
        }
        !self
            .holes
            .iter()
            .any(|hole| ring_intersects_line(hole, line, false))
    }

    // 只检查外环，洞不参与
    fn intersects_line(&self, line: &Line) -> bool {
        ring_intersects_line(&self.exterior, line, true)
    }

    fn contains_poly(&self, other: &Poly) -> bool {
        // 外环必须完整包含对方外环
        if !ring_contains_ring(&self.exterior, &other.exterior, true) {
            return false;
        }
        // 对方外环不能伸进本方的洞，除非这个洞被对方的某个洞整个吞掉
        self.holes.iter().all(|hole| {
            !ring_intersects_ring(hole, &other.exterior, false)
                || other
                    .holes
                    .iter()
                    .any(|other_hole| ring_contains_ring(other_hole, hole, true))
        })
    }

    fn intersects_poly(&self, other: &Poly) -> bool {
        if !ring_intersects_ring(&other.exterior, &self.exterior, true) {
            return false;
        }
        if self
            .holes
            .iter()
            .any(|hole| ring_contains_ring(hole, &other.exterior, false))
        {
            return false;
        }
        !other
            .holes
            .iter()
            .any(|hole| ring_contains_ring(hole, &self.exterior, false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(min: f64, max: f64) -> Vec<Point> {
        vec![
            Point::new(min, min),
            Point::new(max, min),
            Point::new(max, max),
            Point::new(min, max),
            Point::new(min, min),
        ]
    }

    fn two_holes() -> Poly {
        Poly::new(square(0.0, 10.0), vec![square(1.0, 3.0), square(6.0, 8.0)], None)
    }

    #[test]
    fn test_poly_contains_point_with_holes() {
        let poly = two_holes();
        assert!(poly.contains_point(Point::new(5.0, 5.0)));
        assert!(!poly.contains_point(Point::new(2.0, 2.0)));
        assert!(!poly.contains_point(Point::new(7.0, 7.0)));
        // 洞的边界和外环边界都算在内
        assert!(poly.contains_point(Point::new(1.0, 2.0)));
        assert!(poly.contains_point(Point::new(0.0, 5.0)));
        assert!(!poly.contains_point(Point::new(11.0, 5.0)));
    }

    #[test]
    fn test_poly_contains_poly_hole_swallowed() {
        let poly = two_holes();
        let plain = Poly::new(vec![
            Point::new(0.5, 0.5),
            Point::new(9.0, 0.5),
            Point::new(9.0, 9.0),
            Point::new(0.5, 9.0),
            Point::new(0.5, 0.5),
        ], Vec::new(), None);
        assert!(!poly.contains_poly(&plain));

        // 对方的洞吞掉了本方的两个洞
        let holed = Poly::new(
            plain.exterior.points().to_vec(),
            vec![square(0.8, 3.5), square(5.5, 8.5)],
            None,
        );
        assert!(poly.contains_poly(&holed));

        // 只吞掉一个不够
        let half = Poly::new(plain.exterior.points().to_vec(), vec![square(0.8, 3.5)], None);
        assert!(!poly.contains_poly(&half));
    }

    #[test]
    fn test_poly_intersects_poly_in_hole() {
        let poly = two_holes();
        let inside_hole = Rect::new(1.5, 1.5, 2.5, 2.5).to_poly();
        assert!(!poly.intersects_poly(&inside_hole));
        assert!(!inside_hole.intersects_poly(&poly));
        assert!(!poly.intersects_rect(Rect::new(6.5, 6.5, 7.5, 7.5)));

        let straddling = Rect::new(2.0, 2.0, 5.0, 5.0).to_poly();
        assert!(poly.intersects_poly(&straddling));
        assert!(straddling.intersects_poly(&poly));
        assert!(!poly.contains_poly(&straddling));
    }

    #[test]
    fn test_poly_lines() {
        let poly = two_holes();
        let clear = Line::new(vec![Point::new(4.0, 1.0), Point::new(4.0, 9.0)], None);
        let through_hole = Line::new(vec![Point::new(0.5, 2.0), Point::new(5.0, 2.0)], None);
        let along_hole = Line::new(vec![Point::new(1.0, 1.0), Point::new(3.0, 1.0)], None);
        assert!(poly.contains_line(&clear));
        assert!(!poly.contains_line(&through_hole));
        assert!(poly.contains_line(&along_hole));
        assert!(poly.intersects_line(&through_hole));
    }

    #[test]
    fn test_poly_intersects_line_ignores_holes() {
        // 相交只看外环：整条落在洞里的线仍算相交，但不被包含
        let poly = two_holes();
        let in_hole = Line::new(vec![Point::new(1.5, 1.5), Point::new(2.5, 2.5)], None);
        assert!(poly.intersects_line(&in_hole));
        assert!(!poly.contains_line(&in_hole));

        let outside = Line::new(vec![Point::new(11.0, 1.0), Point::new(12.0, 2.0)], None);
        assert!(!poly.intersects_line(&outside));
    }

    #[test]
    fn test_poly_rect_and_move() {
        let poly = Poly::new(square(0.0, 10.0), Vec::new(), None);
        assert!(poly.contains_rect(Rect::new(0.0, 0.0, 10.0, 10.0)));
        assert!(poly.intersects_rect(Rect::new(10.0, 10.0, 20.0, 20.0)));
        assert!(!poly.clockwise());
        let moved = poly.move_by(5.0, 5.0);
        assert_eq!(moved.rect(), Rect::new(5.0, 5.0, 15.0, 15.0));
        assert!(Poly::new(Vec::new(), Vec::new(), None).empty());
    }
}
