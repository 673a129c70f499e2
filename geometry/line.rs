use super::series::{BaseSeries, IndexOptions};
use super::{Geometry, Point, Poly, Rect, Segment};

/// 折线（开放的点序列）
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    series: BaseSeries,
}

impl Line {
    /// 创建折线，`opts` 控制是否为段建立索引
    pub fn new(points: Vec<Point>, opts: Option<&IndexOptions>) -> Self {
        Line {
            series: BaseSeries::new(points, false, opts),
        }
    }

    pub fn series(&self) -> &BaseSeries {
        &self.series
    }

    pub fn points(&self) -> &[Point] {
        self.series.points()
    }

    pub fn num_points(&self) -> usize {
        self.series.num_points()
    }

    pub fn point_at(&self, index: usize) -> Point {
        self.series.point_at(index)
    }

    pub fn num_segments(&self) -> usize {
        self.series.num_segments()
    }

    pub fn segment_at(&self, index: usize) -> Segment {
        self.series.segment_at(index)
    }

    pub fn search<F>(&self, target: Rect, iter: F)
    where
        F: FnMut(Segment, usize) -> bool,
    {
        self.series.search(target, iter)
    }

    /// 平移
    pub fn move_by(&self, delta_x: f64, delta_y: f64) -> Line {
        Line {
            series: self.series.move_by(delta_x, delta_y),
        }
    }

    /// 某条段是否落在本折线的某一段上
    fn contains_segment(&self, seg: Segment) -> bool {
        let mut contains = false;
        self.search(seg.rect(), |own, _| {
            if own.contains_segment(seg) {
                contains = true;
                return false;
            }
            true
        });
        contains
    }
}

impl Geometry for Line {
    fn rect(&self) -> Rect {
        self.series.rect()
    }

    fn empty(&self) -> bool {
        self.series.empty()
    }

    fn valid(&self) -> bool {
        self.series.valid()
    }

    fn contains_point(&self, point: Point) -> bool {
        let mut contains = false;
        self.search(point.rect(), |seg, _| {
            if seg.raycast(point).on {
                contains = true;
                return false;
            }
            true
        });
        contains
    }

    fn intersects_point(&self, point: Point) -> bool {
        self.contains_point(point)
    }

    fn contains_rect(&self, rect: Rect) -> bool {
        self.contains_poly(&rect.to_poly())
    }

    fn intersects_rect(&self, rect: Rect) -> bool {
        rect.intersects_line(self)
    }

    /// 另一条折线的每一段都要落在本折线的某一段上
    fn contains_line(&self, other: &Line) -> bool {
        if self.empty() || other.num_points() == 0 {
            return false;
        }
        if other.num_segments() == 0 {
            return self.contains_point(other.point_at(0));
        }
        (0..other.num_segments()).all(|i| self.contains_segment(other.segment_at(i)))
    }

    fn intersects_line(&self, other: &Line) -> bool {
        if self.empty() || other.empty() {
            return false;
        }
        if !self.rect().intersects_rect(other.rect()) {
            return false;
        }
        // 遍历点数较少的一条
        let (small, large) = if self.num_points() > other.num_points() {
            (other, self)
        } else {
            (self, other)
        };
        (0..small.num_segments()).any(|i| {
            let seg = small.segment_at(i);
            let mut hit = false;
            large.search(seg.rect(), |other_seg, _| {
                if seg.intersects_segment(other_seg) {
                    hit = true;
                    return false;
                }
                true
            });
            hit
        })
    }

    /// 只有退化成水平或竖直线段的多边形才可能被折线包含
    fn contains_poly(&self, poly: &Poly) -> bool {
        if self.empty() || poly.empty() {
            return false;
        }
        let rect = poly.rect();
        if rect.min.x != rect.max.x && rect.min.y != rect.max.y {
            return false;
        }
        let flat = Line::new(vec![rect.min, rect.max], None);
        self.contains_line(&flat)
    }

    fn intersects_poly(&self, poly: &Poly) -> bool {
        poly.intersects_line(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(coords: &[(f64, f64)]) -> Line {
        Line::new(coords.iter().map(|&(x, y)| Point::new(x, y)).collect(), None)
    }

    fn u1() -> Line {
        line(&[(0.0, 10.0), (0.0, 0.0), (10.0, 0.0), (10.0, 10.0)])
    }

    fn v1() -> Line {
        line(&[(0.0, 10.0), (5.0, 0.0), (10.0, 10.0)])
    }

    #[test]
    fn test_line_contains_point() {
        let u = u1();
        assert!(u.contains_point(Point::new(0.0, 5.0)));
        assert!(u.contains_point(Point::new(10.0, 0.0)));
        assert!(!u.contains_point(Point::new(5.0, 5.0)));
        assert!(v1().contains_point(Point::new(2.5, 5.0)));
    }

    #[test]
    fn test_line_contains_line() {
        let u = u1();
        assert!(u.contains_line(&line(&[(0.0, 8.0), (0.0, 2.0)])));
        assert!(u.contains_line(&line(&[(0.0, 1.0), (0.0, 0.0), (5.0, 0.0)])));
        assert!(!u.contains_line(&line(&[(0.0, 1.0), (1.0, 1.0)])));
        assert!(u.contains_line(&u));
        assert!(!u.contains_line(&line(&[])));
    }

    #[test]
    fn test_line_contains_single_point_line() {
        // 只有一个点的折线按点处理
        let u = u1();
        assert!(u.contains_line(&line(&[(0.0, 5.0)])));
        assert!(u.contains_line(&line(&[(10.0, 0.0)])));
        assert!(!u.contains_line(&line(&[(5.0, 5.0)])));
    }

    #[test]
    fn test_line_intersects_line() {
        let u = u1();
        let v = v1();
        assert!(u.intersects_line(&v));
        assert!(v.intersects_line(&u));
        assert!(!u.intersects_line(&line(&[(2.0, 2.0), (8.0, 8.0)])));
        assert!(u.intersects_line(&line(&[(5.0, 5.0), (5.0, -5.0)])));
    }

    #[test]
    fn test_line_rect_and_poly() {
        let u = u1();
        assert!(u.intersects_rect(Rect::new(-1.0, 4.0, 1.0, 6.0)));
        assert!(!u.intersects_rect(Rect::new(2.0, 2.0, 8.0, 8.0)));
        // 退化矩形
        assert!(u.contains_rect(Rect::new(2.0, 0.0, 8.0, 0.0)));
        assert!(!u.contains_rect(Rect::new(2.0, 0.0, 8.0, 1.0)));
    }

    #[test]
    fn test_line_move() {
        let moved = u1().move_by(1.0, -1.0);
        assert_eq!(moved.rect(), Rect::new(1.0, -1.0, 11.0, 9.0));
        assert_eq!(moved.point_at(0), Point::new(1.0, 9.0));
    }
}
