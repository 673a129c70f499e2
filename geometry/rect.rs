use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::ring::ring_intersects_line;
use super::series::BaseSeries;
use super::{Geometry, Line, Point, Poly, Segment};
use crate::rtree::Rectangle;

/// 轴对齐矩形，调用方保证 min <= max
///
/// 作为环使用时按 (min.x,min.y) → (max.x,min.y) → (max.x,max.y) → (min.x,max.y)
/// 的顺序给出 5 个点、4 条边，点和边都按需生成。
#[derive(Debug, Display, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[display(fmt = "[{} {}]", min, max)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    /// 创建新的矩形
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Rect {
            min: Point::new(min_x, min_y),
            max: Point::new(max_x, max_y),
        }
    }

    /// 平移
    pub fn move_by(&self, delta_x: f64, delta_y: f64) -> Rect {
        Rect {
            min: self.min.move_by(delta_x, delta_y),
            max: self.max.move_by(delta_x, delta_y),
        }
    }

    /// 计算矩形中心点
    pub fn center(&self) -> Point {
        Point::new(
            (self.max.x + self.min.x) / 2.0,
            (self.max.y + self.min.y) / 2.0,
        )
    }

    /// 计算矩形面积
    pub fn area(&self) -> f64 {
        (self.max.x - self.min.x) * (self.max.y - self.min.y)
    }

    /// 扩展以包含另一个矩形
    pub fn union(&self, other: &Rect) -> Rect {
        Rect::new(
            self.min.x.min(other.min.x),
            self.min.y.min(other.min.y),
            self.max.x.max(other.max.x),
            self.max.y.max(other.max.y),
        )
    }

    pub fn num_points(&self) -> usize {
        5
    }

    pub fn num_segments(&self) -> usize {
        4
    }

    /// 第 `index` 个环点，`index` 必须小于 5
    pub fn point_at(&self, index: usize) -> Point {
        match index {
            0 | 4 => Point::new(self.min.x, self.min.y),
            1 => Point::new(self.max.x, self.min.y),
            2 => Point::new(self.max.x, self.max.y),
            3 => Point::new(self.min.x, self.max.y),
            _ => panic!("rect point index {} out of range", index),
        }
    }

    /// 第 `index` 条边，`index` 必须小于 4
    pub fn segment_at(&self, index: usize) -> Segment {
        assert!(index < 4, "rect segment index {} out of range", index);
        Segment::new(self.point_at(index), self.point_at(index + 1))
    }

    /// 遍历与 `target` 相交的边
    pub fn search<F>(&self, target: Rect, mut iter: F)
    where
        F: FnMut(Segment, usize) -> bool,
    {
        for index in 0..4 {
            let seg = self.segment_at(index);
            if seg.rect().intersects_rect(target) && !iter(seg, index) {
                break;
            }
        }
    }

    /// 矩形总是凸的
    pub fn convex(&self) -> bool {
        true
    }

    /// 转成闭合环（逆时针，5 个点）
    pub fn to_ring(&self) -> BaseSeries {
        let points = (0..5).map(|i| self.point_at(i)).collect();
        BaseSeries::new(points, true, None)
    }

    /// 转成单环多边形
    pub fn to_poly(&self) -> Poly {
        Poly::from_rings(self.to_ring(), Vec::new())
    }
}

impl From<Rect> for Rectangle {
    fn from(rect: Rect) -> Self {
        Rectangle::new(rect.min.x, rect.min.y, rect.max.x, rect.max.y)
    }
}

impl From<Rectangle> for Rect {
    fn from(rect: Rectangle) -> Self {
        Rect::new(rect.min[0], rect.min[1], rect.max[0], rect.max[1])
    }
}

impl Geometry for Rect {
    fn rect(&self) -> Rect {
        *self
    }

    fn empty(&self) -> bool {
        false
    }

    fn valid(&self) -> bool {
        self.min.valid() && self.max.valid()
    }

    fn contains_point(&self, point: Point) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }

    fn intersects_point(&self, point: Point) -> bool {
        self.contains_point(point)
    }

    fn contains_rect(&self, other: Rect) -> bool {
        !(other.min.x < self.min.x
            || other.max.x > self.max.x
            || other.min.y < self.min.y
            || other.max.y > self.max.y)
    }

    fn intersects_rect(&self, other: Rect) -> bool {
        !(self.min.y > other.max.y
            || self.max.y < other.min.y
            || self.min.x > other.max.x
            || self.max.x < other.min.x)
    }

    fn contains_line(&self, line: &Line) -> bool {
        !line.empty() && self.contains_rect(line.rect())
    }

    fn intersects_line(&self, line: &Line) -> bool {
        ring_intersects_line(&self.to_ring(), line, true)
    }

    fn contains_poly(&self, poly: &Poly) -> bool {
        !poly.empty() && self.contains_rect(poly.rect())
    }

    fn intersects_poly(&self, poly: &Poly) -> bool {
        poly.intersects_rect(*self)
    }
}
