use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::{Geometry, Point, Rect};

/// 有向线段 A → B
#[derive(Debug, Display, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[display(fmt = "{}-{}", a, b)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    pub fn new(a: Point, b: Point) -> Self {
        Segment { a, b }
    }

    /// 平移
    pub fn move_by(&self, delta_x: f64, delta_y: f64) -> Segment {
        Segment::new(self.a.move_by(delta_x, delta_y), self.b.move_by(delta_x, delta_y))
    }

    /// 两个端点重排成 min/max
    pub fn rect(&self) -> Rect {
        let mut rect = Rect {
            min: self.a,
            max: self.b,
        };
        if rect.min.x > rect.max.x {
            std::mem::swap(&mut rect.min.x, &mut rect.max.x);
        }
        if rect.min.y > rect.max.y {
            std::mem::swap(&mut rect.min.y, &mut rect.max.y);
        }
        rect
    }

    /// 点是否在线段所在直线上
    pub fn collinear_point(&self, point: Point) -> bool {
        cross(self.a, self.b, point) == 0.0
    }

    /// 点是否落在线段上（含端点）
    pub fn contains_point(&self, point: Point) -> bool {
        self.raycast(point).on
    }

    /// 另一条线段是否整个落在本线段上
    pub fn contains_segment(&self, other: Segment) -> bool {
        self.raycast(other.a).on && self.raycast(other.b).on
    }

    /// 两条线段是否有公共点（接触、共线重叠都算）
    pub fn intersects_segment(&self, other: Segment) -> bool {
        let (a, b, c, d) = (self.a, self.b, other.a, other.b);

        // 包围盒先行排除
        if !self.rect().intersects_rect(other.rect()) {
            return false;
        }
        if a == c || a == d || b == c || b == d {
            return true;
        }

        let (cmpx, cmpy) = (c.x - a.x, c.y - a.y);
        let (rx, ry) = (b.x - a.x, b.y - a.y);
        let cmpxr = cmpx * ry - cmpy * rx;
        if cmpxr == 0.0 {
            // 共线：有重叠才相交
            if !(((c.x - a.x <= 0.0) != (c.x - b.x <= 0.0))
                || ((c.y - a.y <= 0.0) != (c.y - b.y <= 0.0)))
            {
                return self.raycast(other.a).on || self.raycast(other.b).on;
            }
            return true;
        }

        let (sx, sy) = (d.x - c.x, d.y - c.y);
        let cmpxs = cmpx * sy - cmpy * sx;
        let rxs = rx * sy - ry * sx;
        if rxs == 0.0 {
            // 平行
            return false;
        }
        let rxsr = 1.0 / rxs;
        let t = cmpxs * rxsr;
        let u = cmpxr * rxsr;
        (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u)
    }

    /// 两条线段在各自内部严格穿越（不含接触和共线）
    pub fn crosses_segment(&self, other: Segment) -> bool {
        let o1 = cross(self.a, self.b, other.a);
        let o2 = cross(self.a, self.b, other.b);
        let o3 = cross(other.a, other.b, self.a);
        let o4 = cross(other.a, other.b, self.b);
        ((o1 > 0.0 && o2 < 0.0) || (o1 < 0.0 && o2 > 0.0))
            && ((o3 > 0.0 && o4 < 0.0) || (o3 < 0.0 && o4 > 0.0))
    }

    /// 线段上参数 t 处的点，t ∈ [0, 1]
    pub fn point_at(&self, t: f64) -> Point {
        Point::new(
            self.a.x + (self.b.x - self.a.x) * t,
            self.a.y + (self.b.y - self.a.y) * t,
        )
    }

    /// 线段上一点对应的参数 t，沿跨度较大的轴计算
    pub fn param_of(&self, point: Point) -> f64 {
        let (dx, dy) = (self.b.x - self.a.x, self.b.y - self.a.y);
        if dx.abs() >= dy.abs() {
            if dx == 0.0 {
                0.0
            } else {
                (point.x - self.a.x) / dx
            }
        } else {
            (point.y - self.a.y) / dy
        }
    }
}

/// (b - a) × (p - a) 的 z 分量
fn cross(a: Point, b: Point, p: Point) -> f64 {
    (p.x - a.x) * (b.y - a.y) - (p.y - a.y) * (b.x - a.x)
}
