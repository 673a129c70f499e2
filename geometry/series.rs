use serde::{Deserialize, Serialize};

use super::{Geometry, Point, Rect, Segment};
use crate::rtree::RTree;

/// 段索引的类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexKind {
    /// 不建索引，线性扫描
    None,
    /// 用 R-tree 索引所有段的边界框
    #[default]
    RTree,
}

/// 构造线和多边形时的加速提示
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexOptions {
    pub kind: IndexKind,
    /// 段数不少于该值时才建索引
    pub min_points: usize,
}

impl Default for IndexOptions {
    fn default() -> Self {
        IndexOptions {
            kind: IndexKind::RTree,
            min_points: 64,
        }
    }
}

impl IndexOptions {
    /// 不建索引
    pub fn none() -> Self {
        IndexOptions {
            kind: IndexKind::None,
            min_points: 0,
        }
    }
}

/// 点序列，环和折线的公共存储
///
/// 边界框、凹凸性、方向以及段索引在构造时一次性计算，之后不再变化。
/// 闭合序列首尾可以相同也可以不同，不同时最后一条段自动回到起点。
#[derive(Debug, Clone)]
pub struct BaseSeries {
    points: Vec<Point>,
    closed: bool,
    rect: Rect,
    convex: bool,
    clockwise: bool,
    options: IndexOptions,
    index: Option<RTree<usize>>,
}

/// 闭合的点序列
pub type Ring = BaseSeries;

impl BaseSeries {
    /// 创建序列，`opts` 为 `None` 时使用默认索引选项
    pub fn new(points: Vec<Point>, closed: bool, opts: Option<&IndexOptions>) -> Self {
        let options = opts.copied().unwrap_or_default();
        let rect = points_rect(&points);
        let (convex, clockwise) = if closed {
            (points_convex(&points), points_clockwise(&points))
        } else {
            (false, false)
        };
        let mut series = BaseSeries {
            points,
            closed,
            rect,
            convex,
            clockwise,
            options,
            index: None,
        };
        series.build_index();
        series
    }

    fn build_index(&mut self) {
        let num_segments = self.num_segments();
        if self.options.kind != IndexKind::RTree || num_segments == 0 || num_segments < self.options.min_points {
            return;
        }
        let mut tree = RTree::new();
        tree.load((0..num_segments).map(|i| {
            let rect = self.segment_at(i).rect();
            (rect.min.into(), rect.max.into(), i)
        }));
        self.index = Some(tree);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn closed(&self) -> bool {
        self.closed
    }

    pub fn convex(&self) -> bool {
        self.convex
    }

    pub fn clockwise(&self) -> bool {
        self.clockwise
    }

    /// 是否建立了段索引
    pub fn indexed(&self) -> bool {
        self.index.is_some()
    }

    pub fn index_options(&self) -> &IndexOptions {
        &self.options
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// 闭合序列少于 3 个点、开放序列少于 2 个点时为空
    pub fn empty(&self) -> bool {
        (self.closed && self.points.len() < 3) || self.points.len() < 2
    }

    pub fn valid(&self) -> bool {
        self.points.iter().all(|p| p.valid())
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    pub fn point_at(&self, index: usize) -> Point {
        self.points[index]
    }

    pub fn num_segments(&self) -> usize {
        let len = self.points.len();
        if self.closed {
            if len < 3 {
                0
            } else if self.points[len - 1] == self.points[0] {
                len - 1
            } else {
                len
            }
        } else if len < 2 {
            0
        } else {
            len - 1
        }
    }

    /// 第 `index` 段，闭合序列的最后一段回到起点
    pub fn segment_at(&self, index: usize) -> Segment {
        let a = self.points[index];
        let b = if index == self.points.len() - 1 {
            self.points[0]
        } else {
            self.points[index + 1]
        };
        Segment::new(a, b)
    }

    /// 遍历边界框与 `target` 相交的段，`iter` 返回 `false` 时停止
    pub fn search<F>(&self, target: Rect, mut iter: F)
    where
        F: FnMut(Segment, usize) -> bool,
    {
        match &self.index {
            Some(index) => {
                index.search(target.min.into(), target.max.into(), |_, _, &i| {
                    iter(self.segment_at(i), i)
                });
            }
            None => {
                for i in 0..self.num_segments() {
                    let seg = self.segment_at(i);
                    if seg.rect().intersects_rect(target) && !iter(seg, i) {
                        return;
                    }
                }
            }
        }
    }

    /// 平移，沿用原来的索引选项
    pub fn move_by(&self, delta_x: f64, delta_y: f64) -> BaseSeries {
        let points = self
            .points
            .iter()
            .map(|p| p.move_by(delta_x, delta_y))
            .collect();
        BaseSeries::new(points, self.closed, Some(&self.options))
    }
}

impl PartialEq for BaseSeries {
    fn eq(&self, other: &Self) -> bool {
        self.closed == other.closed && self.points == other.points
    }
}

fn points_rect(points: &[Point]) -> Rect {
    let Some(first) = points.first() else {
        return Rect::default();
    };
    let mut rect = first.rect();
    for p in &points[1..] {
        rect.min.x = rect.min.x.min(p.x);
        rect.min.y = rect.min.y.min(p.y);
        rect.max.x = rect.max.x.max(p.x);
        rect.max.y = rect.max.y.max(p.y);
    }
    rect
}

/// 有向面积和为正即顺时针
fn points_clockwise(points: &[Point]) -> bool {
    let n = points.len();
    let mut sum = 0.0;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        sum += (b.x - a.x) * (b.y + a.y);
    }
    sum > 0.0
}

/// 相邻两条边的转向始终一致即为凸
fn points_convex(points: &[Point]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let mut dir = 0;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        let c = points[(i + 2) % n];
        let z = (b.x - a.x) * (c.y - b.y) - (b.y - a.y) * (c.x - b.x);
        if z == 0.0 {
            continue;
        }
        let d = if z > 0.0 { 1 } else { -1 };
        if dir == 0 {
            dir = d;
        } else if dir != d {
            return false;
        }
    }
    dir != 0
}
