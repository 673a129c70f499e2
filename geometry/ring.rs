use super::series::BaseSeries;
use super::{Geometry, Line, Point, Rect, Segment};

/// 点与环的判定结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingResult {
    /// 点在环内
    pub hit: bool,
    /// 点恰好落在边上时，对应边的下标
    pub idx: Option<usize>,
}

/// 点是否在环内（奇偶规则）
///
/// 只对与过该点的水平带相交的段做射线判定；点落在边上时
/// 结果由 `allow_on_edge` 决定。
pub fn ring_contains_point(ring: &BaseSeries, point: Point, allow_on_edge: bool) -> RingResult {
    if ring.empty() {
        return RingResult { hit: false, idx: None };
    }
    let mut hit = false;
    let mut on_edge = None;
    let band = Rect::new(f64::NEG_INFINITY, point.y, f64::INFINITY, point.y);
    ring.search(band, |seg, idx| {
        let res = seg.raycast(point);
        if res.on {
            on_edge = Some(idx);
            return false;
        }
        if res.crosses {
            hit = !hit;
        }
        true
    });
    match on_edge {
        Some(idx) => RingResult {
            hit: allow_on_edge,
            idx: Some(idx),
        },
        None => RingResult { hit, idx: None },
    }
}

/// 线段是否整个在环内
pub fn ring_contains_segment(ring: &BaseSeries, seg: Segment, allow_on_edge: bool) -> bool {
    if !ring_contains_point(ring, seg.a, allow_on_edge).hit
        || !ring_contains_point(ring, seg.b, allow_on_edge).hit
    {
        return false;
    }
    if seg.a == seg.b || ring.convex() {
        return true;
    }

    // 线段被环顶点切成若干小段，每个小段要么整体在内要么整体在外
    let mut params = vec![0.0, 1.0];
    let mut crossed = false;
    let mut touched = false;
    ring.search(seg.rect(), |edge, _| {
        if edge.crosses_segment(seg) {
            crossed = true;
            return false;
        }
        for p in [edge.a, edge.b] {
            if seg.raycast(p).on {
                touched = true;
                params.push(seg.param_of(p).clamp(0.0, 1.0));
            }
        }
        true
    });
    if crossed {
        return false;
    }
    if !allow_on_edge {
        return !touched;
    }
    pieces_all_inside(ring, seg, params)
}

/// 线段与环是否相交
///
/// `allow_on_edge` 为假时只有进入环内部才算相交，仅接触边界不算。
pub fn ring_intersects_segment(ring: &BaseSeries, seg: Segment, allow_on_edge: bool) -> bool {
    if ring.empty() {
        return false;
    }
    if ring_contains_point(ring, seg.a, allow_on_edge).hit
        || ring_contains_point(ring, seg.b, allow_on_edge).hit
    {
        return true;
    }

    if allow_on_edge {
        let mut hit = false;
        ring.search(seg.rect(), |edge, _| {
            if edge.intersects_segment(seg) {
                hit = true;
                return false;
            }
            true
        });
        return hit;
    }

    let mut params = vec![0.0, 1.0];
    let mut crossed = false;
    ring.search(seg.rect(), |edge, _| {
        if edge.crosses_segment(seg) {
            crossed = true;
            return false;
        }
        for p in [edge.a, edge.b] {
            if seg.raycast(p).on {
                params.push(seg.param_of(p).clamp(0.0, 1.0));
            }
        }
        true
    });
    if crossed {
        return true;
    }
    sorted_midpoints(seg, params)
        .into_iter()
        .any(|mid| ring_contains_point(ring, mid, false).hit)
}

/// 环是否包含另一个环
pub fn ring_contains_ring(ring: &BaseSeries, other: &BaseSeries, allow_on_edge: bool) -> bool {
    if ring.empty() || other.empty() {
        return false;
    }
    if !ring.rect().contains_rect(other.rect()) {
        return false;
    }
    (0..other.num_segments()).all(|i| ring_contains_segment(ring, other.segment_at(i), allow_on_edge))
}

/// 两个环是否相交
pub fn ring_intersects_ring(ring: &BaseSeries, other: &BaseSeries, allow_on_edge: bool) -> bool {
    if ring.empty() || other.empty() {
        return false;
    }
    if !ring.rect().intersects_rect(other.rect()) {
        return false;
    }
    (0..other.num_segments()).any(|i| ring_intersects_segment(ring, other.segment_at(i), allow_on_edge))
        || (0..ring.num_segments()).any(|i| ring_intersects_segment(other, ring.segment_at(i), allow_on_edge))
}

/// 环是否包含折线
pub fn ring_contains_line(ring: &BaseSeries, line: &Line, allow_on_edge: bool) -> bool {
    let series = line.series();
    if series.num_points() == 0 {
        return false;
    }
    if series.num_segments() == 0 {
        return ring_contains_point(ring, series.point_at(0), allow_on_edge).hit;
    }
    if !ring.rect().contains_rect(series.rect()) {
        return false;
    }
    (0..series.num_segments()).all(|i| ring_contains_segment(ring, series.segment_at(i), allow_on_edge))
}

/// 环与折线是否相交
pub fn ring_intersects_line(ring: &BaseSeries, line: &Line, allow_on_edge: bool) -> bool {
    let series = line.series();
    if series.num_points() == 0 {
        return false;
    }
    if series.num_segments() == 0 {
        return ring_contains_point(ring, series.point_at(0), allow_on_edge).hit;
    }
    if !ring.rect().intersects_rect(series.rect()) {
        return false;
    }
    (0..series.num_segments()).any(|i| ring_intersects_segment(ring, series.segment_at(i), allow_on_edge))
}

fn sorted_midpoints(seg: Segment, mut params: Vec<f64>) -> Vec<Point> {
    params.sort_by(f64::total_cmp);
    params.dedup();
    params
        .windows(2)
        .map(|w| seg.point_at((w[0] + w[1]) / 2.0))
        .collect()
}

fn pieces_all_inside(ring: &BaseSeries, seg: Segment, params: Vec<f64>) -> bool {
    sorted_midpoints(seg, params)
        .into_iter()
        .all(|mid| ring_contains_point(ring, mid, true).hit)
}
