// 裁剪模块
// Cohen–Sutherland 线段裁剪、Sutherland–Hodgman 环裁剪以及按对象类型分发

pub mod collection;
pub mod linestring;
pub mod polygon;

use crate::geometry::{IndexOptions, Point, Rect, Segment};
use crate::object::Object;

pub use collection::clip_collection;
pub use linestring::clip_line_string;
pub use polygon::{clip_polygon, clip_rect};

/// 区域编码的四个位
pub const LEFT: u8 = 1;
pub const RIGHT: u8 = 2;
pub const BOTTOM: u8 = 4;
pub const TOP: u8 = 8;

/// 用 `clipper` 的边界框裁剪对象
///
/// 返回的对象类型可能改变：矩形变成多边形，折线可能变成多折线，
/// 集合变成 FeatureCollection。
pub fn clip(object: &Object, clipper: &Object, opts: &IndexOptions) -> Object {
    let window = clipper.rect();
    clip_to_rect(object, window, opts)
}

/// 用矩形裁剪对象
pub fn clip_to_rect(object: &Object, window: Rect, opts: &IndexOptions) -> Object {
    match object {
        Object::Point(point) => clip_point(*point, window),
        Object::Rect(rect) => clip_rect(*rect, window, opts),
        Object::LineString(line) => clip_line_string(line, window, opts),
        Object::Polygon(poly) => clip_polygon(poly, window, opts),
        Object::Feature(feature) => {
            let geometry = clip_to_rect(&feature.geometry, window, opts);
            Object::Feature(Box::new(feature.with_geometry(geometry)))
        }
        _ => clip_collection(object, window, opts),
    }
}

/// 点在窗口内原样返回，否则返回空的 MultiPoint
fn clip_point(point: Point, window: Rect) -> Object {
    if outcode(window, point) == 0 {
        Object::Point(point)
    } else {
        Object::MultiPoint(Vec::new())
    }
}

/// 点相对窗口的区域编码
pub fn outcode(window: Rect, point: Point) -> u8 {
    let mut code = 0;
    if point.x < window.min.x {
        code |= LEFT;
    } else if point.x > window.max.x {
        code |= RIGHT;
    }
    if point.y < window.min.y {
        code |= BOTTOM;
    } else if point.y > window.max.y {
        code |= TOP;
    }
    code
}

/// 线段 start → end 与 `code` 指示的那条窗口边的交点
fn intersect(window: Rect, code: u8, start: Point, end: Point) -> Point {
    if code & TOP != 0 {
        Point::new(
            start.x + (end.x - start.x) * (window.max.y - start.y) / (end.y - start.y),
            window.max.y,
        )
    } else if code & BOTTOM != 0 {
        Point::new(
            start.x + (end.x - start.x) * (window.min.y - start.y) / (end.y - start.y),
            window.min.y,
        )
    } else if code & RIGHT != 0 {
        Point::new(
            window.max.x,
            start.y + (end.y - start.y) * (window.max.x - start.x) / (end.x - start.x),
        )
    } else {
        Point::new(
            window.min.x,
            start.y + (end.y - start.y) * (window.min.x - start.x) / (end.x - start.x),
        )
    }
}

/// Cohen–Sutherland 线段裁剪，整段在窗口外时返回 `None`
pub fn clip_segment(seg: Segment, window: Rect) -> Option<Segment> {
    let mut seg = seg;
    loop {
        let start_code = outcode(window, seg.a);
        let end_code = outcode(window, seg.b);
        if start_code | end_code == 0 {
            return Some(seg);
        }
        if start_code & end_code != 0 {
            return None;
        }
        if start_code != 0 {
            seg.a = intersect(window, start_code, seg.a, seg.b);
        } else {
            seg.b = intersect(window, end_code, seg.a, seg.b);
        }
    }
}

/// Sutherland–Hodgman 环裁剪
///
/// 按左、右、下、上的顺序逐条窗口边裁剪，每一轮结束后重新闭合。
/// 少于 4 个点的输入不是合法的环，直接返回空。
pub fn clip_ring(ring: &[Point], window: Rect) -> Vec<Point> {
    if ring.len() < 4 {
        return Vec::new();
    }
    let mut input = ring.to_vec();
    for edge in [LEFT, RIGHT, BOTTOM, TOP] {
        let mut output = Vec::with_capacity(input.len() + 4);
        let mut prev = input[input.len() - 2];
        let mut prev_inside = outcode(window, prev) & edge == 0;
        for &p in &input {
            let inside = outcode(window, p) & edge == 0;
            match (prev_inside, inside) {
                (true, true) => output.push(p),
                (true, false) => output.push(intersect(window, edge, prev, p)),
                (false, true) => {
                    output.push(intersect(window, edge, prev, p));
                    output.push(p);
                }
                (false, false) => {}
            }
            prev = p;
            prev_inside = inside;
        }
        if let (Some(&first), Some(&last)) = (output.first(), output.last()) {
            if first != last {
                output.push(first);
            }
        }
        if output.is_empty() {
            return output;
        }
        input = output;
    }
    input
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(ax: f64, ay: f64, bx: f64, by: f64) -> Segment {
        Segment::new(Point::new(ax, ay), Point::new(bx, by))
    }

    #[test]
    fn test_outcode() {
        let window = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(outcode(window, Point::new(5.0, 5.0)), 0);
        assert_eq!(outcode(window, Point::new(10.0, 0.0)), 0);
        assert_eq!(outcode(window, Point::new(-1.0, 5.0)), LEFT);
        assert_eq!(outcode(window, Point::new(11.0, 11.0)), RIGHT | TOP);
        assert_eq!(outcode(window, Point::new(-1.0, -1.0)), LEFT | BOTTOM);
    }

    #[test]
    fn test_clip_segment() {
        let window = Rect::new(0.0, 0.0, 10.0, 10.0);
        // 整段在内
        assert_eq!(clip_segment(s(1.0, 1.0, 9.0, 9.0), window), Some(s(1.0, 1.0, 9.0, 9.0)));
        // 同侧在外
        assert_eq!(clip_segment(s(-5.0, 1.0, -1.0, 9.0), window), None);
        // 穿过
        assert_eq!(clip_segment(s(-5.0, 5.0, 15.0, 5.0), window), Some(s(0.0, 5.0, 10.0, 5.0)));
        // 斜穿两个角区
        assert_eq!(clip_segment(s(-5.0, -5.0, 15.0, 15.0), window), Some(s(0.0, 0.0, 10.0, 10.0)));
        // 编码不同但整段在外
        assert_eq!(clip_segment(s(-1.0, 8.0, 3.0, 20.0), window), None);
    }

    #[test]
    fn test_clip_ring() {
        let window = Rect::new(0.0, 0.0, 10.0, 10.0);
        let ring = vec![
            Point::new(-5.0, -5.0),
            Point::new(5.0, -5.0),
            Point::new(5.0, 5.0),
            Point::new(-5.0, 5.0),
            Point::new(-5.0, -5.0),
        ];
        let clipped = clip_ring(&ring, window);
        assert_eq!(clipped.first(), clipped.last());
        let rect = clipped
            .iter()
            .fold(Rect::new(f64::MAX, f64::MAX, f64::MIN, f64::MIN), |acc, p| {
                acc.union(&Rect::new(p.x, p.y, p.x, p.y))
            });
        assert_eq!(rect, Rect::new(0.0, 0.0, 5.0, 5.0));

        let outside = vec![
            Point::new(20.0, 20.0),
            Point::new(30.0, 20.0),
            Point::new(30.0, 30.0),
            Point::new(20.0, 20.0),
        ];
        assert!(clip_ring(&outside, window).is_empty());
        assert!(clip_ring(&ring[..3], window).is_empty());
    }
}
