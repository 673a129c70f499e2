use super::clip_segment;
use crate::geometry::{IndexOptions, Line, Point, Rect};
use crate::object::Object;

/// 逐段裁剪折线
///
/// 相邻两段裁剪结果首尾不相接时断开成新的一段。只剩一段时返回
/// LineString，否则返回 MultiLineString（包括一段都不剩的情况）。
pub fn clip_line_string(line: &Line, window: Rect, opts: &IndexOptions) -> Object {
    let mut parts: Vec<Vec<Point>> = Vec::new();
    let mut current: Vec<Point> = Vec::new();
    for i in 0..line.num_segments() {
        let Some(clipped) = clip_segment(line.segment_at(i), window) else {
            continue;
        };
        match current.last() {
            Some(&last) if last != clipped.a => {
                parts.push(std::mem::take(&mut current));
                current.push(clipped.a);
            }
            Some(_) => {}
            None => current.push(clipped.a),
        }
        current.push(clipped.b);
    }
    if !current.is_empty() {
        parts.push(current);
    }

    let mut lines: Vec<Line> = parts
        .into_iter()
        .map(|points| Line::new(points, Some(opts)))
        .collect();
    if lines.len() == 1 {
        if let Some(line) = lines.pop() {
            return Object::LineString(line);
        }
    }
    Object::MultiLineString(lines)
}
