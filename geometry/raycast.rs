//! Horizontal ray casting against a single segment.
//!
//! A ray is cast from the query point towards +X. The result reports whether
//! the point lies on the segment and whether the ray crosses it; ring
//! containment is the parity of the crossings.

use super::{Point, Segment};

/// Outcome of casting a ray from a point against one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RaycastResult {
    /// The ray towards +X crosses the segment.
    pub crosses: bool,
    /// The point lies on the segment.
    pub on: bool,
}

impl RaycastResult {
    const NONE: RaycastResult = RaycastResult {
        crosses: false,
        on: false,
    };
    const ON: RaycastResult = RaycastResult {
        crosses: false,
        on: true,
    };
    const CROSSES: RaycastResult = RaycastResult {
        crosses: true,
        on: false,
    };
}

impl Segment {
    /// Casts a horizontal ray from `point` and tests it against this segment.
    ///
    /// When the point shares a y coordinate with an endpoint it is nudged up
    /// to the next representable value, so a vertex is never counted twice.
    pub fn raycast(&self, point: Point) -> RaycastResult {
        let (a, b) = (self.a, self.b);
        let mut p = point;

        if a.y < b.y && (p.y < a.y || p.y > b.y) {
            return RaycastResult::NONE;
        } else if a.y > b.y && (p.y < b.y || p.y > a.y) {
            return RaycastResult::NONE;
        }

        if a.y == b.y {
            if a.x == b.x {
                if p == a {
                    return RaycastResult::ON;
                }
                return RaycastResult::NONE;
            }
            if p.y == b.y {
                // horizontal segment, the ray runs along it
                if (p.x >= a.x && p.x <= b.x) || (p.x >= b.x && p.x <= a.x) {
                    return RaycastResult::ON;
                }
            }
        }
        if a.x == b.x && p.x == b.x && ((p.y >= a.y && p.y <= b.y) || (p.y >= b.y && p.y <= a.y)) {
            return RaycastResult::ON;
        }
        if (p.x - a.x) / (b.x - a.x) == (p.y - a.y) / (b.y - a.y) {
            return RaycastResult::ON;
        }

        while p.y == a.y || p.y == b.y {
            p.y = next_up(p.y);
        }

        if a.y < b.y {
            if p.y < a.y || p.y > b.y {
                return RaycastResult::NONE;
            }
        } else if p.y < b.y || p.y > a.y {
            return RaycastResult::NONE;
        }

        if a.x > b.x {
            if p.x >= a.x {
                return RaycastResult::NONE;
            }
            if p.x <= b.x {
                return RaycastResult::CROSSES;
            }
        } else {
            if p.x >= b.x {
                return RaycastResult::NONE;
            }
            if p.x <= a.x {
                return RaycastResult::CROSSES;
            }
        }

        if a.y < b.y {
            if (p.y - a.y) / (p.x - a.x) >= (b.y - a.y) / (b.x - a.x) {
                return RaycastResult::CROSSES;
            }
        } else if (p.y - b.y) / (p.x - b.x) >= (a.y - b.y) / (a.x - b.x) {
            return RaycastResult::CROSSES;
        }
        RaycastResult::NONE
    }
}

/// Smallest representable `f64` greater than `v`.
fn next_up(v: f64) -> f64 {
    if v.is_nan() || v == f64::INFINITY {
        return v;
    }
    if v == 0.0 {
        return f64::from_bits(1);
    }
    let bits = v.to_bits();
    if v > 0.0 {
        f64::from_bits(bits + 1)
    } else {
        f64::from_bits(bits - 1)
    }
}
