use super::{Leaf, Object};

/// 对象之间的空间关系
///
/// 集合按展开后的基础几何体计算：包含要求对方每个非空几何体都被
/// 本方某个几何体包含；相交只要任意一对几何体相交。
impl Object {
    pub fn contains(&self, other: &Object) -> bool {
        let mine: Vec<Leaf<'_>> = self
            .leaves()
            .into_iter()
            .filter(|leaf| !leaf.geometry().empty())
            .collect();
        let theirs: Vec<Leaf<'_>> = other
            .leaves()
            .into_iter()
            .filter(|leaf| !leaf.geometry().empty())
            .collect();
        if mine.is_empty() || theirs.is_empty() {
            return false;
        }
        theirs
            .iter()
            .all(|t| mine.iter().any(|m| leaf_contains(m, t)))
    }

    pub fn intersects(&self, other: &Object) -> bool {
        let theirs = other.leaves();
        self.leaves()
            .iter()
            .any(|m| theirs.iter().any(|t| leaf_intersects(m, t)))
    }

    /// 本对象是否整个落在 `other` 内
    pub fn within(&self, other: &Object) -> bool {
        other.contains(self)
    }

    /// 两个对象中心点之间的大圆距离（米）
    pub fn distance(&self, other: &Object) -> f64 {
        self.center().haversine_to(&other.center())
    }
}

fn leaf_contains(a: &Leaf<'_>, b: &Leaf<'_>) -> bool {
    let geometry = a.geometry();
    match b {
        Leaf::Point(point) => geometry.contains_point(*point),
        Leaf::Rect(rect) => geometry.contains_rect(*rect),
        Leaf::Line(line) => geometry.contains_line(line),
        Leaf::Poly(poly) => geometry.contains_poly(poly),
    }
}

fn leaf_intersects(a: &Leaf<'_>, b: &Leaf<'_>) -> bool {
    let geometry = a.geometry();
    match b {
        Leaf::Point(point) => geometry.intersects_point(*point),
        Leaf::Rect(rect) => geometry.intersects_rect(*rect),
        Leaf::Line(line) => geometry.intersects_line(line),
        Leaf::Poly(poly) => geometry.intersects_poly(poly),
    }
}
