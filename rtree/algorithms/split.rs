use super::super::node::{Entry, Node};
use super::super::rectangle::Rectangle;

/// 沿最长轴的贴边分裂
///
/// 在 `mbr` 跨度最大的轴上，比较每个条目到近边和远边的距离：
/// 离近边更近的留在原节点，离远边更近的移到新节点，
/// 距离相等的最后逐个分给当前条目较少的一侧。
/// 只追求扇出均衡，不做重叠优化。
///
/// 分裂后若某一侧少于 `min_entries`，从另一侧补入最靠近的条目。
/// 这一步会改变节点布局：单纯贴边分裂可能得到 1 对 9 的两侧，
/// 补齐后变成 4 对 6，靠近分界的条目被挪到较少的一侧。
/// 原节点和 `mbr` 原地更新，返回新兄弟节点的条目。
pub(crate) fn split_largest_axis_edge_snap<T>(
    mbr: &mut Rectangle,
    node: &mut Node<T>,
    min_entries: usize,
) -> Entry<T> {
    let axis = mbr.largest_axis();
    let mut right: Vec<Entry<T>> = Vec::with_capacity(node.len());
    let mut equals: Vec<Entry<T>> = Vec::new();

    let mut i = 0;
    while i < node.entries.len() {
        let child = node.entries[i].mbr();
        let min_dist = child.min[axis] - mbr.min[axis];
        let max_dist = mbr.max[axis] - child.max[axis];
        if min_dist < max_dist {
            // 留在左侧
            i += 1;
            continue;
        }
        let entry = node.entries.swap_remove(i);
        if min_dist > max_dist {
            right.push(entry);
        } else {
            equals.push(entry);
        }
    }

    for entry in equals {
        if node.entries.len() < right.len() {
            node.entries.push(entry);
        } else {
            right.push(entry);
        }
    }

    rebalance(axis, &mut node.entries, &mut right, min_entries);

    *mbr = node.calc_mbr();
    let right = Node::with_entries(right);
    Entry::Node {
        mbr: right.calc_mbr(),
        node: Box::new(right),
    }
}

/// 保证两侧都不少于 `min_entries`
///
/// 左侧缺少时，从右侧取 min 最小的条目；右侧缺少时，从左侧取 max 最大的条目。
fn rebalance<T>(axis: usize, left: &mut Vec<Entry<T>>, right: &mut Vec<Entry<T>>, min_entries: usize) {
    while left.len() < min_entries && right.len() > min_entries {
        let index = nearest_index(right, |e| e.mbr().min[axis], |a, b| a < b);
        left.push(right.swap_remove(index));
    }
    while right.len() < min_entries && left.len() > min_entries {
        let index = nearest_index(left, |e| e.mbr().max[axis], |a, b| a > b);
        right.push(left.swap_remove(index));
    }
}

fn nearest_index<T>(
    entries: &[Entry<T>],
    key: impl Fn(&Entry<T>) -> f64,
    better: impl Fn(f64, f64) -> bool,
) -> usize {
    let mut best = 0;
    for i in 1..entries.len() {
        if better(key(&entries[i]), key(&entries[best])) {
            best = i;
        }
    }
    best
}
