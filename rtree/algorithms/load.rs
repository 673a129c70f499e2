use tracing::debug;

use super::super::node::{Entry, Node};
use super::super::rectangle::Rectangle;
use super::super::rtree::RTree;

/// 批量加载（OMT, Overlap Minimizing Top-down）
impl<T> RTree<T> {
    /// 批量加载数据条目
    ///
    /// 空树且条目数不少于 `min_entries` 时自顶向下打包：每层沿交替的坐标轴
    /// 按 min 排序，再均分成若干组，保证所有非根节点的扇出介于
    /// `min_entries` 和 `max_entries - 1` 之间。
    /// 非空树或条目太少时退化为逐条插入。
    pub fn load<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = ([f64; 2], [f64; 2], T)>,
    {
        let items: Vec<(Rectangle, T)> = items
            .into_iter()
            .map(|(min, max, data)| (Rectangle::from_corners(min, max), data))
            .collect();

        if !self.is_empty() || items.len() < self.min_entries {
            for (mbr, data) in items {
                self.insert_entry(mbr, data);
            }
            return;
        }

        let count = items.len();
        let capacity = self.max_entries - 1;
        let height = omt_height(count, capacity);
        let root = omt(items, height, 0, capacity);
        let mbr = root.calc_mbr();

        debug!(count, height, "bulk loaded tree");
        self.root = root;
        self.mbr = mbr;
        self.height = height;
        self.count = count;
    }
}

/// 最小高度 h，使得 `capacity^(h+1) >= count`
fn omt_height(count: usize, capacity: usize) -> usize {
    let mut height = 0;
    let mut span = capacity;
    while span < count {
        span = span.saturating_mul(capacity);
        height += 1;
    }
    height
}

fn omt<T>(mut items: Vec<(Rectangle, T)>, height: usize, axis: usize, capacity: usize) -> Node<T> {
    if height == 0 {
        let entries = items
            .into_iter()
            .map(|(mbr, data)| Entry::Data { mbr, data })
            .collect();
        return Node::with_entries(entries);
    }

    // 每个子树最多容纳 capacity^height 个条目
    let subtree = capacity.saturating_pow(height as u32);
    let groups = items.len().div_ceil(subtree);
    sort_by_axis(&mut items, axis);

    let base = items.len() / groups;
    let extra = items.len() % groups;
    let mut entries = Vec::with_capacity(groups);
    let mut rest = items;
    for i in (0..groups).rev() {
        // 前 extra 组各多分一个
        let size = base + usize::from(i < extra);
        let part = rest.split_off(rest.len() - size);
        let child = omt(part, height - 1, axis ^ 1, capacity);
        entries.push(Entry::Node {
            mbr: child.calc_mbr(),
            node: Box::new(child),
        });
    }
    entries.reverse();
    Node::with_entries(entries)
}

fn sort_by_axis<T>(items: &mut [(Rectangle, T)], axis: usize) {
    items.sort_by(|a, b| a.0.min[axis].total_cmp(&b.0.min[axis]));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_omt_height() {
        assert_eq!(omt_height(1, 31), 0);
        assert_eq!(omt_height(31, 31), 0);
        assert_eq!(omt_height(32, 31), 1);
        assert_eq!(omt_height(961, 31), 1);
        assert_eq!(omt_height(962, 31), 2);
    }

    #[test]
    fn test_load_random() {
        let mut rng = StdRng::seed_from_u64(3);
        let items: Vec<_> = (0..10_000)
            .map(|i| {
                let x: f64 = rng.gen_range(0.0..1000.0);
                let y: f64 = rng.gen_range(0.0..1000.0);
                ([x, y], [x + 1.0, y + 1.0], i)
            })
            .collect();

        let mut tree = RTree::new();
        tree.load(items.clone());
        assert_eq!(tree.len(), 10_000);
        tree.check_invariants().unwrap();

        let mut found = Vec::new();
        tree.search([100.0, 100.0], [200.0, 150.0], |_, _, i| {
            found.push(*i);
            true
        });
        found.sort();
        let mut expected: Vec<i32> = items
            .iter()
            .filter(|(min, max, _)| {
                Rectangle::from_corners(*min, *max)
                    .intersects(&Rectangle::new(100.0, 100.0, 200.0, 150.0))
            })
            .map(|(_, _, i)| *i)
            .collect();
        expected.sort();
        assert_eq!(found, expected);

        // 加载后的树仍然可以正常删除
        for (min, max, i) in items.iter().take(500) {
            assert!(tree.delete(*min, *max, i));
        }
        assert_eq!(tree.len(), 9_500);
        tree.check_invariants().unwrap();
    }

    #[test]
    fn test_load_into_non_empty_falls_back() {
        let mut tree = RTree::with_max_entries(4);
        tree.insert([0.0, 0.0], [0.0, 0.0], 0);
        tree.load((1..50).map(|i| {
            let x = i as f64;
            ([x, 0.0], [x, 1.0], i)
        }));
        assert_eq!(tree.len(), 50);
        assert_eq!(tree.bounds(), ([0.0, 0.0], [49.0, 1.0]));
        tree.check_invariants().unwrap();
    }
}
