use tracing::debug;

use super::super::node::{Entry, Node};
use super::super::rectangle::Rectangle;
use super::super::rtree::RTree;
use super::split::split_largest_axis_edge_snap;

/// 插入操作相关算法
impl<T> RTree<T> {
    /// 插入新的数据条目
    ///
    /// 从根向下选择子树，在叶子层追加条目；节点达到 `max_entries` 时分裂。
    /// 根分裂时在其上新建一层，树高加一。
    pub fn insert(&mut self, min: [f64; 2], max: [f64; 2], data: T) {
        self.insert_entry(Rectangle::from_corners(min, max), data);
    }

    /// 先删除旧条目，成功后才插入新条目
    ///
    /// # 返回值
    /// - `true` - 找到旧条目并完成替换
    /// - `false` - 旧条目不存在，树保持不变
    pub fn replace(
        &mut self,
        old_min: [f64; 2],
        old_max: [f64; 2],
        old_data: &T,
        new_min: [f64; 2],
        new_max: [f64; 2],
        new_data: T,
    ) -> bool
    where
        T: PartialEq,
    {
        if !self.delete(old_min, old_max, old_data) {
            return false;
        }
        self.insert(new_min, new_max, new_data);
        true
    }

    pub(crate) fn insert_entry(&mut self, item: Rectangle, data: T) {
        if self.root.is_empty() {
            // 空树：根的边界框直接取第一个条目
            self.mbr = item;
        }

        let grown = insert_recursive(
            &self.mbr,
            &mut self.root,
            item,
            data,
            self.height,
            self.max_entries,
            self.min_entries,
        );
        if grown {
            self.mbr.expand(&item);
        }

        if self.root.len() >= self.max_entries {
            let right = split_largest_axis_edge_snap(&mut self.mbr, &mut self.root, self.min_entries);
            let left = Entry::Node {
                mbr: self.mbr,
                node: Box::new(std::mem::take(&mut self.root)),
            };
            self.root = Node::with_entries(vec![left, right]);
            self.mbr = self.root.calc_mbr();
            self.height += 1;
            debug!(height = self.height, count = self.count + 1, "root split, tree grew");
        }

        self.count += 1;
    }
}

/// 递归插入，返回当前节点的边界框是否需要扩展
///
/// 调用方负责在返回 `true` 时扩展 `mbr`。
fn insert_recursive<T>(
    mbr: &Rectangle,
    node: &mut Node<T>,
    item: Rectangle,
    data: T,
    height: usize,
    max_entries: usize,
    min_entries: usize,
) -> bool {
    if height == 0 {
        node.entries.push(Entry::Data { mbr: item, data });
        return !mbr.contains(&item);
    }

    let index = choose_subtree(node, &item);
    let Entry::Node {
        mbr: child_mbr,
        node: child,
    } = &mut node.entries[index]
    else {
        unreachable!("entries above the leaf level are always nodes");
    };

    let mut grown = insert_recursive(
        child_mbr,
        child,
        item,
        data,
        height - 1,
        max_entries,
        min_entries,
    );
    if grown {
        child_mbr.expand(&item);
        grown = !mbr.contains(&item);
    }

    if child.len() >= max_entries {
        let right = split_largest_axis_edge_snap(child_mbr, child, min_entries);
        node.entries.push(right);
    }
    grown
}

/// 选择子树
///
/// 优先选择已经包含新矩形的子节点（面积最小者）；
/// 否则选择面积增量最小者，增量相同时取面积较小者。
fn choose_subtree<T>(node: &Node<T>, item: &Rectangle) -> usize {
    let mut index = None;
    let mut best_area = 0.0;
    for (i, entry) in node.entries.iter().enumerate() {
        let mbr = entry.mbr();
        if mbr.contains(item) {
            let area = mbr.area();
            if index.is_none() || area < best_area {
                best_area = area;
                index = Some(i);
            }
        }
    }
    match index {
        Some(i) => i,
        None => choose_least_enlargement(node, item),
    }
}

fn choose_least_enlargement<T>(node: &Node<T>, item: &Rectangle) -> usize {
    let mut best = 0;
    let mut best_enlargement = 0.0;
    let mut best_area = 0.0;
    for (i, entry) in node.entries.iter().enumerate() {
        let mbr = entry.mbr();
        let area = mbr.area();
        let enlargement = mbr.unioned_area(item) - area;
        if i == 0
            || enlargement < best_enlargement
            || (!(enlargement > best_enlargement) && area < best_area)
        {
            best = i;
            best_enlargement = enlargement;
            best_area = area;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf_entry(x0: f64, y0: f64, x1: f64, y1: f64) -> Entry<u32> {
        let node = Node::with_entries(vec![Entry::Data {
            mbr: Rectangle::new(x0, y0, x1, y1),
            data: 0,
        }]);
        Entry::Node {
            mbr: Rectangle::new(x0, y0, x1, y1),
            node: Box::new(node),
        }
    }

    #[test]
    fn test_choose_subtree_prefers_containing_child() {
        let node = Node::with_entries(vec![
            leaf_entry(0.0, 0.0, 10.0, 10.0),
            leaf_entry(0.0, 0.0, 4.0, 4.0),
            leaf_entry(20.0, 20.0, 21.0, 21.0),
        ]);
        // 两个子节点都包含该点，选面积小的
        assert_eq!(choose_subtree(&node, &Rectangle::from_point(1.0, 1.0)), 1);
        assert_eq!(choose_subtree(&node, &Rectangle::from_point(8.0, 8.0)), 0);
    }

    #[test]
    fn test_choose_least_enlargement() {
        let node = Node::with_entries(vec![
            leaf_entry(0.0, 0.0, 1.0, 1.0),
            leaf_entry(5.0, 5.0, 6.0, 6.0),
        ]);
        assert_eq!(choose_subtree(&node, &Rectangle::from_point(6.5, 6.5)), 1);
        assert_eq!(choose_subtree(&node, &Rectangle::from_point(-0.5, 1.0)), 0);
    }

    #[test]
    fn test_insert_grows_root() {
        let mut tree = RTree::with_max_entries(4);
        for i in 0..4 {
            tree.insert([i as f64, 0.0], [i as f64, 0.0], i);
        }
        // 第四个条目触发根分裂
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.height(), 1);
        assert_eq!(tree.bounds(), ([0.0, 0.0], [3.0, 0.0]));
    }

    #[test]
    fn test_replace_requires_existing() {
        let mut tree = RTree::new();
        tree.insert([0.0, 0.0], [1.0, 1.0], 1);
        assert!(!tree.replace([5.0, 5.0], [6.0, 6.0], &2, [0.0, 0.0], [0.0, 0.0], 3));
        assert_eq!(tree.len(), 1);

        assert!(tree.replace([0.0, 0.0], [1.0, 1.0], &1, [7.0, 7.0], [8.0, 8.0], 1));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.bounds(), ([7.0, 7.0], [8.0, 8.0]));
    }
}
