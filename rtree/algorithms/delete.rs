use tracing::{debug, trace};

use super::super::node::{Entry, Node};
use super::super::rectangle::Rectangle;
use super::super::rtree::RTree;

/// 删除操作相关算法
impl<T: PartialEq> RTree<T> {
    /// 删除与 `(min, max, data)` 完全匹配的数据条目
    ///
    /// 删除后若某个子节点少于 `min_entries`，整棵子树被摊平并移出，
    /// 摊平的条目在删除过程结束后统一从根重新插入。
    ///
    /// # 返回值
    /// - `true` - 找到并删除了条目
    /// - `false` - 没有匹配的条目
    pub fn delete(&mut self, min: [f64; 2], max: [f64; 2], data: &T) -> bool {
        let item = Rectangle::from_corners(min, max);
        if self.count == 0 || !self.mbr.contains(&item) {
            return false;
        }

        let mut reinsert = Vec::new();
        let (removed, mut recalced) = delete_recursive(
            &mut self.mbr,
            &mut self.root,
            &item,
            data,
            self.height,
            self.min_entries,
            &mut reinsert,
        );
        if !removed {
            return false;
        }

        self.count -= reinsert.len() + 1;
        if self.count == 0 {
            self.clear();
            recalced = false;
        } else {
            self.collapse_root();
        }
        if recalced {
            self.mbr = self.root.calc_mbr();
        }

        if !reinsert.is_empty() {
            debug!(entries = reinsert.len(), "reinserting entries from underflowed nodes");
        }
        for (mbr, data) in reinsert {
            self.insert_entry(mbr, data);
        }
        true
    }
}

impl<T> RTree<T> {
    /// 根只剩一个子节点时逐层下沉
    fn collapse_root(&mut self) {
        while self.height > 0 && self.root.len() <= 1 {
            match self.root.entries.pop() {
                Some(Entry::Node { mbr, node }) => {
                    self.root = *node;
                    self.mbr = mbr;
                    self.height -= 1;
                }
                Some(entry @ Entry::Data { .. }) => {
                    // 树高记录与结构不符，按叶子层处理
                    self.root.entries.push(entry);
                    self.height = 0;
                }
                None => {
                    // 所有子树都已摊平，等待重新插入
                    self.root = Node::new();
                    self.mbr = Rectangle::default();
                    self.height = 0;
                }
            }
            trace!(height = self.height, "collapsed root");
        }
        if !self.root.is_empty() {
            self.mbr = self.root.calc_mbr();
        }
    }
}

/// 递归删除，返回 `(removed, recalced)`
///
/// `recalced` 表示当前节点的边界框已经重算，父节点也需要重算。
fn delete_recursive<T: PartialEq>(
    mbr: &mut Rectangle,
    node: &mut Node<T>,
    item: &Rectangle,
    data: &T,
    height: usize,
    min_entries: usize,
    reinsert: &mut Vec<(Rectangle, T)>,
) -> (bool, bool) {
    if height == 0 {
        let found = node.entries.iter().position(|entry| match entry {
            Entry::Data { mbr, data: value } => value == data && mbr == item,
            Entry::Node { .. } => false,
        });
        let Some(index) = found else {
            return (false, false);
        };
        let recalced = mbr.on_edge(node.entries[index].mbr());
        node.entries.swap_remove(index);
        if recalced {
            *mbr = node.calc_mbr();
        }
        return (true, recalced);
    }

    for i in 0..node.entries.len() {
        let Entry::Node {
            mbr: child_mbr,
            node: child,
        } = &mut node.entries[i]
        else {
            continue;
        };
        if !child_mbr.contains(item) {
            continue;
        }
        let (removed, mut recalced) =
            delete_recursive(child_mbr, child, item, data, height - 1, min_entries, reinsert);
        if !removed {
            continue;
        }
        if child.len() < min_entries {
            // 下溢：摊平整棵子树，稍后重新插入
            if !recalced {
                recalced = mbr.on_edge(child_mbr);
            }
            if let Entry::Node { node: child, .. } = node.entries.swap_remove(i) {
                child.flatten_into(reinsert);
            }
        }
        if recalced {
            *mbr = node.calc_mbr();
        }
        return (true, recalced);
    }
    (false, false)
}
