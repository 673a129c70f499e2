use super::super::node::{Entry, Node};
use super::super::rectangle::Rectangle;
use super::super::rtree::RTree;

/// 搜索操作相关算法
impl<T> RTree<T> {
    /// 矩形范围搜索
    ///
    /// 对每个边界框与查询框相交的数据条目调用 `iter(min, max, data)`，
    /// `iter` 返回 `false` 时整个搜索立即结束。
    /// 精确的形状判断由调用方完成。
    pub fn search<F>(&self, min: [f64; 2], max: [f64; 2], mut iter: F)
    where
        F: FnMut([f64; 2], [f64; 2], &T) -> bool,
    {
        let target = Rectangle::from_corners(min, max);
        if self.count == 0 || !target.intersects(&self.mbr) {
            return;
        }
        self.search_node(&self.root, &target, &mut iter);
    }

    /// 遍历全部数据条目，`iter` 返回 `false` 时停止
    pub fn scan<F>(&self, mut iter: F)
    where
        F: FnMut([f64; 2], [f64; 2], &T) -> bool,
    {
        self.scan_node(&self.root, &mut iter);
    }

    /// 收集与查询框相交的所有负载
    pub fn search_items(&self, min: [f64; 2], max: [f64; 2]) -> Vec<&T> {
        let mut results = Vec::new();
        let target = Rectangle::from_corners(min, max);
        if self.count > 0 && target.intersects(&self.mbr) {
            self.collect_node(&self.root, &target, &mut results);
        }
        results
    }

    fn search_node<F>(&self, node: &Node<T>, target: &Rectangle, iter: &mut F) -> bool
    where
        F: FnMut([f64; 2], [f64; 2], &T) -> bool,
    {
        for entry in &node.entries {
            if !target.intersects(entry.mbr()) {
                continue;
            }
            match entry {
                Entry::Data { mbr, data } => {
                    if !iter(mbr.min, mbr.max, data) {
                        return false;
                    }
                }
                Entry::Node { node, .. } => {
                    if !self.search_node(node, target, iter) {
                        return false;
                    }
                }
            }
        }
        true
    }

    fn scan_node<F>(&self, node: &Node<T>, iter: &mut F) -> bool
    where
        F: FnMut([f64; 2], [f64; 2], &T) -> bool,
    {
        for entry in &node.entries {
            match entry {
                Entry::Data { mbr, data } => {
                    if !iter(mbr.min, mbr.max, data) {
                        return false;
                    }
                }
                Entry::Node { node, .. } => {
                    if !self.scan_node(node, iter) {
                        return false;
                    }
                }
            }
        }
        true
    }

    fn collect_node<'a>(&'a self, node: &'a Node<T>, target: &Rectangle, results: &mut Vec<&'a T>) {
        for entry in &node.entries {
            if !target.intersects(entry.mbr()) {
                continue;
            }
            match entry {
                Entry::Data { data, .. } => results.push(data),
                Entry::Node { node, .. } => self.collect_node(node, target, results),
            }
        }
    }
}
