use super::super::node::{Entry, Node};
use super::super::rectangle::Rectangle;
use super::super::rtree::RTree;

/// 子条目携带的内容
#[derive(Debug)]
pub enum ChildData<'a, T> {
    /// 子节点句柄，可以再次传给 [`RTree::children`]
    Node(&'a Node<T>),
    /// 数据负载
    Item(&'a T),
}

/// 树的一层结构描述
#[derive(Debug)]
pub struct Child<'a, T> {
    pub min: [f64; 2],
    pub max: [f64; 2],
    pub data: ChildData<'a, T>,
    /// 是否为数据条目
    pub item: bool,
}

/// R-tree工具函数实现
impl<T> RTree<T> {
    /// 暴露一层树结构，供需要自行遍历的调用方使用
    ///
    /// `parent` 为 `None` 时返回根的描述（空树返回空列表）；
    /// 否则返回该节点的全部子条目。结果写入 `reuse` 以复用其容量。
    pub fn children<'a>(
        &'a self,
        parent: Option<&'a Node<T>>,
        mut reuse: Vec<Child<'a, T>>,
    ) -> Vec<Child<'a, T>> {
        reuse.clear();
        match parent {
            None => {
                if self.count > 0 {
                    reuse.push(Child {
                        min: self.mbr.min,
                        max: self.mbr.max,
                        data: ChildData::Node(&self.root),
                        item: false,
                    });
                }
            }
            Some(node) => {
                for entry in &node.entries {
                    let child = match entry {
                        Entry::Data { mbr, data } => Child {
                            min: mbr.min,
                            max: mbr.max,
                            data: ChildData::Item(data),
                            item: true,
                        },
                        Entry::Node { mbr, node } => Child {
                            min: mbr.min,
                            max: mbr.max,
                            data: ChildData::Node(node),
                            item: false,
                        },
                    };
                    reuse.push(child);
                }
            }
        }
        reuse
    }

    /// 检查结构不变式，返回第一个违反项的描述
    ///
    /// - 每个索引条目的边界框等于其子条目的紧致并集
    /// - 非根节点的条目数介于 `min_entries` 和 `max_entries` 之间
    /// - 所有叶子位于同一深度
    /// - 数据条目总数等于 `len()`
    pub fn check_invariants(&self) -> Result<(), String> {
        if self.count == 0 {
            if !self.root.is_empty() || self.height != 0 {
                return Err("empty tree must have an empty root at height 0".to_string());
            }
            if self.mbr != Rectangle::default() {
                return Err(format!("empty tree has non-zero bounds {:?}", self.mbr));
            }
            return Ok(());
        }

        if self.root.calc_mbr() != self.mbr {
            return Err(format!(
                "root bounds {:?} differ from union {:?}",
                self.mbr,
                self.root.calc_mbr()
            ));
        }
        if self.root.len() >= self.max_entries {
            return Err(format!("root holds {} entries", self.root.len()));
        }
        let counted = self.check_node(&self.root, self.height, true)?;
        if counted != self.count {
            return Err(format!("tree reports {} items but holds {}", self.count, counted));
        }
        Ok(())
    }

    fn check_node(&self, node: &Node<T>, height: usize, is_root: bool) -> Result<usize, String> {
        if !is_root && (node.len() < self.min_entries || node.len() >= self.max_entries) {
            return Err(format!(
                "node at height {} holds {} entries (min {}, max {})",
                height,
                node.len(),
                self.min_entries,
                self.max_entries
            ));
        }
        let mut count = 0;
        for entry in &node.entries {
            match entry {
                Entry::Data { .. } => {
                    if height != 0 {
                        return Err(format!("data entry found at height {}", height));
                    }
                    count += 1;
                }
                Entry::Node { mbr, node: child } => {
                    if height == 0 {
                        return Err("node entry found at leaf level".to_string());
                    }
                    if child.calc_mbr() != *mbr {
                        return Err(format!(
                            "stored bounds {:?} differ from union {:?}",
                            mbr,
                            child.calc_mbr()
                        ));
                    }
                    count += self.check_node(child, height - 1, false)?;
                }
            }
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_children_walk() {
        let mut tree = RTree::with_max_entries(4);
        assert!(tree.children(None, Vec::new()).is_empty());

        for i in 0..30 {
            let x = i as f64;
            tree.insert([x, x], [x + 1.0, x + 1.0], i);
        }

        let root = tree.children(None, Vec::new());
        assert_eq!(root.len(), 1);
        assert!(!root[0].item);
        assert_eq!((root[0].min, root[0].max), tree.bounds());

        // 逐层向下展开，直到全部是数据条目
        let mut items = 0;
        let mut stack = Vec::new();
        if let ChildData::Node(node) = root[0].data {
            stack.push(node);
        }
        let mut buffer = Vec::new();
        while let Some(node) = stack.pop() {
            buffer = tree.children(Some(node), buffer);
            for child in &buffer {
                match child.data {
                    ChildData::Node(n) => {
                        assert!(!child.item);
                        stack.push(n);
                    }
                    ChildData::Item(_) => {
                        assert!(child.item);
                        items += 1;
                    }
                }
            }
        }
        assert_eq!(items, 30);
    }
}
