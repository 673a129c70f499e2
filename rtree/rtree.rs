use super::node::Node;
use super::rectangle::Rectangle;

/// 默认最大条目数
pub const DEFAULT_MAX_ENTRIES: usize = 32;

/// 最小条目数占最大条目数的百分比
const MIN_ENTRIES_PERCENTAGE: usize = 20;

/// 泛型 R-tree 主结构
///
/// 负载类型 `T` 对树是不透明的，树只看调用方给出的 `(min, max)`。
/// 结构本身不加锁，并发访问由调用方串行化。
#[derive(Debug, Clone)]
pub struct RTree<T> {
    /// 根节点
    pub(crate) root: Node<T>,
    /// 根节点的紧致边界框，空树为零矩形
    pub(crate) mbr: Rectangle,
    /// 树高：叶子层为 0
    pub(crate) height: usize,
    /// 数据条目总数
    pub(crate) count: usize,
    /// 最大条目数M
    pub(crate) max_entries: usize,
    /// 最小条目数m（M 的 20%）
    pub(crate) min_entries: usize,
}

impl<T> Default for RTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RTree<T> {
    /// 使用默认参数创建R-tree（M=32）
    pub fn new() -> Self {
        Self::with_max_entries(DEFAULT_MAX_ENTRIES)
    }

    /// 创建指定最大条目数的R-tree
    pub fn with_max_entries(max_entries: usize) -> Self {
        assert!(max_entries >= 4, "Max entries must be at least 4");
        let min_entries = (max_entries * MIN_ENTRIES_PERCENTAGE / 100).max(1);

        RTree {
            root: Node::new(),
            mbr: Rectangle::default(),
            height: 0,
            count: 0,
            max_entries,
            min_entries,
        }
    }

    /// 获取总的条目数量
    pub fn len(&self) -> usize {
        self.count
    }

    /// 检查R-tree是否为空
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// 根边界框，空树返回零矩形
    pub fn bounds(&self) -> ([f64; 2], [f64; 2]) {
        (self.mbr.min, self.mbr.max)
    }

    /// 获取树高（只有一层时为 0）
    pub fn height(&self) -> usize {
        self.height
    }

    /// 获取最大条目数
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// 获取最小条目数
    pub fn min_entries(&self) -> usize {
        self.min_entries
    }

    /// 清空整棵树
    pub fn clear(&mut self) {
        self.root = Node::new();
        self.mbr = Rectangle::default();
        self.height = 0;
        self.count = 0;
    }
}
