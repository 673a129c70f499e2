use super::rectangle::Rectangle;

/// R-tree节点条目
#[derive(Debug, Clone)]
pub enum Entry<T> {
    /// 叶子条目：调用方给出的边界框和负载
    Data { mbr: Rectangle, data: T },
    /// 索引条目：子节点的紧致边界框和子节点
    Node { mbr: Rectangle, node: Box<Node<T>> },
}

impl<T> Entry<T> {
    /// 获取条目的MBR
    pub fn mbr(&self) -> &Rectangle {
        match self {
            Entry::Data { mbr, .. } => mbr,
            Entry::Node { mbr, .. } => mbr,
        }
    }

    /// 获取条目的MBR（可变引用）
    pub fn mbr_mut(&mut self) -> &mut Rectangle {
        match self {
            Entry::Data { mbr, .. } => mbr,
            Entry::Node { mbr, .. } => mbr,
        }
    }

    /// 检查是否为数据条目
    pub fn is_data(&self) -> bool {
        matches!(self, Entry::Data { .. })
    }

    /// 获取数据条目的负载
    pub fn data(&self) -> Option<&T> {
        match self {
            Entry::Data { data, .. } => Some(data),
            Entry::Node { .. } => None,
        }
    }

    /// 获取索引条目的子节点
    pub fn child(&self) -> Option<&Node<T>> {
        match self {
            Entry::Data { .. } => None,
            Entry::Node { node, .. } => Some(node),
        }
    }

    /// 获取索引条目的子节点（可变）
    pub fn child_mut(&mut self) -> Option<&mut Node<T>> {
        match self {
            Entry::Data { .. } => None,
            Entry::Node { node, .. } => Some(node),
        }
    }
}

/// R-tree节点
///
/// 节点本身不保存边界框，边界框放在父条目（或树根）里。
#[derive(Debug, Clone)]
pub struct Node<T> {
    /// 节点包含的条目列表
    pub entries: Vec<Entry<T>>,
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Node::new()
    }
}

impl<T> Node<T> {
    /// 创建空节点
    pub fn new() -> Self {
        Node {
            entries: Vec::new(),
        }
    }

    /// 由一组条目创建节点
    pub fn with_entries(entries: Vec<Entry<T>>) -> Self {
        Node { entries }
    }

    /// 条目数量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 节点是否为空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 节点是否为叶子层（空节点视为叶子）
    pub fn is_leaf(&self) -> bool {
        self.entries.first().map_or(true, Entry::is_data)
    }

    /// 计算所有条目的紧致并集，空节点返回零矩形
    pub fn calc_mbr(&self) -> Rectangle {
        let mut iter = self.entries.iter();
        let mut mbr = match iter.next() {
            Some(entry) => *entry.mbr(),
            None => return Rectangle::default(),
        };
        for entry in iter {
            mbr.expand(entry.mbr());
        }
        mbr
    }

    /// 把整棵子树的数据条目收集到 `out`
    pub fn flatten_into(self, out: &mut Vec<(Rectangle, T)>) {
        for entry in self.entries {
            match entry {
                Entry::Data { mbr, data } => out.push((mbr, data)),
                Entry::Node { node, .. } => node.flatten_into(out),
            }
        }
    }
}
