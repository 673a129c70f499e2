pub mod algorithms;
pub mod node;
pub mod queue;
pub mod rectangle;
#[allow(clippy::module_inception)]
pub mod rtree;

// 重新导出主要类型
pub use algorithms::utils::{Child, ChildData};
pub use node::{Entry, Node};
pub use queue::{Priority, PriorityQueue};
pub use rectangle::Rectangle;
pub use rtree::{RTree, DEFAULT_MAX_ENTRIES};
