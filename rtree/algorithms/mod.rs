// R-tree算法模块
//
// 这个模块包含R-tree的所有核心算法实现，按功能分解为不同的子模块：
// - search: 范围搜索和全量扫描
// - insert: 插入、替换和子树选择
// - split: 沿最长轴的贴边分裂
// - delete: 删除、下溢摊平和重新插入
// - knn: 基于最小堆的最近邻遍历
// - load: OMT 批量加载
// - utils: 层级遍历和不变式检查

pub mod delete;
pub mod insert;
pub mod knn;
pub mod load;
pub mod search;
pub mod split;
pub mod utils;
