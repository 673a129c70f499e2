use serde::{Deserialize, Serialize};

use crate::error::SpatioError;
use crate::geometry::{IndexKind, IndexOptions};
use crate::rtree::RTree;

/// 空间索引配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpatioConfig {
    /// R-tree 配置
    #[serde(default)]
    pub index: IndexConfig,

    /// 几何体段索引配置
    #[serde(default)]
    pub geometry: GeometryConfig,

    /// 日志配置
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// R-tree 配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexConfig {
    /// 节点最多子项数
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

/// 几何体段索引配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryConfig {
    /// 索引类型：none, rtree
    #[serde(default)]
    pub index_kind: IndexKind,

    /// 段数不少于该值时才建索引
    #[serde(default = "default_index_min_points")]
    pub index_min_points: usize,
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别：trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

// ============================================================================
// 默认值函数
// ============================================================================

fn default_max_entries() -> usize {
    32
}

fn default_index_min_points() -> usize {
    64
}

fn default_log_level() -> String {
    "info".to_string()
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

// ============================================================================
// 实现
// ============================================================================

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
        }
    }
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            index_kind: IndexKind::default(),
            index_min_points: default_index_min_points(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl SpatioConfig {
    /// 从文件加载配置
    ///
    /// 配置加载顺序（优先级从低到高）：
    /// 1. 默认配置（内嵌的 default.toml）
    /// 2. 用户配置文件（可选）
    /// 3. 环境变量（SPATIO__ 前缀，使用双下划线分隔嵌套）
    ///
    /// # 示例
    ///
    /// ```no_run
    /// use spatio_core::config::SpatioConfig;
    ///
    /// // 文件不存在时只用默认配置和环境变量
    /// let config = SpatioConfig::from_file("spatio.toml").unwrap();
    /// ```
    pub fn from_file(path: &str) -> crate::Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(
                include_str!("default.toml"),
                config::FileFormat::Toml,
            ))
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("SPATIO").separator("__"))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// 保存配置到文件
    pub fn save_to_file(&self, path: &str) -> crate::Result<()> {
        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }

    /// 验证配置
    ///
    /// - R-tree 节点子项数至少为 4
    /// - 日志级别必须是已知的级别
    pub fn validate(&self) -> crate::Result<()> {
        if self.index.max_entries < 4 {
            return Err(SpatioError::InvalidConfig(format!(
                "index.max_entries {} is below 4",
                self.index.max_entries
            )));
        }

        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(SpatioError::InvalidConfig(format!(
                "Invalid log level: '{}'. Must be one of: {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    /// 构造线和多边形时使用的索引选项
    pub fn index_options(&self) -> IndexOptions {
        IndexOptions {
            kind: self.geometry.index_kind,
            min_points: self.geometry.index_min_points,
        }
    }

    /// 按配置创建空的 R-tree
    pub fn new_tree<T>(&self) -> RTree<T> {
        RTree::with_max_entries(self.index.max_entries)
    }

    /// 打印配置摘要
    pub fn print_summary(&self) {
        println!("📋 Spatio Configuration:");
        println!("   Max Entries: {}", self.index.max_entries);
        println!(
            "   Segment Index: {}",
            match self.geometry.index_kind {
                IndexKind::None => "none".to_string(),
                IndexKind::RTree => format!("rtree (>= {} segments)", self.geometry.index_min_points),
            }
        );
        println!("   Log Level:   {}", self.logging.level);
        println!();
    }
}
