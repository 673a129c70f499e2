//! 错误类型
//!
//! 几何、R-tree 和裁剪核心本身不会出错，错误只出现在边缘：
//! GeoJSON 解析、配置加载以及命令行读写文件。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpatioError {
    /// GeoJSON 文本无法解析
    #[error("GeoJSON parse error: {0}")]
    GeoJson(#[from] geojson::Error),

    /// JSON 序列化错误
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// 能解析但不支持的 GeoJSON 值
    #[error("Unsupported GeoJSON value: {0}")]
    Unsupported(String),

    /// 配置加载失败
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// 配置序列化失败
    #[error("Configuration serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// 配置内容不合法
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// 命令行参数不合法
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// IO 错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SpatioError>;
