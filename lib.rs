pub mod clip;
pub mod client;
pub mod config;
pub mod error;
pub mod geometry;
pub mod object;
pub mod rtree;

// 重新导出主要的公共接口
pub use clip::{clip, clip_to_rect};
pub use geometry::{Geometry, IndexKind, IndexOptions, Line, Point, Poly, Rect, Ring, Segment};
pub use object::{Feature, Object};
pub use rtree::{Entry, Node, RTree, Rectangle};

// 重新导出常用类型，便于二进制文件使用
pub use client::{CliArgs, Dataset, OutputFormatter};
pub use config::SpatioConfig;
pub use error::{Result, SpatioError};
