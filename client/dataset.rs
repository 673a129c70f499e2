use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, info};

use crate::clip::clip_to_rect;
use crate::config::SpatioConfig;
use crate::error::Result;
use crate::geometry::{IndexOptions, Point, Rect};
use crate::object::{Feature, Object};
use crate::rtree::RTree;

/// 从 GeoJSON 文件载入、按边界框建好索引的一组要素
pub struct Dataset {
    features: Vec<Feature>,
    tree: RTree<usize>,
    options: IndexOptions,
}

/// 数据集统计信息
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetStats {
    pub features: usize,
    pub points: usize,
    pub bounds: Rect,
    pub height: usize,
    pub kinds: BTreeMap<&'static str, usize>,
}

impl Dataset {
    /// 读取 GeoJSON 文件
    pub fn load(path: impl AsRef<Path>, config: &SpatioConfig) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let object = Object::parse(&text, &config.index_options())?;
        let dataset = Dataset::from_object(object, config);
        info!("Loaded {} features from {}", dataset.len(), path.display());
        Ok(dataset)
    }

    /// FeatureCollection 展开成多个要素，其余对象作为单个要素
    pub fn from_object(object: Object, config: &SpatioConfig) -> Self {
        let features = match object {
            Object::FeatureCollection(features) => features,
            Object::Feature(feature) => vec![*feature],
            other => vec![Feature::new(other)],
        };
        let mut tree = config.new_tree();
        tree.load(features.iter().enumerate().filter_map(|(i, feature)| {
            if feature.geometry.empty() {
                return None;
            }
            let rect = feature.geometry.rect();
            let (min, max): ([f64; 2], [f64; 2]) = (rect.min.into(), rect.max.into());
            Some((min, max, i))
        }));
        debug!(
            "Indexed {} of {} features, tree height {}",
            tree.len(),
            features.len(),
            tree.height()
        );
        Dataset {
            features,
            tree,
            options: config.index_options(),
        }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn stats(&self) -> DatasetStats {
        let mut kinds = BTreeMap::new();
        for feature in &self.features {
            *kinds.entry(feature.geometry.type_name()).or_insert(0) += 1;
        }
        let (min, max) = self.tree.bounds();
        DatasetStats {
            features: self.features.len(),
            points: self.features.iter().map(|f| f.geometry.num_points()).sum(),
            bounds: Rect::new(min[0], min[1], max[0], max[1]),
            height: self.tree.height(),
            kinds,
        }
    }

    /// 与矩形相交的要素，按载入顺序返回
    pub fn search(&self, bounds: Rect) -> Vec<&Feature> {
        let target = Object::Rect(bounds);
        self.candidates(bounds)
            .into_iter()
            .filter(|feature| feature.geometry.intersects(&target))
            .collect()
    }

    /// 整个落在矩形内的要素
    pub fn within(&self, bounds: Rect) -> Vec<&Feature> {
        let target = Object::Rect(bounds);
        self.candidates(bounds)
            .into_iter()
            .filter(|feature| feature.geometry.within(&target))
            .collect()
    }

    /// 离点最近的 `limit` 个要素及其边界框到点的距离
    pub fn nearby(&self, point: Point, limit: usize) -> Vec<(&Feature, f64)> {
        self.tree
            .nearby(point.into(), point.into(), limit)
            .into_iter()
            .map(|(&i, dist)| (&self.features[i], dist))
            .collect()
    }

    /// 用矩形裁剪所有要素，结果为 FeatureCollection
    pub fn clip(&self, bounds: Rect) -> Object {
        clip_to_rect(
            &Object::FeatureCollection(self.features.clone()),
            bounds,
            &self.options,
        )
    }

    fn candidates(&self, bounds: Rect) -> Vec<&Feature> {
        let mut indices: Vec<usize> = self
            .tree
            .search_items(bounds.min.into(), bounds.max.into())
            .into_iter()
            .copied()
            .collect();
        indices.sort_unstable();
        indices.into_iter().map(|i| &self.features[i]).collect()
    }
}
