use colored::*;

use super::dataset::DatasetStats;
use crate::error::Result;
use crate::geometry::Rect;
use crate::object::{Feature, Object};

pub struct OutputFormatter;

impl OutputFormatter {
    pub fn format_stats(stats: &DatasetStats) -> String {
        let mut lines = vec![
            format!("{} {}", "features:".blue(), stats.features.to_string().cyan()),
            format!("{} {}", "points:".blue(), stats.points.to_string().cyan()),
            format!("{} {}", "bounds:".blue(), Self::format_rect(&stats.bounds)),
            format!("{} {}", "height:".blue(), stats.height.to_string().cyan()),
        ];
        for (kind, count) in &stats.kinds {
            lines.push(format!("  {} {}", format!("{}:", kind).green(), count));
        }
        lines.join("\n")
    }

    /// 每个要素一行：序号、id、类型和边界框
    pub fn format_features(features: &[&Feature]) -> String {
        if features.is_empty() {
            return "(empty list)".yellow().to_string();
        }
        features
            .iter()
            .enumerate()
            .map(|(i, feature)| {
                format!(
                    "{}) {}",
                    (i + 1).to_string().blue(),
                    Self::format_feature(feature)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// 带距离的要素列表
    pub fn format_nearby(results: &[(&Feature, f64)]) -> String {
        if results.is_empty() {
            return "(empty list)".yellow().to_string();
        }
        results
            .iter()
            .enumerate()
            .map(|(i, (feature, dist))| {
                format!(
                    "{}) {} {}",
                    (i + 1).to_string().blue(),
                    Self::format_feature(feature),
                    format!("(dist {})", dist).cyan()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn format_feature(feature: &Feature) -> String {
        let id = match &feature.id {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => "(nil)".to_string(),
        };
        format!(
            "{} {} {}",
            id.green(),
            feature.geometry.type_name(),
            Self::format_rect(&feature.geometry.rect())
        )
    }

    pub fn format_rect(rect: &Rect) -> String {
        rect.to_string().cyan().to_string()
    }

    pub fn format_error(err: &str) -> String {
        format!("(error) {}", err.red())
    }

    /// 要素列表按 FeatureCollection 输出
    pub fn features_json(features: &[&Feature]) -> Result<String> {
        let collection = Object::FeatureCollection(features.iter().map(|f| (*f).clone()).collect());
        Self::object_json(&collection)
    }

    pub fn object_json(object: &Object) -> Result<String> {
        Ok(serde_json::to_string_pretty(&object.to_geojson())?)
    }
}
