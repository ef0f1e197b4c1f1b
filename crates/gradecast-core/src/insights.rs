//! Reference data published alongside predictions: GPA bands per category and
//! per-feature dataset statistics.

use serde::{Deserialize, Serialize};

use crate::field_map::FieldMap;
use crate::format::{format_number, humanize};
use crate::prediction::style_key;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpaBand {
    /// e.g. `"3.0 - 3.7"`
    pub range: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// `GET /gpa_info`: category -> band.
pub type GpaBands = FieldMap<GpaBand>;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub std: f64,
}

/// `GET /dataset_stats`: feature -> summary statistics.
pub type DatasetStats = FieldMap<FeatureStats>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GpaBandRow {
    pub category: String,
    pub style: String,
    pub range: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsRow {
    pub name: String,
    pub min: String,
    pub max: String,
    pub mean: String,
    pub median: String,
    pub std: String,
}

pub fn render_gpa_bands(bands: &GpaBands) -> Vec<GpaBandRow> {
    bands
        .iter()
        .map(|(category, band)| GpaBandRow {
            category: category.to_string(),
            style: style_key(category),
            range: format!("GPA {}", band.range),
            description: band.description.clone(),
        })
        .collect()
}

pub fn render_dataset_stats(stats: &DatasetStats) -> Vec<StatsRow> {
    let two_places = |n: f64| format_number((n * 100.0).round() / 100.0);
    stats
        .iter()
        .map(|(name, s)| StatsRow {
            name: humanize(name),
            min: format_number(s.min),
            max: format_number(s.max),
            mean: two_places(s.mean),
            median: two_places(s.median),
            std: two_places(s.std),
        })
        .collect()
}
