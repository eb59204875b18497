use serde::{Deserialize, Serialize};

use crate::models::RemarkKind;
use crate::services::classifier::{classify, SAFE_UFR_THRESHOLD};

// =========================================================
// Feature sample types + route
// =========================================================

/// Average UFR per country shown on the feature charts (ml/kg/hr).
pub const SAMPLE_UFR_BY_COUNTRY: [(&str, f64); 8] = [
    ("USA", 8.5),
    ("UK", 6.9),
    ("India", 10.2),
    ("Germany", 7.8),
    ("Brazil", 9.1),
    ("Japan", 6.5),
    ("Canada", 7.4),
    ("Pakistan", 9.8),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub country: String,
    pub ufr: f64,
    pub remark_kind: RemarkKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSampleData {
    pub points: Vec<SamplePoint>,
    pub mean: f64,
    pub threshold: f64,
}

/// Build the static sample dataset, classifying each entry.
pub fn sample_data() -> FeatureSampleData {
    let points: Vec<SamplePoint> = SAMPLE_UFR_BY_COUNTRY
        .iter()
        .map(|&(country, ufr)| SamplePoint {
            country: country.to_string(),
            ufr,
            remark_kind: classify(ufr),
        })
        .collect();
    let mean = points.iter().map(|p| p.ufr).sum::<f64>() / points.len() as f64;

    FeatureSampleData {
        points,
        mean,
        threshold: SAFE_UFR_THRESHOLD,
    }
}

pub const GET_FEATURE_SAMPLE: &str = "get_feature_sample";
