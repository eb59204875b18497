//! History aggregation for UFR trend display.
//!
//! The aggregator never talks to storage. Callers fetch the full record set
//! after each write and hand the snapshot to [`rebuild`], which produces a
//! series ordered by `created_at` and ready for plotting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::UfrRecord;
use crate::services::classifier::{classify, SAFE_UFR_THRESHOLD};

/// A single point on the UFR trend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub created_at: DateTime<Utc>,
    pub ufr: f64,
}

/// Ordered `(created_at, ufr)` series, ascending by `created_at`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UfrHistorySeries {
    points: Vec<HistoryPoint>,
}

impl UfrHistorySeries {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[HistoryPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// X axis values.
    pub fn timestamps(&self) -> Vec<DateTime<Utc>> {
        self.points.iter().map(|p| p.created_at).collect()
    }

    /// Y axis values, parallel to [`Self::timestamps`].
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.ufr).collect()
    }

    /// Constant safe-threshold line with one entry per point.
    pub fn threshold_line(&self) -> Vec<f64> {
        vec![SAFE_UFR_THRESHOLD; self.points.len()]
    }

    pub fn latest(&self) -> Option<&HistoryPoint> {
        self.points.last()
    }
}

/// Build the trend series from a full snapshot of records.
///
/// Sorting is stable, so records sharing a timestamp keep the order the
/// store returned them in.
pub fn rebuild(records: &[UfrRecord]) -> UfrHistorySeries {
    let mut points: Vec<HistoryPoint> = records
        .iter()
        .map(|r| HistoryPoint {
            created_at: r.created_at,
            ufr: r.ufr,
        })
        .collect();

    points.sort_by_key(|p| p.created_at);

    UfrHistorySeries { points }
}

/// Summary statistics over a series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistorySummary {
    pub count: usize,
    pub safe_count: usize,
    pub at_risk_count: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub latest: Option<f64>,
}

pub fn summarize(series: &UfrHistorySeries) -> HistorySummary {
    if series.is_empty() {
        return HistorySummary::default();
    }

    let values = series.values();
    let count = values.len();
    let safe_count = values.iter().filter(|v| classify(**v).is_safe()).count();
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = values.iter().sum::<f64>() / count as f64;

    HistorySummary {
        count,
        safe_count,
        at_risk_count: count - safe_count,
        min: Some(min),
        max: Some(max),
        mean: Some(mean),
        latest: series.latest().map(|p| p.ufr),
    }
}
