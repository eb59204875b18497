use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{RemarkKind, UfrRecord};
use crate::services::history::{summarize, HistoryPoint, HistorySummary, UfrHistorySeries};

// =========================================================
// History types + route
// =========================================================

/// Plot-ready UFR trend.
///
/// `timestamps`, `values` and `threshold` are parallel arrays; `threshold`
/// is the constant safe line drawn behind the series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryData {
    pub points: Vec<HistoryPoint>,
    pub timestamps: Vec<DateTime<Utc>>,
    pub values: Vec<f64>,
    pub threshold: Vec<f64>,
    pub summary: HistorySummary,
}

impl From<&UfrHistorySeries> for HistoryData {
    fn from(series: &UfrHistorySeries) -> Self {
        Self {
            points: series.points().to_vec(),
            timestamps: series.timestamps(),
            values: series.values(),
            threshold: series.threshold_line(),
            summary: summarize(series),
        }
    }
}

/// A stored record as returned by the records listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordEntry {
    #[serde(flatten)]
    pub record: UfrRecord,
    /// Parsed remark, `None` if the stored text is not recognised.
    pub remark_kind: Option<RemarkKind>,
}

impl From<UfrRecord> for RecordEntry {
    fn from(record: UfrRecord) -> Self {
        let remark_kind = record.remark_kind();
        Self {
            record,
            remark_kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordList {
    pub records: Vec<RecordEntry>,
    pub total: usize,
}

impl From<Vec<UfrRecord>> for RecordList {
    fn from(records: Vec<UfrRecord>) -> Self {
        let records: Vec<RecordEntry> = records.into_iter().map(Into::into).collect();
        let total = records.len();
        Self { records, total }
    }
}

pub const GET_UFR_HISTORY: &str = "get_ufr_history";
pub const LIST_UFR_RECORDS: &str = "list_ufr_records";
