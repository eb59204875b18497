use serde::{Deserialize, Serialize};

use super::history::HistoryData;
use crate::models::{RecordId, RemarkKind};
use crate::services::pipeline::{ComputedResult, StoreNotice};

// =========================================================
// Calculator types + route
// =========================================================

/// Result of one UFR calculation as shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationData {
    /// ml/kg/hr, two decimals.
    pub ufr: f64,
    pub remark: String,
    pub remark_kind: RemarkKind,
    pub persisted: bool,
    pub record_id: Option<RecordId>,
    pub notice: Option<String>,
    pub notice_kind: Option<StoreNotice>,
    pub history: HistoryData,
}

impl From<&ComputedResult> for CalculationData {
    fn from(result: &ComputedResult) -> Self {
        Self {
            ufr: result.ufr,
            remark: result.remark.message().to_string(),
            remark_kind: result.remark,
            persisted: result.persisted(),
            record_id: result.record.as_ref().map(|r| r.id),
            notice: result.notice.map(|n| n.message().to_string()),
            notice_kind: result.notice,
            history: HistoryData::from(&result.history),
        }
    }
}

pub const CALCULATE_UFR: &str = "calculate_ufr";
