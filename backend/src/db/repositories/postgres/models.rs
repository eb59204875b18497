use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::{feedback, ufr_data};
use crate::models::{
    Feedback, FeedbackId, NewFeedback, NewUfrRecord, RecordId, UfrRecord,
};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = ufr_data)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UfrDataRow {
    pub id: i64,
    pub fluid_removed: String,
    pub patient_weight: String,
    pub treatment_time: String,
    pub ufr: f64,
    pub remark: String,
    pub created_at: DateTime<Utc>,
}

impl From<UfrDataRow> for UfrRecord {
    fn from(row: UfrDataRow) -> Self {
        UfrRecord {
            id: RecordId::new(row.id),
            fluid_removed: row.fluid_removed,
            patient_weight: row.patient_weight,
            treatment_time: row.treatment_time,
            ufr: row.ufr,
            remark: row.remark,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = ufr_data)]
pub struct NewUfrDataRow {
    pub fluid_removed: String,
    pub patient_weight: String,
    pub treatment_time: String,
    pub ufr: f64,
    pub remark: String,
    pub created_at: DateTime<Utc>,
}

impl From<&NewUfrRecord> for NewUfrDataRow {
    fn from(record: &NewUfrRecord) -> Self {
        NewUfrDataRow {
            fluid_removed: record.fluid_removed.clone(),
            patient_weight: record.patient_weight.clone(),
            treatment_time: record.treatment_time.clone(),
            ufr: record.ufr,
            remark: record.remark.clone(),
            created_at: record.created_at,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = feedback)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct FeedbackRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<FeedbackRow> for Feedback {
    fn from(row: FeedbackRow) -> Self {
        Feedback {
            id: FeedbackId::new(row.id),
            name: row.name,
            email: row.email,
            message: row.message,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = feedback)]
pub struct NewFeedbackRow {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl From<&NewFeedback> for NewFeedbackRow {
    fn from(feedback: &NewFeedback) -> Self {
        NewFeedbackRow {
            name: feedback.name.clone(),
            email: feedback.email.clone(),
            message: feedback.message.clone(),
        }
    }
}
