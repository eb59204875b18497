use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::RecordId;

/// One of the three calculator inputs, used to report which field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    FluidRemoved,
    PatientWeight,
    TreatmentTime,
}

impl InputField {
    /// Column / JSON key for this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            InputField::FluidRemoved => "fluid_removed",
            InputField::PatientWeight => "patient_weight",
            InputField::TreatmentTime => "treatment_time",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            InputField::FluidRemoved => "Fluid removed (ml)",
            InputField::PatientWeight => "Patient dry weight (kg)",
            InputField::TreatmentTime => "Treatment duration (hrs)",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The three inputs exactly as the user submitted them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedValues {
    pub fluid_removed: String,
    pub patient_weight: String,
    pub treatment_time: String,
}

impl SubmittedValues {
    pub fn new(
        fluid_removed: impl Into<String>,
        patient_weight: impl Into<String>,
        treatment_time: impl Into<String>,
    ) -> Self {
        Self {
            fluid_removed: fluid_removed.into(),
            patient_weight: patient_weight.into(),
            treatment_time: treatment_time.into(),
        }
    }
}

/// A fully validated calculation request.
///
/// Only [`crate::services::validator`] constructs this type, so holding one
/// means every constraint already holds: fluid and weight are positive, the
/// treatment duration lies in `(0, 24]` hours and the rate is representable.
#[derive(Debug, Clone, PartialEq)]
pub struct UfrInput {
    fluid_removed_ml: f64,
    fluid_removed_liters: f64,
    patient_weight_kg: f64,
    treatment_hours: f64,
    exact_rate: Decimal,
    submitted: SubmittedValues,
}

impl UfrInput {
    pub(crate) fn new(
        fluid_removed_ml: f64,
        patient_weight_kg: f64,
        treatment_hours: f64,
        exact_rate: Decimal,
        submitted: SubmittedValues,
    ) -> Self {
        Self {
            fluid_removed_ml,
            fluid_removed_liters: fluid_removed_ml / 1000.0,
            patient_weight_kg,
            treatment_hours,
            exact_rate,
            submitted,
        }
    }

    pub fn fluid_removed_ml(&self) -> f64 {
        self.fluid_removed_ml
    }

    pub fn fluid_removed_liters(&self) -> f64 {
        self.fluid_removed_liters
    }

    pub fn patient_weight_kg(&self) -> f64 {
        self.patient_weight_kg
    }

    pub fn treatment_hours(&self) -> f64 {
        self.treatment_hours
    }

    /// Unrounded `ml / (kg * hours)` in decimal arithmetic.
    pub fn exact_rate(&self) -> Decimal {
        self.exact_rate
    }

    pub fn submitted(&self) -> &SubmittedValues {
        &self.submitted
    }
}

/// Binary safety classification of a UFR value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemarkKind {
    Safe,
    AtRisk,
}

impl RemarkKind {
    pub const SAFE_REMARK: &'static str = "UFR is below 13 ml/kg/hr, considered safe";
    pub const AT_RISK_REMARK: &'static str = "UFR is above 13 ml/kg/hr, considered at risk";

    /// User-facing remark persisted alongside each record.
    pub fn message(&self) -> &'static str {
        match self {
            RemarkKind::Safe => Self::SAFE_REMARK,
            RemarkKind::AtRisk => Self::AT_RISK_REMARK,
        }
    }

    /// Parse a stored remark back into its kind.
    pub fn from_remark(remark: &str) -> Option<Self> {
        match remark.trim() {
            Self::SAFE_REMARK => Some(RemarkKind::Safe),
            Self::AT_RISK_REMARK => Some(RemarkKind::AtRisk),
            _ => None,
        }
    }

    pub fn is_safe(&self) -> bool {
        matches!(self, RemarkKind::Safe)
    }
}

impl fmt::Display for RemarkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Insert payload for the `ufr_data` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUfrRecord {
    pub fluid_removed: String,
    pub patient_weight: String,
    pub treatment_time: String,
    pub ufr: f64,
    pub remark: String,
    pub created_at: DateTime<Utc>,
}

impl NewUfrRecord {
    /// Build the record for a computed value, copying the inputs as submitted.
    pub fn from_calculation(
        input: &UfrInput,
        ufr: f64,
        remark: RemarkKind,
        created_at: DateTime<Utc>,
    ) -> Self {
        let submitted = input.submitted();
        Self {
            fluid_removed: submitted.fluid_removed.clone(),
            patient_weight: submitted.patient_weight.clone(),
            treatment_time: submitted.treatment_time.clone(),
            ufr,
            remark: remark.message().to_string(),
            created_at,
        }
    }
}

/// A persisted UFR calculation. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UfrRecord {
    pub id: RecordId,
    pub fluid_removed: String,
    pub patient_weight: String,
    pub treatment_time: String,
    pub ufr: f64,
    pub remark: String,
    pub created_at: DateTime<Utc>,
}

impl UfrRecord {
    pub fn from_new(id: RecordId, record: NewUfrRecord) -> Self {
        Self {
            id,
            fluid_removed: record.fluid_removed,
            patient_weight: record.patient_weight,
            treatment_time: record.treatment_time,
            ufr: record.ufr,
            remark: record.remark,
            created_at: record.created_at,
        }
    }

    pub fn remark_kind(&self) -> Option<RemarkKind> {
        RemarkKind::from_remark(&self.remark)
    }
}
