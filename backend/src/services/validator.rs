//! Input validation for UFR calculation requests.
//!
//! Raw form values arrive as text. They are parsed, checked for positivity and
//! the treatment duration is capped at [`MAX_TREATMENT_HOURS`]. Values whose
//! rate does not fit a decimal (absurd magnitudes such as `1e300`) are
//! rejected as not-a-number. A request is either fully valid or rejected as a
//! whole.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{InputField, SubmittedValues, UfrInput};
use crate::services::calculator::as_decimal;

/// Upper bound (inclusive) for a single treatment session.
pub const MAX_TREATMENT_HOURS: f64 = 24.0;

/// Raw calculator form values, as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawUfrInput {
    pub fluid_removed: String,
    pub patient_weight: String,
    pub treatment_time: String,
}

impl RawUfrInput {
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

/// Reasons a calculation request is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a valid number for {field}.")]
    NotANumber { field: InputField },

    #[error("{field} must be greater than zero.")]
    NonPositiveValue { field: InputField },

    #[error("Treatment duration must not exceed 24 hours.")]
    DurationOutOfRange,
}

impl ValidationError {
    /// Stable error code for API consumers.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::NotANumber { .. } => "NOT_A_NUMBER",
            ValidationError::NonPositiveValue { .. } => "NON_POSITIVE_VALUE",
            ValidationError::DurationOutOfRange => "DURATION_OUT_OF_RANGE",
        }
    }

    /// The offending field.
    pub fn field(&self) -> InputField {
        match self {
            ValidationError::NotANumber { field } | ValidationError::NonPositiveValue { field } => {
                *field
            }
            ValidationError::DurationOutOfRange => InputField::TreatmentTime,
        }
    }
}

/// Validate the three raw inputs.
///
/// Checks run in a fixed order: every field must parse first, then every
/// field must be positive, then the duration cap applies. Within each stage
/// fields are checked as fluid, weight, time.
pub fn validate(
    fluid_removed_ml: &str,
    patient_weight_kg: &str,
    treatment_hours: &str,
) -> Result<UfrInput, ValidationError> {
    let fluid = parse_field(fluid_removed_ml, InputField::FluidRemoved)?;
    let weight = parse_field(patient_weight_kg, InputField::PatientWeight)?;
    let hours = parse_field(treatment_hours, InputField::TreatmentTime)?;

    check_ranges(fluid, weight, hours)?;
    let rate = exact_rate(fluid, weight, hours)?;

    Ok(UfrInput::new(
        fluid,
        weight,
        hours,
        rate,
        SubmittedValues::new(fluid_removed_ml, patient_weight_kg, treatment_hours),
    ))
}

/// Validate a [`RawUfrInput`].
pub fn validate_raw(raw: &RawUfrInput) -> Result<UfrInput, ValidationError> {
    validate(&raw.fluid_removed, &raw.patient_weight, &raw.treatment_time)
}

/// Apply the same rules to values that are already numeric.
pub fn validate_values(
    fluid_removed_ml: f64,
    patient_weight_kg: f64,
    treatment_hours: f64,
) -> Result<UfrInput, ValidationError> {
    for (value, field) in [
        (fluid_removed_ml, InputField::FluidRemoved),
        (patient_weight_kg, InputField::PatientWeight),
        (treatment_hours, InputField::TreatmentTime),
    ] {
        if !value.is_finite() {
            return Err(ValidationError::NotANumber { field });
        }
    }

    check_ranges(fluid_removed_ml, patient_weight_kg, treatment_hours)?;
    let rate = exact_rate(fluid_removed_ml, patient_weight_kg, treatment_hours)?;

    Ok(UfrInput::new(
        fluid_removed_ml,
        patient_weight_kg,
        treatment_hours,
        rate,
        SubmittedValues::new(
            fluid_removed_ml.to_string(),
            patient_weight_kg.to_string(),
            treatment_hours.to_string(),
        ),
    ))
}

fn parse_field(raw: &str, field: InputField) -> Result<f64, ValidationError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(ValidationError::NotANumber { field })
}

fn check_ranges(fluid: f64, weight: f64, hours: f64) -> Result<(), ValidationError> {
    for (value, field) in [
        (fluid, InputField::FluidRemoved),
        (weight, InputField::PatientWeight),
        (hours, InputField::TreatmentTime),
    ] {
        if value <= 0.0 {
            return Err(ValidationError::NonPositiveValue { field });
        }
    }

    if hours > MAX_TREATMENT_HOURS {
        return Err(ValidationError::DurationOutOfRange);
    }

    Ok(())
}

/// `ml / (kg * hours)` as a decimal, or the field that makes it unrepresentable.
fn exact_rate(fluid: f64, weight: f64, hours: f64) -> Result<Decimal, ValidationError> {
    let not_a_number = |field| ValidationError::NotANumber { field };

    let fluid = as_decimal(fluid).ok_or(not_a_number(InputField::FluidRemoved))?;
    let weight = as_decimal(weight).ok_or(not_a_number(InputField::PatientWeight))?;
    let hours = as_decimal(hours).ok_or(not_a_number(InputField::TreatmentTime))?;

    let denominator = weight
        .checked_mul(hours)
        .filter(|d| !d.is_zero())
        .ok_or(not_a_number(InputField::PatientWeight))?;
    fluid
        .checked_div(denominator)
        .ok_or(not_a_number(InputField::FluidRemoved))
}
