//! Property tests for the validator, calculator, classifier and history aggregator.

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;

use ufr_insight::models::{InputField, RecordId, RemarkKind, UfrRecord};
use ufr_insight::services::{
    calculator, classifier, history, validator, ValidationError, SAFE_UFR_THRESHOLD,
};

fn record_at(id: i64, minutes: i64, ufr: f64) -> UfrRecord {
    UfrRecord {
        id: RecordId::new(id),
        fluid_removed: "1000".to_string(),
        patient_weight: "70".to_string(),
        treatment_time: "4".to_string(),
        ufr,
        remark: classifier::classify(ufr).message().to_string(),
        created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap() + Duration::minutes(minutes),
    }
}

proptest! {
    #[test]
    fn prop_compute_matches_formula(
        ml in 1.0..10_000.0f64,
        kg in 1.0..250.0f64,
        hours in 0.1..24.0f64,
    ) {
        let input = validator::validate_values(ml, kg, hours).unwrap();
        let ufr = calculator::compute(&input);
        let exact = ml / (kg * hours);

        prop_assert!((ufr - exact).abs() <= 0.005 + 1e-9 * exact.max(1.0));
        // Two decimals exactly
        prop_assert!(((ufr * 100.0).round() - ufr * 100.0).abs() < 1e-6);
    }

    #[test]
    fn prop_text_and_numeric_validation_agree(
        ml in 1.0..10_000.0f64,
        kg in 1.0..250.0f64,
        hours in 0.1..24.0f64,
    ) {
        let from_text =
            validator::validate(&ml.to_string(), &kg.to_string(), &hours.to_string()).unwrap();
        let from_values = validator::validate_values(ml, kg, hours).unwrap();
        prop_assert_eq!(calculator::compute(&from_text), calculator::compute(&from_values));
    }

    #[test]
    fn prop_non_positive_weight_rejected(kg in -1_000.0..=0.0f64) {
        let result = validator::validate("2500", &kg.to_string(), "4");
        prop_assert_eq!(
            result.unwrap_err(),
            ValidationError::NonPositiveValue { field: InputField::PatientWeight }
        );
    }

    #[test]
    fn prop_duration_over_cap_rejected(hours in 24.000_001..1_000.0f64) {
        let result = validator::validate_values(2500.0, 70.0, hours);
        prop_assert_eq!(result.unwrap_err(), ValidationError::DurationOutOfRange);
    }

    #[test]
    fn prop_classification_matches_threshold(ufr in 0.0..60.0f64) {
        let kind = classifier::classify(ufr);
        prop_assert_eq!(kind.is_safe(), ufr <= SAFE_UFR_THRESHOLD);
        prop_assert_eq!(
            kind,
            if ufr <= 13.0 { RemarkKind::Safe } else { RemarkKind::AtRisk }
        );
    }

    #[test]
    fn prop_rebuild_sorted_and_idempotent(offsets in prop::collection::vec(0i64..10_000, 0..40)) {
        let records: Vec<UfrRecord> = offsets
            .iter()
            .enumerate()
            .map(|(i, m)| record_at(i as i64 + 1, *m, (i % 30) as f64))
            .collect();

        let series = history::rebuild(&records);
        prop_assert_eq!(series.len(), records.len());
        prop_assert!(series.timestamps().windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(&series, &history::rebuild(&records));
        prop_assert_eq!(series.threshold_line().len(), series.len());
    }
}
