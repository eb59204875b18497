//! Safety classification of UFR values.

use crate::models::RemarkKind;

/// Highest UFR (ml/kg/hr) still considered safe. Inclusive.
pub const SAFE_UFR_THRESHOLD: f64 = 13.0;

/// Classify a (rounded) UFR value.
pub fn classify(ufr: f64) -> RemarkKind {
    if ufr <= SAFE_UFR_THRESHOLD {
        RemarkKind::Safe
    } else {
        RemarkKind::AtRisk
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_safe() {
        assert_eq!(classify(13.0), RemarkKind::Safe);
        assert_eq!(classify(13.00), RemarkKind::Safe);
    }

    #[test]
    fn test_just_above_threshold_is_at_risk() {
        assert_eq!(classify(13.01), RemarkKind::AtRisk);
    }

    #[test]
    fn test_typical_values() {
        assert_eq!(classify(8.93), RemarkKind::Safe);
        assert_eq!(classify(27.78), RemarkKind::AtRisk);
        assert_eq!(classify(0.01), RemarkKind::Safe);
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            classify(8.93).message(),
            "UFR is below 13 ml/kg/hr, considered safe"
        );
        assert_eq!(
            classify(27.78).message(),
            "UFR is above 13 ml/kg/hr, considered at risk"
        );
    }
}
