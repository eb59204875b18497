pub mod calculator;
pub mod feedback;
pub mod features;
pub mod history;

#[cfg(test)]
mod tests {
    #[test]
    fn test_module_structure() {
        // Route names stay stable for logging and API docs
        assert_eq!(super::calculator::CALCULATE_UFR, "calculate_ufr");
        assert_eq!(super::history::GET_UFR_HISTORY, "get_ufr_history");
        assert_eq!(super::history::LIST_UFR_RECORDS, "list_ufr_records");
        assert_eq!(super::feedback::SUBMIT_FEEDBACK, "submit_feedback");
        assert_eq!(super::features::GET_FEATURE_SAMPLE, "get_feature_sample");
    }
}
