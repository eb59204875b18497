//! Integration tests for the in-memory repository through the store traits.

use chrono::{Duration, TimeZone, Utc};
use std::sync::Arc;

use ufr_insight::db::{
    services, FeedbackRepository, FullRepository, LocalRepository, RepositoryError,
    UfrRecordRepository,
};
use ufr_insight::models::{NewFeedback, NewUfrRecord, RecordId, RemarkKind};

fn new_record(minutes: i64, ufr: f64) -> NewUfrRecord {
    NewUfrRecord {
        fluid_removed: "2500".to_string(),
        patient_weight: "70".to_string(),
        treatment_time: "4".to_string(),
        ufr,
        remark: RemarkKind::SAFE_REMARK.to_string(),
        created_at: Utc.with_ymd_and_hms(2025, 5, 4, 12, 0, 0).unwrap()
            + Duration::minutes(minutes),
    }
}

#[tokio::test]
async fn test_records_come_back_ascending_with_ties_in_insert_order() {
    let repo = LocalRepository::new();
    repo.insert_record(&new_record(20, 1.0)).await.unwrap();
    repo.insert_record(&new_record(10, 2.0)).await.unwrap();
    repo.insert_record(&new_record(10, 3.0)).await.unwrap();

    let values: Vec<f64> = repo
        .query_all_records()
        .await
        .unwrap()
        .iter()
        .map(|r| r.ufr)
        .collect();
    assert_eq!(values, vec![2.0, 3.0, 1.0]);
}

#[tokio::test]
async fn test_clones_share_data() {
    let repo = LocalRepository::new();
    let shared: Arc<dyn FullRepository> = Arc::new(repo.clone());

    shared.insert_record(&new_record(0, 8.0)).await.unwrap();
    assert_eq!(repo.record_count(), 1);
}

#[tokio::test]
async fn test_ids_continue_after_failed_insert() {
    let repo = LocalRepository::new();
    repo.insert_record(&new_record(0, 8.0)).await.unwrap();

    repo.set_healthy(false);
    assert!(repo.insert_record(&new_record(1, 9.0)).await.is_err());
    repo.set_healthy(true);

    let stored = repo.insert_record(&new_record(2, 10.0)).await.unwrap();
    assert_eq!(stored.id, RecordId::new(2));
}

#[tokio::test]
async fn test_unhealthy_store_fails_every_operation() {
    let repo = LocalRepository::new();
    repo.set_healthy(false);

    assert!(matches!(
        repo.query_all_records().await,
        Err(RepositoryError::ConnectionError { .. })
    ));
    let feedback = NewFeedback {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        message: "Hello".to_string(),
    };
    let err = repo.insert_feedback(&feedback).await.unwrap_err();
    assert!(err.is_retryable());
    assert_eq!(err.context().entity.as_deref(), Some("feedback"));
}

#[tokio::test]
async fn test_service_layer_over_trait_object() {
    let repo: Arc<dyn FullRepository> = Arc::new(LocalRepository::new());
    services::store_record(repo.as_ref(), &new_record(0, 12.5))
        .await
        .unwrap();

    let records = services::list_records(repo.as_ref()).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].remark_kind(), Some(RemarkKind::Safe));
    assert!(services::health_check(repo.as_ref()).await.unwrap());
}

#[tokio::test]
async fn test_clear_resets_ids() {
    let repo = LocalRepository::new();
    repo.insert_record(&new_record(0, 8.0)).await.unwrap();
    repo.clear();

    let stored = repo.insert_record(&new_record(1, 9.0)).await.unwrap();
    assert_eq!(stored.id, RecordId::new(1));
    assert_eq!(repo.record_count(), 1);
}
