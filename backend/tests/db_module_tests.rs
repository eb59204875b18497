//! Tests for database module exports and the global repository.

mod support;

use ufr_insight::db;
use ufr_insight::db::UfrRecordRepository;

#[test]
fn test_db_module_has_service_functions() {
    // Compile-time check that the service layer is exported
    let _: fn() = || {
        let _ = db::health_check::<db::LocalRepository>;
        let _ = db::store_record::<db::LocalRepository>;
        let _ = db::list_records::<db::LocalRepository>;
        let _ = db::store_feedback::<db::LocalRepository>;
        let _ = db::list_feedback::<db::LocalRepository>;
    };
}

#[cfg(feature = "postgres-repo")]
#[test]
fn test_postgres_config_from_env_requires_url() {
    support::with_repository_env(&[], || {
        assert!(db::PostgresConfig::from_env().is_err());
    });
}

#[cfg(feature = "postgres-repo")]
#[test]
fn test_postgres_config_from_env_reads_pool_settings() {
    support::with_repository_env(
        &[
            ("DATABASE_URL", "postgres://ufr@localhost/ufr"),
            ("PG_POOL_MAX", "4"),
            ("PG_RETRY_DELAY_MS", "not-a-number"),
        ],
        || {
            let config = db::PostgresConfig::from_env().unwrap();
            assert_eq!(config.database_url, "postgres://ufr@localhost/ufr");
            assert_eq!(config.max_pool_size, 4);
            assert_eq!(config.retry_delay_ms, 100);
        },
    );
}

#[test]
fn test_init_and_get_global_repository() {
    support::with_repository_env(&[("REPOSITORY_TYPE", "local")], || {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        runtime.block_on(async {
            db::init_repository().await.unwrap();
            // Second call is a no-op
            db::init_repository().await.unwrap();

            let repo = db::get_repository().unwrap();
            assert!(repo.health_check().await.unwrap());
        });
    });
}
