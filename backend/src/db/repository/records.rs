//! Record store trait for UFR calculations.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::{NewUfrRecord, UfrRecord};

/// Repository trait for the `ufr_data` table.
///
/// Records are append-only: this system never updates or deletes them.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait UfrRecordRepository: Send + Sync {
    /// Check if the store is reachable.
    ///
    /// # Returns
    /// - `Ok(true)` if connection is healthy
    /// - `Ok(false)` if connection is unhealthy but no error occurred
    /// - `Err(RepositoryError)` if an error occurred during the check
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Persist a new calculation.
    ///
    /// # Returns
    /// * `Ok(UfrRecord)` - The stored record including its assigned ID
    /// * `Err(RepositoryError)` - If the write fails
    async fn insert_record(&self, record: &NewUfrRecord) -> RepositoryResult<UfrRecord>;

    /// Fetch every stored calculation ordered by `created_at` ascending.
    async fn query_all_records(&self) -> RepositoryResult<Vec<UfrRecord>>;
}
