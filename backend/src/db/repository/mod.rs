//! Repository trait definitions for the record and feedback stores.
//!
//! # Module Organization
//!
//! - [`error`]: Error types for repository operations
//! - [`records`]: Append-only store of UFR calculations (`ufr_data`)
//! - [`feedback`]: Store of feedback form submissions (`feedback`)
//!
//! # Convenience Trait Bound
//!
//! Anything that implements both store traits is a [`FullRepository`]:
//!
//! ```ignore
//! async fn record_and_reload<R: FullRepository + ?Sized>(
//!     repo: &R,
//!     record: &NewUfrRecord,
//! ) -> RepositoryResult<Vec<UfrRecord>> {
//!     repo.insert_record(record).await?;
//!     repo.query_all_records().await
//! }
//! ```

pub mod error;
pub mod feedback;
pub mod records;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

pub use feedback::FeedbackRepository;
pub use records::UfrRecordRepository;

/// Composite trait bound for a complete repository implementation.
pub trait FullRepository: UfrRecordRepository + FeedbackRepository {}

// Blanket implementation: any type implementing both traits is a FullRepository
impl<T> FullRepository for T where T: UfrRecordRepository + FeedbackRepository {}
