//! Storage for UFR calculations and feedback messages.
//!
//! Database operations go through the Repository pattern so the in-memory
//! and Postgres backends can be swapped without touching callers.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (calculation pipeline, REST API)     │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs)                            │
//! │  - Logging and error context                            │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Traits (repository/)                        │
//! │  - UfrRecordRepository, FeedbackRepository              │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┴──────────────────┐
//!     │ LocalRepository │ PostgresRepository │
//!     │  (in-memory)    │  (diesel + r2d2)   │
//!     └──────────────────────────────────┘
//! ```
//!
//! # Recommended Usage
//!
//! ```ignore
//! use ufr_insight::db::{services, RepositoryFactory, RepositoryType};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = RepositoryFactory::create(RepositoryType::Local, None).await?;
//!     let records = services::list_records(repo.as_ref()).await?;
//!     println!("{} records", records.len());
//!     Ok(())
//! }
//! ```

// Feature flag priority: postgres > local
// When both features are enabled, postgres takes precedence for the global repository.
#[cfg(not(any(feature = "postgres-repo", feature = "local-repo")))]
compile_error!("Enable at least one repository backend feature.");

pub mod factory;
pub mod repo_config;
pub mod repositories;
pub mod repository;
pub mod services;


// Postgres config is colocated with the repository implementation.
#[cfg(feature = "postgres-repo")]
pub use repositories::postgres::PostgresConfig;
#[cfg(not(feature = "postgres-repo"))]
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    _private: (),
}

pub use services::{
    health_check, list_feedback, list_records, store_feedback, store_record,
};

pub use repo_config::RepositoryConfig;

pub use factory::{RepositoryFactory, RepositoryType};
pub use repositories::LocalRepository;
#[cfg(feature = "postgres-repo")]
pub use repositories::PostgresRepository;
pub use repository::{
    ErrorContext, FeedbackRepository, FullRepository, RepositoryError, RepositoryResult,
    UfrRecordRepository,
};

use anyhow::{Context, Result};
use std::sync::{Arc, OnceLock};

/// Global repository instance initialized once per process.
static REPOSITORY: OnceLock<Arc<dyn FullRepository>> = OnceLock::new();

// Priority: postgres > local
#[cfg(feature = "postgres-repo")]
async fn create_selected_repository() -> RepositoryResult<Arc<dyn FullRepository>> {
    match RepositoryType::from_env() {
        RepositoryType::Local => Ok(RepositoryFactory::create_local()),
        RepositoryType::Postgres => {
            let config = PostgresConfig::from_env().map_err(RepositoryError::configuration)?;
            let repo = RepositoryFactory::create_postgres(&config).await?;
            Ok(repo as Arc<dyn FullRepository>)
        }
    }
}

#[cfg(all(feature = "local-repo", not(feature = "postgres-repo")))]
async fn create_selected_repository() -> RepositoryResult<Arc<dyn FullRepository>> {
    Ok(RepositoryFactory::create_local())
}

/// Initialize the global repository singleton for the selected backend.
///
/// A `repository.toml` in one of the standard locations wins over the
/// environment. Calling this twice is a no-op.
pub async fn init_repository() -> Result<()> {
    if REPOSITORY.get().is_some() {
        return Ok(());
    }

    let has_config_file = RepositoryConfig::search_paths()
        .iter()
        .any(|path| path.exists());
    let repo = if has_config_file {
        RepositoryFactory::from_default_config().await
    } else {
        create_selected_repository().await
    }
    .map_err(|e| anyhow::Error::msg(e.to_string()))
    .context("Failed to initialize repository")?;

    let _ = REPOSITORY.set(repo);
    Ok(())
}

/// Get a reference to the global repository instance.
pub fn get_repository() -> Result<&'static Arc<dyn FullRepository>> {
    REPOSITORY
        .get()
        .context("Database not initialized. Call init_repository() first.")
}
