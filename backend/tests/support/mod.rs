//! Shared helpers for tests that touch repository selection.

#![allow(dead_code)]

use std::io::Write;
use std::sync::Mutex;

use tempfile::NamedTempFile;

/// Every environment variable that influences which repository is built and how.
pub const REPOSITORY_ENV_KEYS: &[&str] = &[
    "REPOSITORY_TYPE",
    "DATABASE_URL",
    "PG_DATABASE_URL",
    "PG_POOL_MAX",
    "PG_POOL_MIN",
    "PG_CONN_TIMEOUT_SEC",
    "PG_IDLE_TIMEOUT_SEC",
    "PG_MAX_RETRIES",
    "PG_RETRY_DELAY_MS",
];

// Tests in one binary share the process environment.
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Run `f` with exactly `vars` set among [`REPOSITORY_ENV_KEYS`].
///
/// Repository keys not listed are removed for the duration of `f`, so a
/// developer's `DATABASE_URL` never leaks into a test. The previous values
/// come back afterwards, also on panic.
pub fn with_repository_env<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _restore = RestoreOnDrop::capture();

    for key in REPOSITORY_ENV_KEYS {
        std::env::remove_var(key);
    }
    for (key, value) in vars {
        std::env::set_var(key, value);
    }

    f()
}

/// Write a `repository.toml` with `contents` to a temporary file.
pub fn repository_toml(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

struct RestoreOnDrop {
    saved: Vec<(&'static str, Option<String>)>,
}

impl RestoreOnDrop {
    fn capture() -> Self {
        let saved = REPOSITORY_ENV_KEYS
            .iter()
            .map(|key| (*key, std::env::var(key).ok()))
            .collect();
        Self { saved }
    }
}

impl Drop for RestoreOnDrop {
    fn drop(&mut self) {
        for (key, value) in &self.saved {
            match value {
                Some(value) => std::env::set_var(key, value),
                None => std::env::remove_var(key),
            }
        }
    }
}
