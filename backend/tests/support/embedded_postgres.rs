//! Embedded PostgreSQL for the Diesel adapter suites.
//!
//! One cluster is shared per test binary; every test gets its own temporary
//! database. Set `SKIP_TEST_CLUSTER=1` where the cluster cannot start.

use std::time::Duration;

use pg_embedded_setup_unpriv::{ClusterHandle, TemporaryDatabase};
use uuid::Uuid;

const CLUSTER_RETRIES: usize = 5;
const CLUSTER_RETRY_DELAY: Duration = Duration::from_millis(500);

/// True when `SKIP_TEST_CLUSTER` is "1", "true" or "yes".
pub fn should_skip_test_cluster() -> bool {
    std::env::var("SKIP_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Skip (returning `None`) when allowed, otherwise fail loudly.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if should_skip_test_cluster() {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("Test cluster setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}

/// The binary-wide cluster, started on first use.
pub fn shared_cluster() -> Result<&'static ClusterHandle, String> {
    ensure_stable_password();
    let mut attempt = 1;
    loop {
        match pg_embedded_setup_unpriv::test_support::shared_cluster_handle() {
            Ok(handle) => return Ok(handle),
            Err(error) if attempt < CLUSTER_RETRIES => {
                eprintln!("pg-embed: attempt {attempt}/{CLUSTER_RETRIES} failed: {error:?}");
                std::thread::sleep(CLUSTER_RETRY_DELAY);
                attempt += 1;
            }
            Err(error) => return Err(format!("{error:?}")),
        }
    }
}

/// A fresh, empty database dropped when the handle is.
pub fn temporary_database() -> Result<TemporaryDatabase, String> {
    let cluster = shared_cluster()?;
    let name = format!("bookstore_test_{}", Uuid::new_v4().simple());
    cluster
        .temporary_database(name.as_str())
        .map_err(|error| format!("create {name}: {error:?}"))
}

// A reused data directory keeps the password from its first initdb.
fn ensure_stable_password() {
    if std::env::var_os("PG_PASSWORD").is_none() {
        // SAFETY: runs before the cluster bootstrap spawns threads.
        unsafe {
            std::env::set_var("PG_PASSWORD", "bookstore_embedded_test");
        }
    }
}
