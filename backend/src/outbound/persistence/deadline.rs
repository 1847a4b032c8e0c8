//! Per-call deadline for storage operations.

use std::future::Future;
use std::time::Duration;

use tracing::warn;

use super::error_mapping::StorageError;

/// Upper bound on pool checkout plus query execution for one call.
pub const QUERY_TIMEOUT: Duration = Duration::from_secs(3);

/// Run `work` under `limit`, dropping it on expiry.
///
/// Dropping only abandons the client side; the statement itself is cancelled
/// by the `statement_timeout` every pooled connection is opened with.
pub(crate) async fn run_with_deadline<T, E, F>(
    operation: &'static str,
    limit: Duration,
    work: F,
) -> Result<T, E>
where
    E: StorageError,
    F: Future<Output = Result<T, E>>,
{
    match tokio::time::timeout(limit, work).await {
        Ok(result) => result,
        Err(_) => {
            let millis = u64::try_from(limit.as_millis()).unwrap_or(u64::MAX);
            warn!(operation, millis, "storage call exceeded its deadline");
            Err(E::timeout(operation, millis))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::BookRepositoryError;

    #[tokio::test(start_paused = true)]
    async fn expiry_yields_timeout_error() {
        let slow = async {
            tokio::time::sleep(Duration::from_secs(10)).await;
            Ok::<_, BookRepositoryError>(())
        };

        let result = run_with_deadline("list_books", QUERY_TIMEOUT, slow).await;

        assert_eq!(
            result,
            Err(BookRepositoryError::timeout("list_books", 3000_u64))
        );
    }

    #[tokio::test]
    async fn completed_work_passes_through() {
        let result = run_with_deadline("delete_book", QUERY_TIMEOUT, async {
            Err::<(), _>(BookRepositoryError::query("boom"))
        })
        .await;

        assert_eq!(result, Err(BookRepositoryError::query("boom")));
    }
}
