//! Single-retry policy for idempotent reads.

use mammon_shared::AppResult;
use tracing::warn;

/// Runs a read operation, retrying once if the failure is retryable.
///
/// Only transport-level unavailability is retried, and only when the
/// config enables read retries. Writes must never go through here: a
/// timed-out insert may already have landed, and retrying would create
/// a duplicate record.
pub(crate) async fn retry_read<T, F, Fut>(enabled: bool, operation: F) -> AppResult<T>
where
    F: Fn() -> Fut,
    Fut: Future<Output = AppResult<T>>,
{
    match operation().await {
        Err(err) if enabled && err.is_retryable() => {
            warn!(error = %err, "read failed, retrying once");
            operation().await
        }
        other => other,
    }
}
