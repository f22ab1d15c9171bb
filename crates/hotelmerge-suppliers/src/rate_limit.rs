//! Retry utilities for supplier requests.
//!
//! Transient failures (429, network errors, 5xx) are retried with
//! exponential backoff. A 429's `Retry-After` is a floor on the wait.
//! Everything else is returned immediately.

use std::future::Future;
use std::time::Duration;

use crate::error::SupplierError;

/// Returns `true` if `err` is transient and worth another attempt.
///
/// Retriable errors:
/// - [`SupplierError::RateLimited`] — HTTP 429.
/// - [`SupplierError::Http`] — connection reset, timeout, TLS failure.
/// - [`SupplierError::UnexpectedStatus`] with a 5xx status.
///
/// A 404, any other 4xx, an invalid base URL or an undecodable body will
/// not change on retry.
fn is_retriable(err: &SupplierError) -> bool {
    match err {
        SupplierError::RateLimited { .. } | SupplierError::Http(_) => true,
        SupplierError::UnexpectedStatus { status, .. } => *status >= 500,
        _ => false,
    }
}

/// Seconds to wait before retry `attempt + 1`: `backoff_base_secs * 2^attempt`,
/// raised to the server's `Retry-After` when rate limited.
fn retry_delay_secs(err: &SupplierError, attempt: u32, backoff_base_secs: u64) -> u64 {
    let backoff = backoff_base_secs.saturating_mul(1u64 << attempt.min(62));
    match err {
        SupplierError::RateLimited {
            retry_after_secs, ..
        } => backoff.max(*retry_after_secs),
        _ => backoff,
    }
}

/// Executes `operation`, retrying transient errors up to `max_retries`
/// additional times.
///
/// The wait before retry `n` (1-based) is `backoff_base_secs * 2^(n-1)`
/// seconds, or the `Retry-After` of a 429 if that is longer. With
/// `max_retries = 2` the operation runs at most 3 times.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_secs: u64,
    mut operation: F,
) -> Result<T, SupplierError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, SupplierError>>,
{
    let mut attempt = 0u32;

    loop {
        let err = match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };
        if !is_retriable(&err) || attempt >= max_retries {
            return Err(err);
        }

        let delay_secs = retry_delay_secs(&err, attempt, backoff_base_secs);
        tracing::warn!(
            attempt,
            max_retries,
            delay_secs,
            error = %err,
            "transient supplier error, retrying after backoff"
        );
        tokio::time::sleep(Duration::from_secs(delay_secs)).await;
        attempt += 1;
    }
}
