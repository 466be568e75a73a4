//! Combinators for running several independent fetches together.
//!
//! All combinators poll their inputs concurrently inside the calling task;
//! nothing is spawned. Futures that lose a race are dropped and never run to
//! completion.
//!
//! | Combinator | Settles with |
//! |------------|--------------|
//! | [`all`] | every result in input order, or the first failure |
//! | [`first_settled`] | whichever input settles first, success or failure |
//! | [`first_success`] | the first success, or every failure if none succeed |
//! | [`with_deadline`] | the input, or [`FetchError::Timeout`] if the timer wins |

use crate::errors::FetchError;
use futures_util::future::{select_all, try_join_all};
use futures_util::stream::{FuturesUnordered, StreamExt};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Waits for every future to succeed.
///
/// Results are returned in input order regardless of completion order. The
/// first failure fails the combined operation and drops the futures still
/// pending. An empty input yields an empty vector.
///
/// # Errors
///
/// Returns the first error produced by any input.
pub async fn all<I, F, T>(futures: I) -> Result<Vec<T>, FetchError>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, FetchError>>,
{
    try_join_all(futures).await
}

/// Returns the outcome of whichever future settles first.
///
/// A fast failure wins over a slow success.
///
/// # Errors
///
/// Returns the error of the first future to settle if that future failed, or
/// [`FetchError::InvalidInput`] when `futures` is empty.
pub async fn first_settled<I, F, T>(futures: I) -> Result<T, FetchError>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, FetchError>>,
{
    let pinned: Vec<_> = futures.into_iter().map(Box::pin).collect();
    if pinned.is_empty() {
        return Err(FetchError::InvalidInput(
            "first_settled requires at least one future".to_string(),
        ));
    }

    let (result, index, _rest) = select_all(pinned).await;
    debug!("Future #{index} settled first (ok={})", result.is_ok());
    result
}

/// Returns the first successful outcome, ignoring failures until every
/// future has failed.
///
/// # Errors
///
/// Returns [`FetchError::AllFailed`] with every failure in input order if no
/// future succeeds, or [`FetchError::InvalidInput`] when `futures` is empty.
pub async fn first_success<I, F, T>(futures: I) -> Result<T, FetchError>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, FetchError>>,
{
    let mut pending: FuturesUnordered<_> = futures
        .into_iter()
        .enumerate()
        .map(|(index, future)| async move { (index, future.await) })
        .collect();

    if pending.is_empty() {
        return Err(FetchError::InvalidInput(
            "first_success requires at least one future".to_string(),
        ));
    }

    let mut errors = Vec::with_capacity(pending.len());
    while let Some((index, result)) = pending.next().await {
        match result {
            Ok(value) => {
                debug!("Future #{index} succeeded first after {} failure(s)", errors.len());
                return Ok(value);
            }
            Err(e) => {
                debug!("Future #{index} failed: {e}");
                errors.push((index, e));
            }
        }
    }

    errors.sort_by_key(|(index, _)| *index);
    Err(FetchError::AllFailed {
        errors: errors.into_iter().map(|(_, e)| e).collect(),
    })
}

/// Races `future` against a timer that fails after `duration`.
///
/// Whichever settles first determines the outcome. When the timer wins, the
/// future is dropped.
///
/// # Errors
///
/// Returns [`FetchError::Timeout`] if the deadline elapses first, otherwise
/// whatever error `future` produced.
pub async fn with_deadline<F, T>(duration: Duration, future: F) -> Result<T, FetchError>
where
    F: Future<Output = Result<T, FetchError>>,
{
    tokio::time::timeout(duration, future).await.map_err(|_| {
        warn!("Request timed out after {:?}", duration);
        FetchError::Timeout(duration)
    })?
}

/// Suspends the current task for `duration`.
pub async fn wait(duration: Duration) {
    tokio::time::sleep(duration).await;
}
