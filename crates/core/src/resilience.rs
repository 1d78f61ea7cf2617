//! Bounded waiting on external collaborators
//!
//! Every call into the item store or the cache goes through
//! [`with_timeout`]. An elapsed bound surfaces as [`Error::Timeout`], which
//! callers classify as transient. Nothing is retried here.

use crate::errors::{Error, Result};
use std::future::Future;
use std::time::Duration;

/// Await `future`, failing with [`Error::Timeout`] once `duration` elapses
pub async fn with_timeout<T, F>(operation: &str, duration: Duration, future: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(duration, future).await {
        Ok(result) => result,
        Err(_) => Err(Error::timeout(operation, duration)),
    }
}
