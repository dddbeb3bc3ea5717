//! Shared HTTP client construction.
//!
//! One `reqwest::Client` (and its connection pool) is built per orchestrator
//! and cloned into both outbound clients; the pool tolerates concurrent use
//! across simultaneous requests.

use std::time::Duration;

use crate::{Error, Result};

pub(crate) fn build_http_client(timeout: Option<Duration>) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder()
        .pool_max_idle_per_host(32)
        .pool_idle_timeout(Some(Duration::from_secs(90)));

    // No timeout unless configured: the historical behavior is an unbounded wait.
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    builder
        .build()
        .map_err(|e| Error::configuration(format!("failed to build HTTP client: {e}")))
}
