//! External data-service lookups.

use async_trait::async_trait;
use tracing::{debug, error};
use uuid::Uuid;

use crate::retry::{self, RetryPolicy};
use crate::types::LookupResult;
use crate::{Error, Result};

/// Collaborator boundary: one lookup resolves a single query string to an
/// opaque mapping. The query value itself is not validated here; an
/// unrecognized query is the data service's concern.
#[async_trait]
pub trait ExternalLookup: Send + Sync {
    async fn lookup(&self, query: &str) -> Result<LookupResult>;
}

/// HTTP implementation against `{base_url}/api/data/lookup/{query}`.
pub struct HttpLookupClient {
    http: reqwest::Client,
    base_url: String,
    retry: Option<RetryPolicy>,
}

impl HttpLookupClient {
    pub(crate) fn new(
        http: reqwest::Client,
        base_url: &str,
        retry: Option<RetryPolicy>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.to_string(),
            retry,
        }
    }

    async fn fetch(&self, query: &str) -> Result<LookupResult> {
        let url = format!("{}/api/data/lookup/{query}", self.base_url);
        // Short correlation id; the data service echoes it back as requestId.
        let request_id: String = Uuid::new_v4().simple().to_string().chars().take(8).collect();
        debug!(%url, %request_id, "executing data lookup");

        let response = self
            .http
            .get(&url)
            .header("X-Request-ID", &request_id)
            .send()
            .await
            .map_err(|e| {
                error!(query, error = %e, "lookup call failed");
                Error::ToolLookup {
                    query: query.to_string(),
                    status: None,
                    message: e.to_string(),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            error!(query, status = status.as_u16(), "lookup returned non-success");
            return Err(Error::ToolLookup {
                query: query.to_string(),
                status: Some(status.as_u16()),
                message: status.to_string(),
            });
        }

        response.json::<LookupResult>().await.map_err(|e| Error::ToolLookup {
            query: query.to_string(),
            status: None,
            message: format!("invalid lookup payload: {e}"),
        })
    }
}

#[async_trait]
impl ExternalLookup for HttpLookupClient {
    async fn lookup(&self, query: &str) -> Result<LookupResult> {
        retry::run(self.retry.as_ref(), || self.fetch(query)).await
    }
}
