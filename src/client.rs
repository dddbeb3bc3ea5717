//! Client for the model backend's completion endpoint.

use tracing::{debug, error};

use crate::retry::{self, RetryPolicy};
use crate::types::{CompletionRequest, ModelReply};
use crate::{Error, Result};

/// Sends completion requests to `{base_url}/completion` and decodes the raw
/// structured reply.
pub struct ModelClient {
    http: reqwest::Client,
    completion_url: String,
    retry: Option<RetryPolicy>,
}

impl ModelClient {
    pub(crate) fn new(
        http: reqwest::Client,
        base_url: &str,
        retry: Option<RetryPolicy>,
    ) -> Self {
        Self {
            http,
            completion_url: format!("{base_url}/completion"),
            retry,
        }
    }

    /// One outbound network call per attempt; fails with
    /// [`Error::ModelUnavailable`] on transport failure or non-success status.
    pub async fn complete(&self, request: &CompletionRequest) -> Result<ModelReply> {
        retry::run(self.retry.as_ref(), || self.send(request)).await
    }

    async fn send(&self, request: &CompletionRequest) -> Result<ModelReply> {
        debug!(url = %self.completion_url, ?request, "sending completion request");

        let response = self
            .http
            .post(&self.completion_url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "completion call failed");
                Error::ModelUnavailable {
                    status: None,
                    message: e.to_string(),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), "completion endpoint returned non-success");
            return Err(Error::ModelUnavailable {
                status: Some(status.as_u16()),
                message: if body.is_empty() {
                    status.to_string()
                } else {
                    body
                },
            });
        }

        let reply = response
            .json::<ModelReply>()
            .await
            .map_err(|e| Error::malformed(format!("invalid completion payload: {e}")))?;
        debug!(?reply, "received completion reply");
        Ok(reply)
    }
}
