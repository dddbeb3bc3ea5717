//! End-to-end orchestration of one question/answer round.
//!
//! States: awaiting the model reply, then either direct content or tool
//! resolution followed by concurrent lookups, a declaration-ordered merge and
//! composition. Any failure terminates the round; nothing is retried at this
//! level (retries live inside the HTTP clients).

mod compose;
mod merge;
mod resolver;

use std::sync::Arc;

use futures::future;
use tracing::{debug, info};

use crate::client::ModelClient;
use crate::config::OrchestratorConfig;
use crate::lookup::{ExternalLookup, HttpLookupClient};
use crate::prompt::PromptBuilder;
use crate::transport;
use crate::types::CompletionRequest;
use crate::Result;

use resolver::Outcome;

/// Drives one `generate_response` invocation from user input to final text.
///
/// Holds only immutable configuration and shared clients; every call is an
/// independent unit of work.
pub struct Orchestrator {
    prompt: PromptBuilder,
    model: ModelClient,
    lookup: Arc<dyn ExternalLookup>,
}

impl Orchestrator {
    /// Build an orchestrator whose lookups go to the configured data service.
    pub fn new(config: OrchestratorConfig) -> Result<Self> {
        let http = transport::build_http_client(config.timeout)?;
        let lookup: Arc<dyn ExternalLookup> = Arc::new(HttpLookupClient::new(
            http.clone(),
            &config.data_service_base_url,
            config.retry.clone(),
        ));
        Ok(Self::assemble(config, http, lookup))
    }

    /// Build an orchestrator with a caller-supplied lookup collaborator.
    pub fn with_lookup(
        config: OrchestratorConfig,
        lookup: Arc<dyn ExternalLookup>,
    ) -> Result<Self> {
        let http = transport::build_http_client(config.timeout)?;
        Ok(Self::assemble(config, http, lookup))
    }

    fn assemble(
        config: OrchestratorConfig,
        http: reqwest::Client,
        lookup: Arc<dyn ExternalLookup>,
    ) -> Self {
        let model = ModelClient::new(http, &config.model_base_url, config.retry);
        Self {
            prompt: PromptBuilder::new(config.system_prompt),
            model,
            lookup,
        }
    }

    /// Answer one user question, folding in external data when the model asks
    /// for it via tool calls.
    pub async fn generate_response(&self, user_input: &str) -> Result<String> {
        info!(user_input, "generating response");

        let request = CompletionRequest::new(self.prompt.format(user_input));
        let reply = self.model.complete(&request).await?;

        match resolver::resolve(&reply)? {
            Outcome::DirectContent(text) => Ok(text),
            Outcome::PendingLookups { content, queries } => {
                debug!(?queries, "executing tool calls");
                // Lookups fan out concurrently; try_join_all keeps the result
                // order equal to the declaration order, so merge precedence
                // never depends on completion order.
                let lookups = queries.iter().map(|query| self.lookup.lookup(query));
                let results = future::try_join_all(lookups).await?;
                let merged = merge::merge(results);
                Ok(compose::compose(&content, &merged))
            }
        }
    }
}
