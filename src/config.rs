//! Startup configuration, resolved once at construction.

use std::env;
use std::time::Duration;
use url::Url;

use crate::retry::RetryPolicy;
use crate::{Error, Result};

/// Built-in system prompt, used whenever no override is configured.
pub const DEFAULT_SYSTEM_PROMPT: &str = "\
You are an AI assistant with access to real-time data through the getData tool.

Available queries:
- temperature: current temperature
- stock: current stock price

When you need real-time data:
1. Call the getData tool with the query you need
2. Include the returned data in your response
3. Always specify the timestamp of the data
4. Keep the response concise; do not explain how the data was retrieved";

/// Immutable orchestrator configuration.
///
/// Base URLs are validated and normalized (no trailing slash) at build time;
/// the system prompt override is resolved to the built-in default here so the
/// orchestration logic never carries prompt text of its own.
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    pub(crate) model_base_url: String,
    pub(crate) data_service_base_url: String,
    pub(crate) system_prompt: String,
    pub(crate) timeout: Option<Duration>,
    pub(crate) retry: Option<RetryPolicy>,
}

impl OrchestratorConfig {
    pub fn builder() -> OrchestratorConfigBuilder {
        OrchestratorConfigBuilder::default()
    }

    /// Read configuration from the environment.
    ///
    /// `DATALINK_MODEL_URL` and `DATALINK_DATA_SERVICE_URL` are required;
    /// `DATALINK_SYSTEM_PROMPT`, `DATALINK_TIMEOUT_SECS` and
    /// `DATALINK_MAX_RETRIES` are optional.
    pub fn from_env() -> Result<Self> {
        let mut builder = Self::builder()
            .model_base_url(require_env("DATALINK_MODEL_URL")?)
            .data_service_base_url(require_env("DATALINK_DATA_SERVICE_URL")?);

        if let Ok(prompt) = env::var("DATALINK_SYSTEM_PROMPT") {
            builder = builder.system_prompt(prompt);
        }
        if let Some(secs) = parse_env::<u64>("DATALINK_TIMEOUT_SECS")? {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(max_retries) = parse_env::<u32>("DATALINK_MAX_RETRIES")? {
            builder = builder.retry(RetryPolicy::new(max_retries));
        }

        builder.build()
    }
}

fn require_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::configuration(format!("{name} is not set")))
}

fn parse_env<T: std::str::FromStr>(name: &str) -> Result<Option<T>> {
    match env::var(name) {
        Ok(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|_| Error::configuration(format!("{name} has invalid value {raw:?}"))),
        Err(_) => Ok(None),
    }
}

/// Builder for [`OrchestratorConfig`].
#[derive(Debug, Default)]
pub struct OrchestratorConfigBuilder {
    model_base_url: Option<String>,
    data_service_base_url: Option<String>,
    system_prompt: Option<String>,
    timeout: Option<Duration>,
    retry: Option<RetryPolicy>,
}

impl OrchestratorConfigBuilder {
    /// Base URL of the model backend, e.g. `http://llama:8080`.
    pub fn model_base_url(mut self, url: impl Into<String>) -> Self {
        self.model_base_url = Some(url.into());
        self
    }

    /// Base URL of the external data service.
    pub fn data_service_base_url(mut self, url: impl Into<String>) -> Self {
        self.data_service_base_url = Some(url.into());
        self
    }

    /// Override the built-in system prompt. An empty string keeps the default.
    pub fn system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    /// Per-attempt timeout for outbound calls. Unset means unbounded waits.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Retry policy for outbound calls. Unset means a single attempt.
    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = Some(retry);
        self
    }

    pub fn build(self) -> Result<OrchestratorConfig> {
        let model_base_url = normalize_base_url("model_base_url", self.model_base_url)?;
        let data_service_base_url =
            normalize_base_url("data_service_base_url", self.data_service_base_url)?;

        let system_prompt = match self.system_prompt {
            Some(prompt) if !prompt.trim().is_empty() => prompt,
            _ => DEFAULT_SYSTEM_PROMPT.to_string(),
        };

        Ok(OrchestratorConfig {
            model_base_url,
            data_service_base_url,
            system_prompt,
            timeout: self.timeout,
            retry: self.retry,
        })
    }
}

fn normalize_base_url(field: &str, value: Option<String>) -> Result<String> {
    let raw = value.ok_or_else(|| Error::configuration(format!("{field} is required")))?;
    let parsed = Url::parse(&raw)
        .map_err(|e| Error::configuration(format!("{field} is not a valid URL: {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(Error::configuration(format!(
            "{field} must use http or https, got {:?}",
            parsed.scheme()
        )));
    }
    Ok(raw.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_base_url_is_rejected() {
        let err = OrchestratorConfig::builder()
            .model_base_url("http://localhost:8080")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn invalid_url_is_rejected() {
        let err = OrchestratorConfig::builder()
            .model_base_url("not a url")
            .data_service_base_url("http://localhost:8081")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("model_base_url"));
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        let err = OrchestratorConfig::builder()
            .model_base_url("ftp://localhost:8080")
            .data_service_base_url("http://localhost:8081")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn trailing_slash_is_normalized() {
        let config = OrchestratorConfig::builder()
            .model_base_url("http://localhost:8080/")
            .data_service_base_url("http://localhost:8081")
            .build()
            .unwrap();
        assert_eq!(config.model_base_url, "http://localhost:8080");
    }

    #[test]
    fn empty_override_falls_back_to_default_prompt() {
        let config = OrchestratorConfig::builder()
            .model_base_url("http://localhost:8080")
            .data_service_base_url("http://localhost:8081")
            .system_prompt("   ")
            .build()
            .unwrap();
        assert_eq!(config.system_prompt, DEFAULT_SYSTEM_PROMPT);
    }

    #[test]
    fn explicit_override_replaces_default_prompt() {
        let config = OrchestratorConfig::builder()
            .model_base_url("http://localhost:8080")
            .data_service_base_url("http://localhost:8081")
            .system_prompt("You answer in French.")
            .build()
            .unwrap();
        assert_eq!(config.system_prompt, "You answer in French.");
    }

    #[test]
    fn from_env_reads_required_and_optional_values() {
        env::set_var("DATALINK_MODEL_URL", "http://model:8080");
        env::set_var("DATALINK_DATA_SERVICE_URL", "http://data:8081/");
        env::set_var("DATALINK_TIMEOUT_SECS", "15");
        env::set_var("DATALINK_MAX_RETRIES", "2");

        let config = OrchestratorConfig::from_env().unwrap();
        assert_eq!(config.model_base_url, "http://model:8080");
        assert_eq!(config.data_service_base_url, "http://data:8081");
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.retry.as_ref().map(|r| r.max_retries), Some(2));

        env::remove_var("DATALINK_MODEL_URL");
        env::remove_var("DATALINK_DATA_SERVICE_URL");
        env::remove_var("DATALINK_TIMEOUT_SECS");
        env::remove_var("DATALINK_MAX_RETRIES");
    }
}
