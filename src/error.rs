use thiserror::Error;

/// Unified error type for the orchestration pipeline.
///
/// Only [`Error::Serialization`] is ever recovered from (inside the response
/// composer); every other variant aborts the pipeline and reaches the caller
/// as-is, never as a partial or garbled answer string.
#[derive(Debug, Error)]
pub enum Error {
    /// The model backend was unreachable or answered with a non-success status.
    #[error("model backend unavailable{}: {message}", status_suffix(.status))]
    ModelUnavailable {
        status: Option<u16>,
        message: String,
    },

    /// The model reply was missing required content or carried an ill-formed
    /// tool-call structure.
    #[error("malformed model reply: {message}")]
    MalformedModelResponse { message: String },

    /// An external data lookup failed; no partial output is produced.
    #[error("lookup for {query:?} failed{}: {message}", status_suffix(.status))]
    ToolLookup {
        query: String,
        status: Option<u16>,
        message: String,
    },

    /// Failure serializing the merged lookup data for the final answer.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid startup configuration.
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

fn status_suffix(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" (HTTP {code})"),
        None => String::new(),
    }
}

impl Error {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Error::MalformedModelResponse {
            message: message.into(),
        }
    }

    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Transient transport failures and server-side statuses are worth
    /// retrying; malformed payloads and configuration mistakes are not.
    pub(crate) fn is_retryable(&self) -> bool {
        match self {
            Error::ModelUnavailable { status, .. } | Error::ToolLookup { status, .. } => {
                status.map_or(true, |code| code == 408 || code == 429 || code >= 500)
            }
            _ => false,
        }
    }
}
