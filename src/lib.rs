//! # llm-datalink
//!
//! Tool-calling orchestration runtime that lets a language-model backend
//! answer questions requiring live external data. The model advertises a
//! single `getData` tool; when its reply carries tool-call directives, the
//! orchestrator executes the requested lookups against an external data
//! service, merges the results and folds them into the final answer.
//!
//! ## Overview
//!
//! One [`Orchestrator::generate_response`] call runs the whole round:
//! prompt formatting, the completion call, tool-call resolution, a concurrent
//! lookup fan-out, a declaration-ordered merge and final composition. Replies
//! without tool calls are returned directly.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use llm_datalink::{Orchestrator, OrchestratorConfig};
//!
//! #[tokio::main]
//! async fn main() -> llm_datalink::Result<()> {
//!     let config = OrchestratorConfig::builder()
//!         .model_base_url("http://localhost:8080")
//!         .data_service_base_url("http://localhost:8081")
//!         .build()?;
//!
//!     let orchestrator = Orchestrator::new(config)?;
//!     let answer = orchestrator
//!         .generate_response("What is the current temperature?")
//!         .await?;
//!     println!("{answer}");
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Startup configuration and the built-in system prompt |
//! | [`prompt`] | Prompt formatting |
//! | [`client`] | Model backend completion client |
//! | [`lookup`] | External data-service lookups (trait seam + HTTP impl) |
//! | [`orchestrator`] | The question/answer pipeline |
//! | [`retry`] | Bounded retry with exponential backoff |
//! | [`types`] | Wire types (requests, replies, tool calls, lookup results) |

pub mod client;
pub mod config;
pub mod error;
pub mod lookup;
pub mod orchestrator;
pub mod prompt;
pub mod retry;
pub mod types;

mod transport;

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;

// Re-export main types for convenience
pub use client::ModelClient;
pub use config::{OrchestratorConfig, OrchestratorConfigBuilder, DEFAULT_SYSTEM_PROMPT};
pub use error::Error;
pub use lookup::{ExternalLookup, HttpLookupClient};
pub use orchestrator::Orchestrator;
pub use prompt::PromptBuilder;
pub use retry::RetryPolicy;
pub use types::{CompletionRequest, LookupResult, MergedResult, ModelReply, ToolCall};
