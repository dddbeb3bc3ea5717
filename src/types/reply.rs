//! Model reply and lookup result shapes.
//!
//! Deserialization is intentionally tolerant: inner tool-call fields are
//! optional so that a structurally broken directive surfaces as a typed
//! malformed-reply error during resolution rather than a decode failure.

use serde::{Deserialize, Serialize};

/// One lookup response, consumed as an opaque mapping.
pub type LookupResult = serde_json::Map<String, serde_json::Value>;

/// Union of all lookup results from one reply, last write wins.
pub type MergedResult = serde_json::Map<String, serde_json::Value>;

/// Raw structured reply from the model backend.
///
/// Invariant: when `tool_calls` is absent, `content` must be present; a reply
/// carrying neither is malformed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelReply {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolCall>>,
}

/// Tool invocation directive emitted by the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    #[serde(default)]
    pub function: Option<FunctionCall>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionCall {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub arguments: Option<serde_json::Map<String, serde_json::Value>>,
}

impl ModelReply {
    pub fn has_tool_calls(&self) -> bool {
        self.tool_calls.is_some()
    }
}
