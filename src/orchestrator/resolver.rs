//! Tool-call detection and query extraction.

use crate::types::ModelReply;
use crate::{Error, Result};

/// What the reply asks the pipeline to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// No tool calls; the content is the final answer.
    DirectContent(String),
    /// Ordered queries to look up, plus the content the composer needs.
    PendingLookups {
        content: String,
        queries: Vec<String>,
    },
}

/// Inspect a reply and extract its tool-call queries, if any.
///
/// A reply with neither content nor tool calls, an empty tool-call list, or a
/// tool call without a well-formed function/arguments/query shape is rejected
/// as malformed.
pub(crate) fn resolve(reply: &ModelReply) -> Result<Outcome> {
    let Some(tool_calls) = reply.tool_calls.as_ref() else {
        let content = reply
            .content
            .clone()
            .ok_or_else(|| Error::malformed("reply carries neither content nor tool calls"))?;
        return Ok(Outcome::DirectContent(content));
    };

    if tool_calls.is_empty() {
        return Err(Error::malformed("tool call list is empty"));
    }

    let content = reply
        .content
        .clone()
        .ok_or_else(|| Error::malformed("tool-call reply is missing content"))?;

    let mut queries = Vec::with_capacity(tool_calls.len());
    for (index, call) in tool_calls.iter().enumerate() {
        let function = call
            .function
            .as_ref()
            .ok_or_else(|| Error::malformed(format!("tool call {index} has no function")))?;
        let arguments = function
            .arguments
            .as_ref()
            .ok_or_else(|| Error::malformed(format!("tool call {index} has no arguments")))?;
        let query = arguments
            .get("query")
            .and_then(|value| value.as_str())
            .ok_or_else(|| {
                Error::malformed(format!("tool call {index} has no string query argument"))
            })?;
        queries.push(query.to_string());
    }

    Ok(Outcome::PendingLookups { content, queries })
}
