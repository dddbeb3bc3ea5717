//! Completion request body and the tool surface advertised with it.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Name of the single tool the model may invoke.
pub const DATA_TOOL_NAME: &str = "getData";

/// One completion request. Immutable per call; sampling parameters are fixed.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub prompt: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub tools: Vec<ToolDefinition>,
}

impl CompletionRequest {
    /// Build the request for a formatted prompt, advertising the data lookup
    /// tool with fixed sampling parameters (temperature 0.7, 500 max tokens).
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            temperature: 0.7,
            max_tokens: 500,
            tools: vec![data_lookup_tool()],
        }
    }
}

/// Tool definition (for function calling).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    #[serde(rename = "type")]
    pub tool_type: String, // "function"
    pub function: FunctionDefinition,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionDefinition {
    pub name: String,
    pub description: Option<String>,
    pub parameters: Option<serde_json::Value>, // JSON Schema
}

static DATA_LOOKUP_TOOL: Lazy<ToolDefinition> = Lazy::new(|| ToolDefinition {
    tool_type: "function".to_string(),
    function: FunctionDefinition {
        name: DATA_TOOL_NAME.to_string(),
        description: Some("Get real-time data from the system".to_string()),
        parameters: Some(json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "enum": ["temperature", "stock"],
                    "description": "Type of data to retrieve"
                }
            },
            "required": ["query"]
        })),
    },
});

/// The built-in `getData` tool definition: one required string parameter
/// `query`, constrained to the queries the data service understands.
pub fn data_lookup_tool() -> ToolDefinition {
    DATA_LOOKUP_TOOL.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_with_fixed_parameters() {
        let request = CompletionRequest::new("System: x\nUser: y\nAssistant:");
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["temperature"], json!(0.7));
        assert_eq!(body["max_tokens"], json!(500));
        assert_eq!(body["tools"][0]["type"], json!("function"));
        assert_eq!(body["tools"][0]["function"]["name"], json!("getData"));
        assert_eq!(
            body["tools"][0]["function"]["parameters"]["required"],
            json!(["query"])
        );
        assert_eq!(
            body["tools"][0]["function"]["parameters"]["properties"]["query"]["enum"],
            json!(["temperature", "stock"])
        );
    }
}
