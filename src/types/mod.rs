//! Wire types exchanged with the model backend and the data service.

pub mod reply;
pub mod request;

pub use reply::{FunctionCall, LookupResult, MergedResult, ModelReply, ToolCall};
pub use request::{data_lookup_tool, CompletionRequest, FunctionDefinition, ToolDefinition, DATA_TOOL_NAME};
