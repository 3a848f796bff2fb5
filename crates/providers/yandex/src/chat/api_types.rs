//! Wire schema for the Foundation Models text completion API.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum YandexRole {
    Assistant,
    User,
    System,
}

/// A single conversation message. The payload fields are mutually exclusive
/// on the wire; the flattened enum enforces exactly one of them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YandexMessage {
    pub role: YandexRole,
    #[serde(flatten)]
    pub payload: YandexMessagePayload,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum YandexMessagePayload {
    Text {
        text: String,
    },
    ToolCalls {
        #[serde(rename = "toolCallList")]
        tool_call_list: YandexToolCallList,
    },
    ToolResults {
        #[serde(rename = "toolResultList")]
        tool_result_list: YandexToolResultList,
    },
    /// An in-progress streaming snapshot may not carry any payload yet.
    /// Requests never construct this variant.
    Empty {},
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YandexToolCallList {
    #[serde(rename = "toolCalls")]
    pub tool_calls: Vec<YandexToolCall>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YandexToolCall {
    #[serde(rename = "functionCall")]
    pub function_call: YandexFunctionCall,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YandexFunctionCall {
    pub name: String,
    /// Structured arguments value, passed through without re-serialization.
    pub arguments: JsonValue,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YandexToolResultList {
    #[serde(rename = "toolResults")]
    pub tool_results: Vec<YandexToolResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YandexToolResult {
    #[serde(rename = "functionResult")]
    pub function_result: YandexFunctionResult,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YandexFunctionResult {
    pub name: String,
    /// Result payload serialized to a JSON text string.
    pub content: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum YandexFinishStatus {
    #[serde(rename = "ALTERNATIVE_STATUS_PARTIAL")]
    Partial,
    #[serde(rename = "ALTERNATIVE_STATUS_TRUNCATED_FINAL")]
    TruncatedFinal,
    #[serde(rename = "ALTERNATIVE_STATUS_FINAL")]
    Final,
    #[serde(rename = "ALTERNATIVE_STATUS_CONTENT_FILTER")]
    ContentFilter,
    #[serde(rename = "ALTERNATIVE_STATUS_TOOL_CALLS")]
    ToolCalls,
    /// Catch-all for statuses this crate does not know; `other` must sit on
    /// the final variant for serde to use it as the fallback.
    #[serde(rename = "ALTERNATIVE_STATUS_UNSPECIFIED", other)]
    Unspecified,
}

impl YandexFinishStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            YandexFinishStatus::Partial => "ALTERNATIVE_STATUS_PARTIAL",
            YandexFinishStatus::TruncatedFinal => "ALTERNATIVE_STATUS_TRUNCATED_FINAL",
            YandexFinishStatus::Final => "ALTERNATIVE_STATUS_FINAL",
            YandexFinishStatus::ContentFilter => "ALTERNATIVE_STATUS_CONTENT_FILTER",
            YandexFinishStatus::ToolCalls => "ALTERNATIVE_STATUS_TOOL_CALLS",
            YandexFinishStatus::Unspecified => "ALTERNATIVE_STATUS_UNSPECIFIED",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YandexTool {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// JSON-Schema-shaped parameter description, forwarded verbatim.
    pub parameters: JsonValue,
    pub strict: bool,
}

/// Tools are wrapped in a one-field object on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YandexToolWrapper {
    pub function: YandexTool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum YandexToolChoiceMode {
    #[serde(rename = "TOOL_CHOICE_MODE_UNSPECIFIED")]
    Unspecified,
    #[serde(rename = "NONE")]
    None,
    #[serde(rename = "AUTO")]
    Auto,
    #[serde(rename = "REQUIRED")]
    Required,
}

/// Either a mode or a forced function name, never both.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum YandexToolChoice {
    Mode { mode: YandexToolChoiceMode },
    Function {
        #[serde(rename = "functionName")]
        function_name: String,
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum YandexReasoningMode {
    #[serde(rename = "REASONING_MODE_UNSPECIFIED")]
    Unspecified,
    #[serde(rename = "DISABLED")]
    Disabled,
    #[serde(rename = "ENABLED_HIDDEN")]
    EnabledHidden,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct YandexCompletionOptions {
    pub stream: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "maxTokens")]
    pub max_tokens: Option<u32>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        rename = "reasoningOptions"
    )]
    pub reasoning_options: Option<YandexReasoningMode>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YandexJsonSchema {
    pub schema: JsonValue,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YandexCompletionRequest {
    #[serde(rename = "modelUri")]
    pub model_uri: String,
    #[serde(rename = "completionOptions")]
    pub completion_options: YandexCompletionOptions,
    pub messages: Vec<YandexMessage>,
    pub tools: Vec<YandexToolWrapper>,
    /// Mutually exclusive with `jsonSchema`.
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "jsonObject")]
    pub json_object: Option<bool>,
    /// Mutually exclusive with `jsonObject`.
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "jsonSchema")]
    pub json_schema: Option<YandexJsonSchema>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        rename = "parallelToolCalls"
    )]
    pub parallel_tool_calls: Option<bool>,
    #[serde(rename = "toolChoice")]
    pub tool_choice: YandexToolChoice,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YandexAlternative {
    pub message: YandexMessage,
    pub status: YandexFinishStatus,
}

/// Token counts arrive as decimal strings on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct YandexUsage {
    #[serde(default, rename = "inputTextTokens")]
    pub input_text_tokens: Option<String>,
    #[serde(default, rename = "completionTokens")]
    pub completion_tokens: Option<String>,
    #[serde(default, rename = "totalTokens")]
    pub total_tokens: Option<String>,
    #[serde(default, rename = "completionTokensDetails")]
    pub completion_tokens_details: Option<YandexCompletionTokensDetails>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct YandexCompletionTokensDetails {
    #[serde(default, rename = "reasoningTokens")]
    pub reasoning_tokens: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YandexCompletionResult {
    #[serde(default)]
    pub alternatives: Vec<YandexAlternative>,
    #[serde(default)]
    pub usage: Option<YandexUsage>,
    #[serde(default, rename = "modelVersion")]
    pub model_version: Option<String>,
}

/// Top-level envelope shared by the non-streaming response and every
/// streaming chunk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YandexCompletionEnvelope {
    pub result: YandexCompletionResult,
}
