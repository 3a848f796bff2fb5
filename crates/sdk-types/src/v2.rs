//! LanguageModel parity types inspired by the Vercel AI SDK.
//! These types are provider-agnostic; providers convert them to and from
//! their own wire schemas.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

// ---------- Provider plumbing ----------

/// Provider-specific input options passed through to providers.
/// Outer key is the provider id; inner keys are provider-defined option names.
pub type ProviderOptions = HashMap<String, HashMap<String, JsonValue>>;

/// HTTP headers map for response metadata.
pub type Headers = HashMap<String, String>;

pub(crate) fn headers_is_empty(map: &HashMap<String, String>) -> bool {
    map.is_empty()
}

pub(crate) fn provider_options_is_empty(map: &ProviderOptions) -> bool {
    map.is_empty()
}

// ---------- Prompt ----------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum PromptMessage {
    System { content: String },
    User { content: Vec<UserPart> },
    Assistant { content: Vec<AssistantPart> },
    Tool { content: Vec<ToolMessagePart> },
}

pub type Prompt = Vec<PromptMessage>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum UserPart {
    Text {
        text: String,
    },
    File {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        filename: Option<String>,
        data: DataContent,
        #[serde(rename = "mediaType")]
        media_type: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum AssistantPart {
    Text {
        text: String,
    },
    Reasoning {
        text: String,
    },
    File {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        filename: Option<String>,
        data: DataContent,
        #[serde(rename = "mediaType")]
        media_type: String,
    },
    ToolCall(ToolCallPart),
    ToolResult(ToolResultPart),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum DataContent {
    /// Base64-encoded data string
    Base64 { base64: String },
    /// Raw bytes
    Bytes {
        #[serde(with = "serde_bytes")]
        bytes: Vec<u8>,
    },
    /// URL string
    Url { url: String },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolCallPart {
    #[serde(rename = "toolCallId")]
    pub tool_call_id: String,
    #[serde(rename = "toolName")]
    pub tool_name: String,
    /// Structured tool input as supplied by the model or caller.
    pub input: JsonValue,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ToolResultOutput {
    Text { value: String },
    Json { value: JsonValue },
    ErrorText { value: String },
    ErrorJson { value: JsonValue },
}

impl ToolResultOutput {
    /// The payload as a plain JSON value, independent of the error flag.
    pub fn to_value(&self) -> JsonValue {
        match self {
            ToolResultOutput::Text { value } | ToolResultOutput::ErrorText { value } => {
                JsonValue::String(value.clone())
            }
            ToolResultOutput::Json { value } | ToolResultOutput::ErrorJson { value } => {
                value.clone()
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolResultPart {
    #[serde(rename = "toolCallId")]
    pub tool_call_id: String,
    #[serde(rename = "toolName")]
    pub tool_name: String,
    pub output: ToolResultOutput,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ToolMessagePart {
    ToolResult(ToolResultPart),
    ToolApprovalResponse(ToolApprovalResponsePart),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolApprovalResponsePart {
    #[serde(rename = "approvalId")]
    pub approval_id: String,
    pub approved: bool,
}

// ---------- Call options ----------

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CallOptions {
    pub prompt: Prompt,
    #[serde(default)]
    pub max_output_tokens: Option<u32>,
    #[serde(default)]
    pub temperature: Option<f32>,
    #[serde(default)]
    pub top_p: Option<f32>,
    #[serde(default)]
    pub response_format: Option<ResponseFormat>,
    #[serde(default)]
    pub tools: Vec<Tool>,
    #[serde(default)]
    pub tool_choice: Option<ToolChoice>,
    #[serde(default)]
    pub include_raw_chunks: bool,
    #[serde(default, skip_serializing_if = "headers_is_empty")]
    pub headers: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "provider_options_is_empty")]
    pub provider_options: ProviderOptions,
}

impl CallOptions {
    pub fn new(prompt: Prompt) -> Self {
        Self {
            prompt,
            ..Default::default()
        }
    }
    pub fn with_temperature(mut self, t: f32) -> Self {
        self.temperature = Some(t);
        self
    }
    pub fn with_max_output_tokens(mut self, n: u32) -> Self {
        self.max_output_tokens = Some(n);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ResponseFormat {
    Text,
    Json {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        schema: Option<JsonValue>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FunctionTool {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// JSON-Schema-shaped parameter description, forwarded verbatim.
    #[serde(default, rename = "inputSchema")]
    pub input_schema: JsonValue,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Tool {
    Function(FunctionTool),
    Provider(ProviderTool),
}

/// A provider-defined tool, identified as "<provider>.<tool>".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProviderTool {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub args: JsonValue,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum ToolChoice {
    Auto,
    None,
    Required,
    Tool { name: String },
}

// ---------- Warnings / finish / usage ----------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum CallWarning {
    UnsupportedSetting {
        setting: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },
    UnsupportedTool {
        tool_name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },
    Other {
        message: String,
    },
}

/// Unified classification of why generation stopped.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FinishKind {
    Stop,
    Length,
    ToolCalls,
    Other,
}

/// Finish reason as a raw+unified pair: the provider's original status is
/// retained alongside the unified outcome for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinishReason {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    pub unified: FinishKind,
}

impl Default for FinishReason {
    fn default() -> Self {
        Self {
            raw: None,
            unified: FinishKind::Stop,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Usage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_tokens: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_tokens: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_tokens: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning_tokens: Option<u64>,
}

// ---------- Model outputs ----------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Content {
    Text {
        text: String,
    },
    ToolCall(ToolCallPart),
    ToolResult {
        #[serde(rename = "toolCallId")]
        tool_call_id: String,
        #[serde(rename = "toolName")]
        tool_name: String,
        result: JsonValue,
    },
}

// ---------- Streaming ----------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum StreamPart {
    // Stream lifecycle
    StreamStart {
        warnings: Vec<CallWarning>,
    },
    // Text
    TextStart {
        id: String,
    },
    TextDelta {
        id: String,
        delta: String,
    },
    TextEnd {
        id: String,
    },
    // Tool input + calls
    ToolInputStart {
        id: String,
        tool_name: String,
    },
    ToolInputDelta {
        id: String,
        delta: String,
    },
    ToolInputEnd {
        id: String,
    },
    ToolCall(ToolCallPart),
    // Terminal
    Finish {
        usage: Usage,
        finish_reason: FinishReason,
    },
    // Raw passthrough (advanced; default off)
    Raw {
        raw_value: JsonValue,
    },
}
