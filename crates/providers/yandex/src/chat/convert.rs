//! Conversion between the unified message model and the vendor wire schema.

use crate::ai_sdk_core::SdkError;
use crate::ai_sdk_types::v2 as v2t;

use crate::ai_sdk_providers_yandex::chat::api_types::{
    YandexAlternative, YandexFinishStatus, YandexFunctionCall, YandexFunctionResult, YandexMessage,
    YandexMessagePayload, YandexRole, YandexToolCall, YandexToolCallList, YandexToolResult,
    YandexToolResultList, YandexUsage,
};

/// Expand a unified prompt into vendor messages, one message per content
/// block. Block order is preserved; blocks the vendor cannot represent fail
/// fast rather than being dropped.
pub fn convert_prompt(
    prompt: &[v2t::PromptMessage],
) -> Result<(Vec<YandexMessage>, Vec<v2t::CallWarning>), SdkError> {
    let warnings: Vec<v2t::CallWarning> = vec![];
    let mut messages: Vec<YandexMessage> = vec![];

    for message in prompt {
        match message {
            v2t::PromptMessage::System { content } => {
                messages.push(text_message(YandexRole::System, content.clone()));
            }
            v2t::PromptMessage::User { content } => {
                for part in content {
                    match part {
                        v2t::UserPart::Text { text } => {
                            messages.push(text_message(YandexRole::User, text.clone()));
                        }
                        v2t::UserPart::File { .. } => {
                            return Err(unsupported("file content blocks"));
                        }
                    }
                }
            }
            v2t::PromptMessage::Assistant { content } => {
                for part in content {
                    match part {
                        v2t::AssistantPart::Text { text } => {
                            messages.push(text_message(YandexRole::Assistant, text.clone()));
                        }
                        v2t::AssistantPart::ToolCall(call) => {
                            messages.push(tool_call_message(YandexRole::Assistant, call));
                        }
                        v2t::AssistantPart::ToolResult(result) => {
                            messages.push(tool_result_message(result)?);
                        }
                        v2t::AssistantPart::Reasoning { .. } => {
                            return Err(unsupported("reasoning content blocks"));
                        }
                        v2t::AssistantPart::File { .. } => {
                            return Err(unsupported("file content blocks"));
                        }
                    }
                }
            }
            v2t::PromptMessage::Tool { content } => {
                for part in content {
                    match part {
                        v2t::ToolMessagePart::ToolResult(result) => {
                            messages.push(tool_result_message(result)?);
                        }
                        v2t::ToolMessagePart::ToolApprovalResponse(_) => {
                            return Err(unsupported("tool approval responses"));
                        }
                    }
                }
            }
        }
    }

    Ok((messages, warnings))
}

fn unsupported(feature: &str) -> SdkError {
    SdkError::Unsupported {
        feature: feature.into(),
    }
}

fn text_message(role: YandexRole, text: String) -> YandexMessage {
    YandexMessage {
        role,
        payload: YandexMessagePayload::Text { text },
    }
}

fn tool_call_message(role: YandexRole, call: &v2t::ToolCallPart) -> YandexMessage {
    YandexMessage {
        role,
        payload: YandexMessagePayload::ToolCalls {
            tool_call_list: YandexToolCallList {
                tool_calls: vec![YandexToolCall {
                    function_call: YandexFunctionCall {
                        name: call.tool_name.clone(),
                        arguments: call.input.clone(),
                    },
                }],
            },
        },
    }
}

/// Tool results are always sent with the "user" role; the vendor models them
/// as the user reporting a tool execution back to the model.
fn tool_result_message(result: &v2t::ToolResultPart) -> Result<YandexMessage, SdkError> {
    let content = serde_json::to_string(&result.output.to_value())?;
    Ok(YandexMessage {
        role: YandexRole::User,
        payload: YandexMessagePayload::ToolResults {
            tool_result_list: YandexToolResultList {
                tool_results: vec![YandexToolResult {
                    function_result: YandexFunctionResult {
                        name: result.tool_name.clone(),
                        content,
                    },
                }],
            },
        },
    })
}

/// Map a vendor finish status to the unified outcome, keeping the raw status
/// for diagnostics. Total over all six statuses.
pub fn convert_finish_status(status: YandexFinishStatus) -> v2t::FinishReason {
    let unified = match status {
        YandexFinishStatus::Unspecified => v2t::FinishKind::Stop,
        YandexFinishStatus::Partial => v2t::FinishKind::Other,
        YandexFinishStatus::TruncatedFinal => v2t::FinishKind::Length,
        YandexFinishStatus::Final => v2t::FinishKind::Stop,
        YandexFinishStatus::ContentFilter => v2t::FinishKind::Other,
        YandexFinishStatus::ToolCalls => v2t::FinishKind::ToolCalls,
    };
    v2t::FinishReason {
        raw: Some(status.as_str().to_string()),
        unified,
    }
}

/// Convert a response's alternatives into unified content plus one finish
/// reason. The last alternative's status wins; the vendor supplies no call
/// identifiers, so each tool call/result gets a synthesized unique id.
pub fn convert_alternatives(
    alternatives: &[YandexAlternative],
) -> Result<(Vec<v2t::Content>, v2t::FinishReason), SdkError> {
    let mut finish_reason = v2t::FinishReason::default();
    let mut content: Vec<v2t::Content> = vec![];

    for alternative in alternatives {
        finish_reason = convert_finish_status(alternative.status);
        match &alternative.message.payload {
            YandexMessagePayload::Text { text } => {
                // An empty text snapshot carries no content yet.
                if !text.is_empty() {
                    content.push(v2t::Content::Text { text: text.clone() });
                }
            }
            YandexMessagePayload::ToolCalls { tool_call_list } => {
                for call in &tool_call_list.tool_calls {
                    content.push(v2t::Content::ToolCall(v2t::ToolCallPart {
                        tool_call_id: uuid::Uuid::new_v4().to_string(),
                        tool_name: call.function_call.name.clone(),
                        input: call.function_call.arguments.clone(),
                    }));
                }
            }
            YandexMessagePayload::ToolResults { tool_result_list } => {
                for result in &tool_result_list.tool_results {
                    content.push(v2t::Content::ToolResult {
                        tool_call_id: uuid::Uuid::new_v4().to_string(),
                        tool_name: result.function_result.name.clone(),
                        result: serde_json::from_str(&result.function_result.content)?,
                    });
                }
            }
            YandexMessagePayload::Empty {} => {}
        }
    }

    Ok((content, finish_reason))
}

/// Token counts arrive as decimal strings; unparseable values are dropped.
pub fn convert_usage(usage: &YandexUsage) -> v2t::Usage {
    v2t::Usage {
        input_tokens: parse_token_count(usage.input_text_tokens.as_deref()),
        output_tokens: parse_token_count(usage.completion_tokens.as_deref()),
        total_tokens: parse_token_count(usage.total_tokens.as_deref()),
        reasoning_tokens: None,
    }
}

fn parse_token_count(value: Option<&str>) -> Option<u64> {
    value.and_then(|s| s.trim().parse::<u64>().ok())
}
