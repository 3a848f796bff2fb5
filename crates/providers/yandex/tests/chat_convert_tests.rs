use crate::ai_sdk_core::SdkError;
use crate::ai_sdk_providers_yandex::chat::api_types::{
    YandexAlternative, YandexFinishStatus, YandexFunctionCall, YandexFunctionResult, YandexMessage,
    YandexMessagePayload, YandexRole, YandexToolCall, YandexToolCallList, YandexToolResult,
    YandexToolResultList, YandexUsage,
};
use crate::ai_sdk_providers_yandex::chat::convert::{
    convert_alternatives, convert_finish_status, convert_prompt, convert_usage,
};
use crate::ai_sdk_types::v2 as v2t;
use serde_json::json;

fn user_text(text: &str) -> v2t::PromptMessage {
    v2t::PromptMessage::User {
        content: vec![v2t::UserPart::Text { text: text.into() }],
    }
}

#[test]
fn each_content_block_becomes_one_single_payload_message() {
    let prompt = vec![
        v2t::PromptMessage::System {
            content: "be terse".into(),
        },
        v2t::PromptMessage::User {
            content: vec![
                v2t::UserPart::Text {
                    text: "first".into(),
                },
                v2t::UserPart::Text {
                    text: "second".into(),
                },
            ],
        },
        v2t::PromptMessage::Assistant {
            content: vec![
                v2t::AssistantPart::Text {
                    text: "reply".into(),
                },
                v2t::AssistantPart::ToolCall(v2t::ToolCallPart {
                    tool_call_id: "call-1".into(),
                    tool_name: "weather".into(),
                    input: json!({"city": "Moscow"}),
                }),
            ],
        },
    ];

    let (messages, warnings) = convert_prompt(&prompt).expect("convert");
    assert!(warnings.is_empty());
    assert_eq!(messages.len(), 5);

    assert_eq!(messages[0].role, YandexRole::System);
    match &messages[0].payload {
        YandexMessagePayload::Text { text } => assert_eq!(text, "be terse"),
        other => panic!("expected text payload, got {other:?}"),
    }
    match &messages[1].payload {
        YandexMessagePayload::Text { text } => assert_eq!(text, "first"),
        other => panic!("expected text payload, got {other:?}"),
    }
    match &messages[2].payload {
        YandexMessagePayload::Text { text } => assert_eq!(text, "second"),
        other => panic!("expected text payload, got {other:?}"),
    }
    assert_eq!(messages[3].role, YandexRole::Assistant);
    assert_eq!(messages[4].role, YandexRole::Assistant);
    match &messages[4].payload {
        YandexMessagePayload::ToolCalls { tool_call_list } => {
            assert_eq!(tool_call_list.tool_calls.len(), 1);
            let call = &tool_call_list.tool_calls[0].function_call;
            assert_eq!(call.name, "weather");
            assert_eq!(call.arguments, json!({"city": "Moscow"}));
        }
        other => panic!("expected tool call payload, got {other:?}"),
    }
}

#[test]
fn tool_results_are_forced_to_user_role() {
    let prompt = vec![v2t::PromptMessage::Assistant {
        content: vec![v2t::AssistantPart::ToolResult(v2t::ToolResultPart {
            tool_call_id: "call-1".into(),
            tool_name: "weather".into(),
            output: v2t::ToolResultOutput::Json {
                value: json!({"temp": -7}),
            },
        })],
    }];

    let (messages, _) = convert_prompt(&prompt).expect("convert");
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].role, YandexRole::User);
    match &messages[0].payload {
        YandexMessagePayload::ToolResults { tool_result_list } => {
            let result = &tool_result_list.tool_results[0].function_result;
            assert_eq!(result.name, "weather");
            assert_eq!(
                serde_json::from_str::<serde_json::Value>(&result.content).expect("json"),
                json!({"temp": -7})
            );
        }
        other => panic!("expected tool result payload, got {other:?}"),
    }
}

#[test]
fn tool_result_round_trip_preserves_value() {
    let original = json!({"nested": {"list": [1, 2, 3], "flag": true}, "text": "значение"});
    let prompt = vec![v2t::PromptMessage::Tool {
        content: vec![v2t::ToolMessagePart::ToolResult(v2t::ToolResultPart {
            tool_call_id: "call-9".into(),
            tool_name: "lookup".into(),
            output: v2t::ToolResultOutput::Json {
                value: original.clone(),
            },
        })],
    }];
    let (messages, _) = convert_prompt(&prompt).expect("convert");

    let alternatives = vec![YandexAlternative {
        message: messages[0].clone(),
        status: YandexFinishStatus::Final,
    }];
    let (content, _) = convert_alternatives(&alternatives).expect("convert back");

    assert_eq!(content.len(), 1);
    match &content[0] {
        v2t::Content::ToolResult { result, tool_name, .. } => {
            assert_eq!(tool_name, "lookup");
            assert_eq!(result, &original);
        }
        other => panic!("expected tool result, got {other:?}"),
    }
}

#[test]
fn unsupported_block_kinds_fail_fast_with_distinct_errors() {
    let file_prompt = vec![v2t::PromptMessage::User {
        content: vec![v2t::UserPart::File {
            filename: None,
            data: v2t::DataContent::Base64 {
                base64: "AAAA".into(),
            },
            media_type: "image/png".into(),
        }],
    }];
    match convert_prompt(&file_prompt) {
        Err(SdkError::Unsupported { feature }) => assert_eq!(feature, "file content blocks"),
        other => panic!("expected unsupported error, got {other:?}"),
    }

    let reasoning_prompt = vec![v2t::PromptMessage::Assistant {
        content: vec![v2t::AssistantPart::Reasoning {
            text: "thinking".into(),
        }],
    }];
    match convert_prompt(&reasoning_prompt) {
        Err(SdkError::Unsupported { feature }) => assert_eq!(feature, "reasoning content blocks"),
        other => panic!("expected unsupported error, got {other:?}"),
    }

    let approval_prompt = vec![v2t::PromptMessage::Tool {
        content: vec![v2t::ToolMessagePart::ToolApprovalResponse(
            v2t::ToolApprovalResponsePart {
                approval_id: "appr-1".into(),
                approved: true,
            },
        )],
    }];
    match convert_prompt(&approval_prompt) {
        Err(SdkError::Unsupported { feature }) => assert_eq!(feature, "tool approval responses"),
        other => panic!("expected unsupported error, got {other:?}"),
    }
}

#[test]
fn finish_status_mapping_is_total() {
    let cases = [
        (YandexFinishStatus::Unspecified, v2t::FinishKind::Stop),
        (YandexFinishStatus::Partial, v2t::FinishKind::Other),
        (YandexFinishStatus::TruncatedFinal, v2t::FinishKind::Length),
        (YandexFinishStatus::Final, v2t::FinishKind::Stop),
        (YandexFinishStatus::ContentFilter, v2t::FinishKind::Other),
        (YandexFinishStatus::ToolCalls, v2t::FinishKind::ToolCalls),
    ];
    for (status, expected) in cases {
        let reason = convert_finish_status(status);
        assert_eq!(reason.unified, expected, "status {status:?}");
        assert_eq!(reason.raw.as_deref(), Some(status.as_str()));
    }
}

#[test]
fn unknown_status_strings_fall_back_to_unspecified() {
    let status: YandexFinishStatus =
        serde_json::from_value(json!("ALTERNATIVE_STATUS_SOMETHING_NEW")).expect("deserialize");
    assert_eq!(status, YandexFinishStatus::Unspecified);
    assert_eq!(convert_finish_status(status).unified, v2t::FinishKind::Stop);

    // Known statuses still hit their own variants rather than the fallback.
    let known: YandexFinishStatus =
        serde_json::from_value(json!("ALTERNATIVE_STATUS_TOOL_CALLS")).expect("deserialize");
    assert_eq!(known, YandexFinishStatus::ToolCalls);
}

#[test]
fn wire_messages_round_trip_through_the_flattened_payload() {
    let message: YandexMessage =
        serde_json::from_value(json!({"role": "user", "text": "hi"})).expect("deserialize");
    assert_eq!(message.role, YandexRole::User);
    match &message.payload {
        YandexMessagePayload::Text { text } => assert_eq!(text, "hi"),
        other => panic!("expected text payload, got {other:?}"),
    }
    assert_eq!(
        serde_json::to_value(&message).expect("serialize"),
        json!({"role": "user", "text": "hi"})
    );
}

#[test]
fn last_alternative_status_wins() {
    let alternatives = vec![
        YandexAlternative {
            message: YandexMessage {
                role: YandexRole::Assistant,
                payload: YandexMessagePayload::Text {
                    text: "partial".into(),
                },
            },
            status: YandexFinishStatus::Partial,
        },
        YandexAlternative {
            message: YandexMessage {
                role: YandexRole::Assistant,
                payload: YandexMessagePayload::Text {
                    text: "final".into(),
                },
            },
            status: YandexFinishStatus::Final,
        },
    ];
    let (content, finish) = convert_alternatives(&alternatives).expect("convert");
    assert_eq!(content.len(), 2);
    assert_eq!(finish.unified, v2t::FinishKind::Stop);
    assert_eq!(finish.raw.as_deref(), Some("ALTERNATIVE_STATUS_FINAL"));
}

#[test]
fn tool_call_ids_are_unique_within_a_response() {
    let call = |name: &str| YandexToolCall {
        function_call: YandexFunctionCall {
            name: name.into(),
            arguments: json!({}),
        },
    };
    let alternatives = vec![YandexAlternative {
        message: YandexMessage {
            role: YandexRole::Assistant,
            payload: YandexMessagePayload::ToolCalls {
                tool_call_list: YandexToolCallList {
                    tool_calls: vec![call("a"), call("b")],
                },
            },
        },
        status: YandexFinishStatus::ToolCalls,
    }];
    let (content, _) = convert_alternatives(&alternatives).expect("convert");
    let ids: Vec<&str> = content
        .iter()
        .map(|c| match c {
            v2t::Content::ToolCall(call) => call.tool_call_id.as_str(),
            other => panic!("expected tool call, got {other:?}"),
        })
        .collect();
    assert_eq!(ids.len(), 2);
    assert_ne!(ids[0], ids[1]);
}

#[test]
fn payloadless_snapshot_contributes_no_content() {
    let alternatives = vec![YandexAlternative {
        message: serde_json::from_value::<YandexMessage>(json!({"role": "assistant"}))
            .expect("deserialize"),
        status: YandexFinishStatus::Partial,
    }];
    let (content, finish) = convert_alternatives(&alternatives).expect("convert");
    assert!(content.is_empty());
    assert_eq!(finish.unified, v2t::FinishKind::Other);
}

#[test]
fn malformed_tool_result_content_is_a_fatal_error() {
    let alternatives = vec![YandexAlternative {
        message: YandexMessage {
            role: YandexRole::User,
            payload: YandexMessagePayload::ToolResults {
                tool_result_list: YandexToolResultList {
                    tool_results: vec![YandexToolResult {
                        function_result: YandexFunctionResult {
                            name: "lookup".into(),
                            content: "not json".into(),
                        },
                    }],
                },
            },
        },
        status: YandexFinishStatus::Final,
    }];
    match convert_alternatives(&alternatives) {
        Err(SdkError::Serde(_)) => {}
        other => panic!("expected serde error, got {other:?}"),
    }
}

#[test]
fn usage_parses_decimal_strings() {
    let usage = YandexUsage {
        input_text_tokens: Some("10".into()),
        completion_tokens: Some("12".into()),
        total_tokens: Some("22".into()),
        completion_tokens_details: None,
    };
    let converted = convert_usage(&usage);
    assert_eq!(converted.input_tokens, Some(10));
    assert_eq!(converted.output_tokens, Some(12));
    assert_eq!(converted.total_tokens, Some(22));
    assert_eq!(converted.reasoning_tokens, None);

    let garbage = YandexUsage {
        input_text_tokens: Some("not a number".into()),
        ..Default::default()
    };
    assert_eq!(convert_usage(&garbage).input_tokens, None);
}

#[test]
fn scenario_simple_user_prompt() {
    let (messages, warnings) = convert_prompt(&[user_text("hi")]).expect("convert");
    assert!(warnings.is_empty());
    assert_eq!(
        serde_json::to_value(&messages).expect("serialize"),
        json!([{"role": "user", "text": "hi"}])
    );
}
