use crate::ai_sdk_providers_yandex::chat::api_types::{YandexToolChoice, YandexToolChoiceMode};
use crate::ai_sdk_providers_yandex::chat::prepare_tools::prepare_tools;
use crate::ai_sdk_types::v2 as v2t;
use serde_json::json;

fn function_tool(name: &str) -> v2t::Tool {
    v2t::Tool::Function(v2t::FunctionTool {
        name: name.into(),
        description: Some("test tool".into()),
        input_schema: json!({
            "type": "object",
            "properties": {"city": {"type": "string"}},
            "required": ["city"],
        }),
    })
}

#[test]
fn function_tools_keep_their_schema_and_are_marked_strict() {
    let prepared = prepare_tools(&[function_tool("weather")], &None);
    assert!(prepared.warnings.is_empty());
    assert_eq!(prepared.tools.len(), 1);

    let wire = serde_json::to_value(&prepared.tools[0]).expect("serialize");
    assert_eq!(
        wire,
        json!({
            "function": {
                "name": "weather",
                "description": "test tool",
                "parameters": {
                    "type": "object",
                    "properties": {"city": {"type": "string"}},
                    "required": ["city"],
                },
                "strict": true,
            }
        })
    );
}

#[test]
fn provider_tools_are_dropped_with_a_warning() {
    let tools = vec![
        function_tool("weather"),
        v2t::Tool::Provider(v2t::ProviderTool {
            id: "vendor.search".into(),
            name: "search".into(),
            args: json!({}),
        }),
    ];
    let prepared = prepare_tools(&tools, &None);
    assert_eq!(prepared.tools.len(), 1);
    assert_eq!(prepared.warnings.len(), 1);
    match &prepared.warnings[0] {
        v2t::CallWarning::UnsupportedTool { tool_name, .. } => assert_eq!(tool_name, "search"),
        other => panic!("expected unsupported tool warning, got {other:?}"),
    }
}

#[test]
fn absent_tool_choice_maps_to_the_unspecified_mode() {
    let prepared = prepare_tools(&[], &None);
    assert_eq!(
        serde_json::to_value(&prepared.tool_choice).expect("serialize"),
        json!({"mode": "TOOL_CHOICE_MODE_UNSPECIFIED"})
    );
}

#[test]
fn tool_choice_modes_map_one_to_one() {
    let cases = [
        (v2t::ToolChoice::Auto, YandexToolChoiceMode::Auto),
        (v2t::ToolChoice::None, YandexToolChoiceMode::None),
        (v2t::ToolChoice::Required, YandexToolChoiceMode::Required),
    ];
    for (choice, expected) in cases {
        let prepared = prepare_tools(&[], &Some(choice.clone()));
        match prepared.tool_choice {
            YandexToolChoice::Mode { mode } => assert_eq!(mode, expected, "choice {choice:?}"),
            other => panic!("expected mode choice, got {other:?}"),
        }
    }
}

#[test]
fn named_tool_choice_becomes_a_function_reference() {
    let prepared = prepare_tools(
        &[function_tool("weather")],
        &Some(v2t::ToolChoice::Tool {
            name: "weather".into(),
        }),
    );
    assert_eq!(
        serde_json::to_value(&prepared.tool_choice).expect("serialize"),
        json!({"functionName": "weather"})
    );
}
