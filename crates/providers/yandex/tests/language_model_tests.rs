use std::pin::Pin;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use futures_core::Stream;
use futures_util::{stream, TryStreamExt};
use serde_json::{json, Value};

use crate::ai_sdk_core::error::TransportError;
use crate::ai_sdk_core::transport::{HttpTransport, TransportConfig};
use crate::ai_sdk_core::LanguageModel;
use crate::ai_sdk_core::SdkError;
use crate::ai_sdk_providers_yandex::chat::language_model::{
    YandexChatConfig, YandexChatLanguageModel,
};
use crate::ai_sdk_types::v2 as v2t;

#[derive(Clone, Default)]
struct TestTransport {
    response: Arc<Mutex<Value>>,
    stream_chunks: Arc<Mutex<Vec<Bytes>>>,
    requests: Arc<Mutex<Vec<(String, Value)>>>,
}

struct TestStreamResponse {
    chunks: Vec<Bytes>,
}

#[async_trait]
impl HttpTransport for TestTransport {
    type StreamResponse = TestStreamResponse;

    fn into_stream(
        resp: Self::StreamResponse,
    ) -> (
        Pin<Box<dyn Stream<Item = Result<Bytes, TransportError>> + Send>>,
        Vec<(String, String)>,
    ) {
        let items: Vec<Result<Bytes, TransportError>> = resp.chunks.into_iter().map(Ok).collect();
        (
            Box::pin(stream::iter(items)),
            vec![("x-request-id".into(), "stream-1".into())],
        )
    }

    async fn post_json_stream(
        &self,
        url: &str,
        _headers: &[(String, String)],
        body: &Value,
        _cfg: &TransportConfig,
    ) -> Result<Self::StreamResponse, TransportError> {
        self.requests
            .lock()
            .unwrap()
            .push((url.to_string(), body.clone()));
        Ok(TestStreamResponse {
            chunks: self.stream_chunks.lock().unwrap().clone(),
        })
    }

    async fn post_json(
        &self,
        url: &str,
        _headers: &[(String, String)],
        body: &Value,
        _cfg: &TransportConfig,
    ) -> Result<(Value, Vec<(String, String)>), TransportError> {
        self.requests
            .lock()
            .unwrap()
            .push((url.to_string(), body.clone()));
        Ok((
            self.response.lock().unwrap().clone(),
            vec![("content-type".into(), "application/json".into())],
        ))
    }
}

fn build_model(transport: TestTransport) -> YandexChatLanguageModel<TestTransport> {
    YandexChatLanguageModel::new(
        "yandexgpt",
        YandexChatConfig {
            folder_id: "test-folder".into(),
            base_url: "https://llm.example".into(),
            headers: vec![],
            http: transport,
            transport_cfg: TransportConfig::default(),
        },
    )
}

fn user_prompt(text: &str) -> Vec<v2t::PromptMessage> {
    vec![v2t::PromptMessage::User {
        content: vec![v2t::UserPart::Text { text: text.into() }],
    }]
}

fn text_response(text: &str) -> Value {
    json!({
        "result": {
            "alternatives": [{
                "message": {"role": "assistant", "text": text},
                "status": "ALTERNATIVE_STATUS_FINAL",
            }],
            "usage": {"inputTextTokens": "10", "completionTokens": "12", "totalTokens": "22"},
            "modelVersion": "23.10",
        }
    })
}

#[tokio::test]
async fn generate_sends_the_minimal_request_shape() {
    let transport = TestTransport::default();
    *transport.response.lock().unwrap() = text_response("hello");
    let model = build_model(transport.clone());

    model
        .do_generate(v2t::CallOptions::new(user_prompt("hi")))
        .await
        .expect("generate");

    let requests = transport.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let (url, body) = &requests[0];
    assert_eq!(url, "https://llm.example/foundationModels/v1/completion");
    assert_eq!(
        body,
        &json!({
            "modelUri": "gpt://test-folder/yandexgpt",
            "completionOptions": {"stream": false},
            "messages": [{"role": "user", "text": "hi"}],
            "tools": [],
            "toolChoice": {"mode": "TOOL_CHOICE_MODE_UNSPECIFIED"},
        })
    );
}

#[tokio::test]
async fn generate_maps_content_finish_and_usage() {
    let transport = TestTransport::default();
    *transport.response.lock().unwrap() = text_response("hello");
    let model = build_model(transport);

    let response = model
        .do_generate(v2t::CallOptions::new(user_prompt("hi")))
        .await
        .expect("generate");

    assert_eq!(response.content.len(), 1);
    match &response.content[0] {
        v2t::Content::Text { text } => assert_eq!(text, "hello"),
        other => panic!("expected text content, got {other:?}"),
    }
    assert_eq!(response.finish_reason.unified, v2t::FinishKind::Stop);
    assert_eq!(
        response.finish_reason.raw.as_deref(),
        Some("ALTERNATIVE_STATUS_FINAL")
    );
    assert_eq!(response.usage.input_tokens, Some(10));
    assert_eq!(response.usage.output_tokens, Some(12));
    assert_eq!(response.usage.total_tokens, Some(22));
    assert!(response.warnings.is_empty());
    assert!(response.request_body.is_some());
    assert!(response.response_body.is_some());
}

#[tokio::test]
async fn sampling_options_land_in_completion_options() {
    let transport = TestTransport::default();
    *transport.response.lock().unwrap() = text_response("ok");
    let model = build_model(transport.clone());

    model
        .do_generate(
            v2t::CallOptions::new(user_prompt("hi"))
                .with_temperature(0.5)
                .with_max_output_tokens(256),
        )
        .await
        .expect("generate");

    let requests = transport.requests.lock().unwrap();
    let (_, body) = &requests[0];
    assert_eq!(
        body["completionOptions"],
        json!({"stream": false, "temperature": 0.5, "maxTokens": 256})
    );
}

#[tokio::test]
async fn unsupported_content_fails_before_any_request() {
    let transport = TestTransport::default();
    let model = build_model(transport.clone());

    let options = v2t::CallOptions::new(vec![v2t::PromptMessage::User {
        content: vec![v2t::UserPart::File {
            filename: None,
            data: v2t::DataContent::Base64 {
                base64: "AAAA".into(),
            },
            media_type: "image/png".into(),
        }],
    }]);

    match model.do_generate(options).await {
        Err(SdkError::Unsupported { feature }) => assert_eq!(feature, "file content blocks"),
        other => panic!("expected unsupported error, got {other:?}"),
    }
    assert!(transport.requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn top_p_surfaces_as_a_warning() {
    let transport = TestTransport::default();
    *transport.response.lock().unwrap() = text_response("ok");
    let model = build_model(transport);

    let mut options = v2t::CallOptions::new(user_prompt("hi"));
    options.top_p = Some(0.9);
    let response = model.do_generate(options).await.expect("generate");

    assert_eq!(response.warnings.len(), 1);
    match &response.warnings[0] {
        v2t::CallWarning::UnsupportedSetting { setting, .. } => assert_eq!(setting, "topP"),
        other => panic!("expected unsupported setting, got {other:?}"),
    }
}

#[tokio::test]
async fn json_response_format_with_schema_uses_json_schema() {
    let transport = TestTransport::default();
    *transport.response.lock().unwrap() = text_response("{}");
    let model = build_model(transport.clone());

    let mut options = v2t::CallOptions::new(user_prompt("hi"));
    options.response_format = Some(v2t::ResponseFormat::Json {
        schema: Some(json!({"type": "object"})),
        name: None,
        description: None,
    });
    model.do_generate(options).await.expect("generate");

    let requests = transport.requests.lock().unwrap();
    let (_, body) = &requests[0];
    assert_eq!(body["jsonSchema"], json!({"schema": {"type": "object"}}));
    assert!(body.get("jsonObject").is_none());
}

#[tokio::test]
async fn json_response_format_without_schema_uses_json_object() {
    let transport = TestTransport::default();
    *transport.response.lock().unwrap() = text_response("{}");
    let model = build_model(transport.clone());

    let mut options = v2t::CallOptions::new(user_prompt("hi"));
    options.response_format = Some(v2t::ResponseFormat::Json {
        schema: None,
        name: None,
        description: None,
    });
    model.do_generate(options).await.expect("generate");

    let requests = transport.requests.lock().unwrap();
    let (_, body) = &requests[0];
    assert_eq!(body["jsonObject"], json!(true));
    assert!(body.get("jsonSchema").is_none());
}

#[tokio::test]
async fn provider_options_map_to_vendor_fields() {
    let transport = TestTransport::default();
    *transport.response.lock().unwrap() = text_response("ok");
    let model = build_model(transport.clone());

    let mut options = v2t::CallOptions::new(user_prompt("hi"));
    options.provider_options.insert(
        "yandex".into(),
        [
            ("reasoningOptions".to_string(), json!("ENABLED_HIDDEN")),
            ("parallelToolCalls".to_string(), json!(false)),
        ]
        .into_iter()
        .collect(),
    );
    model.do_generate(options).await.expect("generate");

    let requests = transport.requests.lock().unwrap();
    let (_, body) = &requests[0];
    assert_eq!(
        body["completionOptions"]["reasoningOptions"],
        json!("ENABLED_HIDDEN")
    );
    assert_eq!(body["parallelToolCalls"], json!(false));
}

#[tokio::test]
async fn stream_sets_the_stream_flag_and_yields_parts() {
    let transport = TestTransport::default();
    *transport.stream_chunks.lock().unwrap() = vec![
        Bytes::from(
            json!({
                "result": {
                    "alternatives": [{
                        "message": {"role": "assistant", "text": "Hello"},
                        "status": "ALTERNATIVE_STATUS_FINAL",
                    }],
                    "usage": {"inputTextTokens": "3", "completionTokens": "1", "totalTokens": "4"},
                }
            })
            .to_string(),
        ),
    ];
    let model = build_model(transport.clone());

    let response = model
        .do_stream(v2t::CallOptions::new(user_prompt("hi")))
        .await
        .expect("stream");

    {
        let requests = transport.requests.lock().unwrap();
        let (_, body) = &requests[0];
        assert_eq!(body["completionOptions"]["stream"], json!(true));
    }
    assert_eq!(
        response
            .response_headers
            .as_ref()
            .and_then(|h| h.get("x-request-id"))
            .map(String::as_str),
        Some("stream-1")
    );

    let parts: Vec<v2t::StreamPart> = response.stream.try_collect().await.expect("stream parts");
    assert_eq!(parts.len(), 4);
    assert!(matches!(parts[0], v2t::StreamPart::StreamStart { .. }));
    match &parts[1] {
        v2t::StreamPart::TextDelta { id, delta } => {
            assert_eq!(id, "0");
            assert_eq!(delta, "Hello");
        }
        other => panic!("expected text delta, got {other:?}"),
    }
    assert!(matches!(parts[2], v2t::StreamPart::TextEnd { .. }));
    match &parts[3] {
        v2t::StreamPart::Finish { usage, .. } => assert_eq!(usage.output_tokens, Some(1)),
        other => panic!("expected finish, got {other:?}"),
    }
}
