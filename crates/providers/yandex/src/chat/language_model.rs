use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::ai_sdk_core::transport::{HttpTransport, TransportConfig};
use crate::ai_sdk_core::{GenerateResponse, LanguageModel, SdkError, StreamResponse};
use crate::ai_sdk_types::v2 as v2t;

use crate::ai_sdk_providers_yandex::chat::api_types::{
    YandexCompletionEnvelope, YandexCompletionOptions, YandexCompletionRequest, YandexJsonSchema,
};
use crate::ai_sdk_providers_yandex::chat::convert::{
    convert_alternatives, convert_prompt, convert_usage,
};
use crate::ai_sdk_providers_yandex::chat::options::parse_yandex_chat_provider_options;
use crate::ai_sdk_providers_yandex::chat::prepare_tools::prepare_tools;
use crate::ai_sdk_providers_yandex::chat::stream::build_stream;
use crate::ai_sdk_providers_yandex::error::map_transport_error_to_sdk_error;

pub struct YandexChatConfig<T: HttpTransport = crate::reqwest_transport::ReqwestTransport> {
    pub folder_id: String,
    pub base_url: String,
    pub headers: Vec<(String, String)>,
    pub http: T,
    pub transport_cfg: TransportConfig,
}

pub struct YandexChatLanguageModel<T: HttpTransport = crate::reqwest_transport::ReqwestTransport> {
    model_id: String,
    cfg: YandexChatConfig<T>,
}

impl<T: HttpTransport> YandexChatLanguageModel<T> {
    pub fn new(model_id: impl Into<String>, cfg: YandexChatConfig<T>) -> Self {
        Self {
            model_id: model_id.into(),
            cfg,
        }
    }

    fn build_request_url(&self) -> String {
        let base = self.cfg.base_url.trim_end_matches('/');
        format!("{}/foundationModels/v1/completion", base)
    }

    fn build_request_headers(&self, options: &v2t::CallOptions) -> Vec<(String, String)> {
        let mut headers = self.cfg.headers.clone();
        for (k, v) in &options.headers {
            headers.retain(|(name, _)| !name.eq_ignore_ascii_case(k));
            headers.push((k.clone(), v.clone()));
        }
        headers
    }

    fn build_request_body(
        &self,
        options: &v2t::CallOptions,
        stream: bool,
    ) -> Result<(JsonValue, Vec<v2t::CallWarning>), SdkError> {
        let mut warnings: Vec<v2t::CallWarning> = vec![];
        if options.top_p.is_some() {
            warnings.push(v2t::CallWarning::UnsupportedSetting {
                setting: "topP".into(),
                details: None,
            });
        }

        let (messages, message_warnings) = convert_prompt(&options.prompt)?;
        warnings.extend(message_warnings);

        let prep = prepare_tools(&options.tools, &options.tool_choice);
        warnings.extend(prep.warnings);

        let po = parse_yandex_chat_provider_options(&options.provider_options);

        let (json_object, json_schema) = match &options.response_format {
            Some(v2t::ResponseFormat::Json {
                schema: Some(schema),
                ..
            }) => (None, Some(YandexJsonSchema {
                schema: schema.clone(),
            })),
            Some(v2t::ResponseFormat::Json { schema: None, .. }) => (Some(true), None),
            _ => (None, None),
        };

        let request = YandexCompletionRequest {
            model_uri: format!("gpt://{}/{}", self.cfg.folder_id, self.model_id),
            completion_options: YandexCompletionOptions {
                stream,
                temperature: options.temperature,
                max_tokens: options.max_output_tokens,
                reasoning_options: po.reasoning_options,
            },
            messages,
            tools: prep.tools,
            json_object,
            json_schema,
            parallel_tool_calls: po.parallel_tool_calls,
            tool_choice: prep.tool_choice,
        };

        Ok((serde_json::to_value(&request)?, warnings))
    }
}

#[async_trait]
impl<T: HttpTransport + Send + Sync> LanguageModel for YandexChatLanguageModel<T> {
    fn provider_name(&self) -> &'static str {
        "yandex-cloud"
    }
    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn do_generate(&self, options: v2t::CallOptions) -> Result<GenerateResponse, SdkError> {
        let (body, warnings) = self.build_request_body(&options, false)?;
        let url = self.build_request_url();
        let headers = self.build_request_headers(&options);

        let (response_body, response_headers) = self
            .cfg
            .http
            .post_json(&url, &headers, &body, &self.cfg.transport_cfg)
            .await
            .map_err(map_transport_error_to_sdk_error)?;

        tracing::debug!(
            target: "yandex_ai::chat",
            model = %self.model_id,
            "completion response received"
        );

        let envelope: YandexCompletionEnvelope = serde_json::from_value(response_body.clone())?;
        let (content, finish_reason) = convert_alternatives(&envelope.result.alternatives)?;
        let usage = envelope
            .result
            .usage
            .as_ref()
            .map(convert_usage)
            .unwrap_or_default();

        Ok(GenerateResponse {
            content,
            finish_reason,
            usage,
            request_body: Some(body),
            response_headers: Some(header_map(&response_headers)),
            response_body: Some(response_body),
            warnings,
        })
    }

    async fn do_stream(&self, options: v2t::CallOptions) -> Result<StreamResponse, SdkError> {
        let (body, warnings) = self.build_request_body(&options, true)?;
        let url = self.build_request_url();
        let headers = self.build_request_headers(&options);

        let resp = self
            .cfg
            .http
            .post_json_stream(&url, &headers, &body, &self.cfg.transport_cfg)
            .await
            .map_err(map_transport_error_to_sdk_error)?;
        let (byte_stream, response_headers) = T::into_stream(resp);

        tracing::debug!(
            target: "yandex_ai::chat",
            model = %self.model_id,
            "completion stream opened"
        );

        Ok(StreamResponse {
            stream: build_stream(byte_stream, warnings, options.include_raw_chunks),
            request_body: Some(body),
            response_headers: Some(header_map(&response_headers)),
        })
    }
}

fn header_map(pairs: &[(String, String)]) -> v2t::Headers {
    pairs.iter().cloned().collect::<HashMap<_, _>>()
}
