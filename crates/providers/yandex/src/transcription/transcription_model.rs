use std::time::SystemTime;

use async_trait::async_trait;
use bytes::Bytes;
use serde::Deserialize;

use crate::ai_sdk_core::transport::{HttpTransport, TransportConfig};
use crate::ai_sdk_core::{
    SdkError, TranscriptionModel, TranscriptionOptions, TranscriptionResponse,
    TranscriptionResponseMeta,
};
use crate::ai_sdk_types::v2 as v2t;

use crate::ai_sdk_providers_yandex::error::map_transport_error_to_sdk_error;

/// Literal placeholder the service convention uses for an empty transcript
/// ("no sounds" in Russian).
const EMPTY_TRANSCRIPT_PLACEHOLDER: &str = "нет звуков";

#[derive(Debug, Clone, Deserialize)]
struct YandexRecognizeResponse {
    #[serde(default)]
    result: String,
}

pub struct YandexTranscriptionConfig<T: HttpTransport = crate::reqwest_transport::ReqwestTransport>
{
    pub base_url: String,
    pub headers: Vec<(String, String)>,
    pub http: T,
    pub transport_cfg: TransportConfig,
}

pub struct YandexTranscriptionModel<T: HttpTransport = crate::reqwest_transport::ReqwestTransport>
{
    cfg: YandexTranscriptionConfig<T>,
}

impl<T: HttpTransport> YandexTranscriptionModel<T> {
    pub fn new(cfg: YandexTranscriptionConfig<T>) -> Self {
        Self { cfg }
    }

    fn build_request_url(&self, query: &str) -> String {
        let base = self.cfg.base_url.trim_end_matches('/');
        format!("{}/speech/v1/stt:recognize?{}", base, query)
    }
}

/// Recognition parameters travel as a query string; unset options take the
/// service defaults used by this bridge (auto language, OggOpus, 48 kHz).
fn build_query_string(provider_options: &v2t::ProviderOptions) -> String {
    let opts = provider_options.get("yandex");
    let get_str = |key: &str, default: &str| -> String {
        opts.and_then(|m| m.get(key))
            .and_then(|v| v.as_str())
            .unwrap_or(default)
            .to_string()
    };
    let get_bool = |key: &str| -> bool {
        opts.and_then(|m| m.get(key))
            .and_then(|v| v.as_bool())
            .unwrap_or(false)
    };
    let sample_rate = opts
        .and_then(|m| m.get("sampleRateHertz"))
        .and_then(|v| v.as_u64())
        .unwrap_or(48_000);

    let params = [
        ("lang", get_str("lang", "auto")),
        ("format", get_str("format", "oggopus")),
        ("sampleRateHertz", sample_rate.to_string()),
        ("topic", get_str("topic", "general")),
        ("profanityFilter", get_bool("profanityFilter").to_string()),
        ("rawResults", get_bool("rawResults").to_string()),
    ];
    params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

#[async_trait]
impl<T: HttpTransport + Send + Sync> TranscriptionModel for YandexTranscriptionModel<T> {
    fn provider_name(&self) -> &'static str {
        "yandex-cloud"
    }
    fn model_id(&self) -> &str {
        "stt:recognize"
    }

    async fn do_transcribe(
        &self,
        options: TranscriptionOptions,
    ) -> Result<TranscriptionResponse, SdkError> {
        let query = build_query_string(&options.provider_options);
        let url = self.build_request_url(&query);

        let mut headers = self.cfg.headers.clone();
        for (k, v) in &options.headers {
            headers.retain(|(name, _)| !name.eq_ignore_ascii_case(k));
            headers.push((k.clone(), v.clone()));
        }

        let (response_body, response_headers) = self
            .cfg
            .http
            .post_bytes(
                &url,
                &headers,
                "application/octet-stream",
                Bytes::from(options.audio),
                &self.cfg.transport_cfg,
            )
            .await
            .map_err(map_transport_error_to_sdk_error)?;

        let parsed: YandexRecognizeResponse = serde_json::from_value(response_body.clone())?;
        let text = if parsed.result.is_empty() {
            EMPTY_TRANSCRIPT_PLACEHOLDER.to_string()
        } else {
            parsed.result
        };

        Ok(TranscriptionResponse {
            text,
            language: None,
            duration_seconds: None,
            warnings: vec![],
            response: TranscriptionResponseMeta {
                timestamp: SystemTime::now(),
                model_id: self.model_id().to_string(),
                headers: Some(response_headers.into_iter().collect()),
            },
            response_body: Some(response_body),
            request_body: Some(query),
        })
    }
}
