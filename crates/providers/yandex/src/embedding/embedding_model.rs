use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

use crate::ai_sdk_core::transport::{HttpTransport, TransportConfig};
use crate::ai_sdk_core::{EmbedOptions, EmbedResponse, EmbedUsage, EmbeddingModel, SdkError};

use crate::ai_sdk_providers_yandex::error::map_transport_error_to_sdk_error;

#[derive(Debug, Clone, Serialize)]
struct YandexEmbeddingRequest {
    #[serde(rename = "modelUri")]
    model_uri: String,
    text: String,
}

#[derive(Debug, Clone, Deserialize)]
struct YandexEmbeddingResponse {
    embedding: Vec<f64>,
    #[serde(default, rename = "numTokens", deserialize_with = "u64_from_string_or_number")]
    num_tokens: Option<u64>,
}

/// The embeddings endpoint has been observed returning token counts both as
/// JSON numbers and as decimal strings.
fn u64_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<JsonValue>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        JsonValue::Number(n) => n.as_u64(),
        JsonValue::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }))
}

pub struct YandexEmbeddingConfig<T: HttpTransport = crate::reqwest_transport::ReqwestTransport> {
    pub folder_id: String,
    pub base_url: String,
    pub headers: Vec<(String, String)>,
    pub http: T,
    pub transport_cfg: TransportConfig,
}

pub struct YandexEmbeddingModel<T: HttpTransport = crate::reqwest_transport::ReqwestTransport> {
    model_id: String,
    cfg: YandexEmbeddingConfig<T>,
}

impl<T: HttpTransport> YandexEmbeddingModel<T> {
    pub fn new(model_id: impl Into<String>, cfg: YandexEmbeddingConfig<T>) -> Self {
        Self {
            model_id: model_id.into(),
            cfg,
        }
    }

    fn build_request_url(&self) -> String {
        let base = self.cfg.base_url.trim_end_matches('/');
        format!("{}/foundationModels/v1/textEmbedding", base)
    }
}

#[async_trait]
impl<T: HttpTransport + Send + Sync> EmbeddingModel for YandexEmbeddingModel<T> {
    fn provider_name(&self) -> &'static str {
        "yandex-cloud"
    }
    fn model_id(&self) -> &str {
        &self.model_id
    }
    fn supports_parallel_calls(&self) -> bool {
        false
    }

    async fn do_embed(&self, options: EmbedOptions) -> Result<EmbedResponse, SdkError> {
        // The endpoint embeds one text per call; multiple values are joined.
        let request = YandexEmbeddingRequest {
            model_uri: format!("emb://{}/{}", self.cfg.folder_id, self.model_id),
            text: options.values.join(" "),
        };
        let body = serde_json::to_value(&request)?;

        let mut headers = self.cfg.headers.clone();
        for (k, v) in &options.headers {
            headers.retain(|(name, _)| !name.eq_ignore_ascii_case(k));
            headers.push((k.clone(), v.clone()));
        }

        let (response_body, response_headers) = self
            .cfg
            .http
            .post_json(
                &self.build_request_url(),
                &headers,
                &body,
                &self.cfg.transport_cfg,
            )
            .await
            .map_err(map_transport_error_to_sdk_error)?;

        let parsed: YandexEmbeddingResponse = serde_json::from_value(response_body.clone())?;

        Ok(EmbedResponse {
            embeddings: vec![parsed.embedding],
            usage: Some(EmbedUsage {
                tokens: parsed.num_tokens,
            }),
            response_headers: Some(response_headers.into_iter().collect()),
            response_body: Some(response_body),
            request_body: Some(body),
        })
    }
}
