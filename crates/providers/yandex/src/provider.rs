use crate::ai_sdk_core::transport::TransportConfig;
use crate::ai_sdk_core::SdkError;

use crate::ai_sdk_providers_yandex::chat::language_model::{
    YandexChatConfig, YandexChatLanguageModel,
};
use crate::ai_sdk_providers_yandex::embedding::embedding_model::{
    YandexEmbeddingConfig, YandexEmbeddingModel,
};
use crate::ai_sdk_providers_yandex::image::image_model::{YandexImageConfig, YandexImageModel};
use crate::ai_sdk_providers_yandex::transcription::transcription_model::{
    YandexTranscriptionConfig, YandexTranscriptionModel,
};
use crate::reqwest_transport::ReqwestTransport;

pub const DEFAULT_BASE_URL: &str = "https://llm.api.cloud.yandex.net";
pub const DEFAULT_OPERATIONS_BASE_URL: &str = "https://operation.api.cloud.yandex.net";
pub const DEFAULT_STT_BASE_URL: &str = "https://stt.api.cloud.yandex.net";

/// Provider configuration. The API key and folder id fall back to the
/// `YANDEX_API_KEY` and `YANDEX_FOLDER_ID` environment variables.
#[derive(Debug, Clone, Default)]
pub struct YandexProviderSettings {
    pub folder_id: Option<String>,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub operations_base_url: Option<String>,
    pub stt_base_url: Option<String>,
    pub transport_cfg: Option<TransportConfig>,
}

/// Factory for the Yandex Cloud model surfaces. Credentials are immutable
/// configuration; one provider instance can serve concurrent calls.
pub struct YandexProvider {
    folder_id: String,
    base_url: String,
    operations_base_url: String,
    stt_base_url: String,
    headers: Vec<(String, String)>,
    transport_cfg: TransportConfig,
}

impl YandexProvider {
    pub fn new(settings: YandexProviderSettings) -> Result<Self, SdkError> {
        let api_key = settings
            .api_key
            .or_else(|| std::env::var("YANDEX_API_KEY").ok())
            .ok_or(SdkError::InvalidArgument {
                message: "missing API key: set YandexProviderSettings.api_key or YANDEX_API_KEY"
                    .into(),
            })?;
        let folder_id = settings
            .folder_id
            .or_else(|| std::env::var("YANDEX_FOLDER_ID").ok())
            .ok_or(SdkError::InvalidArgument {
                message:
                    "missing folder id: set YandexProviderSettings.folder_id or YANDEX_FOLDER_ID"
                        .into(),
            })?;

        Ok(Self {
            folder_id,
            base_url: settings
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            operations_base_url: settings
                .operations_base_url
                .unwrap_or_else(|| DEFAULT_OPERATIONS_BASE_URL.to_string()),
            stt_base_url: settings
                .stt_base_url
                .unwrap_or_else(|| DEFAULT_STT_BASE_URL.to_string()),
            headers: build_default_headers(&api_key),
            transport_cfg: settings.transport_cfg.unwrap_or_default(),
        })
    }

    pub fn chat(&self, model_id: impl Into<String>) -> Result<YandexChatLanguageModel, SdkError> {
        Ok(YandexChatLanguageModel::new(
            model_id,
            YandexChatConfig {
                folder_id: self.folder_id.clone(),
                base_url: self.base_url.clone(),
                headers: self.headers.clone(),
                http: self.transport()?,
                transport_cfg: self.transport_cfg.clone(),
            },
        ))
    }

    pub fn embedding(&self, model_id: impl Into<String>) -> Result<YandexEmbeddingModel, SdkError> {
        Ok(YandexEmbeddingModel::new(
            model_id,
            YandexEmbeddingConfig {
                folder_id: self.folder_id.clone(),
                base_url: self.base_url.clone(),
                headers: self.headers.clone(),
                http: self.transport()?,
                transport_cfg: self.transport_cfg.clone(),
            },
        ))
    }

    pub fn image(&self, model_id: impl Into<String>) -> Result<YandexImageModel, SdkError> {
        Ok(YandexImageModel::new(
            model_id,
            YandexImageConfig {
                folder_id: self.folder_id.clone(),
                base_url: self.base_url.clone(),
                operations_base_url: self.operations_base_url.clone(),
                headers: self.headers.clone(),
                http: self.transport()?,
                transport_cfg: self.transport_cfg.clone(),
            },
        ))
    }

    pub fn transcription(&self) -> Result<YandexTranscriptionModel, SdkError> {
        Ok(YandexTranscriptionModel::new(YandexTranscriptionConfig {
            base_url: self.stt_base_url.clone(),
            headers: self.headers.clone(),
            http: self.transport()?,
            transport_cfg: self.transport_cfg.clone(),
        }))
    }

    fn transport(&self) -> Result<ReqwestTransport, SdkError> {
        ReqwestTransport::try_new(&self.transport_cfg).map_err(SdkError::Transport)
    }
}

fn build_default_headers(api_key: &str) -> Vec<(String, String)> {
    vec![
        ("content-type".to_string(), "application/json".to_string()),
        ("authorization".to_string(), format!("Api-Key {api_key}")),
    ]
}
