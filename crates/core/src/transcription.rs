use std::time::SystemTime;

use crate::ai_sdk_types::transcription as trt;
use crate::ai_sdk_types::v2 as v2t;

use crate::core::SdkError;

#[derive(Debug, Clone)]
pub struct TranscriptionResponseMeta {
    pub timestamp: SystemTime,
    pub model_id: String,
    pub headers: Option<v2t::Headers>,
}

#[derive(Debug, Clone)]
pub struct TranscriptionResponse {
    /// Full recognized text.
    pub text: String,
    /// Detected language, if reported.
    pub language: Option<String>,
    /// Audio duration in seconds, if reported.
    pub duration_seconds: Option<f64>,
    pub warnings: Vec<v2t::CallWarning>,
    pub response: TranscriptionResponseMeta,
    pub response_body: Option<serde_json::Value>,
    pub request_body: Option<String>,
}

#[async_trait::async_trait]
pub trait TranscriptionModel: Send + Sync {
    /// Implemented interface version; constant "v2" for all models.
    fn specification_version(&self) -> &'static str {
        "v2"
    }
    /// Provider name for logging/telemetry.
    fn provider_name(&self) -> &'static str;
    /// Provider-specific model identifier.
    fn model_id(&self) -> &str;

    async fn do_transcribe(
        &self,
        options: trt::TranscriptionOptions,
    ) -> Result<TranscriptionResponse, SdkError>;
}
