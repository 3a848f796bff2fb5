use serde::{Deserialize, Serialize};

use crate::ai_sdk_types::v2 as v2t;

use crate::ai_sdk_providers_yandex::chat::api_types::YandexReasoningMode;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct YandexChatProviderOptions {
    /// Internal-reasoning configuration forwarded into `completionOptions`.
    pub reasoning_options: Option<YandexReasoningMode>,
    /// Whether the model may emit several tool calls in one response.
    pub parallel_tool_calls: Option<bool>,
}

/// Parse providerOptions under the "yandex" scope; unknown keys are ignored.
pub fn parse_yandex_chat_provider_options(
    provider_options: &v2t::ProviderOptions,
) -> YandexChatProviderOptions {
    let mut parsed = YandexChatProviderOptions::default();
    if let Some(map) = provider_options.get("yandex") {
        if let Some(mode) = map
            .get("reasoningOptions")
            .and_then(|v| serde_json::from_value::<YandexReasoningMode>(v.clone()).ok())
        {
            parsed.reasoning_options = Some(mode);
        }
        if let Some(parallel) = map.get("parallelToolCalls").and_then(|v| v.as_bool()) {
            parsed.parallel_tool_calls = Some(parallel);
        }
    }
    parsed
}
