use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::v2::{headers_is_empty, provider_options_is_empty, ProviderOptions};

/// Input for a speech-to-text call: one complete audio payload plus its
/// media type. Recognition parameters (language, audio format, sample rate)
/// travel in `provider_options` since they are provider-specific.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TranscriptionOptions {
    #[serde(default, with = "serde_bytes")]
    pub audio: Vec<u8>,
    #[serde(default, rename = "mediaType")]
    pub media_type: String,
    #[serde(default, skip_serializing_if = "headers_is_empty")]
    pub headers: HashMap<String, String>,
    #[serde(
        default,
        skip_serializing_if = "provider_options_is_empty",
        rename = "providerOptions"
    )]
    pub provider_options: ProviderOptions,
}

impl TranscriptionOptions {
    pub fn new(audio: Vec<u8>, media_type: impl Into<String>) -> Self {
        Self {
            audio,
            media_type: media_type.into(),
            ..Default::default()
        }
    }
}
