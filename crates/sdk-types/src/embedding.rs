use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::v2::{headers_is_empty, provider_options_is_empty, ProviderOptions};

/// One embedding vector. The vendor reports components as doubles.
pub type Embedding = Vec<f64>;

/// Input for an embedding call: the texts to embed plus per-request
/// header and provider-option overrides.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EmbedOptions {
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(default, skip_serializing_if = "headers_is_empty")]
    pub headers: HashMap<String, String>,
    #[serde(
        default,
        skip_serializing_if = "provider_options_is_empty",
        rename = "providerOptions"
    )]
    pub provider_options: ProviderOptions,
}

impl EmbedOptions {
    pub fn new(values: Vec<String>) -> Self {
        Self {
            values,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct EmbedUsage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens: Option<u64>,
}
