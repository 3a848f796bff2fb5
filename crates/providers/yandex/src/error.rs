use crate::ai_sdk_core::error::{map_http_status_to_upstream_error, SdkError, TransportError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YandexErrorInner {
    pub code: Option<i64>,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YandexErrorData {
    pub error: YandexErrorInner,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YandexFlatError {
    pub message: String,
}

/// Attempt to parse a Yandex JSON error body and map to SdkError.
///
/// Foundation Models endpoints wrap the error in an `error` object; the
/// operations and STT endpoints return a flat `{code, message}` body.
pub fn map_transport_error_to_sdk_error(te: TransportError) -> SdkError {
    match te {
        TransportError::HttpStatus {
            status,
            body,
            headers,
            ..
        } => {
            let message = serde_json::from_str::<YandexErrorData>(&body)
                .map(|parsed| parsed.error.message)
                .or_else(|_| {
                    serde_json::from_str::<YandexFlatError>(&body).map(|parsed| parsed.message)
                })
                .ok();
            map_http_status_to_upstream_error(status, body, headers, message)
        }
        other => SdkError::Transport(other),
    }
}
