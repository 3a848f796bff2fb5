use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("timeout")]
    Timeout,
    #[error("cancelled")]
    Cancelled,
    #[error("upstream error (status {status}): {message}")]
    Upstream {
        status: u16,
        message: String,
        #[source]
        source: Option<Box<TransportError>>,
    },
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
    /// Input contained a construct the provider cannot express.
    #[error("unsupported: {feature}")]
    Unsupported { feature: String },
    /// A long-running operation reported a terminal failure.
    #[error("operation failed: {message}")]
    Operation { message: String },
}

impl SdkError {
    /// Format error details for better debugging visibility
    pub fn format_details(&self) -> String {
        match self {
            SdkError::Upstream {
                status,
                message,
                source,
            } => {
                let mut msg = format!("http status {}: {}", status, message);

                // Add source body if different from message
                if let Some(src) = source {
                    if let TransportError::HttpStatus { body, .. } = src.as_ref() {
                        if !message.contains(body) && !body.is_empty() {
                            msg.push_str(&format!(" [body: {}]", body));
                        }
                    }
                }

                msg
            }
            SdkError::Timeout => "timeout".to_string(),
            SdkError::Unauthorized => "unauthorized".to_string(),
            SdkError::Cancelled => "cancelled".to_string(),
            SdkError::Transport(te) => format!("transport error: {}", te),
            SdkError::Serde(se) => format!("serde error: {}", se),
            SdkError::InvalidArgument { message } => format!("invalid argument: {}", message),
            SdkError::Unsupported { feature } => format!("unsupported: {}", feature),
            SdkError::Operation { message } => format!("operation failed: {}", message),
        }
    }
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("http status {status}: {sanitized}")]
    HttpStatus {
        status: u16,
        /// upstream body (should be treated as sensitive; only log sanitized)
        body: String,
        /// Sanitized message for display
        sanitized: String,
        /// Upstream response headers (lowercased keys where possible)
        headers: Vec<(String, String)>,
    },
    #[error("network: {0}")]
    Network(String),
    #[error("connect timeout after {0:?}")]
    ConnectTimeout(Duration),
    #[error("idle read timeout after {0:?}")]
    IdleReadTimeout(Duration),
    #[error("body read error: {0}")]
    BodyRead(String),
    #[error("stream closed")]
    StreamClosed,
    #[error("other: {0}")]
    Other(String),
}

impl TransportError {
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
    pub fn sanitized_message(&self) -> String {
        match self {
            TransportError::HttpStatus { status, .. } => format!("http status {status}"),
            _ => self.to_string(),
        }
    }
}

pub fn http_status_fallback_message(status: u16) -> String {
    format!("http status {status}")
}

pub fn build_http_status_transport_error(
    status: u16,
    body: String,
    headers: Vec<(String, String)>,
) -> TransportError {
    TransportError::HttpStatus {
        status,
        body,
        sanitized: http_status_fallback_message(status),
        headers,
    }
}

pub fn map_http_status_to_upstream_error(
    status: u16,
    body: String,
    headers: Vec<(String, String)>,
    message: Option<String>,
) -> SdkError {
    let fallback = http_status_fallback_message(status);
    let source = build_http_status_transport_error(status, body, headers);
    SdkError::Upstream {
        status,
        message: message.unwrap_or(fallback),
        source: Some(Box::new(source)),
    }
}

pub fn display_body_for_error(body: &str) -> String {
    let trimmed = body.trim();
    let looks_like_json = trimmed.starts_with('{') || trimmed.starts_with('[');
    if looks_like_json {
        match serde_json::from_str::<Value>(trimmed) {
            Ok(v) => v.to_string(), // minified JSON
            Err(_) => format!("{} bytes", body.len()),
        }
    } else {
        format!("{} bytes", body.len())
    }
}
