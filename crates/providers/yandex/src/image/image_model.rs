use std::time::{Duration, SystemTime};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::ai_sdk_core::transport::{HttpTransport, TransportConfig};
use crate::ai_sdk_core::{
    ImageData, ImageModel, ImageOptions, ImageResponse, ImageResponseMeta, ImageWarning, SdkError,
};

use crate::ai_sdk_providers_yandex::error::map_transport_error_to_sdk_error;

const POLL_INTERVAL: Duration = Duration::from_secs(1);
/// Upper bound on polling attempts so an operation the service never
/// completes cannot hang the caller forever.
const MAX_POLL_ATTEMPTS: u32 = 300;

#[derive(Debug, Clone, Serialize)]
struct YandexImageMessage {
    text: String,
    /// Negative weights mark negative prompts.
    weight: i32,
}

#[derive(Debug, Clone, Serialize)]
struct YandexAspectRatio {
    width: u32,
    height: u32,
}

#[derive(Debug, Clone, Serialize)]
struct YandexGenerationOptions {
    #[serde(rename = "mimeType")]
    mime_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    #[serde(rename = "aspectRatio", skip_serializing_if = "Option::is_none")]
    aspect_ratio: Option<YandexAspectRatio>,
}

#[derive(Debug, Clone, Serialize)]
struct YandexImageGenerationRequest {
    #[serde(rename = "modelUri")]
    model_uri: String,
    messages: Vec<YandexImageMessage>,
    #[serde(rename = "generationOptions")]
    generation_options: YandexGenerationOptions,
}

#[derive(Debug, Clone, Deserialize)]
struct YandexOperation {
    id: String,
    #[serde(default)]
    done: bool,
    #[serde(default)]
    response: Option<YandexOperationResponse>,
    #[serde(default)]
    error: Option<YandexOperationError>,
}

#[derive(Debug, Clone, Deserialize)]
struct YandexOperationResponse {
    #[serde(default)]
    image: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct YandexOperationError {
    message: String,
}

pub struct YandexImageConfig<T: HttpTransport = crate::reqwest_transport::ReqwestTransport> {
    pub folder_id: String,
    pub base_url: String,
    pub operations_base_url: String,
    pub headers: Vec<(String, String)>,
    pub http: T,
    pub transport_cfg: TransportConfig,
}

pub struct YandexImageModel<T: HttpTransport = crate::reqwest_transport::ReqwestTransport> {
    model_id: String,
    cfg: YandexImageConfig<T>,
}

impl<T: HttpTransport> YandexImageModel<T> {
    pub fn new(model_id: impl Into<String>, cfg: YandexImageConfig<T>) -> Self {
        Self {
            model_id: model_id.into(),
            cfg,
        }
    }

    fn build_request_url(&self) -> String {
        let base = self.cfg.base_url.trim_end_matches('/');
        format!("{}/foundationModels/v1/imageGenerationAsync", base)
    }

    fn build_operation_url(&self, operation_id: &str) -> String {
        let base = self.cfg.operations_base_url.trim_end_matches('/');
        format!("{}/operations/{}", base, operation_id)
    }

    async fn poll_operation(&self, operation_id: &str) -> Result<YandexOperation, SdkError> {
        let url = self.build_operation_url(operation_id);
        for _ in 0..MAX_POLL_ATTEMPTS {
            tokio::time::sleep(POLL_INTERVAL).await;
            let (body, _) = self
                .cfg
                .http
                .get_json(&url, &self.cfg.headers, &self.cfg.transport_cfg)
                .await
                .map_err(map_transport_error_to_sdk_error)?;
            let operation: YandexOperation = serde_json::from_value(body)?;
            if let Some(error) = &operation.error {
                return Err(SdkError::Operation {
                    message: error.message.clone(),
                });
            }
            if operation.done {
                return Ok(operation);
            }
            tracing::debug!(
                target: "yandex_ai::image",
                operation_id,
                "image generation still in progress"
            );
        }
        Err(SdkError::Timeout)
    }
}

fn parse_aspect_ratio(
    value: &str,
    warnings: &mut Vec<ImageWarning>,
) -> Option<YandexAspectRatio> {
    let mut parts = value.splitn(2, ':');
    let width = parts.next().and_then(|p| p.trim().parse::<u32>().ok());
    let height = parts.next().and_then(|p| p.trim().parse::<u32>().ok());
    match (width, height) {
        (Some(width), Some(height)) => Some(YandexAspectRatio { width, height }),
        _ => {
            warnings.push(ImageWarning::Unsupported {
                feature: "aspectRatio".into(),
                details: Some(format!("expected \"W:H\", got \"{value}\"")),
            });
            None
        }
    }
}

#[async_trait]
impl<T: HttpTransport + Send + Sync> ImageModel for YandexImageModel<T> {
    fn provider_name(&self) -> &'static str {
        "yandex-cloud"
    }
    fn model_id(&self) -> &str {
        &self.model_id
    }
    fn max_images_per_call(&self) -> Option<usize> {
        Some(1)
    }

    async fn do_generate(&self, options: ImageOptions) -> Result<ImageResponse, SdkError> {
        let prompt = options.prompt.clone().ok_or(SdkError::InvalidArgument {
            message: "prompt is required for image generation".into(),
        })?;

        let mut warnings: Vec<ImageWarning> = vec![];
        if options.n > 1 {
            warnings.push(ImageWarning::Unsupported {
                feature: "n".into(),
                details: Some("the model generates one image per call".into()),
            });
        }
        let aspect_ratio = options
            .aspect_ratio
            .as_deref()
            .and_then(|value| parse_aspect_ratio(value, &mut warnings));

        let request = YandexImageGenerationRequest {
            model_uri: format!("art://{}/{}", self.cfg.folder_id, self.model_id),
            messages: vec![YandexImageMessage {
                text: prompt,
                weight: 1,
            }],
            generation_options: YandexGenerationOptions {
                mime_type: "image/png".into(),
                seed: options.seed,
                aspect_ratio,
            },
        };
        let body = serde_json::to_value(&request)?;

        let mut headers = self.cfg.headers.clone();
        for (k, v) in &options.headers {
            headers.retain(|(name, _)| !name.eq_ignore_ascii_case(k));
            headers.push((k.clone(), v.clone()));
        }

        let (initial_body, response_headers): (JsonValue, _) = self
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
        let initial: YandexOperation = serde_json::from_value(initial_body)?;

        let operation = if initial.done {
            initial
        } else {
            self.poll_operation(&initial.id).await?
        };

        if let Some(error) = &operation.error {
            return Err(SdkError::Operation {
                message: error.message.clone(),
            });
        }
        let image = operation
            .response
            .as_ref()
            .and_then(|r| r.image.clone())
            .ok_or(SdkError::Operation {
                message: "image generation returned no image".into(),
            })?;

        Ok(ImageResponse {
            images: vec![ImageData::Base64(image)],
            warnings,
            response: ImageResponseMeta {
                timestamp: SystemTime::now(),
                model_id: self.model_id.clone(),
                headers: Some(response_headers.into_iter().collect()),
            },
            response_body: None,
            request_body: Some(body),
        })
    }
}
