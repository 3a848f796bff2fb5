//! Streaming transducer: vendor snapshot chunks to unified stream parts.

use bytes::Bytes;
use futures_core::Stream;
use futures_util::StreamExt;
use serde_json::Value as JsonValue;
use std::pin::Pin;

use crate::ai_sdk_core::error::TransportError;
use crate::ai_sdk_core::PartStream;
use crate::ai_sdk_streaming_json::JsonChunkDecoder;
use crate::ai_sdk_types::v2 as v2t;

use crate::ai_sdk_providers_yandex::chat::api_types::YandexCompletionEnvelope;
use crate::ai_sdk_providers_yandex::chat::convert::{convert_alternatives, convert_usage};
use crate::ai_sdk_providers_yandex::error::map_transport_error_to_sdk_error;

/// All text deltas of one response share this logical block id; the vendor
/// does not support multiple concurrent text blocks.
pub(crate) const TEXT_BLOCK_ID: &str = "0";

type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, TransportError>> + Send>>;

/// Turn the vendor's chunked byte stream into the unified event sequence.
///
/// Every chunk is one self-contained JSON snapshot of the in-progress
/// alternatives. Usage and finish reason are last-value-wins across chunks;
/// the terminal finish event is only emitted at stream end. A chunk that
/// fails to parse terminates the stream with an error.
pub fn build_stream(
    inner: ByteStream,
    warnings: Vec<v2t::CallWarning>,
    include_raw: bool,
) -> PartStream {
    let s = async_stream::try_stream! {
        yield v2t::StreamPart::StreamStart { warnings };

        let mut inner = inner;
        let mut decoder = JsonChunkDecoder::new();
        let mut usage = v2t::Usage::default();
        let mut finish_reason = v2t::FinishReason::default();

        while let Some(chunk) = inner.next().await {
            let chunk = chunk.map_err(map_transport_error_to_sdk_error)?;
            let docs: Vec<Bytes> = decoder.push(&chunk).collect();
            for doc in docs {
                if include_raw {
                    yield v2t::StreamPart::Raw {
                        raw_value: JsonValue::String(
                            String::from_utf8_lossy(&doc).into_owned(),
                        ),
                    };
                }

                let envelope: YandexCompletionEnvelope = serde_json::from_slice(&doc)?;
                if let Some(chunk_usage) = &envelope.result.usage {
                    usage = convert_usage(chunk_usage);
                }

                let (content, chunk_finish) =
                    convert_alternatives(&envelope.result.alternatives)?;
                finish_reason = chunk_finish;

                for block in content {
                    match block {
                        v2t::Content::Text { text } => {
                            yield v2t::StreamPart::TextDelta {
                                id: TEXT_BLOCK_ID.into(),
                                delta: text,
                            };
                        }
                        v2t::Content::ToolCall(call) => {
                            // Arguments always arrive whole, so the input
                            // start/end pair brackets a single tool-call event.
                            yield v2t::StreamPart::ToolInputStart {
                                id: call.tool_call_id.clone(),
                                tool_name: call.tool_name.clone(),
                            };
                            yield v2t::StreamPart::ToolInputEnd {
                                id: call.tool_call_id.clone(),
                            };
                            yield v2t::StreamPart::ToolCall(call);
                        }
                        // The vendor never streams tool results.
                        v2t::Content::ToolResult { .. } => {}
                    }
                }
            }
        }

        // A truncated trailing document is a protocol error.
        if let Some(leftover) = decoder.finish() {
            let _: YandexCompletionEnvelope = serde_json::from_slice(&leftover)?;
        }

        yield v2t::StreamPart::TextEnd {
            id: TEXT_BLOCK_ID.into(),
        };
        yield v2t::StreamPart::Finish {
            usage,
            finish_reason,
        };
    };
    Box::pin(s)
}
