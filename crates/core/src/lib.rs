pub mod embedding;
pub mod error;
pub mod image;
pub mod json;
pub mod transcription;
pub mod transport;
pub mod v2;

pub use crate::core::embedding::{EmbedResponse, EmbeddingModel};
pub use crate::core::error::{SdkError, TransportError};
pub use crate::core::image::{ImageModel, ImageResponse, ImageResponseMeta};
pub use crate::core::transcription::{
    TranscriptionModel, TranscriptionResponse, TranscriptionResponseMeta,
};

// Re-export the LanguageModel trait and typed surfaces at the crate root
pub use crate::core::v2::{GenerateResponse, LanguageModel, PartStream, StreamResponse};
// Convenience re-exports of common types
pub use crate::ai_sdk_types::embedding::{EmbedOptions, EmbedUsage, Embedding};
pub use crate::ai_sdk_types::image::{ImageData, ImageOptions, ImageWarning};
pub use crate::ai_sdk_types::transcription::TranscriptionOptions;
pub use crate::ai_sdk_types::v2 as types;
