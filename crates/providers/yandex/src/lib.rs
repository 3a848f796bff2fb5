//! Yandex Cloud Foundation Models provider aligned to the unified model interfaces.

pub mod error;
pub mod provider;
pub mod chat {
    pub mod api_types;
    pub mod convert;
    pub mod language_model;
    pub mod options;
    pub mod prepare_tools;
    pub mod stream;
}
pub mod embedding {
    pub mod embedding_model;
}
pub mod image {
    pub mod image_model;
}
pub mod transcription {
    pub mod transcription_model;
}

pub use chat::language_model::YandexChatLanguageModel;
pub use embedding::embedding_model::YandexEmbeddingModel;
pub use image::image_model::YandexImageModel;
pub use provider::{YandexProvider, YandexProviderSettings};
pub use transcription::transcription_model::YandexTranscriptionModel;

#[cfg(test)]
#[path = "../tests/chat_convert_tests.rs"]
mod chat_convert_tests;
#[cfg(test)]
#[path = "../tests/embedding_model_tests.rs"]
mod embedding_model_tests;
#[cfg(test)]
#[path = "../tests/image_model_tests.rs"]
mod image_model_tests;
#[cfg(test)]
#[path = "../tests/language_model_tests.rs"]
mod language_model_tests;
#[cfg(test)]
#[path = "../tests/prepare_tools_tests.rs"]
mod prepare_tools_tests;
#[cfg(test)]
#[path = "../tests/stream_tests.rs"]
mod stream_tests;
#[cfg(test)]
#[path = "../tests/transcription_model_tests.rs"]
mod transcription_model_tests;
