#[path = "../crates/sdk-types/src/lib.rs"]
pub mod types;
#[path = "../crates/core/src/lib.rs"]
pub mod core;
#[path = "../crates/streaming-json/src/lib.rs"]
pub mod streaming_json;
#[path = "../crates/transports/reqwest/src/lib.rs"]
pub mod transport_reqwest;

#[path = "../crates/providers/yandex/src/lib.rs"]
pub mod provider_yandex;

pub mod transports {
    pub use crate::transport_reqwest as reqwest;
}

pub mod providers {
    pub use crate::provider_yandex as yandex;
}

pub(crate) use crate::core as ai_sdk_core;
#[allow(unused_imports)]
pub(crate) use crate::provider_yandex as ai_sdk_providers_yandex;
pub(crate) use crate::streaming_json as ai_sdk_streaming_json;
pub(crate) use crate::transport_reqwest as reqwest_transport;
pub(crate) use crate::types as ai_sdk_types;
