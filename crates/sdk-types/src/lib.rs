//! Provider-neutral type definitions for the unified model interfaces.
//!
//! These types are the vendor-independent contract that application code
//! depends on: prompts, content blocks, streaming parts, and the option
//! shapes for embedding, image-generation, and transcription calls.

pub mod embedding;
pub mod image;
pub mod transcription;
pub mod v2;
